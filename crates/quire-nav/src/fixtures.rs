//! Shared test declarations.

use crate::decl::{LocaleDecl, NavigationDecl, SidebarDecl};
use crate::entry::{NavEntry, SidebarSection};

pub(crate) fn locale_decl(id: &str, link: Option<&str>) -> LocaleDecl {
    LocaleDecl {
        id: id.to_owned(),
        label: id.to_owned(),
        lang: None,
        link: link.map(str::to_owned),
        nav: Vec::new(),
        sidebar: Vec::new(),
    }
}

fn sidebar(prefix: &str, title: &str, items: &[(&str, &str)]) -> SidebarDecl {
    SidebarDecl {
        prefix: prefix.to_owned(),
        sections: vec![SidebarSection::new(
            title,
            items.iter().map(|(text, link)| NavEntry::new(*text, *link)).collect(),
        )],
    }
}

fn entries(items: &[(&str, &str)]) -> Vec<NavEntry> {
    items.iter().map(|(text, link)| NavEntry::new(*text, *link)).collect()
}

/// Japanese root locale with the full game documentation tree, plus a
/// partial English locale (design and programming only).
pub(crate) fn gamedev_decl() -> NavigationDecl {
    let ja = LocaleDecl {
        id: "root".to_owned(),
        label: "日本語".to_owned(),
        lang: Some("ja".to_owned()),
        link: None,
        nav: entries(&[
            ("ホーム", "/"),
            ("ゲーム設計", "/design/"),
            ("プログラミング", "/programming/"),
            ("アート", "/art/"),
            ("サウンド", "/sound/"),
            ("API リファレンス", "/api/"),
        ]),
        sidebar: vec![
            sidebar(
                "/design/",
                "ゲーム設計",
                &[
                    ("概要", "/design/"),
                    ("ゲームデザイン文書", "/design/game-design-document"),
                    ("レベルデザイン", "/design/level-design"),
                    ("UI/UXデザイン", "/design/ui-ux-design"),
                    ("バランス調整", "/design/balancing"),
                ],
            ),
            sidebar(
                "/programming/",
                "プログラミング",
                &[
                    ("概要", "/programming/"),
                    ("アーキテクチャ", "/programming/architecture"),
                    ("ゲームループ", "/programming/game-loop"),
                    ("物理エンジン", "/programming/physics"),
                ],
            ),
            sidebar(
                "/art/",
                "アート",
                &[("概要", "/art/"), ("2Dアート", "/art/2d-art")],
            ),
            sidebar(
                "/sound/",
                "サウンド",
                &[("概要", "/sound/"), ("BGM制作", "/sound/bgm")],
            ),
            sidebar(
                "/api/",
                "API リファレンス",
                &[("概要", "/api/"), ("Player クラス", "/api/player")],
            ),
        ],
    };

    let en = LocaleDecl {
        id: "en".to_owned(),
        label: "English".to_owned(),
        lang: Some("en-US".to_owned()),
        link: None,
        nav: entries(&[
            ("Home", "/en/"),
            ("Game Design", "/en/design/"),
            ("Programming", "/en/programming/"),
        ]),
        sidebar: vec![
            sidebar(
                "/en/design/",
                "Game Design",
                &[
                    ("Overview", "/en/design/"),
                    ("Game Design Document", "/en/design/game-design-document"),
                    ("Level Design", "/en/design/level-design"),
                    ("UI/UX Design", "/en/design/ui-ux-design"),
                    ("Balancing", "/en/design/balancing"),
                ],
            ),
            sidebar(
                "/en/programming/",
                "Programming",
                &[
                    ("Overview", "/en/programming/"),
                    ("Architecture", "/en/programming/architecture"),
                    ("Game Loop", "/en/programming/game-loop"),
                ],
            ),
        ],
    };

    NavigationDecl {
        locales: vec![ja, en],
    }
}

/// URL paths of every document the gamedev declaration links to.
pub(crate) fn gamedev_documents() -> Vec<String> {
    let mut docs: Vec<String> = gamedev_decl()
        .locales
        .iter()
        .flat_map(|locale| {
            let nav = locale.nav.iter();
            let items = locale
                .sidebar
                .iter()
                .flat_map(|route| route.sections.iter().flat_map(|s| s.items.iter()));
            nav.chain(items)
                .filter_map(|entry| match entry.target() {
                    crate::LinkTarget::Document(path) => Some(path),
                    _ => None,
                })
                .collect::<Vec<_>>()
        })
        .collect();
    docs.sort();
    docs.dedup();
    docs
}
