//! `quire sidebar` command implementation.

use clap::Args;
use quire_nav::SidebarSection;

use super::{SiteArgs, format_entry};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page path (e.g., "/design/balancing").
    path: String,

    /// Locale identifier (default: the locale owning the path).
    #[arg(short, long)]
    locale: Option<String>,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.open()?;

        let sections = match &self.locale {
            Some(locale) => site.resolve_sidebar(&self.path, locale),
            None => site.sidebar_for_path(&self.path),
        };
        if sections.is_empty() {
            output.warning(&format!("No sidebar for '{}'", self.path));
        }
        for section in sections {
            output.heading(&section_heading(section))?;
            for entry in &section.items {
                output.line(&format_entry(entry, 2))?;
            }
        }
        Ok(())
    }
}

fn section_heading(section: &SidebarSection) -> String {
    match section.collapsed {
        Some(true) => format!("{} (collapsed)", section.text),
        _ => section.text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_section_heading_marks_collapsed() {
        let mut section = SidebarSection::new("API リファレンス", Vec::new());
        assert_eq!(section_heading(&section), "API リファレンス");

        section.collapsed = Some(true);
        assert_eq!(section_heading(&section), "API リファレンス (collapsed)");

        section.collapsed = Some(false);
        assert_eq!(section_heading(&section), "API リファレンス");
    }
}
