//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod nav;
pub(crate) mod sidebar;

use std::path::PathBuf;

use clap::Args;
use quire_config::CliSettings;
use quire_nav::NavEntry;
use quire_site::SiteContext;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use nav::NavArgs;
pub(crate) use sidebar::SidebarArgs;

/// Flags shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover quire.toml).
    #[arg(short, long, env = "QUIRE_CONFIG")]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Dev server host (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Dev server port (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (load and scan logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load configuration and scan the docs directory.
    pub(crate) fn open(&self) -> Result<SiteContext, CliError> {
        tracing::debug!(config = ?self.config, source_dir = ?self.source_dir, "Opening site");
        Ok(SiteContext::open(
            self.config.as_deref(),
            Some(&self.cli_settings()),
        )?)
    }

    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            host: self.host.clone(),
            port: self.port,
            source_dir: self.source_dir.clone(),
        }
    }
}

/// One entry as `label  link`, indented by `indent` spaces.
pub(crate) fn format_entry(entry: &NavEntry, indent: usize) -> String {
    format!("{:indent$}{}  {}", "", entry.text, entry.link)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(clap::Parser)]
    struct TestCli {
        #[command(flatten)]
        site: SiteArgs,
    }

    #[test]
    fn test_server_flags_become_cli_settings() {
        let cli = TestCli::try_parse_from([
            "quire",
            "--host",
            "127.0.0.1",
            "--port",
            "4000",
            "--source-dir",
            "handbook",
        ])
        .unwrap();

        let settings = cli.site.cli_settings();

        assert_eq!(settings.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(settings.port, Some(4000));
        assert_eq!(settings.source_dir, Some(PathBuf::from("handbook")));
    }

    #[test]
    fn test_format_entry() {
        let entry = NavEntry::new("バランス調整", "/design/balancing");

        assert_eq!(format_entry(&entry, 0), "バランス調整  /design/balancing");
        assert_eq!(format_entry(&entry, 2), "  バランス調整  /design/balancing");
    }
}
