//! `quire nav` command implementation.

use clap::Args;
use quire_nav::ROOT_LOCALE;

use super::{SiteArgs, format_entry};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Locale identifier.
    #[arg(short, long, default_value = ROOT_LOCALE)]
    locale: String,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl NavArgs {
    /// Execute the nav command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.open()?;

        let nav = site.resolve_nav(&self.locale);
        if nav.is_empty() {
            output.warning(&format!("No navigation for locale '{}'", self.locale));
        }
        for entry in nav {
            output.line(&format_entry(entry, 0))?;
        }
        Ok(())
    }
}
