//! `quire check` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Every dangling link is printed before the command fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.open()?;

        output.info(&format!(
            "Checking {} locale(s) against {} document(s) in {}",
            site.navigation().locales().len(),
            site.documents().len(),
            site.config().docs_resolved.source_dir.display()
        ));

        let report = site.check_links();
        for error in &report.errors {
            output.error(&error.to_string());
        }
        if !report.suppressed.is_empty() {
            output.warning(&format!(
                "{} dead link(s) ignored by site.ignore_dead_links",
                report.suppressed.len()
            ));
        }

        if report.is_clean() {
            output.success("All navigation links resolve");
            Ok(())
        } else {
            Err(CliError::DeadLinks(report.errors.len()))
        }
    }
}
