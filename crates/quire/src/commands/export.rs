//! `quire export` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub site: SiteArgs,
}

impl ExportArgs {
    /// Execute the export command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.open()?;
        let json = site.export_json()?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, json + "\n")?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.line(&json)?,
        }
        Ok(())
    }
}
