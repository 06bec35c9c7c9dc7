//! `flexdoc inject` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::SiteContext;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the inject command.
#[derive(Args)]
pub(crate) struct InjectArgs {
    /// Markdown file to print.
    file: PathBuf,
}

impl InjectArgs {
    pub(crate) fn execute(self, ctx: &SiteContext, output: &Output) -> Result<(), CliError> {
        let markdown = std::fs::read_to_string(&self.file)?;
        output.result(&ctx.site.inject_references(&markdown));
        Ok(())
    }
}
