//! `flexdoc see` command implementation.

use clap::Args;

use super::SiteContext;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the see command.
#[derive(Args)]
pub(crate) struct SeeArgs {
    /// Comma-separated references, e.g. "1.2 Setup, 1.3#install".
    text: String,
}

impl SeeArgs {
    /// Print the rendered group; a broken group still prints its marker
    /// but fails the command.
    pub(crate) fn execute(self, ctx: &SiteContext, output: &Output) -> Result<(), CliError> {
        output.result(&ctx.site.see_also(&self.text)?);

        let broken = ctx.site.broken_links().len();
        if broken > 0 {
            return Err(CliError::BrokenLinks(broken));
        }
        Ok(())
    }
}
