//! `flexdoc nav` command implementation.

use super::SiteContext;
use crate::error::CliError;
use crate::output::Output;

pub(crate) fn execute(ctx: &SiteContext, output: &Output) -> Result<(), CliError> {
    output.result(&ctx.site.nav_menu()?);
    Ok(())
}
