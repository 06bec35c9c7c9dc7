//! `flexdoc breadcrumb` command implementation.

use clap::Args;

use super::SiteContext;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the breadcrumb command.
#[derive(Args)]
pub(crate) struct BreadcrumbArgs {
    /// Logical page path as shown by `flexdoc tree`, e.g. "/docs/1-intro/2-setup.html".
    page_path: String,
}

impl BreadcrumbArgs {
    pub(crate) fn execute(self, ctx: &SiteContext, output: &Output) -> Result<(), CliError> {
        output.result(&ctx.site.breadcrumb(&self.page_path)?);
        Ok(())
    }
}
