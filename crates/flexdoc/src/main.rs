//! FlexDoc CLI - document tree and cross-reference helpers.
//!
//! Provides commands for:
//! - `tree`: Print the document tree with references
//! - `nav`: Render the navigation menu
//! - `see`: Render a see-also group
//! - `breadcrumb`: Render the trail of a page
//! - `check`: Report broken `{% see %}` references in all documents
//! - `inject`: Append shared link definitions to a Markdown file

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BreadcrumbArgs, InjectArgs, SeeArgs, SiteArgs, TreeArgs};
use error::CliError;
use output::Output;

/// FlexDoc - document tree and cross-reference helpers.
#[derive(Parser)]
#[command(name = "flexdoc", version, about)]
struct Cli {
    #[command(flatten)]
    site: SiteArgs,

    /// Enable verbose output (tree build timing and debug details).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the document tree.
    Tree(TreeArgs),
    /// Render the navigation menu.
    Nav,
    /// Render a see-also group such as "1.2 Setup, 1.3#install".
    See(SeeArgs),
    /// Render the breadcrumb trail of a page.
    Breadcrumb(BreadcrumbArgs),
    /// Check every see-also reference in the documentation.
    Check,
    /// Print a Markdown file with shared link definitions appended.
    Inject(InjectArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &Output) -> Result<(), CliError> {
    let ctx = cli.site.open()?;

    match cli.command {
        Commands::Tree(args) => args.execute(&ctx, output),
        Commands::Nav => commands::nav::execute(&ctx, output),
        Commands::See(args) => args.execute(&ctx, output),
        Commands::Breadcrumb(args) => args.execute(&ctx, output),
        Commands::Check => commands::check::execute(&ctx, output),
        Commands::Inject(args) => args.execute(&ctx, output),
    }
}
