//! CLI argument parsing for the help-to-Sphinx generator.
//!
//! The CLI stays thin: it collects paths and overrides and hands them to the
//! workflow functions.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "vcli2sphinx",
    version,
    about = "Convert `<program> <utility> -h` output into Sphinx man pages",
    after_help = "Examples:\n  vcli2sphinx generate --root doc/sphinx-doc\n  vcli2sphinx generate --program ./build/virgil --dry-run\n  vcli2sphinx render --util card-create\n  vcli2sphinx render --util keygen --help-text keygen.txt --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Generate(GenerateArgs),
    Render(RenderArgs),
}

/// Inputs shared by every command.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Docs root containing the utility list and the Sphinx source directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Config file (defaults to <root>/vcli2sphinx.json when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Program command line queried for help text
    #[arg(long, value_name = "CMD")]
    pub program: Option<String>,

    /// Flag passed after the utility name to request help
    #[arg(long, value_name = "FLAG", allow_hyphen_values = true)]
    pub help_flag: Option<String>,

    /// Emit debug logging
    #[arg(long)]
    pub verbose: bool,
}

/// Generate pages, index stubs, and conf.py records for every listed utility.
#[derive(Parser, Debug)]
#[command(about = "Generate Sphinx pages for every utility in the list")]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Utility list, one name per line
    #[arg(long, value_name = "PATH")]
    pub utils: Option<PathBuf>,

    /// Capture and render everything but write no files
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON run report to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Render one utility's page to stdout.
#[derive(Parser, Debug)]
#[command(about = "Render a single utility page to stdout")]
pub struct RenderArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Utility name
    #[arg(long, value_name = "NAME")]
    pub util: String,

    /// Read help text from a file instead of running the program
    #[arg(long, value_name = "PATH")]
    pub help_text: Option<PathBuf>,

    /// Print the extracted sections as JSON instead of the page
    #[arg(long)]
    pub json: bool,
}

impl Command {
    pub fn verbose(&self) -> bool {
        match self {
            Command::Generate(args) => args.common.verbose,
            Command::Render(args) => args.common.verbose,
        }
    }
}
