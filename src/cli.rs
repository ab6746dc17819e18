use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Top-level CLI definition. Each subcommand runs one built-in scaffold plan.
#[derive(Parser, Debug)]
#[command(name = "notes", version, about = "Scaffold study-notes directories")]
pub struct Cli {
    #[arg(short = 'n', long = "dry-run", global = true)]
    pub dry_run: bool,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the DevOps notes hub with one folder per tool.
    Devops(PlanArgs),
    /// Populate AWS service subfolders inside an existing hub.
    Aws(PlanArgs),
    /// Run the devops plan, then the aws plan.
    All(PlanArgs),
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Base directory for the notes hub.
    #[arg(long = "base", default_value = crate::plan::DEFAULT_HUB)]
    pub base: Utf8PathBuf,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
