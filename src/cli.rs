use std::path::PathBuf;

use clap::Parser;

const AFTER_HELP: &str = "\
Examples:
  guppy pre-commit
  guppy pre-commit -d some/where
  guppy all

Existing git-hooks will be backed up the first time. If a backup already exists, it will not be overwritten.";

#[derive(Parser, Debug)]
#[command(
    name = "guppy",
    version,
    about = "Install a git-hook dispatcher into the current repository",
    override_usage = "guppy <hookname>|all [-d <path>]",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Hook to install (see --hooks), or `all` to install every hook (use caution)
    pub hook: Option<String>,

    /// Destination path for git-hooks (default: ./.git/hooks/)
    #[arg(short, long, value_name = "PATH")]
    pub dest: Option<PathBuf>,

    /// Print a complete list of git-hooks
    #[arg(long)]
    pub hooks: bool,

    /// Warn only, no fatal error if git repo not found
    #[arg(short, long)]
    pub warn: bool,
}
