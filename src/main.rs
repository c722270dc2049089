use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;

use guppy::cli::Cli;
use guppy::commands::{self, ExitStatus};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() || !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    match commands::install::run(&cli) {
        Ok(status) => status.into(),
        Err(err) => {
            commands::fatal(format!("{:#}", err));
            ExitStatus::NotAGitRepo.into()
        }
    }
}
