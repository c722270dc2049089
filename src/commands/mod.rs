pub mod install;

use std::process::ExitCode;

use colored::Colorize;

/// Process exit codes. Scripts depend on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    NotAGitRepo = 1,
    MissingHook = 2,
    InstallAllFailed = 3,
    InstallFailed = 4,
    InvalidHookName = 5,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

pub fn fatal(message: impl std::fmt::Display) {
    eprintln!("{} {}", "fatal:".red().bold(), message);
}

pub fn warning(message: impl std::fmt::Display) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

pub fn success(message: impl std::fmt::Display) {
    println!("{} {}", "guppy:".green(), message);
}
