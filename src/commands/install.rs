use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::CommandFactory;

use super::{fatal, success, warning, ExitStatus};
use crate::cli::Cli;
use crate::error::GuppyError;
use crate::git;
use crate::hooks::{self, HookName};
use crate::installer::Installer;

pub fn run(cli: &Cli) -> Result<ExitStatus> {
    if cli.hooks {
        println!("{}", hooks::listing());
        return Ok(ExitStatus::Success);
    }

    let dest = match resolve(cli.dest.as_deref(), cli.warn)? {
        Ok(dest) => dest,
        Err(status) => return Ok(status),
    };

    let Some(hook) = cli.hook.as_deref() else {
        eprintln!("{}", Cli::command().render_help());
        return Ok(ExitStatus::MissingHook);
    };

    Ok(install(&Installer::new(), hook, &dest))
}

/// Destination directory, or the status to exit with when there is none.
fn resolve(explicit: Option<&Path>, warn_only: bool) -> Result<Result<PathBuf, ExitStatus>> {
    let cwd = std::env::current_dir()?;
    match git::resolve_destination(explicit, &cwd) {
        Ok(dest) => Ok(Ok(dest)),
        Err(err @ GuppyError::NotAGitRepo) if warn_only => {
            warning(err);
            Ok(Err(ExitStatus::Success))
        }
        Err(err) => {
            fatal(err);
            Ok(Err(ExitStatus::NotAGitRepo))
        }
    }
}

fn install(installer: &Installer, hook: &str, dest: &Path) -> ExitStatus {
    if hook.eq_ignore_ascii_case("all") {
        return match installer.install_all(dest) {
            Ok(_) => {
                success(format!("Installed all git-hooks to: {}", dest.display()));
                ExitStatus::Success
            }
            Err(err) => {
                fatal(err);
                ExitStatus::InstallAllFailed
            }
        };
    }

    let hook = match hook.parse::<HookName>() {
        Ok(hook) => hook,
        Err(err) => {
            fatal(err);
            return ExitStatus::InvalidHookName;
        }
    };

    match installer.install_hook(hook, dest) {
        Ok(path) => {
            success(format!("Installed git-hook: {}", path.display()));
            ExitStatus::Success
        }
        Err(err) => {
            fatal(err);
            ExitStatus::InstallFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_all_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let status = install(&Installer::new(), "ALL", dir.path());
        assert_eq!(status, ExitStatus::Success);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 17);
    }

    #[test]
    fn test_invalid_hook_name_status() {
        let dir = tempfile::tempdir().unwrap();
        let status = install(&Installer::new(), "frobnicate", dir.path());
        assert_eq!(status, ExitStatus::InvalidHookName);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_single_install_failure_status() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let status = install(&Installer::new(), "pre-commit", &missing);
        assert_eq!(status, ExitStatus::InstallFailed);
    }

    #[test]
    fn test_install_all_failure_status() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let status = install(&Installer::new(), "all", &missing);
        assert_eq!(status, ExitStatus::InstallAllFailed);
    }

    #[test]
    fn test_hooks_listing_skips_resolution() {
        let cli = Cli {
            hook: Some("frobnicate".to_string()),
            dest: None,
            hooks: true,
            warn: false,
        };
        assert_eq!(run(&cli).unwrap(), ExitStatus::Success);
    }
}
