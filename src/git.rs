use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::GuppyError;

const GITDIR_PREFIX: &str = "gitdir:";

pub struct GitRepo {
    pub root: PathBuf,
}

impl GitRepo {
    /// Discover git repo from current or given directory
    pub fn discover(start: &Path) -> Result<Self, GuppyError> {
        // A missing git binary is treated the same as "not a repository".
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(start)
            .output()
            .map_err(|_| GuppyError::NotAGitRepo)?;

        if !output.status.success() {
            return Err(GuppyError::NotAGitRepo);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let root = stdout.trim();
        if root.is_empty() {
            return Err(GuppyError::NotAGitRepo);
        }

        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    /// Directory git scans for hook scripts
    pub fn hooks_dir(&self) -> Result<PathBuf, GuppyError> {
        hooks_dir_for(&self.root)
    }
}

/// Hooks directory for a working tree rooted at `root`.
///
/// `.git` is usually a directory, but worktrees and submodules replace it
/// with a file holding `gitdir: <path>`. A relative path there is taken
/// relative to `root`. The returned path keeps a trailing separator.
pub fn hooks_dir_for(root: &Path) -> Result<PathBuf, GuppyError> {
    let dot_git = root.join(".git");

    let git_dir = if dot_git.is_file() {
        let content = std::fs::read_to_string(&dot_git)?;
        let target = content
            .trim()
            .strip_prefix(GITDIR_PREFIX)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| GuppyError::MalformedGitFile(dot_git.clone()))?;
        root.join(target)
    } else {
        dot_git
    };

    Ok(git_dir.join("hooks").join(""))
}

/// Where hooks get written: the explicit path untouched, otherwise the
/// hooks directory of the repository enclosing `cwd`.
pub fn resolve_destination(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf, GuppyError> {
    match explicit {
        Some(dest) => Ok(dest.to_path_buf()),
        None => GitRepo::discover(cwd)?.hooks_dir(),
    }
}
