use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuppyError {
    #[error("Not a git repository (or any of the parent directories): .git")]
    NotAGitRepo,

    #[error("'{}' does not contain a `gitdir:` line", .0.display())]
    MalformedGitFile(PathBuf),

    #[error("Invalid hook name: {0}")]
    InvalidHookName(String),

    #[error("failed to install '{}': {source}", .path.display())]
    Install {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
