use std::path::{Path, PathBuf};

use crate::error::GuppyError;
use crate::fs_util::{FileSystem, RealFs};
use crate::hooks::{HookName, TEMPLATE};

/// Copies the hook template into a hooks directory, moving any existing
/// hook aside to `<name>.guppy` the first time.
pub struct Installer<F: FileSystem = RealFs> {
    fs: F,
    template: Vec<u8>,
}

impl Installer<RealFs> {
    pub fn new() -> Self {
        Self::with_fs(RealFs)
    }
}

impl Default for Installer<RealFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> Installer<F> {
    pub fn with_fs(fs: F) -> Self {
        Self {
            fs,
            template: TEMPLATE.as_bytes().to_vec(),
        }
    }

    pub fn template(&self) -> &[u8] {
        &self.template
    }

    /// Install one hook by name. Unknown names are rejected before the
    /// destination is touched.
    pub fn install(&self, hook_name: &str, dest: &Path) -> Result<PathBuf, GuppyError> {
        let hook: HookName = hook_name.parse()?;
        self.install_hook(hook, dest)
    }

    pub fn install_hook(&self, hook: HookName, dest: &Path) -> Result<PathBuf, GuppyError> {
        let target = dest.join(hook.as_str());

        if self.fs.is_file(&target) {
            let backup = dest.join(hook.backup_file_name());
            // An existing backup is never replaced; the current file is
            // overwritten below without being saved.
            if !self.fs.is_file(&backup) {
                self.fs
                    .rename(&target, &backup)
                    .map_err(|source| GuppyError::Install {
                        path: target.clone(),
                        source,
                    })?;
            }
        }

        self.fs
            .write_executable(&target, &self.template)
            .map_err(|source| GuppyError::Install {
                path: target.clone(),
                source,
            })?;

        Ok(target)
    }

    /// Install every known hook in order, stopping at the first failure.
    /// Hooks installed before the failure stay in place.
    pub fn install_all(&self, dest: &Path) -> Result<Vec<PathBuf>, GuppyError> {
        HookName::ALL
            .iter()
            .map(|&hook| self.install_hook(hook, dest))
            .collect()
    }
}
