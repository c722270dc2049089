use std::io::{self, Write};
use std::path::Path;

/// Filesystem operations the installer needs. Tests swap in an in-memory
/// implementation.
pub trait FileSystem {
    /// True if `path` exists and is a regular file
    fn is_file(&self, path: &Path) -> bool;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Create or replace `path` with `content`, marked executable
    fn write_executable(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// The real disk
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl FileSystem for RealFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn write_executable(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        atomic_write(path, content, 0o755)
    }
}

/// Atomic write: write to temp file in same directory, then rename.
/// Fails if the parent directory does not exist.
pub fn atomic_write(target: &Path, content: &[u8], mode: u32) -> io::Result<()> {
    let parent = target.parent().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' has no parent directory", target.display()),
        )
    })?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    set_mode(tmp.as_file(), mode)?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(unix)]
fn set_mode(file: &std::fs::File, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_file: &std::fs::File, _mode: u32) -> io::Result<()> {
    Ok(())
}
