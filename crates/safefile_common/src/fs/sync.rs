use std::path::Path;

use anyhow::{Context, Result};

/// Flushes a directory's entries to disk.
///
/// Creating, renaming or deleting a file only changes the directory entry;
/// without this the change may not survive power loss even when the file
/// itself was synced.
#[cfg(unix)]
pub fn sync_dir<T: AsRef<Path>>(dir: T) -> Result<()> {
    let dir = dir.as_ref();
    std::fs::File::open(dir)
        .and_then(|handle| handle.sync_all())
        .with_context(|| format!("Failed to sync directory {}", dir.display()))
}

/// Directory handles cannot be synced on this platform.
#[cfg(not(unix))]
pub fn sync_dir<T: AsRef<Path>>(_dir: T) -> Result<()> {
    Ok(())
}

pub(crate) fn sync_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => sync_dir(parent),
        _ => sync_dir("."),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_sync_dir() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("test.txt"), "test").unwrap();

        sync_dir(dir.path()).unwrap();
    }

    #[test]
    fn test_sync_parent_of_relative_name() {
        sync_parent(Path::new("test.txt")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_sync_missing_dir_fails() {
        let actual = sync_dir("/nonexistent/path/that/does/not/exist");
        assert!(actual.is_err());
    }
}
