use std::path::Path;

use anyhow::{Context, Result};

use crate::fs::sync::sync_parent;

impl crate::fs::SafeFS {
    pub fn remove_file<T: AsRef<Path>>(path: T, sync: bool) -> Result<()> {
        let path = path.as_ref();
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove file {}", path.display()))?;

        if sync {
            sync_parent(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::fs::SafeFS;

    #[test]
    fn test_remove_file() {
        let dir = tempdir().unwrap();
        let fixture = dir.path().join("test.txt.eph");
        std::fs::write(&fixture, "garbage").unwrap();

        SafeFS::remove_file(&fixture, true).unwrap();

        assert!(!fixture.exists());
    }

    #[test]
    fn test_remove_directory_fails() {
        let dir = tempdir().unwrap();

        let actual = SafeFS::remove_file(dir.path(), false);

        assert!(actual.is_err());
    }
}
