use std::path::Path;

use safefile_app::FileRenamerInfra;
use tracing::trace;

/// Low-level rename service
///
/// Replaces the destination atomically. When syncing, the parent directory
/// is flushed so the new entry survives power loss.
pub struct SafeFileRenameService {
    sync: bool,
}

impl SafeFileRenameService {
    pub fn new(sync: bool) -> Self {
        Self { sync }
    }
}

impl FileRenamerInfra for SafeFileRenameService {
    fn rename(&self, from: &Path, to: &Path) -> anyhow::Result<()> {
        trace!(from = %from.display(), to = %to.display(), sync = self.sync, "Renaming file");
        safefile_common::fs::SafeFS::rename(from, to, self.sync)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_rename_replaces_backup() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("test.txt");
        let backup = dir.path().join("test.txt.bak");
        std::fs::write(&base, "current").unwrap();
        std::fs::write(&backup, "stale").unwrap();
        let service = SafeFileRenameService::new(true);

        service.rename(&base, &backup).unwrap();

        assert!(!base.exists());
        let actual = std::fs::read_to_string(&backup).unwrap();
        assert_eq!(actual, "current");
    }
}
