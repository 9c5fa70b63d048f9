use std::path::Path;

use bytes::Bytes;
use safefile_app::FileWriterInfra;

/// Low-level file write service
///
/// Writes a payload in one shot, creating missing parent directories.
/// Staging through sidecars is handled at the service layer.
pub struct SafeFileWriteService {
    sync: bool,
}

impl SafeFileWriteService {
    pub fn new(sync: bool) -> Self {
        Self { sync }
    }

    /// Creates parent directories for the given file path if they don't exist
    fn create_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if !safefile_common::fs::SafeFS::exists(path)?
            && let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            safefile_common::fs::SafeFS::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl Default for SafeFileWriteService {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FileWriterInfra for SafeFileWriteService {
    fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.create_parent_dirs(path)?;
        safefile_common::fs::SafeFS::write(path, &contents, self.sync)
    }
}
