use std::path::Path;

use safefile_app::FileRemoverInfra;
use tracing::trace;

/// Low-level file remove service
///
/// Deletes a single entry. Sidecar coordination belongs to the service
/// layer.
pub struct SafeFileRemoveService {
    sync: bool,
}

impl SafeFileRemoveService {
    pub fn new(sync: bool) -> Self {
        Self { sync }
    }
}

impl FileRemoverInfra for SafeFileRemoveService {
    fn remove(&self, path: &Path) -> anyhow::Result<()> {
        trace!(path = %path.display(), sync = self.sync, "Removing file");
        safefile_common::fs::SafeFS::remove_file(path, self.sync)
    }
}
