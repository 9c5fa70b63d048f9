use std::path::Path;

use anyhow::Result;
use safefile_app::FileInfoInfra;

pub struct SafeFileMetaService;

impl FileInfoInfra for SafeFileMetaService {
    fn exists(&self, path: &Path) -> Result<bool> {
        safefile_common::fs::SafeFS::exists(path)
    }

    fn is_file(&self, path: &Path) -> Result<bool> {
        Ok(safefile_common::fs::SafeFS::is_file(path))
    }

    fn is_dir(&self, path: &Path) -> Result<bool> {
        Ok(safefile_common::fs::SafeFS::is_dir(path))
    }
}
