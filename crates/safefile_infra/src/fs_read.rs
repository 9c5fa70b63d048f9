use std::path::Path;

use anyhow::Result;
use safefile_app::FileReaderInfra;

#[derive(Default)]
pub struct SafeFileReadService;

impl SafeFileReadService {
    pub fn new() -> Self {
        Self
    }
}

impl FileReaderInfra for SafeFileReadService {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        safefile_common::fs::SafeFS::read(path)
    }
}
