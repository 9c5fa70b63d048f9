use std::path::Path;

use anyhow::{Context, Result};

impl crate::fs::SafeFS {
    pub fn create_dir_all<T: AsRef<Path>>(path: T) -> Result<()> {
        let path = path.as_ref();
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create dir {}", path.display()))
    }
}
