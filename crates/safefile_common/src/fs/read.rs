use std::path::Path;

use anyhow::{Context, Result};

impl crate::fs::SafeFS {
    pub fn read<T: AsRef<Path>>(path: T) -> Result<Vec<u8>> {
        let path = path.as_ref();
        std::fs::read(path).with_context(|| format!("Failed to read file {}", path.display()))
    }
}
