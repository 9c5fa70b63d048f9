use std::path::Path;

use anyhow::{Context, Result};

impl crate::fs::SafeFS {
    /// Reports whether an entry exists, distinguishing "absent" from "could
    /// not be checked".
    pub fn exists<T: AsRef<Path>>(path: T) -> Result<bool> {
        let path = path.as_ref();
        path.try_exists()
            .with_context(|| format!("Failed to check existence of {}", path.display()))
    }

    pub fn is_file<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().is_file()
    }

    pub fn is_dir<T: AsRef<Path>>(path: T) -> bool {
        path.as_ref().is_dir()
    }
}
