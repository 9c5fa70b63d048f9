use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

impl crate::fs::SafeFS {
    /// Creates or truncates `path` and writes `contents` in full. With `sync`
    /// the data and metadata are on disk when this returns.
    pub fn write<T: AsRef<Path>>(path: T, contents: &[u8], sync: bool) -> Result<()> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;

        file.write_all(contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        if sync {
            file.sync_all()
                .with_context(|| format!("Failed to sync {}", path.display()))?;
        }
        Ok(())
    }
}
