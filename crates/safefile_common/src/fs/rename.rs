use std::path::Path;

use anyhow::{Context, Result};

use crate::fs::sync::sync_parent;

impl crate::fs::SafeFS {
    /// Renames `from` to `to`, atomically replacing `to` if it exists. With
    /// `sync` the directory entry is durable when this returns.
    pub fn rename<F: AsRef<Path>, T: AsRef<Path>>(from: F, to: T, sync: bool) -> Result<()> {
        let (from, to) = (from.as_ref(), to.as_ref());
        std::fs::rename(from, to).with_context(|| {
            format!("Failed to rename {} to {}", from.display(), to.display())
        })?;

        if sync {
            sync_parent(to)?;
        }
        Ok(())
    }
}
