use std::path::Path;

use bytes::Bytes;
use safefile_domain::Environment;

/// Provides the runtime configuration.
pub trait EnvironmentInfra: Send + Sync {
    fn get_environment(&self) -> Environment;
}

/// Read-only probes of a filesystem entry.
pub trait FileInfoInfra: Send + Sync {
    fn exists(&self, path: &Path) -> anyhow::Result<bool>;
    fn is_file(&self, path: &Path) -> anyhow::Result<bool>;
    fn is_dir(&self, path: &Path) -> anyhow::Result<bool>;
}

pub trait FileReaderInfra: Send + Sync {
    /// Reads the whole file.
    fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>>;
}

pub trait FileWriterInfra: Send + Sync {
    /// Creates or truncates the file and writes `contents` in full.
    fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()>;
}

pub trait FileRenamerInfra: Send + Sync {
    /// Renames `from` to `to`, replacing `to` if it exists.
    fn rename(&self, from: &Path, to: &Path) -> anyhow::Result<()>;
}

pub trait FileRemoverInfra: Send + Sync {
    fn remove(&self, path: &Path) -> anyhow::Result<()>;
}
