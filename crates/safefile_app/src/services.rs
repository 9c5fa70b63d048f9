use std::path::Path;

use bytes::Bytes;
use safefile_domain::{Result, SafeState};

/// Crash-safe access to a single logical file and its sidecars.
///
/// Every method takes the base path as an `Option` and fails with
/// [`safefile_domain::SafeFileError::InvalidName`] on `None` before the
/// filesystem is touched.
pub trait SafeFileService: Send + Sync {
    /// Inspects which slots exist without mutating anything.
    fn classify(&self, path: Option<&Path>) -> Result<SafeState>;

    /// Discards an abandoned ephemeral payload and promotes the best
    /// remaining slot into the base.
    fn recover(&self, path: Option<&Path>) -> Result<()>;

    /// Promotes any completed or backed-up payload, then returns the base
    /// contents. Never discards an ephemeral payload.
    fn read(&self, path: Option<&Path>) -> Result<Vec<u8>>;

    /// Like [`SafeFileService::read`], decoding the payload as UTF-8.
    fn read_utf8(&self, path: Option<&Path>) -> Result<String>;

    /// Stages `payload` through the ephemeral and ready slots and commits it
    /// as the new base, keeping the previous base as the backup.
    fn write(&self, path: Option<&Path>, payload: Bytes) -> Result<()>;
}

/// Direct file access with the same error vocabulary but no sidecars.
pub trait FileService: Send + Sync {
    fn read_file(&self, path: Option<&Path>) -> Result<Vec<u8>>;
    fn write_file(&self, path: Option<&Path>, payload: Bytes) -> Result<()>;
}
