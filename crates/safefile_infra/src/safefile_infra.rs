use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use safefile_app::{
    EnvironmentInfra, FileInfoInfra, FileReaderInfra, FileRemoverInfra, FileRenamerInfra,
    FileWriterInfra,
};
use safefile_domain::Environment;

use crate::env::SafeFileEnvironmentInfra;
use crate::fs_meta::SafeFileMetaService;
use crate::fs_read::SafeFileReadService;
use crate::fs_remove::SafeFileRemoveService;
use crate::fs_rename::SafeFileRenameService;
use crate::fs_write::SafeFileWriteService;

/// Filesystem-backed implementation of every infra trait.
#[derive(Clone)]
pub struct SafeFileInfra {
    environment: Environment,
    file_meta_service: Arc<SafeFileMetaService>,
    file_read_service: Arc<SafeFileReadService>,
    file_write_service: Arc<SafeFileWriteService>,
    file_rename_service: Arc<SafeFileRenameService>,
    file_remove_service: Arc<SafeFileRemoveService>,
}

impl SafeFileInfra {
    /// Builds the infra from process variables and any `.env` file.
    pub fn new() -> Self {
        Self::with_environment(SafeFileEnvironmentInfra::new().get_environment())
    }

    pub fn with_environment(environment: Environment) -> Self {
        let sync = environment.sync_writes;
        Self {
            environment,
            file_meta_service: Arc::new(SafeFileMetaService),
            file_read_service: Arc::new(SafeFileReadService::new()),
            file_write_service: Arc::new(SafeFileWriteService::new(sync)),
            file_rename_service: Arc::new(SafeFileRenameService::new(sync)),
            file_remove_service: Arc::new(SafeFileRemoveService::new(sync)),
        }
    }
}

impl Default for SafeFileInfra {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentInfra for SafeFileInfra {
    fn get_environment(&self) -> Environment {
        self.environment.clone()
    }
}

impl FileInfoInfra for SafeFileInfra {
    fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.exists(path)
    }

    fn is_file(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta_service.is_dir(path)
    }
}

impl FileReaderInfra for SafeFileInfra {
    fn read(&self, path: &Path) -> anyhow::Result<Vec<u8>> {
        self.file_read_service.read(path)
    }
}

impl FileWriterInfra for SafeFileInfra {
    fn write(&self, path: &Path, contents: Bytes) -> anyhow::Result<()> {
        self.file_write_service.write(path, contents)
    }
}

impl FileRenamerInfra for SafeFileInfra {
    fn rename(&self, from: &Path, to: &Path) -> anyhow::Result<()> {
        self.file_rename_service.rename(from, to)
    }
}

impl FileRemoverInfra for SafeFileInfra {
    fn remove(&self, path: &Path) -> anyhow::Result<()> {
        self.file_remove_service.remove(path)
    }
}
