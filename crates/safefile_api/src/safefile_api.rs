use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use safefile_app::{EnvironmentInfra, FileService, SafeFileService};
use safefile_domain::{Environment, Result, SafeState};
use safefile_infra::SafeFileInfra;
use safefile_services::{Guard, SafeFileManager, init_tracing};
use tracing::info;

/// Entry point wiring the filesystem infra to the sidecar state machine.
#[derive(Clone)]
pub struct SafeFileAPI {
    infra: Arc<SafeFileInfra>,
    manager: Arc<SafeFileManager<SafeFileInfra>>,
    _guard: Option<Arc<Guard>>,
}

impl SafeFileAPI {
    /// Loads the environment from process variables and `.env`, and starts
    /// file logging when a log directory is configured.
    pub fn init() -> anyhow::Result<Self> {
        let infra = Arc::new(SafeFileInfra::new());
        let guard = match infra.get_environment().log_dir {
            Some(log_dir) => Some(Arc::new(init_tracing(log_dir)?)),
            None => None,
        };
        let api = Self::from_infra(infra, guard);
        info!(environment = ?api.environment(), "Safe-file API initialised");
        Ok(api)
    }

    /// Uses `env` as given. Logging is left to the caller.
    pub fn new(env: Environment) -> Self {
        Self::from_infra(Arc::new(SafeFileInfra::with_environment(env)), None)
    }

    fn from_infra(infra: Arc<SafeFileInfra>, guard: Option<Arc<Guard>>) -> Self {
        let manager = Arc::new(SafeFileManager::new(infra.clone()));
        Self { infra, manager, _guard: guard }
    }

    pub fn environment(&self) -> Environment {
        self.infra.get_environment()
    }
}

impl Default for SafeFileAPI {
    fn default() -> Self {
        Self::new(Environment::default())
    }
}

impl SafeFileService for SafeFileAPI {
    fn classify(&self, path: Option<&Path>) -> Result<SafeState> {
        self.manager.classify(path)
    }

    fn recover(&self, path: Option<&Path>) -> Result<()> {
        self.manager.recover(path)
    }

    fn read(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        self.manager.read(path)
    }

    fn read_utf8(&self, path: Option<&Path>) -> Result<String> {
        self.manager.read_utf8(path)
    }

    fn write(&self, path: Option<&Path>, payload: Bytes) -> Result<()> {
        self.manager.write(path, payload)
    }
}

impl FileService for SafeFileAPI {
    fn read_file(&self, path: Option<&Path>) -> Result<Vec<u8>> {
        self.manager.read_file(path)
    }

    fn write_file(&self, path: Option<&Path>, payload: Bytes) -> Result<()> {
        self.manager.write_file(path, payload)
    }
}
