use std::path::PathBuf;

use safefile_app::EnvironmentInfra;
use safefile_domain::Environment;
use tracing::debug;

const SYNC_WRITES: &str = "SAFEFILE_SYNC_WRITES";
const LOG_DIR: &str = "SAFEFILE_LOG_DIR";

/// Resolves [`Environment`] from process variables, after loading a `.env`
/// file from the working directory or its ancestors when one exists.
pub struct SafeFileEnvironmentInfra;

impl SafeFileEnvironmentInfra {
    pub fn new() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded environment file");
        }
        Self
    }

    fn resolve(&self) -> Environment {
        let default = Environment::default();
        let sync_writes = std::env::var(SYNC_WRITES)
            .ok()
            .and_then(|value| parse_bool(&value))
            .unwrap_or(default.sync_writes);
        let log_dir = std::env::var(LOG_DIR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Environment { sync_writes, log_dir }
    }
}

impl Default for SafeFileEnvironmentInfra {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentInfra for SafeFileEnvironmentInfra {
    fn get_environment(&self) -> Environment {
        self.resolve()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
