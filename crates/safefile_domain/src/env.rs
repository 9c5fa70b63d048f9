use std::path::PathBuf;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Runtime configuration shared by the infrastructure and the API facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(into, strip_option)]
pub struct Environment {
    /// Fsync payloads before returning from a write, and the parent
    /// directory after every rename or delete.
    pub sync_writes: bool,

    /// Directory for the rolling JSON log. Tracing is left uninitialised
    /// when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for Environment {
    fn default() -> Self {
        Self { sync_writes: true, log_dir: None }
    }
}
