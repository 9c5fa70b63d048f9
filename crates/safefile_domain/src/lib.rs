mod env;
mod error;
mod sidecar;
mod state;

pub use env::*;
pub use error::*;
pub use sidecar::*;
pub use state::*;
