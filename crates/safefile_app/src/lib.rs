mod infra;
mod services;

pub use infra::*;
pub use services::*;

pub mod domain {
    pub use safefile_domain::*;
}
