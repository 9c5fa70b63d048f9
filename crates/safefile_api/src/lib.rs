mod safefile_api;

pub use safefile_api::*;
pub use safefile_app::{FileService, SafeFileService};
pub use safefile_domain::*;
pub use safefile_services::{Guard, init_tracing};
