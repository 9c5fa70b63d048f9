mod env;
mod fs_meta;
mod fs_read;
mod fs_remove;
mod fs_rename;
mod fs_write;
mod safefile_infra;

pub use env::SafeFileEnvironmentInfra;
pub use safefile_infra::*;
