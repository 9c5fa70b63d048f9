mod log;
mod plain_file;
mod safe_file;

#[cfg(test)]
pub mod test_fixtures;

pub use log::*;
pub use safe_file::SafeFileManager;
