//! # SafeFS
//!
//! Blocking filesystem primitives with standardized error context.
//!
//! Each method wraps the matching `std::fs` call and attaches an
//! `anyhow::Context` message in the form "Failed to [operation] [path]",
//! keeping the original `io::Error` as the cause. Mutating methods take a
//! `sync` flag; when set, the change is flushed to stable storage before the
//! method returns.

mod dir;
mod meta;
mod read;
mod remove;
mod rename;
mod sync;
mod write;

pub use crate::fs::sync::sync_dir;

/// SafeFS provides a standardized interface for file system operations
/// with consistent error handling.
#[derive(Debug)]
pub struct SafeFS;
