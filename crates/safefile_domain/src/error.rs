use std::path::{Path, PathBuf};

/// Stable numeric discriminant carried by every [`SafeFileError`].
///
/// The values are part of the public contract and never change between
/// releases. [`ErrorCode::DoesNotExist`] shares its value with
/// [`crate::SafeState::DoesNotExist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[repr(u16)]
pub enum ErrorCode {
    InvalidName = 100,
    DoesNotExist = 101,
    IsNotAFile = 102,
    ReadError = 103,
    WriteError = 104,
}

impl ErrorCode {
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

/// Errors surfaced by safe-file operations.
///
/// Collaborator I/O failures are never retried; they are wrapped into
/// [`SafeFileError::Read`] or [`SafeFileError::Write`] with the path that
/// failed and handed straight back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum SafeFileError {
    /// The path argument was absent.
    #[error("File name missing or not valid")]
    InvalidName,

    /// Neither the base file nor any trusted sidecar exists.
    #[error("File {} does not exist", .path.display())]
    DoesNotExist { path: PathBuf },

    /// The base path resolves to something other than a regular file.
    #[error("File {} is not a file", .path.display())]
    IsNotAFile { path: PathBuf },

    /// Probing or reading a slot failed.
    #[error("Error reading file {}: {cause:#}", .path.display())]
    Read { path: PathBuf, cause: anyhow::Error },

    /// Writing, renaming or deleting a slot failed.
    #[error("Error writing file {}: {cause:#}", .path.display())]
    Write { path: PathBuf, cause: anyhow::Error },
}

impl SafeFileError {
    pub fn does_not_exist(path: impl AsRef<Path>) -> Self {
        Self::DoesNotExist { path: path.as_ref().to_path_buf() }
    }

    pub fn is_not_a_file(path: impl AsRef<Path>) -> Self {
        Self::IsNotAFile { path: path.as_ref().to_path_buf() }
    }

    pub fn read(path: impl AsRef<Path>, cause: anyhow::Error) -> Self {
        Self::Read { path: path.as_ref().to_path_buf(), cause }
    }

    pub fn write(path: impl AsRef<Path>, cause: anyhow::Error) -> Self {
        Self::Write { path: path.as_ref().to_path_buf(), cause }
    }

    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidName => ErrorCode::InvalidName,
            Self::DoesNotExist { .. } => ErrorCode::DoesNotExist,
            Self::IsNotAFile { .. } => ErrorCode::IsNotAFile,
            Self::Read { .. } => ErrorCode::ReadError,
            Self::Write { .. } => ErrorCode::WriteError,
        }
    }
}

pub type Result<T> = std::result::Result<T, SafeFileError>;
