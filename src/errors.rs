//! Typed error definitions for fskit.
//! Every operation returns one of these instead of panicking, so callers can tell
//! "empty" from "failed" and branch on a small set of failure kinds.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FsKitError>;

#[derive(Debug, Error)]
pub enum FsKitError {
    /// An OS call failed. `hint` is a short human suggestion (may be empty).
    #[error("{op} '{}': {source}{hint}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        hint: String,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is a directory; expected a file", .0.display())]
    IsADirectory(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("no free name for '{}' after {attempts} attempts", .base.display())]
    NamesExhausted { base: PathBuf, attempts: u32 },

    #[error("refusing to copy '{}' into its own subtree '{}'", .source_dir.display(), .dest.display())]
    DestinationInsideSource { source_dir: PathBuf, dest: PathBuf },

    #[error("'{}' is not under source root '{}'", .path.display(), .root.display())]
    OutsideSourceRoot { path: PathBuf, root: PathBuf },
}

/// Coarse classification of a failure, independent of platform error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    AlreadyExists,
    NotADirectory,
    IsADirectory,
    /// Content was not valid UTF-8 text.
    NotText,
    Unknown,
}

impl ErrorKind {
    pub fn from_io(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::AlreadyExists => ErrorKind::AlreadyExists,
            io::ErrorKind::NotADirectory => ErrorKind::NotADirectory,
            io::ErrorKind::IsADirectory => ErrorKind::IsADirectory,
            io::ErrorKind::InvalidData => ErrorKind::NotText,
            _ => ErrorKind::Unknown,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::PermissionDenied => "permission_denied",
            ErrorKind::AlreadyExists => "already_exists",
            ErrorKind::NotADirectory => "not_a_directory",
            ErrorKind::IsADirectory => "is_a_directory",
            ErrorKind::NotText => "not_text",
            ErrorKind::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

impl FsKitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FsKitError::Io { source, .. } => ErrorKind::from_io(source.kind()),
            FsKitError::IsADirectory(_) => ErrorKind::IsADirectory,
            FsKitError::NotADirectory(_) => ErrorKind::NotADirectory,
            FsKitError::NamesExhausted { .. } => ErrorKind::AlreadyExists,
            FsKitError::DestinationInsideSource { .. } => ErrorKind::Unknown,
            FsKitError::OutsideSourceRoot { .. } => ErrorKind::Unknown,
        }
    }

    /// Stable numeric code for structured logs.
    pub fn code(&self) -> i32 {
        match self {
            FsKitError::Io { .. } => 10,
            FsKitError::IsADirectory(_) => 20,
            FsKitError::NotADirectory(_) => 21,
            FsKitError::NamesExhausted { .. } => 30,
            FsKitError::DestinationInsideSource { .. } => 40,
            FsKitError::OutsideSourceRoot { .. } => 41,
        }
    }
}
