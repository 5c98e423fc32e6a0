//! Stat queries shared by the file and directory components.
//!
//! A missing path is an answer (`Ok(false)`), not a failure. Anything else the
//! OS refuses to tell us (permission denied on an ancestor, I/O errors) is
//! returned as an error so it cannot be mistaken for "absent".

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::Result;

use super::helpers::io_error_with_help;

fn is_absent(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// True if `path` resolves to anything (file or directory).
pub fn exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if is_absent(&e) => Ok(false),
        Err(e) => Err(io_error_with_help("stat", path)(e)),
    }
}

/// True iff `path` exists and is a directory.
pub fn is_dir(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if is_absent(&e) => Ok(false),
        Err(e) => Err(io_error_with_help("stat", path)(e)),
    }
}
