//! Conflict-avoiding "-copy" names.
//!
//! Candidates for base "report" and extension ".txt":
//!   report-copy.txt, report-copy-2.txt, report-copy-3.txt, ...
//! The base name itself is never returned, even when it is free.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::errors::{FsKitError, Result};

use super::dir::DirOps;
use super::helpers::io_error_with_help;

const COPY_SUFFIX: &str = "-copy";

/// Build the n-th candidate (1-based). The first has no number.
fn candidate(base: &Path, extension: &str, n: u32) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(COPY_SUFFIX);
    if n > 1 {
        name.push(format!("-{n}"));
    }
    name.push(extension);
    PathBuf::from(name)
}

/// Drop trailing separators and `.` parts; resolve a base with no final name
/// (`.`, `..`, `dir/..`) to its real path so the suffix lands on a sibling.
fn normalized_base(base: &Path) -> Result<PathBuf> {
    let trimmed: PathBuf = base.components().collect();
    if trimmed.file_name().is_some() {
        return Ok(trimmed);
    }
    fs::canonicalize(base).map_err(io_error_with_help("resolve path", base))
}

impl DirOps {
    /// First unused `<base>-copy[-n]<extension>` path.
    ///
    /// `base` is a path without the extension; `extension` includes its dot (or is empty).
    /// Fails with `NamesExhausted` after `max_name_attempts` occupied candidates.
    pub fn last_name(&self, base: impl AsRef<Path>, extension: &str) -> Result<PathBuf> {
        let base = normalized_base(base.as_ref())?;
        let base = base.as_path();
        let max = self.options.max_name_attempts;

        for n in 1..=max {
            let path = candidate(base, extension, n);
            if !self.exists(&path)? {
                return Ok(path);
            }
            if n == 3 {
                trace!(base = %base.display(), "last_name: multiple collisions, still searching");
            }
        }

        Err(FsKitError::NamesExhausted {
            base: base.to_path_buf(),
            attempts: max,
        })
    }
}
