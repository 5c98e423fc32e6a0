//! Directory component: construction and the single-level operations.
//! Listing, naming and the recursive copy/move live in sibling modules as
//! further `impl DirOps` blocks.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::errors::Result;

use super::file::{rename_path, FileOps};
use super::helpers::io_error_with_help;
use super::probe;

/// Default bound on `-copy` name candidates tried by `last_name`.
pub const DEFAULT_MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Knobs for the directory component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirOptions {
    /// Upper bound on candidates tried by `last_name` before giving up.
    pub max_name_attempts: u32,
    /// If true, `move_dir` leaves the source in place when any entry failed to copy.
    pub keep_source_on_partial_copy: bool,
}

impl Default for DirOptions {
    fn default() -> Self {
        Self {
            max_name_attempts: DEFAULT_MAX_NAME_ATTEMPTS,
            keep_source_on_partial_copy: false,
        }
    }
}

/// Directory operations. Holds the file component it delegates leaf copies to.
#[derive(Debug, Clone, Default)]
pub struct DirOps {
    pub(super) files: FileOps,
    pub(super) options: DirOptions,
}

impl DirOps {
    pub fn new(files: FileOps, options: DirOptions) -> Self {
        Self { files, options }
    }

    /// Build from runtime configuration.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(FileOps::new(), cfg.dir_options())
    }

    pub fn options(&self) -> &DirOptions {
        &self.options
    }

    /// True if `path` is a file or directory.
    pub fn exists(&self, path: impl AsRef<Path>) -> Result<bool> {
        probe::exists(path.as_ref())
    }

    /// Create exactly one directory level. Parent must exist; path must not.
    pub fn create(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::create_dir(path).map_err(io_error_with_help("create directory", path))?;
        debug!(path = %path.display(), "created directory");
        Ok(())
    }

    /// Rename any path (file or directory).
    pub fn rename(&self, old: impl AsRef<Path>, new: impl AsRef<Path>) -> Result<()> {
        rename_path(old.as_ref(), new.as_ref())
    }

    /// Remove a directory and everything below it.
    pub fn delete(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::remove_dir_all(path).map_err(io_error_with_help("remove directory", path))?;
        debug!(path = %path.display(), "removed directory tree");
        Ok(())
    }

    /// True iff `path` exists and is a directory.
    pub fn check(&self, path: impl AsRef<Path>) -> Result<bool> {
        probe::is_dir(path.as_ref())
    }
}
