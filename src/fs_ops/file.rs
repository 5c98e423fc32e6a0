//! Single-file operations.
//! Thin wrappers over std::fs that normalize every outcome into a Result.

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::errors::{FsKitError, Result};

use super::helpers::io_error_with_help;
use super::probe;

/// Content of a file plus the name components parsed from its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadOutput {
    /// File stem ("notes" for "notes.txt").
    pub name: String,
    pub content: String,
    /// Extension with its leading dot, or empty.
    pub extension: String,
    pub name_with_extension: String,
}

/// Split a path into (stem, ".ext", full name). Dotfiles have no extension.
pub(crate) fn name_parts(path: &Path) -> (String, String, String) {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let name_with_extension = path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    (name, extension, name_with_extension)
}

/// Stateless file component.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileOps;

impl FileOps {
    pub fn new() -> Self {
        FileOps
    }

    /// Read a file as UTF-8 text.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<ReadOutput> {
        let path = path.as_ref();
        if probe::is_dir(path)? {
            return Err(FsKitError::IsADirectory(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(io_error_with_help("read file", path))?;
        let (name, extension, name_with_extension) = name_parts(path);
        debug!(path = %path.display(), bytes = content.len(), "read file");
        Ok(ReadOutput {
            name,
            content,
            extension,
            name_with_extension,
        })
    }

    /// Write `content` to `path`, creating or truncating it.
    pub fn create(&self, path: impl AsRef<Path>, content: &str) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, content).map_err(io_error_with_help("write file", path))?;
        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(())
    }

    /// Same as `create`; the file is not required to exist beforehand.
    pub fn update(&self, path: impl AsRef<Path>, content: &str) -> Result<()> {
        self.create(path, content)
    }

    /// Remove a single file. Directories are rejected by the OS.
    pub fn delete(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::remove_file(path).map_err(io_error_with_help("remove file", path))?;
        debug!(path = %path.display(), "removed file");
        Ok(())
    }

    /// Rename a file. Refuses when `old` is a directory; use DirOps::rename for those.
    pub fn rename(&self, old: impl AsRef<Path>, new: impl AsRef<Path>) -> Result<()> {
        let (old, new) = (old.as_ref(), new.as_ref());
        if probe::is_dir(old)? {
            return Err(FsKitError::IsADirectory(old.to_path_buf()));
        }
        rename_path(old, new)
    }

    /// Copy `old` to `new` by reading it whole and writing it back out.
    pub fn copy(&self, old: impl AsRef<Path>, new: impl AsRef<Path>) -> Result<()> {
        let (old, new) = (old.as_ref(), new.as_ref());
        let bytes = fs::read(old).map_err(io_error_with_help("read file", old))?;
        fs::write(new, &bytes).map_err(io_error_with_help("write file", new))?;
        debug!(src = %old.display(), dest = %new.display(), bytes = bytes.len(), "copied file");
        Ok(())
    }
}

/// Path-agnostic rename shared by FileOps and DirOps.
pub(crate) fn rename_path(old: &Path, new: &Path) -> Result<()> {
    fs::rename(old, new).map_err(io_error_with_help("rename", old))?;
    debug!(src = %old.display(), dest = %new.display(), "renamed");
    Ok(())
}
