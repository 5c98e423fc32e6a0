//! Directory listing.
//!
//! Entries are classified with the same stat probe as `DirOps::check`, sorted by
//! file name, and (for recursive listings) directories carry their children.
//! Enumeration failures are returned, never flattened into an empty Vec.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::Result;

use super::dir::DirOps;
use super::file::name_parts;
use super::helpers::io_error_with_help;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirEntry {
    pub path: PathBuf,
    pub is_file: bool,
    /// Stem for files, full name for directories.
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_with_extension: Option<String>,
    /// Only set for directories in a recursive listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DirEntry>>,
}

impl DirEntry {
    pub fn is_dir(&self) -> bool {
        !self.is_file
    }
}

/// Paths of the immediate children of `dir`, sorted by file name.
fn child_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error_with_help("read directory", dir))? {
        let entry = entry.map_err(io_error_with_help("read directory entry", dir))?;
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

impl DirOps {
    /// List the children of `path`; descend into subdirectories when `recursive`.
    pub fn list(&self, path: impl AsRef<Path>, recursive: bool) -> Result<Vec<DirEntry>> {
        let path = path.as_ref();
        let mut entries = Vec::new();

        for child in child_paths(path)? {
            let is_dir = self.check(&child)?;
            let entry = if is_dir {
                let name = child
                    .file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let children = if recursive {
                    Some(self.list(&child, true)?)
                } else {
                    None
                };
                DirEntry {
                    path: child,
                    is_file: false,
                    name,
                    extension: None,
                    name_with_extension: None,
                    children,
                }
            } else {
                let (name, extension, name_with_extension) = name_parts(&child);
                DirEntry {
                    path: child,
                    is_file: true,
                    name,
                    extension: Some(extension),
                    name_with_extension: Some(name_with_extension),
                    children: None,
                }
            };
            entries.push(entry);
        }

        debug!(path = %path.display(), count = entries.len(), recursive, "listed directory");
        Ok(entries)
    }
}
