//! Recursive directory copy and move.
//!
//! The walk is sequential and follows listing order. Each destination is the
//! entry's path relative to the source root, re-joined under the destination
//! root. Failures on individual entries are recorded in the report and the walk
//! carries on; only failures at the root abort the call.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::{FsKitError, Result};

use super::dir::DirOps;
use super::helpers::io_error_with_help;

/// One entry that could not be copied.
#[derive(Debug)]
pub struct CopyFailure {
    pub path: PathBuf,
    pub error: FsKitError,
}

/// Outcome of a recursive copy.
#[derive(Debug)]
pub struct CopyReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub files_copied: usize,
    pub dirs_created: usize,
    pub failures: Vec<CopyFailure>,
}

impl CopyReport {
    fn new(source: &Path, dest: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
            files_copied: 0,
            dirs_created: 0,
            failures: Vec::new(),
        }
    }

    /// True when every entry was copied.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, path: &Path, error: FsKitError) {
        warn!(path = %path.display(), code = error.code(), kind = %error.kind(), error = %error, "copy entry failed");
        self.failures.push(CopyFailure {
            path: path.to_path_buf(),
            error,
        });
    }
}

/// Outcome of a move: the copy report and whether the source was deleted.
#[derive(Debug)]
pub struct MoveReport {
    pub copy: CopyReport,
    pub source_removed: bool,
}

/// Absolute form of `path` with symlinks resolved as far as it exists.
fn real_path(path: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(path).map_err(io_error_with_help("resolve path", path))?;
    Ok(resolve_existing(&abs))
}

fn resolve_existing(abs: &Path) -> PathBuf {
    if let Ok(p) = fs::canonicalize(abs) {
        return p;
    }
    match (abs.parent(), abs.file_name()) {
        (Some(parent), Some(name)) => resolve_existing(parent).join(name),
        _ => abs.to_path_buf(),
    }
}

fn ensure_not_inside(source: &Path, dest: &Path) -> Result<()> {
    let src_real = real_path(source)?;
    let dest_real = real_path(dest)?;
    if dest_real.starts_with(&src_real) {
        return Err(FsKitError::DestinationInsideSource {
            source_dir: source.to_path_buf(),
            dest: dest.to_path_buf(),
        });
    }
    Ok(())
}

/// Where `entry` (found under `src_root`) lands under `dest_root`.
fn rebase(src_root: &Path, dest_root: &Path, entry: &Path) -> Result<PathBuf> {
    let rel = entry
        .strip_prefix(src_root)
        .map_err(|_| FsKitError::OutsideSourceRoot {
            path: entry.to_path_buf(),
            root: src_root.to_path_buf(),
        })?;
    Ok(dest_root.join(rel))
}

impl DirOps {
    /// Copy the tree under `source` to `dest` (default: `last_name(source, "")`).
    pub fn copy(&self, source: impl AsRef<Path>, dest: Option<&Path>) -> Result<CopyReport> {
        let source = source.as_ref();
        if !self.check(source)? {
            return Err(FsKitError::NotADirectory(source.to_path_buf()));
        }

        let dest = match dest {
            Some(d) => d.to_path_buf(),
            None => self.last_name(source, "")?,
        };
        ensure_not_inside(source, &dest)?;

        let mut report = CopyReport::new(source, &dest);
        if !self.exists(&dest)? {
            self.create(&dest)?;
            report.dirs_created += 1;
        } else if !self.check(&dest)? {
            return Err(FsKitError::NotADirectory(dest));
        }

        self.copy_children(source, &dest, source, &mut report)?;

        info!(
            src = %source.display(),
            dest = %dest.display(),
            files = report.files_copied,
            dirs = report.dirs_created,
            failures = report.failures.len(),
            "Copied directory tree"
        );
        Ok(report)
    }

    /// Copy the entries of `dir` (somewhere under `src_root`) to their place under `dest_root`.
    fn copy_children(
        &self,
        src_root: &Path,
        dest_root: &Path,
        dir: &Path,
        report: &mut CopyReport,
    ) -> Result<()> {
        for entry in self.list(dir, false)? {
            let target = match rebase(src_root, dest_root, &entry.path) {
                Ok(t) => t,
                Err(e) => {
                    report.record(&entry.path, e);
                    continue;
                }
            };

            if entry.is_dir() {
                if let Err(e) = self.copy_subdir(src_root, dest_root, &entry.path, &target, report)
                {
                    report.record(&entry.path, e);
                }
            } else {
                match self.files.copy(&entry.path, &target) {
                    Ok(()) => report.files_copied += 1,
                    Err(e) => report.record(&entry.path, e),
                }
            }
        }
        Ok(())
    }

    fn copy_subdir(
        &self,
        src_root: &Path,
        dest_root: &Path,
        src_dir: &Path,
        target: &Path,
        report: &mut CopyReport,
    ) -> Result<()> {
        if !self.exists(target)? {
            self.create(target)?;
            report.dirs_created += 1;
        }
        debug!(src = %src_dir.display(), dest = %target.display(), "descending");
        self.copy_children(src_root, dest_root, src_dir, report)
    }

    /// Copy then delete the source.
    ///
    /// The source is deleted even if some entries failed to copy, unless
    /// `keep_source_on_partial_copy` is set. No rollback either way.
    pub fn move_dir(&self, source: impl AsRef<Path>, dest: Option<&Path>) -> Result<MoveReport> {
        let source = source.as_ref();
        let copy = self.copy(source, dest)?;

        if !copy.is_complete() {
            if self.options.keep_source_on_partial_copy {
                warn!(
                    src = %source.display(),
                    failures = copy.failures.len(),
                    "Incomplete copy; keeping source"
                );
                return Ok(MoveReport {
                    copy,
                    source_removed: false,
                });
            }
            warn!(
                src = %source.display(),
                failures = copy.failures.len(),
                "Incomplete copy; removing source anyway"
            );
        }

        self.delete(source)?;
        info!(src = %source.display(), dest = %copy.dest.display(), "Moved directory tree");
        Ok(MoveReport {
            copy,
            source_removed: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_ops::{DirOptions, FileOps};
    use assert_fs::prelude::*;
    use serial_test::serial;
    use std::env;

    /// Run `f` with the working directory set to `dir`, then restore it.
    fn in_dir<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
        let prev = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        let out = f();
        env::set_current_dir(prev).unwrap();
        out
    }

    #[test]
    fn default_destination_uses_copy_suffix() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("photos");
        src.child("a.txt").write_str("a").unwrap();

        let dirs = DirOps::default();
        let first = dirs.copy(src.path(), None).unwrap();
        assert_eq!(first.dest, temp.child("photos-copy").path());
        let second = dirs.copy(src.path(), None).unwrap();
        assert_eq!(second.dest, temp.child("photos-copy-2").path());
        assert_eq!(fs::read_to_string(second.dest.join("a.txt")).unwrap(), "a");
    }

    #[test]
    fn source_path_text_repeated_below_root_is_rebased_structurally() {
        let temp = assert_fs::TempDir::new().unwrap();
        // "data" occurs again inside the tree; textual replacement would mangle it.
        let src = temp.child("data");
        src.child("data").child("data.txt").write_str("deep").unwrap();
        let dest = temp.child("out");

        let report = DirOps::default().copy(src.path(), Some(dest.path())).unwrap();
        assert!(report.is_complete());
        assert_eq!(
            fs::read_to_string(dest.path().join("data").join("data.txt")).unwrap(),
            "deep"
        );
        assert_eq!(report.files_copied, 1);
        assert_eq!(report.dirs_created, 2);
    }

    #[test]
    fn copy_into_own_subtree_is_refused() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("src");
        src.child("f.txt").write_str("x").unwrap();
        let inside = src.child("nested");

        let err = DirOps::default()
            .copy(src.path(), Some(inside.path()))
            .unwrap_err();
        assert!(matches!(err, FsKitError::DestinationInsideSource { .. }));
        assert!(!inside.path().exists());
    }

    #[test]
    fn copy_of_file_source_is_not_a_directory() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("f.txt");
        f.write_str("x").unwrap();
        let err = DirOps::default().copy(f.path(), None).unwrap_err();
        assert!(matches!(err, FsKitError::NotADirectory(_)));
    }

    #[test]
    fn move_with_clean_copy_removes_source() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("src");
        src.child("sub").child("b.txt").write_str("b").unwrap();
        let dest = temp.child("dest");

        let dirs = DirOps::new(
            FileOps::new(),
            DirOptions {
                keep_source_on_partial_copy: true,
                ..DirOptions::default()
            },
        );
        let report = dirs.move_dir(src.path(), Some(dest.path())).unwrap();
        assert!(report.source_removed);
        assert!(!src.path().exists());
        assert!(dest.path().join("sub").join("b.txt").is_file());
    }

    #[test]
    #[serial]
    fn relative_destination_inside_cwd_source_is_refused() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("src");
        src.child("f.txt").write_str("x").unwrap();

        let result = in_dir(src.path(), || DirOps::default().copy(".", Some(Path::new("inner"))));
        let err = result.unwrap_err();
        assert!(matches!(err, FsKitError::DestinationInsideSource { .. }));
        assert!(!src.child("inner").path().exists());
    }

    #[test]
    #[serial]
    fn cwd_source_defaults_to_sibling_copy() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("src");
        src.child("f.txt").write_str("x").unwrap();

        let report = in_dir(src.path(), || DirOps::default().copy(".", None)).unwrap();
        let expected = fs::canonicalize(temp.path()).unwrap().join("src-copy");
        assert_eq!(report.dest, expected);
        assert_eq!(fs::read_to_string(expected.join("f.txt")).unwrap(), "x");
    }

    #[test]
    fn trailing_separator_source_defaults_to_sibling_copy() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = temp.child("photos");
        src.child("a.txt").write_str("a").unwrap();

        let report = DirOps::default().copy(src.path().join(""), None).unwrap();
        assert_eq!(report.dest, temp.child("photos-copy").path());
        assert!(report.is_complete());
        assert!(temp.child("photos-copy").child("a.txt").path().is_file());
    }

    #[test]
    fn entry_outside_source_root_is_an_error() {
        let err = rebase(Path::new("/a/src"), Path::new("/b"), Path::new("/a/other/f.txt"))
            .unwrap_err();
        assert!(matches!(err, FsKitError::OutsideSourceRoot { .. }));
        assert_eq!(
            rebase(Path::new("/a/src"), Path::new("/b"), Path::new("/a/src/d/f.txt")).unwrap(),
            PathBuf::from("/b/d/f.txt")
        );
    }
}
