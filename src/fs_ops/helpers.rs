//! I/O error adapters.
//!
//! Converts io::Error into FsKitError carrying the operation, the path and a
//! platform-aware hint. Usable directly with map_err:
//!
//!   fs::create_dir(dir).map_err(io_error_with_help("create directory", dir))?;

use std::io;
use std::path::Path;

use crate::errors::FsKitError;

/// Pick a short hint for `e`, preferring the raw OS code when there is one.
fn hint_for(e: &io::Error) -> String {
    let mut hint = String::new();

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    hint.push_str(" - permission denied; check ownership and permissions.");
                }
                libc::ENOENT => hint.push_str(" - path not found; verify it exists."),
                libc::EEXIST => {
                    hint.push_str(" - already exists; pick a unique name or remove the target.");
                }
                libc::ENOTDIR => {
                    hint.push_str(" - a path component is not a directory.");
                }
                libc::EISDIR => hint.push_str(" - is a directory; expected a file."),
                libc::ENOTEMPTY => hint.push_str(" - directory not empty."),
                libc::EXDEV => {
                    hint.push_str(" - cross-filesystem; rename across devices is not possible.");
                }
                libc::ENOSPC => hint.push_str(" - insufficient space on device."),
                libc::EROFS => hint.push_str(" - read-only filesystem; cannot write here."),
                libc::ENAMETOOLONG => {
                    hint.push_str(" - filename or path too long; shorten path segments.");
                }
                libc::EMFILE => {
                    hint.push_str(" - process file descriptor limit reached.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => hint.push_str(" - access denied; check permissions."), // ERROR_ACCESS_DENIED
                2 | 3 => hint.push_str(" - path not found; verify it exists."),
                80 | 183 => hint.push_str(" - already exists; pick a unique name."),
                17 => hint.push_str(" - not same device; cross-filesystem rename."),
                32 => hint.push_str(" - sharing violation; file is in use."),
                112 => hint.push_str(" - insufficient disk space."),
                206 => hint.push_str(" - filename or path too long."),
                _ => {}
            }
        }
        hint.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                hint.push_str(" - permission denied; check ownership and permissions.");
            }
            io::ErrorKind::NotFound => hint.push_str(" - path not found; verify it exists."),
            io::ErrorKind::AlreadyExists => {
                hint.push_str(" - already exists; remove or choose a unique name.");
            }
            io::ErrorKind::InvalidData => hint.push_str(" - content is not valid UTF-8 text."),
            _ => {}
        }
    }

    hint
}

/// Returns a closure suitable for `.map_err(...)` that wraps io::Error into FsKitError::Io.
pub fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> FsKitError + 'a {
    move |e: io::Error| FsKitError::Io {
        op,
        path: path.to_path_buf(),
        hint: hint_for(&e),
        source: e,
    }
}
