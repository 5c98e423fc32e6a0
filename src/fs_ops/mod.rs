//! Filesystem operations: modularized.
//!
//! - `FileOps`: single-file read/create/update/delete/rename/copy.
//! - `DirOps`: directory exists/create/rename/delete/check, listing,
//!   `-copy` naming and the recursive copy/move. Owns a `FileOps`.

mod copy;
mod dir;
mod file;
mod helpers;
mod list;
mod naming;
pub mod probe;

pub use copy::{CopyFailure, CopyReport, MoveReport};
pub use dir::{DirOps, DirOptions, DEFAULT_MAX_NAME_ATTEMPTS};
pub use file::{FileOps, ReadOutput};
pub use helpers::io_error_with_help;
pub use list::DirEntry;
