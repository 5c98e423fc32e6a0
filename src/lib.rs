//! Core library for `fskit`.
//!
//! Uniform, Result-returning wrappers over file and directory primitives:
//! - [`FileOps`]: read/create/update/delete/rename/copy a single file.
//! - [`DirOps`]: exists/create/rename/delete/check a directory, list it
//!   (optionally recursively), pick a free `-copy` name, and copy or move a tree.
//!
//! Nothing here is global: build the components you need and pass them around.
//!
//! ```no_run
//! use fskit::{DirOps, FileOps};
//!
//! let files = FileOps::new();
//! files.create("/tmp/notes.txt", "hello")?;
//! assert_eq!(files.read("/tmp/notes.txt")?.content, "hello");
//!
//! let dirs = DirOps::default();
//! let report = dirs.copy("/tmp/project", None)?; // -> /tmp/project-copy
//! assert!(report.is_complete());
//! # Ok::<(), fskit::FsKitError>(())
//! ```

pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;

pub use config::{default_config_path, load_config, Config, LogLevel};
pub use errors::{ErrorKind, FsKitError, Result};
pub use fs_ops::{
    CopyFailure, CopyReport, DirEntry, DirOps, DirOptions, FileOps, MoveReport, ReadOutput,
};
