//! CLI definition and parsing.
//!
//! Notes:
//! - Global flags may appear before or after the subcommand.
//! - --debug is a shorthand for --log-level debug and wins over it.
//! - Logs go to stderr so command output on stdout stays scriptable.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use fskit::{Config, LogLevel};

/// Uniform file and directory operations.
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "File and directory operations with explicit results")]
pub struct Args {
    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Read configuration from this XML file instead of the default location.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Single-file operations.
    #[command(subcommand)]
    File(FileCommand),
    /// Directory operations.
    #[command(subcommand)]
    Dir(DirCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum FileCommand {
    /// Print a text file.
    Read {
        #[arg(value_hint = ValueHint::FilePath)]
        path: PathBuf,
        /// Print the content and name parts as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Write CONTENT to PATH (creates or truncates).
    Create { path: PathBuf, content: String },
    /// Same as create.
    Update { path: PathBuf, content: String },
    /// Remove a file.
    Delete { path: PathBuf },
    /// Rename a file (directories are refused).
    Rename { old: PathBuf, new: PathBuf },
    /// Copy a file.
    Copy { old: PathBuf, new: PathBuf },
}

#[derive(Subcommand, Debug, Clone)]
pub enum DirCommand {
    /// Print whether PATH exists.
    Exists { path: PathBuf },
    /// Create a single directory level.
    Create { path: PathBuf },
    /// Rename a directory (or any path).
    Rename { old: PathBuf, new: PathBuf },
    /// Remove a directory tree.
    Delete { path: PathBuf },
    /// Print whether PATH is a directory.
    Check { path: PathBuf },
    /// List a directory.
    List {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,
        #[arg(short, long)]
        recursive: bool,
        /// Print entries as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the first free `BASE-copy[-n]EXT` name.
    FreeName {
        base: PathBuf,
        /// Extension including its dot, e.g. ".txt".
        #[arg(long, default_value = "")]
        ext: String,
    },
    /// Copy a directory tree (DEST defaults to SOURCE-copy).
    Copy {
        source: PathBuf,
        dest: Option<PathBuf>,
    },
    /// Copy a directory tree, then delete the source.
    Move {
        source: PathBuf,
        dest: Option<PathBuf>,
        /// Keep the source if any entry failed to copy.
        #[arg(long)]
        keep_source_on_failure: bool,
    },
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config value).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if let Command::Dir(DirCommand::Move {
            keep_source_on_failure: true,
            ..
        }) = &self.command
        {
            cfg.keep_source_on_partial_copy = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_wins_over_log_level() {
        let args = Args::parse_from(["fskit", "--debug", "--log-level", "quiet", "dir", "exists", "/x"]);
        assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));

        let args = Args::parse_from(["fskit", "dir", "exists", "/x", "--log-level", "info"]);
        assert_eq!(args.effective_log_level(), Some(LogLevel::Info));
    }

    #[test]
    fn move_flag_sets_keep_source() {
        let args = Args::parse_from([
            "fskit",
            "--log-file",
            "/tmp/f.log",
            "dir",
            "move",
            "/a",
            "/b",
            "--keep-source-on-failure",
        ]);
        let mut cfg = Config::default();
        args.apply_overrides(&mut cfg);
        assert!(cfg.keep_source_on_partial_copy);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/f.log")));
        assert_eq!(cfg.log_level, LogLevel::Normal);
    }

    #[test]
    fn copy_dest_is_optional() {
        let args = Args::parse_from(["fskit", "dir", "copy", "/src"]);
        match args.command {
            Command::Dir(DirCommand::Copy { source, dest }) => {
                assert_eq!(source, PathBuf::from("/src"));
                assert!(dest.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
