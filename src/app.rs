//! Application orchestrator.
//! Loads/merges config, initializes logging, builds the file and directory
//! components, and dispatches the requested subcommand.

use anyhow::{bail, Context, Result};
use tracing::{debug, error};

use fskit::output as out;
use fskit::{load_config, CopyReport, DirEntry, DirOps, FileOps, FsKitError};

use crate::cli::{Args, Command, DirCommand, FileCommand};
use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    args.apply_overrides(&mut cfg);
    cfg.validate()?;

    // Hold the guard until return so the file appender flushes.
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json_logs)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {}", e)))?;

    debug!(?args, "Starting fskit");

    let files = FileOps::new();
    let dirs = DirOps::from_config(&cfg);

    match args.command {
        Command::File(cmd) => run_file(&files, cmd),
        Command::Dir(cmd) => run_dir(&dirs, cmd),
    }
}

/// Log a library error with its code and kind, then hand it to anyhow.
fn report(e: FsKitError) -> anyhow::Error {
    error!(code = e.code(), kind = %e.kind(), error = %e, "Operation failed");
    e.into()
}

fn run_file(files: &FileOps, cmd: FileCommand) -> Result<()> {
    match cmd {
        FileCommand::Read { path, json } => {
            let read = files.read(&path).map_err(report)?;
            if json {
                out::print_user(&serde_json::to_string_pretty(&read).context("serialize file")?);
            } else {
                print!("{}", read.content);
            }
        }
        FileCommand::Create { path, content } => {
            files.create(&path, &content).map_err(report)?;
            out::print_success(&format!("Wrote {}", path.display()));
        }
        FileCommand::Update { path, content } => {
            files.update(&path, &content).map_err(report)?;
            out::print_success(&format!("Updated {}", path.display()));
        }
        FileCommand::Delete { path } => {
            files.delete(&path).map_err(report)?;
            out::print_success(&format!("Removed {}", path.display()));
        }
        FileCommand::Rename { old, new } => {
            files.rename(&old, &new).map_err(report)?;
            out::print_success(&format!("Renamed {} -> {}", old.display(), new.display()));
        }
        FileCommand::Copy { old, new } => {
            files.copy(&old, &new).map_err(report)?;
            out::print_success(&format!("Copied {} -> {}", old.display(), new.display()));
        }
    }
    Ok(())
}

fn run_dir(dirs: &DirOps, cmd: DirCommand) -> Result<()> {
    match cmd {
        DirCommand::Exists { path } => {
            out::print_user(&dirs.exists(&path).map_err(report)?.to_string());
        }
        DirCommand::Check { path } => {
            out::print_user(&dirs.check(&path).map_err(report)?.to_string());
        }
        DirCommand::Create { path } => {
            dirs.create(&path).map_err(report)?;
            out::print_success(&format!("Created {}", path.display()));
        }
        DirCommand::Rename { old, new } => {
            dirs.rename(&old, &new).map_err(report)?;
            out::print_success(&format!("Renamed {} -> {}", old.display(), new.display()));
        }
        DirCommand::Delete { path } => {
            dirs.delete(&path).map_err(report)?;
            out::print_success(&format!("Removed {}", path.display()));
        }
        DirCommand::List {
            path,
            recursive,
            json,
        } => {
            let entries = dirs.list(&path, recursive).map_err(report)?;
            if json {
                out::print_user(
                    &serde_json::to_string_pretty(&entries).context("serialize listing")?,
                );
            } else {
                print_entries(&entries, 0);
            }
        }
        DirCommand::FreeName { base, ext } => {
            let name = dirs.last_name(&base, &ext).map_err(report)?;
            out::print_user(&name.display().to_string());
        }
        DirCommand::Copy { source, dest } => {
            let copy = dirs.copy(&source, dest.as_deref()).map_err(report)?;
            finish_copy(&copy)?;
            out::print_user(&copy.dest.display().to_string());
        }
        DirCommand::Move { source, dest, .. } => {
            let moved = dirs.move_dir(&source, dest.as_deref()).map_err(report)?;
            if !moved.source_removed {
                out::print_warn(&format!("Source kept: {}", source.display()));
            }
            finish_copy(&moved.copy)?;
            out::print_user(&moved.copy.dest.display().to_string());
        }
    }
    Ok(())
}

fn print_entries(entries: &[DirEntry], depth: usize) {
    for e in entries {
        let name = e.name_with_extension.as_deref().unwrap_or(&e.name);
        out::print_tree_line(depth, name, e.is_dir());
        if let Some(children) = &e.children {
            print_entries(children, depth + 1);
        }
    }
}

/// Print per-entry failures; fail the command if there were any.
fn finish_copy(copy: &CopyReport) -> Result<()> {
    for f in &copy.failures {
        out::print_warn(&format!("{}: {}", f.path.display(), f.error));
    }
    if !copy.is_complete() {
        bail!(
            "{} entries failed to copy into {}",
            copy.failures.len(),
            copy.dest.display()
        );
    }
    out::print_success(&format!(
        "Copied {} files, created {} directories",
        copy.files_copied, copy.dirs_created
    ));
    Ok(())
}
