//! Consistent user-facing messages on stdout/stderr.
//! Prefixes are coloured only when stdout is a TTY.

use owo_colors::OwoColorize;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{} {}", "ok:".green().bold(), msg);
    } else {
        println!("ok: {}", msg);
    }
}

/// Plain line with no prefix, for output meant to be scripted against
/// (file contents, listings, computed names).
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Indented tree line for a listing entry; directories get a trailing slash.
pub fn print_tree_line(depth: usize, name: &str, is_dir: bool) {
    let indent = "  ".repeat(depth);
    if is_dir && is_tty() {
        println!("{}{}/", indent, name.blue().bold());
    } else if is_dir {
        println!("{}{}/", indent, name);
    } else {
        println!("{}{}", indent, name);
    }
}
