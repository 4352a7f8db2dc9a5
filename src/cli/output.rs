use std::sync::atomic::{AtomicU8, Ordering};

use colored::Colorize;

const QUIET: u8 = 0;
const NORMAL: u8 = 1;
const VERBOSE: u8 = 2;

static LEVEL: AtomicU8 = AtomicU8::new(NORMAL);

/// Set the output level from the `--quiet` / `--verbose` flags.
pub fn init(quiet: bool, verbose: bool) {
    let level = if quiet {
        QUIET
    } else if verbose {
        VERBOSE
    } else {
        NORMAL
    };
    LEVEL.store(level, Ordering::Relaxed);
}

fn level() -> u8 {
    LEVEL.load(Ordering::Relaxed)
}

/// True when `--verbose` was given.
pub fn is_verbose() -> bool {
    level() >= VERBOSE
}

/// Print a success message.
pub fn success(msg: &str) {
    if level() >= NORMAL {
        println!("  {} {}", "✓".green(), msg);
    }
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if level() >= NORMAL {
        println!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message. Never suppressed.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}

/// Print a header line (verbose only).
pub fn header(msg: &str) {
    if is_verbose() {
        println!("\n{}", msg.bold());
    }
}

/// Print an indented detail line (verbose only).
pub fn detail(msg: &str) {
    if is_verbose() {
        println!("    {} {}", "•".dimmed(), msg);
    }
}
