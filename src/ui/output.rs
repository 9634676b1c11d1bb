//! ui::output
//!
//! User-facing output.
//!
//! # Streams
//!
//! stdout carries command results only (an outline, a document, a listing),
//! so it can be piped. [`result`] writes there regardless of verbosity.
//!
//! stderr carries everything meant for the person at the terminal:
//! [`note`], [`warn`], [`debug`] and [`error`].
//!
//! [`success`] is a one-line status that is itself the command's result
//! (`check`). It goes to stdout and is dropped under `--quiet`.
//!
//! Diagnostic logging is separate and goes through `tracing`.

use std::borrow::Cow;
use std::fmt::Display;
use std::io::{self, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Results and errors only
    Quiet,
    /// Results, notes and warnings
    Normal,
    /// Everything, including debug notes
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags. `quiet` wins over `debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Whether notes, warnings and status lines are shown.
    pub fn shows_notes(self) -> bool {
        self != Verbosity::Quiet
    }

    pub fn shows_debug(self) -> bool {
        self == Verbosity::Debug
    }
}

/// Write a command result to stdout, ending it with a newline if it does
/// not already have one. Empty results print nothing.
pub fn result(text: &str) {
    let text = terminated(text);
    let mut out = io::stdout().lock();
    // Write failures (a closed pipe) are ignored.
    let _ = out.write_all(text.as_bytes()).and_then(|()| out.flush());
}

/// Print a status line that is the command's result (hidden when quiet).
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_notes() {
        println!("{}", message);
    }
}

/// Print an informational note to stderr (hidden when quiet).
pub fn note(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_notes() {
        eprintln!("note: {}", message);
    }
}

/// Print a warning to stderr (hidden when quiet).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_notes() {
        eprintln!("warning: {}", message);
    }
}

/// Print a debug note to stderr (debug mode only).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows_debug() {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error to stderr (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Join items one per line, each behind `prefix`.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn terminated(text: &str) -> Cow<'_, str> {
    if text.is_empty() || text.ends_with('\n') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{text}\n"))
    }
}
