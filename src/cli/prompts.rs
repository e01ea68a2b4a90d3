//! Centralized warning and status messages.

use std::path::Path;

use super::quiet;
use crate::terminal::{RED, RESET, YELLOW};

/// Print a warning to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red) - never suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Clipboard problems only warn; the password has already been shown.
pub fn clipboard_error(err: &str) {
    warn(&format!("Clipboard unavailable: {err}"));
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        println!("Defaults saved \u{2192} {}", path.display());
    }
}
