//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Keeps the terminal in raw mode for as long as it lives.
///
/// Nested guards are harmless: only the guard that actually switched raw mode
/// on switches it off again.
pub struct RawModeGuard {
    owns: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        if is_raw_mode_enabled()? {
            return Ok(Self { owns: false });
        }
        enable_raw_mode()?;
        Ok(Self { owns: true })
    }

    /// Leave raw mode now instead of at drop.
    pub fn release(&mut self) {
        if self.owns {
            let _ = disable_raw_mode();
            self.owns = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.release();
    }
}
