//! Client mode: options from flags, output to terminal and clipboard.

mod args;
mod context;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use tracing::debug;

pub use args::Args;
pub use context::Context;

use crate::settings::Settings;

/// Run client mode to completion.
pub fn run(args: Args) -> ExitCode {
    Context::new(args).run()
}

/// Saved defaults, or factory defaults if they cannot be read.
pub fn load_settings() -> Settings {
    Settings::load_from_file().unwrap_or_else(|e| {
        debug!(error = %e, "falling back to default settings");
        prompts::warn(&format!("Failed to load settings: {e}"));
        Settings::default()
    })
}
