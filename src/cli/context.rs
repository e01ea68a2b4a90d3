//! CLI context - bundles settings and flags for client mode.

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::debug;

use super::{Args, load_settings, prompts, quiet};
use crate::pass::{self, Password, output};
use crate::settings::{Settings, SettingsError};

/// Why `execute` stopped early.
enum Halt {
    /// Nothing left to do; not an error.
    Done,
    Failed,
}

/// Application context for client mode.
pub struct Context {
    settings: Settings,
    args: Args,
}

impl Context {
    pub fn new(args: Args) -> Self {
        Self {
            settings: load_settings(),
            args,
        }
    }

    pub fn run(&mut self) -> ExitCode {
        match self.execute() {
            Ok(()) | Err(Halt::Done) => ExitCode::SUCCESS,
            Err(Halt::Failed) => ExitCode::FAILURE,
        }
    }

    fn execute(&mut self) -> Result<(), Halt> {
        self.handle_reset()?;
        self.apply_flags();
        quiet::set(self.settings.quiet);
        self.handle_save()?;
        self.generate_output()
    }

    fn handle_reset(&mut self) -> Result<(), Halt> {
        if !self.args.reset {
            return Ok(());
        }
        quiet::set(self.args.quiet);
        self.settings = Settings::default();
        report_save(self.settings.save_to_file(), "reset")?;
        Err(Halt::Done)
    }

    /// Apply CLI flags on top of the saved settings.
    fn apply_flags(&mut self) {
        if let Some(length) = self.args.length {
            self.settings.length = length;
        }
        if let Some(source) = self.args.source {
            self.settings.source = source;
        }
        self.settings.options = self.args.apply_to(self.settings.options);
        self.settings.quiet |= self.args.quiet;
    }

    fn handle_save(&self) -> Result<(), Halt> {
        if !self.args.save {
            return Ok(());
        }
        report_save(self.settings.save_to_file(), "save")
    }

    /// Generate the requested batch and hand it to the result sink.
    fn generate_output(&self) -> Result<(), Halt> {
        let count = self.args.number.map_or(1, NonZeroUsize::get);
        let request = self.settings.request();
        let mut rng = self.settings.source.rng();
        debug!(
            count,
            length = request.length.get(),
            source = self.settings.source.name(),
            "client mode"
        );

        let passwords = generate_batch(&request, &mut rng, count).map_err(|e| {
            output::report(&e);
            Halt::Failed
        })?;

        output::show(&passwords);
        if self.args.clipboard {
            output::copy_to_clipboard(&passwords);
        }
        Ok(())
    }
}

/// Confirm a settings write, or report it and stop the run.
fn report_save(result: Result<PathBuf, SettingsError>, action: &str) -> Result<(), Halt> {
    match result {
        Ok(path) => {
            prompts::settings_saved(&path);
            Ok(())
        }
        Err(e) => {
            prompts::error(&format!("Failed to {action} settings: {e}"));
            Err(Halt::Failed)
        }
    }
}

/// Generate `count` passwords, stopping at the first failure.
fn generate_batch<R: rand::Rng>(
    request: &pass::GenerationRequest,
    rng: &mut R,
    count: usize,
) -> Result<Vec<Password>, pass::GenerationError> {
    (0..count).map(|_| pass::generate(request, rng)).collect()
}
