//! Interactive option collector.

mod input;

use std::num::NonZeroUsize;
use std::process::ExitCode;

use tracing::debug;

pub use input::*;

use crate::cli::{self, Args, quiet};
use crate::pass::{self, GenerationOptions, GenerationRequest, output};
use crate::settings::Settings;
use crate::terminal::{box_bottom, box_line, box_top, print_error};

/// Run an interactive session: ask, generate once, show and copy.
pub fn run(args: &Args) -> ExitCode {
    let mut settings = cli::load_settings();
    if let Some(length) = args.length {
        settings.length = length;
    }
    if let Some(source) = args.source {
        settings.source = source;
    }
    settings.options = args.apply_to(settings.options);
    quiet::set(settings.quiet || args.quiet);

    print_banner();

    let Some(request) = collect(&settings) else {
        println!("Cancelled.");
        return ExitCode::SUCCESS;
    };
    debug!(length = request.length.get(), source = settings.source.name(), "interactive mode");

    let mut rng = settings.source.rng();
    match pass::generate(&request, &mut rng) {
        Ok(password) => {
            let batch = [password];
            output::show(&batch);
            output::copy_to_clipboard(&batch);
            ExitCode::SUCCESS
        }
        Err(e) => {
            output::report(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_banner() {
    box_top("passforge");
    box_line("Enter keeps the default \u{2022} Esc cancels \u{2022} Ctrl+C quits");
    box_bottom();
}

/// Ask for every option in turn, pre-filled from `defaults`.
pub fn collect(defaults: &Settings) -> Option<GenerationRequest> {
    let length = prompt_length(defaults.length)?;
    let d = defaults.options;

    let include_numbers = confirm("Include numbers?", d.include_numbers)?;
    let include_lowercase = confirm("Include lowercase characters?", d.include_lowercase)?;
    let include_uppercase = confirm("Include uppercase characters?", d.include_uppercase)?;
    let include_symbols = confirm("Include symbols?", d.include_symbols)?;
    let begin_with_letter = confirm("Begin with a letter?", d.begin_with_letter)?;
    let no_duplicate_characters = confirm("No duplicate characters?", d.no_duplicate_characters)?;
    let no_sequential_characters =
        confirm("No sequential characters?", d.no_sequential_characters)?;

    Some(GenerationRequest::new(
        length,
        GenerationOptions {
            include_lowercase,
            include_uppercase,
            include_numbers,
            include_symbols,
            begin_with_letter,
            no_duplicate_characters,
            no_sequential_characters,
        },
    ))
}

fn prompt_length(default: NonZeroUsize) -> Option<NonZeroUsize> {
    loop {
        let value = get_numeric_input("Enter the length of the password", default.get())?;
        match NonZeroUsize::new(value) {
            Some(length) => return Some(length),
            None => print_error("Length must be a positive number"),
        }
    }
}
