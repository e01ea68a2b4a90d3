use std::process::ExitCode;

use clap::Parser;

mod cli;
mod entropy;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::install_handlers();
    exits::disable_core_dumps();

    let interactive_by_default = std::env::args_os().len() <= 1;
    let args = cli::Args::parse();
    logging::init(args.verbose);

    if interactive_by_default || args.interactive {
        tui::run(&args)
    } else {
        cli::run(args)
    }
}
