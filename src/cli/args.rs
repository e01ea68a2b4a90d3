//! Command-line flags.

use std::num::NonZeroUsize;

use clap::{ArgAction, Parser};

use crate::entropy::EntropySource;
use crate::pass::GenerationOptions;

/// Generate passwords with composable character-class and adjacency rules.
///
/// Without arguments an interactive session asks for each option. Flags that
/// are not given fall back to the saved defaults.
#[derive(Debug, Parser)]
#[command(name = "passforge", version)]
pub struct Args {
    /// Characters per password
    #[arg(short, long, value_name = "N")]
    pub length: Option<NonZeroUsize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", conflicts_with = "interactive")]
    pub number: Option<NonZeroUsize>,

    /// Include digits (2-9)
    #[arg(long, overrides_with = "no_numbers")]
    pub numbers: bool,
    #[arg(long, overrides_with = "numbers", hide_short_help = true)]
    pub no_numbers: bool,

    /// Include lowercase letters
    #[arg(long, overrides_with = "no_lowercase")]
    pub lowercase: bool,
    #[arg(long, overrides_with = "lowercase", hide_short_help = true)]
    pub no_lowercase: bool,

    /// Include uppercase letters
    #[arg(long, overrides_with = "no_uppercase")]
    pub uppercase: bool,
    #[arg(long, overrides_with = "uppercase", hide_short_help = true)]
    pub no_uppercase: bool,

    /// Include punctuation symbols
    #[arg(long, overrides_with = "no_symbols")]
    pub symbols: bool,
    #[arg(long, overrides_with = "symbols", hide_short_help = true)]
    pub no_symbols: bool,

    /// Begin with a letter
    #[arg(long, overrides_with = "no_letter_first")]
    pub letter_first: bool,
    #[arg(long, overrides_with = "letter_first", hide_short_help = true)]
    pub no_letter_first: bool,

    /// Never repeat a character
    #[arg(long, overrides_with = "allow_duplicates")]
    pub no_duplicates: bool,
    #[arg(long, overrides_with = "no_duplicates", hide_short_help = true)]
    pub allow_duplicates: bool,

    /// Never place characters with adjacent code points next to each other
    #[arg(long, overrides_with = "allow_sequential")]
    pub no_sequential: bool,
    #[arg(long, overrides_with = "no_sequential", hide_short_help = true)]
    pub allow_sequential: bool,

    /// Copy the result to the clipboard
    #[arg(short = 'b', long = "board", conflicts_with = "interactive")]
    pub clipboard: bool,

    /// Randomness source
    #[arg(short, long, value_enum)]
    pub source: Option<EntropySource>,

    /// Save the effective options as the new defaults
    #[arg(long, conflicts_with = "interactive")]
    pub save: bool,

    /// Restore factory defaults and exit
    #[arg(long, conflicts_with_all = ["save", "interactive"])]
    pub reset: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,

    /// Ask for every option interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Overlay the explicitly given option flags on `base`.
    pub fn apply_to(&self, base: GenerationOptions) -> GenerationOptions {
        let mut options = base;
        let pairs = [
            (self.lowercase, self.no_lowercase, &mut options.include_lowercase),
            (self.uppercase, self.no_uppercase, &mut options.include_uppercase),
            (self.numbers, self.no_numbers, &mut options.include_numbers),
            (self.symbols, self.no_symbols, &mut options.include_symbols),
            (self.letter_first, self.no_letter_first, &mut options.begin_with_letter),
            (self.no_duplicates, self.allow_duplicates, &mut options.no_duplicate_characters),
            (self.no_sequential, self.allow_sequential, &mut options.no_sequential_characters),
        ];
        for (on, off, field) in pairs {
            if on {
                *field = true;
            } else if off {
                *field = false;
            }
        }
        options
    }
}
