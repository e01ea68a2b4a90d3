//! Generation options and requests.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LENGTH: NonZeroUsize = NonZeroUsize::new(12).unwrap();

/// Independent policy flags for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub begin_with_letter: bool,
    pub no_duplicate_characters: bool,
    pub no_sequential_characters: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: false,
            begin_with_letter: true,
            no_duplicate_characters: false,
            no_sequential_characters: false,
        }
    }
}

#[cfg(test)]
impl GenerationOptions {
    pub fn none() -> Self {
        Self {
            include_lowercase: false,
            include_uppercase: false,
            include_numbers: false,
            include_symbols: false,
            begin_with_letter: false,
            no_duplicate_characters: false,
            no_sequential_characters: false,
        }
    }

    pub fn all() -> Self {
        Self {
            include_lowercase: true,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            ..Self::none()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: NonZeroUsize,
    pub options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(length: NonZeroUsize, options: GenerationOptions) -> Self {
        Self { length, options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_prompt_defaults() {
        let options = GenerationOptions::default();
        assert_eq!(DEFAULT_LENGTH.get(), 12);
        assert!(options.include_numbers);
        assert!(options.include_lowercase);
        assert!(options.include_uppercase);
        assert!(!options.include_symbols);
        assert!(options.begin_with_letter);
        assert!(!options.no_duplicate_characters);
        assert!(!options.no_sequential_characters);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options: GenerationOptions =
            serde_json::from_str(r#"{ "include_symbols": true }"#).unwrap();
        assert!(options.include_symbols);
        assert!(options.begin_with_letter);
    }
}
