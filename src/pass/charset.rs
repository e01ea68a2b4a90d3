//! Character classes and alphabet construction.
//!
//! Letter and digit alphabets leave out glyphs that are easy to misread
//! (`i`, `l`, `o`, `I`, `O`, `0`, `1`). Uppercase `L` stays in.

use super::GenerationOptions;

pub const LOWERCASE: &str = "abcdefghjkmnpqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
pub const DIGITS: &str = "23456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Concatenation order for the alphabet.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub const fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub const fn is_letter(self) -> bool {
        matches!(self, CharacterClass::Lowercase | CharacterClass::Uppercase)
    }

    fn enabled(self, options: &GenerationOptions) -> bool {
        match self {
            CharacterClass::Lowercase => options.include_lowercase,
            CharacterClass::Uppercase => options.include_uppercase,
            CharacterClass::Digit => options.include_numbers,
            CharacterClass::Symbol => options.include_symbols,
        }
    }
}

/// Build the alphabet from every enabled class.
pub fn build(options: &GenerationOptions) -> Vec<char> {
    collect(options, |_| true)
}

/// Build the letter-only alphabet used to fix up the first character.
pub fn letters(options: &GenerationOptions) -> Vec<char> {
    collect(options, CharacterClass::is_letter)
}

fn collect(options: &GenerationOptions, keep: impl Fn(CharacterClass) -> bool) -> Vec<char> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| class.enabled(options) && keep(*class))
        .flat_map(|class| class.alphabet().chars())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(f: impl FnOnce(&mut GenerationOptions)) -> GenerationOptions {
        let mut options = GenerationOptions::none();
        f(&mut options);
        options
    }

    #[test]
    fn ambiguous_glyphs_are_excluded() {
        for c in ['i', 'l', 'o', 'I', 'O', '0', '1'] {
            for class in CharacterClass::ALL {
                assert!(!class.alphabet().contains(c), "{c} found in {class:?}");
            }
        }
    }

    #[test]
    fn uppercase_keeps_l() {
        assert!(UPPERCASE.contains('L'));
        assert!(!LOWERCASE.contains('l'));
    }

    #[test]
    fn alphabet_sizes() {
        assert_eq!(LOWERCASE.len(), 23);
        assert_eq!(UPPERCASE.len(), 24);
        assert_eq!(DIGITS.len(), 8);
        assert_eq!(SYMBOLS.len(), 32);
    }

    #[test]
    fn classes_do_not_overlap() {
        let all: Vec<char> = build(&GenerationOptions::all());
        let mut sorted = all.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), all.len());
    }

    #[test]
    fn build_follows_class_order() {
        let options = only(|o| {
            o.include_symbols = true;
            o.include_lowercase = true;
        });
        let expected: String = format!("{LOWERCASE}{SYMBOLS}");
        assert_eq!(build(&options).into_iter().collect::<String>(), expected);
    }

    #[test]
    fn build_empty_without_classes() {
        assert!(build(&GenerationOptions::none()).is_empty());
    }

    #[test]
    fn letters_ignore_digits_and_symbols() {
        let options = only(|o| {
            o.include_uppercase = true;
            o.include_numbers = true;
            o.include_symbols = true;
        });
        assert_eq!(letters(&options).into_iter().collect::<String>(), UPPERCASE);

        let options = only(|o| o.include_numbers = true);
        assert!(letters(&options).is_empty());
    }
}
