//! Password generation.

use std::fmt;

use rand::Rng;
use tracing::{debug, trace};
use zeroize::Zeroize;

use super::{GenerationError, GenerationOptions, GenerationRequest, charset};

/// A generated password. The buffer is wiped on drop.
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generate one password satisfying every active option.
///
/// Positions are filled strictly in order. For each position the candidates
/// are the alphabet entries that pass the duplicate check and then the
/// sequential check against the previous character; one is drawn uniformly.
/// This is the same distribution as drawing from the full alphabet and
/// redrawing on rejection, but an empty candidate set is detected instead of
/// retried forever.
///
/// With `begin_with_letter`, a non-letter first character is replaced after
/// filling by a letter from the enabled letter classes. The replacement is not
/// checked against the duplicate or sequential policies.
pub fn generate<R: Rng>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Password, GenerationError> {
    let options = &request.options;
    let length = request.length.get();

    let alphabet = charset::build(options);
    if alphabet.is_empty() {
        return Err(GenerationError::NoCharacterSetSelected);
    }
    debug!(length, alphabet_size = alphabet.len(), ?options, "generating password");

    if options.no_duplicate_characters && length > alphabet.len() {
        debug!(length, alphabet_size = alphabet.len(), "length exceeds distinct characters");
        return Err(GenerationError::AlphabetExhausted {
            position: alphabet.len(),
            alphabet_size: alphabet.len(),
        });
    }

    let mut chars = fill(&alphabet, length, options, rng)?;

    if options.begin_with_letter && !chars[0].is_ascii_alphabetic() {
        let letters = charset::letters(options);
        if letters.is_empty() {
            chars.zeroize();
            return Err(GenerationError::NoLettersAvailable);
        }
        chars[0] = letters[rng.random_range(0..letters.len())];
        trace!("replaced leading non-letter");
    }

    let password = Password(chars.iter().collect());
    chars.zeroize();
    debug_assert_eq!(password.len(), length);
    Ok(password)
}

fn fill<R: Rng>(
    alphabet: &[char],
    length: usize,
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<Vec<char>, GenerationError> {
    let mut chars: Vec<char> = Vec::with_capacity(length);
    let mut used = vec![false; alphabet.len()];
    let mut candidates: Vec<usize> = Vec::with_capacity(alphabet.len());

    for position in 0..length {
        let previous = chars.last().copied();

        candidates.clear();
        candidates.extend((0..alphabet.len()).filter(|&i| {
            if options.no_duplicate_characters && used[i] {
                return false;
            }
            !(options.no_sequential_characters
                && previous.is_some_and(|p| is_sequential(p, alphabet[i])))
        }));

        if candidates.is_empty() {
            debug!(position, alphabet_size = alphabet.len(), "no candidate left");
            chars.zeroize();
            return Err(GenerationError::AlphabetExhausted {
                position,
                alphabet_size: alphabet.len(),
            });
        }
        trace!(position, candidates = candidates.len());

        let index = candidates[rng.random_range(0..candidates.len())];
        if options.no_duplicate_characters {
            used[index] = true;
        }
        chars.push(alphabet[index]);
    }

    candidates.zeroize();
    Ok(chars)
}

#[inline]
fn is_sequential(a: char, b: char) -> bool {
    (a as u32).abs_diff(b as u32) == 1
}
