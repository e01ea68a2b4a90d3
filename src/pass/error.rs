use thiserror::Error;

/// Unsatisfiable constraint combinations. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("no character sets selected")]
    NoCharacterSetSelected,

    #[error("no letters available to begin the password")]
    NoLettersAvailable,

    #[error("no unused character left for position {position} (alphabet has {alphabet_size})")]
    AlphabetExhausted { position: usize, alphabet_size: usize },
}

impl GenerationError {
    /// Stable name of the condition, shown alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::NoCharacterSetSelected => "NoCharacterSetSelected",
            GenerationError::NoLettersAvailable => "NoLettersAvailable",
            GenerationError::AlphabetExhausted { .. } => "AlphabetExhausted",
        }
    }
}
