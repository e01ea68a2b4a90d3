//! Password generation and output.

pub mod charset;
mod error;
mod generate;
mod options;
pub mod output;

pub use error::GenerationError;
pub use generate::{Password, generate};
pub use options::{DEFAULT_LENGTH, GenerationOptions, GenerationRequest};
