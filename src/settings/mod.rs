//! Persisted default options.

mod file;

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entropy::EntropySource;
use crate::pass::{DEFAULT_LENGTH, GenerationOptions, GenerationRequest};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no configuration directory available on this platform")]
    NoConfigDir,

    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub length: NonZeroUsize,
    pub options: GenerationOptions,
    pub source: EntropySource,
    pub quiet: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        file::load(&file::path()?)
    }

    pub fn save_to_file(&self) -> Result<PathBuf, SettingsError> {
        let path = file::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.options)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            options: GenerationOptions::default(),
            source: EntropySource::default(),
            quiet: false,
        }
    }
}
