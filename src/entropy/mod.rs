//! Randomness sources.
//!
//! Everything here is a `rand::RngCore`, so the generator only ever sees a
//! uniform sampler and tests can substitute a seeded `StdRng`.

mod hw;

use rand::RngCore;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

pub use hw::HwRng;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntropySource {
    /// Thread-local generator seeded by the operating system.
    #[default]
    System,
    /// CPU cycle counter mixed through a small state machine.
    Hardware,
}

impl EntropySource {
    pub fn name(self) -> &'static str {
        match self {
            EntropySource::System => "system",
            EntropySource::Hardware => hw::source_name(),
        }
    }

    pub fn rng(self) -> SourceRng {
        match self {
            EntropySource::System => SourceRng::System(rand::rng()),
            EntropySource::Hardware => SourceRng::Hardware(HwRng::new()),
        }
    }
}

/// A generator for whichever source was selected.
pub enum SourceRng {
    System(ThreadRng),
    Hardware(HwRng),
}

impl RngCore for SourceRng {
    fn next_u32(&mut self) -> u32 {
        match self {
            SourceRng::System(rng) => rng.next_u32(),
            SourceRng::Hardware(rng) => rng.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            SourceRng::System(rng) => rng.next_u64(),
            SourceRng::Hardware(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            SourceRng::System(rng) => rng.fill_bytes(dst),
            SourceRng::Hardware(rng) => rng.fill_bytes(dst),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn every_source_samples_in_range() {
        for source in [EntropySource::System, EntropySource::Hardware] {
            let mut rng = source.rng();
            for _ in 0..1000 {
                assert!(rng.random_range(0..7usize) < 7);
            }
        }
    }

    #[test]
    fn source_names_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&EntropySource::Hardware).unwrap(), "\"hardware\"");
        let parsed: EntropySource = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, EntropySource::System);
    }
}
