//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Overrides the verbosity flag when set, e.g. `PASSFORGE_LOG=passforge=trace`.
const ENV_VAR: &str = "PASSFORGE_LOG";

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "passforge=warn",
        1 => "passforge=debug",
        _ => "passforge=trace",
    }
}

/// Log to stderr so stdout stays clean for piped passwords.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "passforge=warn");
        assert_eq!(default_directive(1), "passforge=debug");
        assert_eq!(default_directive(5), "passforge=trace");
    }
}
