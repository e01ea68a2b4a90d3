//! Result sink: terminal display and clipboard delivery.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use super::{GenerationError, Password};
use crate::cli::prompts;
use crate::terminal::{GREEN, paint};

/// Print a batch. A single password gets a labelled, coloured line; batches
/// are written one per line without decoration so they can be piped.
pub fn show(passwords: &[Password]) {
    match passwords {
        [single] => {
            let mut line = format!("Generated password: {}", paint(GREEN, single.as_str()));
            println!("{line}");
            line.zeroize();
        }
        many => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for password in many {
                let _ = writeln!(out, "{}", password.as_str());
            }
            let _ = out.flush();
        }
    }
}

/// Place the batch on the system clipboard, one password per line.
/// Failures only warn; the batch has already been shown.
pub fn copy_to_clipboard(passwords: &[Password]) {
    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::clipboard_error(&e.to_string());
            return;
        }
    };

    let contents = join(passwords);
    match ctx.set_contents(contents.as_str().to_owned()) {
        Ok(()) => {
            // Reading back keeps X11 selections alive until another owner takes over.
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            debug!(count = passwords.len(), "copied to clipboard");
            prompts::clipboard_copied();
        }
        Err(e) => prompts::clipboard_error(&e.to_string()),
    }
}

/// Surface a generation failure. Nothing is copied.
pub fn report(err: &GenerationError) {
    debug!(kind = err.kind(), "generation failed");
    prompts::error(&format!("Error: {}: {}", err.kind(), err));
}

fn join(passwords: &[Password]) -> Zeroizing<String> {
    let mut joined = Zeroizing::new(String::new());
    for (i, password) in passwords.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(password.as_str());
    }
    joined
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::{GenerationOptions, GenerationRequest, generate};

    #[test]
    fn join_one_per_line() {
        let request =
            GenerationRequest::new(NonZeroUsize::new(10).unwrap(), GenerationOptions::default());
        let mut rng = StdRng::seed_from_u64(5);
        let passwords: Vec<Password> = (0..3)
            .map(|_| generate(&request, &mut rng).unwrap())
            .collect();

        let joined = join(&passwords);
        let lines: Vec<&str> = joined.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, password) in lines.iter().zip(&passwords) {
            assert_eq!(*line, password.as_str());
        }
        assert!(!joined.ends_with('\n'));
    }

    #[test]
    fn join_empty() {
        assert!(join(&[]).is_empty());
    }
}
