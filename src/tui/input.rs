//! Raw-mode line prompts.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::exits;
use crate::terminal::{DIM, RESET, RawModeGuard, flush};

/// Longest length a user can type.
const MAX_DIGITS: usize = 6;

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Submit,
    Cancel,
    Interrupt,
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Digit buffer with a cursor, edited one key at a time.
#[derive(Debug)]
struct DigitEditor {
    digits: String,
    /// 0-based insertion point.
    cursor: usize,
}

impl DigitEditor {
    fn new(initial: usize) -> Self {
        let digits = if initial > 0 {
            initial.to_string()
        } else {
            String::new()
        };
        let cursor = digits.len();
        Self { digits, cursor }
    }

    fn handle(&mut self, key: &KeyEvent) -> Step {
        if is_ctrl(key, 'c') {
            return Step::Interrupt;
        }
        if is_ctrl(key, 'u') {
            self.digits.clear();
            self.cursor = 0;
            return Step::Continue;
        }

        match key.code {
            KeyCode::Esc => return Step::Cancel,
            KeyCode::Enter => return Step::Submit,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.digits.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.digits.len() => {
                self.digits.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.digits.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.digits.len(),
            KeyCode::Char(c) if c.is_ascii_digit() && self.digits.len() < MAX_DIGITS => {
                self.digits.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Step::Continue
    }

    /// Empty input reads as zero.
    fn value(&self) -> usize {
        self.digits.parse().unwrap_or(0)
    }
}

/// Read a number with in-place editing. `None` if the user pressed Esc.
/// Falls back to `initial` when the terminal cannot enter raw mode.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    let mut editor = DigitEditor::new(initial);

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial),
    };

    print!("{prompt}: {}", editor.digits);
    flush();
    let mut drawn = editor.digits.len();

    let step = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(_) => break Step::Cancel,
        };

        match editor.handle(&key) {
            Step::Continue => {}
            step => break step,
        }

        print!("\r{prompt}: {}", " ".repeat(drawn + 1));
        print!("\r{prompt}: {}", editor.digits);
        print!("\x1b[{}G", prompt.len() + 3 + editor.cursor);
        flush();
        drawn = editor.digits.len();
    };

    guard.release();
    println!();

    match step {
        Step::Interrupt => exits::interrupted(),
        Step::Cancel => None,
        _ => Some(editor.value()),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Reply {
    Answer(bool),
    Cancel,
    Interrupt,
}

fn reply(key: &KeyEvent, default: bool) -> Option<Reply> {
    if is_ctrl(key, 'c') {
        return Some(Reply::Interrupt);
    }
    match key.code {
        KeyCode::Enter => Some(Reply::Answer(default)),
        KeyCode::Char('y' | 'Y') => Some(Reply::Answer(true)),
        KeyCode::Char('n' | 'N') => Some(Reply::Answer(false)),
        KeyCode::Esc => Some(Reply::Cancel),
        _ => None,
    }
}

fn hint(default: bool) -> &'static str {
    if default { "[Y/n]" } else { "[y/N]" }
}

/// Ask a yes/no question; Enter takes `default`. `None` if the user pressed Esc.
pub fn confirm(prompt: &str, default: bool) -> Option<bool> {
    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(default),
    };

    print!("{prompt} {DIM}{}{RESET} ", hint(default));
    flush();

    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(r) = reply(&key, default) {
                    break r;
                }
            }
            Ok(_) => {}
            Err(_) => break Reply::Cancel,
        }
    };

    guard.release();

    match outcome {
        Reply::Answer(answer) => {
            println!("{}", if answer { "Yes" } else { "No" });
            Some(answer)
        }
        Reply::Cancel => {
            println!();
            None
        }
        Reply::Interrupt => exits::interrupted(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_keys(editor: &mut DigitEditor, keys: &[KeyEvent]) -> Step {
        let mut last = Step::Continue;
        for k in keys {
            last = editor.handle(k);
        }
        last
    }

    #[test]
    fn starts_with_initial_value() {
        let editor = DigitEditor::new(12);
        assert_eq!(editor.digits, "12");
        assert_eq!(editor.cursor, 2);
        assert_eq!(editor.value(), 12);
    }

    #[test]
    fn edits_at_cursor() {
        let mut editor = DigitEditor::new(12);
        let step = type_keys(
            &mut editor,
            &[
                key(KeyCode::Left),
                key(KeyCode::Char('0')),
                key(KeyCode::End),
                key(KeyCode::Char('x')),
                key(KeyCode::Backspace),
                key(KeyCode::Enter),
            ],
        );
        assert_eq!(step, Step::Submit);
        assert_eq!(editor.value(), 10);
    }

    #[test]
    fn delete_and_home() {
        let mut editor = DigitEditor::new(345);
        type_keys(&mut editor, &[key(KeyCode::Home), key(KeyCode::Delete)]);
        assert_eq!(editor.value(), 45);
        assert_eq!(editor.cursor, 0);
        type_keys(&mut editor, &[key(KeyCode::Backspace)]);
        assert_eq!(editor.value(), 45);
    }

    #[test]
    fn clear_line_gives_zero() {
        let mut editor = DigitEditor::new(99);
        type_keys(&mut editor, &[ctrl('u')]);
        assert_eq!(editor.value(), 0);
    }

    #[test]
    fn digits_are_capped() {
        let mut editor = DigitEditor::new(0);
        let keys: Vec<KeyEvent> = "12345678".chars().map(|c| key(KeyCode::Char(c))).collect();
        type_keys(&mut editor, &keys);
        assert_eq!(editor.value(), 123_456);
    }

    #[test]
    fn escape_and_interrupt() {
        assert_eq!(DigitEditor::new(5).handle(&key(KeyCode::Esc)), Step::Cancel);
        assert_eq!(DigitEditor::new(5).handle(&ctrl('c')), Step::Interrupt);
    }

    #[test]
    fn confirm_replies() {
        assert_eq!(reply(&key(KeyCode::Enter), true), Some(Reply::Answer(true)));
        assert_eq!(reply(&key(KeyCode::Enter), false), Some(Reply::Answer(false)));
        assert_eq!(reply(&key(KeyCode::Char('Y')), false), Some(Reply::Answer(true)));
        assert_eq!(reply(&key(KeyCode::Char('n')), true), Some(Reply::Answer(false)));
        assert_eq!(reply(&key(KeyCode::Esc), true), Some(Reply::Cancel));
        assert_eq!(reply(&ctrl('c'), true), Some(Reply::Interrupt));
        assert_eq!(reply(&key(KeyCode::Char('q')), true), None);
    }

    #[test]
    fn hint_marks_default() {
        assert_eq!(hint(true), "[Y/n]");
        assert_eq!(hint(false), "[y/N]");
    }
}
