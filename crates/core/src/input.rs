//! Input side of the prompts.
//!
//! [`InputReader`] covers line and single character reads and is implemented
//! for every [`BufRead`], so `std::io::stdin().lock()` and in-memory byte
//! slices both work. [`MaskedReader`] covers password entry with echo off.

use std::io::{self, BufRead, Read};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Line and character reads from an input stream.
///
/// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
pub trait InputReader {
    /// Reads one line and returns it without its `\n` terminator.
    ///
    /// A final line with no terminator is returned as is.
    fn next_line(&mut self) -> io::Result<String>;

    /// Reads exactly one UTF-8 character, leaving the rest of the line unread.
    fn next_rune(&mut self) -> io::Result<char>;

    /// Drops everything up to and including the next `\n`.
    ///
    /// Reaching the end of input here is not an error.
    fn skip_line(&mut self) -> io::Result<()>;
}

impl<R: BufRead + ?Sized> InputReader for R {
    fn next_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Err(end_of_input());
        }

        if line.ends_with('\n') {
            line.pop();
        }

        Ok(line)
    }

    fn next_rune(&mut self) -> io::Result<char> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf[..1])?;

        let width = utf8_width(buf[0]).ok_or_else(invalid_utf8)?;
        self.read_exact(&mut buf[1..width])?;

        std::str::from_utf8(&buf[..width])
            .map_err(|_| invalid_utf8())?
            .chars()
            .next()
            .ok_or_else(invalid_utf8)
    }

    fn skip_line(&mut self) -> io::Result<()> {
        let mut discarded = Vec::new();
        self.read_until(b'\n', &mut discarded)?;
        Ok(())
    }
}

/// Byte length of a UTF-8 sequence, judged by its first byte.
fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn end_of_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "input is not valid UTF-8")
}

/// Reads a line from the terminal without echoing it.
pub trait MaskedReader {
    fn read_masked(&mut self) -> io::Result<String>;
}

/// [`MaskedReader`] for the controlling terminal, using raw mode.
///
/// Fails when stdin is not a terminal, since raw mode cannot be enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct TtyMaskedReader;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Back to cooked mode however the read ended
        let _ = disable_raw_mode();
    }
}

impl MaskedReader for TtyMaskedReader {
    fn read_masked(&mut self) -> io::Result<String> {
        enable_raw_mode()?;
        let _raw_mode_guard = RawModeGuard;

        let mut secret = String::new();
        loop {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }

                if apply_masked_key(&mut secret, &key_event)? == MaskedKey::Submit {
                    return Ok(secret);
                }
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum MaskedKey {
    Continue,
    Submit,
}

fn apply_masked_key(secret: &mut String, key_event: &KeyEvent) -> io::Result<MaskedKey> {
    let control = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Enter => return Ok(MaskedKey::Submit),
        KeyCode::Char('c') if control => {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
        }
        KeyCode::Char('d') if control && secret.is_empty() => return Err(end_of_input()),
        KeyCode::Char(c) if !control => secret.push(c),
        KeyCode::Backspace => {
            secret.pop();
        }
        _ => {}
    }

    Ok(MaskedKey::Continue)
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

    #[test]
    fn test_next_line_strips_terminator() {
        let mut input: &[u8] = b"Alice\nBob\n";
        assert_eq!(input.next_line().unwrap(), "Alice");
        assert_eq!(input.next_line().unwrap(), "Bob");
    }

    #[test]
    fn test_next_line_keeps_carriage_return() {
        // Stripping `\r` is left to the prompt functions
        let mut input: &[u8] = b"Alice\r\n";
        assert_eq!(input.next_line().unwrap(), "Alice\r");
    }

    #[test]
    fn test_next_line_without_terminator() {
        let mut input: &[u8] = b"last";
        assert_eq!(input.next_line().unwrap(), "last");
    }

    #[test]
    fn test_next_line_end_of_input() {
        let mut input: &[u8] = b"";
        let err = input.next_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_next_rune_leaves_rest_of_line() {
        let mut input: &[u8] = b"yes\n";
        assert_eq!(input.next_rune().unwrap(), 'y');
        assert_eq!(input, b"es\n");
    }

    #[test]
    fn test_next_rune_multibyte() {
        let mut input: &[u8] = "é→🦀".as_bytes();
        assert_eq!(input.next_rune().unwrap(), 'é');
        assert_eq!(input.next_rune().unwrap(), '→');
        assert_eq!(input.next_rune().unwrap(), '🦀');
    }

    #[test]
    fn test_next_rune_invalid_utf8() {
        let mut input: &[u8] = &[0xFF, b'\n'];
        let err = input.next_rune().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_next_rune_truncated_sequence() {
        let mut input: &[u8] = &[0xE2, 0x86];
        let err = input.next_rune().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_next_rune_end_of_input() {
        let mut input: &[u8] = b"";
        let err = input.next_rune().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_skip_line() {
        let mut input: &[u8] = b"rest of line\nnext\n";
        input.skip_line().unwrap();
        assert_eq!(input, b"next\n");

        let mut input: &[u8] = b"no newline";
        input.skip_line().unwrap();
        assert!(input.is_empty());
        input.skip_line().unwrap();
    }

    #[test]
    fn test_masked_keys_build_secret() {
        let mut secret = String::new();
        for c in "hunter2".chars() {
            let outcome = apply_masked_key(&mut secret, &key(KeyCode::Char(c))).unwrap();
            assert_eq!(outcome, MaskedKey::Continue);
        }
        apply_masked_key(&mut secret, &key(KeyCode::Backspace)).unwrap();
        apply_masked_key(&mut secret, &key(KeyCode::Left)).unwrap();

        assert_eq!(secret, "hunter");
        assert_eq!(
            apply_masked_key(&mut secret, &key(KeyCode::Enter)).unwrap(),
            MaskedKey::Submit
        );
    }

    #[test]
    fn test_masked_shifted_characters_are_kept() {
        let mut secret = String::new();
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        apply_masked_key(&mut secret, &shifted).unwrap();
        assert_eq!(secret, "A");
    }

    #[test]
    fn test_masked_ctrl_c_interrupts() {
        let mut secret = "abc".to_string();
        let err = apply_masked_key(&mut secret, &ctrl('c')).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn test_masked_ctrl_d_only_ends_empty_input() {
        let mut secret = String::new();
        let err = apply_masked_key(&mut secret, &ctrl('d')).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let mut secret = "abc".to_string();
        apply_masked_key(&mut secret, &ctrl('d')).unwrap();
        assert_eq!(secret, "abc");
    }
}
