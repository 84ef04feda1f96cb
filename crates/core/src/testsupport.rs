//! Test doubles for code that prompts the user.
//!
//! [`RecordingTerminal`] stands in for a real terminal and remembers every
//! call made on it; [`ScriptedMaskedReader`] replays a fixed password read.

use std::fmt::Display;
use std::io;

use crate::error::{Error, Result};
use crate::input::MaskedReader;
use crate::terminal::{join_values, render_prompt, render_prompt_line, Terminal};

/// One recorded [`Terminal`] call. Printed text is stored fully rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    EnableAltScreenBuffer,
    DisableAltScreenBuffer,
    ClearScreen,
    ClearScreenAndScrollback,
    PrintLine(String),
    PrintPrompt(String),
    PrintPromptLine(String),
}

/// [`Terminal`] that records calls instead of writing anywhere.
///
/// Built with [`RecordingTerminal::failing_on_call`], one call fails with a
/// broken pipe write error. The failing call is still recorded.
#[derive(Debug, Default)]
pub struct RecordingTerminal {
    calls: Vec<Call>,
    fail_on_call: Option<usize>,
}

impl RecordingTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder whose `call_number`th call (counting from 1) fails.
    #[must_use]
    pub fn failing_on_call(call_number: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_on_call: Some(call_number),
        }
    }

    fn record(&mut self, call: Call) -> Result<()> {
        self.calls.push(call);
        if self.fail_on_call == Some(self.calls.len()) {
            return Err(Error::write(io::Error::from(io::ErrorKind::BrokenPipe)));
        }
        Ok(())
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Number of times `call` was made.
    pub fn count(&self, call: &Call) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    /// Rendered prompts, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::PrintPrompt(prompt) => Some(prompt.clone()),
                _ => None,
            })
            .collect()
    }

    /// Printed lines, in order, without their line endings.
    pub fn lines(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::PrintLine(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Terminal for RecordingTerminal {
    fn enable_alt_screen_buffer(&mut self) -> Result<()> {
        self.record(Call::EnableAltScreenBuffer)
    }

    fn disable_alt_screen_buffer(&mut self) -> Result<()> {
        self.record(Call::DisableAltScreenBuffer)
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.record(Call::ClearScreen)
    }

    fn clear_screen_and_scrollback(&mut self) -> Result<()> {
        self.record(Call::ClearScreenAndScrollback)
    }

    fn print_line(&mut self, values: &[&dyn Display]) -> Result<()> {
        self.record(Call::PrintLine(join_values(values)))
    }

    fn print_prompt(&mut self, message: &str, suffixes: &[&str]) -> Result<()> {
        self.record(Call::PrintPrompt(render_prompt(message, suffixes)))
    }

    fn print_prompt_line(&mut self, message: &str, suffixes: &[&str]) -> Result<()> {
        self.record(Call::PrintPromptLine(render_prompt_line(message, suffixes)))
    }
}

/// [`MaskedReader`] returning the same canned result on every read.
#[derive(Debug, Clone)]
pub struct ScriptedMaskedReader {
    result: std::result::Result<String, io::ErrorKind>,
}

impl ScriptedMaskedReader {
    pub fn ok(secret: impl Into<String>) -> Self {
        Self {
            result: Ok(secret.into()),
        }
    }

    pub fn failing(kind: io::ErrorKind) -> Self {
        Self { result: Err(kind) }
    }
}

impl MaskedReader for ScriptedMaskedReader {
    fn read_masked(&mut self) -> io::Result<String> {
        self.result.clone().map_err(io::Error::from)
    }
}
