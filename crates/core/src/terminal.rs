//! Output side of the prompts: screen control and prompt formatting.
//!
//! Everything the prompt functions print goes through the [`Terminal`] trait.
//! [`Term`] is the real implementation and writes ANSI sequences to any
//! [`Write`] sink, stdout by default.

use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};

use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use itertools::Itertools;
use log::trace;

use crate::config::{TEMPORARY_BANNER, TEMPORARY_RETURN_PROMPT};
use crate::error::{Error, Result};
use crate::input::InputReader;

/// Formats a prompt as `"<message>: "` or `"<message> <suffixes>: "`.
///
/// Suffixes are joined with single spaces and the joined text is trimmed.
///
/// # Examples
///
/// ```
/// use termprompt_core::terminal::render_prompt;
///
/// assert_eq!(render_prompt("Msg", &[]), "Msg: ");
/// assert_eq!(render_prompt("Msg", &["(y/N)"]), "Msg (y/N): ");
/// assert_eq!(render_prompt("Msg", &[" a", "b "]), "Msg a b: ");
/// ```
#[must_use]
pub fn render_prompt(message: &str, suffixes: &[&str]) -> String {
    format!("{}: ", prompt_head(message, suffixes))
}

/// Same as [`render_prompt`] but ends the line instead of leaving the
/// cursor after the colon.
#[must_use]
pub fn render_prompt_line(message: &str, suffixes: &[&str]) -> String {
    format!("{}:\n", prompt_head(message, suffixes))
}

fn prompt_head(message: &str, suffixes: &[&str]) -> String {
    if suffixes.is_empty() {
        return message.to_string();
    }

    let suffix = suffixes.iter().join(" ");
    format!("{message} {}", suffix.trim())
}

/// Joins values with single spaces, the way [`Terminal::print_line`] prints them.
#[must_use]
pub fn join_values(values: &[&dyn Display]) -> String {
    values.iter().join(" ")
}

/// Screen control and prompt printing used by every prompt function.
///
/// Implement this to redirect or record what the prompts print; see
/// [`crate::testsupport::RecordingTerminal`].
pub trait Terminal {
    /// Switches to the alternate screen buffer (`ESC[?1049h`).
    fn enable_alt_screen_buffer(&mut self) -> Result<()>;

    /// Switches back to the primary screen buffer (`ESC[?1049l`).
    fn disable_alt_screen_buffer(&mut self) -> Result<()>;

    /// Clears the visible screen (`ESC[2J`).
    fn clear_screen(&mut self) -> Result<()>;

    /// Clears the lines saved in the scrollback buffer (`ESC[3J`).
    fn clear_screen_and_scrollback(&mut self) -> Result<()>;

    /// Prints the values separated by single spaces, followed by a newline.
    fn print_line(&mut self, values: &[&dyn Display]) -> Result<()>;

    /// Prints [`render_prompt`] without a newline so input follows on the same line.
    fn print_prompt(&mut self, message: &str, suffixes: &[&str]) -> Result<()>;

    /// Prints [`render_prompt_line`].
    fn print_prompt_line(&mut self, message: &str, suffixes: &[&str]) -> Result<()>;

    /// Shows `values` on the alternate screen until the user hits enter.
    ///
    /// Exactly one line is read from `input` and thrown away. Once the
    /// alternate screen has been entered, the screen is cleared and the
    /// primary buffer restored exactly once, including when printing or
    /// reading fails. A read failure is returned after the restore.
    fn print_temporary(
        &mut self,
        input: &mut dyn InputReader,
        values: &[&dyn Display],
    ) -> Result<()> {
        self.enable_alt_screen_buffer()?;
        let mut screen = AltScreenGuard::new(self);

        screen.clear_screen()?;
        screen.clear_screen_and_scrollback()?;
        screen.print_line(&[])?;
        screen.print_line(&[&TEMPORARY_BANNER])?;
        screen.print_line(&[])?;
        screen.print_line(values)?;
        screen.print_line(&[])?;
        screen.print_prompt(TEMPORARY_RETURN_PROMPT, &[])?;

        let discarded = input.next_line().map_err(Error::read)?;
        trace!("Discarding temporary screen input: {discarded:?}");

        screen.restore()
    }
}

/// Restores the primary screen buffer when dropped.
///
/// Created right after the alternate buffer is entered. Call [`restore`] to
/// see restore errors; otherwise they are ignored on drop.
///
/// [`restore`]: AltScreenGuard::restore
pub struct AltScreenGuard<'a, T: Terminal + ?Sized> {
    terminal: &'a mut T,
    restored: bool,
}

impl<'a, T: Terminal + ?Sized> AltScreenGuard<'a, T> {
    pub fn new(terminal: &'a mut T) -> Self {
        Self {
            terminal,
            restored: false,
        }
    }

    /// Clears the alternate screen and switches back to the primary buffer.
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        restore_primary_screen(self.terminal)
    }
}

fn restore_primary_screen<T: Terminal + ?Sized>(terminal: &mut T) -> Result<()> {
    terminal.clear_screen()?;
    terminal.clear_screen_and_scrollback()?;
    terminal.disable_alt_screen_buffer()
}

impl<T: Terminal + ?Sized> Deref for AltScreenGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> DerefMut for AltScreenGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.terminal
    }
}

impl<T: Terminal + ?Sized> Drop for AltScreenGuard<'_, T> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }

        // Leave the alternate buffer even if clearing failed
        let _ = self.terminal.clear_screen();
        let _ = self.terminal.clear_screen_and_scrollback();
        let _ = self.terminal.disable_alt_screen_buffer();
    }
}

/// [`Terminal`] writing ANSI escape sequences and text to a [`Write`] sink.
///
/// # Examples
///
/// ```
/// use termprompt_core::terminal::{Term, Terminal};
///
/// let mut term = Term::new(Vec::new());
/// term.print_prompt("Name", &[]).unwrap();
/// assert_eq!(term.into_inner(), b"Name: ");
/// ```
pub struct Term<W: Write = Stdout> {
    out: W,
}

impl Term<Stdout> {
    /// Terminal writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Default for Term<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write> Term<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// The sink written to so far, e.g. to inspect buffered output.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Terminal for Term<W> {
    fn enable_alt_screen_buffer(&mut self) -> Result<()> {
        execute!(self.out, EnterAlternateScreen).map_err(Error::write)
    }

    fn disable_alt_screen_buffer(&mut self) -> Result<()> {
        execute!(self.out, LeaveAlternateScreen).map_err(Error::write)
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All)).map_err(Error::write)
    }

    fn clear_screen_and_scrollback(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::Purge)).map_err(Error::write)
    }

    fn print_line(&mut self, values: &[&dyn Display]) -> Result<()> {
        writeln!(self.out, "{}", join_values(values)).map_err(Error::write)
    }

    fn print_prompt(&mut self, message: &str, suffixes: &[&str]) -> Result<()> {
        self.out
            .write_all(render_prompt(message, suffixes).as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(Error::write)
    }

    fn print_prompt_line(&mut self, message: &str, suffixes: &[&str]) -> Result<()> {
        self.out
            .write_all(render_prompt_line(message, suffixes).as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(Error::write)
    }
}
