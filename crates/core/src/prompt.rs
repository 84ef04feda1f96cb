//! Prompt functions: free text, passwords, yes/no and numbered choices.
//!
//! Every function borrows a [`Terminal`] to print with and a reader to take
//! the answer from. The `*_with_retry` variants keep asking after an invalid
//! answer; the others return [`Error::InvalidInput`] straight away. Read
//! failures are never retried.

use log::{debug, trace};

use crate::config::{yes_no_suffix, CHOICE_PROMPT, RETRY_MESSAGE};
use crate::error::{Error, Result};
use crate::input::{InputReader, MaskedReader};
use crate::terminal::Terminal;

/// Prompts for a line of free text.
///
/// Trailing `\n` and `\r` characters are stripped from the answer.
pub fn input<T, R>(term: &mut T, reader: &mut R, message: &str) -> Result<String>
where
    T: Terminal + ?Sized,
    R: InputReader + ?Sized,
{
    term.print_prompt(message, &[])?;

    let line = reader.next_line().map_err(Error::read)?;
    trace!("Read line: {line:?}");

    Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}

/// Prompts for a secret that is not echoed while typed.
///
/// A line break is printed after the read, whether or not it succeeded, since
/// the user's enter key was not echoed either.
pub fn password<T, M>(term: &mut T, masked: &mut M, message: &str) -> Result<String>
where
    T: Terminal + ?Sized,
    M: MaskedReader + ?Sized,
{
    term.print_prompt(message, &[])?;

    let secret = masked.read_masked();
    term.print_line(&[])?;

    secret.map_err(Error::read)
}

/// Interprets a single character typed at a yes/no prompt.
///
/// Returns `None` for anything other than `y`, `n` (either case) or a bare
/// line ending, which stands for `default`.
#[must_use]
pub fn parse_yes_no(rune: char, default: bool) -> Option<bool> {
    match rune {
        'y' | 'Y' => Some(true),
        'n' | 'N' => Some(false),
        '\n' | '\r' => Some(default),
        _ => None,
    }
}

/// Asks a yes/no question, showing `(y/N)` or `(Y/n)` depending on `default`.
///
/// Pressing enter alone answers `default`.
pub fn yes_no<T, R>(term: &mut T, reader: &mut R, message: &str, default: bool) -> Result<bool>
where
    T: Terminal + ?Sized,
    R: InputReader + ?Sized,
{
    term.print_prompt(message, &[yes_no_suffix(default)])?;

    read_yes_no(reader, default)?.ok_or_else(|| {
        debug!("Rejected yes/no answer for `{message}`");
        Error::InvalidInput
    })
}

/// Like [`yes_no`], but asks again until a valid answer is typed.
pub fn yes_no_with_retry<T, R>(
    term: &mut T,
    reader: &mut R,
    message: &str,
    default: bool,
) -> Result<bool>
where
    T: Terminal + ?Sized,
    R: InputReader + ?Sized,
{
    let suffix = yes_no_suffix(default);
    term.print_prompt(message, &[suffix])?;

    loop {
        if let Some(answer) = read_yes_no(reader, default)? {
            return Ok(answer);
        }

        debug!("Rejected yes/no answer for `{message}`, asking again");
        term.print_prompt(RETRY_MESSAGE, &[suffix])?;
    }
}

fn read_yes_no<R: InputReader + ?Sized>(reader: &mut R, default: bool) -> Result<Option<bool>> {
    let rune = reader.next_rune().map_err(Error::read)?;
    trace!("Read rune: {rune:?}");

    let answer = parse_yes_no(rune, default);
    if rune == '\n' {
        return Ok(answer);
    }

    // Drop whatever else was typed so the next read starts on a new line
    match reader.skip_line() {
        Ok(()) => Ok(answer),
        Err(e) if answer.is_some() => {
            debug!("Ignoring failure to drain the rest of the answer line: {e}");
            Ok(answer)
        }
        Err(e) => Err(Error::read(e)),
    }
}

/// Maps a typed option number to a zero-based index into `option_count` options.
///
/// Non-numeric text, `0` and numbers past the last option all give `None`.
///
/// # Examples
///
/// ```
/// use termprompt_core::prompt::parse_choice;
///
/// assert_eq!(parse_choice("2", 3), Some(1));
/// assert_eq!(parse_choice("9", 3), None);
/// assert_eq!(parse_choice("two", 3), None);
/// ```
#[must_use]
pub fn parse_choice(entered: &str, option_count: usize) -> Option<usize> {
    entered
        .parse::<usize>()
        .ok()?
        .checked_sub(1)
        .filter(|index| *index < option_count)
}

/// Lists `options` numbered from 1 and reads the number of the chosen one.
///
/// Returns the zero-based index with its label. Anything that is not a listed
/// number, and any failure to read, gives [`Error::InvalidInput`].
pub fn choice<'a, T, R, S>(
    term: &mut T,
    reader: &mut R,
    message: &str,
    options: &'a [S],
) -> Result<(usize, &'a str)>
where
    T: Terminal + ?Sized,
    R: InputReader + ?Sized,
    S: AsRef<str>,
{
    print_options(term, message, options)?;

    let entered = read_choice(term, reader, CHOICE_PROMPT)?;
    match parse_choice(&entered, options.len()) {
        Some(index) => Ok((index, options[index].as_ref())),
        None => {
            debug!("Rejected choice `{entered}` out of {} options", options.len());
            Err(Error::InvalidInput)
        }
    }
}

/// Like [`choice`], but asks again until a listed number is typed.
///
/// A failure to read still ends the prompt with [`Error::InvalidInput`].
/// An empty `options` list is refused with [`Error::NoOptions`] before
/// anything is printed.
pub fn choice_with_retry<'a, T, R, S>(
    term: &mut T,
    reader: &mut R,
    message: &str,
    options: &'a [S],
) -> Result<(usize, &'a str)>
where
    T: Terminal + ?Sized,
    R: InputReader + ?Sized,
    S: AsRef<str>,
{
    if options.is_empty() {
        return Err(Error::NoOptions);
    }

    print_options(term, message, options)?;

    let mut entered = read_choice(term, reader, CHOICE_PROMPT)?;
    loop {
        if let Some(index) = parse_choice(&entered, options.len()) {
            return Ok((index, options[index].as_ref()));
        }

        debug!("Rejected choice `{entered}` out of {} options, asking again", options.len());
        entered = read_choice(term, reader, RETRY_MESSAGE)?;
    }
}

fn print_options<T, S>(term: &mut T, message: &str, options: &[S]) -> Result<()>
where
    T: Terminal + ?Sized,
    S: AsRef<str>,
{
    term.print_line(&[&message])?;
    for (index, option) in options.iter().enumerate() {
        let label: &str = option.as_ref();
        term.print_line(&[&(index + 1), &label])?;
    }

    Ok(())
}

fn read_choice<T, R>(term: &mut T, reader: &mut R, message: &str) -> Result<String>
where
    T: Terminal + ?Sized,
    R: InputReader + ?Sized,
{
    input(term, reader, message).map_err(|e| match e {
        Error::Read(original) => {
            debug!("Failed to read choice: {original}");
            Error::InvalidInput
        }
        other => other,
    })
}
