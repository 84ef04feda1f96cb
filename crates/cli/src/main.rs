//! Interactive walkthrough of every termprompt prompt.
//!
//! Run it in a real terminal; set `RUST_LOG=debug` to see rejected answers
//! being logged.

use std::io::stdin;
use std::process::ExitCode;

use log::{debug, info};
use termprompt_core::error::{Error, Result};
use termprompt_core::input::TtyMaskedReader;
use termprompt_core::prompt::{choice_with_retry, input, password, yes_no, yes_no_with_retry};
use termprompt_core::terminal::{Term, Terminal};

const HOME_OPTIONS: [&str; 3] = ["Apt", "House", "Condo"];

fn execute() -> Result<()> {
    let mut term = Term::stdout();
    let mut stdin = stdin().lock();

    term.print_prompt_line("A few questions", &["(Ctrl-D to stop)"])?;

    let name = input(&mut term, &mut stdin, "What is your name")?;
    debug!("Name entered: `{name}`");

    let (_, home) = choice_with_retry(&mut term, &mut stdin, "Where do you live?", &HOME_OPTIONS)?;
    info!("Selected home: {home}");

    if !yes_no_with_retry(&mut term, &mut stdin, "Set a password?", true)? {
        term.print_line(&[&"Bye", &name])?;
        return Ok(());
    }

    let secret = password(&mut term, &mut TtyMaskedReader, "Password")?;

    // The plain variant gives up on a bad answer; treat that as "no"
    let reveal = match yes_no(&mut term, &mut stdin, "Show it on a temporary screen?", false) {
        Ok(answer) => answer,
        Err(Error::InvalidInput) => false,
        Err(e) => return Err(e),
    };
    if reveal {
        term.print_temporary(&mut stdin, &[&"Your password is", &secret])?;
    }

    term.print_line(&[&"Thanks,", &name, &"from the", &home.to_lowercase()])?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
