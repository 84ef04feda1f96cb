//! Termprompt Core Library
//!
//! Small building blocks for asking a user things on a terminal: free text,
//! passwords, yes/no confirmations and numbered choices, plus screen control
//! such as the alternate screen buffer and a "press enter to continue"
//! temporary message.
//!
//! # Key Features
//!
//! - **Terminal Surface**: the [`terminal::Terminal`] trait, implemented by
//!   [`terminal::Term`] for any writer and by a recording double for tests
//! - **Prompts**: [`prompt::yes_no`], [`prompt::choice`], [`prompt::input`] and
//!   [`prompt::password`], with `*_with_retry` variants that keep asking
//! - **Input Readers**: every `BufRead` reads prompt answers; passwords go
//!   through [`input::MaskedReader`]
//! - **Error Handling**: invalid answers and read failures are told apart by
//!   [`error::Error`]
//!
//! # Examples
//!
//! Asking for a choice on the real terminal:
//!
//! ```no_run
//! use termprompt_core::prompt::choice_with_retry;
//! use termprompt_core::terminal::Term;
//!
//! let mut term = Term::stdout();
//! let mut stdin = std::io::stdin().lock();
//! let (index, label) =
//!     choice_with_retry(&mut term, &mut stdin, "Pick a home", &["Apt", "House", "Condo"])?;
//! println!("{index}: {label}");
//! # Ok::<(), termprompt_core::error::Error>(())
//! ```
//!
//! Driving a prompt from memory:
//!
//! ```
//! use termprompt_core::prompt::yes_no;
//! use termprompt_core::terminal::Term;
//!
//! let mut term = Term::new(Vec::new());
//! let mut answers: &[u8] = b"y\n";
//! assert!(yes_no(&mut term, &mut answers, "Continue?", false)?);
//! assert_eq!(term.into_inner(), b"Continue? (y/N): ");
//! # Ok::<(), termprompt_core::error::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod prompt;
pub mod terminal;
pub mod testsupport;
