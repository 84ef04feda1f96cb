//! Fixed text shown by the prompts and the temporary message screen.
//!
//! Nothing here is read from the environment; these are the strings every
//! prompt renders.

/// Hint shown by yes/no prompts whose default is `false`
pub const YES_NO_SUFFIX_DEFAULT_NO: &str = "(y/N)";
/// Hint shown by yes/no prompts whose default is `true`
pub const YES_NO_SUFFIX_DEFAULT_YES: &str = "(Y/n)";

/// Prompt shown after an invalid response in the retrying prompts
pub const RETRY_MESSAGE: &str = "Invalid value entered. Please try again";

/// Prompt used to read the selected option number
pub const CHOICE_PROMPT: &str = "Enter your choice";

/// Banner printed at the top of the temporary message screen
pub const TEMPORARY_BANNER: &str =
    "The following message is temporary and will be cleared when you hit [ENTER]";

/// Prompt printed at the bottom of the temporary message screen
pub const TEMPORARY_RETURN_PROMPT: &str = "Press [enter] to return to your shell";

/// Returns the yes/no hint matching the default answer.
///
/// # Examples
///
/// ```
/// use termprompt_core::config::yes_no_suffix;
///
/// assert_eq!(yes_no_suffix(false), "(y/N)");
/// assert_eq!(yes_no_suffix(true), "(Y/n)");
/// ```
#[must_use]
pub fn yes_no_suffix(default: bool) -> &'static str {
    if default {
        YES_NO_SUFFIX_DEFAULT_YES
    } else {
        YES_NO_SUFFIX_DEFAULT_NO
    }
}
