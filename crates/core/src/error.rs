use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The response could not be parsed or is outside the accepted values.
    #[error("invalid input")]
    InvalidInput,

    #[error("Error reading input: {}", .0)]
    Read(std::io::Error),

    #[error("Error writing to terminal: {}", .0)]
    Write(std::io::Error),

    #[error("No options were given to choose from.")]
    NoOptions,
}

impl Error {
    pub fn read(original: std::io::Error) -> Self {
        Self::Read(original)
    }

    pub fn write(original: std::io::Error) -> Self {
        Self::Write(original)
    }

    /// Whether the input stream ran out before a response was read.
    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::Read(e) if e.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_input_message() {
        assert_eq!(Error::InvalidInput.to_string(), "invalid input");
    }

    #[test]
    fn test_read_error_wraps_original() {
        let err = Error::read(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(err.to_string(), "Error reading input: boom");
        assert!(!err.is_end_of_input());
    }

    #[test]
    fn test_is_end_of_input() {
        let err = Error::read(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(err.is_end_of_input());

        let err = Error::write(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(!err.is_end_of_input());
    }
}
