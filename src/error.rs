use std::io;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// All four character classes were deselected when a password was requested.
    NoCharacterClassSelected,
    /// The platform clipboard refused the write.
    ClipboardWriteFailed(String),
    Io(io::Error),
    Config(config::ConfigError),
    SerError(toml::ser::Error),
    Generic(&'static str),
}

impl From<arboard::Error> for Error {
    fn from(err: arboard::Error) -> Self {
        Self::ClipboardWriteFailed(err.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerError(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NoCharacterClassSelected => {
                write!(f, "Please select at least one character type.")
            }
            Self::ClipboardWriteFailed(_) => {
                write!(f, "Failed to copy password to clipboard.")
            }
            Self::Io(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "{err}"),
            Self::SerError(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
