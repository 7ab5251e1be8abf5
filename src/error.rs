use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The parameters cannot describe a valid body set, e.g. a body count of zero.
    InvalidParameters(String),
    /// A parameter file could not be parsed.
    Config(serde_yaml::Error),
    /// An initial-condition file read back from disk is malformed.
    Format(String),
    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameters(message) => write!(f, "invalid parameters: {}", message),
            Error::Config(err) => write!(f, "could not parse parameter file: {}", err),
            Error::Format(message) => write!(f, "malformed initial-condition file: {}", message),
            Error::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::InvalidParameters(_) | Error::Format(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err)
    }
}
