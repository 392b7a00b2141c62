use std::fmt;

/// Result type alias for Rondo core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Rondo core operations
#[derive(Debug)]
pub enum Error {
    /// I/O errors from workload ingestion
    Io(std::io::Error),

    /// Workload errors (malformed, unsorted, or empty process sets)
    Workload(String),

    /// Configuration errors
    Config(String),

    /// Metrics finalization errors
    Metrics(String),

    /// Other errors
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Workload(msg) => write!(f, "Workload error: {msg}"),
            Error::Config(msg) => write!(f, "Configuration error: {msg}"),
            Error::Metrics(msg) => write!(f, "Metrics error: {msg}"),
            Error::Other(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}
