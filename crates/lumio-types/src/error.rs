use std::fmt;

/// Result type for lumio-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Text is not one of the known agent modes
    InvalidAgentMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAgentMode(value) => write!(
                f,
                "Invalid agent mode '{}' (expected chat, planning or development)",
                value
            ),
        }
    }
}

impl std::error::Error for Error {}
