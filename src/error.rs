use thiserror::Error;

/// Main error type for the Rusty Frame crate.
/// Aggregates errors from the table engine, the option parsers and the JSON front-end.
#[derive(Error, Debug)]
pub enum RustyFrameError {
    #[error("{0}")]
    WithContextError(String),

    // Third-party library errors
    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    // Table module errors
    #[error("{0}")]
    TableError(#[from] crate::table::TableError),

    // Option module errors
    #[error("{0}")]
    OptionError(#[from] crate::options::OptionError),
}

/// Prefixes an error message with the context it was raised in.
pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, RustyFrameError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| RustyFrameError::WithContextError(format!("{}: {}", message, e)))
    }
}
