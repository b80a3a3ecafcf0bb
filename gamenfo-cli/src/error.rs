use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The document could not be read or rendered
    #[error("{0}")]
    Encoding(#[from] gamenfo::EncodingError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// No format registered under the requested name
    #[error("Unknown format: {0} (see `gamenfo formats`)")]
    UnknownFormat(String),

    /// Input file type that cannot be loaded
    #[error("Unsupported input: {0} (expected .json, .yaml or .yml)")]
    UnsupportedInput(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn unknown_format(msg: impl Into<String>) -> Self {
        Self::UnknownFormat(msg.into())
    }

    pub(crate) fn unsupported_input(msg: impl Into<String>) -> Self {
        Self::UnsupportedInput(msg.into())
    }
}
