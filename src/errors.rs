use thiserror::Error;

/// Errors produced by the summarization core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("Please enter or upload some text to summarize")]
    EmptyInput,
}

impl SummarizeError {
    /// Stable machine-readable code used in the response envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SummarizeError::EmptyInput => "EMPTY_INPUT",
        }
    }
}

/// Errors raised by the host while obtaining the raw text.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(String),

    #[error("Unsupported file type '{0}': only plain text (.txt) files can be summarized")]
    UnsupportedFileType(String),
}

impl From<std::io::Error> for InputError {
    fn from(error: std::io::Error) -> Self {
        InputError::Io(error.to_string())
    }
}
