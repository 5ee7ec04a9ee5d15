use thiserror::Error;

#[derive(Error, Debug)]
pub enum LanguageModelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed to send or its body could not be
    /// read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-OK status code. Holds the message from the
    /// provider error envelope when one could be read.
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the provider was unexpected (e.g. a body that is
    /// not a `generateContent` envelope).
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

impl LanguageModelError {
    /// The provider-supplied reason of a non-OK response.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        match self {
            Self::StatusCode(_, message) => Some(message),
            _ => None,
        }
    }
}

pub type LanguageModelResult<T> = Result<T, LanguageModelError>;
