use insight_sdk::LanguageModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    /// No API key in settings. Raised before any request is made.
    #[error("No AI API key configured. Add one in Settings to enable insights.")]
    MissingCredential,
    /// The provider answered with a non-OK status. Displays the provider's
    /// own message, or a generic one when its error body was unreadable.
    #[error("{0}")]
    Upstream(String),
    /// The request could not be sent or the response body was not a
    /// `generateContent` envelope.
    #[error("Transport error: {0}")]
    Transport(#[source] LanguageModelError),
    /// The caller aborted the call.
    #[error("Insight generation was cancelled")]
    Cancelled,
}

impl From<LanguageModelError> for InsightError {
    fn from(error: LanguageModelError) -> Self {
        match error {
            LanguageModelError::StatusCode(_, message) => Self::Upstream(message),
            other => Self::Transport(other),
        }
    }
}

pub type InsightResult<T> = Result<T, InsightError>;
