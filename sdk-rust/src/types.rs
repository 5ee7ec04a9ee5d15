use std::fmt;

/// Defines the input of a single text generation request.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LanguageModelInput {
    /// The model identifier, e.g. `gemini-1.5-flash`.
    pub model_id: String,
    /// The credential sent along with the request.
    pub api_key: String,
    /// The prompt, sent as the sole content part.
    pub prompt: String,
}

impl LanguageModelInput {
    pub fn new(
        model_id: impl Into<String>,
        api_key: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            model_id: model_id.into(),
            api_key: api_key.into(),
            prompt: prompt.into(),
        }
    }
}

impl fmt::Debug for LanguageModelInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageModelInput")
            .field("model_id", &self.model_id)
            .field("api_key", &"[REDACTED]")
            .field("prompt", &self.prompt)
            .finish()
    }
}

/// The result of reading a successful (2xx) response envelope.
///
/// A request that reached the provider and came back with a success status
/// may still carry nothing usable. Callers decide how to treat each case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelOutcome {
    /// The first text part of the first candidate.
    Text(String),
    /// The envelope was well formed but held no candidate text.
    Empty,
    /// The body was not the expected envelope. Holds the parse failure.
    Malformed(String),
}
