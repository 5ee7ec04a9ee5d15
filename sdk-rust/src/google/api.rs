#![allow(clippy::pedantic, clippy::style)]
use crate::ModelOutcome;
use serde::{Deserialize, Serialize};

/// Body of a `models.generateContent` request.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentParameters {
    /// Content of the request.
    pub contents: Vec<Content>,
}

/// Contains the multi-part content of a message.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// List of parts that constitute a single message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

/// A datatype containing media content. Only text is used here.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Optional. Text part (can be code).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response message for `models.generateContent`. Fields other than the
/// candidate text are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Response variations returned by the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<Candidate>>,
}

/// A response candidate generated from the model.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Contains the multi-part content of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl GenerateContentParameters {
    /// A single-turn request with `text` as the only part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: Some(vec![Part {
                    text: Some(text.into()),
                }]),
            }],
        }
    }
}

impl GenerateContentResponse {
    /// `candidates[0].content.parts[0].text`, if every link is present.
    pub fn first_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts?
            .into_iter()
            .next()?
            .text
    }
}

/// Read a success body into a [`ModelOutcome`].
///
/// Bodies that are not JSON, or whose fields have the wrong types, are
/// `Malformed`. A valid envelope without candidate text is `Empty`.
pub fn parse_generate_content_response(body: &str) -> ModelOutcome {
    match serde_json::from_str::<GenerateContentResponse>(body) {
        Ok(response) => match response.first_text() {
            Some(text) => ModelOutcome::Text(text),
            None => ModelOutcome::Empty,
        },
        Err(error) => ModelOutcome::Malformed(error.to_string()),
    }
}
