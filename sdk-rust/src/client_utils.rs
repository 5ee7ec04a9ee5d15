use crate::LanguageModelError;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

/// Error envelope returned by Google APIs on non-OK responses.
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Create a JSON request, return the raw response body.
/// Throws error on non OK status code.
pub async fn send_json<T: Serialize>(
    client: &Client,
    url: Url,
    data: &T,
    headers: reqwest::header::HeaderMap,
) -> Result<String, LanguageModelError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    let status = response.status();
    if status.is_success() {
        Ok(response.text().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(LanguageModelError::StatusCode(
            status,
            read_error_message(&body)
                .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16())),
        ))
    }
}

/// Read `error.message` from a Google error envelope.
pub fn read_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|message| !message.is_empty())
}
