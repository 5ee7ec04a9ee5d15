use super::api::{parse_generate_content_response, GenerateContentParameters};
use crate::{
    client_utils, LanguageModel, LanguageModelError, LanguageModelInput, LanguageModelResult,
    ModelOutcome,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Url,
};
use std::collections::HashMap;

const PROVIDER: &str = "google";

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Calls `models/{model}:generateContent` with the model and key of each
/// input, so one instance serves every configuration.
#[derive(Clone)]
pub struct GoogleModel {
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct GoogleModelOptions {
    pub base_url: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    /// Timeouts and proxies are whatever this client is built with.
    pub client: Option<Client>,
}

impl GoogleModel {
    #[must_use]
    pub fn new(options: GoogleModelOptions) -> Self {
        let GoogleModelOptions {
            base_url,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_else(Client::new);
        let headers = headers.unwrap_or_default();

        Self {
            base_url,
            client,
            headers,
        }
    }

    /// The model id becomes one percent-encoded path segment, so ids holding
    /// `/`, `?` or `#` cannot leave the `generateContent` path.
    fn request_url(&self, input: &LanguageModelInput) -> LanguageModelResult<Url> {
        let invalid_url = |reason: String| {
            LanguageModelError::InvalidInput(format!(
                "Invalid Google base URL '{}': {reason}",
                self.base_url
            ))
        };

        let mut url = Url::parse(&self.base_url).map_err(|error| invalid_url(error.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid_url("cannot be a base".to_string()))?
            .pop_if_empty()
            .push("models")
            .push(&format!("{}:generateContent", input.model_id));
        url.query_pairs_mut()
            .append_pair("key", input.api_key.as_str());

        Ok(url)
    }

    fn request_headers(&self) -> LanguageModelResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in &self.headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid Google header name '{key}': {error}"
                ))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid Google header value for '{key}': {error}"
                ))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

impl Default for GoogleModel {
    fn default() -> Self {
        Self::new(GoogleModelOptions::default())
    }
}

#[async_trait::async_trait]
impl LanguageModel for GoogleModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelOutcome> {
        crate::opentelemetry::trace_generate(self.provider(), input, |input| async move {
            let url = self.request_url(&input)?;
            let headers = self.request_headers()?;
            let params = GenerateContentParameters::from_text(input.prompt);

            let body = client_utils::send_json(&self.client, url, &params, headers).await?;

            Ok(parse_generate_content_response(&body))
        })
        .await
    }
}
