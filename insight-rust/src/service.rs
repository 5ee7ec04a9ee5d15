use crate::{
    prompt, ConfigProvider, ContextTag, DataSnapshot, InsightError, InsightResult,
    InsightServiceParams,
};
use futures::future::{AbortRegistration, Abortable};
use insight_sdk::{
    google::{GoogleModel, GoogleModelOptions},
    LanguageModel, LanguageModelError, LanguageModelInput, ModelOutcome,
};
use std::sync::Arc;
use tracing::{debug, error, info_span};
use tracing_futures::Instrument;

/// Returned when an insight request succeeds without any text.
pub const NO_INSIGHT_FALLBACK: &str = "No insight generated.";
/// Returned when a question request succeeds without any text.
pub const NO_ANSWER_FALLBACK: &str = "I couldn't answer that.";

/// Turns dashboard data into insights and answers.
///
/// Every call reads the config afresh, compiles its own prompt and makes one
/// request. Calls share nothing mutable and may run concurrently.
pub struct InsightService {
    config: Arc<dyn ConfigProvider>,
    model: Arc<dyn LanguageModel>,
}

impl InsightService {
    #[must_use]
    pub fn new(params: InsightServiceParams) -> Self {
        Self {
            config: params.config,
            model: params.model,
        }
    }

    pub fn builder(config: Arc<dyn ConfigProvider>) -> InsightServiceParams {
        InsightServiceParams::new(config)
    }

    /// A service backed by the Gemini endpoint.
    pub fn google(config: impl ConfigProvider + 'static, options: GoogleModelOptions) -> Self {
        Self::builder(Arc::new(config))
            .model(Arc::new(GoogleModel::new(options)))
            .build()
    }

    /// Ask for an Analysis / Next Steps insight about `context`.
    pub async fn generate_insight(
        &self,
        context: &ContextTag,
        data: &DataSnapshot,
    ) -> InsightResult<String> {
        let span = info_span!("insight.generate_insight", context = %context);
        self.generate(
            context,
            || prompt::construct_prompt(context, data),
            NO_INSIGHT_FALLBACK,
        )
        .instrument(span)
        .await
    }

    /// Ask a free-form question, answered from the data of `context`.
    pub async fn generate_answer(
        &self,
        question: &str,
        context: &ContextTag,
        data: &DataSnapshot,
    ) -> InsightResult<String> {
        let span = info_span!("insight.generate_answer", context = %context);
        self.generate(
            context,
            || prompt::construct_answer_prompt(question, context, data),
            NO_ANSWER_FALLBACK,
        )
        .instrument(span)
        .await
    }

    /// [`Self::generate_insight`], dropping the in-flight request when the
    /// matching `AbortHandle` fires.
    pub async fn generate_insight_abortable(
        &self,
        context: &ContextTag,
        data: &DataSnapshot,
        registration: AbortRegistration,
    ) -> InsightResult<String> {
        Abortable::new(self.generate_insight(context, data), registration)
            .await
            .unwrap_or(Err(InsightError::Cancelled))
    }

    /// [`Self::generate_answer`], dropping the in-flight request when the
    /// matching `AbortHandle` fires.
    pub async fn generate_answer_abortable(
        &self,
        question: &str,
        context: &ContextTag,
        data: &DataSnapshot,
        registration: AbortRegistration,
    ) -> InsightResult<String> {
        Abortable::new(self.generate_answer(question, context, data), registration)
            .await
            .unwrap_or(Err(InsightError::Cancelled))
    }

    async fn generate(
        &self,
        context: &ContextTag,
        build_prompt: impl FnOnce() -> String,
        fallback: &str,
    ) -> InsightResult<String> {
        let config = self.config.ai_config();
        if !config.has_api_key() {
            debug!(%context, "no API key configured");
            return Err(InsightError::MissingCredential);
        }

        let prompt = build_prompt();
        debug!(
            %context,
            model = %config.model,
            prompt_length = prompt.len(),
            "compiled prompt"
        );

        let input = LanguageModelInput::new(config.model, config.api_key, prompt);
        let result = match self.model.generate(input).await {
            Ok(outcome) => self.read_outcome(outcome, fallback),
            Err(error) => Err(InsightError::from(error)),
        };

        if let Err(error) = &result {
            error!(%context, %error, "insight generation failed");
        }

        result
    }

    fn read_outcome(&self, outcome: ModelOutcome, fallback: &str) -> InsightResult<String> {
        match outcome {
            ModelOutcome::Text(text) => Ok(text),
            ModelOutcome::Empty => Ok(fallback.to_string()),
            ModelOutcome::Malformed(reason) => Err(InsightError::Transport(
                LanguageModelError::Invariant(
                    self.model.provider(),
                    format!("Malformed response body: {reason}"),
                ),
            )),
        }
    }
}
