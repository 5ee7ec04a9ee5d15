use crate::{LanguageModelInput, LanguageModelResult, ModelOutcome};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct LmSpan {
    span: Span,
    start_time: Instant,
    outcome: Option<&'static str>,
    response_length: Option<usize>,
}

impl LmSpan {
    pub fn new(provider: &str, input: &LanguageModelInput) -> Self {
        let span = info_span!("insight_sdk.generate");
        span.set_attribute("gen_ai.operation.name", "generate_content");
        span.set_attribute("gen_ai.provider.name", provider.to_string());
        span.set_attribute("gen_ai.request.model", input.model_id.clone());
        span.set_attribute(
            "insight_sdk.prompt_length",
            i64::try_from(input.prompt.len()).unwrap_or(i64::MAX),
        );

        Self {
            span,
            start_time: Instant::now(),
            outcome: None,
            response_length: None,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_outcome(&mut self, outcome: &ModelOutcome) {
        match outcome {
            ModelOutcome::Text(text) => {
                self.outcome = Some("text");
                self.response_length = Some(text.len());
            }
            ModelOutcome::Empty => self.outcome = Some("empty"),
            ModelOutcome::Malformed(reason) => {
                self.outcome = Some("malformed");
                self.span.set_status(Status::error(reason.clone()));
            }
        }
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    fn on_end(&mut self) {
        if let Some(outcome) = self.outcome {
            self.span.set_attribute("insight_sdk.outcome", outcome);
        }
        if let Some(length) = self.response_length {
            self.span.set_attribute(
                "insight_sdk.response_length",
                i64::try_from(length).unwrap_or(i64::MAX),
            );
        }
        self.span
            .set_attribute("insight_sdk.duration", self.elapsed_seconds());
    }

    fn elapsed_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

impl Drop for LmSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

pub async fn trace_generate<F, Fut>(
    provider: &str,
    input: LanguageModelInput,
    f: F,
) -> LanguageModelResult<ModelOutcome>
where
    F: FnOnce(LanguageModelInput) -> Fut,
    Fut: std::future::Future<Output = LanguageModelResult<ModelOutcome>>,
{
    let mut span = LmSpan::new(provider, &input);
    let result = span.instrument_future(f(input)).await;

    match &result {
        Ok(outcome) => span.on_outcome(outcome),
        Err(error) => span.on_error(error),
    }

    result
}
