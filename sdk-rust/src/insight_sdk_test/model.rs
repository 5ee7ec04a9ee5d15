use std::{collections::VecDeque, sync::Mutex};

use crate::{
    errors::{LanguageModelError, LanguageModelResult},
    language_model::LanguageModel,
    LanguageModelInput, ModelOutcome,
};

/// Result for a mocked `generate` call.
/// It can either be an outcome or an error to return.
pub enum MockGenerateResult {
    Outcome(ModelOutcome),
    Error(LanguageModelError),
}

impl MockGenerateResult {
    /// Construct a result that yields the provided outcome.
    pub fn outcome(outcome: ModelOutcome) -> Self {
        Self::Outcome(outcome)
    }

    /// Construct a result that yields generated text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Outcome(ModelOutcome::Text(text.into()))
    }

    /// Construct a result that yields the provided error.
    pub fn error(error: LanguageModelError) -> Self {
        Self::Error(error)
    }
}

impl From<ModelOutcome> for MockGenerateResult {
    fn from(outcome: ModelOutcome) -> Self {
        Self::outcome(outcome)
    }
}

impl From<LanguageModelError> for MockGenerateResult {
    fn from(error: LanguageModelError) -> Self {
        Self::error(error)
    }
}

type Responder = Box<dyn Fn(&LanguageModelInput) -> MockGenerateResult + Send + Sync>;

#[derive(Default)]
struct MockLanguageModelState {
    mocked_generate_results: VecDeque<MockGenerateResult>,
    tracked_generate_inputs: Vec<LanguageModelInput>,
}

impl MockLanguageModelState {
    fn enqueue_generate_result(&mut self, result: MockGenerateResult) {
        self.mocked_generate_results.push_back(result);
    }
}

/// A mock language model for testing that tracks inputs and yields predefined
/// outcomes.
///
/// Queued results are consumed first. When the queue is empty the responder,
/// if any, answers based on the input.
pub struct MockLanguageModel {
    provider: &'static str,
    responder: Option<Responder>,
    state: Mutex<MockLanguageModelState>,
}

impl Default for MockLanguageModel {
    fn default() -> Self {
        Self {
            provider: "mock",
            responder: None,
            state: Mutex::new(MockLanguageModelState::default()),
        }
    }
}

impl MockLanguageModel {
    /// Construct a new mock language model instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call the queue does not cover with `responder`.
    pub fn set_responder<F>(&mut self, responder: F)
    where
        F: Fn(&LanguageModelInput) -> MockGenerateResult + Send + Sync + 'static,
    {
        self.responder = Some(Box::new(responder));
    }

    /// Enqueue one or more mocked generate results.
    pub fn enqueue_generate_results<I>(&self, results: I) -> &Self
    where
        I: IntoIterator<Item = MockGenerateResult>,
    {
        let mut state = self.state.lock().expect("mock state poisoned");
        for result in results {
            state.enqueue_generate_result(result);
        }
        drop(state);
        self
    }

    /// Convenience to enqueue a single mocked generate result.
    pub fn enqueue_generate<R>(&self, result: R) -> &Self
    where
        R: Into<MockGenerateResult>,
    {
        self.enqueue_generate_results(std::iter::once(result.into()))
    }

    /// Retrieve the tracked generate inputs accumulated so far.
    pub fn tracked_generate_inputs(&self) -> Vec<LanguageModelInput> {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_generate_inputs.clone()
    }

    /// Number of `generate` calls received so far.
    pub fn generate_call_count(&self) -> usize {
        let state = self.state.lock().expect("mock state poisoned");
        state.tracked_generate_inputs.len()
    }
}

#[async_trait::async_trait]
impl LanguageModel for MockLanguageModel {
    fn provider(&self) -> &'static str {
        self.provider
    }

    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelOutcome> {
        let mut state = self.state.lock().expect("mock state poisoned");
        state.tracked_generate_inputs.push(input.clone());

        let result = match state.mocked_generate_results.pop_front() {
            Some(result) => result,
            None => {
                let responder = self.responder.as_ref().ok_or_else(|| {
                    LanguageModelError::Invariant(
                        self.provider,
                        "no mocked generate results available".into(),
                    )
                })?;
                responder(&input)
            }
        };

        match result {
            MockGenerateResult::Outcome(outcome) => Ok(outcome),
            MockGenerateResult::Error(error) => Err(error),
        }
    }
}
