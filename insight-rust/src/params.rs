use crate::{ConfigProvider, InsightService};
use insight_sdk::{google::GoogleModel, LanguageModel};
use std::sync::Arc;

/// Parameters required to create a new insight service.
/// # Default Values
/// - `model`: a [`GoogleModel`] with default options
pub struct InsightServiceParams {
    /// Read at the start of every call for the model name and API key.
    pub config: Arc<dyn ConfigProvider>,
    /// The model the compiled prompts are sent to.
    pub model: Arc<dyn LanguageModel>,
}

impl InsightServiceParams {
    pub fn new(config: Arc<dyn ConfigProvider>) -> Self {
        Self {
            config,
            model: Arc::new(GoogleModel::default()),
        }
    }

    /// Set the model
    #[must_use]
    pub fn model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn build(self) -> InsightService {
        InsightService::new(self)
    }
}
