use crate::{LanguageModelInput, LanguageModelResult, ModelOutcome};

#[async_trait::async_trait]
pub trait LanguageModel: Send + Sync {
    fn provider(&self) -> &'static str;
    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelOutcome>;
}
