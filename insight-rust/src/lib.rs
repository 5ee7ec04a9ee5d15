mod config;
mod context;
mod errors;
mod params;
pub mod prompt;
mod service;
mod snapshot;

pub use config::{
    AppState, ConfigProvider, GenerationConfig, SettingsRecord, SharedAppState, DEFAULT_MODEL,
};
pub use context::{ContextBrief, ContextTag, DataSelection};
pub use errors::{InsightError, InsightResult};
pub use params::InsightServiceParams;
pub use prompt::{construct_answer_prompt, construct_prompt};
pub use service::{InsightService, NO_ANSWER_FALLBACK, NO_INSIGHT_FALLBACK};
pub use snapshot::DataSnapshot;
