mod client_utils;
mod errors;
pub mod google;
pub mod insight_sdk_test;
mod language_model;
mod opentelemetry;
mod types;

pub use errors::*;
pub use language_model::LanguageModel;
pub use types::*;
