use serde::{Deserialize, Serialize};
use std::{
    fmt,
    sync::{Arc, RwLock},
};

/// Model used when the settings do not name one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Model selection and credential for one generation call.
///
/// `api_key` is empty when no key is configured; `model` is never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub api_key: String,
    pub model: String,
}

impl GenerationConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        Self {
            api_key: api_key.into(),
            model: if model.is_empty() {
                DEFAULT_MODEL.to_string()
            } else {
                model
            },
        }
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new("", DEFAULT_MODEL)
    }
}

impl fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &if self.has_api_key() { "[REDACTED]" } else { "" })
            .field("model", &self.model)
            .finish()
    }
}

/// Source of the generation config, read once at the start of every call.
pub trait ConfigProvider: Send + Sync {
    fn ai_config(&self) -> GenerationConfig;
}

impl ConfigProvider for GenerationConfig {
    fn ai_config(&self) -> GenerationConfig {
        self.clone()
    }
}

/// One row of the `settings` collection. Columns other than the AI ones are
/// kept but not interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// In-memory application state as loaded from the sheet API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub settings: Vec<SettingsRecord>,
}

impl AppState {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn with_settings(settings: SettingsRecord) -> Self {
        Self {
            settings: vec![settings],
        }
    }
}

impl ConfigProvider for AppState {
    fn ai_config(&self) -> GenerationConfig {
        let Some(settings) = self.settings.first() else {
            return GenerationConfig::default();
        };

        GenerationConfig::new(
            settings.ai_api_key.clone().unwrap_or_default(),
            settings.ai_model.clone().unwrap_or_default(),
        )
    }
}

/// Application state shared with the code that loads and edits settings.
/// Writers replace the state between calls; each call sees one snapshot.
#[derive(Debug, Clone, Default)]
pub struct SharedAppState(Arc<RwLock<AppState>>);

impl SharedAppState {
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self(Arc::new(RwLock::new(state)))
    }

    pub fn replace(&self, state: AppState) {
        let mut guard = self
            .0
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = state;
    }
}

impl ConfigProvider for SharedAppState {
    fn ai_config(&self) -> GenerationConfig {
        self.0
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .ai_config()
    }
}
