use std::fmt;

use wasm_bindgen::JsValue;

/// Rejected screen configuration or inconsistent static content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownVariant(String),
    EmptyRanks,
    FirstRankLocked { title: String },
    DuplicateRankTitle(String),
    MissingTileNames { needed: usize, available: usize },
    #[cfg(feature = "serde_json")]
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownVariant(name) => {
                write!(f, "unknown screen variant '{name}' (expected 'full' or 'compact')")
            }
            ConfigError::EmptyRanks => write!(f, "rank list is empty"),
            ConfigError::FirstRankLocked { title } => {
                write!(f, "first rank '{title}' must be unlocked")
            }
            ConfigError::DuplicateRankTitle(title) => {
                write!(f, "duplicate rank title '{title}'")
            }
            ConfigError::MissingTileNames { needed, available } => write!(
                f,
                "{needed} mini-game tiles need names but only {available} are defined"
            ),
            #[cfg(feature = "serde_json")]
            ConfigError::Json(msg) => write!(f, "invalid screen config json: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
