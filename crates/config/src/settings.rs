// Application settings
// Loaded from ~/.config/propseek/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use propseek_model::Language;

/// Default generative model when the user hasn't picked one.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// AI-specific settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AiSettings {
    /// Model identifier; empty = use the default model
    pub model: String,

    /// Override for the Gemini API base URL (self-hosted proxies, tests)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl AiSettings {
    /// Get the effective model (user-specified or default)
    pub fn effective_model(&self) -> &str {
        if self.model.is_empty() {
            DEFAULT_MODEL
        } else {
            &self.model
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// UI and query language
    pub language: Language,

    pub ai: AiSettings,
}

impl Settings {
    pub fn path() -> PathBuf {
        crate::config_dir().join("settings.json")
    }

    /// Load settings from disk.
    ///
    /// Returns defaults if the file doesn't exist or can't be parsed.
    /// This is intentional - settings errors must not prevent startup.
    pub fn load() -> Self {
        fs::read_to_string(Self::path())
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save settings to disk, creating the config directory if needed.
    pub fn save(&self) -> Result<(), String> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, json).map_err(|e| e.to_string())
    }

    /// Save, ignoring errors (settings are not critical for operation).
    pub fn save_quiet(&self) {
        let _ = self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
        assert_eq!(parsed.language, Language::Hu);
    }

    #[test]
    fn effective_model_falls_back_to_default() {
        let mut ai = AiSettings::default();
        assert_eq!(ai.effective_model(), DEFAULT_MODEL);
        ai.model = "gemini-2.5-pro".to_string();
        assert_eq!(ai.effective_model(), "gemini-2.5-pro");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"language": "de"}"#).unwrap();
        assert_eq!(settings.language, Language::De);
        assert!(settings.ai.model.is_empty());
        assert!(settings.ai.api_base.is_none());
    }
}
