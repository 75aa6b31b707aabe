// AI configuration and secrets management
//
// The Gemini API key is resolved from:
// 1. System keychain (preferred)
// 2. PROPSEEK_GEMINI_KEY environment variable (fallback for CI/headless)
//
// Keys are NEVER stored in settings.json

use std::env;

use crate::settings::{AiSettings, Settings};

/// Service name for keychain storage
const KEYCHAIN_SERVICE: &str = "propseek";

/// Keychain account holding the Gemini key
const KEYCHAIN_ACCOUNT: &str = "ai/gemini";

/// Environment variable holding the Gemini key
pub const ENV_KEY: &str = "PROPSEEK_GEMINI_KEY";

/// Source of an API key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Key retrieved from system keychain
    Keychain,
    /// Key retrieved from environment variable
    Environment,
    /// No key found
    None,
}

impl KeySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeySource::Keychain => "keychain",
            KeySource::Environment => "environment",
            KeySource::None => "none",
        }
    }
}

/// Result of key lookup
#[derive(Debug, Clone)]
pub struct KeyLookup {
    pub key: Option<String>,
    pub source: KeySource,
}

/// Get the Gemini API key.
///
/// Checks in order:
/// 1. System keychain
/// 2. PROPSEEK_GEMINI_KEY environment variable
pub fn get_api_key() -> KeyLookup {
    #[cfg(feature = "keychain")]
    {
        if let Ok(entry) = keyring::Entry::new(KEYCHAIN_SERVICE, KEYCHAIN_ACCOUNT) {
            if let Ok(key) = entry.get_password() {
                return KeyLookup {
                    key: Some(key),
                    source: KeySource::Keychain,
                };
            }
        }
    }

    if let Ok(key) = env::var(ENV_KEY) {
        if !key.is_empty() {
            return KeyLookup {
                key: Some(key),
                source: KeySource::Environment,
            };
        }
    }

    KeyLookup {
        key: None,
        source: KeySource::None,
    }
}

/// Store the API key in the system keychain
#[cfg(feature = "keychain")]
pub fn set_api_key(key: &str) -> Result<(), String> {
    let entry = keyring::Entry::new(KEYCHAIN_SERVICE, KEYCHAIN_ACCOUNT)
        .map_err(|e| format!("Failed to create keychain entry: {}", e))?;

    entry
        .set_password(key)
        .map_err(|e| format!("Failed to store key in keychain: {}", e))
}

#[cfg(not(feature = "keychain"))]
pub fn set_api_key(_key: &str) -> Result<(), String> {
    Err(format!(
        "Keychain support not enabled. Set the {} environment variable instead.",
        ENV_KEY
    ))
}

/// Delete the API key from the system keychain
#[cfg(feature = "keychain")]
pub fn delete_api_key() -> Result<(), String> {
    let entry = keyring::Entry::new(KEYCHAIN_SERVICE, KEYCHAIN_ACCOUNT)
        .map_err(|e| format!("Failed to access keychain entry: {}", e))?;

    entry
        .delete_credential()
        .map_err(|e| format!("Failed to delete key from keychain: {}", e))
}

#[cfg(not(feature = "keychain"))]
pub fn delete_api_key() -> Result<(), String> {
    Err("Keychain support not enabled.".to_string())
}

/// Check if keychain support is available
pub fn keychain_available() -> bool {
    #[cfg(feature = "keychain")]
    {
        keyring::Entry::new(KEYCHAIN_SERVICE, "test").is_ok()
    }
    #[cfg(not(feature = "keychain"))]
    {
        false
    }
}

// ============================================================================
// Resolved AI Configuration (single source of truth)
// ============================================================================

/// Status of the AI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiConfigStatus {
    /// Configuration is valid, key present
    Ready,
    /// No API key could be found
    MissingKey,
}

impl AiConfigStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::MissingKey => "missing_key",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// The effective AI configuration, fully resolved from all sources.
/// This is the single source of truth for runtime AI behavior.
#[derive(Debug, Clone)]
pub struct ResolvedAiConfig {
    /// Effective model (resolved from settings or default)
    pub model: String,
    /// API base override, if any
    pub api_base: Option<String>,
    /// API key (if available)
    pub api_key: Option<String>,
    /// Source of the API key
    pub key_source: KeySource,
    /// Overall status
    pub status: AiConfigStatus,
    /// Human-readable reason if not ready
    pub blocking_reason: Option<String>,
}

impl ResolvedAiConfig {
    /// Resolve the effective AI configuration from settings.
    pub fn from_settings(settings: &AiSettings) -> Self {
        let model = settings.effective_model().to_string();
        let api_base = settings.api_base.clone();

        let lookup = get_api_key();
        let (status, blocking_reason) = match lookup.key {
            Some(_) => (AiConfigStatus::Ready, None),
            None => (
                AiConfigStatus::MissingKey,
                Some(format!("No API key found. Set via keychain or {}", ENV_KEY)),
            ),
        };

        Self {
            model,
            api_base,
            api_key: lookup.key,
            key_source: lookup.source,
            status,
            blocking_reason,
        }
    }

    /// Load settings and resolve in one call (convenience method)
    pub fn load() -> Self {
        let settings = Settings::load();
        Self::from_settings(&settings.ai)
    }
}

// ============================================================================
// Diagnostics (for CLI doctor and debugging)
// ============================================================================

/// Diagnostic information about AI configuration
#[derive(Debug)]
pub struct AiDiagnostics {
    pub model: String,
    pub status: AiConfigStatus,
    pub key_present: bool,
    pub key_source: KeySource,
    pub keychain_available: bool,
    pub api_base: Option<String>,
}

impl AiDiagnostics {
    pub fn from_resolved(config: &ResolvedAiConfig) -> Self {
        Self {
            model: config.model.clone(),
            status: config.status,
            key_present: config.api_key.is_some(),
            key_source: config.key_source,
            keychain_available: keychain_available(),
            api_base: config.api_base.clone(),
        }
    }
}

impl std::fmt::Display for AiDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AI Configuration")?;
        writeln!(f, "──────────────────────────────")?;
        writeln!(f, "Status:            {}", self.status.as_str())?;
        writeln!(f, "Model:             {}", self.model)?;
        writeln!(f, "Key present:       {}", if self.key_present { "yes" } else { "no" })?;
        writeln!(f, "Key source:        {}", self.key_source.as_str())?;
        writeln!(f, "Keychain available:{}", if self.keychain_available { "yes" } else { "no" })?;
        if let Some(base) = &self.api_base {
            writeln!(f, "API base:          {}", base)?;
        }
        Ok(())
    }
}
