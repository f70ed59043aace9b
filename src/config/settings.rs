//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across tasks.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

/// Environment variable that overrides [`GenerationConfig::api_key`].
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

// ---------------------------------------------------------------------------
// GenerationConfig
// ---------------------------------------------------------------------------

/// Settings for the generative-text service (Gemini `generateContent`).
///
/// The sampling defaults are tuned for clinical documentation: a low
/// temperature keeps repeated runs over the same transcript consistent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the models collection; the request goes to
    /// `{base_url}/{model}:generateContent`.
    pub base_url: String,
    /// API key sent as `x-goog-api-key`.  `None` until configured.
    pub api_key: Option<String>,
    /// Model identifier (e.g. `"gemini-2.0-flash"`).
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).
    pub temperature: f32,
    /// Top-k sampling cut-off.
    pub top_k: u32,
    /// Nucleus sampling probability mass.
    pub top_p: f32,
    /// Upper bound on generated tokens.
    pub max_output_tokens: u32,
    /// Optional HTTP timeout.  `None` leaves requests unbounded; callers
    /// wanting bounded latency opt in here.
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
            api_key: None,
            model: "gemini-2.0-flash".into(),
            temperature: 0.2,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
            timeout_secs: None,
        }
    }
}

impl GenerationConfig {
    /// Replace `api_key` with `key` when it is a non-empty string.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }
}

// ---------------------------------------------------------------------------
// PromptConfig
// ---------------------------------------------------------------------------

/// Prompt rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// `chrono` format string for the visit date embedded in SOAP prompts.
    /// The default renders the US short form, e.g. `10/14/2026`.
    pub date_format: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use soap_scribe::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Generation service settings.
    pub generation: GenerationConfig,
    /// Prompt rendering settings.
    #[serde(default)]
    pub prompt: PromptConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`,
    /// then apply the [`API_KEY_ENV`] override.
    ///
    /// Returns the defaults when the file does not exist yet.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&AppPaths::new().settings_file)?;
        config.generation = config
            .generation
            .with_api_key_override(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write the default configuration to the platform-appropriate
    /// `settings.toml` if it does not exist yet.
    pub fn init() -> Result<bool> {
        Self::init_at(&AppPaths::new().settings_file)
    }

    /// Write defaults to `path` unless a file is already there.  Returns
    /// `true` when a file was created.
    pub fn init_at(path: &std::path::Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to(path)?;
        log::info!("config: wrote default settings to {}", path.display());
        Ok(true)
    }

    /// Save to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
