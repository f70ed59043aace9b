//! Configuration module for the SOAP scribe.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the generation
//! service and prompt rendering, `AppPaths` for cross-platform directories,
//! and TOML persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{AppConfig, GenerationConfig, PromptConfig, API_KEY_ENV};
