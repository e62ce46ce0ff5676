//! Configuration loading and the generator factory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use frqforge_core::traits::TextGenerator;

use crate::gemini::GeminiGenerator;

/// Settings for the text-generation provider.
///
/// Note: Custom Debug impl masks the API key to prevent accidental exposure
/// in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// API credential. `${VAR}` references are resolved from the environment.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL override, used by tests to point at a local server.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("api_key", &"***")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            model: default_model(),
            base_url: None,
        }
    }
}

fn default_api_key() -> String {
    "${GEMINI_API_KEY}".to_string()
}

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

/// Settings for the HTTP listener.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Settings for the grading/feedback surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingSettings {
    /// The single class code the feedback page accepts.
    #[serde(default = "default_class_code")]
    pub accepted_class_code: String,
}

impl Default for GradingSettings {
    fn default() -> Self {
        Self {
            accepted_class_code: default_class_code(),
        }
    }
}

fn default_class_code() -> String {
    "mahs".to_string()
}

/// Top-level frqforge configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrqforgeConfig {
    #[serde(default)]
    pub provider: ProviderSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub grading: GradingSettings,
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `frqforge.toml` in the current directory
/// 2. `~/.config/frqforge/config.toml`
///
/// Environment variable overrides: `GEMINI_API_KEY`, `PORT`,
/// `FRQFORGE_CLASS_CODE`.
pub fn load_config() -> Result<FrqforgeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<FrqforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("frqforge.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<FrqforgeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => FrqforgeConfig::default(),
    };

    // Apply env var overrides
    if let Ok(key) = std::env::var("GEMINI_API_KEY") {
        config.provider.api_key = key;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port
            .parse()
            .with_context(|| format!("invalid PORT value: {port}"))?;
    }
    if let Ok(code) = std::env::var("FRQFORGE_CLASS_CODE") {
        config.grading.accepted_class_code = code;
    }

    // Resolve env vars in string settings
    config.provider.api_key = resolve_env_vars(&config.provider.api_key);
    config.provider.base_url = config
        .provider
        .base_url
        .as_ref()
        .map(|u| resolve_env_vars(u));

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("frqforge"))
}

/// Create the text generator from its settings.
pub fn create_generator(settings: &ProviderSettings) -> Arc<dyn TextGenerator> {
    Arc::new(GeminiGenerator::new(
        &settings.api_key,
        &settings.model,
        settings.base_url.clone(),
    ))
}
