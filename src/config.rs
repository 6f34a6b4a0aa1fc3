/// Configuration module for climate-tutor.
///
/// Handles loading, validating, and providing default configuration values.
/// The API key itself never lives in the file: `assistant.api_key_env` names
/// the environment variables it is read from.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

// ── Default value functions ──────────────────────────────────────────

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_api_key_env() -> Vec<String> {
    vec!["GOOGLE_MAPS_API_KEY".to_string(), "API_KEY".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_zoom() -> u8 {
    6
}

fn default_landmark_zoom() -> u8 {
    15
}

fn default_render_mode() -> String {
    "k".to_string()
}

fn default_map_language() -> String {
    "ar".to_string()
}

fn default_map_base_url() -> String {
    "https://maps.google.com/maps".to_string()
}

fn default_search_base_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_search_phrase() -> String {
    "العدالة المناخية".to_string()
}

// ── Config structs ───────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    /// External catalog JSON. The bundled curriculum is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub web_search: WebSearchConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssistantConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Environment variables consulted, in order, for the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: Vec<String>,

    #[serde(default = "default_true")]
    pub geographic_grounding: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MapConfig {
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,

    #[serde(default = "default_landmark_zoom")]
    pub landmark_zoom: u8,

    /// Embed tile style: `k` satellite, `m` roadmap, `h` hybrid.
    #[serde(default = "default_render_mode")]
    pub render_mode: String,

    #[serde(default = "default_map_language")]
    pub language: String,

    #[serde(default = "default_map_base_url")]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WebSearchConfig {
    #[serde(default = "default_search_base_url")]
    pub base_url: String,

    /// Used when the user searches with an empty query.
    #[serde(default = "default_search_phrase")]
    pub default_phrase: String,
}

// ── Default impls ────────────────────────────────────────────────────

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_api_base_url(),
            temperature: default_temperature(),
            api_key_env: default_api_key_env(),
            geographic_grounding: default_true(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_zoom: default_zoom(),
            landmark_zoom: default_landmark_zoom(),
            render_mode: default_render_mode(),
            language: default_map_language(),
            base_url: default_map_base_url(),
        }
    }
}

impl Default for WebSearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_search_base_url(),
            default_phrase: default_search_phrase(),
        }
    }
}

// ── Config implementation ────────────────────────────────────────────

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// If `config_path` is empty, defaults to `"config.json"`.
    /// If the file does not exist, returns a default config and, for the
    /// default path only, writes a template next to the binary's cwd.
    pub fn load(config_path: &str) -> Result<Self> {
        let path = if config_path.is_empty() {
            DEFAULT_CONFIG_PATH
        } else {
            config_path
        };

        if !Path::new(path).exists() {
            info!("{path} not found, using defaults");
            let cfg = Self::default();

            if path == DEFAULT_CONFIG_PATH {
                match cfg.save(path) {
                    Ok(()) => info!("Generated config template: {path}"),
                    Err(e) => warn!("Failed to generate config template: {e}"),
                }
            }

            return Ok(cfg);
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {path}"))?;

        let cfg: Config = match serde_json::from_str(&data) {
            Ok(c) => c,
            Err(e) => {
                warn!("Invalid JSON in {path}: {e}");
                warn!("Using default configuration");
                return Ok(Self::default());
            }
        };

        info!("Loaded configuration from {path}");
        Ok(cfg)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &str) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("failed to marshal config")?;
        std::fs::write(path, data).with_context(|| format!("failed to write config: {path}"))?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.assistant.model.trim().is_empty(),
            "assistant.model must not be empty"
        );
        anyhow::ensure!(
            (0.0..=2.0).contains(&self.assistant.temperature),
            "assistant.temperature must be within [0, 2]"
        );
        anyhow::ensure!(
            !self.assistant.api_key_env.is_empty(),
            "at least one assistant.api_key_env variable must be specified"
        );
        anyhow::ensure!(
            (1..=21).contains(&self.map.default_zoom),
            "map.default_zoom must be within [1, 21]"
        );
        anyhow::ensure!(
            (1..=21).contains(&self.map.landmark_zoom),
            "map.landmark_zoom must be within [1, 21]"
        );
        Ok(())
    }
}

impl AssistantConfig {
    /// Resolve the API key from the process environment.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    /// Resolve the API key through `lookup`, taking the first non-blank value.
    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key_env
            .iter()
            .filter_map(|name| lookup(name))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
