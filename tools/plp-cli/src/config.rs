//! CLI configuration.

use anyhow::{Context, Result};
use plp_core::{RenderConfig, StoreSettings, ViewPreference};
use serde::{Deserialize, Serialize};

/// Config file names searched from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["plp.toml", ".plp.toml", "plp.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shop settings used when a payload carries none.
    #[serde(default)]
    pub settings: StoreSettings,

    /// Render options.
    #[serde(default)]
    pub render: RenderOptions,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text; `.json` paths are JSON, everything else TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// `[render]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// View preference applied when a payload has none.
    #[serde(default)]
    pub preference: ViewPreference,

    /// Title and placeholder limits.
    #[serde(flatten)]
    pub limits: RenderConfig,

    /// JSON message catalog for labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations: Option<String>,

    /// Id of the wrapper element when writing standalone markup.
    #[serde(default = "default_container_id")]
    pub container_id: String,
}

fn default_container_id() -> String {
    "products".to_string()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            preference: ViewPreference::default(),
            limits: RenderConfig::default(),
            translations: None,
            container_id: default_container_id(),
        }
    }
}

/// Generate a default plp.toml config file.
pub fn generate_default_config() -> String {
    r#"# Product list view configuration

# Shop settings used when a payload does not carry its own
[settings]
enabled = true
enable_wishlist = false
show_stock_availability = true
allow_items_not_in_stock = false

[render]
preference = "List View"
title_limit = 200
abbr_length = 2
container_id = "products"
# translations = "locale/fr.json"
"#
    .to_string()
}
