//! Configuration management for Checkup
//!
//! Configuration is layered with figment: embedded defaults, then the user
//! config, then the repository config (or an explicit `--config` file), with
//! `CHECKUP_*` environment variables taking the highest priority. The merged
//! result extracts into typed structs.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use serde::{Deserialize, Serialize};

use crate::diagnose::Severity;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Main configuration structure for Checkup
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckupConfig {
    /// General behavior settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Resource resolution settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Declarative reports executed by `checkup run`
    #[serde(default)]
    pub reports: Vec<ReportSpec>,
}

/// General behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Enable colored terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Resource resolution settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolverConfig {
    /// Directories searched, in order, before the resource name is tried as
    /// a plain filesystem path
    #[serde(default)]
    pub search_path: Vec<String>,
}

/// One declarative properties report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSpec {
    /// Resource name resolved via the resolver's lookup chain
    pub resource: String,

    /// Allow-list of keys to report; empty means all keys
    #[serde(default)]
    pub keys: Vec<String>,

    /// Severity used when this report fails
    #[serde(default)]
    pub severity: Severity,

    /// Per-key display overrides
    #[serde(default)]
    pub formats: Vec<FormatSpec>,
}

/// Display overrides for a single key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatSpec {
    /// Key the override applies to
    pub key: String,

    /// Alternative display name; the raw key is shown when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Value template; every literal `{value}` expands to the raw value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl CheckupConfig {
    /// Load and extract the merged configuration
    pub fn load(custom_config: Option<&str>) -> Result<Self> {
        Self::figment(custom_config)
            .extract()
            .context("Failed to load configuration")
    }

    /// Build the figment layer stack without extracting
    pub fn figment(custom_config: Option<&str>) -> Figment {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = if custom_path.ends_with(".json") {
                figment.merge(Json::file(custom_path))
            } else if custom_path.ends_with(".yaml") || custom_path.ends_with(".yml") {
                figment.merge(Yaml::file(custom_path))
            } else {
                figment.merge(Toml::file(custom_path))
            };
        } else {
            figment = figment
                // User config - support multiple formats
                .merge(Toml::file(Self::user_config_path()))
                .merge(Json::file(Self::user_config_path().replace(".toml", ".json")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yaml")))
                .merge(Yaml::file(Self::user_config_path().replace(".toml", ".yml")))
                // Repository config - support multiple formats
                .merge(Toml::file("checkup.toml"))
                .merge(Json::file("checkup.json"))
                .merge(Yaml::file("checkup.yaml"))
                .merge(Yaml::file("checkup.yml"));
        }

        // Environment variables always have highest priority
        figment.merge(Env::prefixed("CHECKUP_"))
    }

    /// Validate the extracted configuration
    pub fn validate(&self) -> Result<()> {
        for report in &self.reports {
            if report.resource.trim().is_empty() {
                anyhow::bail!("A report is missing its resource name");
            }

            let mut seen = std::collections::HashSet::new();
            for format in &report.formats {
                if !seen.insert(format.key.as_str()) {
                    anyhow::bail!(
                        "Report '{}' has more than one format for key '{}'",
                        report.resource,
                        format.key
                    );
                }
            }
        }

        Ok(())
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/checkup/config.toml", home),
            Err(_) => "~/.config/checkup/config.toml".to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
