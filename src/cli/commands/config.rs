//! Configuration management commands

use anyhow::{Context, Result};

use crate::cli::{ConfigCommands, Output};
use crate::config::CheckupConfig;

pub fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show { format } => show(config_path, &format),
        ConfigCommands::Validate => validate(config_path, output),
    }
}

fn show(config_path: Option<&str>, format: &str) -> Result<()> {
    let config = CheckupConfig::load(config_path)?;

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&config)
            .context("Failed to render configuration as JSON")?,
        "yaml" => {
            serde_yml::to_string(&config).context("Failed to render configuration as YAML")?
        }
        _ => toml::to_string_pretty(&config).context("Failed to render configuration as TOML")?,
    };

    println!("{rendered}");
    Ok(())
}

fn validate(config_path: Option<&str>, output: &Output) -> Result<()> {
    let config = CheckupConfig::load(config_path)?;
    config.validate()?;
    output.success("Configuration is valid");
    Ok(())
}
