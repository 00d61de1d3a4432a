use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::is_valid_enumerator;

pub const CONFIG_FILE_NAME: &str = ".locgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory scanned (non-recursively) for message files.
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    /// Where the generated module is written.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Module name wrapping the generated items.
    #[serde(default = "default_module_name")]
    pub module_name: String,
    /// Explicit combined-file path; when set, it must exist and it is the
    /// only input considered.
    #[serde(default)]
    pub combined_file: Option<String>,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_output_file() -> String {
    "./src/localizer_generated.rs".to_string()
}

fn default_module_name() -> String {
    "localizer".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            output_file: default_output_file(),
            module_name: default_module_name(),
            combined_file: None,
        }
    }
}

impl Config {
    /// Load the configuration from `dir`, falling back to defaults when no
    /// config file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The module name ends up verbatim in the generated `pub mod` header.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_enumerator(&self.module_name) {
            anyhow::bail!(
                "Invalid 'moduleName': \"{}\" is not a usable module name",
                self.module_name
            );
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?;
    Ok(format!("{}\n", json))
}
