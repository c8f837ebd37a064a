use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::constants::DEFAULT_URL_DISPLAY_LENGTH;

/// CLI defaults persisted in the platform config directory.
///
/// Every field is optional; a missing file or a missing field falls back
/// to the built-in default, so a fresh install works without any setup.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output format for CLI runs ("plain" or "json")
    pub output: Option<String>,
    /// Display width for URLs in plain output
    pub url_display_length: Option<usize>,
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(config_path: &PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::get_config_path();
        self.save_to_path(&config_path)
    }

    pub fn save_to_path(&self, config_path: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    fn get_config_path() -> PathBuf {
        let proj_dirs = ProjectDirs::from("org", "permacommons", "taptext")
            .expect("Failed to determine config directory");
        proj_dirs.config_dir().join("config.toml")
    }

    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.output {
            Some(output) => println!("  output: {output}"),
            None => println!("  output: plain (default)"),
        }
        match self.url_display_length {
            Some(len) => println!("  url-display-length: {len}"),
            None => println!("  url-display-length: {DEFAULT_URL_DISPLAY_LENGTH} (default)"),
        }
    }

    pub fn output_is_json(&self) -> bool {
        matches!(self.output.as_deref(), Some("json"))
    }

    pub fn display_length(&self) -> usize {
        self.url_display_length.unwrap_or(DEFAULT_URL_DISPLAY_LENGTH)
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "output" => match value {
                "plain" | "json" => {
                    self.output = Some(value.to_string());
                    Ok(())
                }
                _ => Err(format!("Invalid output format '{value}'. Use plain or json.").into()),
            },
            "url-display-length" => {
                let len: usize = value
                    .parse()
                    .map_err(|_| format!("Invalid length '{value}'. Use a positive integer."))?;
                if len == 0 {
                    return Err("url-display-length must be at least 1.".into());
                }
                self.url_display_length = Some(len);
                Ok(())
            }
            _ => Err(format!(
                "Unknown configuration key '{key}'. Known keys: output, url-display-length."
            )
            .into()),
        }
    }

    pub fn unset_value(&mut self, key: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "output" => {
                self.output = None;
                Ok(())
            }
            "url-display-length" => {
                self.url_display_length = None;
                Ok(())
            }
            _ => Err(format!(
                "Unknown configuration key '{key}'. Known keys: output, url-display-length."
            )
            .into()),
        }
    }
}
