//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Log levels accepted in `app.log_level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails (including an unknown sort label)
/// - Validation rules are violated
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
  let path = path.as_ref();

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    path = %path.display(),
    sort = %config.view.sort,
    material_only = config.view.material_only,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.app.name.trim().is_empty(),
    "app.name must not be empty"
  );
  anyhow::ensure!(
    LOG_LEVELS.contains(&config.app.log_level.to_ascii_lowercase().as_str()),
    "app.log_level must be one of {:?}, got {:?}",
    LOG_LEVELS,
    config.app.log_level
  );
  anyhow::ensure!(
    !config.input.listings_path.trim().is_empty(),
    "input.listings_path must not be empty"
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::sort_mode::SortMode;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_empty_config_uses_defaults() {
    let config = parse_config("").unwrap();
    assert_eq!(config.app.log_level, "info");
    assert!(config.app.json_logs);
    assert_eq!(config.view.sort, SortMode::Type);
    assert!(!config.view.material_only);
    assert_eq!(config.input.listings_path, "listings.jsonl");
  }

  #[test]
  fn test_full_config() {
    let toml = r#"
      [app]
      name = "ah"
      log_level = "debug"
      json_logs = false

      [view]
      sort = "Item Name"
      material_only = true

      [input]
      listings_path = "dump.jsonl"
    "#;
    let config = parse_config(toml).unwrap();
    assert_eq!(config.app.name, "ah");
    assert!(!config.app.json_logs);
    assert_eq!(config.view.sort, SortMode::ItemName);
    assert!(config.view.material_only);
    assert_eq!(config.input.listings_path, "dump.jsonl");
  }

  #[test]
  fn test_rejects_unknown_sort() {
    let err = parse_config("[view]\nsort = \"Rarity\"\n").unwrap_err();
    assert!(format!("{err:#}").contains("Rarity"));
  }

  #[test]
  fn test_rejects_bad_log_level() {
    assert!(parse_config("[app]\nlog_level = \"loud\"\n").is_err());
  }

  #[test]
  fn test_rejects_empty_listings_path() {
    assert!(parse_config("[input]\nlistings_path = \" \"\n").is_err());
  }
}
