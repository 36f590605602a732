//! Configuration Module - TOML-based Settings
//!
//! Loads and validates configuration from `config.toml`. Every section
//! has defaults, so an empty file (or no file at all) is a valid setup.
//! View settings here seed the listing view; they are read, never
//! written back.

pub mod loader;

use serde::Deserialize;

use crate::domain::sort_mode::SortMode;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
  /// Application identity and logging.
  pub app: AppSection,
  /// Initial list display state.
  pub view: ViewConfig,
  /// Where listings are read from.
  pub input: InputConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable name, logged at startup.
  #[serde(default = "default_name")]
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Emit JSON log lines instead of human-readable ones.
  #[serde(default = "default_true")]
  pub json_logs: bool,
}

/// Initial display state of the for-sale list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewConfig {
  /// Selected sort option, by dropdown label.
  #[serde(default)]
  pub sort: SortMode,
  /// Start with the material toggle on.
  #[serde(default)]
  pub material_only: bool,
}

/// Listing input configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
  /// JSONL file with one listing per line.
  #[serde(default = "default_listings_path")]
  pub listings_path: String,
}

impl Default for AppSection {
  fn default() -> Self {
    Self {
      name: default_name(),
      log_level: default_log_level(),
      json_logs: true,
    }
  }
}

impl Default for InputConfig {
  fn default() -> Self {
    Self {
      listings_path: default_listings_path(),
    }
  }
}

// Default value functions for serde

fn default_name() -> String {
  "auction-house-sort".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

const fn default_true() -> bool {
  true
}

fn default_listings_path() -> String {
  "listings.jsonl".to_string()
}
