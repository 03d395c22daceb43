//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.promptdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeckConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default)]
    pub brand: BrandConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Path or http(s) URL of the topics document.
    pub topics: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GestureConfig {
    pub drag_threshold_rows: Option<u16>,
    pub long_press_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BrandConfig {
    pub label: Option<String>,
    pub link: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TOPICS: &str = "topics.json";
pub const DEFAULT_DRAG_THRESHOLD_ROWS: u16 = 3;
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;
pub const DEFAULT_BRAND_LABEL: &str = "promptdeck";
pub const DEFAULT_BRAND_LINK: &str = "https://www.google.com";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub topics: String,
    /// None = seed from entropy.
    pub seed: Option<u64>,
    pub drag_threshold_rows: u16,
    pub long_press_ms: u64,
    pub brand_label: String,
    pub brand_link: String,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub topics: Option<String>,
    pub seed: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.promptdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".promptdeck").join("config.toml"))
}

/// Load config from `~/.promptdeck/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DeckConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DeckConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DeckConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DeckConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# promptdeck configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# topics = "topics.json"             # Path or http(s) URL; or PROMPTDECK_TOPICS / --topics
# seed = 42                          # Reproducible sessions; or PROMPTDECK_SEED / --seed

# [gestures]
# drag_threshold_rows = 3            # Rows a mouse drag must travel to flip a card
# long_press_ms = 500                # Hold time on the brand label

# [brand]
# label = "promptdeck"
# link = "https://www.google.com"    # Shown after a long press on the brand
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DeckConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &DeckConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Topics: CLI → env → config → default
    let topics = cli
        .topics
        .clone()
        .or_else(|| env("PROMPTDECK_TOPICS"))
        .or_else(|| config.general.topics.clone())
        .unwrap_or_else(|| DEFAULT_TOPICS.to_string());

    // Seed: CLI → env → config → entropy
    let seed = cli
        .seed
        .or_else(|| {
            env("PROMPTDECK_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    warn!("Ignoring PROMPTDECK_SEED={:?}: {}", raw, e);
                    None
                }
            })
        })
        .or(config.general.seed);

    ResolvedConfig {
        topics,
        seed,
        drag_threshold_rows: config
            .gestures
            .drag_threshold_rows
            .unwrap_or(DEFAULT_DRAG_THRESHOLD_ROWS)
            .max(1),
        long_press_ms: config
            .gestures
            .long_press_ms
            .unwrap_or(DEFAULT_LONG_PRESS_MS),
        brand_label: config
            .brand
            .label
            .clone()
            .unwrap_or_else(|| DEFAULT_BRAND_LABEL.to_string()),
        brand_link: config
            .brand
            .link
            .clone()
            .unwrap_or_else(|| DEFAULT_BRAND_LINK.to_string()),
    }
}
