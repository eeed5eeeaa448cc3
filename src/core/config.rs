//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.loopzy/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::auth::{
    DEFAULT_DEMO_EMAIL, DEFAULT_DEMO_PASSWORD, DEFAULT_SIGN_IN_DELAY_MS, SimulatedAuthService,
};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoopzyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub demo_email: Option<String>,
    pub demo_password: Option<String>,
    pub sign_in_delay_ms: Option<u64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub demo_email: String,
    pub demo_password: String,
    pub sign_in_delay: Duration,
}

impl ResolvedConfig {
    pub fn auth_service(&self) -> SimulatedAuthService {
        SimulatedAuthService::new(
            self.demo_email.clone(),
            self.demo_password.clone(),
            self.sign_in_delay,
        )
    }
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

/// Returns the path to `~/.loopzy/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".loopzy").join("config.toml"))
}

/// Load config from `~/.loopzy/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LoopzyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LoopzyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LoopzyConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<LoopzyConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(LoopzyConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LoopzyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# Loopzy Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "debug"                 # "off", "error", "warn", "info", "debug", "trace"

# [auth]
# demo_email = "demo@loopzy.com"      # Or set LOOPZY_DEMO_EMAIL
# demo_password = "password"          # Or set LOOPZY_DEMO_PASSWORD
# sign_in_delay_ms = 2000             # Simulated network latency
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
///
/// `cli_log_level` is from the CLI (None = not specified).
pub fn resolve(config: &LoopzyConfig, cli_log_level: Option<&str>) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("LOOPZY_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .and_then(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let demo_email = std::env::var("LOOPZY_DEMO_EMAIL")
        .ok()
        .or_else(|| config.auth.demo_email.clone())
        .unwrap_or_else(|| DEFAULT_DEMO_EMAIL.to_string());

    let demo_password = std::env::var("LOOPZY_DEMO_PASSWORD")
        .ok()
        .or_else(|| config.auth.demo_password.clone())
        .unwrap_or_else(|| DEFAULT_DEMO_PASSWORD.to_string());

    let delay_ms = std::env::var("LOOPZY_SIGN_IN_DELAY_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .or(config.auth.sign_in_delay_ms)
        .unwrap_or(DEFAULT_SIGN_IN_DELAY_MS);

    ResolvedConfig {
        log_level,
        demo_email,
        demo_password,
        sign_in_delay: Duration::from_millis(delay_ms),
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level '{}', using default", s);
            None
        }
    }
}
