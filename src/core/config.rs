//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navstack/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The process environment is read here and nowhere else. The Navigator
//! only ever sees the resolved `RunMode`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::navigator::{EvictionPolicy, RunMode};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub run_mode: Option<RunMode>,
    pub eviction: Option<EvictionPolicy>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Set to `"1"` by design-time preview sandboxes.
pub const PREVIEW_ENV_VAR: &str = "XCODE_RUNNING_FOR_PREVIEWS";
pub const EVICTION_ENV_VAR: &str = "NAVSTACK_EVICTION";
pub const DEFAULT_LOG_FILE: &str = "navstack.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub run_mode: RunMode,
    pub eviction: EvictionPolicy,
    pub log_file: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            run_mode: RunMode::Live,
            eviction: EvictionPolicy::Retain,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

/// Overrides taken from the command line (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub preview: bool,
    pub eviction: Option<EvictionPolicy>,
}

/// The environment values `resolve` cares about, captured up front so
/// resolution itself stays deterministic.
#[derive(Debug, Default, Clone)]
pub struct EnvOverrides {
    pub previews: Option<String>,
    pub eviction: Option<String>,
}

impl EnvOverrides {
    pub fn from_process() -> Self {
        Self {
            previews: std::env::var(PREVIEW_ENV_VAR).ok(),
            eviction: std::env::var(EVICTION_ENV_VAR).ok(),
        }
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

/// Returns the path to `~/.navstack/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navstack").join("config.toml"))
}

/// Load config from `~/.navstack/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `NavConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<NavConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NavConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<NavConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: NavConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# navstack configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# run_mode = "live"            # "live" or "preview" (XCODE_RUNNING_FOR_PREVIEWS=1 forces preview)
# eviction = "retain"          # "retain" or "on_leave" (or NAVSTACK_EVICTION)
# log_file = "navstack.log"
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
pub fn resolve(config: &NavConfig, env: &EnvOverrides, cli: CliOverrides) -> ResolvedConfig {
    // Run mode: CLI flag or preview env var force preview; otherwise config → default
    let env_preview = env.previews.as_deref() == Some("1");
    let run_mode = if cli.preview || env_preview {
        RunMode::Preview
    } else {
        config.general.run_mode.unwrap_or_default()
    };

    // Eviction: CLI → env → config → default
    let env_eviction = env.eviction.as_deref().and_then(|raw| {
        let parsed = parse_eviction(raw);
        if parsed.is_none() {
            warn!("Ignoring unknown {EVICTION_ENV_VAR} value: {raw}");
        }
        parsed
    });
    let eviction = cli
        .eviction
        .or(env_eviction)
        .or(config.general.eviction)
        .unwrap_or_default();

    let log_file = config
        .general
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        run_mode,
        eviction,
        log_file,
    }
}

fn parse_eviction(raw: &str) -> Option<EvictionPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "retain" => Some(EvictionPolicy::Retain),
        "on_leave" | "on-leave" => Some(EvictionPolicy::OnLeave),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = NavConfig::default();
        assert!(config.general.run_mode.is_none());
        assert!(config.general.eviction.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(
            &NavConfig::default(),
            &EnvOverrides::default(),
            CliOverrides::default(),
        );
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_preview_env_var_forces_preview() {
        let config = NavConfig {
            general: GeneralConfig {
                run_mode: Some(RunMode::Live),
                ..Default::default()
            },
        };
        let env = EnvOverrides {
            previews: Some("1".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&config, &env, CliOverrides::default());
        assert_eq!(resolved.run_mode, RunMode::Preview);
    }

    #[test]
    fn test_preview_env_var_other_values_ignored() {
        let env = EnvOverrides {
            previews: Some("0".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&NavConfig::default(), &env, CliOverrides::default());
        assert_eq!(resolved.run_mode, RunMode::Live);
    }

    #[test]
    fn test_eviction_precedence() {
        let config = NavConfig {
            general: GeneralConfig {
                eviction: Some(EvictionPolicy::OnLeave),
                ..Default::default()
            },
        };
        let env = EnvOverrides {
            eviction: Some("retain".to_string()),
            ..Default::default()
        };

        let from_env = resolve(&config, &env, CliOverrides::default());
        assert_eq!(from_env.eviction, EvictionPolicy::Retain);

        let from_cli = resolve(
            &config,
            &env,
            CliOverrides {
                eviction: Some(EvictionPolicy::OnLeave),
                ..Default::default()
            },
        );
        assert_eq!(from_cli.eviction, EvictionPolicy::OnLeave);
    }

    #[test]
    fn test_bad_env_eviction_falls_through_to_config() {
        let config = NavConfig {
            general: GeneralConfig {
                eviction: Some(EvictionPolicy::OnLeave),
                ..Default::default()
            },
        };
        let env = EnvOverrides {
            eviction: Some("sometimes".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&config, &env, CliOverrides::default());
        assert_eq!(resolved.eviction, EvictionPolicy::OnLeave);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
run_mode = "preview"
eviction = "on_leave"
log_file = "/tmp/nav.log"
"#;
        let config: NavConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.run_mode, Some(RunMode::Preview));
        assert_eq!(config.general.eviction, Some(EvictionPolicy::OnLeave));

        let resolved = resolve(&config, &EnvOverrides::default(), CliOverrides::default());
        assert_eq!(resolved.log_file, "/tmp/nav.log");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: NavConfig = toml::from_str("").unwrap();
        assert!(config.general.log_file.is_none());
    }

    #[test]
    fn test_unknown_run_mode_is_parse_error() {
        let result: Result<NavConfig, _> = toml::from_str("[general]\nrun_mode = \"sandbox\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let err = load_config_from(Path::new("/definitely/not/here/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("config I/O error"));
    }
}
