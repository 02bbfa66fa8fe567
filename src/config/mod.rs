//! Configuration module for the triage router
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`TRIAGE_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use triage::config::TriageConfig;
//!
//! // Load defaults
//! let config = TriageConfig::default();
//! assert_eq!(config.ladder.premium, "claude-opus-4-6");
//!
//! // Parse from TOML
//! let toml = r#"
//! [ladder]
//! premium = "claude-opus-4-5-20250820"
//! "#;
//! let config: TriageConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.ladder.premium, "claude-opus-4-5-20250820");
//! ```

pub mod error;
pub mod ladder;
pub mod limits;
pub mod logging;

pub use error::ConfigError;
pub use ladder::LadderConfig;
pub use limits::{LimitsConfig, PlanLimits};
pub use logging::{LogFormat, LoggingConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the triage router.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TriageConfig {
    /// Model identifiers backing each tier
    pub ladder: LadderConfig,
    /// Per-plan budget limits
    pub limits: LimitsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl TriageConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports TRIAGE_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        // Ladder models
        if let Ok(model) = std::env::var("TRIAGE_FLOOR_MODEL") {
            self.ladder.floor = model;
        }
        if let Ok(model) = std::env::var("TRIAGE_MID_MODEL") {
            self.ladder.mid = model;
        }
        if let Ok(model) = std::env::var("TRIAGE_PREMIUM_MODEL") {
            self.ladder.premium = model;
        }
        if let Ok(model) = std::env::var("TRIAGE_HEARTBEAT_MODEL") {
            self.ladder.heartbeat = model;
        }

        // Logging settings
        if let Ok(level) = std::env::var("TRIAGE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TRIAGE_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ladder
            .validate()
            .map_err(|message| ConfigError::Validation {
                field: "ladder".to_string(),
                message,
            })?;

        self.limits
            .validate()
            .map_err(|message| ConfigError::Validation {
                field: "limits".to_string(),
                message,
            })?;

        Ok(())
    }
}
