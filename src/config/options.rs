//! Process-wide Slotty options.
//!
//! Options are resolved once at startup and shared immutably by every request.
//! They are read from a TOML file:
//!
//! ```toml
//! # silent (default) | log | throw
//! validation_mode = "log"
//!
//! # auto (default) | always | never
//! dev_tools_injection = "auto"
//! ```
//!
//! The `SLOTTY_VALIDATION_MODE` environment variable overrides the file value.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::parse_config;
use crate::core::SlottyError;

/// Environment variable that overrides [`SlottyOptions::validation_mode`].
pub const VALIDATION_MODE_ENV: &str = "SLOTTY_VALIDATION_MODE";

/// How orphaned fills are reported at the end of a request.
///
/// The mode also decides whether defined/filled slots are tracked at all:
/// in [`ValidationMode::Silent`] no bookkeeping happens.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// No tracking, no reporting.
    #[default]
    Silent,
    /// Orphaned fills are reported as a warning; rendering continues.
    Log,
    /// Orphaned fills fail the request with [`SlottyError::SlotNotFound`].
    Throw,
}

impl ValidationMode {
    /// Whether defined/filled slot tracking is active in this mode.
    #[must_use]
    pub const fn tracks_slots(self) -> bool {
        !matches!(self, Self::Silent)
    }
}

impl std::fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Silent => write!(f, "silent"),
            Self::Log => write!(f, "log"),
            Self::Throw => write!(f, "throw"),
        }
    }
}

impl std::str::FromStr for ValidationMode {
    type Err = SlottyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "log" => Ok(Self::Log),
            "throw" => Ok(Self::Throw),
            _ => Err(SlottyError::ConfigError {
                message: format!(
                    "unknown validation mode '{s}' (expected silent, log or throw)"
                ),
            }),
        }
    }
}

/// When the developer tools (slot highlighting CSS/JS) are injected into HTML responses.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DevToolsInjection {
    /// Inject only in the development environment.
    #[default]
    Auto,
    /// Always inject.
    Always,
    /// Never inject.
    Never,
}

/// The hosting environment a request is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum HostEnvironment {
    /// Local development: slots are wrapped with debug markers.
    Development,
    /// Anything else.
    #[default]
    Production,
}

impl HostEnvironment {
    /// Whether this is the development environment.
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Configuration options for Slotty.
///
/// Slot name validation is always performed regardless of these settings.
///
/// ```rust
/// use slotty::config::{SlottyOptions, ValidationMode};
///
/// let options: SlottyOptions = toml::from_str(r#"validation_mode = "throw""#).unwrap();
/// assert_eq!(options.validation_mode, ValidationMode::Throw);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlottyOptions {
    /// How orphaned fills are handled. Defaults to `silent`.
    pub validation_mode: ValidationMode,

    /// When to inject the developer tools. Defaults to `auto`.
    pub dev_tools_injection: DevToolsInjection,
}

impl SlottyOptions {
    /// Options with the given validation mode and default everything else.
    #[must_use]
    pub fn with_validation_mode(validation_mode: ValidationMode) -> Self {
        Self {
            validation_mode,
            ..Self::default()
        }
    }

    /// Load options from an optional path.
    ///
    /// Returns the defaults when no path is given or the file does not exist.
    /// The environment override is applied in both cases.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let mut options = match path {
            Some(path) if path.exists() => Self::load_from(&path).await?,
            Some(path) => {
                tracing::debug!("Config file {} not found, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };
        options.apply_env_overrides()?;
        Ok(options)
    }

    /// Load options from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let options: Self = parse_config(path).await?;
        tracing::debug!("Loaded slotty config from {}", path.display());
        Ok(options)
    }

    /// Apply `SLOTTY_VALIDATION_MODE` if it is set.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = std::env::var(VALIDATION_MODE_ENV) {
            self.validation_mode = value
                .parse()
                .with_context(|| format!("Invalid {VALIDATION_MODE_ENV} value"))?;
            tracing::debug!("Validation mode overridden from environment: {}", self.validation_mode);
        }
        Ok(())
    }
}
