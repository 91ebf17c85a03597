//! # Till Configuration
//!
//! Loads the denomination set and display settings.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TILL_DENOMINATIONS="200;100;50;20;10;5;2;1;0,50;0,20;..."          │
//! │     TILL_DECIMAL_SEPARATOR=,                                           │
//! │     TILL_CURRENCY_SYMBOL=€                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, or                                                │
//! │     ~/.config/till/till.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.till.till/till.toml (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Euro cash set, ',' separator, '€'                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # till.toml
//! [currency]
//! code = "CHF"
//! symbol = "Fr."
//! decimal_separator = "."
//!
//! [denominations]
//! values = ["200", "100", "50", "20", "10", "5", "2", "1", "0.50", "0.20", "0.10", "0.05"]
//! ```
//!
//! Denominations are strings so they go through the same parser as cashier
//! input: TOML floats would bring binary floating point back in.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use till_core::validation::parse_amount;
use till_core::{Amount, DenominationError, DenominationSet, ValidationError};

/// Result alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors. All of them abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Invalid denomination '{value}': {source}")]
    Amount {
        value: String,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid denomination set: {0}")]
    Denominations(#[from] DenominationError),
}

// =============================================================================
// Currency Settings
// =============================================================================

/// How amounts are shown to the cashier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 code, informational only.
    #[serde(default = "default_code")]
    pub code: String,

    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// `,` or `.`; input accepts both regardless.
    #[serde(default = "default_separator")]
    pub decimal_separator: char,
}

fn default_code() -> String {
    "EUR".to_string()
}

fn default_symbol() -> String {
    "€".to_string()
}

fn default_separator() -> char {
    ','
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            code: default_code(),
            symbol: default_symbol(),
            decimal_separator: default_separator(),
        }
    }
}

impl CurrencySettings {
    /// "73,50 €"
    pub fn format(&self, amount: Amount) -> String {
        format!(
            "{} {}",
            amount.to_string_with_separator(self.decimal_separator),
            self.symbol
        )
    }
}

// =============================================================================
// Denomination Settings
// =============================================================================

/// The banknotes and coins, largest first. `None` means the euro set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete till configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TillConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub denominations: DenominationSettings,
}

impl TillConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: an explicit `config_path` must exist, the platform
    ///    default may be absent
    /// 3. Environment variables
    ///
    /// Call [`TillConfig::validate`] on the result before use.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                other => {
                    debug!(path = ?other, "No config file, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading till config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `TILL_*` overrides from `lookup` (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(list) = lookup("TILL_DENOMINATIONS") {
            debug!(denominations = %list, "Overriding denominations from environment");
            // ';' lets the list use ',' as decimal separator
            let delimiter = if list.contains(';') { ';' } else { ',' };
            self.denominations.values = Some(
                list.split(delimiter)
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect(),
            );
        }

        if let Some(separator) = lookup("TILL_DECIMAL_SEPARATOR") {
            let mut chars = separator.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => self.currency.decimal_separator = c,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "TILL_DECIMAL_SEPARATOR".to_string(),
                        reason: format!("expected a single character, got '{}'", separator),
                    })
                }
            }
        }

        if let Some(symbol) = lookup("TILL_CURRENCY_SYMBOL") {
            self.currency.symbol = symbol;
        }

        Ok(())
    }

    /// Validates the configuration and builds the denomination set.
    pub fn validate(&self) -> ConfigResult<DenominationSet> {
        if !matches!(self.currency.decimal_separator, ',' | '.') {
            return Err(ConfigError::InvalidValue {
                key: "currency.decimal_separator".to_string(),
                reason: "must be ',' or '.'".to_string(),
            });
        }

        self.denomination_set()
    }

    fn denomination_set(&self) -> ConfigResult<DenominationSet> {
        let Some(values) = &self.denominations.values else {
            return Ok(DenominationSet::euro());
        };

        let amounts = values
            .iter()
            .map(|value| {
                parse_amount(value).map_err(|source| ConfigError::Amount {
                    value: value.clone(),
                    source,
                })
            })
            .collect::<ConfigResult<Vec<Amount>>>()?;

        Ok(DenominationSet::new(amounts)?)
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "till", "till")
            .map(|dirs| dirs.config_dir().join("till.toml"))
    }
}
