//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading timecard
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::OvertimePolicy;
use crate::error::{EngineError, EngineResult};
use crate::holidays::HolidayRegistry;
use crate::ledger::LedgerAggregator;

use super::types::TimecardConfig;

/// Loads and provides access to timecard configuration.
///
/// # Example
///
/// ```no_run
/// use timecard_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./timecard.yaml").unwrap();
/// let ledger = loader.ledger();
/// println!("{} holidays registered", ledger.holidays().len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: TimecardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing ([`EngineError::ConfigNotFound`])
    /// - The file is not valid YAML for [`TimecardConfig`]
    ///   ([`EngineError::ConfigParseError`])
    /// - The policy values are unusable ([`EngineError::InvalidPolicy`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(
            path = %path_str,
            holidays = loader.config.holidays.len(),
            "Loaded timecard configuration"
        );
        Ok(loader)
    }

    /// Parses configuration from YAML text.
    ///
    /// ```
    /// use timecard_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str(
    ///     "policy:\n  standard_day_minutes: 450\nholidays:\n  - date: 2026-12-25\n",
    /// )
    /// .unwrap();
    /// assert_eq!(loader.policy().standard_day_minutes, 450);
    /// assert_eq!(loader.policy().rounding_increment_minutes, 15);
    /// assert_eq!(loader.holiday_registry().len(), 1);
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        // An empty document deserializes as null rather than an empty map
        let config: TimecardConfig = if content.trim().is_empty() {
            TimecardConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        config.policy.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &TimecardConfig {
        &self.config
    }

    /// Returns the configured overtime policy.
    pub fn policy(&self) -> &OvertimePolicy {
        &self.config.policy
    }

    /// Builds a holiday registry from the configured holidays.
    pub fn holiday_registry(&self) -> HolidayRegistry {
        self.config.holiday_registry()
    }

    /// Creates an empty ledger using the configured policy and holidays.
    pub fn ledger(&self) -> LedgerAggregator {
        LedgerAggregator::new(self.config.policy).with_holidays(self.holiday_registry())
    }
}
