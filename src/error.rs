//! Error types for the Timecard Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing shifts,
//! loading configuration, and importing or exporting ledgers.

use thiserror::Error;

/// The main error type for the Timecard Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently from the shell.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:00 PM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format: '25:00 PM' (expected HH:MM AM/PM)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock-in or clock-out value did not match `HH:MM AM/PM`.
    #[error("Invalid time format: '{value}' (expected HH:MM AM/PM)")]
    InvalidTimeFormat {
        /// The value that failed to parse.
        value: String,
    },

    /// A date value did not match `YYYY-MM-DD`.
    #[error("Invalid date format: '{value}' (expected YYYY-MM-DD)")]
    InvalidDateFormat {
        /// The value that failed to parse.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The overtime policy contained values the calculator cannot use.
    #[error("Invalid overtime policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// A timecard file could not be read.
    #[error("Import failed: {message}")]
    Import {
        /// A description of the import failure.
        message: String,
    },

    /// A timecard file could not be written.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the export failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_time_format_displays_value() {
        let error = EngineError::InvalidTimeFormat {
            value: "8:3O AM".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time format: '8:3O AM' (expected HH:MM AM/PM)"
        );
    }

    #[test]
    fn test_invalid_date_format_displays_value() {
        let error = EngineError::InvalidDateFormat {
            value: "15/01/2026".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date format: '15/01/2026' (expected YYYY-MM-DD)"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/timecard.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/timecard.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_policy_displays_message() {
        let error = EngineError::InvalidPolicy {
            message: "rounding increment must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid overtime policy: rounding increment must be positive"
        );
    }

    #[test]
    fn test_import_and_export_display_message() {
        let import = EngineError::Import {
            message: "missing column 'Date'".to_string(),
        };
        let export = EngineError::Export {
            message: "disk full".to_string(),
        };
        assert_eq!(import.to_string(), "Import failed: missing column 'Date'");
        assert_eq!(export.to_string(), "Export failed: disk full");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_time() -> EngineResult<()> {
            Err(EngineError::InvalidTimeFormat {
                value: "noon".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_time()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
