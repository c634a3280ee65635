//! Error types for the Court Order Interest Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during interest calculation.

use thiserror::Error;

/// The main error type for the Court Order Interest Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// Expected user-input edge cases (an inverted date range, a non-positive
/// principal) are NOT errors: they yield an empty, zero-total result so a UI
/// can keep rendering during incremental input. Errors are reserved for data
/// problems the caller must surface, such as a jurisdiction with no rate
/// periods at all.
///
/// # Example
///
/// ```
/// use coi_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
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

    /// Jurisdiction code was not found in the loaded configuration.
    #[error("Jurisdiction not found: {code}")]
    JurisdictionNotFound {
        /// The jurisdiction code that was not found.
        code: String,
    },

    /// The rate table for a jurisdiction contains no rate periods.
    ///
    /// This is the one condition the engine must not silently zero out:
    /// it indicates a data problem rather than a user-input edge case.
    #[error("Interest rates unavailable for jurisdiction '{jurisdiction}'")]
    RatesUnavailable {
        /// The jurisdiction whose rate table is empty.
        jurisdiction: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
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
    fn test_jurisdiction_not_found_displays_code() {
        let error = EngineError::JurisdictionNotFound {
            code: "YT".to_string(),
        };
        assert_eq!(error.to_string(), "Jurisdiction not found: YT");
    }

    #[test]
    fn test_rates_unavailable_displays_jurisdiction() {
        let error = EngineError::RatesUnavailable {
            jurisdiction: "BC".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Interest rates unavailable for jurisdiction 'BC'"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative day count".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: negative day count");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_rates_unavailable() -> EngineResult<()> {
            Err(EngineError::RatesUnavailable {
                jurisdiction: "BC".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_rates_unavailable()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
