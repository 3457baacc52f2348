//! Error types for the pay stub calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while scheduling pay periods,
//! computing taxes and resolving line items.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the pay stub calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paystub_engine::error::EngineError;
///
/// let error = EngineError::UnknownJurisdiction {
///     state: "ZZ".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown jurisdiction: state 'ZZ'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The generation range ends before it starts or spans too many periods.
    #[error("Invalid date range {start} to {end}: {message}")]
    InvalidRange {
        /// The requested first day of the range.
        start: NaiveDate,
        /// The requested last day of the range.
        end: NaiveDate,
        /// Why the range was rejected.
        message: String,
    },

    /// A required setting was missing or held an unusable value.
    #[error("Invalid configuration for '{field}': {message}")]
    InvalidConfiguration {
        /// The request field at fault.
        field: String,
        /// A description of what was wrong.
        message: String,
    },

    /// The state code could not be resolved by the tax tables.
    #[error("Unknown jurisdiction: state '{state}'")]
    UnknownJurisdiction {
        /// The unresolved state code.
        state: String,
    },

    /// A deduction, contribution or benefit could not be interpreted.
    #[error("Malformed line item '{name}': {message}")]
    MalformedLineItem {
        /// The display name of the offending item.
        name: String,
        /// A description of what made the item malformed.
        message: String,
    },

    /// Tax table file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Tax table file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    pub(crate) fn invalid_configuration(
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        EngineError::InvalidConfiguration {
            field: field.into(),
            message: message.into(),
        }
    }

    /// An input-derived amount that does not fit in a `Decimal`.
    pub(crate) fn too_large(quantity: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            field: quantity.into(),
            message: "is too large to compute".to_string(),
        }
    }

    pub(crate) fn malformed_line_item(name: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::MalformedLineItem {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_displays_both_dates() {
        let error = EngineError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            message: "end is before start".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range 2025-02-01 to 2025-01-01: end is before start"
        );
    }

    #[test]
    fn test_too_large_names_the_quantity() {
        let error = EngineError::too_large("gross_pay");
        assert_eq!(
            error.to_string(),
            "Invalid configuration for 'gross_pay': is too large to compute"
        );
    }

    #[test]
    fn test_invalid_configuration_displays_field_and_message() {
        let error = EngineError::invalid_configuration("pay_frequency", "is required");
        assert_eq!(
            error.to_string(),
            "Invalid configuration for 'pay_frequency': is required"
        );
    }

    #[test]
    fn test_unknown_jurisdiction_displays_state() {
        let error = EngineError::UnknownJurisdiction {
            state: "XX".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown jurisdiction: state 'XX'");
    }

    #[test]
    fn test_malformed_line_item_displays_name_and_message() {
        let error = EngineError::malformed_line_item("Gym", "unknown deduction type 'gym'");
        assert_eq!(
            error.to_string(),
            "Malformed line item 'Gym': unknown deduction type 'gym'"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/federal.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/federal.yaml"
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
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_state() -> EngineResult<()> {
            Err(EngineError::UnknownJurisdiction {
                state: "XX".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_state()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
