//! Error types for ledger editing

use thiserror::Error;

/// Errors raised at the ledger-edit boundary.
///
/// Projection and horizon calculations are infallible; degenerate inputs
/// produce empty or flat results instead of errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// Raw text could not be parsed into an amount the field accepts.
    #[error("Invalid amount {raw:?} for {field}")]
    InvalidAmount {
        /// Field the amount was destined for.
        field: String,
        /// The text as supplied by the caller.
        raw: String,
    },

    /// Year is not a key of the ledger.
    #[error("Year {year} is outside the planning horizon ({})", describe_span(.first, .last))]
    OutOfRangeYear {
        /// The requested year.
        year: i32,
        /// First year in the ledger (None when the ledger is empty).
        first: Option<i32>,
        /// Last year in the ledger.
        last: Option<i32>,
    },

    /// Field name is not one of the eight ledger fields.
    #[error("Unknown ledger field: {name}")]
    UnknownField {
        /// The name as supplied by the caller.
        name: String,
    },
}

fn describe_span(first: &Option<i32>, last: &Option<i32>) -> String {
    match (*first, *last) {
        (Some(first), Some(last)) => format!("{first}..={last}"),
        _ => "empty".to_string(),
    }
}

/// Result alias for ledger operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PlannerError::OutOfRangeYear { year: 2099, first: Some(2026), last: Some(2051) };
        assert_eq!(err.to_string(), "Year 2099 is outside the planning horizon (2026..=2051)");

        let err = PlannerError::InvalidAmount { field: "pension".to_string(), raw: "12x".to_string() };
        assert_eq!(err.to_string(), "Invalid amount \"12x\" for pension");

        let err = PlannerError::UnknownField { name: "bogus".to_string() };
        assert_eq!(err.to_string(), "Unknown ledger field: bogus");
    }
}
