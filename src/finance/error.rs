//! Typed failures of the financial functions.

use thiserror::Error;

/// Failure raised by a financial function when its preconditions do not hold.
///
/// Every function in [`crate::finance`] checks its inputs before doing any
/// arithmetic and its results afterwards, so callers never see a NaN or
/// infinite value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// A parameter is out of range or inconsistent with another parameter.
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput {
        /// Name of the offending parameter.
        field: &'static str,
        /// Constraint that was violated.
        reason: String,
    },

    /// A denominator of the computation is zero.
    #[error("division by zero: {quantity} is zero")]
    DivisionByZero {
        /// Quantity that ended up in the denominator.
        quantity: &'static str,
    },
}

impl FinanceError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Rejects NaN and infinite values.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FinanceError::invalid(field, format!("must be finite, got {value}")))
    }
}

/// Rejects negative (and non-finite) values.
pub(crate) fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(FinanceError::invalid(
            field,
            format!("must be >= 0, got {value}"),
        ));
    }
    Ok(())
}

/// Rejects a NaN or infinite computed value, blaming the input `field`.
pub(crate) fn ensure_representable(field: &'static str, what: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FinanceError::invalid(
            field,
            format!("{what} is not representable as a finite number ({value})"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field_and_reason() {
        let e = FinanceError::invalid("rate", "must be >= 0, got -1");
        assert_eq!(e.to_string(), "invalid input `rate`: must be >= 0, got -1");

        let e = FinanceError::DivisionByZero { quantity: "capex" };
        assert_eq!(e.to_string(), "division by zero: capex is zero");
    }

    #[test]
    fn non_negative_rejects_nan_and_negatives() {
        assert!(ensure_non_negative("x", 0.0).is_ok());
        assert!(ensure_non_negative("x", -0.01).is_err());
        assert!(ensure_non_negative("x", f64::NAN).is_err());
        assert!(ensure_non_negative("x", f64::INFINITY).is_err());
    }

    #[test]
    fn representable_rejects_overflow() {
        assert!(ensure_representable("x", "sum", 1e308).is_ok());
        let err = ensure_representable("principal", "payment", f64::INFINITY);
        assert!(matches!(
            err,
            Err(FinanceError::InvalidInput {
                field: "principal",
                ..
            })
        ));
        assert!(ensure_representable("x", "ratio", f64::NAN).is_err());
    }
}
