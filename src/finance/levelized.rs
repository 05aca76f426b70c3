//! Discounted-cash-flow levelized cost of production.

use super::error::{
    FinanceError, Result, ensure_finite, ensure_non_negative, ensure_representable,
};

/// Computes the levelized cost per kg over a horizon of `horizon` years.
///
/// Opex and yield are both discounted with `1 / (1 + r)^(k + 1)` for
/// `k = 0..horizon`; capex is spent up front and is not discounted.
///
/// ```text
/// LC = (capex + Σ opex·d_k) / Σ yield·d_k
/// ```
///
/// # Arguments
///
/// * `capex` - Capital expenditure (>= 0)
/// * `opex` - Annual operating expenditure (>= 0)
/// * `yield_kg` - Annual yield in kg (> 0)
/// * `r` - Discount rate as a fraction (> -1)
/// * `horizon` - Number of years to discount over (> 0)
///
/// # Errors
///
/// * [`FinanceError::DivisionByZero`] if `yield_kg` is zero.
/// * [`FinanceError::InvalidInput`] if `horizon` is zero, `r <= -1`, any
///   value is negative or non-finite, or the discounted sums overflow.
pub fn levelized_cost(capex: f64, opex: f64, yield_kg: f64, r: f64, horizon: u32) -> Result<f64> {
    ensure_non_negative("capex", capex)?;
    ensure_non_negative("opex", opex)?;
    ensure_non_negative("yield_kg", yield_kg)?;
    if yield_kg == 0.0 {
        return Err(FinanceError::DivisionByZero {
            quantity: "yield_kg",
        });
    }
    ensure_finite("discount_rate", r)?;
    if r <= -1.0 {
        return Err(FinanceError::invalid(
            "discount_rate",
            format!("must be > -1, got {r}"),
        ));
    }
    if horizon == 0 {
        return Err(FinanceError::invalid("horizon", "must be >= 1 year"));
    }

    let annuity = discount_factor_sum(r, horizon);
    ensure_representable("discount_rate", "discount factor sum", annuity)?;
    let discounted_opex = opex * annuity;
    let discounted_yield = yield_kg * annuity;
    if discounted_yield == 0.0 {
        return Err(FinanceError::DivisionByZero {
            quantity: "discounted yield",
        });
    }

    let lc = (capex + discounted_opex) / discounted_yield;
    ensure_representable("capex", "levelized cost", lc)?;
    Ok(lc)
}

/// Sum of `1 / (1 + r)^(k + 1)` for `k = 0..horizon`.
fn discount_factor_sum(r: f64, horizon: u32) -> f64 {
    let growth = 1.0 + r;
    let mut factor = 1.0;
    let mut sum = 0.0;
    for _ in 0..horizon {
        factor /= growth;
        sum += factor;
    }
    sum
}
