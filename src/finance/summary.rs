//! Derived financial summary and single-scenario evaluation.

use serde::Serialize;

use super::error::{FinanceError, Result, ensure_non_negative, ensure_representable};
use super::loan::RepaymentSchedule;
use super::types::{CostInputs, LoanInputs};

/// Headline figures of one scenario, recomputed on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FinancialSummary {
    /// Levelized cost per kg.
    pub levelized_cost: f64,
    /// Yield times price.
    pub annual_revenue: f64,
    /// `(annual_revenue - opex) / capex` as a fraction.
    pub roi: f64,
    /// Sum of the repayment schedule.
    pub total_repayment: f64,
}

/// Summary together with the schedule it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub summary: FinancialSummary,
    pub schedule: RepaymentSchedule,
}

/// Annual revenue: `yield_annual * price_per_kg`.
///
/// # Errors
///
/// Returns [`FinanceError::InvalidInput`] for a negative or non-finite input,
/// or when the product overflows.
pub fn annual_revenue(yield_annual: f64, price_per_kg: f64) -> Result<f64> {
    ensure_non_negative("yield_annual", yield_annual)?;
    ensure_non_negative("price_per_kg", price_per_kg)?;
    let revenue = yield_annual * price_per_kg;
    ensure_representable("price_per_kg", "annual revenue", revenue)?;
    Ok(revenue)
}

/// Simple annual return on investment: `(revenue - opex) / capex`.
///
/// # Errors
///
/// Returns [`FinanceError::DivisionByZero`] when `capex` is zero and
/// [`FinanceError::InvalidInput`] for a negative or non-finite input.
pub fn roi(annual_revenue: f64, opex: f64, capex: f64) -> Result<f64> {
    ensure_non_negative("annual_revenue", annual_revenue)?;
    ensure_non_negative("opex", opex)?;
    ensure_non_negative("capex", capex)?;
    if capex == 0.0 {
        return Err(FinanceError::DivisionByZero { quantity: "capex" });
    }
    let roi = (annual_revenue - opex) / capex;
    ensure_representable("capex", "roi", roi)?;
    Ok(roi)
}

/// Evaluates a full scenario: levelized cost, schedule, revenue, and ROI.
///
/// # Arguments
///
/// * `cost` - Cost side of the business case
/// * `price_per_kg` - Selling price per kg (>= 0)
/// * `loan` - Loan terms
///
/// # Errors
///
/// Returns the first [`FinanceError`] raised by any of the underlying
/// functions; no partial result is produced.
pub fn evaluate(cost: &CostInputs, price_per_kg: f64, loan: &LoanInputs) -> Result<Evaluation> {
    let levelized_cost = cost.levelized_cost()?;
    let schedule = loan.schedule()?;
    let annual_revenue = annual_revenue(cost.yield_annual, price_per_kg)?;
    let roi = roi(annual_revenue, cost.opex, cost.capex)?;

    Ok(Evaluation {
        summary: FinancialSummary {
            levelized_cost,
            annual_revenue,
            roi,
            total_repayment: schedule.total(),
        },
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_evaluation() {
        let eval = evaluate(&CostInputs::default(), 4.99, &LoanInputs::default())
            .expect("baseline should evaluate");

        let s = eval.summary;
        assert!((s.levelized_cost - 25.365_182_5).abs() < 1e-6);
        assert!((s.annual_revenue - 34_930.0).abs() < 1e-6);
        // (34930 - 80000) / 400000
        assert!((s.roi - -0.112_675).abs() < 1e-9);
        assert_eq!(s.total_repayment, 375_000.0);
        assert_eq!(eval.schedule.len(), 5);
    }

    #[test]
    fn roi_zero_capex_is_division_by_zero() {
        assert_eq!(
            roi(10.0, 5.0, 0.0),
            Err(FinanceError::DivisionByZero { quantity: "capex" })
        );
    }

    #[test]
    fn roi_positive_margin() {
        let r = roi(150.0, 50.0, 1_000.0).expect("valid inputs");
        assert!((r - 0.1).abs() < 1e-12);
    }

    #[test]
    fn negative_price_is_invalid() {
        assert!(matches!(
            annual_revenue(7_000.0, -1.0),
            Err(FinanceError::InvalidInput {
                field: "price_per_kg",
                ..
            })
        ));
    }

    #[test]
    fn evaluation_surfaces_loan_errors() {
        let loan = LoanInputs {
            grace_years: 5,
            ..LoanInputs::default()
        };
        let err = evaluate(&CostInputs::default(), 4.99, &loan);
        assert!(matches!(
            err,
            Err(FinanceError::InvalidInput { field: "grace", .. })
        ));
    }

    #[test]
    fn revenue_overflow_is_rejected() {
        assert!(matches!(
            annual_revenue(1e200, 1e200),
            Err(FinanceError::InvalidInput {
                field: "price_per_kg",
                ..
            })
        ));
    }

    #[test]
    fn evaluation_rejects_overflowing_loan() {
        let loan = LoanInputs {
            principal: 1e308,
            rate: 0.2,
            ..LoanInputs::default()
        };
        let err = evaluate(&CostInputs::default(), 4.99, &loan);
        assert!(matches!(
            err,
            Err(FinanceError::InvalidInput {
                field: "principal",
                ..
            })
        ));
    }

    #[test]
    fn evaluation_surfaces_zero_capex() {
        let cost = CostInputs {
            capex: 0.0,
            ..CostInputs::default()
        };
        let err = evaluate(&cost, 4.99, &LoanInputs::default());
        assert_eq!(
            err,
            Err(FinanceError::DivisionByZero { quantity: "capex" })
        );
    }
}
