//! Input value sets for the financial functions.

use serde::Serialize;

use super::error::Result;
use super::levelized::levelized_cost;
use super::loan::{RepaymentSchedule, loan_schedule};

/// Default levelized-cost horizon in years.
pub const DEFAULT_HORIZON_YEARS: u32 = 5;

/// Cost side of the business case.
///
/// # Examples
///
/// ```
/// use vfarm_calc::finance::CostInputs;
///
/// let lc = CostInputs::default().levelized_cost().unwrap();
/// assert!((lc - 25.365).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostInputs {
    /// One-time capital expenditure.
    pub capex: f64,
    /// Recurring operating expenditure per year.
    pub opex: f64,
    /// Annual yield (kg/year, must be > 0).
    pub yield_annual: f64,
    /// Discount rate as a fraction.
    pub discount_rate: f64,
    /// Discounting horizon in whole years (must be > 0).
    pub horizon_years: u32,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            capex: 400_000.0,
            opex: 80_000.0,
            yield_annual: 7_000.0,
            discount_rate: 0.07,
            horizon_years: DEFAULT_HORIZON_YEARS,
        }
    }
}

impl CostInputs {
    /// Levelized cost per kg for these inputs. See [`levelized_cost`].
    ///
    /// # Errors
    ///
    /// Propagates the precondition failures of [`levelized_cost`].
    pub fn levelized_cost(&self) -> Result<f64> {
        levelized_cost(
            self.capex,
            self.opex,
            self.yield_annual,
            self.discount_rate,
            self.horizon_years,
        )
    }
}

/// Loan terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanInputs {
    /// Borrowed amount.
    pub principal: f64,
    /// Interest rate as a fraction.
    pub rate: f64,
    /// Loan term in years (>= 1).
    pub term_years: u32,
    /// Leading years without repayment (< `term_years`).
    pub grace_years: u32,
    /// Escalating installments instead of a flat one.
    pub stepwise: bool,
}

impl Default for LoanInputs {
    fn default() -> Self {
        Self {
            principal: 300_000.0,
            rate: 0.05,
            term_years: 5,
            grace_years: 0,
            stepwise: false,
        }
    }
}

impl LoanInputs {
    /// Repayment schedule for these terms. See [`loan_schedule`].
    ///
    /// # Errors
    ///
    /// Propagates the precondition failures of [`loan_schedule`].
    pub fn schedule(&self) -> Result<RepaymentSchedule> {
        loan_schedule(
            self.principal,
            self.rate,
            self.term_years,
            self.grace_years,
            self.stepwise,
        )
    }
}
