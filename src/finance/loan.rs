//! Annual loan repayment schedule with grace period and stepwise escalation.

use std::fmt;

use serde::Serialize;

use super::error::{FinanceError, Result, ensure_non_negative, ensure_representable};

/// One scheduled repayment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Repayment {
    /// Loan year, starting at 1.
    pub year: u32,
    /// Amount paid in that year.
    pub payment: f64,
}

/// Ordered annual repayments; entry `i` is loan year `i + 1`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct RepaymentSchedule {
    entries: Vec<Repayment>,
}

impl RepaymentSchedule {
    /// Number of years in the schedule (the loan term).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` for an empty schedule.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Payment due in `year` (1-based), if the year is within the term.
    pub fn payment(&self, year: u32) -> Option<f64> {
        let idx = usize::try_from(year.checked_sub(1)?).ok()?;
        self.entries.get(idx).map(|r| r.payment)
    }

    /// Payments in year order.
    pub fn payments(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|r| r.payment)
    }

    /// Repayments in year order.
    pub fn iter(&self) -> std::slice::Iter<'_, Repayment> {
        self.entries.iter()
    }

    /// Repayments as a slice.
    pub fn as_slice(&self) -> &[Repayment] {
        &self.entries
    }

    /// Sum of all payments.
    pub fn total(&self) -> f64 {
        self.payments().sum()
    }
}

impl<'a> IntoIterator for &'a RepaymentSchedule {
    type Item = &'a Repayment;
    type IntoIter = std::slice::Iter<'a, Repayment>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for RepaymentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Loan Repayment Schedule ---")?;
        write!(f, "Year  Annual payment")?;
        for r in &self.entries {
            write!(f, "\n{:>4}  {:>14.2}", r.year, r.payment)?;
        }
        Ok(())
    }
}

/// Builds the annual repayment schedule of a loan.
///
/// Years `1..=grace` pay nothing. The remaining `n = term - grace` years pay
/// either a flat installment
///
/// ```text
/// principal * (1 + rate * n) / n
/// ```
///
/// or, when `stepwise` is set, an installment that escalates linearly with
/// the progress `p = (year - grace) / n` through the repayment window:
///
/// ```text
/// (principal / n) * (1 + p * rate)
/// ```
///
/// # Errors
///
/// Returns [`FinanceError::InvalidInput`] if `term` is zero, `grace >= term`,
/// `principal`/`rate` is negative or non-finite, or an installment or the
/// total repayment overflows.
///
/// # Examples
///
/// ```
/// use vfarm_calc::finance::loan_schedule;
///
/// let s = loan_schedule(300_000.0, 0.05, 5, 2, false).unwrap();
/// assert_eq!(s.payment(1), Some(0.0));
/// assert_eq!(s.payment(3), Some(115_000.0));
/// assert_eq!(s.total(), 345_000.0);
/// ```
pub fn loan_schedule(
    principal: f64,
    rate: f64,
    term: u32,
    grace: u32,
    stepwise: bool,
) -> Result<RepaymentSchedule> {
    ensure_non_negative("principal", principal)?;
    ensure_non_negative("rate", rate)?;
    if term == 0 {
        return Err(FinanceError::invalid("term", "must be >= 1 year"));
    }
    if grace >= term {
        return Err(FinanceError::invalid(
            "grace",
            format!("must be < term ({term}), got {grace}"),
        ));
    }

    let repaying = f64::from(term - grace);
    let flat = principal * (1.0 + rate * repaying) / repaying;
    let base = principal / repaying;

    let entries = (1..=term)
        .map(|year| {
            let payment = if year <= grace {
                0.0
            } else if stepwise {
                let progress = f64::from(year - grace) / repaying;
                base * (1.0 + progress * rate)
            } else {
                flat
            };
            ensure_representable("principal", "installment", payment)?;
            Ok(Repayment { year, payment })
        })
        .collect::<Result<Vec<_>>>()?;

    let schedule = RepaymentSchedule { entries };
    ensure_representable("principal", "total repayment", schedule.total())?;
    Ok(schedule)
}
