//! Financial core: levelized cost, loan repayment, and the derived summary.

pub mod error;
pub mod levelized;
pub mod loan;
pub mod summary;
pub mod types;

pub use error::{FinanceError, Result};
pub use levelized::levelized_cost;
pub use loan::{Repayment, RepaymentSchedule, loan_schedule};
pub use summary::{Evaluation, FinancialSummary, annual_revenue, evaluate, roi};
pub use types::{CostInputs, LoanInputs};
