//! Levelized cost, ROI, and loan repayment calculator for vertical farming.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
pub mod finance;
pub mod io;
pub mod report;
#[cfg(feature = "tui")]
pub mod tui;
