//! File export of evaluation results.

pub mod export;
