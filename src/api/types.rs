//! API response and query types.

use serde::{Deserialize, Serialize};

use crate::config::ScenarioConfig;
use crate::finance::FinancialSummary;

/// Scenario inputs together with their financial summary.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Inputs the summary was computed from.
    pub inputs: ScenarioConfig,
    /// Headline figures.
    pub summary: FinancialSummary,
}

/// Optional year range for the schedule endpoint.
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    /// First loan year (inclusive).
    pub from: Option<u32>,
    /// Last loan year (inclusive).
    pub to: Option<u32>,
}

/// Error response body for 4xx errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Individual validation failures, when there are several.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_omits_empty_details() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json["error"], "boom");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn summary_response_nests_inputs_by_section() {
        let cfg = ScenarioConfig::baseline();
        let summary = cfg.evaluate().expect("baseline should evaluate").summary;
        let json = serde_json::to_value(SummaryResponse {
            inputs: cfg,
            summary,
        })
        .unwrap();
        assert_eq!(json["inputs"]["loan"]["term_years"], 5);
        assert_eq!(json["summary"]["total_repayment"], 375_000.0);
    }
}
