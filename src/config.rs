//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::finance::{self, CostInputs, Evaluation, LoanInputs};

/// Discount and interest rate range accepted by the calculator.
pub const RATE_RANGE: RangeInclusive<f64> = 0.0..=0.2;
/// Loan term range in years.
pub const TERM_RANGE: RangeInclusive<u32> = 1..=10;
/// Grace period range in years.
pub const GRACE_RANGE: RangeInclusive<u32> = 0..=5;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Farm cost, yield, and pricing parameters.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Loan terms.
    #[serde(default)]
    pub loan: LoanConfig,
}

/// Farm cost, yield, and pricing parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Capital expenditure ($).
    pub capex: f64,
    /// Annual operating cost ($/year).
    pub opex: f64,
    /// Selling price ($/kg).
    pub price_per_kg: f64,
    /// Annual yield (kg/year, must be > 0).
    pub yield_annual_kg: f64,
    /// Discount rate as a fraction (0.0–0.2).
    pub discount_rate: f64,
    /// Levelized-cost horizon in years (must be > 0).
    pub horizon_years: u32,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let cost = CostInputs::default();
        Self {
            capex: cost.capex,
            opex: cost.opex,
            price_per_kg: 4.99,
            yield_annual_kg: cost.yield_annual,
            discount_rate: cost.discount_rate,
            horizon_years: cost.horizon_years,
        }
    }
}

/// Loan terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoanConfig {
    /// Borrowed amount ($).
    pub amount: f64,
    /// Interest rate as a fraction (0.0–0.2).
    pub interest_rate: f64,
    /// Loan term in years (1–10).
    pub term_years: u32,
    /// Grace period in years (0–5, must be < `term_years`).
    pub grace_years: u32,
    /// Escalating (stepwise) repayment instead of flat installments.
    pub stepwise: bool,
}

impl Default for LoanConfig {
    fn default() -> Self {
        let loan = LoanInputs::default();
        Self {
            amount: loan.principal,
            interest_rate: loan.rate,
            term_years: loan.term_years,
            grace_years: loan.grace_years,
            stepwise: loan.stepwise,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"loan.grace_years"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::baseline()
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario.
    pub fn baseline() -> Self {
        Self {
            project: ProjectConfig::default(),
            loan: LoanConfig::default(),
        }
    }

    /// Returns the grace-period preset: two repayment-free years up front.
    pub fn grace_period() -> Self {
        Self {
            project: ProjectConfig::default(),
            loan: LoanConfig {
                grace_years: 2,
                ..LoanConfig::default()
            },
        }
    }

    /// Returns the stepwise preset: longer loan with escalating installments.
    pub fn stepwise() -> Self {
        Self {
            project: ProjectConfig::default(),
            loan: LoanConfig {
                interest_rate: 0.08,
                term_years: 8,
                grace_years: 1,
                stepwise: true,
                ..LoanConfig::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "grace_period", "stepwise"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "grace_period" => Ok(Self::grace_period()),
            "stepwise" => Ok(Self::stepwise()),
            _ => Err(ConfigError::new(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::new("scenario", format!("cannot read \"{}\": {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::new("toml", e.to_string()))
    }

    /// Cost-side inputs for the financial core.
    pub fn cost_inputs(&self) -> CostInputs {
        let p = &self.project;
        CostInputs {
            capex: p.capex,
            opex: p.opex,
            yield_annual: p.yield_annual_kg,
            discount_rate: p.discount_rate,
            horizon_years: p.horizon_years,
        }
    }

    /// Loan inputs for the financial core.
    pub fn loan_inputs(&self) -> LoanInputs {
        let l = &self.loan;
        LoanInputs {
            principal: l.amount,
            rate: l.interest_rate,
            term_years: l.term_years,
            grace_years: l.grace_years,
            stepwise: l.stepwise,
        }
    }

    /// Runs the financial core on this scenario.
    ///
    /// # Errors
    ///
    /// Returns the [`finance::FinanceError`] of the first failing computation.
    pub fn evaluate(&self) -> finance::Result<Evaluation> {
        finance::evaluate(
            &self.cost_inputs(),
            self.project.price_per_kg,
            &self.loan_inputs(),
        )
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let p = &self.project;

        check_non_negative(&mut errors, "project.capex", p.capex);
        if p.capex == 0.0 {
            errors.push(ConfigError::new(
                "project.capex",
                "must be > 0 to compute ROI",
            ));
        }
        check_non_negative(&mut errors, "project.opex", p.opex);
        check_non_negative(&mut errors, "project.price_per_kg", p.price_per_kg);
        if !(p.yield_annual_kg.is_finite() && p.yield_annual_kg > 0.0) {
            errors.push(ConfigError::new("project.yield_annual_kg", "must be > 0"));
        }
        check_rate(&mut errors, "project.discount_rate", p.discount_rate);
        if p.horizon_years == 0 {
            errors.push(ConfigError::new("project.horizon_years", "must be > 0"));
        }

        let l = &self.loan;
        check_non_negative(&mut errors, "loan.amount", l.amount);
        check_rate(&mut errors, "loan.interest_rate", l.interest_rate);
        if !TERM_RANGE.contains(&l.term_years) {
            errors.push(ConfigError::new(
                "loan.term_years",
                format!(
                    "must be in [{}, {}], got {}",
                    TERM_RANGE.start(),
                    TERM_RANGE.end(),
                    l.term_years
                ),
            ));
        }
        if !GRACE_RANGE.contains(&l.grace_years) {
            errors.push(ConfigError::new(
                "loan.grace_years",
                format!(
                    "must be in [{}, {}], got {}",
                    GRACE_RANGE.start(),
                    GRACE_RANGE.end(),
                    l.grace_years
                ),
            ));
        }
        if l.grace_years >= l.term_years {
            errors.push(ConfigError::new(
                "loan.grace_years",
                "must be < loan.term_years",
            ));
        }

        errors
    }
}

fn check_non_negative(errors: &mut Vec<ConfigError>, field: &str, value: f64) {
    if !(value.is_finite() && value >= 0.0) {
        errors.push(ConfigError::new(field, "must be a finite value >= 0"));
    }
}

fn check_rate(errors: &mut Vec<ConfigError>, field: &str, value: f64) {
    if !RATE_RANGE.contains(&value) {
        errors.push(ConfigError::new(
            field,
            format!(
                "must be in [{}, {}], got {value}",
                RATE_RANGE.start(),
                RATE_RANGE.end()
            ),
        ));
    }
}
