//! Command-line arguments for the `vfarm-calc` binary.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::config::{ConfigError, ScenarioConfig};

/// Vertical farm levelized cost, ROI, and loan repayment calculator.
#[derive(Debug, Parser)]
#[command(name = "vfarm-calc", version)]
#[command(group(ArgGroup::new("source").args(["scenario", "preset"])))]
pub struct CliOptions {
    /// Load scenario from TOML config file
    #[arg(long, value_name = "PATH")]
    pub scenario: Option<PathBuf>,

    /// Use a built-in preset (baseline, grace_period, stepwise)
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Override capital expenditure ($)
    #[arg(long)]
    pub capex: Option<f64>,

    /// Override annual operating cost ($)
    #[arg(long)]
    pub opex: Option<f64>,

    /// Override price per kg ($)
    #[arg(long)]
    pub price: Option<f64>,

    /// Override annual yield (kg)
    #[arg(long = "yield-kg")]
    pub yield_kg: Option<f64>,

    /// Override discount rate (fraction, 0.0-0.2)
    #[arg(long)]
    pub discount_rate: Option<f64>,

    /// Override levelized-cost horizon (years)
    #[arg(long)]
    pub horizon: Option<u32>,

    /// Override loan amount ($)
    #[arg(long)]
    pub loan_amount: Option<f64>,

    /// Override interest rate (fraction, 0.0-0.2)
    #[arg(long)]
    pub interest_rate: Option<f64>,

    /// Override loan term (years, 1-10)
    #[arg(long)]
    pub term: Option<u32>,

    /// Override grace period (years, 0-5)
    #[arg(long)]
    pub grace: Option<u32>,

    /// Use stepwise (escalating) repayment; `--stepwise false` forces flat
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub stepwise: Option<bool>,

    /// Export the repayment schedule to CSV
    #[arg(long, value_name = "PATH")]
    pub schedule_out: Option<PathBuf>,

    /// Launch the interactive terminal UI
    #[cfg(feature = "tui")]
    #[arg(long)]
    pub tui: bool,

    /// Start REST API server after evaluation
    #[cfg(feature = "api")]
    #[arg(long)]
    pub serve: bool,

    /// API server port
    #[cfg(feature = "api")]
    #[arg(long, default_value_t = 3000)]
    pub port: u16,
}

impl CliOptions {
    /// Name of the preset to start from when no scenario file is given.
    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or("baseline")
    }

    /// Label for where the scenario came from: the file path or preset name.
    pub fn source_label(&self) -> String {
        match &self.scenario {
            Some(path) => path.display().to_string(),
            None => self.preset_name().to_string(),
        }
    }

    /// Loads the selected scenario and applies command-line overrides.
    ///
    /// `--scenario` takes priority, then `--preset`, then the baseline.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file or preset cannot be loaded.
    pub fn load_scenario(&self) -> Result<ScenarioConfig, ConfigError> {
        let mut scenario = match &self.scenario {
            Some(path) => ScenarioConfig::from_toml_file(path)?,
            None => ScenarioConfig::from_preset(self.preset_name())?,
        };
        self.apply_overrides(&mut scenario);
        Ok(scenario)
    }

    fn apply_overrides(&self, cfg: &mut ScenarioConfig) {
        let p = &mut cfg.project;
        override_with(&mut p.capex, self.capex);
        override_with(&mut p.opex, self.opex);
        override_with(&mut p.price_per_kg, self.price);
        override_with(&mut p.yield_annual_kg, self.yield_kg);
        override_with(&mut p.discount_rate, self.discount_rate);
        override_with(&mut p.horizon_years, self.horizon);

        let l = &mut cfg.loan;
        override_with(&mut l.amount, self.loan_amount);
        override_with(&mut l.interest_rate, self.interest_rate);
        override_with(&mut l.term_years, self.term);
        override_with(&mut l.grace_years, self.grace);
        override_with(&mut l.stepwise, self.stepwise);
    }
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions, clap::Error> {
        CliOptions::try_parse_from(std::iter::once("vfarm-calc").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_baseline() {
        let opts = parse(&[]).expect("parse should succeed");
        assert_eq!(opts.preset_name(), "baseline");
        let cfg = opts.load_scenario().expect("baseline should load");
        assert_eq!(cfg, ScenarioConfig::baseline());
    }

    #[test]
    fn supports_preset_cli() {
        let opts = parse(&["--preset", "stepwise"]).expect("parse should succeed");
        assert_eq!(opts.preset.as_deref(), Some("stepwise"));
        assert!(opts.scenario.is_none());
        let cfg = opts.load_scenario().expect("preset should load");
        assert!(cfg.loan.stepwise);
    }

    #[test]
    fn scenario_and_preset_are_mutually_exclusive() {
        let err = parse(&["--scenario", "a.toml", "--preset", "baseline"]);
        assert!(err.is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let opts = parse(&[
            "--preset",
            "grace_period",
            "--capex",
            "500000",
            "--term",
            "7",
            "--interest-rate",
            "0.1",
            "--stepwise",
        ])
        .expect("parse should succeed");
        let cfg = opts.load_scenario().expect("preset should load");
        assert_eq!(cfg.project.capex, 500_000.0);
        assert_eq!(cfg.loan.term_years, 7);
        assert_eq!(cfg.loan.grace_years, 2);
        assert_eq!(cfg.loan.interest_rate, 0.1);
        assert!(cfg.loan.stepwise);
    }

    #[test]
    fn stepwise_preset_can_be_forced_flat() {
        let opts = parse(&["--preset", "stepwise", "--stepwise", "false"])
            .expect("parse should succeed");
        assert_eq!(opts.stepwise, Some(false));
        let cfg = opts.load_scenario().expect("preset should load");
        assert!(!cfg.loan.stepwise);
        assert_eq!(cfg.loan.term_years, 8);
    }

    #[test]
    fn stepwise_flag_is_left_alone_when_absent() {
        let opts = parse(&["--preset", "stepwise"]).expect("parse should succeed");
        assert_eq!(opts.stepwise, None);
        let opts = parse(&["--stepwise", "--term", "4"]).expect("parse should succeed");
        assert_eq!(opts.stepwise, Some(true));
        assert_eq!(opts.term, Some(4));
    }

    #[test]
    fn unknown_preset_is_a_config_error() {
        let opts = parse(&["--preset", "bogus"]).expect("parse should succeed");
        let err = opts.load_scenario();
        assert!(err.is_err_and(|e| e.field == "preset"));
    }

    #[test]
    fn source_label_prefers_scenario_path() {
        let opts = parse(&["--scenario", "farm.toml"]).expect("parse should succeed");
        assert_eq!(opts.source_label(), "farm.toml");
        let opts = parse(&["--preset", "stepwise"]).expect("parse should succeed");
        assert_eq!(opts.source_label(), "stepwise");
    }

    #[test]
    fn rejects_unknown_argument() {
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn schedule_out_path() {
        let opts = parse(&["--schedule-out", "schedule.csv"]).expect("parse should succeed");
        assert_eq!(
            opts.schedule_out.as_deref().and_then(|p| p.to_str()),
            Some("schedule.csv")
        );
    }
}
