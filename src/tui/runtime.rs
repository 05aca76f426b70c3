//! Calculator inputs and TUI application state.

use crate::config::{GRACE_RANGE, RATE_RANGE, ScenarioConfig, TERM_RANGE};
use crate::finance::{self, Evaluation};

/// Step applied to the discount and interest rate sliders.
const RATE_STEP: f64 = 0.005;

/// An adjustable calculator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Capex,
    Opex,
    PricePerKg,
    YieldAnnual,
    DiscountRate,
    LoanAmount,
    InterestRate,
    LoanTerm,
    GracePeriod,
    Stepwise,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 10] = [
        Field::Capex,
        Field::Opex,
        Field::PricePerKg,
        Field::YieldAnnual,
        Field::DiscountRate,
        Field::LoanAmount,
        Field::InterestRate,
        Field::LoanTerm,
        Field::GracePeriod,
        Field::Stepwise,
    ];

    /// Label shown in the parameter panel.
    pub fn label(self) -> &'static str {
        match self {
            Field::Capex => "CapEx [$]",
            Field::Opex => "OpEx [$/yr]",
            Field::PricePerKg => "Price [$/kg]",
            Field::YieldAnnual => "Yield [kg/yr]",
            Field::DiscountRate => "Discount rate",
            Field::LoanAmount => "Loan [$]",
            Field::InterestRate => "Interest rate",
            Field::LoanTerm => "Term [yr]",
            Field::GracePeriod => "Grace [yr]",
            Field::Stepwise => "Stepwise",
        }
    }

    /// Current value of this field, formatted for display.
    pub fn value_text(self, cfg: &ScenarioConfig) -> String {
        let p = &cfg.project;
        let l = &cfg.loan;
        match self {
            Field::Capex => format!("{:.0}", p.capex),
            Field::Opex => format!("{:.0}", p.opex),
            Field::PricePerKg => format!("{:.2}", p.price_per_kg),
            Field::YieldAnnual => format!("{:.0}", p.yield_annual_kg),
            Field::DiscountRate => format!("{:.1}%", p.discount_rate * 100.0),
            Field::LoanAmount => format!("{:.0}", l.amount),
            Field::InterestRate => format!("{:.1}%", l.interest_rate * 100.0),
            Field::LoanTerm => l.term_years.to_string(),
            Field::GracePeriod => l.grace_years.to_string(),
            Field::Stepwise => String::from(if l.stepwise { "on" } else { "off" }),
        }
    }

    /// Moves this field by `steps` increments, staying inside its range.
    pub fn adjust(self, cfg: &mut ScenarioConfig, steps: i32) {
        let p = &mut cfg.project;
        let l = &mut cfg.loan;
        match self {
            Field::Capex => nudge_amount(&mut p.capex, 10_000.0, steps),
            Field::Opex => nudge_amount(&mut p.opex, 5_000.0, steps),
            Field::PricePerKg => nudge_amount(&mut p.price_per_kg, 0.10, steps),
            Field::YieldAnnual => nudge_amount(&mut p.yield_annual_kg, 500.0, steps),
            Field::DiscountRate => nudge_rate(&mut p.discount_rate, steps),
            Field::LoanAmount => nudge_amount(&mut l.amount, 10_000.0, steps),
            Field::InterestRate => nudge_rate(&mut l.interest_rate, steps),
            Field::LoanTerm => {
                l.term_years =
                    nudge_years(l.term_years, steps, *TERM_RANGE.start(), *TERM_RANGE.end());
            }
            Field::GracePeriod => {
                l.grace_years =
                    nudge_years(l.grace_years, steps, *GRACE_RANGE.start(), *GRACE_RANGE.end());
            }
            Field::Stepwise => l.stepwise = !l.stepwise,
        }
    }
}

fn nudge_amount(value: &mut f64, step: f64, steps: i32) {
    let next = *value + step * f64::from(steps);
    // snap to cents to keep repeated decimal steps from drifting
    *value = (next.max(0.0) * 100.0).round() / 100.0;
}

fn nudge_rate(value: &mut f64, steps: i32) {
    let next = *value + RATE_STEP * f64::from(steps);
    let next = (next * 1_000.0).round() / 1_000.0;
    *value = next.clamp(*RATE_RANGE.start(), *RATE_RANGE.end());
}

fn nudge_years(value: u32, steps: i32, min: u32, max: u32) -> u32 {
    value.saturating_add_signed(steps).clamp(min, max)
}

/// TUI application state.
pub struct App {
    /// Current calculator inputs.
    pub scenario: ScenarioConfig,
    /// Inputs restored by [`App::reset`].
    initial: ScenarioConfig,
    /// Preset name or scenario file the inputs started from.
    pub preset_name: String,
    /// Index into [`Field::ALL`] of the highlighted input.
    pub selected: usize,
    /// Result of the latest recomputation.
    pub evaluation: finance::Result<Evaluation>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates a new app from a scenario.
    pub fn new(scenario: ScenarioConfig, preset_name: &str) -> Self {
        let evaluation = scenario.evaluate();
        Self {
            initial: scenario.clone(),
            scenario,
            preset_name: preset_name.to_string(),
            selected: 0,
            evaluation,
            quit: false,
        }
    }

    /// Currently highlighted field.
    pub fn selected_field(&self) -> Field {
        Field::ALL[self.selected]
    }

    /// Moves the highlight up one row, wrapping around.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.checked_sub(1).unwrap_or(Field::ALL.len() - 1);
    }

    /// Moves the highlight down one row, wrapping around.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Field::ALL.len();
    }

    /// Adjusts the highlighted field and recomputes.
    pub fn adjust(&mut self, steps: i32) {
        self.selected_field().adjust(&mut self.scenario, steps);
        self.recompute();
    }

    /// Flips the stepwise repayment flag and recomputes.
    pub fn toggle_stepwise(&mut self) {
        Field::Stepwise.adjust(&mut self.scenario, 1);
        self.recompute();
    }

    /// Switches to a different preset, replacing all inputs.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(scenario) = ScenarioConfig::from_preset(name) else {
            return;
        };
        self.initial = scenario.clone();
        self.scenario = scenario;
        self.preset_name = name.to_string();
        self.recompute();
    }

    /// Restores the inputs the current preset or file started with.
    pub fn reset(&mut self) {
        self.scenario = self.initial.clone();
        self.recompute();
    }

    /// Re-evaluates the financial core with the current inputs.
    pub fn recompute(&mut self) {
        self.evaluation = self.scenario.evaluate();
    }

    /// `(year, payment)` points for the repayment chart, empty on error.
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.evaluation
            .as_ref()
            .map(|e| {
                e.schedule
                    .iter()
                    .map(|r| (f64::from(r.year), r.payment))
                    .collect()
            })
            .unwrap_or_default()
    }
}
