//! Text formatting of evaluation results.

use std::fmt;

use crate::finance::FinancialSummary;

/// Rounds to a whole number and inserts `,` thousands separators.
///
/// ```
/// use vfarm_calc::report::group_thousands;
///
/// assert_eq!(group_thousands(34_930.4), "34,930");
/// assert_eq!(group_thousands(-1_234_567.8), "-1,234,568");
/// ```
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a fraction as a percentage with one decimal, e.g. `-11.3%`.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

impl fmt::Display for FinancialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Financial Summary ---")?;
        writeln!(f, "Levelized cost:        ${:.2}/kg", self.levelized_cost)?;
        writeln!(
            f,
            "Annual revenue:        ${}",
            group_thousands(self.annual_revenue)
        )?;
        writeln!(f, "ROI:                   {}", percent(self.roi))?;
        write!(
            f,
            "Total loan repayment:  ${}",
            group_thousands(self.total_repayment)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_small_and_large() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(999.5), "1,000");
        assert_eq!(group_thousands(375_000.0), "375,000");
        assert_eq!(group_thousands(12_345_678.0), "12,345,678");
    }

    #[test]
    fn negative_rounding_to_zero_has_no_sign() {
        assert_eq!(group_thousands(-0.3), "0");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(percent(-0.112_675), "-11.3%");
        assert_eq!(percent(0.05), "5.0%");
    }

    #[test]
    fn summary_display_formats_each_figure() {
        let s = FinancialSummary {
            levelized_cost: 25.365_182_5,
            annual_revenue: 34_930.0,
            roi: -0.112_675,
            total_repayment: 375_000.0,
        };
        let text = s.to_string();
        assert!(text.contains("Levelized cost:        $25.37/kg"));
        assert!(text.contains("Annual revenue:        $34,930"));
        assert!(text.contains("ROI:                   -11.3%"));
        assert!(text.contains("Total loan repayment:  $375,000"));
    }
}
