//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

/// Repayment line color.
pub const PAYMENT_COLOR: Color = Color::Green;
/// Highlighted parameter row.
pub const SELECTED_FG: Color = Color::Black;
/// Highlighted parameter row background.
pub const SELECTED_BG: Color = Color::Cyan;
/// Positive ROI.
pub const ROI_POSITIVE: Color = Color::Green;
/// Negative ROI.
pub const ROI_NEGATIVE: Color = Color::Red;
/// Error message color.
pub const ERROR_FG: Color = Color::Red;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Returns the ROI color by sign.
pub fn roi_color(roi: f64) -> Color {
    if roi >= 0.0 { ROI_POSITIVE } else { ROI_NEGATIVE }
}

/// Computes Y-axis bounds for the payment chart.
///
/// The axis always starts at zero; the top gets 10% headroom.
pub fn auto_bounds_y(points: &[(f64, f64)]) -> [f64; 2] {
    let max = points.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return [0.0, 1.0];
    }
    [0.0, max * 1.1]
}

/// Computes X-axis bounds covering years `1..=term`.
pub fn bounds_x(points: &[(f64, f64)]) -> [f64; 2] {
    let hi = points.last().map_or(1.0, |p| p.0);
    [1.0, hi.max(2.0)]
}
