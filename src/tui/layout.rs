//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use super::runtime::{App, Field};
use super::style;
use crate::report::{group_thousands, percent};

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // header
            Constraint::Length(12), // inputs + summary
            Constraint::Min(10),    // chart
            Constraint::Length(1),  // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(chunks[1]);

    render_header(frame, app, chunks[0]);
    render_inputs(frame, app, body[0]);
    render_summary(frame, app, body[1]);
    render_chart(frame, app, chunks[2]);
    render_footer(frame, chunks[3]);
}

/// Header bar: title and active preset.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " VFARM-CALC ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Vertical farm financial calculator │ "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Parameter list with the selected row highlighted.
fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = Field::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let text = format!(
                " {:<14} {:>15} ",
                field.label(),
                field.value_text(&app.scenario)
            );
            if i == app.selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(style::SELECTED_FG)
                        .bg(style::SELECTED_BG),
                ))
            } else {
                Line::from(text)
            }
        })
        .collect();

    let block = Block::default().title(" Inputs ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Financial summary, or the computation error when inputs are inconsistent.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.evaluation {
        Ok(eval) => {
            let s = &eval.summary;
            vec![
                Line::from(format!("  Levelized cost:   ${:.2}/kg", s.levelized_cost)),
                Line::from(format!(
                    "  Annual revenue:   ${}",
                    group_thousands(s.annual_revenue)
                )),
                Line::from(vec![
                    Span::raw("  ROI:              "),
                    Span::styled(
                        percent(s.roi),
                        Style::default()
                            .fg(style::roi_color(s.roi))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(format!(
                    "  Total repayment:  ${}",
                    group_thousands(s.total_repayment)
                )),
            ]
        }
        Err(e) => vec![
            Line::from(Span::styled(
                "  Cannot compute:",
                Style::default()
                    .fg(style::ERROR_FG)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {e}"),
                Style::default().fg(style::ERROR_FG),
            )),
        ],
    };

    let block = Block::default()
        .title(" Financial Summary ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Annual payment line chart.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let points = app.chart_points();
    let x_bounds = style::bounds_x(&points);
    let y_bounds = style::auto_bounds_y(&points);

    let datasets = vec![
        Dataset::default()
            .name("Payment")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(style::PAYMENT_COLOR))
            .data(&points),
    ];

    let x_labels = vec![
        format!("{}", x_bounds[0] as u32),
        format!("{}", x_bounds[1] as u32),
    ];
    let y_labels = vec![
        "0".to_string(),
        group_thousands(y_bounds[1] / 2.0),
        group_thousands(y_bounds[1]),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Loan Repayment Over Time ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("year")
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("$")
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ↑/↓:Select  ←/→:Adjust (Shift x10)  Space:Stepwise  1/2/3:Preset  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
