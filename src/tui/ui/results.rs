//! Current-inputs table and prediction results area.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::application::InferenceError;
use crate::domain::{FeatureRecord, PredictionResult};
use crate::tui::styles::ClinicalTheme;

/// Render the transposed table of the current feature record.
///
/// Thirteen name/value pairs, folded into two column pairs to fit the
/// panel.
pub fn render_current_inputs(f: &mut Frame, area: Rect, record: &FeatureRecord) {
    let entries = record.entries();
    let mid = entries.len().div_ceil(2);

    let rows: Vec<Row> = (0..mid)
        .map(|i| {
            let (left_name, left_value) = entries[i];
            let right = entries.get(mid + i);

            Row::new(vec![
                Span::styled(left_name, ClinicalTheme::text_secondary()),
                Span::styled(format_value(left_value), ClinicalTheme::text()),
                Span::styled(
                    right.map_or("", |(name, _)| *name),
                    ClinicalTheme::text_secondary(),
                ),
                Span::styled(
                    right.map_or(String::new(), |(_, value)| format_value(*value)),
                    ClinicalTheme::text(),
                ),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(8),
        ],
    )
    .column_spacing(2)
    .block(
        Block::default()
            .title(Span::styled(" Current Inputs ", ClinicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(table, area);
}

/// Render the prediction results area.
pub fn render_results(
    f: &mut Frame,
    area: Rect,
    outcome: Option<&Result<PredictionResult, InferenceError>>,
) {
    let block = Block::default()
        .title(Span::styled(" Prediction ", ClinicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicalTheme::border());

    match outcome {
        None => {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("Press ", ClinicalTheme::text_muted()),
                    Span::styled("[Enter]", ClinicalTheme::key_hint()),
                    Span::styled(" to Predict Now", ClinicalTheme::text_muted()),
                ]),
            ])
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(hint, area);
        }
        Some(Ok(result)) => render_success(f, area, block, result),
        Some(Err(error)) => {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(error.to_string(), ClinicalTheme::danger())),
            ])
            .alignment(Alignment::Center)
            .block(block.border_style(ClinicalTheme::danger()));
            f.render_widget(message, area);
        }
    }
}

fn render_success(f: &mut Frame, area: Rect, block: Block, result: &PredictionResult) {
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    // The gauge fill must stay in [0, 1] even for an uncalibrated scalar
    // score; the label always shows the true value.
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(
                    " Heart Disease Probability ",
                    ClinicalTheme::text_secondary(),
                ))
                .borders(Borders::ALL)
                .border_style(ClinicalTheme::border()),
        )
        .gauge_style(ClinicalTheme::risk(result.risk))
        .ratio(result.probability.clamp(0.0, 1.0))
        .label(result.probability_percent());
    f.render_widget(gauge, chunks[0]);

    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} ", result.risk),
            ClinicalTheme::risk(result.risk).add_modifier(ratatui::style::Modifier::BOLD),
        ),
        Span::styled(result.risk.description(), ClinicalTheme::text_secondary()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(banner, chunks[1]);
}

/// Compact numeric formatting: integers without a fraction, floats with one.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
