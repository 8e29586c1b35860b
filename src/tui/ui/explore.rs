//! Dataset exploration area: distribution charts and a raw-data preview.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Table},
    Frame,
};

use crate::application::ExplorationStats;
use crate::ports::LoadError;
use crate::tui::styles::ClinicalTheme;

use super::results::format_value;

/// Render the exploration area, or an informational placeholder naming the
/// expected file when the dataset failed to load.
pub fn render_exploration(
    f: &mut Frame,
    area: Rect,
    stats: Result<&ExplorationStats, &LoadError>,
) {
    match stats {
        Ok(stats) => render_charts(f, area, stats),
        Err(error) => render_placeholder(f, area, error),
    }
}

fn render_placeholder(f: &mut Frame, area: Rect, error: &LoadError) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No data available",
            ClinicalTheme::text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Place the dataset at {}", error.path()),
            ClinicalTheme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(Span::styled(
                " Explore Heart Disease Data ",
                ClinicalTheme::subtitle(),
            ))
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(content, area);
}

fn render_charts(f: &mut Frame, area: Rect, stats: &ExplorationStats) {
    let has_line_chart = stats.target_by_age.is_some();

    let constraints = if has_line_chart {
        vec![
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ]
    } else {
        vec![Constraint::Percentage(55), Constraint::Percentage(45)]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // Two side-by-side bar charts.
    let bar_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    render_age_distribution(f, bar_row[0], stats);
    render_sex_counts(f, bar_row[1], stats);

    if let Some(series) = &stats.target_by_age {
        render_target_by_age(f, chunks[1], series);
    }

    let preview_area = if has_line_chart { chunks[2] } else { chunks[1] };
    render_preview(f, preview_area, stats);
}

fn render_age_distribution(f: &mut Frame, area: Rect, stats: &ExplorationStats) {
    // Ascending by age; the aggregate already guarantees the order.
    let labels: Vec<String> = stats.age_counts.iter().map(|(age, _)| age.to_string()).collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .map(String::as_str)
        .zip(stats.age_counts.iter().map(|(_, count)| *count))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(" Age Distribution ", ClinicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(ClinicalTheme::border()),
        )
        .data(&data)
        .bar_width(2)
        .bar_gap(1)
        .bar_style(ClinicalTheme::info())
        .value_style(ClinicalTheme::text());

    f.render_widget(chart, area);
}

fn render_sex_counts(f: &mut Frame, area: Rect, stats: &ExplorationStats) {
    let data: Vec<(&str, u64)> = stats.sex_counts.to_vec();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(" Cases by Sex ", ClinicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(ClinicalTheme::border()),
        )
        .data(&data)
        .bar_width(8)
        .bar_gap(2)
        .bar_style(ClinicalTheme::success())
        .value_style(ClinicalTheme::text());

    f.render_widget(chart, area);
}

fn render_target_by_age(f: &mut Frame, area: Rect, series: &[(i64, f64)]) {
    let points: Vec<(f64, f64)> = series
        .iter()
        .map(|(age, mean)| (*age as f64, *mean))
        .collect();

    let (x_min, x_max) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.0, last.0),
        _ => (0.0, 1.0),
    };

    let dataset = Dataset::default()
        .name("mean target")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(ClinicalTheme::info())
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(Span::styled(
                    " Average Target by Age ",
                    ClinicalTheme::subtitle(),
                ))
                .borders(Borders::ALL)
                .border_style(ClinicalTheme::border()),
        )
        .x_axis(
            Axis::default()
                .style(ClinicalTheme::text_muted())
                .bounds([x_min, x_max.max(x_min + 1.0)])
                .labels([format!("{x_min:.0}"), format!("{x_max:.0}")]),
        )
        .y_axis(
            Axis::default()
                .style(ClinicalTheme::text_muted())
                .bounds([0.0, 1.0])
                .labels(["0.0".to_string(), "0.5".to_string(), "1.0".to_string()]),
        );

    f.render_widget(chart, area);
}

fn render_preview(f: &mut Frame, area: Rect, stats: &ExplorationStats) {
    let header = Row::new(
        stats
            .columns
            .iter()
            .map(|c| Span::styled(c.clone(), ClinicalTheme::text_secondary())),
    );

    let rows: Vec<Row> = stats
        .preview
        .iter()
        .map(|row| {
            Row::new(
                row.iter()
                    .map(|v| Span::styled(format_value(*v), ClinicalTheme::text())),
            )
        })
        .collect();

    let widths = vec![Constraint::Length(9); stats.columns.len()];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(Span::styled(" Sample Data ", ClinicalTheme::subtitle()))
            .borders(Borders::ALL)
            .border_style(ClinicalTheme::border()),
    );

    f.render_widget(table, area);
}
