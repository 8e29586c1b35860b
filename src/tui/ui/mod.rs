//! UI module: View components for the TUI.

pub mod explore;
pub mod form;
pub mod results;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::ClinicalTheme;

/// Footer: key hints plus the medical disclaimer.
pub fn render_footer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![
            Span::styled("[↑↓] ", ClinicalTheme::key_hint()),
            Span::styled("Field ", ClinicalTheme::key_desc()),
            Span::styled("[←→] ", ClinicalTheme::key_hint()),
            Span::styled("Adjust ", ClinicalTheme::key_desc()),
            Span::styled("[Enter] ", ClinicalTheme::key_hint()),
            Span::styled("Predict Now ", ClinicalTheme::key_desc()),
            Span::styled("[R] ", ClinicalTheme::key_hint()),
            Span::styled("Reset ", ClinicalTheme::key_desc()),
            Span::styled("[Q] ", ClinicalTheme::key_hint()),
            Span::styled("Quit", ClinicalTheme::key_desc()),
        ]),
        Line::from(vec![Span::styled(
            "DISCLAIMER: Indicative estimates only; not a substitute for professional medical evaluation.",
            ClinicalTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(ClinicalTheme::border());

    f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
}
