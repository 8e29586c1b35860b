//! Patient input sidebar: thirteen typed, range-constrained widgets.
//!
//! Bounds are enforced structurally: numeric fields step by arrow key and
//! clamp at their declared min/max, enumerated fields cycle a fixed option
//! list. There is nothing to validate downstream because no out-of-domain
//! state is reachable.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::domain::{AppConfig, FeatureRecord, FieldKind, FieldSpec};
use crate::tui::styles::ClinicalTheme;

/// Current value of one widget.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldValue {
    Int(i64),
    Float(f64),
    /// Index into the spec's option list
    Choice(usize),
}

/// One widget: its spec plus current state.
#[derive(Debug, Clone)]
struct FormField {
    spec: &'static FieldSpec,
    value: FieldValue,
}

impl FormField {
    fn new(spec: &'static FieldSpec) -> Self {
        let value = match spec.kind {
            FieldKind::Int { default, .. } => FieldValue::Int(default),
            FieldKind::Float { default, .. } => FieldValue::Float(default),
            FieldKind::Choice { default_index, .. } => FieldValue::Choice(default_index),
        };
        Self { spec, value }
    }

    /// Numeric value this field contributes to the feature record.
    fn numeric(&self) -> f64 {
        match (self.value, &self.spec.kind) {
            (FieldValue::Int(v), _) => v as f64,
            (FieldValue::Float(v), _) => v,
            (FieldValue::Choice(i), FieldKind::Choice { values, .. }) => values[i],
            // A Choice value only ever pairs with a Choice spec.
            (FieldValue::Choice(_), _) => unreachable!("choice value on non-choice field"),
        }
    }

    /// Display text for the current value.
    fn display(&self) -> String {
        match (self.value, &self.spec.kind) {
            (FieldValue::Int(v), _) => v.to_string(),
            (FieldValue::Float(v), _) => format!("{v:.1}"),
            (FieldValue::Choice(i), FieldKind::Choice { labels, .. }) => labels[i].to_string(),
            (FieldValue::Choice(_), _) => unreachable!("choice value on non-choice field"),
        }
    }

    /// Step up, clamped to the declared bound (choices wrap around).
    fn increase(&mut self) {
        match (&mut self.value, &self.spec.kind) {
            (FieldValue::Int(v), FieldKind::Int { max, .. }) => *v = (*v + 1).min(*max),
            (FieldValue::Float(v), FieldKind::Float { max, step, .. }) => {
                *v = (*v + step).min(*max);
            }
            (FieldValue::Choice(i), FieldKind::Choice { values, .. }) => {
                *i = (*i + 1) % values.len();
            }
            _ => {}
        }
    }

    /// Step down, clamped to the declared bound (choices wrap around).
    fn decrease(&mut self) {
        match (&mut self.value, &self.spec.kind) {
            (FieldValue::Int(v), FieldKind::Int { min, .. }) => *v = (*v - 1).max(*min),
            (FieldValue::Float(v), FieldKind::Float { min, step, .. }) => {
                *v = (*v - step).max(*min);
            }
            (FieldValue::Choice(i), FieldKind::Choice { values, .. }) => {
                *i = (*i + values.len() - 1) % values.len();
            }
            _ => {}
        }
    }
}

/// Sidebar form state.
pub struct FormState {
    fields: Vec<FormField>,
    selected: usize,
}

impl FormState {
    /// Fresh form with every field at its configured default.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            fields: config.form.iter().map(FormField::new).collect(),
            selected: 0,
        }
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.selected = (self.selected + self.fields.len() - 1) % self.fields.len();
    }

    pub fn increase(&mut self) {
        self.fields[self.selected].increase();
    }

    pub fn decrease(&mut self) {
        self.fields[self.selected].decrease();
    }

    /// Reset every field to its default value.
    pub fn reset(&mut self, config: &AppConfig) {
        *self = Self::new(config);
    }

    /// Read current widget state into a feature record.
    ///
    /// The form's field order is the record's canonical order, so the
    /// positional conversion cannot fail on a well-formed config.
    #[must_use]
    pub fn collect(&self) -> FeatureRecord {
        let values: Vec<f64> = self.fields.iter().map(FormField::numeric).collect();
        FeatureRecord::from_values(&values)
            .unwrap_or_else(|e| unreachable!("form mirrors the record schema: {e}"))
    }
}

/// Render the sidebar form.
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
    let items: Vec<ListItem> = state
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let is_selected = i == state.selected;
            let marker = if is_selected { "▸ " } else { "  " };
            let label_style = if is_selected {
                ClinicalTheme::focused()
            } else {
                ClinicalTheme::text_secondary()
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, ClinicalTheme::focused()),
                Span::styled(format!("{:<24}", field.spec.label), label_style),
                Span::styled(field.display(), ClinicalTheme::text()),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(" Patient Inputs ", ClinicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(ClinicalTheme::border_focused());

    f.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FEATURE_NAMES;

    fn config() -> AppConfig {
        AppConfig::default()
    }

    #[test]
    fn test_collect_defaults() {
        let state = FormState::new(&config());
        let record = state.collect();

        assert_eq!(record.age, 55.0);
        assert_eq!(record.sex, 1.0);
        assert_eq!(record.trestbps, 130.0);
        assert_eq!(record.chol, 246.0);
        assert_eq!(record.thalach, 150.0);
        assert!((record.oldpeak - 1.0).abs() < 1e-9);
        assert_eq!(record.thal, 1.0);
    }

    #[test]
    fn test_collect_stays_within_domains() {
        let cfg = config();
        let mut state = FormState::new(&cfg);

        // Hammer every field well past its bounds in both directions.
        for i in 0..FEATURE_NAMES.len() {
            state.selected = i;
            for _ in 0..500 {
                state.increase();
            }
        }
        let record = state.collect();
        for (spec, (_, value)) in cfg.form.iter().zip(record.entries().iter()) {
            assert!(spec.kind.contains(*value), "{} = {}", spec.name, value);
        }

        for i in 0..FEATURE_NAMES.len() {
            state.selected = i;
            for _ in 0..500 {
                state.decrease();
            }
        }
        let record = state.collect();
        for (spec, (_, value)) in cfg.form.iter().zip(record.entries().iter()) {
            assert!(spec.kind.contains(*value), "{} = {}", spec.name, value);
        }
    }

    #[test]
    fn test_int_stepping_clamps_at_bounds() {
        let mut state = FormState::new(&config());

        // age: [1, 120], default 55.
        state.selected = 0;
        for _ in 0..200 {
            state.increase();
        }
        assert_eq!(state.collect().age, 120.0);

        for _ in 0..200 {
            state.decrease();
        }
        assert_eq!(state.collect().age, 1.0);
    }

    #[test]
    fn test_float_steps_by_tenth() {
        let mut state = FormState::new(&config());

        // oldpeak is field index 9, default 1.0, step 0.1.
        state.selected = 9;
        state.increase();
        assert!((state.collect().oldpeak - 1.1).abs() < 1e-9);

        state.decrease();
        state.decrease();
        assert!((state.collect().oldpeak - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_sex_emits_only_binary_values() {
        let mut state = FormState::new(&config());
        state.selected = 1;

        // Cycling the sex choice any number of times only ever yields 0 or 1.
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(state.collect().sex);
            state.increase();
        }
        assert!(seen.iter().all(|v| *v == 0.0 || *v == 1.0));
        assert!(seen.contains(&1.0) && seen.contains(&0.0));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let cfg = config();
        let mut state = FormState::new(&cfg);

        state.selected = 0;
        state.increase();
        state.increase();
        assert_eq!(state.collect().age, 57.0);

        state.reset(&cfg);
        assert_eq!(state.collect().age, 55.0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut state = FormState::new(&config());
        state.prev_field();
        assert_eq!(state.selected, 12);
        state.next_field();
        assert_eq!(state.selected, 0);
    }
}
