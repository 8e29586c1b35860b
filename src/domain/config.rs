//! Application configuration: decision threshold and form field domains.
//!
//! The threshold and the thirteen field domains are fixed constants, but
//! they live in one named structure so they stay independently testable
//! instead of being scattered through the UI code.

/// How a form field behaves: its type, bounds, and default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Integer-valued field stepped by 1, clamped to [min, max]
    Int { min: i64, max: i64, default: i64 },
    /// Float-valued field stepped by `step`, clamped to [min, max]
    Float {
        min: f64,
        max: f64,
        default: f64,
        step: f64,
    },
    /// Enumerated field cycling a fixed option list
    Choice {
        /// Display labels, parallel to `values`
        labels: &'static [&'static str],
        /// Numeric values emitted into the feature record
        values: &'static [f64],
        default_index: usize,
    },
}

impl FieldKind {
    /// The value this field contributes before the user touches it.
    #[must_use]
    pub fn default_value(&self) -> f64 {
        match self {
            Self::Int { default, .. } => *default as f64,
            Self::Float { default, .. } => *default,
            Self::Choice {
                values,
                default_index,
                ..
            } => values[*default_index],
        }
    }

    /// Whether `value` lies within this field's declared domain.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        match self {
            Self::Int { min, max, .. } => {
                value.fract() == 0.0 && (*min as f64..=*max as f64).contains(&value)
            }
            Self::Float { min, max, .. } => (*min..=*max).contains(&value),
            Self::Choice { values, .. } => values.contains(&value),
        }
    }
}

/// One form field: the feature column it feeds, its UI label, and domain.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Feature column name, matching `FEATURE_NAMES`
    pub name: &'static str,
    /// Label shown next to the widget
    pub label: &'static str,
    pub kind: FieldKind,
}

/// The thirteen input fields with their declared domains and defaults.
pub const FORM_FIELDS: [FieldSpec; 13] = [
    FieldSpec {
        name: "age",
        label: "Age",
        kind: FieldKind::Int {
            min: 1,
            max: 120,
            default: 55,
        },
    },
    FieldSpec {
        name: "sex",
        label: "Sex",
        kind: FieldKind::Choice {
            labels: &["Male", "Female"],
            values: &[1.0, 0.0],
            default_index: 0,
        },
    },
    FieldSpec {
        name: "cp",
        label: "Chest Pain Type",
        kind: FieldKind::Choice {
            labels: &["0", "1", "2", "3"],
            values: &[0.0, 1.0, 2.0, 3.0],
            default_index: 0,
        },
    },
    FieldSpec {
        name: "trestbps",
        label: "Resting Blood Pressure",
        kind: FieldKind::Int {
            min: 80,
            max: 200,
            default: 130,
        },
    },
    FieldSpec {
        name: "chol",
        label: "Cholesterol",
        kind: FieldKind::Int {
            min: 100,
            max: 600,
            default: 246,
        },
    },
    FieldSpec {
        name: "fbs",
        label: "Fasting Blood Sugar > 120",
        kind: FieldKind::Choice {
            labels: &["0", "1"],
            values: &[0.0, 1.0],
            default_index: 0,
        },
    },
    FieldSpec {
        name: "restecg",
        label: "Resting ECG Results",
        kind: FieldKind::Choice {
            labels: &["0", "1", "2"],
            values: &[0.0, 1.0, 2.0],
            default_index: 0,
        },
    },
    FieldSpec {
        name: "thalach",
        label: "Max Heart Rate",
        kind: FieldKind::Int {
            min: 50,
            max: 250,
            default: 150,
        },
    },
    FieldSpec {
        name: "exang",
        label: "Exercise Induced Angina",
        kind: FieldKind::Choice {
            labels: &["0", "1"],
            values: &[0.0, 1.0],
            default_index: 0,
        },
    },
    FieldSpec {
        name: "oldpeak",
        label: "ST Depression",
        kind: FieldKind::Float {
            min: 0.0,
            max: 10.0,
            default: 1.0,
            step: 0.1,
        },
    },
    FieldSpec {
        name: "slope",
        label: "ST Segment Slope",
        kind: FieldKind::Choice {
            labels: &["0", "1", "2"],
            values: &[0.0, 1.0, 2.0],
            default_index: 0,
        },
    },
    FieldSpec {
        name: "ca",
        label: "Major Vessels",
        kind: FieldKind::Choice {
            labels: &["0", "1", "2", "3", "4"],
            values: &[0.0, 1.0, 2.0, 3.0, 4.0],
            default_index: 0,
        },
    },
    FieldSpec {
        name: "thal",
        label: "Thalassemia",
        kind: FieldKind::Choice {
            labels: &["1", "2", "3"],
            values: &[1.0, 2.0, 3.0],
            default_index: 0,
        },
    },
];

/// Top-level configuration: the decision threshold plus the form domains.
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    /// Probability at or above which the risk label is High
    pub risk_threshold: f64,
    /// Declared domains and defaults for the thirteen input fields
    pub form: &'static [FieldSpec],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            risk_threshold: 0.5,
            form: &FORM_FIELDS,
        }
    }
}
