//! Patient feature record for heart-disease risk prediction.
//!
//! Uses the classic UCI Cleveland heart-disease attribute set.

use serde::{Deserialize, Serialize};

/// Canonical feature names, in the order the form presents them.
///
/// The inference pipeline matches columns by name, not position, so this
/// order only matters for display.
pub const FEATURE_NAMES: [&str; 13] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak",
    "slope", "ca", "thal",
];

/// One patient's attributes, as consumed by the classifier.
///
/// Thirteen named numeric fields. Constructed fresh from form state on every
/// render pass; immutable once built; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Age in years (1-120)
    pub age: f64,
    /// Sex: 1 = male, 0 = female
    pub sex: f64,
    /// Chest pain type (0-3)
    pub cp: f64,
    /// Resting blood pressure in mmHg (80-200)
    pub trestbps: f64,
    /// Serum cholesterol in mg/dl (100-600)
    pub chol: f64,
    /// Fasting blood sugar > 120 mg/dl: 0/1
    pub fbs: f64,
    /// Resting ECG results (0-2)
    pub restecg: f64,
    /// Maximum heart rate achieved (50-250)
    pub thalach: f64,
    /// Exercise induced angina: 0/1
    pub exang: f64,
    /// ST depression induced by exercise (0.0-10.0)
    pub oldpeak: f64,
    /// Slope of the peak exercise ST segment (0-2)
    pub slope: f64,
    /// Number of major vessels colored by fluoroscopy (0-4)
    pub ca: f64,
    /// Thalassemia (1-3)
    pub thal: f64,
}

impl FeatureRecord {
    /// All fields as `(name, value)` pairs, in canonical order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, f64); 13] {
        [
            ("age", self.age),
            ("sex", self.sex),
            ("cp", self.cp),
            ("trestbps", self.trestbps),
            ("chol", self.chol),
            ("fbs", self.fbs),
            ("restecg", self.restecg),
            ("thalach", self.thalach),
            ("exang", self.exang),
            ("oldpeak", self.oldpeak),
            ("slope", self.slope),
            ("ca", self.ca),
            ("thal", self.thal),
        ]
    }

    /// Look up a field value by column name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<f64> {
        match name {
            "age" => Some(self.age),
            "sex" => Some(self.sex),
            "cp" => Some(self.cp),
            "trestbps" => Some(self.trestbps),
            "chol" => Some(self.chol),
            "fbs" => Some(self.fbs),
            "restecg" => Some(self.restecg),
            "thalach" => Some(self.thalach),
            "exang" => Some(self.exang),
            "oldpeak" => Some(self.oldpeak),
            "slope" => Some(self.slope),
            "ca" => Some(self.ca),
            "thal" => Some(self.thal),
            _ => None,
        }
    }

    /// Build a record from values given in canonical field order.
    ///
    /// # Errors
    /// Returns an error if the slice length is not 13.
    pub fn from_values(v: &[f64]) -> Result<Self, String> {
        if v.len() != FEATURE_NAMES.len() {
            return Err(format!(
                "Expected {} features, got {}",
                FEATURE_NAMES.len(),
                v.len()
            ));
        }

        Ok(Self {
            age: v[0],
            sex: v[1],
            cp: v[2],
            trestbps: v[3],
            chol: v[4],
            fbs: v[5],
            restecg: v[6],
            thalach: v[7],
            exang: v[8],
            oldpeak: v[9],
            slope: v[10],
            ca: v[11],
            thal: v[12],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureRecord {
        FeatureRecord {
            age: 55.0,
            sex: 1.0,
            cp: 0.0,
            trestbps: 130.0,
            chol: 246.0,
            fbs: 0.0,
            restecg: 0.0,
            thalach: 150.0,
            exang: 0.0,
            oldpeak: 1.0,
            slope: 0.0,
            ca: 0.0,
            thal: 1.0,
        }
    }

    #[test]
    fn test_entries_cover_all_names() {
        let record = sample();
        let entries = record.entries();
        assert_eq!(entries.len(), 13);

        for (i, (name, _)) in entries.iter().enumerate() {
            assert_eq!(*name, FEATURE_NAMES[i]);
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let record = sample();
        assert_eq!(record.value("age"), Some(55.0));
        assert_eq!(record.value("oldpeak"), Some(1.0));
        assert_eq!(record.value("bmi"), None);
    }

    #[test]
    fn test_from_values_roundtrip() {
        let record = sample();
        let values: Vec<f64> = record.entries().iter().map(|(_, v)| *v).collect();
        let rebuilt = FeatureRecord::from_values(&values).expect("Should parse");
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn test_from_values_wrong_length() {
        assert!(FeatureRecord::from_values(&[1.0, 2.0]).is_err());
    }
}
