//! Prediction result types.
//!
//! The output of one inference run: a probability and the risk label
//! derived from it.

use serde::{Deserialize, Serialize};

/// Binary risk classification for heart disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Probability below the decision threshold
    Low,
    /// Probability at or above the decision threshold
    High,
}

impl RiskLabel {
    /// Derive the label from a probability and a decision threshold.
    ///
    /// The boundary belongs to the high-risk side: `p == threshold` is High.
    #[must_use]
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        if probability >= threshold {
            Self::High
        } else {
            Self::Low
        }
    }

    /// Human-readable advisory text.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk of heart disease.",
            Self::High => "High risk — Consult a doctor.",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW RISK"),
            Self::High => write!(f, "HIGH RISK"),
        }
    }
}

/// Result of one prediction run.
///
/// Created only when the user triggers prediction; a new trigger replaces
/// the previous result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Positive-class probability. For the scalar model capability this is
    /// the raw predicted value passed through unmodified.
    pub probability: f64,

    /// Risk classification derived from the probability
    pub risk: RiskLabel,

    /// When the prediction was made
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl PredictionResult {
    /// Create a result, deriving the risk label from the threshold.
    #[must_use]
    pub fn new(probability: f64, threshold: f64) -> Self {
        Self {
            probability,
            risk: RiskLabel::from_probability(probability, threshold),
            created_at: chrono::Utc::now(),
        }
    }

    /// Probability formatted as a percentage with two decimal places.
    #[must_use]
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_law() {
        assert_eq!(RiskLabel::from_probability(0.0, 0.5), RiskLabel::Low);
        assert_eq!(RiskLabel::from_probability(0.49999, 0.5), RiskLabel::Low);
        assert_eq!(RiskLabel::from_probability(0.7, 0.5), RiskLabel::High);
        assert_eq!(RiskLabel::from_probability(1.0, 0.5), RiskLabel::High);
    }

    #[test]
    fn test_boundary_is_high_risk() {
        assert_eq!(RiskLabel::from_probability(0.5, 0.5), RiskLabel::High);
    }

    #[test]
    fn test_percent_formatting() {
        let result = PredictionResult::new(0.7, 0.5);
        assert_eq!(result.probability_percent(), "70.00%");
        assert_eq!(result.risk, RiskLabel::High);

        let result = PredictionResult::new(0.1, 0.5);
        assert_eq!(result.probability_percent(), "10.00%");
        assert_eq!(result.risk, RiskLabel::Low);
    }

    #[test]
    fn test_display() {
        assert_eq!(RiskLabel::High.to_string(), "HIGH RISK");
        assert_eq!(RiskLabel::Low.to_string(), "LOW RISK");
    }
}
