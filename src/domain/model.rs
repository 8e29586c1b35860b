//! Model capability types.
//!
//! The classifier is an externally-supplied artifact. At load time the
//! provider selects exactly one of two capability variants; the pipeline
//! dispatches on the variant without any further introspection.

use serde::{Deserialize, Serialize};

/// The loaded classifier, as one of two capability variants.
///
/// Read-only after load; safe for unsynchronized concurrent reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ModelCapability {
    /// Produces a probability distribution over the two classes
    Probabilistic(LogisticModel),
    /// Produces a single raw predicted value with no probability attached
    Scalar(LinearScorer),
}

impl ModelCapability {
    /// Column names this model expects, in its declared order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        match self {
            Self::Probabilistic(m) => &m.feature_names,
            Self::Scalar(m) => &m.feature_names,
        }
    }
}

/// Logistic-regression classifier with class-probability output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    /// Two-class probability pair `[P(negative), P(positive)]` for a row
    /// ordered like `feature_names`.
    #[must_use]
    pub fn predict_proba(&self, row: &[f64]) -> [f64; 2] {
        let p = sigmoid(linear_score(&self.coefficients, self.intercept, row));
        [1.0 - p, p]
    }
}

/// Linear scorer with raw predicted-value output only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearScorer {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearScorer {
    /// Raw predicted value for a row ordered like `feature_names`.
    ///
    /// The value is not a calibrated probability and is not guaranteed to
    /// lie in [0, 1]; downstream passes it through unmodified.
    #[must_use]
    pub fn score(&self, row: &[f64]) -> f64 {
        linear_score(&self.coefficients, self.intercept, row)
    }
}

fn linear_score(coefficients: &[f64], intercept: f64, row: &[f64]) -> f64 {
    intercept
        + coefficients
            .iter()
            .zip(row.iter())
            .map(|(c, x)| c * x)
            .sum::<f64>()
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proba_pair_sums_to_one() {
        let model = LogisticModel {
            feature_names: vec!["age".to_string()],
            coefficients: vec![0.04],
            intercept: -2.0,
        };

        let pair = model.predict_proba(&[55.0]);
        assert!((pair[0] + pair[1] - 1.0).abs() < 1e-12);
        assert!(pair[1] > 0.0 && pair[1] < 1.0);
    }

    #[test]
    fn test_intercept_only_logistic() {
        // logit(0.7): sigmoid recovers the probability exactly.
        let model = LogisticModel {
            feature_names: vec![],
            coefficients: vec![],
            intercept: (0.7f64 / 0.3).ln(),
        };

        let pair = model.predict_proba(&[]);
        assert!((pair[1] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_scalar_score_is_unclamped() {
        let model = LinearScorer {
            feature_names: vec!["age".to_string()],
            coefficients: vec![0.1],
            intercept: 0.0,
        };

        // A raw score can exceed 1.0; the pass-through keeps it that way.
        let score = model.score(&[30.0]);
        assert!((score - 3.0).abs() < 1e-12);
    }
}
