//! Inference pipeline: feature-vector assembly, model invocation, and
//! decision thresholding.
//!
//! Pure computation over the provided inputs plus one call into the
//! loaded model capability. Every failure mode is returned as a value;
//! nothing here can crash the presentation layer.

use crate::domain::{AppConfig, FeatureRecord, ModelCapability, PredictionResult};

/// Failure of a prediction attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    /// Prediction was triggered but no model is loaded.
    #[error("Model not available.")]
    ModelUnavailable,

    /// The model could not be invoked on the assembled row.
    #[error("Prediction error: {0}")]
    PredictionFailed(String),
}

/// Run one prediction over the current feature record.
///
/// Assembles a single-row feature vector in the model's declared column
/// order (matched by name), invokes the capability, and derives the risk
/// label from the configured threshold.
///
/// For the probabilistic capability the positive-class probability is the
/// second entry of the class pair. For the scalar capability the raw
/// predicted value is passed through unmodified, with no clamping or
/// calibration.
///
/// # Errors
/// `ModelUnavailable` if `model` is `None`; `PredictionFailed` for any
/// shape mismatch or non-finite model output.
pub fn predict(
    record: &FeatureRecord,
    model: Option<&ModelCapability>,
    config: &AppConfig,
) -> Result<PredictionResult, InferenceError> {
    let model = model.ok_or(InferenceError::ModelUnavailable)?;

    let row = assemble_row(record, model.feature_names())?;

    let probability = match model {
        ModelCapability::Probabilistic(m) => m.predict_proba(&row)[1],
        ModelCapability::Scalar(m) => m.score(&row),
    };

    if !probability.is_finite() {
        return Err(InferenceError::PredictionFailed(
            "model produced a non-finite value".to_string(),
        ));
    }

    let result = PredictionResult::new(probability, config.risk_threshold);

    tracing::info!(
        "Prediction complete: probability={:.4}, risk={}",
        result.probability,
        result.risk
    );

    Ok(result)
}

/// Build the one-row input table in the model's column order.
fn assemble_row(record: &FeatureRecord, names: &[String]) -> Result<Vec<f64>, InferenceError> {
    names
        .iter()
        .map(|name| {
            record.value(name).ok_or_else(|| {
                InferenceError::PredictionFailed(format!(
                    "model expects unknown feature `{name}`"
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LinearScorer, LogisticModel, RiskLabel};

    fn default_record() -> FeatureRecord {
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

    /// Intercept-only probabilistic model yielding exactly `p` for the
    /// positive class.
    fn probabilistic(p: f64) -> ModelCapability {
        ModelCapability::Probabilistic(LogisticModel {
            feature_names: vec![],
            coefficients: vec![],
            intercept: (p / (1.0 - p)).ln(),
        })
    }

    #[test]
    fn test_high_risk_scenario() {
        // Class pair (0.3, 0.7): positive-class mass is index 1.
        let model = probabilistic(0.7);
        let result = predict(&default_record(), Some(&model), &AppConfig::default())
            .expect("should predict");

        assert_eq!(result.probability_percent(), "70.00%");
        assert_eq!(result.risk, RiskLabel::High);
    }

    #[test]
    fn test_low_risk_scenario() {
        // Class pair (0.9, 0.1).
        let model = probabilistic(0.1);
        let result = predict(&default_record(), Some(&model), &AppConfig::default())
            .expect("should predict");

        assert_eq!(result.probability_percent(), "10.00%");
        assert_eq!(result.risk, RiskLabel::Low);
    }

    #[test]
    fn test_boundary_probability_is_high_risk() {
        // sigmoid(0) = 0.5 exactly.
        let model = ModelCapability::Probabilistic(LogisticModel {
            feature_names: vec![],
            coefficients: vec![],
            intercept: 0.0,
        });
        let result = predict(&default_record(), Some(&model), &AppConfig::default())
            .expect("should predict");

        assert_eq!(result.risk, RiskLabel::High);
    }

    #[test]
    fn test_missing_model() {
        let err = predict(&default_record(), None, &AppConfig::default()).unwrap_err();
        assert_eq!(err, InferenceError::ModelUnavailable);
    }

    #[test]
    fn test_row_assembly_matches_by_name() {
        // Column order differs from the record's canonical order.
        let model = ModelCapability::Scalar(LinearScorer {
            feature_names: vec!["chol".to_string(), "age".to_string()],
            coefficients: vec![1.0, 1.0],
            intercept: 0.0,
        });
        let result = predict(&default_record(), Some(&model), &AppConfig::default())
            .expect("should predict");

        assert!((result.probability - 301.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_feature_fails_without_crash() {
        let model = ModelCapability::Scalar(LinearScorer {
            feature_names: vec!["resting_bp".to_string()],
            coefficients: vec![1.0],
            intercept: 0.0,
        });
        let err = predict(&default_record(), Some(&model), &AppConfig::default()).unwrap_err();

        match err {
            InferenceError::PredictionFailed(message) => {
                assert!(message.contains("resting_bp"));
            }
            other => panic!("expected PredictionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_passthrough_is_unclamped() {
        // A raw score above 1.0 is reported as-is; scalar outputs are
        // never calibrated or clamped.
        let model = ModelCapability::Scalar(LinearScorer {
            feature_names: vec![],
            coefficients: vec![],
            intercept: 1.7,
        });
        let result = predict(&default_record(), Some(&model), &AppConfig::default())
            .expect("should predict");

        assert!((result.probability - 1.7).abs() < 1e-12);
        assert_eq!(result.risk, RiskLabel::High);
    }

    #[test]
    fn test_non_finite_output_fails() {
        let model = ModelCapability::Scalar(LinearScorer {
            feature_names: vec!["age".to_string()],
            coefficients: vec![f64::MAX],
            intercept: f64::MAX,
        });
        // Overflow to infinity must surface as PredictionFailed.
        let err = predict(&default_record(), Some(&model), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, InferenceError::PredictionFailed(_)));
    }

    #[test]
    fn test_retrigger_overwrites_independently() {
        let config = AppConfig::default();
        let record = default_record();

        let first = predict(&record, Some(&probabilistic(0.7)), &config).expect("first");
        let second = predict(&record, Some(&probabilistic(0.1)), &config).expect("second");

        assert_eq!(first.risk, RiskLabel::High);
        assert_eq!(second.risk, RiskLabel::Low);
    }
}
