//! Model file adapter: loads the serialized classifier artifact.
//!
//! The artifact is a JSON document exported by the training pipeline:
//!
//! ```json
//! {
//!   "output": "probability",
//!   "feature_names": ["age", "sex", ...],
//!   "coefficients": [0.04, 1.2, ...],
//!   "intercept": -3.1
//! }
//! ```
//!
//! `output` selects the capability variant once, at load time:
//! `"probability"` yields a probabilistic classifier, `"score"` a raw
//! linear scorer. The loaded capability is memoized for the process
//! lifetime.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use crate::domain::{LinearScorer, LogisticModel, ModelCapability};
use crate::ports::{LoadError, ModelProvider};

/// Default artifact location, relative to the executable.
pub const DEFAULT_MODEL_PATH: &str = "models/model.json";

/// Environment variable overriding the artifact location.
pub const MODEL_PATH_ENV: &str = "CARDIOSCOPE_MODEL_PATH";

/// On-disk artifact structure.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    output: String,
    feature_names: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Loads the model artifact once and caches the outcome.
pub struct JsonModelProvider {
    path: PathBuf,
    cell: OnceLock<Result<ModelCapability, LoadError>>,
}

impl JsonModelProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
        }
    }

    /// Provider at the default location (with environment override).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new(super::resolve_path(DEFAULT_MODEL_PATH, MODEL_PATH_ENV))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<ModelCapability, LoadError> {
        let path = self.path.display().to_string();

        if !self.path.exists() {
            return Err(LoadError::Missing { path });
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| LoadError::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let artifact: ModelArtifact =
            serde_json::from_str(&content).map_err(|e| LoadError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let capability = build_capability(artifact, &path)?;

        tracing::info!(
            "Loaded model from {} ({} features, {})",
            path,
            capability.feature_names().len(),
            match capability {
                ModelCapability::Probabilistic(_) => "class-probability output",
                ModelCapability::Scalar(_) => "raw score output",
            }
        );

        Ok(capability)
    }
}

impl ModelProvider for JsonModelProvider {
    fn load(&self) -> Result<&ModelCapability, LoadError> {
        match self.cell.get_or_init(|| self.read()) {
            Ok(model) => Ok(model),
            Err(e) => Err(e.clone()),
        }
    }
}

fn build_capability(artifact: ModelArtifact, path: &str) -> Result<ModelCapability, LoadError> {
    let malformed = |message: String| LoadError::Malformed {
        path: path.to_string(),
        message,
    };

    let n = artifact.feature_names.len();
    if artifact.coefficients.len() != n {
        return Err(malformed(format!(
            "coefficients length {} does not match feature_names length {}",
            artifact.coefficients.len(),
            n
        )));
    }
    if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|c| !c.is_finite()) {
        return Err(malformed("model parameters must be finite".to_string()));
    }

    match artifact.output.as_str() {
        "probability" => Ok(ModelCapability::Probabilistic(LogisticModel {
            feature_names: artifact.feature_names,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })),
        "score" => Ok(ModelCapability::Scalar(LinearScorer {
            feature_names: artifact.feature_names,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
        })),
        other => Err(malformed(format!(
            "unknown output kind {other:?} (expected \"probability\" or \"score\")"
        ))),
    }
}
