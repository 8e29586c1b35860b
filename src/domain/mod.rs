//! Domain layer: Core business types and logic.
//!
//! Pure types with no I/O. Everything here is immutable once constructed.

pub mod config;
mod dataset;
mod model;
mod patient;
mod prediction;

pub use config::{AppConfig, FieldKind, FieldSpec};
pub use dataset::DatasetTable;
pub use model::{LinearScorer, LogisticModel, ModelCapability};
pub use patient::{FeatureRecord, FEATURE_NAMES};
pub use prediction::{PredictionResult, RiskLabel};
