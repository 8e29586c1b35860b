//! # Cardioscope
//!
//! Interactive terminal dashboard for heart-disease risk prediction.
//!
//! Loads a pre-trained classification model and a static patient dataset,
//! collects thirteen typed patient attributes through form widgets, shows
//! the predicted probability with a binary risk label, and renders
//! descriptive charts over the dataset.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (FeatureRecord, PredictionResult, ModelCapability)
//! - `ports`: Trait definitions for the two external resources
//! - `adapters`: Concrete providers (JSON model artifact, CSV dataset)
//! - `application`: Inference pipeline and dataset exploration
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{FeatureRecord, ModelCapability, PredictionResult, RiskLabel};
