#![forbid(unsafe_code)]

//! Core of the disease prediction front-end.
//!
//! This crate provides:
//! - Raw input types for the heart disease, diabetes and Parkinson's forms
//! - Feature schemas and the encoders that honour them
//! - The classifier capability and model artifact loading
//! - The predictor adapter tying encoders to models

pub mod types;
pub mod error;
pub mod schema;
pub mod encoder;
pub mod validate;
pub mod model;
pub mod predictor;
pub mod batch;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use schema::FeatureSchema;
pub use encoder::{encode_diabetes, encode_heart, encode_parkinsons};
pub use model::{Classifier, LinearModel};
pub use predictor::Predictor;
pub use config::{Config, ModelsConfig};
