//! Classifier capability and on-disk model artifacts.
//!
//! The rest of the crate only depends on [`Classifier::predict`]. The bundled
//! artifact format is a linear decision function stored as JSON, with the
//! training-time column names kept alongside the coefficients.

use crate::{Disease, Error, FeatureSchema, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Binary classifier over a fixed-length feature vector
pub trait Classifier {
    /// Predict class 0 or 1 for one feature vector
    fn predict(&self, features: &[f64]) -> Result<u8>;
}

/// Linear decision function: class 1 iff `w . x + b > 0`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LinearModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Load an artifact and check it against the disease schema
    ///
    /// Any failure is reported as `ModelUnavailable`, since a model that
    /// cannot be loaded or that was fitted on other columns cannot serve
    /// predictions.
    pub fn load(disease: Disease, path: &Path) -> Result<Self> {
        let unavailable = |reason: String| Error::ModelUnavailable {
            disease,
            path: path.to_path_buf(),
            reason,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
        let model: LinearModel =
            serde_json::from_str(&contents).map_err(|e| unavailable(e.to_string()))?;
        model
            .check_schema(disease.schema())
            .map_err(unavailable)?;

        tracing::info!(
            "Loaded {} model from {:?} ({} features)",
            disease,
            path,
            model.coefficients.len()
        );
        Ok(model)
    }

    fn check_schema(&self, schema: &FeatureSchema) -> std::result::Result<(), String> {
        if self.coefficients.len() != self.feature_names.len() {
            return Err(format!(
                "{} coefficients for {} feature names",
                self.coefficients.len(),
                self.feature_names.len()
            ));
        }
        if !schema.matches_columns(self.feature_names.as_slice()) {
            return Err(format!(
                "feature names {:?} do not match expected columns {:?}",
                self.feature_names, schema.columns
            ));
        }
        Ok(())
    }

    /// Raw decision value `w . x + b`
    pub fn decision_function(&self, features: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    /// Save the artifact as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::debug!("Saved model artifact to {:?}", path);
        Ok(())
    }
}

impl Classifier for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<u8> {
        let score = self.decision_function(features);
        tracing::debug!("Decision value: {}", score);
        Ok(u8::from(score > 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn diabetes_model(intercept: f64) -> LinearModel {
        let schema = Disease::Diabetes.schema();
        LinearModel {
            feature_names: schema.columns.iter().map(|c| c.to_string()).collect(),
            coefficients: vec![0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            intercept,
        }
    }

    #[test]
    fn test_predict_thresholds_decision_value() {
        let model = diabetes_model(-70.0);
        let mut features = vec![0.0; 8];

        features[1] = 150.0;
        assert_eq!(model.predict(&features).unwrap(), 1);

        features[1] = 100.0;
        assert_eq!(model.predict(&features).unwrap(), 0);

        // exactly on the boundary is class 0
        features[1] = 140.0;
        assert_eq!(model.predict(&features).unwrap(), 0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("models").join("diabetes.json");

        let model = diabetes_model(-70.0);
        model.save(&path).unwrap();

        let loaded = LinearModel::load(Disease::Diabetes, &path).unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_load_missing_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("heartdisease.json");

        let err = LinearModel::load(Disease::Heart, &path).unwrap_err();
        assert!(matches!(
            err,
            Error::ModelUnavailable {
                disease: Disease::Heart,
                ..
            }
        ));
    }

    #[test]
    fn test_load_rejects_other_disease_columns() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("diabetes.json");
        diabetes_model(0.0).save(&path).unwrap();

        let err = LinearModel::load(Disease::Parkinsons, &path).unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable { .. }));
    }

    #[test]
    fn test_load_rejects_reordered_columns() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("diabetes.json");

        let mut model = diabetes_model(0.0);
        model.feature_names.swap(0, 1);
        model.save(&path).unwrap();

        assert!(LinearModel::load(Disease::Diabetes, &path).is_err());
    }

    #[test]
    fn test_load_rejects_coefficient_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("diabetes.json");

        let mut model = diabetes_model(0.0);
        model.coefficients.pop();
        model.save(&path).unwrap();

        let err = LinearModel::load(Disease::Diabetes, &path).unwrap_err();
        assert!(err.to_string().contains("coefficients"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("parkinson.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(LinearModel::load(Disease::Parkinsons, &path).is_err());
    }
}
