//! Predictor adapter: dispatches encoded vectors to the right model.
//!
//! Models are loaded once, up front, and never mutated afterwards. A
//! missing or mismatched artifact aborts construction instead of failing
//! the first request for that disease.

use crate::{
    ClinicalInput, Classifier, Diagnosis, Disease, Error, Label, LinearModel, ModelsConfig,
    Result,
};

/// The three disease classifiers behind a single `predict` entry point
pub struct Predictor {
    heart: Box<dyn Classifier>,
    diabetes: Box<dyn Classifier>,
    parkinsons: Box<dyn Classifier>,
}

impl Predictor {
    pub fn new(
        heart: Box<dyn Classifier>,
        diabetes: Box<dyn Classifier>,
        parkinsons: Box<dyn Classifier>,
    ) -> Self {
        Self {
            heart,
            diabetes,
            parkinsons,
        }
    }

    /// Load all three model artifacts from the configured locations
    pub fn load(config: &ModelsConfig) -> Result<Self> {
        let heart = LinearModel::load(Disease::Heart, &config.path_for(Disease::Heart)?)?;
        let diabetes =
            LinearModel::load(Disease::Diabetes, &config.path_for(Disease::Diabetes)?)?;
        let parkinsons =
            LinearModel::load(Disease::Parkinsons, &config.path_for(Disease::Parkinsons)?)?;

        Ok(Self::new(
            Box::new(heart),
            Box::new(diabetes),
            Box::new(parkinsons),
        ))
    }

    fn classifier(&self, disease: Disease) -> &dyn Classifier {
        match disease {
            Disease::Heart => self.heart.as_ref(),
            Disease::Diabetes => self.diabetes.as_ref(),
            Disease::Parkinsons => self.parkinsons.as_ref(),
        }
    }

    /// Run the disease's model on an already-encoded feature vector
    ///
    /// The vector length is checked against the schema before the model is
    /// invoked.
    pub fn predict(&self, disease: Disease, features: &[f64]) -> Result<Diagnosis> {
        disease.schema().check_shape(features)?;

        let class = self.classifier(disease).predict(features)?;
        let label = match class {
            1 => Label::Positive,
            0 => Label::Negative,
            other => {
                return Err(Error::InvalidModelOutput {
                    disease,
                    class: other,
                })
            }
        };

        tracing::info!("{} prediction: {}", disease, label);
        Ok(Diagnosis { disease, label })
    }

    /// Encode a submission and run the matching model
    pub fn diagnose(&self, input: &ClinicalInput) -> Result<Diagnosis> {
        let disease = input.disease();
        let features = input.encode()?;
        tracing::debug!("Encoded {} features: {:?}", disease, features);
        self.predict(disease, &features)
    }
}
