//! Feature schemas: the ordered column lists each model was fitted on.
//!
//! Column order is load-bearing. A vector built in any other order is still
//! accepted by the model and silently produces wrong predictions.

use crate::{Disease, Error, Result};

/// Ordered, named feature slots for one disease model
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureSchema {
    pub disease: Disease,
    pub columns: &'static [&'static str],
}

pub const HEART_DISEASE_SCHEMA: FeatureSchema = FeatureSchema {
    disease: Disease::Heart,
    columns: &[
        "age",
        "sex",
        "trestbps",
        "chol",
        "thalach",
        "exang",
        "oldpeak",
        "ca",
        "cp_2.0",
        "cp_3.0",
        "cp_4.0",
        "restecg_1.0",
        "restecg_2.0",
        "slope_2.0",
        "thal_6.0",
        "thal_7.0",
    ],
};

pub const DIABETES_SCHEMA: FeatureSchema = FeatureSchema {
    disease: Disease::Diabetes,
    columns: &[
        "Pregnancies",
        "Glucose",
        "BloodPressure",
        "SkinThickness",
        "Insulin",
        "BMI",
        "DiabetesPedigreeFunction",
        "Age",
    ],
};

pub const PARKINSONS_SCHEMA: FeatureSchema = FeatureSchema {
    disease: Disease::Parkinsons,
    columns: &[
        "MDVP:Fo(Hz)",
        "MDVP:Fhi(Hz)",
        "MDVP:Flo(Hz)",
        "MDVP:Jitter(%)",
        "MDVP:Shimmer",
        "RPDE",
        "DFA",
        "spread1",
        "spread2",
        "D2",
    ],
};

impl FeatureSchema {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Reject a vector whose length differs from this schema
    pub fn check_shape(&self, features: &[f64]) -> Result<()> {
        if features.len() != self.len() {
            return Err(Error::ShapeMismatch {
                disease: self.disease,
                expected: self.len(),
                actual: features.len(),
            });
        }
        Ok(())
    }

    /// Check that a list of column names matches this schema exactly
    pub fn matches_columns<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.len() == self.len()
            && names
                .iter()
                .zip(self.columns)
                .all(|(name, column)| name.as_ref() == *column)
    }
}

impl Disease {
    pub fn schema(self) -> &'static FeatureSchema {
        match self {
            Disease::Heart => &HEART_DISEASE_SCHEMA,
            Disease::Diabetes => &DIABETES_SCHEMA,
            Disease::Parkinsons => &PARKINSONS_SCHEMA,
        }
    }
}
