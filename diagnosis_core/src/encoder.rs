//! Feature encoders: raw form values to the ordered vector each model expects.
//!
//! Output order always follows the matching schema in [`crate::schema`].

use crate::{
    ChestPain, ClinicalInput, DiabetesInput, Error, HeartDiseaseInput, ParkinsonsInput, Result,
    RestingEcg, Sex, StSlope, Thalassemia, YesNo,
};

fn indicator(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}

/// Encode a heart disease submission into its 16 feature slots
///
/// Layout: eight pass-through numerics followed by the one-hot groups
/// `cp_2..4`, `restecg_1..2`, `slope_2`, `thal_6..7`. Reference levels
/// (cp 1, restecg 0, thal 3) encode as all zeros.
///
/// Only slope level 2 has an indicator; levels 1 and 3 are indistinguishable
/// in the output. The trained model expects exactly this layout.
pub fn encode_heart(input: &HeartDiseaseInput) -> Vec<f64> {
    let cp = input.chest_pain;
    let ecg = input.resting_ecg;
    let thal = input.thalassemia;

    vec![
        f64::from(input.age),
        indicator(input.sex == Sex::Male),
        f64::from(input.resting_bp),
        f64::from(input.cholesterol),
        f64::from(input.max_hr),
        indicator(input.exercise_angina == YesNo::Yes),
        input.oldpeak,
        f64::from(input.major_vessels),
        indicator(cp == ChestPain::Atypical),
        indicator(cp == ChestPain::NonAnginal),
        indicator(cp == ChestPain::Asymptomatic),
        indicator(ecg == RestingEcg::StTAbnormality),
        indicator(ecg == RestingEcg::LeftVentricularHypertrophy),
        indicator(input.st_slope == StSlope::Flat),
        indicator(thal == Thalassemia::FixedDefect),
        indicator(thal == Thalassemia::ReversibleDefect),
    ]
}

/// `ln(1 + x)` for a named field, rejecting values outside the domain
fn log1p(field: &'static str, value: f64) -> Result<f64> {
    // -1 maps to -inf, which no model can consume
    if value.is_nan() || value <= -1.0 {
        return Err(Error::NumericDomain { field, value });
    }
    Ok(value.ln_1p())
}

/// Encode a diabetes submission into its 8 feature slots
///
/// Every field except glucose goes through `log1p`, matching the
/// preprocessing applied when the model was fitted.
pub fn encode_diabetes(input: &DiabetesInput) -> Result<Vec<f64>> {
    Ok(vec![
        log1p("pregnancies", input.pregnancies)?,
        input.glucose,
        log1p("blood_pressure", input.blood_pressure)?,
        log1p("skin_thickness", input.skin_thickness)?,
        log1p("insulin", input.insulin)?,
        log1p("bmi", input.bmi)?,
        log1p("pedigree_function", input.pedigree_function)?,
        log1p("age", input.age)?,
    ])
}

/// Encode a Parkinson's submission (identity, in schema order)
pub fn encode_parkinsons(input: &ParkinsonsInput) -> Vec<f64> {
    vec![
        input.fo,
        input.fhi,
        input.flo,
        input.jitter_percent,
        input.shimmer,
        input.rpde,
        input.dfa,
        input.spread1,
        input.spread2,
        input.d2,
    ]
}

impl ClinicalInput {
    /// Encode this submission with the encoder for its disease
    pub fn encode(&self) -> Result<Vec<f64>> {
        match self {
            ClinicalInput::Heart(input) => Ok(encode_heart(input)),
            ClinicalInput::Diabetes(input) => encode_diabetes(input),
            ClinicalInput::Parkinsons(input) => Ok(encode_parkinsons(input)),
        }
    }
}
