//! Form-level range checks applied by the input collector.
//!
//! Encoders do not depend on these checks; they only keep out-of-range
//! values from reaching a model that never saw them in training.

use crate::{ClinicalInput, DiabetesInput, Error, HeartDiseaseInput, ParkinsonsInput, Result};

/// Inclusive range for a single numeric form field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRange {
    pub field: &'static str,
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    const fn new(field: &'static str, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    pub fn check(&self, value: f64) -> Result<()> {
        if value.is_nan() || value < self.min || value > self.max {
            return Err(Error::OutOfRange {
                field: self.field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

pub const HEART_RANGES: [FieldRange; 6] = [
    FieldRange::new("age", 1.0, 120.0),
    FieldRange::new("resting_bp", 80.0, 200.0),
    FieldRange::new("cholesterol", 100.0, 600.0),
    FieldRange::new("max_hr", 60.0, 220.0),
    FieldRange::new("oldpeak", 0.0, 10.0),
    FieldRange::new("major_vessels", 0.0, 3.0),
];

pub const DIABETES_RANGES: [FieldRange; 8] = [
    FieldRange::new("pregnancies", 0.0, 20.0),
    FieldRange::new("glucose", 0.0, 300.0),
    FieldRange::new("blood_pressure", 0.0, 200.0),
    FieldRange::new("skin_thickness", 0.0, 100.0),
    FieldRange::new("insulin", 0.0, 1000.0),
    FieldRange::new("bmi", 0.0, 70.0),
    FieldRange::new("pedigree_function", 0.0, 5.0),
    FieldRange::new("age", 1.0, 120.0),
];

pub const PARKINSONS_RANGES: [FieldRange; 10] = [
    FieldRange::new("fo", 0.0, 500.0),
    FieldRange::new("fhi", 0.0, 500.0),
    FieldRange::new("flo", 0.0, 500.0),
    FieldRange::new("jitter_percent", 0.0, 1.0),
    FieldRange::new("shimmer", 0.0, 1.0),
    FieldRange::new("rpde", 0.0, 2.0),
    FieldRange::new("dfa", 0.0, 2.0),
    FieldRange::new("spread1", -10.0, 10.0),
    FieldRange::new("spread2", 0.0, 10.0),
    FieldRange::new("d2", 0.0, 5.0),
];

fn check_all(ranges: &[FieldRange], values: &[f64]) -> Result<()> {
    ranges
        .iter()
        .zip(values)
        .try_for_each(|(range, value)| range.check(*value))
}

impl HeartDiseaseInput {
    pub fn validate(&self) -> Result<()> {
        check_all(
            &HEART_RANGES,
            &[
                f64::from(self.age),
                f64::from(self.resting_bp),
                f64::from(self.cholesterol),
                f64::from(self.max_hr),
                self.oldpeak,
                f64::from(self.major_vessels),
            ],
        )
    }
}

impl DiabetesInput {
    pub fn validate(&self) -> Result<()> {
        check_all(
            &DIABETES_RANGES,
            &[
                self.pregnancies,
                self.glucose,
                self.blood_pressure,
                self.skin_thickness,
                self.insulin,
                self.bmi,
                self.pedigree_function,
                self.age,
            ],
        )
    }
}

impl ParkinsonsInput {
    pub fn validate(&self) -> Result<()> {
        check_all(
            &PARKINSONS_RANGES,
            &[
                self.fo,
                self.fhi,
                self.flo,
                self.jitter_percent,
                self.shimmer,
                self.rpde,
                self.dfa,
                self.spread1,
                self.spread2,
                self.d2,
            ],
        )
    }
}

impl ClinicalInput {
    pub fn validate(&self) -> Result<()> {
        match self {
            ClinicalInput::Heart(input) => input.validate(),
            ClinicalInput::Diabetes(input) => input.validate(),
            ClinicalInput::Parkinsons(input) => input.validate(),
        }
    }
}
