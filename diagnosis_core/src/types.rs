//! Core domain types for the disease prediction system.
//!
//! This module defines:
//! - Diseases, labels, and the rendered diagnosis
//! - Categorical form fields as explicit enumerated types
//! - Raw input structs, one per disease form

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Disease and Outcome Types
// ============================================================================

/// One of the three independent diagnostic questions
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Heart,
    Diabetes,
    Parkinsons,
}

impl Disease {
    pub const ALL: [Disease; 3] = [Disease::Heart, Disease::Diabetes, Disease::Parkinsons];

    /// Human-readable name, as shown on the form
    pub fn name(self) -> &'static str {
        match self {
            Disease::Heart => "Heart Disease",
            Disease::Diabetes => "Diabetes",
            Disease::Parkinsons => "Parkinson's",
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Disease {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "heart" | "heart disease" => Ok(Disease::Heart),
            "diabetes" => Ok(Disease::Diabetes),
            "parkinsons" | "parkinson's" => Ok(Disease::Parkinsons),
            _ => Err(Error::InvalidCategory {
                field: "disease",
                value: s.to_string(),
            }),
        }
    }
}

/// Binary classifier outcome
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Positive,
    Negative,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Positive => f.write_str("Positive"),
            Label::Negative => f.write_str("Negative"),
        }
    }
}

/// The only data handed to the result renderer
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnosis {
    pub disease: Disease,
    pub label: Label,
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Label::Positive => write!(f, "Positive ({})", self.disease),
            Label::Negative => write!(f, "Negative (No {})", self.disease),
        }
    }
}

// ============================================================================
// Categorical Form Fields
// ============================================================================

/// Match a raw form value against a level table by equality.
///
/// Accepts the level code ("2"), the full form label ("2: Atypical") or the
/// bare level name ("atypical"), case-insensitively.
fn parse_level<T: Copy>(field: &'static str, raw: &str, levels: &[(T, u8, &str)]) -> Result<T> {
    let wanted = raw.trim().to_lowercase();
    levels
        .iter()
        .find(|(_, code, name)| {
            let name = name.to_lowercase();
            wanted == code.to_string() || wanted == name || wanted == format!("{}: {}", code, name)
        })
        .map(|(level, _, _)| *level)
        .ok_or_else(|| Error::InvalidCategory {
            field,
            value: raw.to_string(),
        })
}

/// Biological sex as collected by the heart disease form
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            _ => Err(Error::InvalidCategory {
                field: "sex",
                value: s.to_string(),
            }),
        }
    }
}

/// Yes/No answer (exercise-induced angina)
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum YesNo {
    Yes,
    No,
}

impl FromStr for YesNo {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Ok(YesNo::Yes),
            "no" => Ok(YesNo::No),
            _ => Err(Error::InvalidCategory {
                field: "exercise_angina",
                value: s.to_string(),
            }),
        }
    }
}

/// Chest pain type, levels 1-4 (1 is the reference level)
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum ChestPain {
    Typical,
    Atypical,
    NonAnginal,
    Asymptomatic,
}

impl ChestPain {
    pub const LEVELS: [(ChestPain, u8, &'static str); 4] = [
        (ChestPain::Typical, 1, "Typical"),
        (ChestPain::Atypical, 2, "Atypical"),
        (ChestPain::NonAnginal, 3, "Non-anginal"),
        (ChestPain::Asymptomatic, 4, "Asymptomatic"),
    ];
}

impl FromStr for ChestPain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_level("chest_pain", s, &Self::LEVELS)
    }
}

/// Resting ECG result, levels 0-2 (0 is the reference level)
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum RestingEcg {
    Normal,
    StTAbnormality,
    LeftVentricularHypertrophy,
}

impl RestingEcg {
    pub const LEVELS: [(RestingEcg, u8, &'static str); 3] = [
        (RestingEcg::Normal, 0, "Normal"),
        (RestingEcg::StTAbnormality, 1, "ST-T Abnormality"),
        (
            RestingEcg::LeftVentricularHypertrophy,
            2,
            "Left Ventricular Hypertrophy",
        ),
    ];
}

impl FromStr for RestingEcg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_level("resting_ecg", s, &Self::LEVELS)
    }
}

/// Slope of the peak exercise ST segment, levels 1-3
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum StSlope {
    Upsloping,
    Flat,
    Downsloping,
}

impl StSlope {
    pub const LEVELS: [(StSlope, u8, &'static str); 3] = [
        (StSlope::Upsloping, 1, "Upsloping"),
        (StSlope::Flat, 2, "Flat"),
        (StSlope::Downsloping, 3, "Downsloping"),
    ];
}

impl FromStr for StSlope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_level("st_slope", s, &Self::LEVELS)
    }
}

/// Thalassemia category, levels 3, 6, 7 (3 is the reference level)
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(try_from = "String")]
pub enum Thalassemia {
    Normal,
    FixedDefect,
    ReversibleDefect,
}

impl Thalassemia {
    pub const LEVELS: [(Thalassemia, u8, &'static str); 3] = [
        (Thalassemia::Normal, 3, "Normal"),
        (Thalassemia::FixedDefect, 6, "Fixed Defect"),
        (Thalassemia::ReversibleDefect, 7, "Reversible Defect"),
    ];
}

impl FromStr for Thalassemia {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_level("thalassemia", s, &Self::LEVELS)
    }
}

// serde `try_from = "String"` glue for the categorical fields
macro_rules! try_from_string {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = Error;

                fn try_from(value: String) -> Result<Self> {
                    value.parse()
                }
            }
        )*
    };
}

try_from_string!(Sex, YesNo, ChestPain, RestingEcg, StSlope, Thalassemia);

// ============================================================================
// Raw Form Inputs
// ============================================================================

/// Raw heart disease form values
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeartDiseaseInput {
    pub age: u32,
    pub sex: Sex,
    pub resting_bp: u32,
    pub cholesterol: u32,
    pub max_hr: u32,
    pub exercise_angina: YesNo,
    pub oldpeak: f64,
    pub major_vessels: u32,
    pub chest_pain: ChestPain,
    pub resting_ecg: RestingEcg,
    pub st_slope: StSlope,
    pub thalassemia: Thalassemia,
}

impl Default for HeartDiseaseInput {
    fn default() -> Self {
        Self {
            age: 50,
            sex: Sex::Male,
            resting_bp: 120,
            cholesterol: 200,
            max_hr: 150,
            exercise_angina: YesNo::No,
            oldpeak: 1.0,
            major_vessels: 0,
            chest_pain: ChestPain::Typical,
            resting_ecg: RestingEcg::Normal,
            st_slope: StSlope::Upsloping,
            thalassemia: Thalassemia::Normal,
        }
    }
}

/// Raw diabetes form values
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DiabetesInput {
    pub pregnancies: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub pedigree_function: f64,
    pub age: f64,
}

impl Default for DiabetesInput {
    fn default() -> Self {
        Self {
            pregnancies: 1.0,
            glucose: 120.0,
            blood_pressure: 80.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 25.0,
            pedigree_function: 0.5,
            age: 30.0,
        }
    }
}

/// Raw Parkinson's voice-measurement form values
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ParkinsonsInput {
    pub fo: f64,
    pub fhi: f64,
    pub flo: f64,
    pub jitter_percent: f64,
    pub shimmer: f64,
    pub rpde: f64,
    pub dfa: f64,
    pub spread1: f64,
    pub spread2: f64,
    pub d2: f64,
}

impl Default for ParkinsonsInput {
    fn default() -> Self {
        Self {
            fo: 150.0,
            fhi: 200.0,
            flo: 100.0,
            jitter_percent: 0.01,
            shimmer: 0.01,
            rpde: 0.5,
            dfa: 0.5,
            spread1: -4.0,
            spread2: 3.0,
            d2: 2.0,
        }
    }
}

/// A single form submission for any of the three diseases
#[derive(Clone, Debug, PartialEq)]
pub enum ClinicalInput {
    Heart(HeartDiseaseInput),
    Diabetes(DiabetesInput),
    Parkinsons(ParkinsonsInput),
}

impl ClinicalInput {
    pub fn disease(&self) -> Disease {
        match self {
            ClinicalInput::Heart(_) => Disease::Heart,
            ClinicalInput::Diabetes(_) => Disease::Diabetes,
            ClinicalInput::Parkinsons(_) => Disease::Parkinsons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chest_pain_parses_by_equality() {
        assert_eq!("2".parse::<ChestPain>().unwrap(), ChestPain::Atypical);
        assert_eq!("2: Atypical".parse::<ChestPain>().unwrap(), ChestPain::Atypical);
        assert_eq!("non-anginal".parse::<ChestPain>().unwrap(), ChestPain::NonAnginal);
        assert_eq!(" 4 ".parse::<ChestPain>().unwrap(), ChestPain::Asymptomatic);
    }

    #[test]
    fn test_no_substring_collisions() {
        // "12" contains "1" and "2" but is not a level
        let err = "12".parse::<ChestPain>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCategory { field: "chest_pain", .. }
        ));
        assert!("1: Typical pain".parse::<ChestPain>().is_err());
        assert!("0".parse::<ChestPain>().is_err());
    }

    #[test]
    fn test_unknown_levels_rejected() {
        assert!("5".parse::<Thalassemia>().is_err());
        assert!("3".parse::<RestingEcg>().is_err());
        assert!("0".parse::<StSlope>().is_err());
        assert!("other".parse::<Sex>().is_err());
        assert!("maybe".parse::<YesNo>().is_err());
    }

    #[test]
    fn test_thalassemia_codes() {
        assert_eq!("3".parse::<Thalassemia>().unwrap(), Thalassemia::Normal);
        assert_eq!("6".parse::<Thalassemia>().unwrap(), Thalassemia::FixedDefect);
        assert_eq!(
            "7: Reversible Defect".parse::<Thalassemia>().unwrap(),
            Thalassemia::ReversibleDefect
        );
    }

    #[test]
    fn test_disease_parse_and_display() {
        assert_eq!("heart".parse::<Disease>().unwrap(), Disease::Heart);
        assert_eq!("Parkinson's".parse::<Disease>().unwrap(), Disease::Parkinsons);
        assert_eq!(Disease::Diabetes.to_string(), "Diabetes");
        assert!("cancer".parse::<Disease>().is_err());
    }

    #[test]
    fn test_diagnosis_display() {
        let positive = Diagnosis {
            disease: Disease::Heart,
            label: Label::Positive,
        };
        let negative = Diagnosis {
            disease: Disease::Parkinsons,
            label: Label::Negative,
        };
        assert_eq!(positive.to_string(), "Positive (Heart Disease)");
        assert_eq!(negative.to_string(), "Negative (No Parkinson's)");
    }

    #[test]
    fn test_diagnosis_json() {
        let diagnosis = Diagnosis {
            disease: Disease::Diabetes,
            label: Label::Positive,
        };
        let json = serde_json::to_string(&diagnosis).unwrap();
        assert_eq!(json, r#"{"disease":"diabetes","label":"positive"}"#);
    }
}
