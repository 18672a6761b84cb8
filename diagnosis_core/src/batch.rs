//! CSV batch input and output.
//!
//! Each CSV row is one form submission, with headers named after the input
//! struct fields. Rows are processed strictly one after another.
//!
//! An unknown categorical label in a cell surfaces as `Error::Csv`, with the
//! `InvalidCategory` message (naming the field) embedded in the csv error.

use crate::{
    ClinicalInput, DiabetesInput, Diagnosis, Disease, Error, HeartDiseaseInput, ParkinsonsInput,
    Predictor, Result,
};
use serde::de::DeserializeOwned;
use std::io::{Read, Write};

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    row: usize,
    disease: Disease,
    label: String,
    result: String,
}

fn read_rows<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Parse every CSV row as a submission for `disease`
pub fn read_inputs<R: Read>(disease: Disease, reader: R) -> Result<Vec<ClinicalInput>> {
    let inputs = match disease {
        Disease::Heart => read_rows::<HeartDiseaseInput, _>(reader)?
            .into_iter()
            .map(ClinicalInput::Heart)
            .collect(),
        Disease::Diabetes => read_rows::<DiabetesInput, _>(reader)?
            .into_iter()
            .map(ClinicalInput::Diabetes)
            .collect(),
        Disease::Parkinsons => read_rows::<ParkinsonsInput, _>(reader)?
            .into_iter()
            .map(ClinicalInput::Parkinsons)
            .collect(),
    };
    Ok(inputs)
}

/// Validate and diagnose each submission in order
///
/// Stops at the first failing row; row numbers are 1-based.
pub fn diagnose_all(predictor: &Predictor, inputs: &[ClinicalInput]) -> Result<Vec<Diagnosis>> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            input
                .validate()
                .and_then(|_| predictor.diagnose(input))
                .map_err(|e| Error::Batch {
                    row: i + 1,
                    source: Box::new(e),
                })
        })
        .collect()
}

/// Write one CSV line per diagnosis
pub fn write_diagnoses<W: Write>(writer: W, diagnoses: &[Diagnosis]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (i, diagnosis) in diagnoses.iter().enumerate() {
        csv_writer.serialize(CsvRow {
            row: i + 1,
            disease: diagnosis.disease,
            label: diagnosis.label.to_string(),
            result: diagnosis.to_string(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChestPain, Classifier, Label, Sex, Thalassemia};

    struct GlucoseThreshold;

    impl Classifier for GlucoseThreshold {
        fn predict(&self, features: &[f64]) -> Result<u8> {
            Ok(u8::from(features[1] >= 140.0))
        }
    }

    fn predictor() -> Predictor {
        Predictor::new(
            Box::new(GlucoseThreshold),
            Box::new(GlucoseThreshold),
            Box::new(GlucoseThreshold),
        )
    }

    #[test]
    fn test_read_heart_rows() {
        let data = "\
age,sex,resting_bp,cholesterol,max_hr,exercise_angina,oldpeak,major_vessels,chest_pain,resting_ecg,st_slope,thalassemia
50,Male,120,200,150,No,1.0,0,2,0,2,3
63, female ,145,233,150,Yes,2.3,0,4: Asymptomatic,2,3,6
";
        let inputs = read_inputs(Disease::Heart, data.as_bytes()).unwrap();
        assert_eq!(inputs.len(), 2);

        match &inputs[1] {
            ClinicalInput::Heart(input) => {
                assert_eq!(input.sex, Sex::Female);
                assert_eq!(input.chest_pain, ChestPain::Asymptomatic);
                assert_eq!(input.thalassemia, Thalassemia::FixedDefect);
            }
            other => panic!("unexpected input: {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_unknown_category() {
        let data = "\
age,sex,resting_bp,cholesterol,max_hr,exercise_angina,oldpeak,major_vessels,chest_pain,resting_ecg,st_slope,thalassemia
50,Male,120,200,150,No,1.0,0,12,0,2,3
";
        let err = read_inputs(Disease::Heart, data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
        assert!(err.to_string().contains("chest_pain"));
    }

    #[test]
    fn test_diagnose_all_in_order() {
        let data = "\
pregnancies,glucose,blood_pressure,skin_thickness,insulin,bmi,pedigree_function,age
1,120,80,20,80,25.0,0.5,30
6,148,72,35,0,33.6,0.627,50
";
        let inputs = read_inputs(Disease::Diabetes, data.as_bytes()).unwrap();
        let diagnoses = diagnose_all(&predictor(), &inputs).unwrap();

        let labels: Vec<Label> = diagnoses.iter().map(|d| d.label).collect();
        assert_eq!(labels, vec![Label::Negative, Label::Positive]);
    }

    #[test]
    fn test_diagnose_all_reports_failing_row() {
        let data = "\
pregnancies,glucose,blood_pressure,skin_thickness,insulin,bmi,pedigree_function,age
1,120,80,20,80,25.0,0.5,30
1,120,80,20,80,25.0,0.5,0
";
        let inputs = read_inputs(Disease::Diabetes, data.as_bytes()).unwrap();
        let err = diagnose_all(&predictor(), &inputs).unwrap_err();

        match err {
            Error::Batch { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, Error::OutOfRange { field: "age", .. }));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_write_diagnoses() {
        let diagnoses = [
            Diagnosis {
                disease: Disease::Parkinsons,
                label: Label::Positive,
            },
            Diagnosis {
                disease: Disease::Parkinsons,
                label: Label::Negative,
            },
        ];
        let mut out = Vec::new();
        write_diagnoses(&mut out, &diagnoses).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "row,disease,label,result");
        assert_eq!(lines[1], "1,parkinsons,Positive,Positive (Parkinson's)");
        assert_eq!(lines[2], "2,parkinsons,Negative,Negative (No Parkinson's)");
    }
}
