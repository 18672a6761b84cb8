use clap::{Args, Parser, Subcommand};
use diagnosis_core::*;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "diagnose")]
#[command(about = "Disease prediction from clinical form inputs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to $XDG_CONFIG_HOME/diagnose/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override model artifact directory
    #[arg(long, global = true)]
    models_dir: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict heart disease
    Heart(HeartArgs),

    /// Predict diabetes
    Diabetes(DiabetesArgs),

    /// Predict Parkinson's disease
    Parkinsons(ParkinsonsArgs),

    /// Predict every row of a CSV file, one submission per row
    Batch {
        /// Disease the rows belong to (heart, diabetes, parkinsons)
        disease: Disease,

        /// CSV file with one column per form field
        input: PathBuf,
    },

    /// Show the ordered feature columns a model expects
    Schema {
        /// Disease to describe (heart, diabetes, parkinsons)
        disease: Disease,
    },
}

/// Heart disease form; unset fields take the form defaults
#[derive(Args)]
struct HeartArgs {
    /// Age (1-120)
    #[arg(long)]
    age: Option<u32>,

    /// Sex (male, female)
    #[arg(long)]
    sex: Option<Sex>,

    /// Resting blood pressure (80-200)
    #[arg(long, alias = "trestbps")]
    resting_bp: Option<u32>,

    /// Cholesterol (100-600)
    #[arg(long, alias = "chol")]
    cholesterol: Option<u32>,

    /// Max heart rate (60-220)
    #[arg(long, alias = "thalach")]
    max_hr: Option<u32>,

    /// Exercise induced angina (yes, no)
    #[arg(long, alias = "exang")]
    exercise_angina: Option<YesNo>,

    /// ST depression (0.0-10.0)
    #[arg(long)]
    oldpeak: Option<f64>,

    /// Number of major vessels (0-3)
    #[arg(long, alias = "ca")]
    major_vessels: Option<u32>,

    /// Chest pain type (1 typical, 2 atypical, 3 non-anginal, 4 asymptomatic)
    #[arg(long, alias = "cp")]
    chest_pain: Option<ChestPain>,

    /// Resting ECG (0 normal, 1 ST-T abnormality, 2 left ventricular hypertrophy)
    #[arg(long, alias = "restecg")]
    resting_ecg: Option<RestingEcg>,

    /// Slope of ST segment (1 upsloping, 2 flat, 3 downsloping)
    #[arg(long, alias = "slope")]
    st_slope: Option<StSlope>,

    /// Thalassemia (3 normal, 6 fixed defect, 7 reversible defect)
    #[arg(long, alias = "thal")]
    thalassemia: Option<Thalassemia>,
}

impl HeartArgs {
    fn into_input(self) -> HeartDiseaseInput {
        let base = HeartDiseaseInput::default();
        HeartDiseaseInput {
            age: self.age.unwrap_or(base.age),
            sex: self.sex.unwrap_or(base.sex),
            resting_bp: self.resting_bp.unwrap_or(base.resting_bp),
            cholesterol: self.cholesterol.unwrap_or(base.cholesterol),
            max_hr: self.max_hr.unwrap_or(base.max_hr),
            exercise_angina: self.exercise_angina.unwrap_or(base.exercise_angina),
            oldpeak: self.oldpeak.unwrap_or(base.oldpeak),
            major_vessels: self.major_vessels.unwrap_or(base.major_vessels),
            chest_pain: self.chest_pain.unwrap_or(base.chest_pain),
            resting_ecg: self.resting_ecg.unwrap_or(base.resting_ecg),
            st_slope: self.st_slope.unwrap_or(base.st_slope),
            thalassemia: self.thalassemia.unwrap_or(base.thalassemia),
        }
    }
}

/// Diabetes form; unset fields take the form defaults
#[derive(Args)]
struct DiabetesArgs {
    /// Pregnancies (0-20)
    #[arg(long)]
    pregnancies: Option<f64>,

    /// Glucose level (0-300)
    #[arg(long)]
    glucose: Option<f64>,

    /// Blood pressure (0-200)
    #[arg(long)]
    blood_pressure: Option<f64>,

    /// Skin thickness (0-100)
    #[arg(long)]
    skin_thickness: Option<f64>,

    /// Insulin level (0-1000)
    #[arg(long)]
    insulin: Option<f64>,

    /// BMI (0.0-70.0)
    #[arg(long)]
    bmi: Option<f64>,

    /// Diabetes pedigree function (0.0-5.0)
    #[arg(long)]
    pedigree_function: Option<f64>,

    /// Age (1-120)
    #[arg(long)]
    age: Option<f64>,
}

impl DiabetesArgs {
    fn into_input(self) -> DiabetesInput {
        let base = DiabetesInput::default();
        DiabetesInput {
            pregnancies: self.pregnancies.unwrap_or(base.pregnancies),
            glucose: self.glucose.unwrap_or(base.glucose),
            blood_pressure: self.blood_pressure.unwrap_or(base.blood_pressure),
            skin_thickness: self.skin_thickness.unwrap_or(base.skin_thickness),
            insulin: self.insulin.unwrap_or(base.insulin),
            bmi: self.bmi.unwrap_or(base.bmi),
            pedigree_function: self.pedigree_function.unwrap_or(base.pedigree_function),
            age: self.age.unwrap_or(base.age),
        }
    }
}

/// Parkinson's voice measurement form; unset fields take the form defaults
#[derive(Args)]
struct ParkinsonsArgs {
    /// MDVP:Fo(Hz) (0-500)
    #[arg(long)]
    fo: Option<f64>,

    /// MDVP:Fhi(Hz) (0-500)
    #[arg(long)]
    fhi: Option<f64>,

    /// MDVP:Flo(Hz) (0-500)
    #[arg(long)]
    flo: Option<f64>,

    /// MDVP:Jitter(%) (0-1)
    #[arg(long)]
    jitter_percent: Option<f64>,

    /// MDVP:Shimmer (0-1)
    #[arg(long)]
    shimmer: Option<f64>,

    /// RPDE (0-2)
    #[arg(long)]
    rpde: Option<f64>,

    /// DFA (0-2)
    #[arg(long)]
    dfa: Option<f64>,

    /// Spread1 (-10-10)
    #[arg(long, allow_negative_numbers = true)]
    spread1: Option<f64>,

    /// Spread2 (0-10)
    #[arg(long)]
    spread2: Option<f64>,

    /// D2 (0-5)
    #[arg(long)]
    d2: Option<f64>,
}

impl ParkinsonsArgs {
    fn into_input(self) -> ParkinsonsInput {
        let base = ParkinsonsInput::default();
        ParkinsonsInput {
            fo: self.fo.unwrap_or(base.fo),
            fhi: self.fhi.unwrap_or(base.fhi),
            flo: self.flo.unwrap_or(base.flo),
            jitter_percent: self.jitter_percent.unwrap_or(base.jitter_percent),
            shimmer: self.shimmer.unwrap_or(base.shimmer),
            rpde: self.rpde.unwrap_or(base.rpde),
            dfa: self.dfa.unwrap_or(base.dfa),
            spread1: self.spread1.unwrap_or(base.spread1),
            spread2: self.spread2.unwrap_or(base.spread2),
            d2: self.d2.unwrap_or(base.d2),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    diagnosis_core::logging::init_with_level(if cli.verbose { "debug" } else { "info" });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Schema needs neither config nor models
    if let Commands::Schema { disease } = cli.command {
        return cmd_schema(disease, cli.json);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.models_dir {
        config.models.dir = dir;
    }

    match cli.command {
        Commands::Heart(args) => cmd_predict(
            &config,
            ClinicalInput::Heart(args.into_input()),
            cli.json,
        ),
        Commands::Diabetes(args) => cmd_predict(
            &config,
            ClinicalInput::Diabetes(args.into_input()),
            cli.json,
        ),
        Commands::Parkinsons(args) => cmd_predict(
            &config,
            ClinicalInput::Parkinsons(args.into_input()),
            cli.json,
        ),
        Commands::Batch { disease, input } => cmd_batch(&config, disease, input, cli.json),
        Commands::Schema { disease } => cmd_schema(disease, cli.json),
    }
}

fn cmd_predict(config: &Config, input: ClinicalInput, json: bool) -> Result<()> {
    // Models load before anything else so a bad artifact fails every command
    let predictor = Predictor::load(&config.models)?;

    input.validate()?;
    let diagnosis = predictor.diagnose(&input)?;

    if json {
        println!("{}", serde_json::to_string(&diagnosis)?);
    } else {
        println!("Prediction: {}", diagnosis);
    }
    Ok(())
}

fn cmd_batch(config: &Config, disease: Disease, input: PathBuf, json: bool) -> Result<()> {
    let predictor = Predictor::load(&config.models)?;

    let file = File::open(&input)?;
    let inputs = batch::read_inputs(disease, file)?;
    tracing::info!("Read {} {} submissions from {:?}", inputs.len(), disease, input);

    let diagnoses = batch::diagnose_all(&predictor, &inputs)?;

    if json {
        println!("{}", serde_json::to_string(&diagnoses)?);
    } else {
        batch::write_diagnoses(std::io::stdout().lock(), &diagnoses)?;
    }
    Ok(())
}

fn cmd_schema(disease: Disease, json: bool) -> Result<()> {
    let schema = disease.schema();

    if json {
        println!("{}", serde_json::to_string(schema.columns)?);
        return Ok(());
    }

    println!("{} ({} features)", disease, schema.len());
    for (i, column) in schema.columns.iter().enumerate() {
        println!("  {:>2}  {}", i, column);
    }
    Ok(())
}
