//! # sensor-cli
//!
//! Command-line interface for the sensor light-source classifier.

use std::path::PathBuf;

use automl::{OptimizationMetric, TrainerKind};
use clap::{Parser, Subcommand};
use sensor::{ModelService, SensorConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "sensor")]
#[command(about = "Light-source classification from sensor readings", long_about = None)]
struct Cli {
    /// Training CSV (overrides SENSOR_TRAINING_CSV)
    #[arg(long, global = true)]
    training: Option<PathBuf>,

    /// Testing CSV (overrides SENSOR_TESTING_CSV)
    #[arg(long, global = true)]
    testing: Option<PathBuf>,

    /// Model archive path (overrides SENSOR_MODEL_PATH)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Seed for splits and training (overrides SENSOR_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable coloured reports
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train the fixed pipeline with one trainer
    Train {
        /// Trainer (averaged_perceptron, linear_svm, logistic_regression, maximum_entropy, naive_bayes)
        #[arg(short, long)]
        trainer: Option<String>,
    },

    /// Search trainers for a fixed time budget and keep the best
    AutoTrain {
        /// Time budget in seconds
        #[arg(short, long)]
        seconds: Option<u64>,

        /// Primary metric (micro_accuracy, macro_accuracy, log_loss, log_loss_reduction)
        #[arg(short, long)]
        metric: Option<String>,

        /// Maximum number of trials
        #[arg(long)]
        max_trials: Option<usize>,
    },

    /// Predict the light source with the saved model
    Predict {
        #[arg(short, long)]
        luminosity: f32,

        #[arg(short, long, allow_negative_numbers = true)]
        temperature: f32,

        #[arg(short, long)]
        infrared: f32,
    },

    /// Cross-validate the fixed pipeline on the training set
    CrossValidate {
        /// Number of folds
        #[arg(short, long)]
        folds: Option<usize>,

        /// Trainer to cross-validate
        #[arg(short, long)]
        trainer: Option<String>,
    },

    /// Print the effective configuration as JSON
    Config,
}

fn parse_trainer(name: &str) -> CliResult<TrainerKind> {
    name.parse().map_err(|e: automl::AutoMLError| e.to_string())
}

fn parse_metric(name: &str) -> CliResult<OptimizationMetric> {
    name.parse().map_err(|e: automl::AutoMLError| e.to_string())
}

/// Environment settings with global flags applied on top.
fn load_config(cli: &Cli) -> SensorConfig {
    let mut config = SensorConfig::from_env();
    if let Some(path) = &cli.training {
        config.training_csv = path.clone();
    }
    if let Some(path) = &cli.testing {
        config.testing_csv = path.clone();
    }
    if let Some(path) = &cli.model {
        config.model_path = path.clone();
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.no_color {
        config.color = false;
    }
    config
}

fn run_train(mut config: SensorConfig, trainer: Option<String>) -> CliResult<()> {
    if let Some(name) = trainer {
        config.trainer = parse_trainer(&name)?;
    }
    let service = ModelService::new(config);
    service.train().map_err(|e| e.to_string())?;
    println!("Model saved to {}", service.config().model_path.display());
    Ok(())
}

fn run_auto_train(
    mut config: SensorConfig,
    seconds: Option<u64>,
    metric: Option<String>,
    max_trials: Option<usize>,
) -> CliResult<()> {
    if let Some(seconds) = seconds {
        config.experiment_seconds = seconds;
    }
    if let Some(name) = metric {
        config.primary_metric = parse_metric(&name)?;
    }
    if let Some(max_trials) = max_trials {
        config.max_trials = max_trials;
    }
    let service = ModelService::new(config);
    service.auto_train().map_err(|e| e.to_string())?;
    println!("Model saved to {}", service.config().model_path.display());
    Ok(())
}

fn run_predict(config: SensorConfig, luminosity: f32, temperature: f32, infrared: f32) -> CliResult<()> {
    let service = ModelService::new(config);
    if !service.restore().map_err(|e| e.to_string())? {
        return Err(format!(
            "No saved model at {}; run `sensor train` or `sensor auto-train` first",
            service.config().model_path.display()
        ));
    }
    println!("{}", service.predict(luminosity, temperature, infrared));
    Ok(())
}

fn run_cross_validate(
    mut config: SensorConfig,
    folds: Option<usize>,
    trainer: Option<String>,
) -> CliResult<()> {
    if let Some(name) = trainer {
        config.trainer = parse_trainer(&name)?;
    }
    let folds = folds.unwrap_or(config.cv_folds);
    let service = ModelService::new(config);
    service.cross_validate(folds).map_err(|e| e.to_string())?;
    Ok(())
}

fn run_config(config: &SensorConfig) -> CliResult<()> {
    let json = serde_json::to_string_pretty(config).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sensor=info,automl_core=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    let result = match cli.command {
        Commands::Train { trainer } => run_train(config, trainer),
        Commands::AutoTrain {
            seconds,
            metric,
            max_trials,
        } => run_auto_train(config, seconds, metric, max_trials),
        Commands::Predict {
            luminosity,
            temperature,
            infrared,
        } => run_predict(config, luminosity, temperature, infrared),
        Commands::CrossValidate { folds, trainer } => run_cross_validate(config, folds, trainer),
        Commands::Config => run_config(&config),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
