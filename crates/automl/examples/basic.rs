//! Basic example demonstrating AutoML features
//!
//! Run with: cargo run --example basic -p automl

use automl::prelude::*;
use data_spi::{Dataset, Schema, SensorSample};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== automl Basic Examples ===\n");

    // 1. Trainer catalogue
    println!("1. Available Trainers");
    for kind in TrainerKind::catalogue() {
        println!("   {}", kind);
    }
    println!();

    // 2. A small labeled dataset
    let mut samples = Vec::new();
    for i in 0..20 {
        let j = i as f32;
        samples.push(SensorSample::new(880.0 + j, 21.0, 6.0, "Day"));
        samples.push(SensorSample::new(60.0 + j, 29.0, 55.0 + j, "Lamp"));
        samples.push(SensorSample::new(2.0, 17.0, 1.0 + j * 0.05, "Dark"));
    }
    let data = Dataset::new(Schema::sensor(), samples);

    // 3. Time-boxed search
    println!("2. AutoML Search");
    let automl = AutoML::new(AutoMLConfig::default().time_budget_secs(5).max_trials(10));
    let result = automl.execute(&data, &mut |trial| match &trial.validation_metrics {
        Some(m) => println!("   {:<35} micro={:.4}", trial.trainer_name, m.micro_accuracy),
        None => println!("   {:<35} failed", trial.trainer_name),
    })?;
    println!();

    // 4. Best model
    if let Some(best) = result.best_run() {
        println!("3. Best Trainer: {}", best.trial.trainer);
        if let Some(model) = &best.model {
            let label = model.predict(&SensorSample::unlabeled(70.0, 29.0, 60.0))?;
            println!("   Prediction for (70, 29, 60): {}", label);
        }
    }

    // 5. Cross-validation
    println!("\n4. Cross-Validation (NaiveBayes, 4 folds)");
    let folds = cross_validate(&PipelineBuilder::sensor_default(TrainerKind::NaiveBayes), &data, 4, 1)?;
    for fold in &folds {
        println!("   fold {}: micro={:.4}", fold.fold, fold.metrics.micro_accuracy);
    }

    Ok(())
}
