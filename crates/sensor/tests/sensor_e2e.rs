//! End-to-end tests for the sensor service
//!
//! Each test writes CSV fixtures to a temporary directory and drives the
//! service through its public API.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

use automl::OptimizationMetric;
use sensor::{ModelService, SensorConfig, TrainingError};
use tempfile::TempDir;

const LABELS: [&str; 3] = ["Day", "Lamp", "Dark"];

/// Captures report output for assertions.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Rows in file order: Temperature, Luminosity, Infrared, Distance, Label.
fn write_csv(path: &Path, per_class: usize, offset: f32) {
    let mut text = String::from("Temperature,Luminosity,Infrared,Distance,Label\n");
    for i in 0..per_class {
        let j = i as f32 * 0.5 + offset;
        text.push_str(&format!("{},{},{},10,Day\n", 20.0 + j * 0.1, 900.0 + j, 5.0 + j * 0.1));
        text.push_str(&format!("{},{},{},25,Lamp\n", 30.0 + j * 0.1, 50.0 + j, 60.0 + j));
        text.push_str(&format!("{},{},{},3,Dark\n", 18.0 + j * 0.1, 5.0 + j * 0.1, 1.0 + j * 0.1));
    }
    fs::write(path, text).unwrap();
}

fn fixture() -> (TempDir, SensorConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = SensorConfig {
        training_csv: dir.path().join("training.csv"),
        testing_csv: dir.path().join("testing.csv"),
        model_path: dir.path().join("model.json"),
        experiment_seconds: 60,
        max_trials: 5,
        color: false,
        ..SensorConfig::default()
    };
    write_csv(&config.training_csv, 20, 0.0);
    write_csv(&config.testing_csv, 5, 0.25);
    (dir, config)
}

fn service(config: &SensorConfig) -> (ModelService, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let service = ModelService::new(config.clone()).with_output(Box::new(buffer.clone()));
    (service, buffer)
}

// ========== Manual training ==========

#[test]
fn e2e_train_separable_data_is_perfect() {
    let (_dir, config) = fixture();
    let (service, output) = service(&config);

    assert_eq!(service.predict(905.0, 20.5, 5.5), "");

    let metrics = service.train().unwrap();
    assert_eq!(metrics.micro_accuracy, 1.0);
    assert_eq!(metrics.macro_accuracy, 1.0);
    assert!(config.model_path.exists());

    assert_eq!(service.predict(905.0, 20.5, 5.5), "Day");
    assert_eq!(service.predict(55.0, 30.5, 62.0), "Lamp");
    assert_eq!(service.predict(6.0, 18.2, 1.1), "Dark");

    let report = output.contents();
    assert!(report.contains("TRAINING USING: AveragedPerceptronOva"));
    assert!(report.contains("MicroAccuracy    = 1.000"));
}

#[test]
fn e2e_degenerate_reading_predicts_nothing() {
    let (_dir, config) = fixture();
    let (service, _) = service(&config);
    service.train().unwrap();

    assert_eq!(service.predict(f32::NAN, 20.5, 5.5), "");
    assert_eq!(service.predict(905.0, 20.5, 5.5), "Day");
}

#[test]
fn e2e_train_is_deterministic() {
    let (_dir, config) = fixture();
    let (first, _) = service(&config);
    let (second, _) = service(&config);
    first.train().unwrap();
    second.train().unwrap();
    assert_eq!(*first.current_model().unwrap(), *second.current_model().unwrap());
}

#[test]
fn e2e_failed_train_keeps_previous_model() {
    let (_dir, config) = fixture();
    let (service, _) = service(&config);
    service.train().unwrap();
    let before = service.current_model().unwrap();
    let archive_before = fs::read(&config.model_path).unwrap();

    fs::remove_file(&config.training_csv).unwrap();
    let err = service.train().unwrap_err();
    assert!(matches!(err, TrainingError::DataLoad(_)));

    assert!(Arc::ptr_eq(&before, &service.current_model().unwrap()));
    assert_eq!(fs::read(&config.model_path).unwrap(), archive_before);
}

#[test]
fn e2e_unwritable_archive_keeps_previous_model() {
    let (_dir, config) = fixture();
    let (service, _) = service(&config);
    service.train().unwrap();
    let before = service.current_model().unwrap();

    fs::remove_file(&config.model_path).unwrap();
    fs::create_dir(&config.model_path).unwrap();
    let err = service.train().unwrap_err();
    assert!(matches!(err, TrainingError::Persistence(_)));
    assert!(!err.to_string().contains("Persistence failed: Persistence failed"));

    assert!(Arc::ptr_eq(&before, &service.current_model().unwrap()));
    assert!(config.model_path.is_dir());
    assert!(!config.model_path.with_file_name("model.json.tmp").exists());
}

#[test]
fn e2e_single_label_fails_without_model() {
    let (_dir, config) = fixture();
    fs::write(
        &config.training_csv,
        "Temperature,Luminosity,Infrared,Distance,Label\n20,900,5,10,Day\n21,910,6,10,Day\n",
    )
    .unwrap();
    let (service, _) = service(&config);

    let err = service.train().unwrap_err();
    assert!(matches!(err, TrainingError::Fit { .. }));
    assert!(!service.has_model());
    assert!(!config.model_path.exists());
    assert_eq!(service.predict(900.0, 20.0, 5.0), "");
}

#[test]
fn e2e_cross_validation_report() {
    let (_dir, config) = fixture();
    let (service, output) = service(&config);

    let folds = service.cross_validate(3).unwrap();
    assert_eq!(folds.len(), 3);
    assert!(output
        .contents()
        .contains("Metrics for multi-class Classification model using cross validation"));
    assert!(!service.has_model());
}

// ========== AutoML ==========

#[test]
fn e2e_auto_train_selects_and_persists() {
    let (_dir, config) = fixture();
    let (service, output) = service(&config);

    let metrics = service.auto_train().unwrap();
    assert!(metrics.micro_accuracy >= 0.9);
    assert!(service.has_model());
    assert!(config.model_path.exists());

    let report = output.contents();
    assert!(report.contains("AutoML multiclass classification experiment for 60 seconds"));
    assert!(report.contains("Top Trainer (by micro_accuracy)"));
    assert!(report.contains("TRAINING USING:"));
    assert!(LABELS.contains(&service.predict(905.0, 20.5, 5.5).as_str()));
}

#[test]
fn e2e_auto_train_with_other_metric() {
    let (_dir, config) = fixture();
    let (service, output) = service(&config);

    service.auto_train_with(60, OptimizationMetric::LogLoss).unwrap();
    assert!(output.contents().contains("Top Trainer (by log_loss)"));
}

#[test]
fn e2e_auto_train_single_label_has_no_viable_model() {
    let (_dir, config) = fixture();
    fs::write(
        &config.training_csv,
        "Temperature,Luminosity,Infrared,Distance,Label\n20,900,5,10,Day\n21,910,6,10,Day\n22,920,7,10,Day\n",
    )
    .unwrap();
    let (service, _) = service(&config);

    let err = service.auto_train().unwrap_err();
    assert!(matches!(err, TrainingError::NoViableModel(_)));
    assert!(!service.has_model());
}

// ========== Persistence ==========

#[test]
fn e2e_restore_after_restart() {
    let (_dir, config) = fixture();
    let (trained, _) = service(&config);
    trained.train().unwrap();
    let expected = trained.predict(55.0, 30.5, 62.0);

    let (restarted, _) = service(&config);
    assert!(restarted.restore().unwrap());
    assert_eq!(restarted.predict(55.0, 30.5, 62.0), expected);
}

#[test]
fn e2e_restore_without_archive() {
    let (_dir, config) = fixture();
    let (service, _) = service(&config);
    assert!(!service.restore().unwrap());
    assert!(!service.has_model());
}

#[test]
fn e2e_restore_corrupt_archive() {
    let (_dir, config) = fixture();
    fs::write(&config.model_path, "not json").unwrap();
    let (service, _) = service(&config);
    assert!(matches!(
        service.restore().unwrap_err(),
        TrainingError::Persistence(_)
    ));
}

// ========== Concurrency ==========

#[test]
fn e2e_predictions_during_training() {
    let (_dir, config) = fixture();
    let (service, _) = service(&config);
    let service = Arc::new(service);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..200 {
                    let label = service.predict(55.0, 30.5, 62.0);
                    assert!(label.is_empty() || LABELS.contains(&label.as_str()), "{}", label);
                }
            })
        })
        .collect();

    let trainers: Vec<_> = (0..3).map(|_| service.spawn_train().unwrap()).collect();
    for handle in trainers {
        assert_eq!(handle.join().unwrap().unwrap().micro_accuracy, 1.0);
    }
    for handle in readers {
        handle.join().unwrap();
    }
    assert_eq!(service.predict(55.0, 30.5, 62.0), "Lamp");
}
