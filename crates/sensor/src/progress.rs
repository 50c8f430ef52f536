//! Per-trial progress output during an AutoML search.

use std::io::Write;

use automl::TrialResult;

use crate::report::{log_write_error, ReportPrinter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    NotStarted,
    Reporting,
}

/// Prints the table header before the first trial, then one line per trial.
pub struct ProgressReporter<'a, W: Write> {
    printer: &'a mut ReportPrinter<W>,
    state: ProgressState,
    count: usize,
}

impl<'a, W: Write> ProgressReporter<'a, W> {
    pub fn new(printer: &'a mut ReportPrinter<W>) -> Self {
        Self {
            printer,
            state: ProgressState::NotStarted,
            count: 0,
        }
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    /// Trials reported so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn report(&mut self, trial: &TrialResult) {
        if self.state == ProgressState::NotStarted {
            log_write_error(self.printer.print_header());
            self.state = ProgressState::Reporting;
        }
        self.count += 1;

        match &trial.failure {
            Some(error) => log_write_error(self.printer.print_trial_failure(error)),
            None => log_write_error(self.printer.print_row(
                self.count,
                &trial.trainer_name,
                trial.validation_metrics.as_ref(),
                trial.runtime_seconds,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use automl::{AutoMLError, MetricSet, TrainerKind};

    fn ok_trial() -> TrialResult {
        TrialResult::succeeded(
            TrainerKind::linear_svm(),
            MetricSet {
                micro_accuracy: 0.9,
                macro_accuracy: 0.85,
                log_loss: 0.2,
                log_loss_reduction: 0.7,
            },
            0.4,
        )
    }

    #[test]
    fn test_header_once_and_counter() {
        let mut printer = ReportPrinter::new(Vec::new());
        {
            let mut reporter = ProgressReporter::new(&mut printer);
            assert_eq!(reporter.state(), ProgressState::NotStarted);
            reporter.report(&ok_trial());
            reporter.report(&ok_trial());
            assert_eq!(reporter.state(), ProgressState::Reporting);
            assert_eq!(reporter.count(), 2);
        }
        let out = String::from_utf8(printer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Trainer"));
        assert!(lines[1].starts_with("  1    LinearSvmOva"));
        assert!(lines[2].starts_with("  2    LinearSvmOva"));
    }

    #[test]
    fn test_failed_trial_has_no_row() {
        let mut printer = ReportPrinter::new(Vec::new());
        {
            let mut reporter = ProgressReporter::new(&mut printer);
            reporter.report(&TrialResult::failed(
                TrainerKind::NaiveBayes,
                AutoMLError::NumericalError("nan".to_string()),
                0.1,
            ));
            reporter.report(&ok_trial());
            assert_eq!(reporter.count(), 2);
        }
        let out = String::from_utf8(printer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Exception during AutoML iteration: Numerical error: nan"));
        assert!(lines[2].starts_with("  2    LinearSvmOva"));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_errors_do_not_panic() {
        let mut printer = ReportPrinter::new(Broken);
        let mut reporter = ProgressReporter::new(&mut printer);
        reporter.report(&ok_trial());
        assert_eq!(reporter.count(), 1);
    }
}
