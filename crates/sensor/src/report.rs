//! Console report formatting for training runs.

use std::fmt::Display;
use std::io::{self, Write};

use automl::{MetricSet, OptimizationMetric, TrialResult};
use crossterm::style::{style, Stylize};

use crate::stats::FoldStatistic;

pub use crossterm::style::Color;

/// Report line width; table rows are padded to `WIDTH - 2`.
pub const WIDTH: usize = 114;

const REPORT_COLOR: Color = Color::Yellow;
const FRAME: &str = "**********************************************************************************";

/// Writes training reports to any sink, optionally with ANSI colour.
pub struct ReportPrinter<W: Write> {
    sink: W,
    color: bool,
}

impl<W: Write> ReportPrinter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    pub fn write_line_color(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.color {
            writeln!(self.sink, "{}", style(text).with(color))
        } else {
            writeln!(self.sink, "{}", text)
        }
    }

    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.sink, "{}", text)
    }

    fn row(&mut self, text: &str) -> io::Result<()> {
        self.write_line_color(&format!("{:<width$}", text, width = WIDTH - 2), REPORT_COLOR)
    }

    pub fn print_header(&mut self) -> io::Result<()> {
        self.row(&format!(
            "  {:<4} {:<35} {:>14} {:>14} {:>9}",
            "No", "Trainer", "MicroAccuracy", "MacroAccuracy", "Duration"
        ))
    }

    /// One table row; absent metrics print as NaN.
    pub fn print_row(
        &mut self,
        index: usize,
        trainer_name: &str,
        metrics: Option<&MetricSet>,
        runtime_seconds: f64,
    ) -> io::Result<()> {
        let micro = metrics.map_or(f64::NAN, |m| m.micro_accuracy);
        let macro_ = metrics.map_or(f64::NAN, |m| m.macro_accuracy);
        self.row(&format!(
            "  {:<4} {:<35} {:>14.4} {:>14.4} {:>9.1}",
            index, trainer_name, micro, macro_, runtime_seconds
        ))
    }

    pub fn print_trial_failure(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.sink, "Exception during AutoML iteration: {}", error)
    }

    /// The best `k` viable trials by `metric`, ranked from 1.
    ///
    /// Trials that failed, lack metrics, or have a NaN `metric` are skipped.
    /// Equal values keep their trial order. The header is printed even when
    /// no trial qualifies.
    pub fn print_top_runs(
        &mut self,
        results: &[TrialResult],
        metric: OptimizationMetric,
        k: usize,
    ) -> io::Result<()> {
        self.print_header()?;
        for (rank, trial) in top_runs(results, metric, k).into_iter().enumerate() {
            self.print_row(
                rank + 1,
                &trial.trainer_name,
                trial.validation_metrics.as_ref(),
                trial.runtime_seconds,
            )?;
        }
        Ok(())
    }

    pub fn print_metrics(&mut self, name: &str, metrics: &MetricSet) -> io::Result<()> {
        let lines = [
            FRAME.to_string(),
            format!("  Metrics for {} multi-class classification model", name),
            FRAME.to_string(),
            format!(
                "  MicroAccuracy    = {:.3} (the closer to 1, the better)",
                metrics.micro_accuracy
            ),
            format!(
                "  MacroAccuracy    = {:.3} (the closer to 1, the better)",
                metrics.macro_accuracy
            ),
            format!(
                "  LogLoss          = {:.3} (the closer to 0, the better)",
                metrics.log_loss
            ),
            format!(
                "  LogLossReduction = {:.3} (the closer to 1, the better)",
                metrics.log_loss_reduction
            ),
            FRAME.to_string(),
        ];
        for line in &lines {
            self.write_line_color(line, REPORT_COLOR)?;
        }
        Ok(())
    }

    /// Average, standard deviation and 95% interval of each metric across folds.
    pub fn print_fold_average_metrics(&mut self, folds: &[MetricSet]) -> io::Result<()> {
        let column = |f: fn(&MetricSet) -> f64| -> Vec<f64> { folds.iter().map(f).collect() };
        let rows = [
            ("MicroAccuracy:   ", column(|m| m.micro_accuracy)),
            ("MacroAccuracy:   ", column(|m| m.macro_accuracy)),
            ("LogLoss:         ", column(|m| m.log_loss)),
            ("LogLossReduction:", column(|m| m.log_loss_reduction)),
        ];

        self.write_line_color(FRAME, REPORT_COLOR)?;
        self.write_line_color(
            "  Metrics for multi-class Classification model using cross validation",
            REPORT_COLOR,
        )?;
        self.write_line_color(FRAME, REPORT_COLOR)?;
        for (label, values) in &rows {
            let stat = FoldStatistic::from_values(values);
            let average = crate::stats::mean(values).unwrap_or(f64::NAN);
            let sd = stat.map_or(f64::NAN, |s| s.std_dev);
            let ci = stat.map_or(f64::NAN, |s| s.confidence_interval_95);
            self.write_line_color(
                &format!(
                    "  Average {} {:.3}  - Standard deviation: {:.3}  - Confidence Interval 95%: {:.3}",
                    label, average, sd, ci
                ),
                REPORT_COLOR,
            )?;
        }
        self.write_line_color(FRAME, REPORT_COLOR)
    }

    pub fn print_cancellation(&mut self, reason: &str) -> io::Result<()> {
        writeln!(self.sink, "CANCELED: Reason={}", reason)
    }

    pub fn print_cancellation_error(&mut self, code: &str, details: &str) -> io::Result<()> {
        writeln!(self.sink, "CANCELED: ErrorCode={}", code)?;
        writeln!(self.sink, "CANCELED: ErrorDetails=[{}]", details)?;
        writeln!(self.sink, "CANCELED: Did you update the subscription info?")
    }
}

/// Viable trials ordered best-first by `metric`, at most `k` of them.
pub fn top_runs(results: &[TrialResult], metric: OptimizationMetric, k: usize) -> Vec<&TrialResult> {
    let mut viable: Vec<&TrialResult> = results.iter().filter(|t| t.is_viable(metric)).collect();
    viable.sort_by(|a, b| {
        metric.best_first(
            a.metric(metric).unwrap_or(f64::NAN),
            b.metric(metric).unwrap_or(f64::NAN),
        )
    });
    viable.truncate(k);
    viable
}

/// Log a failed report write; reports never abort training.
pub(crate) fn log_write_error(result: io::Result<()>) {
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to write report");
    }
}
