//! Progress reporting for evaluation runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use nl2sql_application::{CaseOutcome, EvaluationProgress};
use std::sync::Mutex;

/// Reports evaluation progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("Invalid progress template")
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationProgress for ProgressReporter {
    fn on_start(&self, total_cases: usize) {
        let pb = ProgressBar::new(total_cases as u64);
        pb.set_style(Self::style());
        pb.set_prefix("Evaluating");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_case_complete(&self, question: &str, outcome: &CaseOutcome) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let mark = if outcome.is_match() {
                "v".green()
            } else {
                "x".red()
            };
            pb.set_message(format!("{} {}", mark, question));
            pb.inc(1);
        }
    }

    fn on_finish(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_and_clear();
        }
    }
}
