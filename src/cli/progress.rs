//! Spinner-based progress reporter for the terminal

use crate::cli::output::{CHECK, CROSS};
use crate::execution::ProgressReporter;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Shows one spinner for the active step and leaves a ✓/✗ line behind
#[derive(Default)]
pub struct SpinnerReporter {
    active: Option<(ProgressBar, String)>,
}

impl SpinnerReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn spinner(label: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} {elapsed:.dim}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(label.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }
}

impl ProgressReporter for SpinnerReporter {
    fn begin(&mut self, label: &str) {
        self.finish();
        self.active = Some((Self::spinner(label), label.to_string()));
    }

    fn finish(&mut self) {
        if let Some((spinner, label)) = self.active.take() {
            spinner.finish_with_message(format!("{}{}", CHECK, style(label).green()));
        }
    }

    fn fail(&mut self, message: &str) {
        if let Some((spinner, label)) = self.active.take() {
            spinner.abandon_with_message(format!(
                "{}{}: {}",
                CROSS,
                style(label).red(),
                style(message).dim()
            ));
        }
    }

    fn complete(&mut self, message: &str) {
        self.finish();
        println!("\n{}{}", CHECK, style(message).green().bold());
    }
}
