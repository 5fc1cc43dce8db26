//! CLI output formatting

use crate::core::{ExecutionStatus, PipelineReport, ScaffoldOptions, StepState};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");
pub static SKIP: Emoji<'_, '_> = Emoji("⏭️  ", "- ");

/// Greeting printed before the run starts
pub fn format_welcome(options: &ScaffoldOptions) -> String {
    format!(
        "{}Generating Angular library {} (prefix {}, {} styles)\n{}",
        ROCKET,
        style(options.library_name()).bold(),
        style(options.library_prefix()).cyan(),
        style(options.example_style()).cyan(),
        style("  this might take some time").dim()
    )
}

/// Next steps printed after a successful run
pub fn format_next_steps(options: &ScaffoldOptions) -> String {
    format!(
        "{}Next steps:\n    cd {}\n    npm run example:serve",
        INFO,
        options.library_name()
    )
}

/// Format a step state for display
pub fn format_step_state(state: &StepState) -> String {
    match state {
        StepState::Pending => style("PENDING").dim().to_string(),
        StepState::Running { .. } => style("RUNNING").yellow().to_string(),
        StepState::Completed { .. } => style("COMPLETED").green().to_string(),
        StepState::Failed { .. } => style("FAILED").red().to_string(),
        StepState::Skipped { .. } => style("SKIPPED").dim().to_string(),
    }
}

/// Format an execution status for display
pub fn format_status(status: ExecutionStatus) -> String {
    match status {
        ExecutionStatus::Pending => style("PENDING").dim().to_string(),
        ExecutionStatus::Running => style("RUNNING").yellow().to_string(),
        ExecutionStatus::Completed => style("COMPLETED").green().to_string(),
        ExecutionStatus::Failed => style("FAILED").red().to_string(),
    }
}

/// Failure summary: the step that halted the run, its error, and what was skipped
pub fn format_failure(step: &str, error: &str, report: &PipelineReport) -> String {
    let mut out = format!(
        "{}{} {}\n    {}",
        CROSS,
        style(step).red().bold(),
        style("failed").red(),
        error
    );

    let skipped: Vec<&str> = report
        .steps
        .iter()
        .filter(|s| matches!(s.state, StepState::Skipped { .. }))
        .map(|s| s.name.as_str())
        .collect();
    if !skipped.is_empty() {
        out.push_str(&format!(
            "\n{}Not run: {}",
            SKIP,
            style(skipped.join(", ")).dim()
        ));
    }

    out.push_str(&format!(
        "\n{}Files from completed steps were left in place ({}/{} steps, {})",
        INFO,
        report.state.completed_steps,
        report.state.total_steps,
        format_status(report.state.status)
    ));
    out
}
