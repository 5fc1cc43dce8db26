//! Main execution engine - runs a pipeline's steps in order

use crate::{
    core::{
        Pipeline, PipelineReport, PipelineResult, ScaffoldOptions, StepContext, StepOutcome,
        StepState,
    },
    execution::{CommandRunner, ProgressReporter},
    template::TemplateStore,
};
use chrono::{Datelike, Utc};
use std::path::PathBuf;
use tracing::{error, info};

/// Sequential, fail-fast pipeline execution engine
pub struct ExecutionEngine<R> {
    runner: R,
    templates: TemplateStore,
    output_dir: PathBuf,
    year: i32,
}

impl<R: CommandRunner> ExecutionEngine<R> {
    pub fn new(runner: R, templates: TemplateStore, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            templates,
            output_dir: output_dir.into(),
            year: chrono::Local::now().year(),
        }
    }

    /// Override the year used for `[year]`
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Execute every step in order, halting at the first failure
    ///
    /// Side effects of steps that already ran are left in place.
    pub async fn execute(
        &self,
        pipeline: &Pipeline,
        options: &ScaffoldOptions,
        reporter: &mut dyn ProgressReporter,
    ) -> PipelineResult {
        let mut report = PipelineReport::new(pipeline);
        report.state.start(pipeline.steps.len());

        info!(
            "Starting pipeline execution: {} for {} ({})",
            pipeline.name,
            options.library_name(),
            report.state.execution_id
        );

        let ctx = StepContext {
            options,
            runner: &self.runner,
            templates: &self.templates,
            output_dir: &self.output_dir,
            year: self.year,
        };

        for (index, step) in pipeline.steps.iter().enumerate() {
            reporter.begin(&step.name);
            let started_at = Utc::now();
            report.steps[index].state = StepState::Running { started_at };
            info!("[{}/{}] {}", index + 1, pipeline.steps.len(), step.name);

            match step.execute(&ctx).await {
                StepOutcome::Success => {
                    report.steps[index].state = StepState::Completed {
                        started_at,
                        completed_at: Utc::now(),
                    };
                    report.state.completed_steps += 1;
                }
                StepOutcome::Failure { reason, error } => {
                    error!("Step '{}' failed ({:?}): {}", step.name, error.kind(), error);
                    reporter.fail(&error.to_string());

                    report.steps[index].state = StepState::Failed {
                        error: error.to_string(),
                        started_at,
                        failed_at: Utc::now(),
                    };
                    for record in &mut report.steps[index + 1..] {
                        record.state = StepState::Skipped {
                            reason: format!("'{}' failed", step.name),
                        };
                    }
                    report.state.fail();

                    return PipelineResult::Failed {
                        step: step.name.clone(),
                        reason,
                        error,
                        report,
                    };
                }
            }
        }

        report.state.complete();
        info!("Pipeline execution finished: {}", pipeline.name);
        reporter.complete(&format!(
            "Library {} created successfully.",
            options.library_name()
        ));

        PipelineResult::Success(report)
    }
}
