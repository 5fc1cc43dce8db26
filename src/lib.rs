//! ngx-scaffold - scaffolds an Angular library workspace through a fixed,
//! fail-fast recipe of Angular CLI commands, template files and manifest rewrites

pub mod cli;
pub mod core;
pub mod execution;
pub mod manifest;
pub mod template;

// Re-export commonly used types
pub use crate::core::recipe::scaffold_pipeline;
pub use crate::core::{
    ExampleStyle, Pipeline, PipelineReport, PipelineResult, ScaffoldError, ScaffoldOptions, Step,
    StepAction, StepContext, StepOutcome, StepState,
};
pub use execution::{CommandRunner, ExecutionEngine, ProgressReporter, ShellCommandRunner};
pub use template::TemplateStore;
