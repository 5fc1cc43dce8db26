//! Pipeline domain model

use crate::core::{
    error::ScaffoldError,
    state::{ExecutionStatus, PipelineState, StepState},
    step::Step,
};
use serde::Serialize;

/// An ordered, fixed list of steps
#[derive(Debug)]
pub struct Pipeline {
    /// Pipeline name
    pub name: String,

    /// Steps in execution order
    pub steps: Vec<Step>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }
}

/// State of one step after a run
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub name: String,
    #[serde(flatten)]
    pub state: StepState,
}

/// What happened during a run, step by step
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub pipeline: String,
    #[serde(flatten)]
    pub state: PipelineState,
    pub steps: Vec<StepRecord>,
}

impl PipelineReport {
    pub fn new(pipeline: &Pipeline) -> Self {
        Self {
            pipeline: pipeline.name.clone(),
            state: PipelineState::new(),
            steps: pipeline
                .steps
                .iter()
                .map(|s| StepRecord {
                    name: s.name.clone(),
                    state: StepState::Pending,
                })
                .collect(),
        }
    }

    /// Get the state of a step by name
    pub fn step_state(&self, name: &str) -> Option<&StepState> {
        self.steps.iter().find(|s| s.name == name).map(|s| &s.state)
    }

    /// Names of the steps that completed, in order
    pub fn completed_steps(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| matches!(s.state, StepState::Completed { .. }))
            .map(|s| s.name.as_str())
            .collect()
    }

    /// The step that halted the run, if any
    pub fn failed_step(&self) -> Option<&str> {
        self.steps
            .iter()
            .find(|s| matches!(s.state, StepState::Failed { .. }))
            .map(|s| s.name.as_str())
    }

    pub fn is_success(&self) -> bool {
        self.state.status == ExecutionStatus::Completed
    }
}

/// Final result of a pipeline run
#[derive(Debug)]
pub enum PipelineResult {
    /// Every step succeeded
    Success(PipelineReport),

    /// The run halted at `step`; later steps were skipped
    Failed {
        step: String,
        reason: String,
        error: ScaffoldError,
        report: PipelineReport,
    },
}

impl PipelineResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineResult::Success(_))
    }

    pub fn report(&self) -> &PipelineReport {
        match self {
            PipelineResult::Success(report) | PipelineResult::Failed { report, .. } => report,
        }
    }
}
