//! Step domain model

use crate::core::{context::StepContext, error::ScaffoldError, error::ScaffoldResult};
use async_trait::async_trait;
use std::fmt;

/// The work a step performs
///
/// Implementations wrap their underlying operations and return any error
/// unchanged; the engine turns it into a [`StepOutcome`].
#[async_trait]
pub trait StepAction: Send + Sync {
    async fn run(&self, ctx: &StepContext<'_>) -> ScaffoldResult<()>;
}

/// A single named step in the scaffolding recipe
pub struct Step {
    /// Label shown by the progress reporter
    pub name: String,

    action: Box<dyn StepAction>,
}

impl Step {
    pub fn new(name: impl Into<String>, action: impl StepAction + 'static) -> Self {
        Self {
            name: name.into(),
            action: Box::new(action),
        }
    }

    /// Run the action and classify the result
    pub async fn execute(&self, ctx: &StepContext<'_>) -> StepOutcome {
        StepOutcome::from_result(self.action.run(ctx).await)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Result of executing one step
#[derive(Debug)]
pub enum StepOutcome {
    Success,
    Failure { reason: String, error: ScaffoldError },
}

impl StepOutcome {
    /// The failure reason is the error's message, so a command's stderr shows up in it
    pub fn from_result(result: ScaffoldResult<()>) -> Self {
        match result {
            Ok(()) => StepOutcome::Success,
            Err(error) => StepOutcome::Failure {
                reason: error.to_string(),
                error,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Success)
    }
}
