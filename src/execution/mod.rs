//! Pipeline execution: the engine and the services it drives

pub mod engine;
pub mod progress;
pub mod runner;

pub use engine::ExecutionEngine;
pub use progress::{NoopReporter, ProgressReporter};
pub use runner::{CommandOutput, CommandRunner, ShellCommandRunner};
