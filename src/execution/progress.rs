//! Progress reporting seam used by the engine around every step

/// Receives step transitions from the engine
///
/// A reporter is owned by a single run and holds at most one active
/// indicator at a time.
pub trait ProgressReporter: Send {
    /// Mark the active step (if any) completed and start a new one
    fn begin(&mut self, label: &str);

    /// Mark the active step completed
    fn finish(&mut self);

    /// Mark the active step failed
    fn fail(&mut self, message: &str);

    /// Show the completion message once every step has finished
    fn complete(&mut self, _message: &str) {
        self.finish();
    }
}

/// Reporter that shows nothing
#[derive(Debug, Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn begin(&mut self, _label: &str) {}

    fn finish(&mut self) {}

    fn fail(&mut self, _message: &str) {}
}
