//! Step context - the services and paths a step can reach

use crate::core::options::ScaffoldOptions;
use crate::execution::CommandRunner;
use crate::template::{TemplateBindings, TemplateStore};
use std::path::{Path, PathBuf};

/// Everything a step action may use while it runs
///
/// Borrowed for the duration of one run. The options record is shared,
/// never owned, so steps cannot replace it.
pub struct StepContext<'a> {
    pub options: &'a ScaffoldOptions,
    pub runner: &'a dyn CommandRunner,
    pub templates: &'a TemplateStore,

    /// Directory the workspace is created in
    pub output_dir: &'a Path,

    /// Year substituted for `[year]`
    pub year: i32,
}

impl<'a> StepContext<'a> {
    /// Root of the generated workspace: `<output_dir>/<libraryName>`
    pub fn workspace_dir(&self) -> PathBuf {
        self.output_dir.join(self.options.library_name())
    }

    /// Placeholder bindings for template rendering
    pub fn bindings(&self) -> TemplateBindings {
        TemplateBindings::new(self.year, self.options.author_full_name())
    }
}
