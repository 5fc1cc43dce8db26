//! The scaffolding recipe and the step actions it is built from

use crate::core::{
    context::StepContext,
    error::ScaffoldResult,
    options::ScaffoldOptions,
    pipeline::Pipeline,
    step::{Step, StepAction},
};
use crate::manifest;
use crate::template::{self, TemplateResource};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Where a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkDir {
    /// The directory the workspace is created in
    Output,
    /// The generated workspace root
    Workspace,
}

/// Runs a shell script built from the options
pub struct CommandStep {
    pub script: fn(&ScaffoldOptions) -> String,
    pub work_dir: WorkDir,
}

#[async_trait]
impl StepAction for CommandStep {
    async fn run(&self, ctx: &StepContext<'_>) -> ScaffoldResult<()> {
        let dir = match self.work_dir {
            WorkDir::Output => ctx.output_dir.to_path_buf(),
            WorkDir::Workspace => ctx.workspace_dir(),
        };
        let script = (self.script)(ctx.options);
        let output = ctx.runner.execute(&script, &dir).await?;
        debug!("{}", output.stdout.trim_end());
        Ok(())
    }
}

/// Reads a template, renders it if needed, and places it in the workspace
pub struct TemplateStep(pub TemplateResource);

#[async_trait]
impl StepAction for TemplateStep {
    async fn run(&self, ctx: &StepContext<'_>) -> ScaffoldResult<()> {
        let resource = self.0;
        let text = ctx.templates.read(resource.name).await?;
        let text = if resource.rendered {
            template::render(&text, &ctx.bindings())
        } else {
            text
        };

        let written = template::write_rendered(
            resource.name,
            &text,
            &ctx.workspace_dir(),
            ctx.options.library_name(),
            resource.copy_to_library_subpath,
        )
        .await?;
        info!("{} added ({} file(s))", resource.name, written.len());
        Ok(())
    }
}

/// Rewrites a JSON manifest in the workspace
pub struct ManifestStep {
    pub file: &'static str,
    pub transform: fn(Value, &ScaffoldOptions) -> Value,
}

#[async_trait]
impl StepAction for ManifestStep {
    async fn run(&self, ctx: &StepContext<'_>) -> ScaffoldResult<()> {
        let path = ctx.workspace_dir().join(self.file);
        let transform = self.transform;
        manifest::mutate(&path, |doc| transform(doc, ctx.options)).await
    }
}

fn create_workspace(options: &ScaffoldOptions) -> String {
    format!(
        "ng new {} --create-application=false --defaults",
        options.library_name()
    )
}

fn generate_library(options: &ScaffoldOptions) -> String {
    format!(
        "ng generate library {} --prefix={}",
        options.library_name(),
        options.library_prefix()
    )
}

fn generate_example_app(options: &ScaffoldOptions) -> String {
    format!(
        "ng generate application {} --style={} --defaults",
        options.example_app_name(),
        options.example_style()
    )
}

/// Workspace-wide default, so components generated in the library use it too
fn set_default_style(options: &ScaffoldOptions) -> String {
    format!(
        "ng config schematics.@schematics/angular:component.style {}",
        options.example_style()
    )
}

fn install_dev_dependencies(_options: &ScaffoldOptions) -> String {
    [
        "npm install --save-dev --save-exact prettier",
        "npm install --save-dev tslint-config-prettier husky lint-staged",
    ]
    .join("\n")
}

fn package_transform(doc: Value, options: &ScaffoldOptions) -> Value {
    manifest::apply_package_scripts(doc, options.library_name())
}

fn lint_transform(doc: Value, _options: &ScaffoldOptions) -> Value {
    manifest::extend_lint_config(doc)
}

/// The eleven-step Angular library recipe
pub fn scaffold_pipeline() -> Pipeline {
    let steps = vec![
        Step::new(
            "Create workspace",
            CommandStep {
                script: create_workspace,
                work_dir: WorkDir::Output,
            },
        ),
        Step::new(
            "Generate library",
            CommandStep {
                script: generate_library,
                work_dir: WorkDir::Workspace,
            },
        ),
        Step::new(
            "Generate example application",
            CommandStep {
                script: generate_example_app,
                work_dir: WorkDir::Workspace,
            },
        ),
        Step::new(
            "Set default component style",
            CommandStep {
                script: set_default_style,
                work_dir: WorkDir::Workspace,
            },
        ),
        Step::new(
            "Install development dependencies",
            CommandStep {
                script: install_dev_dependencies,
                work_dir: WorkDir::Workspace,
            },
        ),
        Step::new("Add LICENSE", TemplateStep(template::LICENSE)),
        Step::new("Add README", TemplateStep(template::README)),
        Step::new("Add Prettier config", TemplateStep(template::PRETTIER_CONFIG)),
        Step::new("Add CONTRIBUTING", TemplateStep(template::CONTRIBUTING)),
        Step::new(
            "Update package.json",
            ManifestStep {
                file: "package.json",
                transform: package_transform,
            },
        ),
        Step::new(
            "Update tslint.json",
            ManifestStep {
                file: "tslint.json",
                transform: lint_transform,
            },
        ),
    ];

    Pipeline::new("angular-library", steps)
}
