//! Test: the run halts at the first failing step

use crate::helpers::*;
use async_trait::async_trait;
use ngx_scaffold::core::{ErrorKind, ScaffoldError, ScaffoldResult, StepState};
use ngx_scaffold::{
    ExecutionEngine, Pipeline, PipelineResult, ScaffoldOptions, Step, StepAction, StepContext,
    TemplateStore,
};
use std::sync::{Arc, Mutex};

/// Step that logs its name and optionally fails
struct Scripted {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
    fail: bool,
}

#[async_trait]
impl StepAction for Scripted {
    async fn run(&self, ctx: &StepContext<'_>) -> ScaffoldResult<()> {
        assert_eq!(ctx.options.library_name(), "mylib");
        self.log.lock().unwrap().push(self.name);
        if self.fail {
            Err(ScaffoldError::ExternalCommand {
                command: self.name.to_string(),
                code: 2,
                stderr: "step two broke".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

fn five_steps(log: &Arc<Mutex<Vec<&'static str>>>, failing: usize) -> Pipeline {
    let names = ["one", "two", "three", "four", "five"];
    let steps = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Step::new(
                *name,
                Scripted {
                    name: *name,
                    log: log.clone(),
                    fail: i == failing,
                },
            )
        })
        .collect();
    Pipeline::new("five", steps)
}

#[tokio::test]
async fn test_second_step_failure_stops_the_run() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let pipeline = five_steps(&log, 1);
    let options = ScaffoldOptions::with_defaults("mylib", "Ada").unwrap();
    let engine = ExecutionEngine::new(FakeToolchain::new(), TemplateStore::bundled(), "/tmp");
    let mut reporter = RecordingReporter::default();

    let result = engine.execute(&pipeline, &options, &mut reporter).await;

    assert_eq!(*log.lock().unwrap(), vec!["one", "two"]);
    assert_failed_at(&result, "two", "step two broke");

    let report = result.report();
    assert_eq!(report.completed_steps(), vec!["one"]);
    for name in ["three", "four", "five"] {
        assert!(matches!(report.step_state(name), Some(StepState::Skipped { .. })));
    }

    assert_eq!(
        reporter.events,
        vec![
            "begin:one".to_string(),
            "begin:two".to_string(),
            "fail:command `two` exited with code 2: step two broke".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_failure_carries_error_kind() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let pipeline = five_steps(&log, 0);
    let options = ScaffoldOptions::with_defaults("mylib", "Ada").unwrap();
    let engine = ExecutionEngine::new(FakeToolchain::new(), TemplateStore::bundled(), "/tmp");

    match engine.execute(&pipeline, &options, &mut RecordingReporter::default()).await {
        PipelineResult::Failed { step, reason, error, .. } => {
            assert_eq!(step, "one");
            assert_eq!(reason, "command `one` exited with code 2: step two broke");
            assert_eq!(error.kind(), ErrorKind::ExternalCommandFailure);
        }
        PipelineResult::Success(_) => panic!("expected failure"),
    }
}

#[tokio::test]
async fn test_library_generation_failure_leaves_workspace() {
    let out = tempfile::tempdir().unwrap();
    let options = ScaffoldOptions::with_defaults("mylib", "Ada").unwrap();
    let toolchain = FakeToolchain::failing_on("generate library");

    let (result, _) = scaffold_with(toolchain.clone(), &options, out.path()).await;

    assert_failed_at(&result, "Generate library", "simulated failure");
    assert_eq!(toolchain.scripts().len(), 2);

    // No rollback: the workspace from step one stays, nothing later was written
    assert!(out.path().join("mylib/package.json").is_file());
    assert!(!out.path().join("mylib/LICENSE").exists());
}

#[tokio::test]
async fn test_missing_template_fails_its_step() {
    let out = tempfile::tempdir().unwrap();
    let templates = tempfile::tempdir().unwrap();
    std::fs::write(templates.path().join("LICENSE"), "(c) [year] [fullname]\n").unwrap();

    let options = ScaffoldOptions::with_defaults("mylib", "Ada").unwrap();
    let engine = ExecutionEngine::new(FakeToolchain::new(), TemplateStore::new(templates.path()), out.path());
    let result = engine
        .execute(&ngx_scaffold::scaffold_pipeline(), &options, &mut RecordingReporter::default())
        .await;

    assert_failed_at(&result, "Add README", "template not found: README.md");
    assert!(out.path().join("mylib/LICENSE").is_file());
}
