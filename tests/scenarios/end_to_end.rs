//! Full recipe runs against the fake toolchain

use crate::helpers::*;
use ngx_scaffold::{ExampleStyle, ScaffoldOptions, TemplateStore};

#[tokio::test]
async fn test_scaffold_ada_lovelace() {
    let out = tempfile::tempdir().unwrap();
    let options = ScaffoldOptions::new("mylib", "ADA LOVELACE", "ngx", ExampleStyle::Scss).unwrap();

    let (result, _) = scaffold_with(FakeToolchain::new(), &options, out.path()).await;
    assert!(result.is_success(), "{:?}", result);

    let license = read(out.path().join("mylib/LICENSE"));
    assert!(license.contains("Copyright (c) 2024 Ada Lovelace"));

    let package = read_json(out.path().join("mylib/package.json"));
    assert_eq!(package["scripts"]["lib:build"], "ng build mylib");
}

#[tokio::test]
async fn test_license_carries_current_year() {
    use chrono::Datelike;

    let out = tempfile::tempdir().unwrap();
    let options = ScaffoldOptions::with_defaults("mylib", "ADA LOVELACE").unwrap();
    let engine = ngx_scaffold::ExecutionEngine::new(FakeToolchain::new(), TemplateStore::bundled(), out.path());

    let result = engine
        .execute(&ngx_scaffold::scaffold_pipeline(), &options, &mut RecordingReporter::default())
        .await;
    assert!(result.is_success(), "{:?}", result);

    let year = chrono::Local::now().year().to_string();
    let license = read(out.path().join("mylib/LICENSE"));
    assert!(
        license.contains(&format!("Copyright (c) {} Ada Lovelace", year)),
        "{}",
        license
    );
}

#[tokio::test]
async fn test_expected_file_set() {
    let out = tempfile::tempdir().unwrap();
    let options = ScaffoldOptions::with_defaults("widgets", "grace hopper").unwrap();

    let (result, _) = scaffold_with(FakeToolchain::new(), &options, out.path()).await;
    assert!(result.is_success());

    let workspace = out.path().join("widgets");
    let library = workspace.join("projects/widgets");
    for name in ["LICENSE", "README.md", ".prettierrc", "CONTRIBUTING.md", "package.json", "tslint.json"] {
        assert!(workspace.join(name).is_file(), "missing {}", name);
    }
    for name in ["README.md", ".prettierrc", "CONTRIBUTING.md"] {
        assert!(library.join(name).is_file(), "missing library copy of {}", name);
    }
    assert!(!library.join("LICENSE").exists());

    for name in ["LICENSE", "README.md", "CONTRIBUTING.md"] {
        let text = read(workspace.join(name));
        assert!(!text.contains("[year]"), "{} has unresolved [year]", name);
        assert!(!text.contains("[fullname]"), "{} has unresolved [fullname]", name);
    }
    assert_eq!(read(workspace.join("README.md")), read(library.join("README.md")));

    // Copied verbatim
    let prettier = TemplateStore::bundled().read(".prettierrc").await.unwrap();
    assert_eq!(read(workspace.join(".prettierrc")), prettier);
    assert_eq!(read(library.join(".prettierrc")), prettier);
}

#[tokio::test]
async fn test_commands_follow_options() {
    let out = tempfile::tempdir().unwrap();
    let options = ScaffoldOptions::new("charts", "Ada", "acme", ExampleStyle::Less).unwrap();
    let toolchain = FakeToolchain::new();

    let (result, _) = scaffold_with(toolchain.clone(), &options, out.path()).await;
    assert!(result.is_success());

    let calls = toolchain.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[0].0, "ng new charts --create-application=false --defaults");
    assert_eq!(calls[0].1, out.path());
    assert_eq!(calls[1].0, "ng generate library charts --prefix=acme");
    assert!(calls[2].0.contains("ng generate application charts-example --style=less"));
    assert_eq!(
        calls[3].0,
        "ng config schematics.@schematics/angular:component.style less"
    );
    assert!(calls[4].0.contains("prettier"));
    for (_, dir) in &calls[1..] {
        assert_eq!(dir, &out.path().join("charts"));
    }
}

#[tokio::test]
async fn test_manifests_rewritten() {
    let out = tempfile::tempdir().unwrap();
    let options = ScaffoldOptions::with_defaults("mylib", "Ada").unwrap();

    let (result, _) = scaffold_with(FakeToolchain::new(), &options, out.path()).await;
    assert!(result.is_success());

    let package = read_json(out.path().join("mylib/package.json"));
    assert_eq!(package["name"], "generated");
    assert_eq!(package["private"], true);
    assert_eq!(package["devDependencies"]["@angular/cli"], "~8.0.0");
    assert!(package["scripts"].get("start").is_none());
    assert_eq!(package["scripts"]["example:serve"], "ng serve mylib-example");
    assert_eq!(package["husky"]["hooks"]["pre-commit"], "lint-staged");

    let tslint = read_json(out.path().join("mylib/tslint.json"));
    assert_eq!(
        tslint["extends"],
        serde_json::json!(["tslint:recommended", "tslint-config-prettier"])
    );
    assert_eq!(tslint["rules"]["quotemark"], serde_json::json!([true, "single"]));
}

#[tokio::test]
async fn test_progress_reporting_sequence() {
    let out = tempfile::tempdir().unwrap();
    let options = ScaffoldOptions::with_defaults("mylib", "Ada").unwrap();

    let (_, reporter) = scaffold_with(FakeToolchain::new(), &options, out.path()).await;

    let begins = reporter.events.iter().filter(|e| e.starts_with("begin:")).count();
    assert_eq!(begins, 11);
    assert_eq!(reporter.events[0], "begin:Create workspace");
    let n = reporter.events.len();
    assert_eq!(reporter.events[n - 2], "finish");
    assert_eq!(reporter.events[n - 1], "complete:Library mylib created successfully.");
}

#[tokio::test]
async fn test_rerun_is_idempotent_for_manifests() {
    let out = tempfile::tempdir().unwrap();
    let options = ScaffoldOptions::with_defaults("mylib", "Ada").unwrap();

    let (first, _) = scaffold_with(FakeToolchain::new(), &options, out.path()).await;
    assert!(first.is_success());

    // Re-run only the manifest and template steps: the fake toolchain would reset the files
    let engine = ngx_scaffold::ExecutionEngine::new(FakeToolchain::new(), TemplateStore::bundled(), out.path())
        .with_year(2024);
    let pipeline = ngx_scaffold::scaffold_pipeline();
    let tail = ngx_scaffold::Pipeline::new(
        "tail",
        pipeline.steps.into_iter().skip(5).collect(),
    );
    let mut reporter = RecordingReporter::default();
    let second = engine.execute(&tail, &options, &mut reporter).await;
    assert!(second.is_success());

    let tslint = read_json(out.path().join("mylib/tslint.json"));
    assert_eq!(
        tslint["extends"],
        serde_json::json!(["tslint:recommended", "tslint-config-prettier"])
    );
}
