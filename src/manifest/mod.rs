//! Structured config mutation for generated JSON manifests
//!
//! A document is loaded, passed once through a pure transform and written
//! back pretty-printed. Keys the transform does not touch survive in their
//! original order.

use crate::core::error::{ScaffoldError, ScaffoldResult};
use serde_json::{json, Map, Value};
use std::path::Path;
use tracing::{debug, warn};

/// Ruleset that turns off lint rules conflicting with Prettier
pub const PRETTIER_LINT_RULESET: &str = "tslint-config-prettier";

/// Load `path`, apply `transform`, and overwrite the file with the result
pub async fn mutate<F>(path: &Path, transform: F) -> ScaffoldResult<()>
where
    F: FnOnce(Value) -> Value,
{
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ScaffoldError::fs(path, e))?;

    let doc: Value = serde_json::from_str(&content).map_err(|e| ScaffoldError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let updated = transform(doc);

    let mut serialized =
        serde_json::to_string_pretty(&updated).map_err(|e| ScaffoldError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    serialized.push('\n');

    tokio::fs::write(path, serialized)
        .await
        .map_err(|e| ScaffoldError::fs(path, e))?;
    debug!("Rewrote {}", path.display());

    Ok(())
}

/// Script table written into the workspace `package.json`
pub fn package_scripts(library_name: &str) -> Map<String, Value> {
    let example = format!("{}-example", library_name);
    let entries = [
        ("ng", "ng".to_string()),
        ("lib:build", format!("ng build {}", library_name)),
        ("lib:build:prod", format!("ng build {} --prod", library_name)),
        ("lib:lint", format!("ng lint {}", library_name)),
        (
            "lib:publish",
            format!(
                "npm run lib:build:prod && cd dist/{} && npm publish",
                library_name
            ),
        ),
        ("example:serve", format!("ng serve {}", example)),
        ("example:build", format!("ng build {}", example)),
        (
            "example:build:prod",
            format!("ng build {} --prod --base-href /{}/", example, library_name),
        ),
        ("example:lint", format!("ng lint {}", example)),
        (
            "example:publish",
            format!(
                "npm run example:build:prod && npx angular-cli-ghpages --dir=dist/{}",
                example
            ),
        ),
        (
            "format",
            "prettier --write \"projects/**/*.{ts,html,scss,css,json,md}\"".to_string(),
        ),
    ];

    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::String(value)))
        .collect()
}

/// Replace `scripts` and set the `husky` and `lint-staged` sections
pub fn apply_package_scripts(mut doc: Value, library_name: &str) -> Value {
    match doc.as_object_mut() {
        Some(root) => {
            root.insert(
                "scripts".to_string(),
                Value::Object(package_scripts(library_name)),
            );
            root.insert(
                "husky".to_string(),
                json!({ "hooks": { "pre-commit": "lint-staged" } }),
            );
            root.insert(
                "lint-staged".to_string(),
                json!({ "*.{ts,html,scss,css,json,md}": ["prettier --write", "git add"] }),
            );
        }
        None => warn!("package.json root is not an object, leaving it unchanged"),
    }

    doc
}

/// Append [`PRETTIER_LINT_RULESET`] to `extends`, turning a scalar into a list
///
/// The ruleset is not appended twice.
pub fn extend_lint_config(mut doc: Value) -> Value {
    match doc.as_object_mut() {
        Some(root) => {
            let mut extends = match root.remove("extends") {
                Some(Value::Array(items)) => items,
                Some(Value::Null) | None => Vec::new(),
                Some(scalar) => vec![scalar],
            };

            if !extends.iter().any(|v| v.as_str() == Some(PRETTIER_LINT_RULESET)) {
                extends.push(Value::String(PRETTIER_LINT_RULESET.to_string()));
            }

            root.insert("extends".to_string(), Value::Array(extends));
        }
        None => warn!("tslint.json root is not an object, leaving it unchanged"),
    }

    doc
}
