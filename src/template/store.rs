//! Template store and rendered-file writer

use crate::core::error::{ScaffoldError, ScaffoldResult};
use include_dir::{include_dir, Dir};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Templates compiled into the binary
static BUNDLED_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Read-only access to named template files
#[derive(Debug, Clone, Default)]
pub enum TemplateStore {
    /// The templates embedded at build time
    #[default]
    Bundled,
    /// A user-supplied template directory
    Directory(PathBuf),
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::Directory(root.into())
    }

    pub fn bundled() -> Self {
        Self::Bundled
    }

    /// Read a template by file name
    pub async fn read(&self, name: &str) -> ScaffoldResult<String> {
        match self {
            Self::Bundled => BUNDLED_TEMPLATES
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .map(str::to_string)
                .ok_or_else(|| ScaffoldError::TemplateNotFound(name.to_string())),
            Self::Directory(root) => {
                let path = root.join(name);
                debug!("Reading template {}", path.display());

                match tokio::fs::read_to_string(&path).await {
                    Ok(text) => Ok(text),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        Err(ScaffoldError::TemplateNotFound(name.to_string()))
                    }
                    Err(e) => Err(ScaffoldError::fs(path, e)),
                }
            }
        }
    }
}

/// Write `text` to `<workspace>/<name>`, and to
/// `<workspace>/projects/<library_name>/<name>` when `also_copy_to_library` is set
///
/// Existing files are overwritten. Missing directories are not created.
pub async fn write_rendered(
    name: &str,
    text: &str,
    workspace: &Path,
    library_name: &str,
    also_copy_to_library: bool,
) -> ScaffoldResult<Vec<PathBuf>> {
    let mut targets = vec![workspace.join(name)];
    if also_copy_to_library {
        targets.push(workspace.join("projects").join(library_name).join(name));
    }

    for target in &targets {
        tokio::fs::write(target, text)
            .await
            .map_err(|e| ScaffoldError::fs(target, e))?;
        debug!("Wrote {}", target.display());
    }

    Ok(targets)
}
