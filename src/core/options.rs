//! Scaffold options - the immutable input threaded through every step

use crate::core::error::{ScaffoldError, ScaffoldResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Default selector prefix for generated components
pub const DEFAULT_PREFIX: &str = "ngx";

/// Stylesheet format used by the example application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExampleStyle {
    Css,
    #[default]
    Scss,
    Sass,
    Less,
    Styl,
}

impl ExampleStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExampleStyle::Css => "css",
            ExampleStyle::Scss => "scss",
            ExampleStyle::Sass => "sass",
            ExampleStyle::Less => "less",
            ExampleStyle::Styl => "styl",
        }
    }
}

impl fmt::Display for ExampleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved options for one scaffolding run
///
/// Built once before the pipeline starts. Fields are private so no step can
/// alter the record after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldOptions {
    library_name: String,
    author_full_name: String,
    library_prefix: String,
    example_style: ExampleStyle,
}

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*$").expect("valid identifier regex"))
}

impl ScaffoldOptions {
    /// Validate and build an options record
    pub fn new(
        library_name: impl Into<String>,
        author_full_name: impl Into<String>,
        library_prefix: impl Into<String>,
        example_style: ExampleStyle,
    ) -> ScaffoldResult<Self> {
        let library_name = library_name.into().trim().to_string();
        let author_full_name = author_full_name.into().trim().to_string();
        let library_prefix = library_prefix.into().trim().to_string();

        if !identifier_pattern().is_match(&library_name) {
            return Err(ScaffoldError::InvalidOptions(format!(
                "library name '{}' must start with a letter and contain only letters, digits and '-'",
                library_name
            )));
        }
        if !identifier_pattern().is_match(&library_prefix) {
            return Err(ScaffoldError::InvalidOptions(format!(
                "prefix '{}' must start with a letter and contain only letters, digits and '-'",
                library_prefix
            )));
        }
        if author_full_name.is_empty() {
            return Err(ScaffoldError::InvalidOptions(
                "author name must not be empty".to_string(),
            ));
        }

        Ok(Self {
            library_name,
            author_full_name,
            library_prefix,
            example_style,
        })
    }

    /// Options with the default prefix and style
    pub fn with_defaults(
        library_name: impl Into<String>,
        author_full_name: impl Into<String>,
    ) -> ScaffoldResult<Self> {
        Self::new(
            library_name,
            author_full_name,
            DEFAULT_PREFIX,
            ExampleStyle::default(),
        )
    }

    pub fn library_name(&self) -> &str {
        &self.library_name
    }

    /// Raw author name as entered; see `template::normalize_full_name`
    pub fn author_full_name(&self) -> &str {
        &self.author_full_name
    }

    pub fn library_prefix(&self) -> &str {
        &self.library_prefix
    }

    pub fn example_style(&self) -> ExampleStyle {
        self.example_style
    }

    /// Name of the paired example application project
    pub fn example_app_name(&self) -> String {
        format!("{}-example", self.library_name)
    }
}
