//! Command-line interface

pub mod output;
pub mod progress;

use crate::core::{
    config::ScaffoldConfig, ExampleStyle, ScaffoldError, ScaffoldOptions, ScaffoldResult,
    DEFAULT_PREFIX,
};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Scaffold an Angular library workspace with an example app, formatter and commit hooks
#[derive(Debug, Parser, Clone)]
#[command(name = "ngx-scaffold")]
#[command(version)]
#[command(about = "Scaffold an Angular library workspace", long_about = None)]
pub struct Cli {
    /// Library name, used as the workspace directory and package name
    pub library_name: String,

    /// Author full name for LICENSE and docs
    #[arg(short, long)]
    pub author: Option<String>,

    /// Component selector prefix [default: ngx]
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Stylesheet format of the example application [default: scss]
    #[arg(short, long, value_enum)]
    pub style: Option<ExampleStyle>,

    /// Directory to create the workspace in
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Directory holding LICENSE, README.md, .prettierrc and CONTRIBUTING.md templates
    #[arg(long)]
    pub templates_dir: Option<PathBuf>,

    /// Timeout for each external command in seconds (0 disables it)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to a YAML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run report as JSON instead of progress spinners
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }

    /// Merge flags over the settings file and build the options record
    pub fn resolve_options(&self, config: &ScaffoldConfig) -> ScaffoldResult<ScaffoldOptions> {
        let author = self
            .author
            .clone()
            .or_else(|| config.defaults.author_full_name.clone())
            .ok_or_else(|| {
                ScaffoldError::InvalidOptions(
                    "author name is required (--author or defaults.author_full_name)".to_string(),
                )
            })?;
        let prefix = self
            .prefix
            .clone()
            .or_else(|| config.defaults.library_prefix.clone())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        let style = self
            .style
            .or(config.defaults.example_style)
            .unwrap_or_default();

        ScaffoldOptions::new(&self.library_name, author, prefix, style)
    }

    /// Merge flags over the settings file for runtime settings
    pub fn apply_overrides(&self, mut config: ScaffoldConfig) -> ScaffoldConfig {
        if let Some(timeout) = self.timeout {
            config.command_timeout_secs = Some(timeout);
        }
        if let Some(dir) = &self.templates_dir {
            config.templates_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = Some(dir.clone());
        }
        config
    }
}
