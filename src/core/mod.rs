//! Core domain models for the scaffolder
//!
//! Options, steps, run state and the recipe that ties them together.

pub mod config;
pub mod context;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod recipe;
pub mod state;
pub mod step;

pub use context::*;
pub use error::*;
pub use options::*;
pub use pipeline::*;
pub use state::*;
pub use step::*;
