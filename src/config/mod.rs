//! Prompt configuration.
//!
//! This module defines the `PromptConfig` struct, loaded from a YAML file or
//! string. Unknown fields are ignored and missing fields take their defaults.
//! Only the subject and example count are configurable; the prompt wording
//! is fixed.

mod model;
mod operations;


pub use model::PromptConfig;
