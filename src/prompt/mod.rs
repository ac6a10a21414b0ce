//! MMLU prompt formatting.
//!
//! This module provides:
//!
//! - **Subject**: snake_case subject names to readable phrases
//! - **Example**: one question row rendered as an example block
//! - **Few-shot**: introduction plus example blocks, and the held-out query
//!
//! # Prompt Shape
//!
//! ```text
//! The following are multiple choice questions (with answers) about {subject}.
//!
//! Follow the answer instructions strictly, and answer only with the letter corresponding to the correct answer: {question}
//! A. {option}
//! B. {option}
//!  - Answer: {answer}
//!
//! ```
//!
//! The wording is fixed and not configurable.

mod example;
mod fewshot;
mod subject;

pub use example::format_example;
pub use fewshot::{Shots, gen_eval_prompt, gen_prompt};
pub use subject::format_subject;

/// Choice letters, assigned positionally to answer options.
pub const CHOICES: [&str; 4] = ["A", "B", "C", "D"];
