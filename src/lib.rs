//! mmlu-prompt: few-shot prompt formatting for MMLU-style multiple-choice data.
//!
//! The crate turns a table of questions (question, options, answer) into the
//! fixed MMLU prompt text: an introduction naming the subject followed by
//! fully answered example questions.
//!
//! ```
//! use mmlu_prompt::{QuestionTable, Shots, gen_prompt};
//!
//! let table = QuestionTable::from_rows(vec![vec![
//!     "2 + 2 = ?".to_string(),
//!     "3".to_string(),
//!     "4".to_string(),
//!     "B".to_string(),
//! ]])
//! .unwrap();
//!
//! let prompt = gen_prompt(&table, "elementary_mathematics", Shots::All).unwrap();
//! assert!(prompt.starts_with(
//!     "The following are multiple choice questions (with answers) about elementary mathematics.\n\n"
//! ));
//! assert!(prompt.ends_with("\nA. 3\nB. 4\n - Answer: B\n\n"));
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod table;

pub use config::PromptConfig;
pub use error::{PromptError, Result};
pub use prompt::{
    CHOICES, Shots, format_example, format_subject, gen_eval_prompt, gen_prompt,
};
pub use table::{Question, QuestionTable, TableSource};
