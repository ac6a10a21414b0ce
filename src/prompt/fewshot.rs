//! Few-shot prompt assembly.

use super::example::format_example;
use super::subject::format_subject;
use crate::error::{PromptError, Result};
use crate::table::TableSource;

/// Number of example rows to include in a few-shot prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shots {
    /// Every row of the table.
    #[default]
    All,
    /// The first `n` rows, in table order.
    First(usize),
}

impl Shots {
    /// Resolve to a concrete row count for a table with `rows` rows.
    ///
    /// `First(n)` is returned as-is even when `n > rows`; rendering then
    /// fails with `RowOutOfRange` rather than silently clamping.
    pub fn resolve(self, rows: usize) -> usize {
        match self {
            Shots::All => rows,
            Shots::First(n) => n,
        }
    }
}

impl TryFrom<i64> for Shots {
    type Error = PromptError;

    /// `-1` means all rows; any other negative count is rejected.
    fn try_from(k: i64) -> Result<Self> {
        match k {
            -1 => Ok(Shots::All),
            k if k < -1 => Err(PromptError::InvalidShots(k)),
            k => usize::try_from(k)
                .map(Shots::First)
                .map_err(|_| PromptError::InvalidShots(k)),
        }
    }
}

/// Build a few-shot prompt from `train` for `subject`.
///
/// The prompt is the introduction line followed by one answered example
/// block per included row, in row order.
///
/// # Errors
///
/// Any error from [`format_example`]; in particular `RowOutOfRange` when
/// `shots` asks for more rows than `train` has.
pub fn gen_prompt<T>(train: &T, subject: &str, shots: Shots) -> Result<String>
where
    T: TableSource + ?Sized,
{
    // format_subject supplies the space after "about"
    let mut prompt = format!(
        "The following are multiple choice questions (with answers) about{}.\n\n",
        format_subject(subject)
    );

    let k = shots.resolve(train.row_count());
    for i in 0..k {
        prompt.push_str(&format_example(train, i, true)?);
    }

    tracing::debug!(subject, examples = k, len = prompt.len(), "generated few-shot prompt");
    Ok(prompt)
}

/// Build the full evaluation prompt for one held-out question.
///
/// This is the few-shot prompt from `train` followed by row `test_row` of
/// `test` rendered without its answer.
pub fn gen_eval_prompt<T, U>(
    train: &T,
    subject: &str,
    shots: Shots,
    test: &U,
    test_row: usize,
) -> Result<String>
where
    T: TableSource + ?Sized,
    U: TableSource + ?Sized,
{
    let mut prompt = gen_prompt(train, subject, shots)?;
    prompt.push_str(&format_example(test, test_row, false)?);
    Ok(prompt)
}
