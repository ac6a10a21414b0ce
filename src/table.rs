//! Tabular row source for question data.
//!
//! Column layout is fixed:
//!
//! - column 0: question text
//! - columns 1..C-2: answer options, in display order
//! - column C-1: correct-answer label
//!
//! The formatting functions only need [`TableSource`]; [`QuestionTable`] is
//! an owned, rectangular implementation of it.

use crate::error::{PromptError, Result};
use serde::{Deserialize, Serialize};

/// Row/column addressable table of string cells, zero-based.
pub trait TableSource {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns, including the question and answer columns.
    fn column_count(&self) -> usize;

    /// Cell at `(row, column)`.
    ///
    /// Returns `RowOutOfRange` or `ColumnOutOfRange` instead of panicking.
    fn cell(&self, row: usize, column: usize) -> Result<&str>;
}

/// One multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text.
    pub question: String,
    /// Answer options in display order.
    pub options: Vec<String>,
    /// The correct-answer label (usually a choice letter).
    pub answer: String,
}

impl Question {
    fn into_row(self) -> Vec<String> {
        let mut row = Vec::with_capacity(self.options.len() + 2);
        row.push(self.question);
        row.extend(self.options);
        row.push(self.answer);
        row
    }
}

/// Owned rectangular table of question rows.
///
/// Serializes as a plain list of rows. The column count is not written
/// separately, so an empty table reads back with zero columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct QuestionTable {
    columns: usize,
    rows: Vec<Vec<String>>,
}

impl QuestionTable {
    /// Create an empty table with a fixed column count.
    pub fn with_columns(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from rows. The first row fixes the column count.
    ///
    /// An empty `rows` yields an empty table with zero columns.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        let mut table = Self::with_columns(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Build a table from question records.
    ///
    /// All questions must have the same number of options.
    pub fn from_questions<I>(questions: I) -> Result<Self>
    where
        I: IntoIterator<Item = Question>,
    {
        Self::from_rows(questions.into_iter().map(Question::into_row).collect())
    }

    /// Append a row. Its width must equal the table's column count.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns {
            return Err(PromptError::RaggedRow {
                row: self.rows.len(),
                expected: self.columns,
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Table restricted to its first `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns,
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl TableSource for QuestionTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn cell(&self, row: usize, column: usize) -> Result<&str> {
        let cells = self.rows.get(row).ok_or(PromptError::RowOutOfRange {
            row,
            rows: self.rows.len(),
        })?;
        cells
            .get(column)
            .map(String::as_str)
            .ok_or(PromptError::ColumnOutOfRange {
                column,
                columns: self.columns,
            })
    }
}

impl TryFrom<Vec<Vec<String>>> for QuestionTable {
    type Error = PromptError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<QuestionTable> for Vec<Vec<String>> {
    fn from(table: QuestionTable) -> Self {
        table.rows
    }
}
