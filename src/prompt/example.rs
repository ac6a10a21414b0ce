//! Rendering of a single question row into an example block.

use super::CHOICES;
use crate::error::{PromptError, Result};
use crate::table::TableSource;

const INSTRUCTION: &str = "Follow the answer instructions strictly, and answer only with the letter corresponding to the correct answer: ";

const ANSWER_MARKER: &str = "\n - Answer:";

/// Render row `row` of `table` as an example block.
///
/// The block is the instruction sentence followed directly by the question,
/// one `"{letter}. {option}"` line per option, and the `" - Answer:"` marker.
/// With `include_answer` the answer cell and a blank line follow the marker;
/// without it the block ends at the marker, ready for the model to complete.
///
/// # Errors
///
/// * `RowOutOfRange` - `row` is not in the table (checked first)
/// * `TooFewColumns` - the table has fewer than 2 columns
/// * `TooManyOptions` - the table has more option columns than [`CHOICES`]
pub fn format_example<T>(table: &T, row: usize, include_answer: bool) -> Result<String>
where
    T: TableSource + ?Sized,
{
    let rows = table.row_count();
    if row >= rows {
        return Err(PromptError::RowOutOfRange { row, rows });
    }

    let columns = table.column_count();
    if columns < 2 {
        return Err(PromptError::TooFewColumns { columns });
    }

    let num_options = columns - 2;
    if num_options > CHOICES.len() {
        return Err(PromptError::TooManyOptions {
            options: num_options,
            max: CHOICES.len(),
        });
    }

    let mut prompt = String::from(INSTRUCTION);
    prompt.push_str(table.cell(row, 0)?);

    for (j, letter) in CHOICES.iter().take(num_options).enumerate() {
        prompt.push('\n');
        prompt.push_str(letter);
        prompt.push_str(". ");
        prompt.push_str(table.cell(row, j + 1)?);
    }

    prompt.push_str(ANSWER_MARKER);
    if include_answer {
        prompt.push(' ');
        prompt.push_str(table.cell(row, num_options + 1)?);
        prompt.push_str("\n\n");
    }

    tracing::trace!(row, num_options, include_answer, "formatted example");
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::QuestionTable;

    fn table(rows: &[&[&str]]) -> QuestionTable {
        QuestionTable::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    fn four_option_table() -> QuestionTable {
        table(&[
            &["What is 2 + 2?", "3", "4", "5", "22", "B"],
            &["Which is a prime?", "4", "6", "7", "9", "C"],
        ])
    }

    #[test]
    fn test_full_block_with_answer() {
        let block = format_example(&four_option_table(), 0, true).unwrap();
        assert_eq!(
            block,
            "Follow the answer instructions strictly, and answer only with the letter \
             corresponding to the correct answer: What is 2 + 2?\n\
             A. 3\nB. 4\nC. 5\nD. 22\n - Answer: B\n\n"
        );
    }

    #[test]
    fn test_block_without_answer_ends_at_marker() {
        let block = format_example(&four_option_table(), 1, false).unwrap();
        assert!(block.ends_with("\nA. 4\nB. 6\nC. 7\nD. 9\n - Answer:"));
        assert!(block.contains("answer: Which is a prime?\n"));
    }

    #[test]
    fn test_without_answer_is_prefix_of_with_answer() {
        let table = four_option_table();
        let bare = format_example(&table, 1, false).unwrap();
        let full = format_example(&table, 1, true).unwrap();

        assert!(full.starts_with(&bare));
        assert_eq!(&full[bare.len()..], " C\n\n");
    }

    #[test]
    fn test_option_line_count_matches_columns() {
        for options in 0..=4 {
            let mut row = vec!["q".to_string()];
            row.extend((0..options).map(|i| format!("opt{}", i)));
            row.push("A".to_string());
            let table = QuestionTable::from_rows(vec![row]).unwrap();

            let block = format_example(&table, 0, false).unwrap();
            let lines: Vec<&str> = block.lines().collect();
            // instruction line + options + marker line
            assert_eq!(lines.len(), options + 2);
            for (j, line) in lines[1..=options].iter().enumerate() {
                assert_eq!(*line, format!("{}. opt{}", CHOICES[j], j));
            }
        }
    }

    #[test]
    fn test_zero_options() {
        let block = format_example(&table(&[&["Is water wet?", "yes"]]), 0, true).unwrap();
        assert!(block.ends_with("answer: Is water wet?\n - Answer: yes\n\n"));
    }

    #[test]
    fn test_too_many_options() {
        let table = table(&[&["q", "a", "b", "c", "d", "e", "A"]]);
        assert_eq!(
            format_example(&table, 0, true).unwrap_err(),
            PromptError::TooManyOptions { options: 5, max: 4 }
        );
    }

    #[test]
    fn test_too_few_columns() {
        let table = table(&[&["only a question"]]);
        assert_eq!(
            format_example(&table, 0, false).unwrap_err(),
            PromptError::TooFewColumns { columns: 1 }
        );
    }

    #[test]
    fn test_row_out_of_range() {
        assert_eq!(
            format_example(&four_option_table(), 2, true).unwrap_err(),
            PromptError::RowOutOfRange { row: 2, rows: 2 }
        );
    }

    #[test]
    fn test_missing_row_reported_before_column_shape() {
        let empty = QuestionTable::from_rows(Vec::new()).unwrap();
        assert_eq!(
            format_example(&empty, 0, true).unwrap_err(),
            PromptError::RowOutOfRange { row: 0, rows: 0 }
        );
    }

    #[test]
    fn test_cell_values_are_not_escaped() {
        let table = table(&[&["Evaluate {x}:", "a\nb", "{{}}", "A"]]);
        let block = format_example(&table, 0, true).unwrap();
        assert!(block.contains("answer: Evaluate {x}:\nA. a\nb\nB. {{}}\n - Answer: A\n\n"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let table = four_option_table();
        assert_eq!(
            format_example(&table, 0, true).unwrap(),
            format_example(&table, 0, true).unwrap()
        );
    }
}
