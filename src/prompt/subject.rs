//! Subject name formatting.

/// Convert a snake_case subject into a space-separated phrase.
///
/// Every underscore-separated word is prefixed with a single space, so the
/// result always starts with a space. Empty words are kept, which means
/// repeated or edge underscores turn into extra spaces.
///
/// ```
/// use mmlu_prompt::format_subject;
///
/// assert_eq!(format_subject("computer_science"), " computer science");
/// assert_eq!(format_subject("x"), " x");
/// ```
pub fn format_subject(subject: &str) -> String {
    let mut result = String::with_capacity(subject.len() + 1);
    for word in subject.split('_') {
        result.push(' ');
        result.push_str(word);
    }
    result
}
