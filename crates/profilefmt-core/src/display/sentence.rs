//! English list joining.

/// Join items the way English prose lists them.
///
/// No items give an empty string, one item is returned as is, two items are
/// joined with `" and "`, and longer lists use commas with a serial comma
/// before the final `"and"`.
///
/// # Examples
///
/// ```rust
/// use profilefmt_core::display::to_sentence;
///
/// assert_eq!(to_sentence::<&str>(&[]), "");
/// assert_eq!(to_sentence(&["Bio"]), "Bio");
/// assert_eq!(to_sentence(&["Last name", "Bio"]), "Last name and Bio");
/// assert_eq!(to_sentence(&["A", "B", "C"]), "A, B, and C");
/// ```
pub fn to_sentence<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head = init
                .iter()
                .map(|item| item.as_ref())
                .collect::<Vec<&str>>()
                .join(", ");
            format!("{head}, and {}", last.as_ref())
        }
    }
}
