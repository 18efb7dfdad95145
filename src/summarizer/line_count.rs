/// Returns the first `count` sentences, in order.
///
/// A `count` of zero is treated as one. Asking for more sentences than exist
/// returns all of them.
///
/// # Examples
///
/// ```
/// use textsum::summarizer::select_by_count;
///
/// let sentences = ["One.", "Two.", "Three."];
/// assert_eq!(select_by_count(&sentences, 2), vec!["One.", "Two."]);
/// assert_eq!(select_by_count(&sentences, 0), vec!["One."]);
/// assert_eq!(select_by_count(&sentences, 10).len(), 3);
/// ```
#[must_use]
pub fn select_by_count<'a>(sentences: &[&'a str], count: usize) -> Vec<&'a str> {
    sentences.iter().copied().take(count.max(1)).collect()
}
