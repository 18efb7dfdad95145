//! Heuristic sentence segmentation.
//!
//! A sentence ends at `.`, `?` or `!` when the next non-whitespace character
//! is an ASCII capital letter. Abbreviations, decimals and quoted speech are
//! not special-cased.

use once_cell::sync::Lazy;
use regex::Regex;

static BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.?!]\s*[A-Z]").expect("static regex compile"));

/// Splits `text` into trimmed, non-empty sentences in order of appearance.
///
/// The returned slices borrow from `text`.
///
/// # Examples
///
/// ```
/// use textsum::summarizer::segment;
///
/// let sentences = segment("The sky is blue. It is sunny today.Birds fly high.");
/// assert_eq!(
///     sentences,
///     vec!["The sky is blue.", "It is sunny today.", "Birds fly high."]
/// );
///
/// assert!(segment("   ").is_empty());
/// assert_eq!(segment("no capital after this. see?"), vec!["no capital after this. see?"]);
/// ```
#[must_use]
pub fn segment(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in BOUNDARY_RE.find_iter(text) {
        // Punctuation marks are single-byte, so the boundary sits right after it.
        let end = m.start() + 1;
        push_fragment(&mut sentences, &text[start..end]);
        start = end;
    }
    push_fragment(&mut sentences, &text[start..]);

    sentences
}

fn push_fragment<'a>(sentences: &mut Vec<&'a str>, fragment: &'a str) {
    let trimmed = fragment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
