use crate::core::models::KeywordSet;

/// Keeps the sentences that contain at least one keyword from a
/// comma-separated keyword string.
///
/// Matching is a case-insensitive substring test, so `"cat"` also matches
/// `"concatenate"`. An empty keyword string selects nothing.
///
/// # Examples
///
/// ```
/// use textsum::summarizer::select_by_keywords;
///
/// let sentences = ["The cat sat.", "A dog barked.", "Birds sang."];
/// assert_eq!(select_by_keywords(&sentences, "CAT, birds"), vec!["The cat sat.", "Birds sang."]);
/// assert!(select_by_keywords(&sentences, " , ").is_empty());
/// ```
#[must_use]
pub fn select_by_keywords<'a>(sentences: &[&'a str], raw_keywords: &str) -> Vec<&'a str> {
    select_by_keyword_set(sentences, &KeywordSet::parse(raw_keywords))
}

/// Same as [`select_by_keywords`] for an already normalised set.
#[must_use]
pub fn select_by_keyword_set<'a>(sentences: &[&'a str], keywords: &KeywordSet) -> Vec<&'a str> {
    if keywords.is_empty() {
        return Vec::new();
    }

    sentences
        .iter()
        .copied()
        .filter(|sentence| mentions_any(sentence, keywords))
        .collect()
}

/// Whether the lowercase form of `sentence` contains any keyword.
#[must_use]
pub fn mentions_any(sentence: &str, keywords: &KeywordSet) -> bool {
    let lowered = sentence.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}
