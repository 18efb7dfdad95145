use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SummarizeError;

/// Number of sentences kept when no line count is supplied.
pub const DEFAULT_LINE_COUNT: usize = 3;

/// A sentence budget for the line-count strategy. Never less than one and
/// never more than `i64::MAX`, so it always survives a serde round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawLineCount", into = "i64")]
pub struct LineCount(usize);

impl LineCount {
    /// Clamps `count` to at least one.
    ///
    /// On targets where `usize` is narrower than `i64` the upper end
    /// saturates at `usize::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textsum::core::models::LineCount;
    ///
    /// assert_eq!(LineCount::new(5).get(), 5);
    /// assert_eq!(LineCount::new(0).get(), 1);
    /// assert_eq!(LineCount::new(-7).get(), 1);
    /// ```
    #[must_use]
    pub fn new(count: i64) -> Self {
        if count < 1 {
            Self(1)
        } else {
            Self(usize::try_from(count).unwrap_or(usize::MAX))
        }
    }

    /// Coerces a user-entered value into a line count.
    ///
    /// The leading integer of the trimmed input is used, so `"4 lines"`
    /// yields 4. Input without a leading integer, or whose integer is zero
    /// or negative, yields 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use textsum::core::models::LineCount;
    ///
    /// assert_eq!(LineCount::parse("3").get(), 3);
    /// assert_eq!(LineCount::parse(" 4 lines").get(), 4);
    /// assert_eq!(LineCount::parse("abc").get(), 1);
    /// assert_eq!(LineCount::parse("0").get(), 1);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        static LEADING_INT_RE: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("static regex compile"));

        let Some(m) = LEADING_INT_RE.find(raw.trim()) else {
            return Self(1);
        };

        match m.as_str().parse::<i64>() {
            Ok(n) => Self::new(n),
            // Too many digits for i64: the sign decides which end we clamp to.
            Err(_) if m.as_str().starts_with('-') => Self(1),
            Err(_) => Self::new(i64::MAX),
        }
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for LineCount {
    fn default() -> Self {
        Self(DEFAULT_LINE_COUNT)
    }
}

impl From<i64> for LineCount {
    fn from(count: i64) -> Self {
        Self::new(count)
    }
}

impl From<LineCount> for i64 {
    fn from(count: LineCount) -> Self {
        i64::try_from(count.0).unwrap_or(i64::MAX)
    }
}

/// Any JSON value accepted as a line count. Numbers are clamped, strings go
/// through [`LineCount::parse`], everything else becomes 1.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLineCount {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

impl From<RawLineCount> for LineCount {
    fn from(raw: RawLineCount) -> Self {
        match raw {
            RawLineCount::Signed(n) => Self::new(n),
            RawLineCount::Unsigned(n) => Self::new(i64::try_from(n).unwrap_or(i64::MAX)),
            // `as` truncates toward zero, saturates, and maps NaN to 0.
            RawLineCount::Float(f) => Self::new(f as i64),
            RawLineCount::Text(s) => Self::parse(&s),
            RawLineCount::Other(_) => Self(1),
        }
    }
}

/// Normalised, de-duplicated set of lowercase keywords.
///
/// Every construction path lowercases and trims each term and drops the
/// ones that end up empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    /// Builds a keyword set from a comma-separated string.
    ///
    /// # Examples
    ///
    /// ```
    /// use textsum::core::models::KeywordSet;
    ///
    /// let set = KeywordSet::parse(" Cat, dog ,,CAT ");
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("cat"));
    /// assert!(set.contains("dog"));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::from_terms(raw.split(','))
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            terms
                .into_iter()
                .map(|term| term.as_ref().to_lowercase().trim().to_string())
                .filter(|term| !term.is_empty())
                .collect(),
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(terms: Vec<String>) -> Self {
        Self::from_terms(terms)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0.into_iter().collect()
    }
}

/// The summarization strategy and its parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StrategyConfig {
    /// Keep the first `count` sentences.
    LineCount {
        #[serde(default)]
        count: LineCount,
    },
    /// Keep sentences mentioning at least one of `terms`.
    Keywords { terms: KeywordSet },
}

impl StrategyConfig {
    #[must_use]
    pub fn line_count(count: i64) -> Self {
        StrategyConfig::LineCount {
            count: LineCount::new(count),
        }
    }

    /// Keyword strategy from a comma-separated keyword string.
    #[must_use]
    pub fn keywords(raw: &str) -> Self {
        StrategyConfig::Keywords {
            terms: KeywordSet::parse(raw),
        }
    }

    /// Tag used in the serialized form.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            StrategyConfig::LineCount { .. } => "lineCount",
            StrategyConfig::Keywords { .. } => "keywords",
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig::LineCount {
            count: LineCount::default(),
        }
    }
}

/// A single summarization request as handed over by a host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub correlation_id: String,
    pub text: String,
    pub strategy: StrategyConfig,
}

impl SummaryRequest {
    /// Creates a request with a fresh correlation id.
    #[must_use]
    pub fn new(text: impl Into<String>, strategy: StrategyConfig) -> Self {
        Self {
            correlation_id: Uuid::new_v4().to_string(),
            text: text.into(),
            strategy,
        }
    }
}

/// Caller-facing result envelope:
/// `{ "ok": true, "summary": ... }` or `{ "ok": false, "error": "EMPTY_INPUT" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummaryResponse {
    #[must_use]
    pub fn success(summary: impl Into<String>) -> Self {
        Self {
            ok: true,
            summary: Some(summary.into()),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(error: &SummarizeError) -> Self {
        Self {
            ok: false,
            summary: None,
            error: Some(error.code().to_string()),
        }
    }
}

impl From<Result<String, SummarizeError>> for SummaryResponse {
    fn from(result: Result<String, SummarizeError>) -> Self {
        match result {
            Ok(summary) => Self::success(summary),
            Err(e) => Self::failure(&e),
        }
    }
}
