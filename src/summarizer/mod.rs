//! Extractive summarization: sentence segmentation plus the line-count and
//! keyword selection strategies.

pub mod keywords;
pub mod line_count;
pub mod segmenter;

pub use keywords::{mentions_any, select_by_keyword_set, select_by_keywords};
pub use line_count::select_by_count;
pub use segmenter::segment;

use tracing::{debug, info};

use crate::core::models::{StrategyConfig, SummaryRequest, SummaryResponse};
use crate::errors::SummarizeError;

/// Returned by the keyword strategy when no sentence matches.
pub const NO_MATCH_MESSAGE: &str = "No sentences found matching the given keywords.";

/// Summarizes `raw_text` with the given strategy.
///
/// Fails only when `raw_text` is empty after trimming. A keyword search with
/// no hits is a successful result carrying [`NO_MATCH_MESSAGE`].
///
/// # Examples
///
/// ```
/// use textsum::core::models::StrategyConfig;
/// use textsum::errors::SummarizeError;
/// use textsum::summarizer::{summarize, NO_MATCH_MESSAGE};
///
/// let text = "The sky is blue. It is sunny today. Birds fly high.";
///
/// let summary = summarize(text, &StrategyConfig::line_count(2)).unwrap();
/// assert_eq!(summary, "The sky is blue. It is sunny today.");
///
/// let summary = summarize(text, &StrategyConfig::keywords("sunny")).unwrap();
/// assert_eq!(summary, "It is sunny today.");
///
/// let summary = summarize(text, &StrategyConfig::keywords("ocean")).unwrap();
/// assert_eq!(summary, NO_MATCH_MESSAGE);
///
/// assert_eq!(
///     summarize("   ", &StrategyConfig::default()),
///     Err(SummarizeError::EmptyInput)
/// );
/// ```
pub fn summarize(raw_text: &str, strategy: &StrategyConfig) -> Result<String, SummarizeError> {
    if raw_text.trim().is_empty() {
        return Err(SummarizeError::EmptyInput);
    }

    let sentences = segment(raw_text);

    #[cfg(feature = "debug-logs")]
    debug!("Segmented input into sentences: {:?}", sentences);

    #[cfg(not(feature = "debug-logs"))]
    debug!(
        "Segmented input into {} sentences [... content masked, enable debug-logs feature to view ...]",
        sentences.len()
    );

    let summary = match strategy {
        StrategyConfig::LineCount { count } => select_by_count(&sentences, count.get()).join(" "),
        StrategyConfig::Keywords { terms } => {
            let selected = select_by_keyword_set(&sentences, terms).join(" ");
            if selected.is_empty() {
                NO_MATCH_MESSAGE.to_string()
            } else {
                selected
            }
        }
    };

    info!(
        strategy = strategy.kind(),
        sentences = sentences.len(),
        summary_len = summary.len(),
        "Generated summary"
    );

    Ok(summary)
}

/// Runs [`summarize`] for a host request and wraps the outcome in the
/// caller-facing envelope.
#[must_use]
pub fn summarize_request(request: &SummaryRequest) -> SummaryResponse {
    let result = summarize(&request.text, &request.strategy);

    match &result {
        Ok(_) => info!(
            correlation_id = %request.correlation_id,
            "Summary request completed"
        ),
        Err(e) => info!(
            correlation_id = %request.correlation_id,
            error = e.code(),
            "Summary request rejected"
        ),
    }

    SummaryResponse::from(result)
}
