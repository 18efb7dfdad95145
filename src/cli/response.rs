//! Rendering a summarization result for the terminal.

use crate::core::config::OutputFormat;
use crate::core::models::SummaryResponse;
use crate::errors::SummarizeError;

/// Text to print and whether it reports a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    pub is_error: bool,
}

/// Renders `result` in the requested format.
///
/// JSON output is the serialized [`SummaryResponse`] envelope; text output
/// is the summary itself or the error's message.
///
/// # Examples
///
/// ```
/// use textsum::cli::response::render;
/// use textsum::core::config::OutputFormat;
///
/// let rendered = render(&Ok("It is sunny today.".to_string()), OutputFormat::Json).unwrap();
/// assert_eq!(rendered.body, r#"{"ok":true,"summary":"It is sunny today."}"#);
/// assert!(!rendered.is_error);
/// ```
pub fn render(
    result: &Result<String, SummarizeError>,
    format: OutputFormat,
) -> Result<Rendered, serde_json::Error> {
    let body = match (format, result) {
        (OutputFormat::Json, _) => serde_json::to_string(&SummaryResponse::from(result.clone()))?,
        (OutputFormat::Text, Ok(summary)) => summary.clone(),
        (OutputFormat::Text, Err(e)) => e.to_string(),
    };

    Ok(Rendered {
        body,
        is_error: result.is_err(),
    })
}
