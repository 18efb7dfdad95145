//! textsum - extractive text summarization by sentence count or by keyword.
//!
//! The crate splits raw text into sentences with a punctuation heuristic and
//! then keeps either the first N sentences or the sentences that mention any
//! of a set of keywords.
//!
//! # Architecture
//!
//! - `summarizer`: the pure core (segmentation, both strategies, orchestration)
//! - `core`: request/strategy models and environment configuration
//! - `cli`: the command-line host behind the `summarize` binary
//! - `errors`: error types for the core and the host
//!
//! # Example
//!
//! ```
//! use textsum::core::models::{StrategyConfig, SummaryRequest};
//! use textsum::summarizer::summarize_request;
//!
//! let request = SummaryRequest::new(
//!     "The sky is blue. It is sunny today. Birds fly high.",
//!     StrategyConfig::keywords("sunny, birds"),
//! );
//!
//! let response = summarize_request(&request);
//! assert!(response.ok);
//! assert_eq!(
//!     response.summary.as_deref(),
//!     Some("It is sunny today. Birds fly high.")
//! );
//! ```

pub mod cli;
pub mod core;
pub mod errors;
pub mod summarizer;

pub use errors::{InputError, SummarizeError};
pub use summarizer::{NO_MATCH_MESSAGE, summarize};

/// Configure structured logging with JSON format.
///
/// Logs go to stderr so that stdout only carries the summary. The level is
/// taken from `RUST_LOG` and defaults to `info`.
///
/// # Example
///
/// ```
/// // Initialize structured logging once at program start
/// textsum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .init();
}

/// Configure compact human-readable logging on stderr.
pub fn setup_logging_plain() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .init();
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}
