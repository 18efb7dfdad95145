use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::core::config::{AppConfig, OutputFormat};
use crate::core::models::{LineCount, StrategyConfig};

/// Command-line usage text.
pub const USAGE: &str = "\
Usage: summarize [FILE] [lines=N | keywords=a,b,c] [format=text|json]

Summarizes plain text read from FILE (a .txt file) or from standard input.

  lines=N, count=N     keep the first N sentences (default 3)
  keywords=a,b,c       keep sentences mentioning any of the keywords
  format=text|json     output style (default text)
  file=PATH            same as the positional FILE
  -h, --help           print this help";

/// What the user asked for on the command line. Unset fields fall back to
/// [`AppConfig`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliRequest {
    pub file: Option<PathBuf>,
    pub strategy: Option<StrategyConfig>,
    pub format: Option<OutputFormat>,
    pub show_help: bool,
}

impl CliRequest {
    #[must_use]
    pub fn strategy_or_default(&self, config: &AppConfig) -> StrategyConfig {
        self.strategy
            .clone()
            .unwrap_or(StrategyConfig::LineCount {
                count: config.default_line_count,
            })
    }

    #[must_use]
    pub fn format_or_default(&self, config: &AppConfig) -> OutputFormat {
        self.format.unwrap_or(config.output_format)
    }
}

/// Parses command-line arguments (without the program name).
///
/// `lines=`, `count=`, `keywords=`, `format=` and `file=` arguments select
/// the strategy, output format and input file; any other argument, including
/// one like `notes=v2.txt`, is taken as the input file path. Later arguments
/// override earlier ones. Bad format values are logged and ignored.
///
/// # Examples
///
/// ```
/// use textsum::cli::parsing::parse_args;
/// use textsum::core::models::StrategyConfig;
///
/// let request = parse_args(["notes.txt", "keywords=Rust, cargo"]);
/// assert_eq!(request.file.as_deref(), Some(std::path::Path::new("notes.txt")));
/// assert_eq!(request.strategy, Some(StrategyConfig::keywords("rust,cargo")));
/// ```
pub fn parse_args<I, S>(args: I) -> CliRequest
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    static KV_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"(?s)^(\w+)\s*=(.*)$").expect("static regex compile"));

    let mut request = CliRequest::default();

    for arg in args {
        let arg = arg.as_ref();

        if arg == "-h" || arg == "--help" {
            request.show_help = true;
            continue;
        }

        let Some(cap) = KV_RE.captures(arg) else {
            request.file = Some(PathBuf::from(arg));
            continue;
        };

        let key = cap[1].to_lowercase();
        let raw = cap[2].trim().trim_matches('"');
        match key.as_str() {
            "lines" | "count" => {
                request.strategy = Some(StrategyConfig::LineCount {
                    count: LineCount::parse(raw),
                });
            }
            "keywords" => {
                request.strategy = Some(StrategyConfig::keywords(raw));
            }
            "format" => match raw.parse::<OutputFormat>() {
                Ok(format) => request.format = Some(format),
                Err(e) => warn!("Ignoring format argument: {}", e),
            },
            "file" => {
                request.file = Some(PathBuf::from(raw));
            }
            _ => {
                request.file = Some(PathBuf::from(arg));
            }
        }
    }

    request
}
