use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::models::LineCount;

/// How the CLI renders its result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_line_count: LineCount,
    pub output_format: OutputFormat,
    pub json_logs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_line_count: LineCount::default(),
            output_format: OutputFormat::Text,
            json_logs: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Missing variables
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            default_line_count: lookup("SUMMARIZER_DEFAULT_LINES")
                .map_or(defaults.default_line_count, |v| LineCount::parse(&v)),
            output_format: match lookup("SUMMARIZER_OUTPUT") {
                Some(v) => v
                    .parse()
                    .map_err(|e| format!("SUMMARIZER_OUTPUT: {}", e))?,
                None => defaults.output_format,
            },
            json_logs: lookup("SUMMARIZER_JSON_LOGS")
                .is_some_and(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true")),
        })
    }
}
