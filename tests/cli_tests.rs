use std::path::{Path, PathBuf};

use textsum::cli::input::{ensure_plain_text, read_text, read_text_file};
use textsum::cli::parse_args;
use textsum::cli::response::render;
use textsum::core::config::{AppConfig, OutputFormat};
use textsum::core::models::{LineCount, StrategyConfig, SummaryResponse};
use textsum::summarizer::NO_MATCH_MESSAGE;
use textsum::errors::{InputError, SummarizeError};

#[test]
fn test_parse_args_defaults() {
    let request = parse_args(Vec::<String>::new());
    assert_eq!(request.file, None);
    assert_eq!(request.strategy, None);
    assert_eq!(request.format, None);
    assert!(!request.show_help);

    let config = AppConfig::default();
    assert_eq!(request.strategy_or_default(&config), StrategyConfig::line_count(3));
    assert_eq!(request.format_or_default(&config), OutputFormat::Text);
}

#[test]
fn test_parse_args_line_count() {
    let request = parse_args(["lines=2"]);
    assert_eq!(request.strategy, Some(StrategyConfig::line_count(2)));

    // count is an alias and bad values are coerced rather than rejected
    let request = parse_args(["count=zero"]);
    assert_eq!(
        request.strategy,
        Some(StrategyConfig::LineCount {
            count: LineCount::parse("zero")
        })
    );
    assert_eq!(request.strategy, Some(StrategyConfig::line_count(1)));
}

#[test]
fn test_parse_args_keywords_with_quotes() {
    let request = parse_args(["keywords=\"Sunny, Birds\""]);
    assert_eq!(request.strategy, Some(StrategyConfig::keywords("sunny,birds")));
}

#[test]
fn test_parse_args_last_strategy_wins() {
    let request = parse_args(["keywords=sky", "lines=4"]);
    assert_eq!(request.strategy, Some(StrategyConfig::line_count(4)));

    let request = parse_args(["lines=4", "keywords=sky"]);
    assert_eq!(request.strategy, Some(StrategyConfig::keywords("sky")));
}

#[test]
fn test_parse_args_file_and_format() {
    let request = parse_args(["notes.txt", "format=json"]);
    assert_eq!(request.file, Some(PathBuf::from("notes.txt")));
    assert_eq!(request.format, Some(OutputFormat::Json));

    let request = parse_args(["file=other.txt"]);
    assert_eq!(request.file, Some(PathBuf::from("other.txt")));
}

#[test]
fn test_parse_args_ignores_invalid_format() {
    let request = parse_args(["format=yaml"]);
    assert_eq!(request.strategy, None);
    assert_eq!(request.format, None);
    assert_eq!(request.file, None);
}

#[test]
fn test_parse_args_file_name_containing_equals_sign() {
    let request = parse_args(["notes=v2.txt"]);
    assert_eq!(request.file, Some(PathBuf::from("notes=v2.txt")));
    assert_eq!(request.strategy, None);

    let request = parse_args(["Draft=final.txt", "lines=2"]);
    assert_eq!(request.file, Some(PathBuf::from("Draft=final.txt")));
    assert_eq!(request.strategy, Some(StrategyConfig::line_count(2)));

    // Recognised keys still win over the positional reading
    let request = parse_args(["file=a=b.txt"]);
    assert_eq!(request.file, Some(PathBuf::from("a=b.txt")));
}

#[test]
fn test_parse_args_help() {
    assert!(parse_args(["--help"]).show_help);
    assert!(parse_args(["notes.txt", "-h"]).show_help);
}

#[test]
fn test_strategy_falls_back_to_configured_line_count() {
    let config = AppConfig {
        default_line_count: LineCount::new(6),
        ..AppConfig::default()
    };
    let request = parse_args(["notes.txt"]);
    assert_eq!(request.strategy_or_default(&config), StrategyConfig::line_count(6));
}

#[test]
fn test_render_text_success_and_failure() {
    let rendered = render(&Ok("It is sunny today.".to_string()), OutputFormat::Text).unwrap();
    assert_eq!(rendered.body, "It is sunny today.");
    assert!(!rendered.is_error);

    let rendered = render(&Err(SummarizeError::EmptyInput), OutputFormat::Text).unwrap();
    assert_eq!(rendered.body, "Please enter or upload some text to summarize");
    assert!(rendered.is_error);
}

#[test]
fn test_render_json_matches_response_serialization() {
    let results = [
        Ok("The sky is blue.".to_string()),
        Ok(NO_MATCH_MESSAGE.to_string()),
        Err(SummarizeError::EmptyInput),
    ];

    for result in results {
        let rendered = render(&result, OutputFormat::Json).unwrap();
        assert_eq!(
            rendered.body,
            serde_json::to_string(&SummaryResponse::from(result.clone())).unwrap()
        );
        assert_eq!(rendered.is_error, result.is_err());
    }
}

#[test]
fn test_render_json_failure() {
    let rendered = render(&Err(SummarizeError::EmptyInput), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered.body).unwrap();
    assert_eq!(value, serde_json::json!({ "ok": false, "error": "EMPTY_INPUT" }));
    assert!(rendered.is_error);
}

#[test]
fn test_ensure_plain_text() {
    assert!(ensure_plain_text(Path::new("notes.txt")).is_ok());
    assert!(ensure_plain_text(Path::new("NOTES")).is_ok());
    assert!(matches!(
        ensure_plain_text(Path::new("photo.png")),
        Err(InputError::UnsupportedFileType(_))
    ));
}

#[test]
fn test_read_text_from_reader() {
    let text = read_text("Hello there. General Kenobi.".as_bytes()).unwrap();
    assert_eq!(text, "Hello there. General Kenobi.");
}

#[test]
fn test_read_text_rejects_invalid_utf8() {
    let bytes: &[u8] = &[0xff, 0xfe, 0xfd];
    assert!(matches!(read_text(bytes), Err(InputError::Io(_))));
}

#[test]
fn test_read_text_file_round_trip() {
    let path = std::env::temp_dir().join(format!("textsum-cli-{}.txt", std::process::id()));
    std::fs::write(&path, "The sky is blue. It is sunny today.").unwrap();

    let text = read_text_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(text, "The sky is blue. It is sunny today.");
}

#[test]
fn test_read_text_file_missing() {
    let path = std::env::temp_dir().join("textsum-definitely-missing-file.txt");
    assert!(matches!(read_text_file(&path), Err(InputError::Io(_))));
}
