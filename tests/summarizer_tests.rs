use textsum::core::models::{StrategyConfig, SummaryRequest, SummaryResponse};
use textsum::errors::SummarizeError;
use textsum::summarizer::{NO_MATCH_MESSAGE, summarize, summarize_request};

const WEATHER: &str = "The sky is blue. It is sunny today. Birds fly high.";

#[test]
fn test_line_count_example() {
    let summary = summarize(WEATHER, &StrategyConfig::line_count(2)).unwrap();
    assert_eq!(summary, "The sky is blue. It is sunny today.");
}

#[test]
fn test_keyword_example() {
    let summary = summarize(WEATHER, &StrategyConfig::keywords("sunny")).unwrap();
    assert_eq!(summary, "It is sunny today.");
}

#[test]
fn test_keyword_no_match_example() {
    let summary = summarize(WEATHER, &StrategyConfig::keywords("ocean")).unwrap();
    assert_eq!(summary, NO_MATCH_MESSAGE);
    assert_eq!(summary, "No sentences found matching the given keywords.");
}

#[test]
fn test_empty_input_is_rejected_for_every_strategy() {
    let strategies = [
        StrategyConfig::line_count(3),
        StrategyConfig::keywords("sky"),
        StrategyConfig::keywords(""),
    ];

    for strategy in &strategies {
        assert_eq!(summarize("", strategy), Err(SummarizeError::EmptyInput));
        assert_eq!(summarize("   ", strategy), Err(SummarizeError::EmptyInput));
        assert_eq!(summarize("\n\t", strategy), Err(SummarizeError::EmptyInput));
    }
}

#[test]
fn test_empty_keyword_string_yields_no_match_message() {
    let summary = summarize(WEATHER, &StrategyConfig::keywords(" , ")).unwrap();
    assert_eq!(summary, NO_MATCH_MESSAGE);
}

#[test]
fn test_line_count_larger_than_text() {
    let summary = summarize(WEATHER, &StrategyConfig::line_count(50)).unwrap();
    assert_eq!(summary, WEATHER);
}

#[test]
fn test_line_count_zero_and_negative_are_coerced() {
    let expected = "The sky is blue.";
    assert_eq!(summarize(WEATHER, &StrategyConfig::line_count(0)).unwrap(), expected);
    assert_eq!(summarize(WEATHER, &StrategyConfig::line_count(-4)).unwrap(), expected);
}

#[test]
fn test_sentences_are_joined_with_single_space() {
    let text = "First line.\n\nSecond line.\n   Third line.";
    let summary = summarize(text, &StrategyConfig::line_count(3)).unwrap();
    assert_eq!(summary, "First line. Second line. Third line.");
}

#[test]
fn test_inputs_are_not_consumed() {
    let text = String::from(WEATHER);
    let strategy = StrategyConfig::keywords("blue");
    let before = strategy.clone();

    let _ = summarize(&text, &strategy);

    assert_eq!(text, WEATHER);
    assert_eq!(strategy, before);
}

#[test]
fn test_summarize_request_success_envelope() {
    let request = SummaryRequest::new(WEATHER, StrategyConfig::line_count(1));
    let response = summarize_request(&request);

    assert_eq!(response, SummaryResponse::success("The sky is blue."));
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({ "ok": true, "summary": "The sky is blue." })
    );
}

#[test]
fn test_summarize_request_error_envelope() {
    let request = SummaryRequest::new("   ", StrategyConfig::default());
    let response = summarize_request(&request);

    assert!(!response.ok);
    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        serde_json::json!({ "ok": false, "error": "EMPTY_INPUT" })
    );
}

#[test]
fn test_summarize_is_callable_from_many_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            std::thread::spawn(move || summarize(WEATHER, &StrategyConfig::line_count(n)))
        })
        .collect();

    let lengths: Vec<usize> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap().len())
        .collect();

    assert_eq!(lengths, vec![16, 35, 51, 51]);
}
