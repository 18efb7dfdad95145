use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use textsum::cli::{USAGE, input, parse_args, render};
use textsum::core::config::{AppConfig, OutputFormat};
use textsum::core::models::SummaryRequest;
use textsum::summarizer::summarize;
use tracing::{error, info, info_span};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // The logging preference comes from config, so fall back to plain.
            textsum::setup_logging_plain();
            return Err(anyhow::Error::msg(e).context("Config error"));
        }
    };

    if config.json_logs {
        textsum::setup_logging();
    } else {
        textsum::setup_logging_plain();
    }

    let cli = parse_args(std::env::args().skip(1));
    if cli.show_help {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    let text = match &cli.file {
        Some(path) => input::read_text_file(path)
            .with_context(|| format!("Could not load {}", path.display()))?,
        None => input::read_text(io::stdin().lock()).context("Could not read standard input")?,
    };

    let request = SummaryRequest::new(text, cli.strategy_or_default(&config));
    let span = info_span!("summarize", correlation_id = %request.correlation_id);
    let _guard = span.enter();

    info!("Summarizing with strategy {}", request.strategy.kind());
    let result = summarize(&request.text, &request.strategy);
    if let Err(e) = &result {
        info!(error = e.code(), "Summary request rejected");
    }

    let format = cli.format_or_default(&config);
    let rendered = render(&result, format).context("Could not render summary")?;

    // The JSON envelope always goes to stdout, plain error text to stderr.
    if rendered.is_error && format == OutputFormat::Text {
        eprintln!("{}", rendered.body);
    } else {
        println!("{}", rendered.body);
    }

    Ok(if rendered.is_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
