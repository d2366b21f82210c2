//! Command-line entrypoint.
//!
//! Usage: `fuzzy-topsis [REQUEST_FILE]`
//!
//! Reads a request from `REQUEST_FILE` (`.json`, `.yaml`, or `.yml`) or, when
//! no file is given, a JSON request from stdin. The response is written to
//! stdout as JSON and logs go to stderr.

use std::io::Read;
use std::process::ExitCode;

use fuzzy_topsis::adapters::payload::{
    load_request, ErrorResponse, FuzzyTopsisResponse, RequestProcessor,
};
use fuzzy_topsis::application::CalculateRankingHandler;
use fuzzy_topsis::config::{AppConfig, LoggingConfig};
use fuzzy_topsis::domain::foundation::{DomainError, ErrorCode};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::from(2);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::from(2);
    }

    init_tracing(&config.logging);
    tracing::debug!(
        policy = %config.engine.ideal_solution_policy,
        precision = config.engine.display_precision,
        "Configuration loaded"
    );

    let processor = RequestProcessor::new(CalculateRankingHandler::new(config.engine));

    match run(&processor, std::env::args().nth(1)) {
        Ok(response) => print_json(&response),
        Err(err) => {
            tracing::error!(code = %err.code, error = %err, "Request failed");
            let _ = print_json(&ErrorResponse::from(&err));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(processor: &RequestProcessor, path: Option<String>) -> Result<FuzzyTopsisResponse, DomainError> {
    match path {
        Some(path) => {
            let request = load_request(&path)?;
            processor.process(&request)
        }
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body).map_err(|e| {
                DomainError::new(ErrorCode::InvalidRequest, format!("Failed to read stdin: {}", e))
            })?;
            processor.process_json(&body)
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to serialize response: {}", e);
            ExitCode::FAILURE
        }
    }
}
