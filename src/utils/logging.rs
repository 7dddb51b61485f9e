//! Structured logging setup and log sanitization.
//!
//! Configures the `tracing` ecosystem for the application and provides a
//! helper to keep the upstream API key out of log sinks.

use crate::config::LoggingConfig;
use crate::error::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber for the application.
///
/// Supports two output formats:
/// - `json`: Structured JSON logs for production ingestion.
/// - `pretty` (default): Human-readable, colorized output for development.
///
/// Log levels are controlled via the `RUST_LOG` environment variable or
/// the provided `LoggingConfig`.
pub fn init(config: &LoggingConfig) -> Result<()> {
    // Configure filter from environment or config file
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}

/// Sanitizes the API key from log messages.
///
/// The credential travels as a `key=` query parameter on the upstream URL,
/// so any logged URL or error text containing one is scrubbed before it
/// reaches a log sink.
pub fn sanitize(input: &str) -> String {
    let mut result = input.to_string();
    let mut search_from = 0;

    while let Some(offset) = result[search_from..].find("key=") {
        let start = search_from + offset + "key=".len();
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED]");
        search_from = start + "[REDACTED]".len();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key_param() {
        let input = "POST https://example.com/v1beta/models/gemini-2.5-flash:generateContent?key=AIzaSyAbc123";
        let output = sanitize(input);
        assert!(output.contains("key=[REDACTED]"));
        assert!(!output.contains("AIzaSyAbc123"));
    }

    #[test]
    fn test_sanitize_preserves_following_params(){
        let input = "url?key=secret&alt=json";
        let output = sanitize(input);
        assert_eq!(output, "url?key=[REDACTED]&alt=json");
    }

    #[test]
    fn test_sanitize_plain_text_untouched() {
        let input = "no credentials here";
        assert_eq!(sanitize(input), input);
    }
}
