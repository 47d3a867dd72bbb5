//! Service Configuration
//!
//! Command-line flags, each of which can also be supplied through an
//! `AUTOCOMPLETE_*` environment variable.

use crate::search::handlers::DEFAULT_MAX_MATCHES;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("max matches must be at least 1")]
    ZeroMaxMatches,
}

/// Prefix autocomplete service ranked by corpus word frequency.
#[derive(Parser, Debug, Clone)]
#[command(name = "autocomplete", version, about)]
pub struct ServiceConfig {
    /// Path to the corpus text file the index is built from
    #[arg(env = "AUTOCOMPLETE_CORPUS")]
    pub corpus_path: PathBuf,

    /// Address the HTTP server listens on
    #[arg(long, env = "AUTOCOMPLETE_BIND", default_value = "0.0.0.0:9000")]
    pub bind: SocketAddr,

    /// Maximum number of matches returned per query
    #[arg(
        long,
        env = "AUTOCOMPLETE_MAX_MATCHES",
        default_value_t = DEFAULT_MAX_MATCHES,
        value_parser = parse_max_matches
    )]
    pub max_matches: usize,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, env = "AUTOCOMPLETE_LOG_LEVEL", default_value = "info")]
    pub log_level: tracing::Level,
}

fn parse_max_matches(value: &str) -> Result<usize, ConfigError> {
    let max_matches: usize = value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber(value.to_string()))?;

    if max_matches == 0 {
        return Err(ConfigError::ZeroMaxMatches);
    }
    Ok(max_matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::try_parse_from(["autocomplete", "corpus.txt"]).unwrap();

        assert_eq!(config.corpus_path, PathBuf::from("corpus.txt"));
        assert_eq!(config.bind, "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.max_matches, 25);
        assert_eq!(config.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::try_parse_from([
            "autocomplete",
            "shakespeare.txt",
            "--bind",
            "127.0.0.1:8000",
            "--max-matches",
            "10",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(config.bind.port(), 8000);
        assert_eq!(config.max_matches, 10);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_rejects_zero_max_matches() {
        let result =
            ServiceConfig::try_parse_from(["autocomplete", "corpus.txt", "--max-matches", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_max_matches() {
        assert_eq!(parse_max_matches("25"), Ok(25));
        assert_eq!(parse_max_matches("0"), Err(ConfigError::ZeroMaxMatches));
        assert_eq!(
            parse_max_matches("many"),
            Err(ConfigError::InvalidNumber("many".to_string()))
        );
    }
}
