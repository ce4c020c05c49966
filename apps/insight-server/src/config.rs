//! Server configuration
//!
//! Values come from command-line flags, falling back to environment
//! variables (a `.env` file is loaded first when present). The completion
//! API key has no default and must be supplied from outside.

use chrono::Duration;
use clap::Parser;
use completion_client::anthropic::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use completion_client::AnthropicConfig;
use thiserror::Error;

use crate::session::DEFAULT_SESSION_TTL_MINUTES;

/// Command-line arguments for the insight server
#[derive(Parser)]
#[command(name = "insight-server")]
#[command(about = "Turn uploaded PDFs and tables into AI-written slide decks and reports")]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    pub rate_limit: u32,

    /// Minutes a session may sit idle before it is dropped
    #[arg(long, env = "SESSION_TTL_MINUTES", default_value_t = DEFAULT_SESSION_TTL_MINUTES)]
    pub session_ttl: u32,

    /// Completion model identifier
    #[arg(long, env = "ANTHROPIC_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the completion API
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base: String,

    /// Completion API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ANTHROPIC_API_KEY is not set; export it or add it to .env")]
    MissingApiKey,

    #[error("Rate limit must be at least 1 request/second")]
    InvalidRateLimit,

    #[error("Session TTL must be at least 1 minute")]
    InvalidSessionTtl,
}

/// Validated settings; `Debug` never shows the API key
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub rate_limit: u32,
    pub session_ttl: Duration,
    pub completion: AnthropicConfig,
}

impl Settings {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_key = args
            .api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        if args.rate_limit == 0 {
            return Err(ConfigError::InvalidRateLimit);
        }
        if args.session_ttl == 0 {
            return Err(ConfigError::InvalidSessionTtl);
        }

        Ok(Self {
            host: args.host,
            port: args.port,
            rate_limit: args.rate_limit,
            session_ttl: Duration::minutes(i64::from(args.session_ttl)),
            completion: AnthropicConfig {
                api_key,
                base_url: args.api_base,
                model: args.model,
            },
        })
    }
}
