//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_IP_API_BASE, DEFAULT_TARGET_IP, DEFAULT_TARGET_USER_AGENT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT_API_URL,
};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from command-line arguments, with the credentials backed by
/// environment variables (which a `.env` file may supply). Both keys default
/// to the empty string: the emptiness check happens at run time, before any
/// network activity, so a missing key is reported as a configuration error
/// rather than a CLI usage error.
#[derive(Debug, Clone, Parser)]
#[command(name = "visitor_profile")]
#[command(about = "Geolocates an IP address and parses a user-agent string via third-party APIs")]
pub struct Config {
    /// API key for the IP geolocation service
    #[arg(long, env = "IP_API_KEY", default_value = "", hide_env_values = true)]
    pub ip_api_key: String,

    /// API key for the user-agent parsing service
    #[arg(
        long,
        env = "USER_AGENT_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub user_agent_api_key: String,

    /// IP address to geolocate
    #[arg(long = "ip", default_value = DEFAULT_TARGET_IP)]
    pub target_ip: String,

    /// User-agent string to parse
    #[arg(long = "user-agent", default_value = DEFAULT_TARGET_USER_AGENT)]
    pub target_user_agent: String,

    /// Base URL of the IP geolocation API
    #[arg(long, default_value = DEFAULT_IP_API_BASE)]
    pub ip_api_base: String,

    /// Full URL of the user-agent parsing API
    #[arg(long, default_value = DEFAULT_USER_AGENT_API_URL)]
    pub user_agent_api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ip_api_key: String::new(),
            user_agent_api_key: String::new(),
            target_ip: DEFAULT_TARGET_IP.to_string(),
            target_user_agent: DEFAULT_TARGET_USER_AGENT.to_string(),
            ip_api_base: DEFAULT_IP_API_BASE.to_string(),
            user_agent_api_url: DEFAULT_USER_AGENT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
