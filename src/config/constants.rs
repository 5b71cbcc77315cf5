//! Configuration constants.
//!
//! This module defines the default endpoints, targets, and timeouts used
//! when no CLI flag or environment variable overrides them.

/// Base URL of the IP geolocation API.
///
/// The lookup path is `<base>/<ip>/json?token=<key>`. Overridable via
/// `--ip-api-base`, mainly so tests can point at a local mock server.
pub const DEFAULT_IP_API_BASE: &str = "https://ipinfo.io";

/// Endpoint of the user-agent parsing API.
pub const DEFAULT_USER_AGENT_API_URL: &str =
    "https://api.whatismybrowser.com/api/v2/user_agent_parse";

/// IP address profiled when `--ip` is not given.
pub const DEFAULT_TARGET_IP: &str = "8.8.8.8";

/// User-agent string parsed when `--user-agent` is not given.
pub const DEFAULT_TARGET_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_11_2) AppleWebKit/601.3.9 (KHTML, like Gecko) Version/9.0.2 Safari/601.3.9";

/// Per-request timeout in seconds.
///
/// Applied to the shared HTTP client, so both API calls are bounded.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
