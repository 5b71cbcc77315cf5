//! visitor_profile library: client profiling via third-party lookup APIs.
//!
//! This library geolocates an IP address and parses a user-agent string by
//! querying two HTTP APIs sequentially, combining the results into a single
//! printable report.
//!
//! # Example
//!
//! ```no_run
//! use visitor_profile::{run_lookup, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     ip_api_key: "token".to_string(),
//!     user_agent_api_key: "key".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_lookup(config).await?;
//! print!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
mod models;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{exit_code_for, ErrorKind, InitializationError, LookupError};
pub use models::{IpRecord, UserAgentParse, UserAgentRecord, UserAgentResult};
pub use run::{run_lookup, LookupReport};

// Internal run module (contains the orchestration logic)
mod run {
    use std::fmt;

    use log::info;

    use crate::config::Config;
    use crate::error_handling::LookupError;
    use crate::fetch::{fetch_ip_record, fetch_user_agent_record};
    use crate::initialization::init_client;
    use crate::models::{IpRecord, UserAgentRecord};

    /// Combined results of one profiling run.
    ///
    /// Its `Display` impl renders the fixed summary: nine geolocation lines
    /// followed by five user-agent lines, one `<Label>: <value>` pair per
    /// line.
    #[derive(Debug, Clone)]
    pub struct LookupReport {
        /// Geolocation data for the target IP
        pub ip: IpRecord,
        /// Parsed data for the target user-agent string
        pub user_agent: UserAgentRecord,
    }

    impl fmt::Display for LookupReport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "IP Address: {}", self.ip.ip)?;
            writeln!(f, "Hostname: {}", self.ip.hostname)?;
            writeln!(f, "City: {}", self.ip.city)?;
            writeln!(f, "Region: {}", self.ip.region)?;
            writeln!(f, "Country: {}", self.ip.country)?;
            writeln!(f, "Location: {}", self.ip.loc)?;
            writeln!(f, "Organization: {}", self.ip.org)?;
            writeln!(f, "Postal Code: {}", self.ip.postal)?;
            writeln!(f, "Timezone: {}", self.ip.timezone)?;
            writeln!(f, "User Agent String: {}", self.user_agent.parse.user_agent)?;
            writeln!(f, "Software Name: {}", self.user_agent.parse.software_name)?;
            writeln!(
                f,
                "Software Version: {}",
                self.user_agent.parse.software_version
            )?;
            writeln!(
                f,
                "Operating System Name: {}",
                self.user_agent.parse.operating_system_name
            )?;
            writeln!(
                f,
                "Operating System Version: {}",
                self.user_agent.parse.operating_system_version
            )
        }
    }

    /// Runs one profiling pass with the provided configuration.
    ///
    /// Validates the credentials eagerly (no network activity happens when
    /// either key is empty), then calls the geolocation API and the
    /// user-agent parsing API strictly in sequence. The first failure aborts
    /// the run, so no partial summary is ever produced.
    ///
    /// # Errors
    ///
    /// - `LookupError::Config` if either API key is empty
    /// - `LookupError::Network` if a request cannot be completed
    /// - `LookupError::Decode` if a response body has the wrong shape
    pub async fn run_lookup(config: Config) -> Result<LookupReport, LookupError> {
        if config.ip_api_key.is_empty() || config.user_agent_api_key.is_empty() {
            return Err(LookupError::Config(
                "API key is missing. Set IP_API_KEY and USER_AGENT_API_KEY.".to_string(),
            ));
        }

        let client = init_client(&config)?;

        info!("Looking up geolocation for {}", config.target_ip);
        let ip = fetch_ip_record(
            &client,
            &config.ip_api_base,
            &config.target_ip,
            &config.ip_api_key,
        )
        .await?;

        info!("Parsing user agent string");
        let user_agent = fetch_user_agent_record(
            &client,
            &config.user_agent_api_url,
            &config.target_user_agent,
            &config.user_agent_api_key,
        )
        .await?;

        Ok(LookupReport { ip, user_agent })
    }

}
