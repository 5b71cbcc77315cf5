//! Deserialized API response records.
//!
//! Each record is populated once by decoding a response body, read for
//! printing, and dropped. Absent JSON fields decode to their defaults so a
//! sparse response still yields a usable record.

use serde::Deserialize;

/// Geolocation data for a single IP address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IpRecord {
    pub ip: String,
    pub hostname: String,
    pub city: String,
    pub region: String,
    pub country: String,
    /// Coordinates as a "lat,lon" string, as returned by the API.
    pub loc: String,
    pub org: String,
    pub postal: String,
    pub timezone: String,
}

/// Parsed user-agent data: a `parse` sub-record with the extracted fields
/// and a `result` sub-record describing the API call outcome.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserAgentRecord {
    pub parse: UserAgentParse,
    pub result: UserAgentResult,
}

/// Fields extracted from the user-agent string by the parsing service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserAgentParse {
    pub simple_software_string: String,
    pub simple_sub_description_string: String,
    pub simple_operating_platform_string: String,
    pub software: String,
    pub software_name: String,
    pub software_name_code: String,
    pub software_version: String,
    pub software_version_full: Vec<String>,
    pub operating_system: String,
    pub operating_system_name: String,
    pub operating_system_name_code: String,
    pub operating_system_flavour: String,
    pub operating_system_flavour_code: String,
    pub operating_system_version: String,
    pub operating_system_version_full: Vec<String>,
    pub is_abusive: bool,
    /// The raw user-agent string the service parsed.
    pub user_agent: String,
}

/// Call outcome reported by the parsing service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserAgentResult {
    pub code: String,
    pub message_code: String,
    pub message: String,
}
