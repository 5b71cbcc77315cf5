//! User-agent parsing client.

use reqwest::header::CONTENT_TYPE;

use crate::error_handling::{classify_reqwest_error, LookupError};
use crate::models::UserAgentRecord;

/// Fetches parsed user-agent data from the parsing API.
///
/// Issues a single `POST` to `endpoint` with a `{"user_agent": ...}` JSON
/// body, authenticated via the `X-API-KEY` header. The raw response body is
/// logged at debug level before decoding, since the service reports its own
/// error conditions inside the body (`result` sub-record) rather than
/// through HTTP status codes.
///
/// # Errors
///
/// `LookupError::Network` on connection failure or timeout;
/// `LookupError::Decode` if the body is not JSON of the expected shape.
pub async fn fetch_user_agent_record(
    client: &reqwest::Client,
    endpoint: &str,
    user_agent: &str,
    api_key: &str,
) -> Result<UserAgentRecord, LookupError> {
    let payload = serde_json::json!({ "user_agent": user_agent });

    log::debug!("Requesting user agent parse");
    let response = client
        .post(endpoint)
        .header(CONTENT_TYPE, "application/json")
        .header("X-API-KEY", api_key)
        .body(payload.to_string())
        .send()
        .await
        .map_err(classify_reqwest_error)?;

    let body = response.text().await.map_err(classify_reqwest_error)?;
    log::debug!("User agent parse raw response: {body}");

    serde_json::from_str(&body).map_err(LookupError::Decode)
}
