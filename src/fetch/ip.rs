//! IP geolocation lookup client.

use url::Url;

use crate::error_handling::{classify_reqwest_error, LookupError};
use crate::models::IpRecord;

/// Fetches geolocation data for `ip` from the lookup API.
///
/// Issues a single `GET <base>/<ip>/json?token=<token>` request, reads the
/// body to completion, and decodes it into an [`IpRecord`]. One attempt
/// only; the client's timeout bounds the whole exchange. The IP string is
/// passed through unvalidated, so a malformed value is the remote service's
/// problem to reject.
///
/// # Errors
///
/// `LookupError::Network` on connection failure, timeout, or a non-success
/// HTTP status; `LookupError::Decode` if the body is not JSON of the
/// expected shape.
pub async fn fetch_ip_record(
    client: &reqwest::Client,
    base_url: &str,
    ip: &str,
    token: &str,
) -> Result<IpRecord, LookupError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| LookupError::Config(format!("Invalid IP API base URL {base_url:?}: {e}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| LookupError::Config(format!("IP API base URL {base_url:?} cannot be a base")))?;
        segments.pop_if_empty().push(ip).push("json");
    }
    url.query_pairs_mut().append_pair("token", token);

    log::debug!("Requesting geolocation for {ip}");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(classify_reqwest_error)?
        .error_for_status()
        .map_err(classify_reqwest_error)?;

    let body = response.text().await.map_err(classify_reqwest_error)?;
    serde_json::from_str(&body).map_err(LookupError::Decode)
}
