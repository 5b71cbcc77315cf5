//! Error classification and exit-code policy.

use super::types::{ErrorKind, LookupError};

/// Classifies a `reqwest::Error` into a `LookupError`.
///
/// Body-decode failures reported by reqwest count as `Decode` so that the
/// decode/network distinction survives no matter which layer noticed the
/// malformed body. Everything else (builder, connect, timeout, request,
/// status) is a `Network` failure.
pub fn classify_reqwest_error(error: reqwest::Error) -> LookupError {
    if error.is_decode() {
        // reqwest wraps the serde error; keep its message by going through
        // a synthetic serde_json error rather than losing the chain.
        let msg = error.to_string();
        LookupError::Decode(serde_json::Error::io(std::io::Error::other(msg)))
    } else {
        LookupError::Network(error)
    }
}

/// Process exit code for a failed run.
///
/// `1` for configuration errors (checked before any network activity),
/// `2` for lookup failures. Success is `0`, decided by the caller.
pub fn exit_code_for(error: &LookupError) -> i32 {
    match error.kind() {
        ErrorKind::Config => 1,
        ErrorKind::Network | ErrorKind::Decode => 2,
    }
}
