use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has `ok: true` but no `result`")]
    MissingResult,
}

/// Decoded gateway envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Ok(T),
    Rejected(Option<String>),
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    ok: bool,
    result: Option<T>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorOnly {
    error: Option<String>,
}

pub fn decode_envelope<T: DeserializeOwned>(json: &str) -> Result<Reply<T>, TransportError> {
    let parsed: Envelope<T> = serde_json::from_str(json)?;
    if !parsed.ok {
        return Ok(Reply::Rejected(parsed.error));
    }
    parsed
        .result
        .map(Reply::Ok)
        .ok_or(TransportError::MissingResult)
}

/// Best-effort extraction of the `error` string from a failed response body.
pub fn peek_error(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorOnly>(body)
        .ok()
        .and_then(|parsed| parsed.error)
}
