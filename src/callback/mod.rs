//! Delivery report callbacks: signature checks for requests the gateway posts to
//! `callback_url`.
//!
//! The gateway signs `"{timestamp}\n{body}"` with HMAC-SHA256, keyed by the SHA-256
//! digest of the API token, and sends the hex digest in [`SIGNATURE_HEADER`].

use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::domain::ApiToken;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the Unix timestamp the report was signed at.
pub const TIMESTAMP_HEADER: &str = "X-Request-Timestamp";
/// Header carrying the hex-encoded HMAC-SHA256 signature.
pub const SIGNATURE_HEADER: &str = "X-Request-Signature";

/// Inbound delivery report as received by your HTTP server.
///
/// `body` must be the exact bytes received; re-serialized JSON will not verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackRequest {
    pub timestamp: String,
    pub signature: String,
    pub body: String,
}

impl CallbackRequest {
    pub fn new(
        timestamp: impl Into<String>,
        signature: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            signature: signature.into(),
            body: body.into(),
        }
    }
}

fn keyed_mac(token: &ApiToken, timestamp: &str, body: &str) -> Result<HmacSha256, InvalidLength> {
    let key = Sha256::digest(token.expose().as_bytes());
    let mut mac = HmacSha256::new_from_slice(&key)?;
    mac.update(timestamp.as_bytes());
    mac.update(b"\n");
    mac.update(body.as_bytes());
    Ok(mac)
}

/// Compute the signature the gateway would send for `timestamp` and `body`.
///
/// Mostly useful to emulate the gateway in tests.
pub fn sign(token: &ApiToken, timestamp: &str, body: &str) -> Result<String, InvalidLength> {
    let mac = keyed_mac(token, timestamp, body)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check the callback signature in constant time.
pub fn verify(token: &ApiToken, request: &CallbackRequest) -> bool {
    let Ok(expected) = hex::decode(request.signature.trim()) else {
        return false;
    };
    keyed_mac(token, &request.timestamp, &request.body)
        .is_ok_and(|mac| mac.verify_slice(&expected).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{"request_id":"req-1","phone_number":"+15555550123","request_cost":0.01}"#;

    fn token() -> ApiToken {
        ApiToken::new("AAEAAAAAAA-test-token").unwrap()
    }

    #[test]
    fn signature_is_lowercase_hex_sha256() {
        let signature = sign(&token(), "1700000000", BODY).unwrap();
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn signed_request_verifies() {
        let signature = sign(&token(), "1700000000", BODY).unwrap();
        let request = CallbackRequest::new("1700000000", signature.clone(), BODY);
        assert!(verify(&token(), &request));

        let upper = CallbackRequest::new("1700000000", signature.to_uppercase(), BODY);
        assert!(verify(&token(), &upper));
    }

    #[test]
    fn tampering_breaks_verification() {
        let signature = sign(&token(), "1700000000", BODY).unwrap();

        let other_body = CallbackRequest::new("1700000000", signature.clone(), format!("{BODY} "));
        assert!(!verify(&token(), &other_body));

        let other_timestamp = CallbackRequest::new("1700000001", signature.clone(), BODY);
        assert!(!verify(&token(), &other_timestamp));

        let other_token = ApiToken::new("another-token").unwrap();
        let request = CallbackRequest::new("1700000000", signature, BODY);
        assert!(!verify(&other_token, &request));
    }

    #[test]
    fn garbage_signature_does_not_verify() {
        assert!(!verify(&token(), &CallbackRequest::new("1", "zz", BODY)));
        assert!(!verify(&token(), &CallbackRequest::new("1", "", BODY)));
        assert!(!verify(&token(), &CallbackRequest::new("1", "abcd", BODY)));
    }
}
