use serde::Serialize;

use crate::domain::RevokeVerificationMessage;
use crate::transport::envelope::{Reply, TransportError, decode_envelope};

#[derive(Debug, Serialize)]
struct RevokeVerificationMessageBody<'a> {
    request_id: &'a str,
}

pub fn encode_revoke_verification_message(
    request: &RevokeVerificationMessage,
) -> Result<serde_json::Value, TransportError> {
    Ok(serde_json::to_value(RevokeVerificationMessageBody {
        request_id: request.request_id().as_str(),
    })?)
}

/// `result` is `true` when the revocation request was accepted. Delivery is not
/// guaranteed to stop; watch the delivery status for `revoked`.
pub fn decode_revoke_verification_message_response(
    json: &str,
) -> Result<Reply<bool>, TransportError> {
    decode_envelope(json)
}
