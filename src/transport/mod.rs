//! Transport layer: JSON wire format of the gateway (request bodies and envelopes).

mod check_send_ability;
mod check_verification_status;
mod envelope;
mod request_status;
mod revoke_verification_message;
mod send_verification_message;

pub use check_send_ability::encode_check_send_ability;
pub use check_verification_status::encode_check_verification_status;
pub use envelope::{Reply, TransportError, peek_error};
pub use request_status::{decode_request_status, decode_request_status_response};
pub use revoke_verification_message::{
    decode_revoke_verification_message_response, encode_revoke_verification_message,
};
pub use send_verification_message::encode_send_verification_message;

/// Gateway API methods; each maps to `POST <base>/<method>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    SendVerificationMessage,
    CheckSendAbility,
    CheckVerificationStatus,
    RevokeVerificationMessage,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SendVerificationMessage => "sendVerificationMessage",
            Self::CheckSendAbility => "checkSendAbility",
            Self::CheckVerificationStatus => "checkVerificationStatus",
            Self::RevokeVerificationMessage => "revokeVerificationMessage",
        }
    }
}
