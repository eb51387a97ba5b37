use serde::Deserialize;
use serde::de::Error as DeError;

use crate::domain::{
    DeliveryState, DeliveryStatus, RequestStatus, UnixTimestamp, VerificationState,
    VerificationStatus,
};
use crate::transport::envelope::{Reply, TransportError, decode_envelope};

/// Decimal amount sent by the gateway as a JSON number or string.
///
/// Numbers keep their raw JSON token so `0.010` is not reformatted to `0.01`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TransportAmount(String);

impl<'de> Deserialize<'de> for TransportAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => serde_json::from_str::<String>(token)
                .map(Self)
                .map_err(D::Error::custom),
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected amount to be a JSON number or string",
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RequestStatusJson {
    request_id: String,
    phone_number: String,
    request_cost: TransportAmount,
    is_refunded: Option<bool>,
    remaining_balance: Option<TransportAmount>,
    delivery_status: Option<DeliveryStatusJson>,
    verification_status: Option<VerificationStatusJson>,
    payload: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct DeliveryStatusJson {
    status: String,
    updated_at: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct VerificationStatusJson {
    status: String,
    updated_at: i64,
    code_entered: Option<String>,
}

impl From<RequestStatusJson> for RequestStatus {
    fn from(value: RequestStatusJson) -> Self {
        Self {
            request_id: value.request_id,
            phone_number: value.phone_number,
            request_cost: value.request_cost.0,
            is_refunded: value.is_refunded,
            remaining_balance: value.remaining_balance.map(|amount| amount.0),
            delivery_status: value.delivery_status.map(|status| DeliveryStatus {
                status: DeliveryState::from_wire(&status.status),
                updated_at: UnixTimestamp::new(status.updated_at),
            }),
            verification_status: value.verification_status.map(|status| VerificationStatus {
                status: VerificationState::from_wire(&status.status),
                updated_at: UnixTimestamp::new(status.updated_at),
                code_entered: status.code_entered,
            }),
            payload: value.payload,
        }
    }
}

/// Decode an enveloped `RequestStatus` (`{"ok": true, "result": {...}}`).
pub fn decode_request_status_response(json: &str) -> Result<Reply<RequestStatus>, TransportError> {
    Ok(match decode_envelope::<RequestStatusJson>(json)? {
        Reply::Ok(status) => Reply::Ok(status.into()),
        Reply::Rejected(error) => Reply::Rejected(error),
    })
}

/// Decode a bare `RequestStatus` object, as posted to callback URLs.
pub fn decode_request_status(json: &str) -> Result<RequestStatus, TransportError> {
    let parsed: RequestStatusJson = serde_json::from_str(json)?;
    Ok(parsed.into())
}
