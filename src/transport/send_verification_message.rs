use serde::Serialize;

use crate::domain::SendVerificationMessage;
use crate::transport::envelope::TransportError;

#[derive(Debug, Serialize)]
struct SendVerificationMessageBody<'a> {
    phone_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sender_username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,
}

pub fn encode_send_verification_message(
    request: &SendVerificationMessage,
) -> Result<serde_json::Value, TransportError> {
    let body = SendVerificationMessageBody {
        phone_number: request.phone_number().raw(),
        request_id: request.request_id().map(|it| it.as_str()),
        sender_username: request.sender_username().map(|it| it.as_str()),
        code: request.code().map(|it| it.as_str()),
        code_length: request.code_length().map(|it| it.value()),
        callback_url: request.callback_url().map(|it| it.as_str()),
        payload: request.payload().map(|it| it.as_str()),
        ttl: request.ttl().map(|it| it.value()),
    };
    Ok(serde_json::to_value(body)?)
}
