use serde::Serialize;

use crate::domain::CheckVerificationStatus;
use crate::transport::envelope::TransportError;

#[derive(Debug, Serialize)]
struct CheckVerificationStatusBody<'a> {
    request_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
}

pub fn encode_check_verification_status(
    request: &CheckVerificationStatus,
) -> Result<serde_json::Value, TransportError> {
    Ok(serde_json::to_value(CheckVerificationStatusBody {
        request_id: request.request_id().as_str(),
        code: request.code().map(|it| it.as_str()),
    })?)
}
