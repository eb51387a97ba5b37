use serde::Serialize;

use crate::domain::CheckSendAbility;
use crate::transport::envelope::TransportError;

#[derive(Debug, Serialize)]
struct CheckSendAbilityBody<'a> {
    phone_number: &'a str,
}

pub fn encode_check_send_ability(
    request: &CheckSendAbility,
) -> Result<serde_json::Value, TransportError> {
    Ok(serde_json::to_value(CheckSendAbilityBody {
        phone_number: request.phone_number().raw(),
    })?)
}
