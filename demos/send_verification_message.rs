use std::io;

use tg_gateway::{CheckSendAbility, GatewayClient, RawPhoneNumber, RequestId, SendVerificationMessage};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone_raw = std::env::var("TG_GATEWAY_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TG_GATEWAY_PHONE environment variable is required",
        )
    })?;
    let callback_url = std::env::var("TG_GATEWAY_CALLBACK_URL").ok();

    let client = GatewayClient::from_env()?;
    let phone = RawPhoneNumber::new(phone_raw)?;

    // a send reusing the request id of a successful ability check is free
    let ability = client
        .check_send_ability(&CheckSendAbility::new(phone.clone()))
        .await?;

    let mut request = SendVerificationMessage::new(phone);
    request
        .set_request_id(RequestId::new(ability.result.request_id)?)
        .set_code_length(6)?
        .set_ttl(600)?;
    if let Some(url) = callback_url {
        request.set_callback_url(url)?;
    }

    let response = client.send_verification_message(&request).await?;
    println!(
        "request_id: {}, cost: {}, balance: {:?}, delivery: {:?}",
        response.result.request_id,
        response.result.request_cost,
        response.result.remaining_balance,
        response.result.delivery_status
    );

    Ok(())
}
