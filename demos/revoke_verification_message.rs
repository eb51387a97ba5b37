use std::io;

use tg_gateway::{GatewayClient, RequestId, RevokeVerificationMessage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request_id = std::env::var("TG_GATEWAY_REQUEST_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TG_GATEWAY_REQUEST_ID environment variable is required",
        )
    })?;

    let client = GatewayClient::from_env()?;
    let request = RevokeVerificationMessage::new(RequestId::new(request_id)?);
    let response = client.revoke_verification_message(&request).await?;

    println!("revocation accepted: {}", response.result);

    Ok(())
}
