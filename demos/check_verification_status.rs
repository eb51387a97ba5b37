use std::io;

use tg_gateway::{CheckVerificationStatus, GatewayClient, RequestId, VerificationCode};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request_id = std::env::var("TG_GATEWAY_REQUEST_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TG_GATEWAY_REQUEST_ID environment variable is required",
        )
    })?;

    let mut request = CheckVerificationStatus::new(RequestId::new(request_id)?);
    if let Ok(code) = std::env::var("TG_GATEWAY_CODE") {
        request = request.with_code(VerificationCode::new(code)?);
    }

    let client = GatewayClient::from_env()?;
    let response = client.check_verification_status(&request).await?;

    println!(
        "code valid: {}, verification: {:?}, delivery: {:?}",
        response.result.is_code_valid(),
        response.result.verification_status,
        response.result.delivery_status
    );

    Ok(())
}
