//! Typed Rust client for the Telegram Gateway verification API.
//!
//! The crate has a domain layer of strong types (validated request fields and
//! response models), a transport layer for the JSON wire format, and a small client
//! layer that performs one authenticated HTTP round trip per call.
//!
//! ```rust,no_run
//! use tg_gateway::{ApiToken, GatewayClient, RawPhoneNumber, SendVerificationMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tg_gateway::GatewayError> {
//!     let client = GatewayClient::new(ApiToken::new("...")?);
//!     let mut request = SendVerificationMessage::new(RawPhoneNumber::new("+15555550123")?);
//!     request.set_code_length(6)?.set_ttl(300)?;
//!     let response = client.send_verification_message(&request).await?;
//!     println!("request id: {}", response.result.request_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod callback;
pub mod client;
pub mod domain;
mod transport;

pub use callback::CallbackRequest;
pub use client::{GatewayClient, GatewayClientBuilder, GatewayError, TOKEN_ENV_VAR};
pub use domain::{
    ApiResponse, ApiToken, CallbackUrl, CheckSendAbility, CheckVerificationStatus, CodeLength,
    DeliveryState, DeliveryStatus, Payload, PhoneNumber, RawPhoneNumber, RequestId,
    RequestStatus, RevokeVerificationMessage, SendVerificationMessage, SenderUsername,
    TtlSeconds, UnixTimestamp, ValidationError, VerificationCode, VerificationState,
    VerificationStatus,
};
