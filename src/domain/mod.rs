//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CheckSendAbility, CheckVerificationStatus, RevokeVerificationMessage, SendVerificationMessage,
};
pub use response::{
    ApiResponse, DeliveryState, DeliveryStatus, RequestStatus, VerificationState,
    VerificationStatus,
};
pub use validation::ValidationError;
pub use value::{
    ApiToken, CallbackUrl, CodeLength, Payload, PhoneNumber, RawPhoneNumber, RequestId,
    SenderUsername, TtlSeconds, UnixTimestamp, VerificationCode,
};
