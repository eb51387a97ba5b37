use crate::domain::validation::ValidationError;
use crate::domain::value::{
    CallbackUrl, CodeLength, Payload, RawPhoneNumber, RequestId, SenderUsername, TtlSeconds,
    VerificationCode,
};

/// `sendVerificationMessage` request.
///
/// Created with only the phone number and filled in through validated setters.
/// A setter that rejects its input leaves the previous value in place.
///
/// ```rust
/// use tg_gateway::{RawPhoneNumber, SendVerificationMessage};
///
/// # fn main() -> Result<(), tg_gateway::ValidationError> {
/// let mut request = SendVerificationMessage::new(RawPhoneNumber::new("+15555550123")?);
/// request.set_code("1234")?.set_ttl(120)?;
/// let request_id = request.set_auto_request_id();
/// assert_eq!(request.request_id(), Some(&request_id));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendVerificationMessage {
    phone_number: RawPhoneNumber,
    request_id: Option<RequestId>,
    sender_username: Option<SenderUsername>,
    code: Option<VerificationCode>,
    code_length: Option<CodeLength>,
    callback_url: Option<CallbackUrl>,
    payload: Option<Payload>,
    ttl: Option<TtlSeconds>,
}

impl SendVerificationMessage {
    pub fn new(phone_number: RawPhoneNumber) -> Self {
        Self {
            phone_number,
            request_id: None,
            sender_username: None,
            code: None,
            code_length: None,
            callback_url: None,
            payload: None,
            ttl: None,
        }
    }

    /// Assign a freshly generated request id and return it.
    pub fn set_auto_request_id(&mut self) -> RequestId {
        let request_id = RequestId::generate();
        self.request_id = Some(request_id.clone());
        request_id
    }

    /// Use an id returned by `checkSendAbility`; the send is then free of charge.
    pub fn set_request_id(&mut self, request_id: RequestId) -> &mut Self {
        self.request_id = Some(request_id);
        self
    }

    /// Time-to-live in seconds, `60..=86400`.
    pub fn set_ttl(&mut self, seconds: u32) -> Result<&mut Self, ValidationError> {
        self.ttl = Some(TtlSeconds::new(seconds)?);
        Ok(self)
    }

    /// Custom payload, `1..=128` bytes.
    pub fn set_payload(&mut self, payload: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.payload = Some(Payload::new(payload)?);
        Ok(self)
    }

    /// Delivery report URL, `https://` only, up to 256 bytes.
    pub fn set_callback_url(
        &mut self,
        url: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.callback_url = Some(CallbackUrl::new(url)?);
        Ok(self)
    }

    /// Channel username; a leading `@` is stripped.
    ///
    /// Fails with [`ValidationError::Empty`] for `""` or a lone `@`, leaving any
    /// previously set username in place.
    pub fn set_sender_username(
        &mut self,
        username: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.sender_username = Some(SenderUsername::new(username)?);
        Ok(self)
    }

    /// Caller-chosen code, 4 to 8 characters.
    pub fn set_code(&mut self, code: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.code = Some(VerificationCode::new(code)?);
        Ok(self)
    }

    /// Length of the code the gateway generates, `4..=8`.
    pub fn set_code_length(&mut self, length: u8) -> Result<&mut Self, ValidationError> {
        self.code_length = Some(CodeLength::new(length)?);
        Ok(self)
    }

    pub fn phone_number(&self) -> &RawPhoneNumber {
        &self.phone_number
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn sender_username(&self) -> Option<&SenderUsername> {
        self.sender_username.as_ref()
    }

    pub fn code(&self) -> Option<&VerificationCode> {
        self.code.as_ref()
    }

    pub fn code_length(&self) -> Option<CodeLength> {
        self.code_length
    }

    pub fn callback_url(&self) -> Option<&CallbackUrl> {
        self.callback_url.as_ref()
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn ttl(&self) -> Option<TtlSeconds> {
        self.ttl
    }
}

/// `checkSendAbility` request.
///
/// The returned `request_id` can be passed to [`SendVerificationMessage::set_request_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSendAbility {
    phone_number: RawPhoneNumber,
}

impl CheckSendAbility {
    pub fn new(phone_number: RawPhoneNumber) -> Self {
        Self { phone_number }
    }

    pub fn phone_number(&self) -> &RawPhoneNumber {
        &self.phone_number
    }
}

/// `checkVerificationStatus` request.
///
/// Attach the code the user entered with [`CheckVerificationStatus::with_code`] to have
/// the gateway check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckVerificationStatus {
    request_id: RequestId,
    code: Option<VerificationCode>,
}

impl CheckVerificationStatus {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            code: None,
        }
    }

    pub fn with_code(mut self, code: VerificationCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn code(&self) -> Option<&VerificationCode> {
        self.code.as_ref()
    }
}

/// `revokeVerificationMessage` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevokeVerificationMessage {
    request_id: RequestId,
}

impl RevokeVerificationMessage {
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}
