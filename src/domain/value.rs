use std::fmt;

use phonenumber::country;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::validation::ValidationError;

#[derive(Clone)]
/// Telegram Gateway API token sent as `Authorization: Bearer <token>`.
///
/// Invariant: non-empty after trimming. The value is kept in a [`SecretString`]
/// and never shows up in `Debug` output.
pub struct ApiToken(SecretString);

impl ApiToken {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "api_token";

    /// Create a validated [`ApiToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(trimmed.to_owned())))
    }

    /// Borrow the raw token.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken([REDACTED])")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to the gateway (`phone_number`).
///
/// Invariant: non-empty after trimming. The gateway expects E.164; this type does not
/// check it. Parse into [`PhoneNumber`] and convert if you want local normalization.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// JSON field name (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// JSON field name (`phone_number`).
    pub const FIELD: &'static str = "phone_number";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input has no explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;
        if !phonenumber::is_valid(&parsed) {
            return Err(ValidationError::InvalidPhoneNumber { input: raw });
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Gateway request identifier (`request_id`).
///
/// Either returned by the gateway (e.g. from `checkSendAbility`, which makes the
/// following send free of charge) or generated locally.
pub struct RequestId(String);

impl RequestId {
    /// JSON field name (`request_id`).
    pub const FIELD: &'static str = "request_id";

    /// Create a validated [`RequestId`] (non-empty after trimming).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Generate a fresh random (UUID v4) identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Username of the verified channel the code is sent from (`sender_username`).
///
/// A single leading `@` is stripped; everything else is kept as given.
pub struct SenderUsername(String);

impl SenderUsername {
    /// JSON field name (`sender_username`).
    pub const FIELD: &'static str = "sender_username";

    /// Create a sender username, dropping one leading `@`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let name = value.strip_prefix('@').unwrap_or(&value);
        if name.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-chosen verification code (`code`).
///
/// Invariant: `4..=8` bytes. The gateway only accepts digits; that part is left to it.
pub struct VerificationCode(String);

impl VerificationCode {
    /// JSON field name (`code`).
    pub const FIELD: &'static str = "code";

    pub const MIN_LEN: usize = 4;
    pub const MAX_LEN: usize = 8;

    /// Create a validated [`VerificationCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&value.len()) {
            return Err(ValidationError::LengthOutOfRange {
                field: Self::FIELD,
                min: Self::MIN_LEN,
                max: Self::MAX_LEN,
                actual: value.len(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Length of a gateway-generated code (`code_length`).
///
/// Invariant: `4..=8`. Ignored by the gateway when `code` is set.
pub struct CodeLength(u8);

impl CodeLength {
    /// JSON field name (`code_length`).
    pub const FIELD: &'static str = "code_length";

    pub const MIN: u8 = 4;
    pub const MAX: u8 = 8;

    /// Create a validated code length.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: u32::from(Self::MIN),
                max: u32::from(Self::MAX),
                actual: u32::from(value),
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// HTTPS URL receiving delivery reports (`callback_url`).
///
/// Invariant: `1..=256` bytes, starts with `https://` (scheme compared ASCII
/// case-insensitively). The rest of the URL is not parsed locally.
pub struct CallbackUrl(String);

impl CallbackUrl {
    /// JSON field name (`callback_url`).
    pub const FIELD: &'static str = "callback_url";

    pub const MAX_LEN: usize = 256;

    const SCHEME: &'static str = "https://";

    /// Create a validated [`CallbackUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if value.len() > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: value.len(),
            });
        }
        let secure = value
            .get(..Self::SCHEME.len())
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case(Self::SCHEME));
        if !secure {
            return Err(ValidationError::InsecureCallbackUrl { input: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Opaque custom payload echoed back in status reports (`payload`).
///
/// Invariant: `1..=128` bytes. Never shown to the user.
pub struct Payload(String);

impl Payload {
    /// JSON field name (`payload`).
    pub const FIELD: &'static str = "payload";

    pub const MAX_LEN: usize = 128;

    /// Create a validated [`Payload`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if value.len() > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_LEN,
                actual: value.len(),
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Seconds before an unread message expires and is deleted (`ttl`).
///
/// Invariant: `60..=86400`.
pub struct TtlSeconds(u32);

impl TtlSeconds {
    /// JSON field name (`ttl`).
    pub const FIELD: &'static str = "ttl";

    /// Minimum allowed TTL value.
    pub const MIN: u32 = 60;
    /// Maximum allowed TTL value.
    pub const MAX: u32 = 86_400;

    /// Create a validated TTL value.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying TTL in seconds.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unix timestamp in seconds, as reported by the gateway (`updated_at`).
pub struct UnixTimestamp(i64);

impl UnixTimestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}
