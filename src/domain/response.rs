use crate::domain::value::UnixTimestamp;

/// Successful gateway reply: the decoded `result` plus the raw response body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub result: T,
    pub body: String,
}

/// `RequestStatus` object returned by most gateway methods and posted to callback URLs.
///
/// Decimal amounts are kept as the exact JSON token (`0.01` stays `"0.01"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestStatus {
    pub request_id: String,
    pub phone_number: String,
    pub request_cost: String,
    pub is_refunded: Option<bool>,
    pub remaining_balance: Option<String>,
    pub delivery_status: Option<DeliveryStatus>,
    pub verification_status: Option<VerificationStatus>,
    pub payload: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryStatus {
    pub status: DeliveryState,
    pub updated_at: UnixTimestamp,
}

/// Message delivery state.
///
/// Values unknown to this crate are preserved in [`DeliveryState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeliveryState {
    Sent,
    Delivered,
    Read,
    Expired,
    Revoked,
    Other(String),
}

impl DeliveryState {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "sent" => Self::Sent,
            "delivered" => Self::Delivered,
            "read" => Self::Read,
            "expired" => Self::Expired,
            "revoked" => Self::Revoked,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Sent => "sent",
            Self::Delivered => "delivered",
            Self::Read => "read",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
            Self::Other(value) => value,
        }
    }

    /// Whether the message will not change state anymore.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Read | Self::Expired | Self::Revoked)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationStatus {
    pub status: VerificationState,
    pub updated_at: UnixTimestamp,
    pub code_entered: Option<String>,
}

/// Verification state of the code.
///
/// Values unknown to this crate are preserved in [`VerificationState::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VerificationState {
    CodeValid,
    CodeInvalid,
    CodeMaxAttemptsExceeded,
    Expired,
    Other(String),
}

impl VerificationState {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "code_valid" => Self::CodeValid,
            "code_invalid" => Self::CodeInvalid,
            "code_max_attempts_exceeded" => Self::CodeMaxAttemptsExceeded,
            "expired" => Self::Expired,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::CodeValid => "code_valid",
            Self::CodeInvalid => "code_invalid",
            Self::CodeMaxAttemptsExceeded => "code_max_attempts_exceeded",
            Self::Expired => "expired",
            Self::Other(value) => value,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::CodeValid)
    }
}

impl RequestStatus {
    /// Whether the gateway confirmed the code the user entered.
    pub fn is_code_valid(&self) -> bool {
        self.verification_status
            .as_ref()
            .is_some_and(|status| status.status.is_valid())
    }
}
