use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
        actual: u32,
    },
    InsecureCallbackUrl {
        input: String,
    },
    InvalidPhoneNumber {
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} bytes (max {max})")
            }
            Self::LengthOutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} length out of range: {actual} (expected {min}..={max})"
            ),
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(f, "{field} out of range: {actual} (expected {min}..={max})"),
            Self::InsecureCallbackUrl { input } => {
                write!(f, "callback url must use https://: {input}")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
