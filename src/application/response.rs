//! Service response envelope
//!
//! Every editor operation returns a `ServiceResponse`. Expected failures
//! (missing gift, unknown id, rejected validation, unsupported rule) are a
//! `Failure` with a message, never a panic or an `Err`.

use thiserror::Error;

/// Message for an absent gift argument
pub const GIFT_MISSING: &str = "gift must not be null";
/// Message for an absent gift item argument
pub const ITEM_MISSING: &str = "gift item must not be null";
/// Message for an ordering rule that maps to no comparator
pub const UNSUPPORTED_RULE: &str = "unsupported ordering rule";

/// Result of an editor operation
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse<T> {
    /// Operation succeeded; `message` may be empty
    Success { message: String, data: T },
    /// Operation was refused
    Failure { message: String },
}

/// A failed response turned into an error value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ResponseError {
    pub message: String,
}

impl<T> ServiceResponse<T> {
    pub fn success(data: T) -> Self {
        ServiceResponse::Success {
            message: String::new(),
            data,
        }
    }

    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        ServiceResponse::Success {
            message: message.into(),
            data,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ServiceResponse::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ServiceResponse::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ServiceResponse::Success { message, .. } | ServiceResponse::Failure { message } => {
                message
            }
        }
    }

    /// Payload, present only on success
    pub fn data(&self) -> Option<&T> {
        match self {
            ServiceResponse::Success { data, .. } => Some(data),
            ServiceResponse::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            ServiceResponse::Success { data, .. } => Some(data),
            ServiceResponse::Failure { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<T, ResponseError> {
        match self {
            ServiceResponse::Success { data, .. } => Ok(data),
            ServiceResponse::Failure { message } => Err(ResponseError { message }),
        }
    }

    /// Transform the payload, keeping the message and outcome
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ServiceResponse<U> {
        match self {
            ServiceResponse::Success { message, data } => ServiceResponse::Success {
                message,
                data: f(data),
            },
            ServiceResponse::Failure { message } => ServiceResponse::Failure { message },
        }
    }
}
