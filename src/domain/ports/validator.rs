//! Validator port - pluggable validation of editor inputs
//!
//! The editor runs a `Validator<SugarRange>` before filtering and a
//! `Validator<GiftItem>` before every insert or update. A result carrying an
//! error short-circuits the operation and its message is passed to the
//! caller verbatim.

/// Outcome of validating one subject
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    error: Option<String>,
}

impl ValidationResult {
    /// Subject is valid
    pub fn ok() -> Self {
        Self { error: None }
    }

    /// Subject is invalid, with a message for the caller
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The error message, if any
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Keep the first error of `self` and `next`
    pub fn and_then(self, next: impl FnOnce() -> ValidationResult) -> Self {
        if self.has_error() {
            self
        } else {
            next()
        }
    }
}

/// Validation capability over a subject type
pub trait Validator<T: ?Sized> {
    fn validate(&self, subject: &T) -> ValidationResult;
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for &V {
    fn validate(&self, subject: &T) -> ValidationResult {
        (**self).validate(subject)
    }
}

impl<T: ?Sized, V: Validator<T> + ?Sized> Validator<T> for Box<V> {
    fn validate(&self, subject: &T) -> ValidationResult {
        (**self).validate(subject)
    }
}
