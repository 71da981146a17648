//! Error types for form validation and the simulated API.
//!
//! ERROR HANDLING
//! ==============
//! The session store never fails. Everything that can go wrong is caught
//! here, before the store is touched, and surfaced to the user as a toast
//! built from the error's `Display` text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// A local validation failure on one of the auth forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// The phone number field is empty.
    #[error("Please enter your phone number")]
    MissingPhone,

    /// The OTP code does not have the required number of digits.
    #[error("Please enter all {expected} digits")]
    OtpIncomplete { expected: usize },

    /// A new code was requested before the cooldown ran out.
    #[error("You can request a new code in {remaining}s")]
    ResendCooldown { remaining: u32 },

    /// Username or password is empty.
    #[error("Please enter your username and password")]
    MissingCredentials,

    /// The terms of use checkbox is not ticked.
    #[error("Please accept the terms of use")]
    TermsNotAccepted,

    /// Password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password is shorter than the minimum length.
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Errors produced by the simulated API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockApiError {
    /// The owning task was aborted before the call completed.
    #[error("request cancelled")]
    Cancelled,

    /// No fixture exists for the requested record.
    #[error("not found: {0}")]
    NotFound(String),
}
