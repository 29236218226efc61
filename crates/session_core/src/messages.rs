//! User-facing notification catalog.
//!
//! The strings are the exact messages the console surfaces as transient
//! notifications; the auth client maps API status codes onto them. Inline
//! field errors live in [`crate::validation`] instead; the two channels are
//! deliberately distinct.

/// Visual severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient, toast-style notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

pub const SERVER_ERROR: &str = "Server error occurred";

pub mod login {
    pub const SUCCESS: &str = "Login successful";
    pub const SENT_OTP: &str = "OTP sent to email";
    pub const EXPIRED_SESSION: &str = "Session expired, please login again";
    pub const EMAIL_NOT_FOUND: &str = "Email not found";
    pub const INVALID_PASSWORD: &str = "Invalid password";
    pub const INVALID_OTP: &str = "Invalid OTP";
    pub const UNABLE_TO_SEND_PHONE_OTP: &str = "Unable to send OTP to phone, number unauthorized.";
}
