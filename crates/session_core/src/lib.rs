//! Session and login-flow core for the Licenco admin console.
//!
//! This crate holds the only parts of the console with real sequencing and
//! failure policy: the session store (credential lifecycle, claims decoding,
//! expiry-triggered logout) and the login/MFA flow state machine. It is kept
//! free of browser dependencies so every property can be exercised natively;
//! the web app supplies the storage backend and the clock.
//!
//! Flow Overview: credentials are submitted from the login screen; when the
//! API requests a second factor the flow walks method selection and code
//! entry before a full credential is handed to the session store, which
//! persists it and derives identity claims on demand.

pub mod claims;
pub mod error;
pub mod flow;
pub mod messages;
pub mod store;
pub mod validation;

pub use claims::{DecodeError, IdentityClaims};
pub use error::AuthError;
pub use flow::{LoginFlow, LoginResponse, OtpMethod, Step, VerifyResponse};
pub use messages::{Notice, NoticeKind};
pub use store::{CredentialStorage, DecodedClaims, MemoryStorage, SessionStore};
