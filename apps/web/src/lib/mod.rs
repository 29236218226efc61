//! Shared frontend utilities for API access, configuration, errors, dates,
//! pagination, and build metadata.
//!
//! ## Session model
//!
//! The console talks to the licensing API with a bearer credential. Once a
//! credential is stored, the API helpers attach it to every request as a
//! default `Authorization` header; the raw token itself lives in the session
//! store and `localStorage`, never in these helpers. Callers must avoid
//! logging token material.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod dates;
pub(crate) mod errors;
pub(crate) mod pager;

pub(crate) use errors::AppError;
