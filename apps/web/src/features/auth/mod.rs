//! Auth feature: session state, route guards, the browser storage backend,
//! and client wrappers for the authentication endpoints. The session store
//! and the login flow machine themselves live in `session_core`; this module
//! binds them to the browser. It touches security boundaries and must avoid
//! logging token material.

pub(crate) mod client;
mod guards;
pub(crate) mod state;
pub(crate) mod storage;

pub(crate) use guards::RequireAuth;
