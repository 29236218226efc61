//! Auth call failures as the flow controller sees them.

use thiserror::Error;

/// Failure of an external auth call, already reduced to the message the user
/// should see. `Rejected` means the server refused valid-looking input;
/// `Transport` covers network and server faults. The flow controller treats
/// both the same way: stay on the current screen, notify, let the user retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Transport(String),
}
