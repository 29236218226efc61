//! Client helpers for the user management endpoints. Paths stay centralized
//! here; the backend enforces authorization on every call.

use crate::app_lib::{AppError, api};
use crate::features::users::types::UserRecord;

/// Fetches the full user list for client-side filtering.
pub async fn list_users() -> Result<Vec<UserRecord>, AppError> {
    let envelope: api::DataEnvelope<Vec<UserRecord>> =
        api::get_json("/users", &[("all", "true".to_string())]).await?;
    Ok(envelope.data)
}
