//! Client helpers for the audit log endpoints.

use crate::app_lib::{AppError, api};
use crate::features::logs::types::LogRecord;

/// Fetches logs. An empty search term fetches everything; otherwise the term
/// is passed through for server-side matching.
pub async fn fetch_logs(search: &str) -> Result<Vec<LogRecord>, AppError> {
    let query = if search.is_empty() {
        vec![("all", "true".to_string())]
    } else {
        vec![("search", search.to_string())]
    };
    let envelope: api::DataEnvelope<Vec<LogRecord>> = api::get_json("/logs", &query).await?;
    Ok(envelope.data)
}
