//! Records and filter predicates for the audit log table.

use crate::features::users::types::contains_ci;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub entity_id: Option<i64>,
    #[serde(default)]
    pub entity_type: Option<String>,
}

/// Per-column filters for the log table; the global search term round-trips
/// to the API instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogFilters {
    pub user: String,
    pub action: String,
    pub module: String,
}

impl LogRecord {
    /// `First Surname` with missing parts dropped; `-` when both are absent.
    #[must_use]
    pub fn user_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() { "-".to_string() } else { name }
    }

    /// Module column value; audit entries without an entity type belong to
    /// the authentication module.
    #[must_use]
    pub fn module(&self) -> &str {
        self.entity_type.as_deref().unwrap_or("Authentication")
    }

    #[must_use]
    pub fn matches(&self, filters: &LogFilters) -> bool {
        contains_ci(&self.user_name(), &filters.user)
            && contains_ci(self.action.as_deref().unwrap_or_default(), &filters.action)
            && contains_ci(self.module(), &filters.module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LogRecord {
        LogRecord {
            id: Some(1),
            created_at: Some("2025-03-04T09:05:06Z".to_string()),
            user_id: Some(7),
            first_name: Some("Ana".to_string()),
            surname: Some("Kova".to_string()),
            email: Some("ana@example.test".to_string()),
            action: Some("LOGIN".to_string()),
            entity_id: None,
            entity_type: None,
        }
    }

    #[test]
    fn missing_entity_type_defaults_to_authentication() {
        assert_eq!(record().module(), "Authentication");

        let mut log = record();
        log.entity_type = Some("License".to_string());
        assert_eq!(log.module(), "License");
    }

    #[test]
    fn column_filters_are_case_insensitive() {
        let filters = LogFilters {
            user: "kova".to_string(),
            action: "login".to_string(),
            module: "auth".to_string(),
        };
        assert!(record().matches(&filters));

        let filters = LogFilters {
            action: "delete".to_string(),
            ..LogFilters::default()
        };
        assert!(!record().matches(&filters));
    }
}
