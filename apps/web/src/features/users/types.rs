//! Records and filter predicates for the user management table. Filtering is
//! client-side over the `{all:true}` fetch; the predicates live here so the
//! route stays view-only.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub email_validated: Option<bool>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phone_validated: Option<bool>,
    #[serde(default)]
    pub mfa_enabled: Option<bool>,
    #[serde(default)]
    pub mfa_method: Option<String>,
    #[serde(default)]
    pub account_type: Option<String>,
    #[serde(default)]
    pub account_status: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub role_ids: Option<Vec<i64>>,
}

/// Active filters for the users table. Empty strings and `None` match
/// everything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFilters {
    pub global: String,
    pub name: String,
    pub email: String,
    pub status: Option<String>,
    pub account_type: Option<String>,
}

impl UserRecord {
    /// `First Surname` with missing parts dropped; `-` when both are absent.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() { "-".to_string() } else { name }
    }

    #[must_use]
    pub fn matches(&self, filters: &UserFilters) -> bool {
        let name = self.display_name();
        contains_ci(&name, &filters.name)
            && contains_ci(&self.email, &filters.email)
            && equals_opt(self.account_status.as_deref(), filters.status.as_deref())
            && equals_opt(self.account_type.as_deref(), filters.account_type.as_deref())
            && self.matches_global(&filters.global)
    }

    fn matches_global(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let name = self.display_name();
        [
            name.as_str(),
            self.email.as_str(),
            self.account_type.as_deref().unwrap_or_default(),
            self.account_status.as_deref().unwrap_or_default(),
            self.last_login.as_deref().unwrap_or_default(),
        ]
        .into_iter()
        .any(|haystack| contains_ci(haystack, needle))
    }
}

/// Case-insensitive contains; an empty needle matches everything.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn equals_opt(value: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        None => true,
        Some(filter) => value == Some(filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UserRecord {
        UserRecord {
            id: 7,
            email: "Ana.Kova@example.test".to_string(),
            first_name: Some("Ana".to_string()),
            surname: Some("Kova".to_string()),
            email_validated: Some(true),
            phone: None,
            phone_validated: None,
            mfa_enabled: Some(true),
            mfa_method: Some("email".to_string()),
            account_type: Some("Internal".to_string()),
            account_status: Some("Active".to_string()),
            last_login: Some("2025-03-04T09:05:06Z".to_string()),
            created_at: None,
            updated_at: None,
            role_ids: Some(vec![2]),
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        assert!(record().matches(&UserFilters::default()));
    }

    #[test]
    fn name_filter_is_case_insensitive_contains() {
        let filters = UserFilters {
            name: "ana k".to_string(),
            ..UserFilters::default()
        };
        assert!(record().matches(&filters));

        let filters = UserFilters {
            name: "bob".to_string(),
            ..UserFilters::default()
        };
        assert!(!record().matches(&filters));
    }

    #[test]
    fn status_and_type_filters_require_exact_values() {
        let filters = UserFilters {
            status: Some("Active".to_string()),
            account_type: Some("Internal".to_string()),
            ..UserFilters::default()
        };
        assert!(record().matches(&filters));

        let filters = UserFilters {
            status: Some("Inactive".to_string()),
            ..UserFilters::default()
        };
        assert!(!record().matches(&filters));
    }

    #[test]
    fn global_filter_searches_across_columns() {
        let filters = UserFilters {
            global: "internal".to_string(),
            ..UserFilters::default()
        };
        assert!(record().matches(&filters));

        let filters = UserFilters {
            global: "missing-term".to_string(),
            ..UserFilters::default()
        };
        assert!(!record().matches(&filters));
    }

    #[test]
    fn display_name_drops_missing_parts() {
        let mut user = record();
        user.surname = None;
        assert_eq!(user.display_name(), "Ana");

        user.first_name = None;
        assert_eq!(user.display_name(), "-");
    }
}
