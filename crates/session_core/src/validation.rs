//! Pre-flight validation for the credential screen.
//!
//! Failures here are reported inline next to the offending field and never
//! reach the network layer. Server-side rejections of valid-looking input are
//! a different channel (transient notifications).

/// Minimum password length accepted before a login attempt is sent.
pub const MIN_PASSWORD_LENGTH: usize = 3;

/// Per-field validation errors for the credential screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl CredentialErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate the login form as a whole.
///
/// # Errors
///
/// Returns the per-field errors when either field fails its rule.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), CredentialErrors> {
    let errors = CredentialErrors {
        email: validate_email(email).err(),
        password: validate_password(password).err(),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// # Errors
///
/// Returns the inline message for an empty or syntactically invalid address.
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(trimmed) {
        return Err("Please enter a valid email address");
    }
    Ok(())
}

/// # Errors
///
/// Returns the inline message for an empty or too-short password.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Password is required");
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err("Password must be at least 3 characters");
    }
    Ok(())
}

/// Syntactic check only: one `@`, a non-empty local part, and a domain with an
/// interior dot. Deliverability is the server's problem.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_normal_login_form() {
        assert_eq!(validate_credentials("user@x.com", "secret123"), Ok(()));
    }

    #[test]
    fn empty_fields_report_required_messages() {
        let errors = validate_credentials("", "").unwrap_err();
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.password, Some("Password is required"));
    }

    #[test]
    fn malformed_email_is_rejected_inline() {
        for bad in ["plainaddress", "missing@tld", "@nolocal.com", "two@@x.com", "a b@x.com"] {
            let errors = validate_credentials(bad, "secret123").unwrap_err();
            assert_eq!(
                errors.email,
                Some("Please enter a valid email address"),
                "expected rejection for {bad:?}"
            );
            assert_eq!(errors.password, None);
        }
    }

    #[test]
    fn short_password_is_rejected_inline() {
        let errors = validate_credentials("user@x.com", "ab").unwrap_err();
        assert_eq!(errors.password, Some("Password must be at least 3 characters"));
        assert_eq!(errors.email, None);
    }

    #[test]
    fn minimum_length_password_passes() {
        assert_eq!(validate_credentials("user@x.com", "abc"), Ok(()));
    }

    #[test]
    fn email_is_trimmed_before_checking() {
        assert_eq!(validate_email("  user@x.com  "), Ok(()));
    }
}
