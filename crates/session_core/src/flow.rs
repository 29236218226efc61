//! Login/MFA flow state machine.
//!
//! Each screen of the login flow is a variant carrying exactly the transient
//! data that screen may touch, so reading a code value while on the
//! credential screen is unrepresentable. Transitions consume the explicit
//! outcome of an external call and return a [`Step`]: the next screen, the
//! notifications to surface, and the full credential once authentication
//! completed. Every failure leaves the machine in its pre-call state so the
//! user can retry by hand; nothing here retries automatically.

use crate::error::AuthError;
use crate::messages::{self, Notice};
use serde::Deserialize;

/// Delivery channel for the one-time code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpMethod {
    Email,
    Phone,
}

impl OtpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OtpMethod::Email => "email",
            OtpMethod::Phone => "phone",
        }
    }
}

/// Success shape of the login endpoint. `jwt` is the full credential when
/// `mfa` is false, and the intermediate token when a second factor is
/// required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub mfa: bool,
    #[serde(default)]
    pub jwt: Option<String>,
}

/// Success shape of the verify-code endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyResponse {
    pub jwt: String,
}

/// Screens of the login flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFlow {
    CredentialEntry,
    MethodSelection {
        email: String,
        pending_token: String,
        method: OtpMethod,
    },
    CodeEntry {
        email: String,
        pending_token: String,
        method: OtpMethod,
        code: String,
    },
    Complete,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::CredentialEntry
    }
}

/// Result of applying an external-call outcome to the flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub flow: LoginFlow,
    pub notices: Vec<Notice>,
    pub credential: Option<String>,
}

impl Step {
    fn stay(flow: LoginFlow) -> Self {
        Self {
            flow,
            notices: Vec::new(),
            credential: None,
        }
    }

    fn notify(flow: LoginFlow, notice: Notice) -> Self {
        Self {
            flow,
            notices: vec![notice],
            credential: None,
        }
    }

    fn complete(credential: String) -> Self {
        Self {
            flow: LoginFlow::Complete,
            notices: vec![Notice::success(messages::login::SUCCESS)],
            credential: Some(credential),
        }
    }
}

impl LoginFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::CredentialEntry
    }

    /// Outcome of the login endpoint, submitted from the credential screen.
    /// Outcomes arriving in any other state leave the flow untouched.
    #[must_use]
    pub fn submit_credentials(self, email: &str, outcome: Result<LoginResponse, AuthError>) -> Step {
        if !matches!(self, Self::CredentialEntry) {
            return Step::stay(self);
        }
        match outcome {
            Ok(LoginResponse {
                mfa: false,
                jwt: Some(jwt),
            }) => Step::complete(jwt),
            Ok(LoginResponse {
                mfa: true,
                jwt: Some(pending_token),
            }) => Step::stay(Self::MethodSelection {
                email: email.to_string(),
                pending_token,
                method: OtpMethod::Email,
            }),
            // A success response without a token is indistinguishable from a
            // server fault for our purposes.
            Ok(LoginResponse { jwt: None, .. }) => Step::notify(
                Self::CredentialEntry,
                Notice::error(messages::SERVER_ERROR),
            ),
            Err(err) => Step::notify(Self::CredentialEntry, Notice::error(err.to_string())),
        }
    }

    /// Switch the highlighted delivery method on the selection screen.
    #[must_use]
    pub fn select_method(self, method: OtpMethod) -> Self {
        match self {
            Self::MethodSelection {
                email,
                pending_token,
                ..
            } => Self::MethodSelection {
                email,
                pending_token,
                method,
            },
            other => other,
        }
    }

    /// Outcome of the send-code endpoint. From the selection screen a success
    /// advances to code entry; from the code screen (a resend) it stays put.
    /// Failures preserve the current screen and selection so the user can
    /// retry or switch methods.
    #[must_use]
    pub fn code_sent(self, outcome: Result<(), AuthError>) -> Step {
        match (self, outcome) {
            (
                Self::MethodSelection {
                    email,
                    pending_token,
                    method,
                },
                Ok(()),
            ) => Step::notify(
                Self::CodeEntry {
                    email,
                    pending_token,
                    method,
                    code: String::new(),
                },
                Notice::success(messages::login::SENT_OTP),
            ),
            (flow @ Self::CodeEntry { .. }, Ok(())) => {
                Step::notify(flow, Notice::success(messages::login::SENT_OTP))
            }
            (flow @ (Self::MethodSelection { .. } | Self::CodeEntry { .. }), Err(err)) => {
                Step::notify(flow, Notice::error(err.to_string()))
            }
            (flow, _) => Step::stay(flow),
        }
    }

    /// Track the in-progress code value on the code screen.
    #[must_use]
    pub fn set_code(self, value: String) -> Self {
        match self {
            Self::CodeEntry {
                email,
                pending_token,
                method,
                ..
            } => Self::CodeEntry {
                email,
                pending_token,
                method,
                code: value,
            },
            other => other,
        }
    }

    /// Outcome of the verify-code endpoint. Failure keeps the entered code so
    /// the user can correct it in place.
    #[must_use]
    pub fn submit_code(self, outcome: Result<VerifyResponse, AuthError>) -> Step {
        match (self, outcome) {
            (Self::CodeEntry { .. }, Ok(VerifyResponse { jwt })) => Step::complete(jwt),
            (flow @ Self::CodeEntry { .. }, Err(err)) => {
                Step::notify(flow, Notice::error(err.to_string()))
            }
            (flow, _) => Step::stay(flow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::NoticeKind;

    fn login_ok(mfa: bool, jwt: Option<&str>) -> Result<LoginResponse, AuthError> {
        Ok(LoginResponse {
            mfa,
            jwt: jwt.map(str::to_string),
        })
    }

    fn rejected(text: &str) -> AuthError {
        AuthError::Rejected(text.to_string())
    }

    #[test]
    fn login_without_mfa_completes_with_the_credential() {
        let step = LoginFlow::new().submit_credentials("user@x.com", login_ok(false, Some("abc")));

        assert_eq!(step.flow, LoginFlow::Complete);
        assert_eq!(step.credential.as_deref(), Some("abc"));
        assert!(step.notices.iter().any(|n| n.kind == NoticeKind::Success));
    }

    #[test]
    fn login_with_mfa_holds_the_pending_token_in_flow_state_only() {
        let step = LoginFlow::new().submit_credentials("user@x.com", login_ok(true, Some("tmp")));

        assert_eq!(step.credential, None);
        assert_eq!(
            step.flow,
            LoginFlow::MethodSelection {
                email: "user@x.com".to_string(),
                pending_token: "tmp".to_string(),
                method: OtpMethod::Email,
            }
        );
    }

    #[test]
    fn rejected_login_stays_on_credential_entry_with_one_notice() {
        let step = LoginFlow::new()
            .submit_credentials("user@x.com", Err(rejected(messages::login::INVALID_PASSWORD)));

        assert_eq!(step.flow, LoginFlow::CredentialEntry);
        assert_eq!(step.credential, None);
        assert_eq!(step.notices.len(), 1);
        assert_eq!(step.notices[0].kind, NoticeKind::Error);
        assert_eq!(step.notices[0].text, messages::login::INVALID_PASSWORD);
    }

    #[test]
    fn login_success_without_a_token_is_reported_as_a_server_fault() {
        let step = LoginFlow::new().submit_credentials("user@x.com", login_ok(false, None));

        assert_eq!(step.flow, LoginFlow::CredentialEntry);
        assert_eq!(step.notices[0].text, messages::SERVER_ERROR);
    }

    #[test]
    fn full_mfa_path_reaches_complete() {
        let step = LoginFlow::new().submit_credentials("user@x.com", login_ok(true, Some("tmp")));
        let flow = step.flow.select_method(OtpMethod::Email);

        let step = flow.code_sent(Ok(()));
        assert_eq!(
            step.flow,
            LoginFlow::CodeEntry {
                email: "user@x.com".to_string(),
                pending_token: "tmp".to_string(),
                method: OtpMethod::Email,
                code: String::new(),
            }
        );
        assert_eq!(step.notices[0].text, messages::login::SENT_OTP);

        let flow = step.flow.set_code("1234".to_string());
        let step = flow.submit_code(Ok(VerifyResponse {
            jwt: "final".to_string(),
        }));

        assert_eq!(step.flow, LoginFlow::Complete);
        assert_eq!(step.credential.as_deref(), Some("final"));
    }

    #[test]
    fn send_failure_preserves_the_selected_method() {
        let flow = LoginFlow::new()
            .submit_credentials("user@x.com", login_ok(true, Some("tmp")))
            .flow
            .select_method(OtpMethod::Phone);

        let step = flow.code_sent(Err(AuthError::Transport(
            messages::login::UNABLE_TO_SEND_PHONE_OTP.to_string(),
        )));

        match step.flow {
            LoginFlow::MethodSelection { method, .. } => assert_eq!(method, OtpMethod::Phone),
            other => panic!("unexpected flow state: {other:?}"),
        }
        assert_eq!(step.notices[0].kind, NoticeKind::Error);
    }

    #[test]
    fn verify_failure_keeps_the_entered_code() {
        let flow = LoginFlow::CodeEntry {
            email: "user@x.com".to_string(),
            pending_token: "tmp".to_string(),
            method: OtpMethod::Email,
            code: "1234".to_string(),
        };

        let step = flow.submit_code(Err(rejected(messages::login::INVALID_OTP)));

        match step.flow {
            LoginFlow::CodeEntry { code, .. } => assert_eq!(code, "1234"),
            other => panic!("unexpected flow state: {other:?}"),
        }
        assert_eq!(step.credential, None);
    }

    #[test]
    fn resend_from_code_entry_stays_on_code_entry() {
        let flow = LoginFlow::CodeEntry {
            email: "user@x.com".to_string(),
            pending_token: "tmp".to_string(),
            method: OtpMethod::Email,
            code: "12".to_string(),
        };

        let step = flow.clone().code_sent(Ok(()));

        assert_eq!(step.flow, flow);
        assert_eq!(step.notices[0].text, messages::login::SENT_OTP);
    }

    #[test]
    fn outcomes_in_the_wrong_state_are_ignored() {
        let step = LoginFlow::Complete.submit_credentials("user@x.com", login_ok(false, Some("x")));
        assert_eq!(step.flow, LoginFlow::Complete);
        assert!(step.notices.is_empty());
        assert_eq!(step.credential, None);

        let step = LoginFlow::CredentialEntry.code_sent(Ok(()));
        assert_eq!(step.flow, LoginFlow::CredentialEntry);
        assert!(step.notices.is_empty());

        let step = LoginFlow::CredentialEntry.submit_code(Ok(VerifyResponse {
            jwt: "x".to_string(),
        }));
        assert_eq!(step.flow, LoginFlow::CredentialEntry);
        assert_eq!(step.credential, None);

        assert_eq!(
            LoginFlow::CredentialEntry.select_method(OtpMethod::Phone),
            LoginFlow::CredentialEntry
        );
        assert_eq!(
            LoginFlow::CredentialEntry.set_code("1".to_string()),
            LoginFlow::CredentialEntry
        );
    }
}
