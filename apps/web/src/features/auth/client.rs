//! Client wrappers for the authentication endpoints. These helpers translate
//! HTTP failures into the user-facing auth errors the flow controller
//! consumes, so every call site is forced to handle exactly two outcomes.
//! Request payloads carry credentials and codes and must never be logged.

use crate::app_lib::{AppError, api};
use serde::Serialize;
use session_core::{AuthError, LoginResponse, OtpMethod, VerifyResponse, messages};

#[derive(Clone, Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Clone, Debug, Serialize)]
struct SendCodeRequest<'a> {
    jwt: &'a str,
    method: &'a str,
}

#[derive(Clone, Debug, Serialize)]
struct VerifyCodeRequest<'a> {
    email: &'a str,
    otp: &'a str,
}

/// Submits credentials. A 404 means the account is unknown, a 401 a wrong
/// password; anything else is a server fault.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, AuthError> {
    api::post_json("/auth/login", &LoginRequest { email, password })
        .await
        .map_err(|err| match err {
            AppError::Http { status: 404, .. } => {
                AuthError::Rejected(messages::login::EMAIL_NOT_FOUND.to_string())
            }
            AppError::Http { status: 401, .. } => {
                AuthError::Rejected(messages::login::INVALID_PASSWORD.to_string())
            }
            _ => AuthError::Transport(messages::SERVER_ERROR.to_string()),
        })
}

/// Asks the API to deliver a one-time code over the chosen channel. The
/// intermediate token authorizes the request; it is not the session
/// credential.
pub async fn send_code(pending_token: &str, method: OtpMethod) -> Result<(), AuthError> {
    api::post_json_with_bearer(
        "/auth/send-otp",
        &SendCodeRequest {
            jwt: pending_token,
            method: method.as_str(),
        },
        pending_token,
    )
    .await
    .map_err(|err| match err {
        AppError::Http { status: 500, .. } => {
            AuthError::Transport(messages::login::UNABLE_TO_SEND_PHONE_OTP.to_string())
        }
        _ => AuthError::Transport(messages::SERVER_ERROR.to_string()),
    })
}

/// Exchanges the delivered code for a full credential.
pub async fn verify_code(email: &str, otp: &str) -> Result<VerifyResponse, AuthError> {
    api::post_json("/auth/verify-otp", &VerifyCodeRequest { email, otp })
        .await
        .map_err(|err| match err {
            AppError::Http { status: 401, .. } => {
                AuthError::Rejected(messages::login::INVALID_OTP.to_string())
            }
            _ => AuthError::Transport(messages::SERVER_ERROR.to_string()),
        })
}
