//! Credential claims decoding.
//!
//! The console never verifies token signatures: credentials are minted by the
//! licensing API and trusted as-is on the client. Decoding splits the compact
//! JWT form, base64url-decodes the claims segment, and deserializes it.
//! Expiry is a computed condition checked against a caller-supplied clock so
//! the logic stays deterministic under test.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity data embedded in a credential issued by the licensing API.
/// Wire field names are camelCase to match the issuer's payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityClaims {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub permission_ids: Vec<i64>,
    #[serde(default)]
    pub role_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("no credential present")]
    Missing,
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid claims json")]
    Json(#[from] serde_json::Error),
}

/// Decode the claims segment of a compact JWT without verifying its
/// signature.
///
/// # Errors
///
/// Returns an error if the token does not have three segments or the claims
/// segment contains invalid base64/json.
pub fn decode(token: &str) -> Result<IdentityClaims, DecodeError> {
    let mut parts = token.split('.');
    let _header = parts.next().ok_or(DecodeError::TokenFormat)?;
    let claims_b64 = parts.next().ok_or(DecodeError::TokenFormat)?;
    let _signature = parts.next().ok_or(DecodeError::TokenFormat)?;
    if parts.next().is_some() {
        return Err(DecodeError::TokenFormat);
    }

    let bytes = Base64UrlUnpadded::decode_vec(claims_b64).map_err(|_| DecodeError::Base64)?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl IdentityClaims {
    /// Whether the credential's expiry instant has passed. A credential
    /// without an expiry is treated as already expired; the issuing API puts
    /// `exp` on every full credential.
    #[must_use]
    pub fn is_expired(&self, now_unix_seconds: i64) -> bool {
        now_unix_seconds > self.exp.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    fn segment(value: &serde_json::Value) -> String {
        Base64UrlUnpadded::encode_string(value.to_string().as_bytes())
    }

    fn token_for(claims: &serde_json::Value) -> String {
        let header = json!({ "alg": "HS256", "typ": "JWT" });
        format!("{}.{}.sig", segment(&header), segment(claims))
    }

    #[test]
    fn decodes_full_claims() -> Result<(), DecodeError> {
        let token = token_for(&json!({
            "firstName": "Ana",
            "surname": "Kova",
            "email": "ana@example.test",
            "permissionIds": [1, 4],
            "roleIds": [2],
            "exp": NOW + 600,
        }));

        let claims = decode(&token)?;
        assert_eq!(claims.first_name, "Ana");
        assert_eq!(claims.surname, "Kova");
        assert_eq!(claims.email, "ana@example.test");
        assert_eq!(claims.permission_ids, vec![1, 4]);
        assert_eq!(claims.role_ids, vec![2]);
        assert_eq!(claims.exp, Some(NOW + 600));
        Ok(())
    }

    #[test]
    fn missing_fields_default_to_empty() -> Result<(), DecodeError> {
        let claims = decode(&token_for(&json!({ "email": "x@example.test" })))?;
        assert_eq!(claims.first_name, "");
        assert!(claims.permission_ids.is_empty());
        assert_eq!(claims.exp, None);
        Ok(())
    }

    #[test]
    fn rejects_tokens_without_three_segments() {
        assert!(matches!(decode("only.two"), Err(DecodeError::TokenFormat)));
        assert!(matches!(decode("a.b.c.d"), Err(DecodeError::TokenFormat)));
        assert!(matches!(decode(""), Err(DecodeError::TokenFormat)));
    }

    #[test]
    fn rejects_invalid_base64_and_json() {
        assert!(matches!(
            decode("header.!!not-base64!!.sig"),
            Err(DecodeError::Base64)
        ));

        let not_json = Base64UrlUnpadded::encode_string(b"plainly not json");
        assert!(matches!(
            decode(&format!("header.{not_json}.sig")),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn expiry_is_strictly_in_the_past() {
        let expired = decode(&token_for(&json!({ "exp": NOW - 1 }))).unwrap();
        assert!(expired.is_expired(NOW));

        let boundary = decode(&token_for(&json!({ "exp": NOW }))).unwrap();
        assert!(!boundary.is_expired(NOW));

        let live = decode(&token_for(&json!({ "exp": NOW + 1 }))).unwrap();
        assert!(!live.is_expired(NOW));
    }

    #[test]
    fn missing_expiry_counts_as_expired() {
        let claims = decode(&token_for(&json!({ "email": "x@example.test" }))).unwrap();
        assert!(claims.is_expired(NOW));
    }
}
