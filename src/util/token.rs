//! Identity extraction from compact JWTs.
//!
//! Only the payload is read. Signature verification belongs to the backend;
//! the client just needs to know which user a token was issued to.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-part compact JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token payload has no identity claim")]
    MissingIdentity,
}

#[derive(serde::Deserialize)]
struct IdentityClaims {
    id: Option<serde_json::Value>,
    sub: Option<serde_json::Value>,
}

/// Decode the user id carried by `token`.
///
/// The backend puts the identity in an `id` claim; the registered `sub` claim
/// is accepted when `id` is absent. Numeric ids are returned in decimal form.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is not a JWT, the payload cannot be
/// decoded, or it carries no usable identity claim.
pub fn decode_user_id(token: &str) -> Result<String, TokenError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };
    if payload.is_empty() {
        return Err(TokenError::Malformed);
    }

    let bytes = PAYLOAD_ENGINE.decode(payload)?;
    let claims: IdentityClaims = serde_json::from_slice(&bytes)?;
    claims
        .id
        .and_then(claim_to_string)
        .or_else(|| claims.sub.and_then(claim_to_string))
        .ok_or(TokenError::MissingIdentity)
}

fn claim_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
