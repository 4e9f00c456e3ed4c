//! Claims extraction from the bearer token.
//!
//! DESIGN
//! ======
//! Decoding is purely local: base64url-parse the claims segment of a
//! three-part token and deserialize it. No signature verification happens on
//! the client, so any structurally well-formed claims blob is trusted
//! verbatim. Keeping every call site behind `decode` means a server-verified
//! variant can replace this module without touching the pages.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

/// Claims embedded in the session token.
///
/// Expiry and other registered claims ride along in the token but are not
/// read client-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub role: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Failure modes for structural token parsing.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token is not a three-segment claims blob")]
    Malformed,
    #[error("claims segment is not valid base64url: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("claims segment is not valid claims JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Decode the claims segment of `token`.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is structurally invalid. Callers
/// treat any failure identically to "unauthenticated".
pub fn decode(token: &str) -> Result<Claims, TokenError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(TokenError::Malformed);
    };
    let raw = URL_SAFE_NO_PAD.decode(payload)?;
    let claims = serde_json::from_slice::<Claims>(&raw)?;
    Ok(claims)
}
