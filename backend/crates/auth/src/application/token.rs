//! Session Token Signing
//!
//! The cookie value is `<session_id>.<signature>` where the signature
//! is HMAC-SHA256 over the session id string, base64url encoded. The
//! session id alone names the server-side row; the signature stops
//! clients from minting ids.

use crate::error::AuthError;
use platform::crypto::{from_base64url, hmac_sha256, hmac_verify, to_base64url};
use uuid::Uuid;

/// Generate a signed session token
pub fn generate_session_token(secret: &[u8; 32], session_id: Uuid) -> String {
    let session_id = session_id.to_string();
    let signature = hmac_sha256(secret, session_id.as_bytes());

    format!("{}.{}", session_id, to_base64url(&signature))
}

/// Parse and verify a session token
pub fn parse_session_token(secret: &[u8; 32], token: &str) -> Result<Uuid, AuthError> {
    let Some((session_id_str, signature_b64)) = token.split_once('.') else {
        return Err(AuthError::SessionInvalid);
    };

    let signature = from_base64url(signature_b64).map_err(|_| AuthError::SessionInvalid)?;

    if !hmac_verify(secret, session_id_str.as_bytes(), &signature) {
        return Err(AuthError::SessionInvalid);
    }

    session_id_str
        .parse()
        .map_err(|_| AuthError::SessionInvalid)
}
