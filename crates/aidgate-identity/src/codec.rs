//! The cookie codec: one identity in, one cookie string out, and back.
//!
//! The auth cookie is the only durable representation of a session — it is
//! what survives a page reload and what other tabs observe. The codec owns
//! the translation between [`Identity`] and that single string value.
//!
//! Decoding is deliberately *total*: there is no error type on the read
//! path. A cookie that is truncated, missing a field, or carries a role
//! from an old deployment decodes to `None`, and the session layer treats
//! `None` exactly like "no cookie at all" (forced logout). A malformed
//! cookie is an everyday event, not an exceptional one.

use crate::{Identity, IdentityError};

/// Encodes and decodes the persisted auth cookie value.
///
/// Stateless — the payload shape is fixed by [`Identity`]'s serde
/// attributes. Cookie *attributes* (expiry, SameSite) are not part of the
/// value and are applied by the storage layer at write time.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieCodec;

impl CookieCodec {
    /// Serializes an identity into the cookie value.
    ///
    /// # Errors
    /// Returns [`IdentityError::Encode`] if serialization fails. Callers
    /// must encode *before* mutating any state, so a failed encode leaves
    /// both the in-memory session and the prior cookie untouched.
    pub fn encode(&self, identity: &Identity) -> Result<String, IdentityError> {
        serde_json::to_string(identity).map_err(IdentityError::Encode)
    }

    /// Deserializes a cookie value back into an identity.
    ///
    /// Returns `None` for anything that is not a complete, well-formed
    /// payload: invalid JSON, a missing `userId` or `role`, or a role
    /// outside the known enumeration. The rejection reason is logged at
    /// debug level; callers only see "absent".
    pub fn decode(&self, raw: &str) -> Option<Identity> {
        match serde_json::from_str::<Identity>(raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::debug!(error = %e, "auth cookie rejected");
                None
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
