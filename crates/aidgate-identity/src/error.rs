//! Error types for the identity layer.

/// Errors that can occur when validating or persisting an identity.
///
/// Note the asymmetry with decoding: a cookie that fails to *decode* is
/// not an error at all — the codec reports it as "absent" and the session
/// layer treats it as a logout. Only encoding and role validation are
/// fallible operations with callers that need to react.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// Serializing an identity to the cookie payload failed.
    ///
    /// The inner `serde_json::Error` is the original error from serde_json.
    /// We wrap it so callers deal with `IdentityError` uniformly.
    #[error("cookie encode failed: {0}")]
    Encode(serde_json::Error),

    /// A role string from outside the system (a login response, a stale
    /// cookie from a prior deployment) is not in the known enumeration.
    #[error("unknown role `{0}`")]
    UnknownRole(String),
}
