//! Error types for the session layer.

use crate::LoginError;
use aidgate_identity::IdentityError;

/// Errors that can occur while establishing a session.
///
/// Reading the session back (`load_from_persisted`) and ending it
/// (`logout`) are infallible by design — every failure on those paths
/// resolves to a forced logout, not an error the caller must handle.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The login payload is missing a required field (or carries it as an
    /// empty string, which the backend uses interchangeably with absent).
    /// The store's state is unchanged when this is returned.
    #[error("login payload missing required field `{0}`")]
    MissingField(&'static str),

    /// Role validation or cookie encoding failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// The login provider rejected the credentials or could not be
    /// reached. Propagated to the caller for user-visible display; the
    /// store's state is unchanged.
    #[error(transparent)]
    Login(#[from] LoginError),
}
