//! The login seam: how authentication actually happens.
//!
//! Aidgate doesn't implement authentication — the backend does. This
//! module defines the traits the session layer calls instead: a
//! [`LoginProvider`] that exchanges credentials for an identity payload,
//! and an [`AccountProvider`] for the two other public flows (account
//! requests, password resets). Production wires these to HTTP clients;
//! tests use canned implementations.
//!
//! The contract that matters: a provider failure is *propagated*, never
//! absorbed — the login form shows it to the user, and the session store
//! guarantees no partial identity was set.

use serde::Deserialize;

use std::future::Future;

// ---------------------------------------------------------------------------
// Request/response shapes
// ---------------------------------------------------------------------------

/// What the user types into the login form.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// The raw identity payload of a successful login response.
///
/// Field names are the backend's snake_case keys. Every field is optional
/// *in the type* because the backend has shipped responses with fields
/// missing; presence is validated by
/// [`SessionStore::set_identity`](crate::SessionStore::set_identity), which
/// rejects any incomplete payload without touching state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPayload {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub role: Option<String>,
}

/// A new-account request, forwarded verbatim to the backend.
#[derive(Debug, Clone)]
pub struct AccountRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    /// Requested role, using the wire spellings.
    pub role: String,
}

/// A forgotten-password reset, forwarded verbatim to the backend.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub username: String,
    pub email: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the login/account collaborators.
///
/// HTTP-shaped on purpose: the backend speaks HTTP and the login form
/// renders status-specific messages.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The backend answered and said no (bad credentials, disabled
    /// account, validation failure).
    #[error("login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The backend could not be reached at all.
    #[error("login service unreachable: {0}")]
    Unreachable(String),
}

// ---------------------------------------------------------------------------
// Provider traits
// ---------------------------------------------------------------------------

/// Exchanges credentials for an identity payload.
///
/// # Trait bounds
///
/// - `Send + Sync` → the provider is shared with async tasks.
/// - `'static` → it owns its configuration (base URL, client handle) and
///   doesn't borrow temporary data.
///
/// # Example
///
/// ```rust
/// use aidgate_session::{Credentials, LoginError, LoginPayload, LoginProvider};
///
/// /// Accepts exactly one hard-coded user. Only for tests and demos.
/// struct OneUser;
///
/// impl LoginProvider for OneUser {
///     async fn login(
///         &self,
///         credentials: &Credentials,
///     ) -> Result<LoginPayload, LoginError> {
///         if credentials.username == "alice" && credentials.password == "s3cret" {
///             Ok(LoginPayload {
///                 user_id: Some("u1".into()),
///                 username: Some("alice".into()),
///                 role: Some("Donor".into()),
///             })
///         } else {
///             Err(LoginError::Rejected {
///                 status: 401,
///                 message: "invalid credentials".into(),
///             })
///         }
///     }
/// }
/// ```
pub trait LoginProvider: Send + Sync + 'static {
    /// Validates the credentials and returns the identity payload.
    ///
    /// # Returns
    /// - `Ok(LoginPayload)` — the backend accepted the credentials
    /// - `Err(LoginError)` — rejected or unreachable; the caller displays
    ///   it and the session is untouched
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<LoginPayload, LoginError>> + Send;
}

/// The non-session public flows: requesting an account and resetting a
/// forgotten password.
///
/// Neither operation produces an identity and neither may touch the
/// session store — they are plain pass-throughs to the backend whose
/// results (success or error) go straight back to the form.
pub trait AccountProvider: Send + Sync + 'static {
    /// Submits a new-account request for admin approval.
    fn request_account(
        &self,
        request: &AccountRequest,
    ) -> impl Future<Output = Result<(), LoginError>> + Send;

    /// Submits a forgotten-password reset.
    fn reset_password(
        &self,
        reset: &PasswordReset,
    ) -> impl Future<Output = Result<(), LoginError>> + Send;
}

// =========================================================================
// Tests
// =========================================================================
