//! The session store: single source of truth for the current identity.
//!
//! This is the central piece of the session layer. It's responsible for:
//! - Validating login payloads and establishing the session
//! - Persisting the session to the auth cookie (and only there)
//! - Rehydrating from the cookie on bootstrap and before every guard
//!   evaluation
//! - Answering the read-only queries UI code renders from
//!
//! # Concurrency note
//!
//! The store is a plain value owned by the UI root — no interior locking,
//! no ambient global. Everything runs on one thread in response to
//! navigation events and completed network calls. The only shared mutable
//! resource is the cookie itself, reached through the [`CookieJar`] seam,
//! and that is last-writer-wins across tabs by construction.
//!
//! # I/O discipline
//!
//! Cookie reads/writes happen in exactly three places: [`set_identity`],
//! [`load_from_persisted`], and [`logout`]. Every other method is a pure
//! read of in-memory state, so the guard and UI can query freely during
//! route evaluation without re-triggering persistence I/O.
//!
//! [`set_identity`]: SessionStore::set_identity
//! [`load_from_persisted`]: SessionStore::load_from_persisted
//! [`logout`]: SessionStore::logout

use std::time::Duration;

use aidgate_identity::{CookieCodec, Identity, Role, UserId};
use aidgate_policy::{Capability, grants};

use crate::{
    CookieAttributes, CookieJar, Credentials, LoginPayload, LoginProvider,
    SameSite, SessionError,
};

// ---------------------------------------------------------------------------
// StoreConfig
// ---------------------------------------------------------------------------

/// Configuration for session persistence.
///
/// The defaults match the deployed application: cookie `authUser`, a
/// one-hour lifetime, SameSite=Strict.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Name of the auth cookie.
    pub cookie_name: String,

    /// How long a written cookie lives. Also the upper bound on how long
    /// a closed tab stays logged in.
    pub ttl: Duration,

    /// Delivery policy applied at write time.
    pub same_site: SameSite,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cookie_name: "authUser".to_string(),
            ttl: Duration::from_secs(60 * 60),
            same_site: SameSite::Strict,
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// The in-memory session: either an identity or nothing.
///
/// "Authenticated" is not a stored flag that could drift — it is derived
/// from the presence of the identity, so the invariant "a role never
/// exists without a user id" holds by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// The current identity, if authenticated.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// True iff an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// The current role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// Owns the [`Session`] and keeps it synchronized with the auth cookie.
///
/// Explicitly constructed and passed to whoever needs it (the navigation
/// guard, the UI root) — never a process-wide singleton.
///
/// ## Lifecycle
///
/// ```text
/// login() ──→ set_identity() ──→ [authenticated]
///                                     │
///            load_from_persisted() ◄──┤  (every navigation; reload;
///                │                    │   other-tab changes)
///                ▼                    ▼
///        [cookie well-formed]    logout() ──→ [empty, cookie removed]
///        [else: forced logout]
/// ```
pub struct SessionStore<J: CookieJar> {
    session: Session,
    jar: J,
    codec: CookieCodec,
    config: StoreConfig,
}

impl<J: CookieJar> SessionStore<J> {
    /// Creates a store with an empty session.
    ///
    /// Call [`load_from_persisted`](Self::load_from_persisted) afterwards
    /// to pick up a session surviving from a previous page load.
    pub fn new(jar: J, config: StoreConfig) -> Self {
        Self {
            session: Session::default(),
            jar,
            codec: CookieCodec,
            config,
        }
    }

    // -- Mutations (the only methods that touch the cookie) ---------------

    /// Establishes a session from a raw login payload.
    ///
    /// Validates that `user_id`, `username`, and `role` are all present
    /// and that the role is in the known enumeration. The cookie is
    /// encoded *before* anything is mutated, so every failure leaves both
    /// the in-memory session and the previously persisted cookie exactly
    /// as they were.
    ///
    /// # Errors
    /// - [`SessionError::MissingField`] — a required field is absent or
    ///   empty
    /// - [`SessionError::Identity`] — unknown role, or encoding failed
    pub fn set_identity(
        &mut self,
        payload: LoginPayload,
    ) -> Result<(), SessionError> {
        let user_id = require(payload.user_id, "user_id")?;
        let username = require(payload.username, "username")?;
        let role: Role = require(payload.role, "role")?.parse()?;

        let identity = Identity {
            user_id: UserId(user_id),
            username: Some(username),
            role,
        };

        // Encode first: a failed encode must not clobber the prior cookie
        // or the in-memory session.
        let encoded = self.codec.encode(&identity)?;
        self.jar
            .write(&self.config.cookie_name, encoded, &self.attributes());

        tracing::info!(user_id = %identity.user_id, %role, "session established");
        self.session = Session {
            identity: Some(identity),
        };
        Ok(())
    }

    /// Rehydrates the session from the persisted cookie.
    ///
    /// Infallible: an absent, expired, malformed, or incomplete cookie —
    /// and one carrying a role from some other deployment — all resolve
    /// to a forced logout, never an error. A well-formed cookie
    /// overwrites the in-memory session wholesale, which is what lets a
    /// login or logout in another tab take effect here on the next
    /// navigation.
    ///
    /// Idempotent: with an unchanged cookie, a second call yields an
    /// identical session.
    pub fn load_from_persisted(&mut self) {
        let Some(raw) = self.jar.read(&self.config.cookie_name) else {
            if self.session.is_authenticated() {
                tracing::info!("auth cookie gone, clearing session");
            }
            self.session = Session::default();
            return;
        };

        match self.codec.decode(&raw) {
            Some(identity) => {
                self.session = Session {
                    identity: Some(identity),
                };
            }
            None => {
                // Malformed or from a different deployment: remove it so
                // the next read doesn't repeat the rejection.
                tracing::warn!("malformed auth cookie, forcing logout");
                self.logout();
            }
        }
    }

    /// Clears the session and deletes the cookie.
    ///
    /// Safe to call at any time; logging out while already logged out is
    /// a no-op.
    pub fn logout(&mut self) {
        if self.session.is_authenticated() {
            tracing::info!("session cleared");
        }
        self.session = Session::default();
        self.jar.remove(&self.config.cookie_name);
    }

    /// Runs the full login flow: call the provider, and on success
    /// establish the session via [`set_identity`](Self::set_identity).
    ///
    /// # Errors
    /// A provider error propagates unchanged (for the login form to
    /// display) and the store is left exactly as it was — no partial
    /// identity is ever set on failure.
    pub async fn login<P: LoginProvider>(
        &mut self,
        provider: &P,
        credentials: &Credentials,
    ) -> Result<(), SessionError> {
        let payload = provider.login(credentials).await?;
        self.set_identity(payload)
    }

    // -- Read-only queries (no I/O, no mutation) --------------------------

    /// The current in-memory session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True iff an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// The current role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    /// The current user id, if authenticated.
    pub fn user_id(&self) -> Option<&UserId> {
        self.session.identity().map(|identity| &identity.user_id)
    }

    /// The current username, if authenticated and known.
    pub fn username(&self) -> Option<&str> {
        self.session
            .identity()
            .and_then(|identity| identity.username.as_deref())
    }

    /// True iff the current role satisfies `capability` per the policy
    /// grant matrix. Unauthenticated sessions satisfy nothing.
    pub fn can(&self, capability: Capability) -> bool {
        self.role()
            .is_some_and(|role| grants(role, capability))
    }

    // Role membership flags, as the UI reads them.

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_admin_observer(&self) -> bool {
        self.role() == Some(Role::AdminObserver)
    }

    pub fn is_donor(&self) -> bool {
        self.role() == Some(Role::Donor)
    }

    pub fn is_recipient(&self) -> bool {
        self.role() == Some(Role::Recipient)
    }

    // Named capability queries — each a membership test against the
    // policy matrix, nothing decided locally.

    pub fn can_edit(&self) -> bool {
        self.can(Capability::Edit)
    }

    pub fn can_view(&self) -> bool {
        self.can(Capability::View)
    }

    pub fn can_create_requests(&self) -> bool {
        self.can(Capability::CreateRequests)
    }

    pub fn can_manage_events(&self) -> bool {
        self.can(Capability::ManageEvents)
    }

    pub fn can_manage_items(&self) -> bool {
        self.can(Capability::ManageItems)
    }

    pub fn can_create_matches(&self) -> bool {
        self.can(Capability::CreateMatches)
    }

    pub fn can_update_pledges(&self) -> bool {
        self.can(Capability::UpdatePledges)
    }

    // -- Internals --------------------------------------------------------

    fn attributes(&self) -> CookieAttributes {
        CookieAttributes {
            max_age: self.config.ttl,
            same_site: self.config.same_site,
        }
    }
}

/// Treats `None` and `""` alike: the backend has sent both for "not
/// provided".
fn require(
    field: Option<String>,
    name: &'static str,
) -> Result<String, SessionError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SessionError::MissingField(name)),
    }
}

// =========================================================================
// Tests
// =========================================================================
