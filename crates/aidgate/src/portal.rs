//! `Portal`: the session store and navigation guard, wired together.
//!
//! The UI root constructs exactly one `Portal` and holds it for the life
//! of the page — explicit ownership instead of a process-wide singleton,
//! so tests (and a second "tab") can construct as many as they like.

use aidgate_guard::{NavigationGuard, Outcome};
use aidgate_identity::{Role, UserId};
use aidgate_policy::{Capability, RouteTable};
use aidgate_session::{
    AccountProvider, AccountRequest, CookieJar, Credentials, LoginError,
    LoginProvider, PasswordReset, SessionError, SessionStore, StoreConfig,
};

/// One tab's view of the session, plus the guard that polices it.
///
/// All mutation goes through the operations here; views get the read-only
/// queries and nothing else — in particular, never the raw cookie.
pub struct Portal<J: CookieJar> {
    store: SessionStore<J>,
    guard: NavigationGuard,
}

impl<J: CookieJar> Portal<J> {
    /// Creates a portal over a cookie jar, persistence config, and a
    /// built route table.
    pub fn new(jar: J, config: StoreConfig, table: RouteTable) -> Self {
        Self {
            store: SessionStore::new(jar, config),
            guard: NavigationGuard::new(table),
        }
    }

    // -- Lifecycle --------------------------------------------------------

    /// Bootstrap: rehydrates the session from the persisted cookie.
    ///
    /// Call once at app start, before the first render. Navigations
    /// refresh on their own, so this only matters for what the first
    /// paint shows.
    pub fn restore(&mut self) {
        self.store.load_from_persisted();
    }

    /// Runs the login flow against the external provider.
    ///
    /// # Errors
    /// Provider and payload errors propagate for the login form to
    /// display; the session is unchanged on any failure.
    pub async fn login<P: LoginProvider>(
        &mut self,
        provider: &P,
        credentials: &Credentials,
    ) -> Result<(), SessionError> {
        self.store.login(provider, credentials).await
    }

    /// Ends the session and deletes the cookie. Safe when already
    /// logged out.
    pub fn logout(&mut self) {
        self.store.logout();
    }

    /// Evaluates a route transition: refreshes the session from the
    /// cookie, then allows or redirects per the route table.
    pub fn navigate(&mut self, to: &str) -> Outcome {
        self.guard.evaluate(&mut self.store, to)
    }

    // -- Pass-throughs to the account collaborator ------------------------
    //
    // These never touch the session: their results go straight back to
    // the forms that submitted them.

    /// Submits a new-account request.
    pub async fn request_account<P: AccountProvider>(
        &self,
        provider: &P,
        request: &AccountRequest,
    ) -> Result<(), LoginError> {
        provider.request_account(request).await
    }

    /// Submits a forgotten-password reset.
    pub async fn reset_password<P: AccountProvider>(
        &self,
        provider: &P,
        reset: &PasswordReset,
    ) -> Result<(), LoginError> {
        provider.reset_password(reset).await
    }

    // -- Read-only queries for the UI -------------------------------------

    /// The underlying store, for the full set of read-only queries.
    pub fn store(&self) -> &SessionStore<J> {
        &self.store
    }

    /// The route table the guard consults.
    pub fn table(&self) -> &RouteTable {
        self.guard.table()
    }

    /// True iff a session is present.
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// The current role, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.store.role()
    }

    /// The current user id, if authenticated.
    pub fn user_id(&self) -> Option<&UserId> {
        self.store.user_id()
    }

    /// The current username, if authenticated and known.
    pub fn username(&self) -> Option<&str> {
        self.store.username()
    }

    /// True iff the current role satisfies `capability`.
    pub fn can(&self, capability: Capability) -> bool {
        self.store.can(capability)
    }
}
