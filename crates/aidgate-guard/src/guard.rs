//! The guard's decision procedure.

use aidgate_policy::{RouteTable, can_access};
use aidgate_session::{CookieJar, SessionStore};

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Why a transition was redirected. Carried for logging and for tests;
/// the router only needs `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// The target requires authentication and there is no session.
    Unauthenticated,

    /// There is a session, but its role is not admitted to the target.
    RoleDenied,

    /// An authenticated user tried to reach a public-only route
    /// (login, registration, password reset).
    AlreadyAuthenticated,

    /// The target route is not declared in the table at all.
    UnknownRoute,
}

/// The terminal state of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Proceed to the requested route.
    Allowed,

    /// Abandon the requested route and navigate to `to` instead.
    Redirected {
        to: String,
        reason: RedirectReason,
    },
}

impl Outcome {
    /// True iff the transition may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Outcome::Allowed)
    }

    /// The redirect target, if any.
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Outcome::Allowed => None,
            Outcome::Redirected { to, .. } => Some(to),
        }
    }
}

// ---------------------------------------------------------------------------
// NavigationGuard
// ---------------------------------------------------------------------------

/// Decides every route transition against the session and the route table.
///
/// Holds only the immutable table; the session store is borrowed per
/// evaluation, so the UI root keeps ownership of it (and can hand it to
/// views for the read-only queries between navigations).
pub struct NavigationGuard {
    table: RouteTable,
}

impl NavigationGuard {
    /// Creates a guard over a built route table.
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// The table this guard consults.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Evaluates one route transition.
    ///
    /// Always begins by refreshing the store from the persisted cookie,
    /// so a logout in another tab or an expired cookie is honored on this
    /// navigation without a page reload. The checks then run in a fixed
    /// order and the first match wins:
    ///
    /// 1. undeclared target → deny by default
    /// 2. auth required, no session → login
    /// 3. auth required, wrong role → that role's landing (not login —
    ///    the user *is* authenticated)
    /// 4. public-only target, authenticated → that role's landing
    /// 5. otherwise → allowed
    pub fn evaluate<J: CookieJar>(
        &self,
        store: &mut SessionStore<J>,
        to: &str,
    ) -> Outcome {
        store.load_from_persisted();
        let role = store.role();

        let Some(requirement) = self.table.requirement(to) else {
            tracing::warn!(route = %to, "transition to undeclared route denied");
            let target = match role {
                Some(role) => self.table.landing_for(role),
                None => self.table.login_route(),
            };
            return self.redirect(to, target, RedirectReason::UnknownRoute);
        };

        match role {
            None => {
                if requirement.requires_auth {
                    return self.redirect(
                        to,
                        self.table.login_route(),
                        RedirectReason::Unauthenticated,
                    );
                }
                Outcome::Allowed
            }
            Some(role) => {
                if requirement.requires_auth
                    && !can_access(Some(role), requirement)
                {
                    tracing::info!(route = %to, %role, "role not admitted");
                    return self.redirect(
                        to,
                        self.table.landing_for(role),
                        RedirectReason::RoleDenied,
                    );
                }
                if !requirement.requires_auth && self.table.is_public_only(to)
                {
                    return self.redirect(
                        to,
                        self.table.landing_for(role),
                        RedirectReason::AlreadyAuthenticated,
                    );
                }
                Outcome::Allowed
            }
        }
    }

    fn redirect(
        &self,
        from: &str,
        to: &str,
        reason: RedirectReason,
    ) -> Outcome {
        tracing::debug!(requested = %from, redirect = %to, ?reason, "transition redirected");
        Outcome::Redirected {
            to: to.to_string(),
            reason,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
