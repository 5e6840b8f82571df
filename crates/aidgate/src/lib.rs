//! # Aidgate
//!
//! Client-side session and authorization core for a donation-management
//! portal: a persisted session store, a static role-permission model, and
//! a navigation guard that decides every route transition.
//!
//! The UI, the HTTP transport, and the backend are all outside this
//! workspace — they plug in through the [`CookieJar`], [`LoginProvider`],
//! and [`AccountProvider`] seams and consume the read-only queries on
//! [`Portal`].
//!
//! ## Quick start
//!
//! ```rust
//! use aidgate::prelude::*;
//!
//! // One jar per browser profile; clones share storage like tabs do.
//! let jar = MemoryJar::new();
//! let mut portal = Portal::new(jar, StoreConfig::default(), donation_routes());
//!
//! // Bootstrap: pick up a session surviving from the last page load.
//! portal.restore();
//!
//! // Ask before every transition.
//! match portal.navigate("Admin") {
//!     Outcome::Allowed => { /* render the admin view */ }
//!     Outcome::Redirected { to, .. } => { /* navigate to `to` instead */ }
//! }
//! ```

mod inventory;
mod portal;

pub use inventory::{donation_routes, routes};
pub use portal::Portal;

// Re-export the layer crates under one roof, so downstream code depends
// on `aidgate` alone.
pub use aidgate_guard::{NavigationGuard, Outcome, RedirectReason};
pub use aidgate_identity::{CookieCodec, Identity, IdentityError, Role, UserId};
pub use aidgate_policy::{
    Capability, PolicyError, RouteRequirement, RouteTable, can_access, grants,
};
pub use aidgate_session::{
    AccountProvider, AccountRequest, CookieAttributes, CookieJar,
    Credentials, LoginError, LoginPayload, LoginProvider, MemoryJar,
    PasswordReset, SameSite, Session, SessionError, SessionStore,
    StoreConfig,
};

/// The usual imports, in one line.
pub mod prelude {
    pub use crate::inventory::{donation_routes, routes};
    pub use crate::portal::Portal;
    pub use aidgate_guard::{NavigationGuard, Outcome, RedirectReason};
    pub use aidgate_identity::Role;
    pub use aidgate_policy::{Capability, RouteRequirement, RouteTable};
    pub use aidgate_session::{
        CookieJar, Credentials, LoginProvider, MemoryJar, SessionStore,
        StoreConfig,
    };
}
