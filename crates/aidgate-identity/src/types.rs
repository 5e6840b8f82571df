//! Core identity types: `UserId`, `Role`, and `Identity`.
//!
//! These are the structures that get persisted to the auth cookie and read
//! back on every navigation, so their serde attributes pin the exact JSON
//! key names and role spellings the deployed backend already uses. Changing
//! any of them silently logs out every user with an existing cookie.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::IdentityError;

// ---------------------------------------------------------------------------
// UserId
// ---------------------------------------------------------------------------

/// An opaque identifier for a user account.
///
/// A newtype wrapper around `String`: the backend assigns these and the
/// client never inspects them, so nothing stronger than "some string" is
/// assumed. The wrapper keeps a user id from being confused with a
/// username in function signatures.
///
/// `#[serde(transparent)]` serializes this as the inner string, so
/// `UserId("u1")` becomes `"u1"` in the cookie, not `{ "0": "u1" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The closed set of user categories.
///
/// Every authenticated user has exactly one role; an unauthenticated user
/// has *no* role (represented by the absence of an [`Identity`], never by
/// an extra variant here). Permissions are derived from the role through
/// the policy layer — this type deliberately carries no capability logic.
///
/// The serialized spelling of [`AdminObserver`](Role::AdminObserver) is
/// `"Admin Observer"` (with a space): that is what the backend sends in
/// login responses and what existing cookies contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full administrative access.
    Admin,

    /// Read-only administrative access: may see admin pages, never change
    /// anything through them.
    #[serde(rename = "Admin Observer")]
    AdminObserver,

    /// A donor: pledges items and responds to requests.
    Donor,

    /// A recipient: requests donated items.
    Recipient,
}

impl Role {
    /// Every role, in a fixed order.
    ///
    /// Exists so tests and the policy layer can iterate the enumeration
    /// exhaustively — a new variant that isn't added here fails the
    /// policy table tests immediately.
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::AdminObserver,
        Role::Donor,
        Role::Recipient,
    ];

    /// The wire spelling of this role (the same string serde produces).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::AdminObserver => "Admin Observer",
            Role::Donor => "Donor",
            Role::Recipient => "Recipient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = IdentityError;

    /// Parses a role from its wire spelling.
    ///
    /// Anything outside the enumeration is an [`IdentityError::UnknownRole`].
    /// Matching is exact — a cookie minted by a deployment with a different
    /// role set must not be silently coerced into the current one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Admin Observer" => Ok(Role::AdminObserver),
            "Donor" => Ok(Role::Donor),
            "Recipient" => Ok(Role::Recipient),
            other => Err(IdentityError::UnknownRole(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A validated identity: who is using the app right now.
///
/// The central invariant of the whole auth layer — "a role must never
/// exist without a user id, and vice versa" — is enforced structurally:
/// an `Identity` cannot be constructed without both, and the session layer
/// stores `Option<Identity>`. There is no half-authenticated state to
/// defend against at runtime.
///
/// The serde renames pin the legacy cookie keys (`userId`, camelCase).
/// `username` is `#[serde(default)]` because cookies written by earlier
/// revisions of the app omitted it; a missing username must not invalidate
/// an otherwise well-formed cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The account identifier. Present on every identity by construction.
    #[serde(rename = "userId")]
    pub user_id: UserId,

    /// Display name. Optional on decode (legacy cookies), always written
    /// by the current revision.
    #[serde(default)]
    pub username: Option<String>,

    /// The user's role.
    pub role: Role,
}

impl Identity {
    /// Creates an identity with all fields present.
    pub fn new(
        user_id: impl Into<UserId>,
        username: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: Some(username.into()),
            role,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
