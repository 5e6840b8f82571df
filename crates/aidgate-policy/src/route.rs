//! Route requirements and the route table.
//!
//! A [`RouteRequirement`] is attached to each navigable route at startup
//! and never changes afterwards. The [`RouteTable`] collects them, along
//! with the three pieces of routing knowledge the guard needs beyond plain
//! requirements: which route is the login page, which routes are
//! *public-only* (shown only to logged-out users), and where each role
//! lands when it has to be redirected.

use std::collections::{HashMap, HashSet};

use aidgate_identity::Role;
use serde::{Deserialize, Serialize};

use crate::PolicyError;

// ---------------------------------------------------------------------------
// RouteRequirement
// ---------------------------------------------------------------------------

/// The access rule attached to a single route.
///
/// An empty `allowed_roles` on an auth-required route means "any
/// authenticated role" — restriction is opt-in per route, and the roles a
/// restricted route admits are declared exhaustively (nothing is inferred
/// from role names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequirement {
    /// Whether the route is reachable only with an authenticated session.
    pub requires_auth: bool,

    /// Roles admitted when `requires_auth` is true. Empty = any role.
    #[serde(default)]
    pub allowed_roles: Vec<Role>,
}

impl RouteRequirement {
    /// A route anyone may reach, logged in or not.
    pub fn public() -> Self {
        Self {
            requires_auth: false,
            allowed_roles: Vec::new(),
        }
    }

    /// A route reachable by any authenticated role.
    pub fn authenticated() -> Self {
        Self {
            requires_auth: true,
            allowed_roles: Vec::new(),
        }
    }

    /// A route reachable only by the listed roles.
    pub fn restricted(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            requires_auth: true,
            allowed_roles: roles.into_iter().collect(),
        }
    }
}

/// Decides whether a role may enter a route with the given requirement.
///
/// The rule, in order:
/// 1. A public route is always accessible.
/// 2. An auth-required route is never accessible without a role.
/// 3. Otherwise, an empty allow-list admits any role; a non-empty one
///    admits exactly its members.
pub fn can_access(role: Option<Role>, requirement: &RouteRequirement) -> bool {
    if !requirement.requires_auth {
        return true;
    }
    let Some(role) = role else {
        return false;
    };
    requirement.allowed_roles.is_empty()
        || requirement.allowed_roles.contains(&role)
}

// ---------------------------------------------------------------------------
// RouteTable
// ---------------------------------------------------------------------------

/// The application's page inventory with access rules, built once at
/// startup and immutable afterwards.
///
/// Lookups never fail: an undeclared route is `None`, and the guard treats
/// that as deny-by-default.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, RouteRequirement>,
    login: String,
    public_only: HashSet<String>,
    admin_landing: String,
    donor_landing: String,
    recipient_landing: String,
}

impl RouteTable {
    /// Starts building a table.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// The requirement attached to a route, if the route is declared.
    pub fn requirement(&self, name: &str) -> Option<&RouteRequirement> {
        self.routes.get(name)
    }

    /// Whether a route is shown only to logged-out users
    /// (login, registration, password reset).
    pub fn is_public_only(&self, name: &str) -> bool {
        self.public_only.contains(name)
    }

    /// The route unauthenticated users are redirected to.
    pub fn login_route(&self) -> &str {
        &self.login
    }

    /// The default landing route for a role, used when a navigation is
    /// denied but the user is authenticated.
    ///
    /// Fixed priority: both admin roles share the admin landing, then
    /// donor, then recipient. The enumeration is closed, so there is no
    /// fallback arm — an "unrecognized role" cannot reach this function.
    pub fn landing_for(&self, role: Role) -> &str {
        match role {
            Role::Admin | Role::AdminObserver => &self.admin_landing,
            Role::Donor => &self.donor_landing,
            Role::Recipient => &self.recipient_landing,
        }
    }

    /// Iterates the declared route names (for exhaustiveness tests).
    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of declared routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are declared.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RouteTableBuilder
// ---------------------------------------------------------------------------

/// Builder for [`RouteTable`].
///
/// `build()` validates the whole declaration as a unit: no duplicate
/// routes, every special route declared, the public-only set actually
/// public. Catching these at startup is the entire value of having one
/// table instead of scattered checks.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<(String, RouteRequirement)>,
    login: Option<String>,
    public_only: Vec<String>,
    admin_landing: Option<String>,
    donor_landing: Option<String>,
    recipient_landing: Option<String>,
}

impl RouteTableBuilder {
    /// Declares a route with its requirement.
    pub fn route(
        mut self,
        name: impl Into<String>,
        requirement: RouteRequirement,
    ) -> Self {
        self.routes.push((name.into(), requirement));
        self
    }

    /// Names the login route.
    pub fn login_route(mut self, name: impl Into<String>) -> Self {
        self.login = Some(name.into());
        self
    }

    /// Marks routes as public-only: reachable *only* while logged out.
    pub fn public_only(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.public_only.extend(names.into_iter().map(Into::into));
        self
    }

    /// Names the landing route for both admin roles.
    pub fn admin_landing(mut self, name: impl Into<String>) -> Self {
        self.admin_landing = Some(name.into());
        self
    }

    /// Names the landing route for donors.
    pub fn donor_landing(mut self, name: impl Into<String>) -> Self {
        self.donor_landing = Some(name.into());
        self
    }

    /// Names the landing route for recipients.
    pub fn recipient_landing(mut self, name: impl Into<String>) -> Self {
        self.recipient_landing = Some(name.into());
        self
    }

    /// Validates the declaration and produces the immutable table.
    ///
    /// # Errors
    /// - [`PolicyError::DuplicateRoute`] — a name declared twice
    /// - [`PolicyError::MissingDeclaration`] — no login route or a missing
    ///   landing
    /// - [`PolicyError::UndeclaredRoute`] — login/landing/public-only
    ///   naming a route that isn't in the table
    /// - [`PolicyError::PublicOnlyRequiresAuth`] — a public-only route
    ///   that requires authentication
    pub fn build(self) -> Result<RouteTable, PolicyError> {
        let mut routes = HashMap::with_capacity(self.routes.len());
        for (name, requirement) in self.routes {
            if routes.insert(name.clone(), requirement).is_some() {
                return Err(PolicyError::DuplicateRoute(name));
            }
        }

        let login = self
            .login
            .ok_or(PolicyError::MissingDeclaration("a login route"))?;
        let admin_landing = self
            .admin_landing
            .ok_or(PolicyError::MissingDeclaration("an admin landing"))?;
        let donor_landing = self
            .donor_landing
            .ok_or(PolicyError::MissingDeclaration("a donor landing"))?;
        let recipient_landing = self
            .recipient_landing
            .ok_or(PolicyError::MissingDeclaration("a recipient landing"))?;

        for (context, name) in [
            ("login route", &login),
            ("admin landing", &admin_landing),
            ("donor landing", &donor_landing),
            ("recipient landing", &recipient_landing),
        ] {
            if !routes.contains_key(name.as_str()) {
                return Err(PolicyError::UndeclaredRoute {
                    context,
                    name: name.clone(),
                });
            }
        }

        let mut public_only = HashSet::with_capacity(self.public_only.len());
        for name in self.public_only {
            let Some(requirement) = routes.get(name.as_str()) else {
                return Err(PolicyError::UndeclaredRoute {
                    context: "public-only set",
                    name,
                });
            };
            if requirement.requires_auth {
                return Err(PolicyError::PublicOnlyRequiresAuth(name));
            }
            public_only.insert(name);
        }

        Ok(RouteTable {
            routes,
            login,
            public_only,
            admin_landing,
            donor_landing,
            recipient_landing,
        })
    }
}

// =========================================================================
// Tests
// =========================================================================
