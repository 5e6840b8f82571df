//! Error types for the policy layer.
//!
//! These only occur while *building* a route table at startup. Lookups on
//! a built table never fail — a missing route is an `Option::None`, and
//! every access decision is a plain `bool`.

/// Errors detected while assembling a [`RouteTable`](crate::RouteTable).
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The same route name was declared twice. Duplicate declarations are
    /// how the old scattered checks diverged; the table refuses them.
    #[error("route `{0}` declared more than once")]
    DuplicateRoute(String),

    /// A special role (login, landing, public-only) names a route that
    /// was never declared in the table.
    #[error("{context} references undeclared route `{name}`")]
    UndeclaredRoute {
        context: &'static str,
        name: String,
    },

    /// The builder finished without one of the required declarations.
    #[error("route table is missing {0}")]
    MissingDeclaration(&'static str),

    /// A route in the public-only set requires authentication — a
    /// contradiction: public-only routes exist precisely for users who
    /// are not logged in.
    #[error("public-only route `{0}` must not require authentication")]
    PublicOnlyRequiresAuth(String),
}
