//! The role-permission model: one static table, fixed at startup.
//!
//! Earlier revisions of this system scattered role checks across the
//! navigation code, and the checks drifted out of agreement with each
//! other — the observer role in particular was silently broadened in one
//! place and narrowed in another. The fix is structural: every permission
//! decision lives here, declared once, reviewed as a unit, and everything
//! else (the session store's capability queries, the navigation guard's
//! verdicts) is a lookup into this crate.
//!
//! Two tables:
//!
//! 1. [`grants`] — role × [`Capability`] → allowed? (what a role may *do*)
//! 2. [`RouteTable`] — route name → [`RouteRequirement`] (where a role
//!    may *go*), plus the login route, the public-only set, and one
//!    landing route per role family
//!
//! Permissions are never inherited between roles by name similarity:
//! `AdminObserver` gets exactly what its rows say, nothing implied by
//! containing the word "Admin".

mod capability;
mod error;
mod route;

pub use capability::{Capability, grants};
pub use error::PolicyError;
pub use route::{RouteRequirement, RouteTable, RouteTableBuilder, can_access};
