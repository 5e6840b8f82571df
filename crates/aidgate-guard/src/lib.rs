//! The navigation guard: the interception point before every route
//! transition.
//!
//! One evaluation per transition, three possible endings:
//!
//! ```text
//!   Evaluating ──→ Allowed                      (proceed to the target)
//!        │
//!        └──────→ Redirected { to, reason }     (go somewhere else)
//! ```
//!
//! Both endings are terminal *for this transition* — a redirect starts a
//! new transition of its own, which cannot loop because the login route
//! and the landing routes are reachable by the users sent to them.
//!
//! # How it fits in the stack
//!
//! ```text
//! UI Router (above)  ← calls evaluate() before committing a transition
//!     ↕
//! Guard Layer (this crate)  ← refreshes the store, applies the policy
//!     ↕
//! Session + Policy Layers (below)  ← the session store and route table
//! ```

mod guard;

pub use guard::{NavigationGuard, Outcome, RedirectReason};
