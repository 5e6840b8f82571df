//! Identity types for Aidgate: who a user is, and how that fact survives
//! a page reload.
//!
//! This crate defines the types every other layer builds on:
//!
//! 1. **Identity** — a validated (user id, username, role) triple
//! 2. **Role** — the closed set of user categories
//! 3. **CookieCodec** — serializes an identity to/from the single cookie
//!    string that is the only durable record of a session
//!
//! # How it fits in the stack
//!
//! ```text
//! Guard Layer (above)  ← decides route transitions from the session
//!     ↕
//! Session Layer        ← owns the in-memory session, persists via cookie
//!     ↕
//! Identity Layer (this crate)  ← provides Identity, Role, CookieCodec
//! ```

mod codec;
mod error;
mod types;

pub use codec::CookieCodec;
pub use error::IdentityError;
pub use types::{Identity, Role, UserId};
