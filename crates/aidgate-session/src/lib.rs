//! Session management for Aidgate.
//!
//! This crate owns the answer to "who is using the app right now":
//!
//! 1. **Session store** — the single source of truth for the current
//!    identity, rehydratable from the auth cookie ([`SessionStore`])
//! 2. **Cookie jar** — the durable-storage seam ([`CookieJar`] trait,
//!    with [`MemoryJar`] for tests and non-browser hosts)
//! 3. **Login seam** — the external authentication collaborator
//!    ([`LoginProvider`] / [`AccountProvider`] traits)
//!
//! # How it fits in the stack
//!
//! ```text
//! Guard Layer (above)  ← refreshes the store, then asks it about the role
//!     ↕
//! Session Layer (this crate)  ← owns Session, talks to the cookie jar
//!     ↕
//! Identity Layer (below)  ← provides Identity, Role, CookieCodec
//! ```

mod error;
mod jar;
mod login;
mod store;

pub use error::SessionError;
pub use jar::{CookieAttributes, CookieJar, MemoryJar, SameSite};
pub use login::{
    AccountProvider, AccountRequest, Credentials, LoginError, LoginPayload,
    LoginProvider, PasswordReset,
};
pub use store::{Session, SessionStore, StoreConfig};
