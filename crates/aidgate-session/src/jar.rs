//! The cookie jar: where the auth cookie actually lives.
//!
//! In the browser this is `document.cookie`; on other hosts it can be any
//! local key-value store with expiry. The [`CookieJar`] trait is the seam:
//! the session store only ever reads, writes, and removes one named value,
//! and never sees how it is stored.
//!
//! # Concurrency note
//!
//! Writes are last-writer-wins, matching browser cookie semantics. Two
//! tabs writing the same cookie do not coordinate — whichever write lands
//! last is what every tab reads next. The store is built on top of that
//! assumption, not around it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

// ---------------------------------------------------------------------------
// CookieAttributes
// ---------------------------------------------------------------------------

/// The `SameSite` delivery policy for a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    /// Sent only on same-site requests. The auth cookie uses this.
    #[default]
    Strict,

    /// Sent on same-site requests and top-level navigations.
    Lax,

    /// Sent everywhere. Requires `Secure` in real browsers.
    None,
}

/// Attributes applied at write time, outside the cookie's value.
///
/// Expiry lives here and not in the payload: the storage medium enforces
/// it, exactly as a browser expires a cookie regardless of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieAttributes {
    /// How long the cookie lives after the write.
    pub max_age: Duration,

    /// Delivery policy.
    pub same_site: SameSite,
}

// ---------------------------------------------------------------------------
// CookieJar
// ---------------------------------------------------------------------------

/// Durable storage for named cookie values.
///
/// # Trait bounds
///
/// - `Send + Sync` → a jar handle may be shared with async login flows.
/// - `'static` → the jar owns its storage; it doesn't borrow temporary
///   data.
///
/// Implementations must make an expired cookie indistinguishable from an
/// absent one: `read` returns `None` for both.
pub trait CookieJar: Send + Sync + 'static {
    /// Returns the value stored under `name`, or `None` if absent or
    /// expired.
    fn read(&self, name: &str) -> Option<String>;

    /// Stores `value` under `name`, replacing any previous value
    /// (last-writer-wins).
    fn write(&self, name: &str, value: String, attributes: &CookieAttributes);

    /// Removes the value stored under `name`. Removing an absent cookie
    /// is a no-op.
    fn remove(&self, name: &str);
}

// ---------------------------------------------------------------------------
// MemoryJar
// ---------------------------------------------------------------------------

/// What `MemoryJar` stores per cookie: the value and its deadline.
#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    expires_at: Instant,
}

/// An in-memory [`CookieJar`] with real expiry semantics.
///
/// Cloning produces a handle to the *same* storage — two clones observe
/// each other's writes, which is how multi-tab behavior is modeled: one
/// jar, one store per "tab".
///
/// Expiry uses `Instant`, Rust's monotonic clock, so a cookie written
/// with `max_age` of an hour is absent on any read an hour later
/// regardless of wall-clock adjustments.
#[derive(Debug, Clone, Default)]
pub struct MemoryJar {
    cookies: Arc<Mutex<HashMap<String, StoredCookie>>>,
}

impl MemoryJar {
    /// Creates an empty jar.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryJar {
    fn read(&self, name: &str) -> Option<String> {
        let mut cookies = self.cookies.lock().expect("jar lock poisoned");
        match cookies.get(name) {
            Some(cookie) if cookie.expires_at > Instant::now() => {
                Some(cookie.value.clone())
            }
            Some(_) => {
                // Expired: prune it so the jar doesn't accumulate
                // dead entries.
                cookies.remove(name);
                None
            }
            None => None,
        }
    }

    fn write(&self, name: &str, value: String, attributes: &CookieAttributes) {
        let stored = StoredCookie {
            value,
            expires_at: Instant::now() + attributes.max_age,
        };
        self.cookies
            .lock()
            .expect("jar lock poisoned")
            .insert(name.to_string(), stored);
    }

    fn remove(&self, name: &str) {
        self.cookies.lock().expect("jar lock poisoned").remove(name);
    }
}

// =========================================================================
// Tests
// =========================================================================
