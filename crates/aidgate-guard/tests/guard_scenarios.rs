//! Scenario tests for the navigation guard: every combination of session
//! state and route requirement that has ever caused a bug, exercised
//! through the public API over a shared in-memory cookie jar.

use std::time::Duration;

use aidgate_guard::{NavigationGuard, Outcome, RedirectReason};
use aidgate_identity::Role;
use aidgate_policy::{RouteRequirement, RouteTable};
use aidgate_session::{
    LoginPayload, MemoryJar, SessionStore, StoreConfig,
};

// =========================================================================
// Helpers
// =========================================================================

/// A trimmed-down page inventory with every kind of route the guard
/// distinguishes: public-only, public, unrestricted-authenticated, and
/// role-restricted.
fn table() -> RouteTable {
    RouteTable::builder()
        .route("Login", RouteRequirement::public())
        .route("Register", RouteRequirement::public())
        .route("About", RouteRequirement::public())
        .route("Admin", RouteRequirement::restricted([
            Role::Admin,
            Role::AdminObserver,
        ]))
        .route("CreateEvent", RouteRequirement::restricted([Role::Admin]))
        .route("Donor", RouteRequirement::restricted([Role::Donor]))
        .route("RequestPage", RouteRequirement::authenticated())
        .login_route("Login")
        .public_only(["Login", "Register"])
        .admin_landing("Admin")
        .donor_landing("Donor")
        .recipient_landing("RequestPage")
        .build()
        .expect("scenario table is valid")
}

fn guard() -> NavigationGuard {
    NavigationGuard::new(table())
}

fn store(jar: MemoryJar) -> SessionStore<MemoryJar> {
    SessionStore::new(jar, StoreConfig::default())
}

fn payload(role: &str) -> LoginPayload {
    LoginPayload {
        user_id: Some("u1".into()),
        username: Some("alice".into()),
        role: Some(role.into()),
    }
}

/// A store already authenticated with the given role.
fn authenticated(role: &str) -> SessionStore<MemoryJar> {
    let mut store = store(MemoryJar::new());
    store.set_identity(payload(role)).expect("valid payload");
    store
}

fn redirect(to: &str, reason: RedirectReason) -> Outcome {
    Outcome::Redirected {
        to: to.to_string(),
        reason,
    }
}

// =========================================================================
// The four canonical scenarios
// =========================================================================

#[test]
fn test_evaluate_unauthenticated_on_protected_route_redirects_to_login() {
    let guard = guard();
    let mut store = store(MemoryJar::new());

    let outcome = guard.evaluate(&mut store, "Admin");

    assert_eq!(
        outcome,
        redirect("Login", RedirectReason::Unauthenticated)
    );
}

#[test]
fn test_evaluate_wrong_role_redirects_to_own_landing_not_login() {
    // A donor hitting an admin-only route is authenticated — they go to
    // the donor landing, never back to the login form.
    let guard = guard();
    let mut store = authenticated("Donor");

    let outcome = guard.evaluate(&mut store, "CreateEvent");

    assert_eq!(outcome, redirect("Donor", RedirectReason::RoleDenied));
}

#[test]
fn test_evaluate_authenticated_on_public_only_redirects_to_landing() {
    // A logged-in admin must never be shown the login page.
    let guard = guard();
    let mut store = authenticated("Admin");

    let outcome = guard.evaluate(&mut store, "Login");

    assert_eq!(
        outcome,
        redirect("Admin", RedirectReason::AlreadyAuthenticated)
    );
}

#[test]
fn test_evaluate_observer_denied_create_event_but_allowed_dashboard() {
    // The observer may view the admin dashboard yet is denied the
    // create-event page — and the denial lands on the admin landing,
    // because observers share it.
    let guard = guard();
    let mut store = authenticated("Admin Observer");

    assert!(guard.evaluate(&mut store, "Admin").is_allowed());
    assert_eq!(
        guard.evaluate(&mut store, "CreateEvent"),
        redirect("Admin", RedirectReason::RoleDenied)
    );
}

// =========================================================================
// Allowed transitions
// =========================================================================

#[test]
fn test_evaluate_matching_role_is_allowed() {
    let guard = guard();
    let mut store = authenticated("Donor");

    assert!(guard.evaluate(&mut store, "Donor").is_allowed());
}

#[test]
fn test_evaluate_unauthenticated_on_public_route_is_allowed() {
    let guard = guard();
    let mut store = store(MemoryJar::new());

    assert!(guard.evaluate(&mut store, "Login").is_allowed());
    assert!(guard.evaluate(&mut store, "About").is_allowed());
}

#[test]
fn test_evaluate_unrestricted_route_admits_every_role() {
    let guard = guard();
    for role in Role::ALL {
        let mut store = authenticated(role.as_str());
        assert!(
            guard.evaluate(&mut store, "RequestPage").is_allowed(),
            "{role} should reach an unrestricted authenticated route"
        );
    }
}

#[test]
fn test_evaluate_public_but_not_public_only_allowed_when_authenticated() {
    // "About" is public but not in the public-only set: logged-in users
    // may see it too.
    let guard = guard();
    let mut store = authenticated("Admin");

    assert!(guard.evaluate(&mut store, "About").is_allowed());
}

// =========================================================================
// Ordering and refresh behavior
// =========================================================================

#[test]
fn test_evaluate_first_match_wins_distinct_redirects_for_same_route() {
    // The same restricted route produces different redirects depending on
    // which check fires first: no session → login, wrong role → landing.
    let guard = guard();

    let mut anonymous = store(MemoryJar::new());
    let mut donor = authenticated("Donor");

    let unauthenticated = guard.evaluate(&mut anonymous, "CreateEvent");
    let wrong_role = guard.evaluate(&mut donor, "CreateEvent");

    assert_eq!(
        unauthenticated,
        redirect("Login", RedirectReason::Unauthenticated)
    );
    assert_eq!(wrong_role, redirect("Donor", RedirectReason::RoleDenied));
}

#[test]
fn test_evaluate_refreshes_from_cookie_before_deciding() {
    // Tab B logs out by removing the shared cookie. Tab A's very next
    // guard evaluation observes it — no reload required.
    let jar = MemoryJar::new();
    let guard = guard();
    let mut tab_a = store(jar.clone());
    tab_a.set_identity(payload("Admin")).unwrap();
    assert!(guard.evaluate(&mut tab_a, "Admin").is_allowed());

    let mut tab_b = store(jar);
    tab_b.load_from_persisted();
    tab_b.logout();

    let outcome = guard.evaluate(&mut tab_a, "Admin");
    assert_eq!(
        outcome,
        redirect("Login", RedirectReason::Unauthenticated)
    );
}

#[test]
fn test_evaluate_external_login_upgrades_session_mid_tab() {
    // The reverse of the logout case: a login in another tab is honored
    // here on the next navigation.
    let jar = MemoryJar::new();
    let guard = guard();
    let mut tab_a = store(jar.clone());
    assert!(!guard.evaluate(&mut tab_a, "Admin").is_allowed());

    let mut tab_b = store(jar);
    tab_b.set_identity(payload("Admin")).unwrap();

    assert!(guard.evaluate(&mut tab_a, "Admin").is_allowed());
}

#[test]
fn test_evaluate_expired_cookie_redirects_to_login() {
    let guard = guard();
    let mut store = SessionStore::new(
        MemoryJar::new(),
        StoreConfig {
            ttl: Duration::ZERO,
            ..StoreConfig::default()
        },
    );
    store.set_identity(payload("Admin")).unwrap();

    // The cookie is already expired; the refresh at the start of the
    // evaluation drops the in-memory session before any check runs.
    let outcome = guard.evaluate(&mut store, "Admin");

    assert_eq!(
        outcome,
        redirect("Login", RedirectReason::Unauthenticated)
    );
    assert!(!store.is_authenticated());
}

// =========================================================================
// Undeclared routes
// =========================================================================

#[test]
fn test_evaluate_unknown_route_unauthenticated_redirects_to_login() {
    let guard = guard();
    let mut store = store(MemoryJar::new());

    let outcome = guard.evaluate(&mut store, "Nowhere");

    assert_eq!(outcome, redirect("Login", RedirectReason::UnknownRoute));
}

#[test]
fn test_evaluate_unknown_route_authenticated_redirects_to_landing() {
    let guard = guard();
    let mut store = authenticated("Donor");

    let outcome = guard.evaluate(&mut store, "Nowhere");

    assert_eq!(outcome, redirect("Donor", RedirectReason::UnknownRoute));
}
