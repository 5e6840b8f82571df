//! End-to-end tests over the public API: a canned backend, a shared
//! cookie jar standing in for the browser, and one `Portal` per "tab".

use std::collections::HashMap;

use aidgate::prelude::*;
use aidgate::routes;
use aidgate::{
    AccountProvider, AccountRequest, LoginError, LoginPayload,
    PasswordReset, SessionError,
};

// =========================================================================
// Canned backend
// =========================================================================

/// A login/account backend with a fixed user list.
struct CannedBackend {
    users: HashMap<String, (String, LoginPayload)>,
}

impl CannedBackend {
    /// One user per role, password `pw` for all of them.
    fn seeded() -> Self {
        let mut users = HashMap::new();
        for (username, user_id, role) in [
            ("ada", "u-admin", "Admin"),
            ("obi", "u-observer", "Admin Observer"),
            ("dan", "u-donor", "Donor"),
            ("rae", "u-recipient", "Recipient"),
        ] {
            users.insert(
                username.to_string(),
                (
                    "pw".to_string(),
                    LoginPayload {
                        user_id: Some(user_id.into()),
                        username: Some(username.into()),
                        role: Some(role.into()),
                    },
                ),
            );
        }
        Self { users }
    }
}

impl LoginProvider for CannedBackend {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<LoginPayload, LoginError> {
        match self.users.get(&credentials.username) {
            Some((password, payload)) if *password == credentials.password => {
                Ok(payload.clone())
            }
            _ => Err(LoginError::Rejected {
                status: 401,
                message: "invalid credentials".into(),
            }),
        }
    }
}

impl AccountProvider for CannedBackend {
    async fn request_account(
        &self,
        _request: &AccountRequest,
    ) -> Result<(), LoginError> {
        Ok(())
    }

    async fn reset_password(
        &self,
        reset: &PasswordReset,
    ) -> Result<(), LoginError> {
        if self.users.contains_key(&reset.username) {
            Ok(())
        } else {
            Err(LoginError::Rejected {
                status: 404,
                message: "no such account".into(),
            })
        }
    }
}

// =========================================================================
// Helpers
// =========================================================================

fn portal(jar: MemoryJar) -> Portal<MemoryJar> {
    Portal::new(jar, StoreConfig::default(), donation_routes())
}

fn creds(username: &str) -> Credentials {
    Credentials::new(username, "pw")
}

// =========================================================================
// Login flow
// =========================================================================

#[tokio::test]
async fn test_login_then_navigate_full_flow() {
    let backend = CannedBackend::seeded();
    let mut portal = portal(MemoryJar::new());

    // Logged out: the admin page bounces to login, the login page shows.
    assert_eq!(
        portal.navigate(routes::ADMIN).redirect_target(),
        Some(routes::LOGIN)
    );
    assert!(portal.navigate(routes::LOGIN).is_allowed());

    // Log in as a donor.
    portal.login(&backend, &creds("dan")).await.unwrap();
    assert!(portal.is_authenticated());
    assert_eq!(portal.role(), Some(Role::Donor));
    assert_eq!(portal.username(), Some("dan"));

    // Donor pages open; admin pages bounce to the donor landing; the
    // login page is no longer reachable.
    assert!(portal.navigate(routes::DONOR).is_allowed());
    assert!(portal.navigate(routes::CREATE_PLEDGE).is_allowed());
    assert_eq!(
        portal.navigate(routes::ADMIN).redirect_target(),
        Some(routes::DONOR)
    );
    assert_eq!(
        portal.navigate(routes::LOGIN).redirect_target(),
        Some(routes::DONOR)
    );

    // Log out: back to square one.
    portal.logout();
    assert_eq!(
        portal.navigate(routes::DONOR).redirect_target(),
        Some(routes::LOGIN)
    );
}

#[tokio::test]
async fn test_failed_login_leaves_portal_unauthenticated() {
    let backend = CannedBackend::seeded();
    let mut portal = portal(MemoryJar::new());

    let result = portal
        .login(&backend, &Credentials::new("dan", "wrong"))
        .await;

    assert!(matches!(
        result,
        Err(SessionError::Login(LoginError::Rejected { status: 401, .. }))
    ));
    assert!(!portal.is_authenticated());
    assert_eq!(
        portal.navigate(routes::DONOR).redirect_target(),
        Some(routes::LOGIN)
    );
}

// =========================================================================
// Persistence across "page loads"
// =========================================================================

#[tokio::test]
async fn test_restore_rehydrates_session_from_cookie() {
    let backend = CannedBackend::seeded();
    let jar = MemoryJar::new();

    // First page load: log in.
    let mut first = portal(jar.clone());
    first.login(&backend, &creds("ada")).await.unwrap();

    // Reload: a fresh portal over the same jar starts empty, then
    // restores the session at bootstrap.
    let mut second = portal(jar);
    assert!(!second.is_authenticated());
    second.restore();
    assert!(second.is_authenticated());
    assert_eq!(second.role(), Some(Role::Admin));
}

// =========================================================================
// Multi-tab behavior
// =========================================================================

#[tokio::test]
async fn test_logout_in_one_tab_observed_in_other_on_next_navigation() {
    let backend = CannedBackend::seeded();
    let jar = MemoryJar::new();
    let mut tab_a = portal(jar.clone());
    let mut tab_b = portal(jar);

    tab_a.login(&backend, &creds("ada")).await.unwrap();
    tab_b.restore();
    assert!(tab_b.navigate(routes::ADMIN).is_allowed());

    tab_a.logout();

    // Tab B still believes it is authenticated until its next
    // navigation — the accepted staleness window.
    assert!(tab_b.is_authenticated());
    assert_eq!(
        tab_b.navigate(routes::ADMIN).redirect_target(),
        Some(routes::LOGIN)
    );
    assert!(!tab_b.is_authenticated());
}

#[tokio::test]
async fn test_cross_tab_logins_converge_to_last_writer() {
    let backend = CannedBackend::seeded();
    let jar = MemoryJar::new();
    let mut tab_a = portal(jar.clone());
    let mut tab_b = portal(jar);

    tab_a.login(&backend, &creds("ada")).await.unwrap();
    tab_b.login(&backend, &creds("dan")).await.unwrap();

    // The donor login wrote last; tab A converges on its next navigation.
    tab_a.navigate(routes::REQUEST_PAGE);
    assert_eq!(tab_a.role(), Some(Role::Donor));
    assert_eq!(tab_b.role(), Some(Role::Donor));
}

// =========================================================================
// The observer journey
// =========================================================================

#[tokio::test]
async fn test_admin_observer_read_only_journey() {
    let backend = CannedBackend::seeded();
    let mut portal = portal(MemoryJar::new());
    portal.login(&backend, &creds("obi")).await.unwrap();

    // May see the admin dashboard and the events list...
    assert!(portal.navigate(routes::ADMIN).is_allowed());
    assert!(portal.navigate(routes::VIEW_EVENTS).is_allowed());

    // ...but every write surface bounces to the admin landing.
    for write_route in [
        routes::CREATE_EVENT,
        routes::MANAGE_ITEMS,
        routes::CREATE_MATCH,
        routes::CREATE_REQUEST,
    ] {
        assert_eq!(
            portal.navigate(write_route).redirect_target(),
            Some(routes::ADMIN),
            "observer must be bounced from {write_route}"
        );
    }

    // The capability queries agree with the navigation outcomes.
    assert!(portal.can(Capability::View));
    assert!(!portal.can(Capability::Edit));
    assert!(!portal.can(Capability::CreateRequests));
}

// =========================================================================
// Account flows never touch the session
// =========================================================================

#[tokio::test]
async fn test_account_request_does_not_touch_session() {
    let backend = CannedBackend::seeded();
    let portal = portal(MemoryJar::new());

    portal
        .request_account(
            &backend,
            &AccountRequest {
                username: "newbie".into(),
                password: "pw".into(),
                email: "newbie@example.org".into(),
                role: "Donor".into(),
            },
        )
        .await
        .unwrap();

    assert!(!portal.is_authenticated());
}

#[tokio::test]
async fn test_password_reset_error_propagates_without_session_change() {
    let backend = CannedBackend::seeded();
    let portal = portal(MemoryJar::new());

    let result = portal
        .reset_password(
            &backend,
            &PasswordReset {
                username: "ghost".into(),
                email: "ghost@example.org".into(),
                new_password: "pw2".into(),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(LoginError::Rejected { status: 404, .. })
    ));
    assert!(!portal.is_authenticated());
}
