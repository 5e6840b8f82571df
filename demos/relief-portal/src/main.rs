//! Walkthrough of the session/authorization core: one in-memory "browser",
//! a canned login backend, and a scripted sequence of navigations showing
//! every verdict the guard can reach.
//!
//! Run with `RUST_LOG=debug` to watch the store and guard narrate their
//! decisions.

use aidgate::prelude::*;
use aidgate::{LoginError, LoginPayload, routes};
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Canned backend
// ---------------------------------------------------------------------------

/// Three fixed accounts, password `pw`.
struct DemoBackend;

impl LoginProvider for DemoBackend {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<LoginPayload, LoginError> {
        let role = match (credentials.username.as_str(), credentials.password.as_str()) {
            ("ada", "pw") => "Admin",
            ("obi", "pw") => "Admin Observer",
            ("dan", "pw") => "Donor",
            _ => {
                return Err(LoginError::Rejected {
                    status: 401,
                    message: "invalid credentials".into(),
                });
            }
        };
        Ok(LoginPayload {
            user_id: Some(format!("u-{}", credentials.username)),
            username: Some(credentials.username.clone()),
            role: Some(role.into()),
        })
    }
}

// ---------------------------------------------------------------------------
// Walkthrough
// ---------------------------------------------------------------------------

fn show(portal: &mut Portal<MemoryJar>, to: &str) {
    let who = portal
        .username()
        .map(str::to_string)
        .unwrap_or_else(|| "(anonymous)".into());
    match portal.navigate(to) {
        Outcome::Allowed => println!("{who:>12} → {to:<18} allowed"),
        Outcome::Redirected { to: target, reason } => {
            println!("{who:>12} → {to:<18} redirected to {target} ({reason:?})");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let backend = DemoBackend;
    let jar = MemoryJar::new();
    let mut portal =
        Portal::new(jar.clone(), StoreConfig::default(), donation_routes());
    portal.restore();

    println!("-- logged out --");
    show(&mut portal, routes::LOGIN);
    show(&mut portal, routes::ADMIN);
    show(&mut portal, routes::CREATE_REQUEST);

    println!("-- wrong password --");
    if let Err(e) = portal
        .login(&backend, &Credentials::new("dan", "nope"))
        .await
    {
        println!("{:>12}   login failed: {e}", "dan");
    }

    println!("-- donor session --");
    portal.login(&backend, &Credentials::new("dan", "pw")).await?;
    show(&mut portal, routes::DONOR);
    show(&mut portal, routes::CREATE_PLEDGE);
    show(&mut portal, routes::CREATE_EVENT); // wrong role → donor landing
    show(&mut portal, routes::LOGIN); // public-only → donor landing

    println!("-- observer session (second tab, same jar) --");
    let mut second_tab =
        Portal::new(jar, StoreConfig::default(), donation_routes());
    second_tab
        .login(&backend, &Credentials::new("obi", "pw"))
        .await?;
    show(&mut second_tab, routes::ADMIN); // observers may look
    show(&mut second_tab, routes::MANAGE_ITEMS); // but never touch

    // The observer login overwrote the shared cookie; the first tab
    // converges on its next navigation.
    println!("-- first tab converges to the shared cookie --");
    show(&mut portal, routes::ADMIN);

    println!("-- logged out again --");
    second_tab.logout();
    show(&mut portal, routes::ADMIN);

    Ok(())
}
