//! The donation portal's page inventory.
//!
//! Every navigable route, its access rule, the public-only set, and the
//! per-role landing pages — declared in one place and reviewed as a unit.
//! The navigation guard never decides anything this table doesn't say.

use aidgate_identity::Role;
use aidgate_policy::{RouteRequirement, RouteTable};

/// Route names, as the router refers to them.
///
/// Constants rather than bare strings so a typo is a compile error at the
/// call site instead of a mysterious deny-by-default at runtime.
pub mod routes {
    pub const LOGIN: &str = "Login";
    pub const REGISTER: &str = "Register";
    pub const RESET_PASSWORD: &str = "ResetPassword";

    pub const ADMIN: &str = "Admin";
    pub const CREATE_EVENT: &str = "CreateEvent";
    pub const MANAGE_ITEMS: &str = "ManageItems";
    pub const VIEW_EVENTS: &str = "ViewEvents";

    pub const DONOR: &str = "Donor";
    pub const PLEDGES: &str = "Pledges";
    pub const CREATE_PLEDGE: &str = "CreatePledge";
    pub const RESPOND_TO_REQUESTS: &str = "RespondToRequests";
    pub const RESPOND_PAGE: &str = "RespondPage";

    pub const CREATE_REQUEST: &str = "CreateRequest";
    pub const CREATE_MATCH: &str = "CreateMatch";
    pub const AUTO_MATCH: &str = "AutoMatch";
    pub const MATCHES_PAGE: &str = "MatchesPage";
    pub const REQUEST_PAGE: &str = "RequestPage";
    pub const SHIPPING_VIEW: &str = "ShippingView";
}

/// Builds the donation portal's route table.
///
/// Access rules, spelled out per route (the observer role appears exactly
/// where it may go — on the two read-only admin pages — and nowhere else):
///
/// | route             | access                    |
/// |-------------------|---------------------------|
/// | Login             | public-only               |
/// | Register          | public-only               |
/// | ResetPassword     | public-only               |
/// | Admin             | Admin, AdminObserver      |
/// | CreateEvent       | Admin                     |
/// | ManageItems       | Admin                     |
/// | ViewEvents        | Admin, AdminObserver      |
/// | Donor             | Donor                     |
/// | Pledges           | Admin, Donor              |
/// | CreatePledge      | Donor                     |
/// | RespondToRequests | Admin, Donor              |
/// | RespondPage       | Admin, Donor              |
/// | CreateRequest     | Admin, Donor, Recipient   |
/// | CreateMatch       | Admin                     |
/// | AutoMatch         | Admin                     |
/// | MatchesPage       | any authenticated         |
/// | RequestPage       | any authenticated         |
/// | ShippingView      | any authenticated         |
///
/// Landings: admin roles → `Admin`, donors → `Donor`, recipients →
/// `RequestPage` (the request dashboard is the only recipient-reachable
/// overview page).
pub fn donation_routes() -> RouteTable {
    use routes::*;

    RouteTable::builder()
        // Public-only entry points.
        .route(LOGIN, RouteRequirement::public())
        .route(REGISTER, RouteRequirement::public())
        .route(RESET_PASSWORD, RouteRequirement::public())
        // Admin area. Observers get the read-only pages.
        .route(
            ADMIN,
            RouteRequirement::restricted([Role::Admin, Role::AdminObserver]),
        )
        .route(CREATE_EVENT, RouteRequirement::restricted([Role::Admin]))
        .route(MANAGE_ITEMS, RouteRequirement::restricted([Role::Admin]))
        .route(
            VIEW_EVENTS,
            RouteRequirement::restricted([Role::Admin, Role::AdminObserver]),
        )
        // Donor area.
        .route(DONOR, RouteRequirement::restricted([Role::Donor]))
        .route(
            PLEDGES,
            RouteRequirement::restricted([Role::Admin, Role::Donor]),
        )
        .route(CREATE_PLEDGE, RouteRequirement::restricted([Role::Donor]))
        .route(
            RESPOND_TO_REQUESTS,
            RouteRequirement::restricted([Role::Admin, Role::Donor]),
        )
        .route(
            RESPOND_PAGE,
            RouteRequirement::restricted([Role::Admin, Role::Donor]),
        )
        // Requests and matches.
        .route(
            CREATE_REQUEST,
            RouteRequirement::restricted([
                Role::Admin,
                Role::Donor,
                Role::Recipient,
            ]),
        )
        .route(CREATE_MATCH, RouteRequirement::restricted([Role::Admin]))
        .route(AUTO_MATCH, RouteRequirement::restricted([Role::Admin]))
        .route(MATCHES_PAGE, RouteRequirement::authenticated())
        .route(REQUEST_PAGE, RouteRequirement::authenticated())
        .route(SHIPPING_VIEW, RouteRequirement::authenticated())
        // Routing knowledge beyond plain requirements.
        .login_route(LOGIN)
        .public_only([LOGIN, REGISTER, RESET_PASSWORD])
        .admin_landing(ADMIN)
        .donor_landing(DONOR)
        .recipient_landing(REQUEST_PAGE)
        .build()
        .expect("donation route inventory is internally consistent")
}

// =========================================================================
// Tests
// =========================================================================
