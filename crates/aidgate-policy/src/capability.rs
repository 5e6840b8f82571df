//! Capabilities: named permissions decoupled from route names.
//!
//! A capability answers "may this role do X?" independently of navigation.
//! UI components read these (through the session store) to decide what to
//! render — an edit button, a create form — while the route table decides
//! what to *reach*. Keeping the two separate means a role can view a page
//! without being offered actions it cannot perform on it.

use aidgate_identity::Role;

/// A named boolean permission derived from role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Modify existing records through admin views.
    Edit,

    /// See admin views at all.
    View,

    /// Create donation requests.
    CreateRequests,

    /// Create, update, and close events.
    ManageEvents,

    /// Maintain the donation item catalog.
    ManageItems,

    /// Match a pledge to a request by hand.
    CreateMatches,

    /// Create and update pledges.
    UpdatePledges,
}

/// The grant matrix: the single authority on role × capability.
///
/// One exhaustive match per capability — adding a `Capability` variant
/// without deciding it for every role is a compile error, which is the
/// point. The observer role is read-only by design: it satisfies `View`
/// and nothing else. (Earlier revisions disagreed on whether observers
/// could create requests or pledges; the most restrictive reading won and
/// is encoded here.)
///
/// | capability     | Admin | AdminObserver | Donor | Recipient |
/// |----------------|-------|---------------|-------|-----------|
/// | Edit           |  yes  |      no       |  no   |    no     |
/// | View           |  yes  |     yes       |  no   |    no     |
/// | CreateRequests |  yes  |      no       |  yes  |   yes     |
/// | ManageEvents   |  yes  |      no       |  no   |    no     |
/// | ManageItems    |  yes  |      no       |  no   |    no     |
/// | CreateMatches  |  yes  |      no       |  no   |    no     |
/// | UpdatePledges  |  yes  |      no       |  yes  |    no     |
pub fn grants(role: Role, capability: Capability) -> bool {
    match capability {
        Capability::Edit
        | Capability::ManageEvents
        | Capability::ManageItems
        | Capability::CreateMatches => matches!(role, Role::Admin),

        Capability::View => {
            matches!(role, Role::Admin | Role::AdminObserver)
        }

        Capability::CreateRequests => {
            matches!(role, Role::Admin | Role::Donor | Role::Recipient)
        }

        Capability::UpdatePledges => {
            matches!(role, Role::Admin | Role::Donor)
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
