//! The visibility rule: which listings a given requester may see.

use crate::AppStatus;
use uuid::Uuid;

/// Resolved visibility policy for one listing query.
///
/// The scope is computed once, before any other filter, and consumed by
/// every catalog backend, so the rule cannot drift between the SQL and
/// in-memory query paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityScope {
    /// An explicit status filter from a privileged caller. Selects exactly
    /// that status with no creator restriction.
    Exact(AppStatus),
    /// Published listings plus the requester's own drafts.
    PublishedOrOwnDrafts(Uuid),
    /// Published listings only (anonymous requester).
    PublishedOnly,
}

impl VisibilityScope {
    /// Resolve the scope from an explicit status override and the requester
    /// identity. The override, when present, wins outright.
    pub fn resolve(explicit: Option<AppStatus>, requester: Option<Uuid>) -> Self {
        match (explicit, requester) {
            (Some(status), _) => VisibilityScope::Exact(status),
            (None, Some(user)) => VisibilityScope::PublishedOrOwnDrafts(user),
            (None, None) => VisibilityScope::PublishedOnly,
        }
    }

    /// Whether a listing with the given status and creator falls inside
    /// this scope.
    pub fn allows(&self, status: AppStatus, creator_id: Option<Uuid>) -> bool {
        match self {
            VisibilityScope::Exact(wanted) => status == *wanted,
            VisibilityScope::PublishedOrOwnDrafts(user) => {
                status == AppStatus::Published
                    || (status == AppStatus::Draft && creator_id == Some(*user))
            }
            VisibilityScope::PublishedOnly => status == AppStatus::Published,
        }
    }
}

/// Single-record visibility for detail pages.
///
/// A creator may open their own listing in any lifecycle state (they need
/// to see pending and rejected submissions, including the rejection
/// reason); everyone else only sees `Published`. A hidden record must be
/// reported as not-found so private drafts do not leak their existence.
pub fn can_view_detail(
    status: AppStatus,
    creator_id: Option<Uuid>,
    requester: Option<Uuid>,
) -> bool {
    status == AppStatus::Published || (requester.is_some() && creator_id == requester)
}
