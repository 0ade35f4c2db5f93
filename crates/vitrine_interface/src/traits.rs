//! The catalog trait every storage backend implements.

use crate::{AppChanges, NewApp};
use async_trait::async_trait;
use uuid::Uuid;
use vitrine_core::{App, Category, FilterSpec, Tag, Tool};
use vitrine_error::VitrineResult;

/// Read and write operations over the marketplace catalog.
///
/// Listing reads enforce the visibility rule (drafts only for their
/// creator, everything else only when published, explicit status overrides
/// for moderation callers) before any other filter. A record hidden by that
/// rule is reported as not-found, indistinguishable from a missing row.
#[async_trait]
pub trait AppCatalog: Send + Sync {
    /// List listings matching the filter spec, ordered per its sort key.
    ///
    /// An empty result is `Ok(vec![])`, never an error. Pagination, if
    /// needed, is the caller's business. Pure read: no counters move.
    async fn list_apps(
        &self,
        filter: &FilterSpec,
        requester: Option<Uuid>,
    ) -> VitrineResult<Vec<App>>;

    /// Fetch a single listing, applying the detail-page visibility rule.
    async fn get_app(&self, id: Uuid, requester: Option<Uuid>) -> VitrineResult<App>;

    /// Submit a new listing as a draft owned by `creator`.
    async fn create_app(&self, new: NewApp, creator: Uuid) -> VitrineResult<App>;

    /// Creator-only edit. A non-creator requester gets not-found.
    async fn update_app(
        &self,
        id: Uuid,
        changes: AppChanges,
        requester: Uuid,
    ) -> VitrineResult<App>;

    /// Count one launch/open of the app. The only sanctioned mutation of
    /// `view_count`, kept off the listing path.
    async fn record_launch(&self, id: Uuid) -> VitrineResult<()>;

    /// All categories, ordered by name.
    async fn list_categories(&self) -> VitrineResult<Vec<Category>>;

    /// All tools, ordered by name.
    async fn list_tools(&self) -> VitrineResult<Vec<Tool>>;

    /// All tags, ordered by name.
    async fn list_tags(&self) -> VitrineResult<Vec<Tag>>;
}
