//! The central listing entity.

use crate::AppStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One submitted application record shown in the marketplace.
///
/// `view_count`, `average_rating` and `rating_count` are denormalized
/// aggregates maintained by the review and launch collaborators; the query
/// engine reads them for ordering but never recomputes them. A slightly
/// stale value is acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// Opaque unique id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// One-line summary shown on listing cards.
    pub short_description: String,
    /// Full rich-text description.
    pub description: String,
    /// URL visitors use to open the app.
    pub launch_url: String,
    /// Optional screenshot URL.
    pub screenshot_url: Option<String>,
    /// Optional free-form notes about what building the app taught its author.
    pub key_learnings: Option<String>,
    /// Moderation lifecycle status.
    pub status: AppStatus,
    /// Category this listing belongs to.
    pub category_id: Uuid,
    /// Creator account, or None when the account was removed.
    pub creator_id: Option<Uuid>,
    /// Launch/open count.
    pub view_count: i32,
    /// Mean of the non-deleted review ratings.
    pub average_rating: f64,
    /// Number of non-deleted review ratings.
    pub rating_count: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modified timestamp.
    pub updated_at: DateTime<Utc>,
    /// Set when the status transitions to `Rejected`.
    pub rejection_reason: Option<String>,
    /// Tools the app was built with.
    pub tool_ids: Vec<Uuid>,
    /// Free-form tags.
    pub tag_ids: Vec<Uuid>,
}
