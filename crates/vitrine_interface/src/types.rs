//! Request types for catalog mutations.

use serde::Deserialize;
use uuid::Uuid;

/// Parameters for submitting a new listing.
///
/// The listing always lands in `Draft`; the moderation workflow moves it
/// onward from there.
#[derive(Debug, Clone, Deserialize)]
pub struct NewApp {
    /// Display name.
    pub name: String,
    /// One-line summary.
    pub short_description: String,
    /// Full rich-text description.
    pub description: String,
    /// URL visitors use to open the app.
    pub launch_url: String,
    /// Optional screenshot URL.
    pub screenshot_url: Option<String>,
    /// Optional notes about what building the app taught its author.
    pub key_learnings: Option<String>,
    /// Category the listing belongs to.
    pub category_id: Uuid,
    /// Tools the app was built with.
    #[serde(default)]
    pub tool_ids: Vec<Uuid>,
    /// Free-form tags.
    #[serde(default)]
    pub tag_ids: Vec<Uuid>,
}

/// Parameters for a creator-only edit of an existing listing.
///
/// Absent fields are left unchanged; `tool_ids`/`tag_ids`, when present,
/// replace the existing association sets.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppChanges {
    /// New display name.
    pub name: Option<String>,
    /// New one-line summary.
    pub short_description: Option<String>,
    /// New full description.
    pub description: Option<String>,
    /// New launch URL.
    pub launch_url: Option<String>,
    /// New screenshot URL.
    pub screenshot_url: Option<String>,
    /// New key learnings text.
    pub key_learnings: Option<String>,
    /// New category.
    pub category_id: Option<Uuid>,
    /// Replacement tool associations.
    pub tool_ids: Option<Vec<Uuid>>,
    /// Replacement tag associations.
    pub tag_ids: Option<Vec<Uuid>>,
}

impl AppChanges {
    /// Whether the edit changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.short_description.is_none()
            && self.description.is_none()
            && self.launch_url.is_none()
            && self.screenshot_url.is_none()
            && self.key_learnings.is_none()
            && self.category_id.is_none()
            && self.tool_ids.is_none()
            && self.tag_ids.is_none()
    }
}
