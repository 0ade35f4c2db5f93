//! Diesel models for the catalog tables.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

/// Database row for the apps table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::apps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AppRow {
    pub id: Uuid,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub launch_url: String,
    pub screenshot_url: Option<String>,
    pub key_learnings: Option<String>,
    pub status: String,
    pub category_id: Uuid,
    pub creator_id: Option<Uuid>,
    pub view_count: i32,
    pub average_rating: f64,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub rejection_reason: Option<String>,
}

/// Insertable struct for the apps table.
///
/// The counter and aggregate columns take their database defaults (zero);
/// they belong to the launch and review collaborators, not the writer of a
/// new draft.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::apps)]
pub struct NewAppRow {
    pub id: Uuid,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub launch_url: String,
    pub screenshot_url: Option<String>,
    pub key_learnings: Option<String>,
    pub status: String,
    pub category_id: Uuid,
    pub creator_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset for a creator edit. None fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = crate::schema::apps)]
pub struct AppChangesRow {
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub launch_url: Option<String>,
    pub screenshot_url: Option<String>,
    pub key_learnings: Option<String>,
    pub category_id: Option<Uuid>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Database row for the app_tools join table.
#[derive(Debug, Clone, Queryable, Identifiable, Insertable, Associations)]
#[diesel(belongs_to(AppRow, foreign_key = app_id))]
#[diesel(table_name = crate::schema::app_tools, primary_key(app_id, tool_id))]
pub struct AppToolRow {
    pub app_id: Uuid,
    pub tool_id: Uuid,
}

/// Database row for the app_tags join table.
#[derive(Debug, Clone, Queryable, Identifiable, Insertable, Associations)]
#[diesel(belongs_to(AppRow, foreign_key = app_id))]
#[diesel(table_name = crate::schema::app_tags, primary_key(app_id, tag_id))]
pub struct AppTagRow {
    pub app_id: Uuid,
    pub tag_id: Uuid,
}

/// Database row for the categories table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryRow {
    pub id: Uuid,
    pub name: String,
}

/// Database row for the tools table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::tools)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ToolRow {
    pub id: Uuid,
    pub name: String,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
}

/// Database row for the tags table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TagRow {
    pub id: Uuid,
    pub name: String,
}
