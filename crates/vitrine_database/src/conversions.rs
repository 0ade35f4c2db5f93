//! Conversions between database rows and domain types.

use crate::models::{AppRow, CategoryRow, NewAppRow, TagRow, ToolRow};
use chrono::Utc;
use std::str::FromStr;
use uuid::Uuid;
use vitrine_core::{App, AppStatus, Category, Tag, Tool};
use vitrine_error::{DatabaseError, DatabaseErrorKind};
use vitrine_interface::NewApp;

/// Lifecycle status as stored in the status column.
pub fn status_to_string(status: AppStatus) -> String {
    status.to_string()
}

/// Parse a stored status string, rejecting values outside the lifecycle.
pub fn string_to_status(value: &str) -> Result<AppStatus, DatabaseError> {
    AppStatus::from_str(value).map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Query(format!(
            "unknown app status '{value}'"
        )))
    })
}

/// Assemble a domain listing from its row and association ids.
pub fn row_to_app(
    row: AppRow,
    tool_ids: Vec<Uuid>,
    tag_ids: Vec<Uuid>,
) -> Result<App, DatabaseError> {
    Ok(App {
        id: row.id,
        name: row.name,
        short_description: row.short_description,
        description: row.description,
        launch_url: row.launch_url,
        screenshot_url: row.screenshot_url,
        key_learnings: row.key_learnings,
        status: string_to_status(&row.status)?,
        category_id: row.category_id,
        creator_id: row.creator_id,
        view_count: row.view_count,
        average_rating: row.average_rating,
        rating_count: row.rating_count,
        created_at: row.created_at,
        updated_at: row.updated_at,
        rejection_reason: row.rejection_reason,
        tool_ids,
        tag_ids,
    })
}

/// Build the insertable row for a freshly submitted draft.
pub fn new_app_to_row(new: &NewApp, creator: Uuid) -> NewAppRow {
    let now = Utc::now();
    NewAppRow {
        id: Uuid::new_v4(),
        name: new.name.clone(),
        short_description: new.short_description.clone(),
        description: new.description.clone(),
        launch_url: new.launch_url.clone(),
        screenshot_url: new.screenshot_url.clone(),
        key_learnings: new.key_learnings.clone(),
        status: status_to_string(AppStatus::Draft),
        category_id: new.category_id,
        creator_id: Some(creator),
        created_at: now,
        updated_at: now,
    }
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category::new(row.id, row.name)
    }
}

impl From<ToolRow> for Tool {
    fn from(row: ToolRow) -> Self {
        Tool::new(row.id, row.name, row.website_url, row.logo_url)
    }
}

impl From<TagRow> for Tag {
    fn from(row: TagRow) -> Self {
        Tag::new(row.id, row.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage() {
        for status in [
            AppStatus::Draft,
            AppStatus::PendingApproval,
            AppStatus::Published,
            AppStatus::Rejected,
        ] {
            assert_eq!(string_to_status(&status_to_string(status)).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_a_query_error() {
        let err = string_to_status("limbo").unwrap_err();
        assert!(matches!(err.kind, DatabaseErrorKind::Query(_)));
    }
}
