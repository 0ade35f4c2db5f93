//! Pure in-memory implementation of the listing query engine.
//!
//! This module is the single source of truth for the query semantics: the
//! visibility rule is evaluated first, the optional predicates fold with
//! logical AND, and exactly one sort strategy orders the survivors. The
//! PostgreSQL backend compiles the same [`FilterSpec`] to SQL and must
//! agree with this implementation on every input.

use crate::{App, FilterSpec, SortKey, VisibilityScope, trending_score};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Select and order listings per the filter spec and requester identity.
///
/// Returns the matching listings in the requested order; an empty result is
/// an empty vector, never an error. Purely functional: nothing is mutated.
pub fn select_apps(
    apps: impl IntoIterator<Item = App>,
    filter: &FilterSpec,
    requester: Option<Uuid>,
    now: DateTime<Utc>,
) -> Vec<App> {
    let scope = VisibilityScope::resolve(*filter.status(), requester);
    let cutoff = filter.date_range().cutoff(now);
    let needle = filter.search().as_ref().map(|s| s.to_lowercase());

    let mut matched: Vec<App> = apps
        .into_iter()
        .filter(|app| scope.allows(app.status, app.creator_id))
        .filter(|app| needle.as_deref().is_none_or(|n| matches_search(app, n)))
        .filter(|app| {
            filter.tool_ids().is_empty()
                || app.tool_ids.iter().any(|t| filter.tool_ids().contains(t))
        })
        .filter(|app| filter.category_id().is_none_or(|c| app.category_id == c))
        .filter(|app| cutoff.is_none_or(|c| app.created_at >= c))
        .collect();

    // Stable sort: equal keys keep their incoming order.
    match filter.sort_by() {
        SortKey::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Popular => matched.sort_by(|a, b| b.view_count.cmp(&a.view_count)),
        SortKey::Rating => matched.sort_by(|a, b| {
            b.average_rating
                .total_cmp(&a.average_rating)
                .then(b.rating_count.cmp(&a.rating_count))
        }),
        SortKey::Trending => matched.sort_by(|a, b| {
            trending_score(b.view_count, b.average_rating, b.rating_count).total_cmp(
                &trending_score(a.view_count, a.average_rating, a.rating_count),
            )
        }),
    }

    matched
}

/// Case-insensitive substring match over name, short description, and full
/// description. `needle` must already be lowercased.
fn matches_search(app: &App, needle: &str) -> bool {
    app.name.to_lowercase().contains(needle)
        || app.short_description.to_lowercase().contains(needle)
        || app.description.to_lowercase().contains(needle)
}
