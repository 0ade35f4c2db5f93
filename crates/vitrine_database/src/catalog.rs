//! PostgreSQL implementation of the AppCatalog trait.
//!
//! Compiles a [`FilterSpec`] into one boxed diesel query: the visibility
//! scope becomes the leading predicate, the optional filters fold in with
//! AND, and the sort key picks the ORDER BY. Semantics must agree with
//! `vitrine_core::select_apps` on every input.

use crate::conversions::{new_app_to_row, row_to_app, status_to_string, string_to_status};
use crate::models::{AppChangesRow, AppRow, AppTagRow, AppToolRow, CategoryRow, TagRow, ToolRow};
use crate::schema::{app_tags, app_tools, apps, categories, tags, tools};
use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::sql;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind as DieselDbErrorKind, Error as DieselError};
use diesel::sql_types::Double;
use tracing::{debug, instrument};
use uuid::Uuid;
use vitrine_core::{
    App, AppStatus, Category, FilterSpec, SortKey, Tag, Tool, VisibilityScope, can_view_detail,
};
use vitrine_error::{CatalogError, CatalogErrorKind, DatabaseError, DatabaseErrorKind, VitrineError, VitrineResult};
use vitrine_interface::{AppCatalog, AppChanges, NewApp};

/// Trending expression, computed at query time from the denormalized
/// aggregate columns. Known approximation: no time decay.
const TRENDING_SQL: &str = "view_count + average_rating * rating_count";

/// Database-backed catalog over an r2d2 connection pool.
///
/// Blocking diesel work runs on the tokio blocking pool; each call checks
/// out one connection for its duration. Reads take no locks and rely on the
/// store's read-committed snapshots.
#[derive(Clone)]
pub struct PostgresCatalog {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl PostgresCatalog {
    /// Create a new catalog over the given connection pool.
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    /// Run a blocking database closure on the tokio blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> VitrineResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> VitrineResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(DatabaseError::from)?;
            f(&mut conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
    }
}

/// Escape LIKE metacharacters so a search term matches literally, the same
/// way the in-memory engine treats it.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Compile the filter spec to SQL and load the matching rows in order.
fn query_apps(
    conn: &mut PgConnection,
    filter: &FilterSpec,
    requester: Option<Uuid>,
) -> VitrineResult<Vec<App>> {
    let scope = VisibilityScope::resolve(*filter.status(), requester);
    let mut query = apps::table.into_boxed();

    // Visibility first, before any user-supplied filter.
    query = match scope {
        VisibilityScope::Exact(status) => query.filter(apps::status.eq(status_to_string(status))),
        VisibilityScope::PublishedOrOwnDrafts(user) => query.filter(
            apps::status
                .eq(status_to_string(AppStatus::Published))
                .or(apps::status
                    .eq(status_to_string(AppStatus::Draft))
                    .and(apps::creator_id.eq(user))),
        ),
        VisibilityScope::PublishedOnly => {
            query.filter(apps::status.eq(status_to_string(AppStatus::Published)))
        }
    };

    if let Some(search) = filter.search() {
        let pattern = format!("%{}%", escape_like(search));
        query = query.filter(
            apps::name
                .ilike(pattern.clone())
                .escape('\\')
                .or(apps::short_description.ilike(pattern.clone()).escape('\\'))
                .or(apps::description.ilike(pattern).escape('\\')),
        );
    }

    if !filter.tool_ids().is_empty() {
        // Membership in any one of the given tools suffices.
        let tagged = app_tools::table
            .filter(app_tools::tool_id.eq_any(filter.tool_ids().clone()))
            .select(app_tools::app_id);
        query = query.filter(apps::id.eq_any(tagged));
    }

    if let Some(category) = filter.category_id() {
        query = query.filter(apps::category_id.eq(*category));
    }

    if let Some(cutoff) = filter.date_range().cutoff(Utc::now()) {
        query = query.filter(apps::created_at.ge(cutoff));
    }

    query = match filter.sort_by() {
        SortKey::Newest => query.order(apps::created_at.desc()),
        SortKey::Oldest => query.order(apps::created_at.asc()),
        SortKey::Popular => query.order(apps::view_count.desc()),
        SortKey::Rating => query.order((apps::average_rating.desc(), apps::rating_count.desc())),
        SortKey::Trending => query.order(sql::<Double>(TRENDING_SQL).desc()),
    };

    let rows: Vec<AppRow> = query.load(conn).map_err(DatabaseError::from)?;
    attach_associations(conn, rows)
}

/// Load the tool and tag association ids for a batch of rows, preserving
/// the batch order.
fn attach_associations(conn: &mut PgConnection, rows: Vec<AppRow>) -> VitrineResult<Vec<App>> {
    let tool_rows: Vec<AppToolRow> = AppToolRow::belonging_to(&rows)
        .load(conn)
        .map_err(DatabaseError::from)?;
    let tag_rows: Vec<AppTagRow> = AppTagRow::belonging_to(&rows)
        .load(conn)
        .map_err(DatabaseError::from)?;
    let tools_by_app = tool_rows.grouped_by(&rows);
    let tags_by_app = tag_rows.grouped_by(&rows);

    rows.into_iter()
        .zip(tools_by_app)
        .zip(tags_by_app)
        .map(|((row, app_tools), app_tags)| {
            row_to_app(
                row,
                app_tools.into_iter().map(|r| r.tool_id).collect(),
                app_tags.into_iter().map(|r| r.tag_id).collect(),
            )
            .map_err(Into::into)
        })
        .collect()
}

/// Map a write-path diesel error onto the domain taxonomy. A foreign key
/// violation means the request referenced a nonexistent category, tool, or
/// tag.
fn map_write_error(err: DieselError) -> VitrineError {
    match err {
        DieselError::DatabaseError(DieselDbErrorKind::ForeignKeyViolation, info) => {
            CatalogError::new(CatalogErrorKind::Validation(info.message().to_string())).into()
        }
        other => DatabaseError::from(other).into(),
    }
}

#[async_trait]
impl AppCatalog for PostgresCatalog {
    #[instrument(skip(self, filter), fields(sort = %filter.sort_by(), range = %filter.date_range()))]
    async fn list_apps(
        &self,
        filter: &FilterSpec,
        requester: Option<Uuid>,
    ) -> VitrineResult<Vec<App>> {
        let filter = filter.clone();
        let result = self
            .with_conn(move |conn| query_apps(conn, &filter, requester))
            .await?;
        debug!(count = result.len(), "Listed apps");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn get_app(&self, id: Uuid, requester: Option<Uuid>) -> VitrineResult<App> {
        self.with_conn(move |conn| {
            let row: Option<AppRow> = apps::table
                .find(id)
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?;
            let row = row.ok_or_else(CatalogError::not_found)?;
            let status = string_to_status(&row.status)?;
            if !can_view_detail(status, row.creator_id, requester) {
                // Hidden and missing must be indistinguishable.
                return Err(CatalogError::not_found().into());
            }
            attach_associations(conn, vec![row])?
                .pop()
                .ok_or_else(|| CatalogError::not_found().into())
        })
        .await
    }

    #[instrument(skip(self, new), fields(name = %new.name))]
    async fn create_app(&self, new: NewApp, creator: Uuid) -> VitrineResult<App> {
        self.with_conn(move |conn| {
            let new_row = new_app_to_row(&new, creator);
            let app_id = new_row.id;
            let tool_values: Vec<AppToolRow> = new
                .tool_ids
                .iter()
                .map(|tool_id| AppToolRow { app_id, tool_id: *tool_id })
                .collect();
            let tag_values: Vec<AppTagRow> = new
                .tag_ids
                .iter()
                .map(|tag_id| AppTagRow { app_id, tag_id: *tag_id })
                .collect();

            let row = conn
                .transaction::<AppRow, DieselError, _>(|conn| {
                    let row: AppRow = diesel::insert_into(apps::table)
                        .values(&new_row)
                        .get_result(conn)?;
                    if !tool_values.is_empty() {
                        diesel::insert_into(app_tools::table)
                            .values(&tool_values)
                            .execute(conn)?;
                    }
                    if !tag_values.is_empty() {
                        diesel::insert_into(app_tags::table)
                            .values(&tag_values)
                            .execute(conn)?;
                    }
                    Ok(row)
                })
                .map_err(map_write_error)?;

            debug!(app_id = %row.id, "Created draft listing");
            row_to_app(row, new.tool_ids, new.tag_ids).map_err(Into::into)
        })
        .await
    }

    #[instrument(skip(self, changes))]
    async fn update_app(
        &self,
        id: Uuid,
        changes: AppChanges,
        requester: Uuid,
    ) -> VitrineResult<App> {
        self.with_conn(move |conn| {
            let changeset = AppChangesRow {
                name: changes.name.clone(),
                short_description: changes.short_description.clone(),
                description: changes.description.clone(),
                launch_url: changes.launch_url.clone(),
                screenshot_url: changes.screenshot_url.clone(),
                key_learnings: changes.key_learnings.clone(),
                category_id: changes.category_id,
                updated_at: Some(Utc::now()),
            };

            let row = conn
                .transaction::<AppRow, DieselError, _>(|conn| {
                    // Creator-only: anyone else sees not-found.
                    let owned: Option<AppRow> = apps::table
                        .filter(apps::id.eq(id))
                        .filter(apps::creator_id.eq(requester))
                        .first(conn)
                        .optional()?;
                    if owned.is_none() {
                        return Err(DieselError::NotFound);
                    }

                    let row: AppRow = diesel::update(apps::table.find(id))
                        .set(&changeset)
                        .get_result(conn)?;

                    if let Some(tool_ids) = &changes.tool_ids {
                        diesel::delete(app_tools::table.filter(app_tools::app_id.eq(id)))
                            .execute(conn)?;
                        let values: Vec<AppToolRow> = tool_ids
                            .iter()
                            .map(|tool_id| AppToolRow { app_id: id, tool_id: *tool_id })
                            .collect();
                        if !values.is_empty() {
                            diesel::insert_into(app_tools::table)
                                .values(&values)
                                .execute(conn)?;
                        }
                    }
                    if let Some(tag_ids) = &changes.tag_ids {
                        diesel::delete(app_tags::table.filter(app_tags::app_id.eq(id)))
                            .execute(conn)?;
                        let values: Vec<AppTagRow> = tag_ids
                            .iter()
                            .map(|tag_id| AppTagRow { app_id: id, tag_id: *tag_id })
                            .collect();
                        if !values.is_empty() {
                            diesel::insert_into(app_tags::table)
                                .values(&values)
                                .execute(conn)?;
                        }
                    }
                    Ok(row)
                })
                .map_err(|e| match e {
                    DieselError::NotFound => CatalogError::not_found().into(),
                    other => map_write_error(other),
                })?;

            attach_associations(conn, vec![row])?
                .pop()
                .ok_or_else(|| CatalogError::not_found().into())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn record_launch(&self, id: Uuid) -> VitrineResult<()> {
        self.with_conn(move |conn| {
            let updated = diesel::update(apps::table.find(id))
                .set(apps::view_count.eq(apps::view_count + 1))
                .execute(conn)
                .map_err(DatabaseError::from)?;
            if updated == 0 {
                return Err(CatalogError::not_found().into());
            }
            Ok(())
        })
        .await
    }

    async fn list_categories(&self) -> VitrineResult<Vec<Category>> {
        self.with_conn(|conn| {
            let rows: Vec<CategoryRow> = categories::table
                .order(categories::name.asc())
                .load(conn)
                .map_err(DatabaseError::from)?;
            Ok(rows.into_iter().map(Category::from).collect())
        })
        .await
    }

    async fn list_tools(&self) -> VitrineResult<Vec<Tool>> {
        self.with_conn(|conn| {
            let rows: Vec<ToolRow> = tools::table
                .order(tools::name.asc())
                .load(conn)
                .map_err(DatabaseError::from)?;
            Ok(rows.into_iter().map(Tool::from).collect())
        })
        .await
    }

    async fn list_tags(&self) -> VitrineResult<Vec<Tag>> {
        self.with_conn(|conn| {
            let rows: Vec<TagRow> = tags::table
                .order(tags::name.asc())
                .load(conn)
                .map_err(DatabaseError::from)?;
            Ok(rows.into_iter().map(Tag::from).collect())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_terms_match_wildcards_literally() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_c"), "a\\_c");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain chess"), "plain chess");
    }
}
