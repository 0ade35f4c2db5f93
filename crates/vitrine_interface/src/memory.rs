//! In-memory catalog backend.
//!
//! Holds the whole catalog behind one `RwLock` and answers queries through
//! the pure engine in `vitrine_core`. Used by the unit and server test
//! suites; also handy for demos without a database.

use crate::{AppCatalog, AppChanges, NewApp};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;
use vitrine_core::{App, AppStatus, Category, FilterSpec, Tag, Tool, can_view_detail, select_apps};
use vitrine_error::{CatalogError, CatalogErrorKind, VitrineResult};

#[derive(Debug, Default)]
struct MemoryState {
    apps: Vec<App>,
    categories: Vec<Category>,
    tools: Vec<Tool>,
    tags: Vec<Tag>,
}

/// In-memory implementation of [`AppCatalog`].
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    state: RwLock<MemoryState>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a category and return it.
    pub async fn add_category(&self, name: impl Into<String>) -> Category {
        let category = Category::new(Uuid::new_v4(), name.into());
        self.state.write().await.categories.push(category.clone());
        category
    }

    /// Insert a tool and return it.
    pub async fn add_tool(&self, name: impl Into<String>) -> Tool {
        let tool = Tool::new(Uuid::new_v4(), name.into(), None, None);
        self.state.write().await.tools.push(tool.clone());
        tool
    }

    /// Insert a tag and return it.
    pub async fn add_tag(&self, name: impl Into<String>) -> Tag {
        let tag = Tag::new(Uuid::new_v4(), name.into());
        self.state.write().await.tags.push(tag.clone());
        tag
    }

    /// Insert a fully-formed listing as-is, bypassing the draft rule.
    ///
    /// Seeding door for tests and demos: the collaborators that would
    /// normally publish a listing or maintain its rating aggregates are
    /// outside this crate.
    pub async fn insert_app(&self, app: App) {
        self.state.write().await.apps.push(app);
    }
}

#[async_trait]
impl AppCatalog for MemoryCatalog {
    #[instrument(skip(self, filter), fields(sort = %filter.sort_by()))]
    async fn list_apps(
        &self,
        filter: &FilterSpec,
        requester: Option<Uuid>,
    ) -> VitrineResult<Vec<App>> {
        let state = self.state.read().await;
        let result = select_apps(state.apps.iter().cloned(), filter, requester, Utc::now());
        debug!(count = result.len(), "Listed apps");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn get_app(&self, id: Uuid, requester: Option<Uuid>) -> VitrineResult<App> {
        let state = self.state.read().await;
        let app = state
            .apps
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(CatalogError::not_found)?;
        if !can_view_detail(app.status, app.creator_id, requester) {
            return Err(CatalogError::not_found().into());
        }
        Ok(app.clone())
    }

    #[instrument(skip(self, new), fields(name = %new.name))]
    async fn create_app(&self, new: NewApp, creator: Uuid) -> VitrineResult<App> {
        let mut state = self.state.write().await;
        if !state.categories.iter().any(|c| c.id == new.category_id) {
            return Err(CatalogError::new(CatalogErrorKind::Validation(format!(
                "unknown category {}",
                new.category_id
            )))
            .into());
        }
        let now = Utc::now();
        let app = App {
            id: Uuid::new_v4(),
            name: new.name,
            short_description: new.short_description,
            description: new.description,
            launch_url: new.launch_url,
            screenshot_url: new.screenshot_url,
            key_learnings: new.key_learnings,
            status: AppStatus::Draft,
            category_id: new.category_id,
            creator_id: Some(creator),
            view_count: 0,
            average_rating: 0.0,
            rating_count: 0,
            created_at: now,
            updated_at: now,
            rejection_reason: None,
            tool_ids: new.tool_ids,
            tag_ids: new.tag_ids,
        };
        state.apps.push(app.clone());
        Ok(app)
    }

    #[instrument(skip(self, changes))]
    async fn update_app(
        &self,
        id: Uuid,
        changes: AppChanges,
        requester: Uuid,
    ) -> VitrineResult<App> {
        let mut state = self.state.write().await;
        let app = state
            .apps
            .iter_mut()
            .find(|a| a.id == id && a.creator_id == Some(requester))
            .ok_or_else(CatalogError::not_found)?;

        if let Some(name) = changes.name {
            app.name = name;
        }
        if let Some(short) = changes.short_description {
            app.short_description = short;
        }
        if let Some(description) = changes.description {
            app.description = description;
        }
        if let Some(url) = changes.launch_url {
            app.launch_url = url;
        }
        if let Some(url) = changes.screenshot_url {
            app.screenshot_url = Some(url);
        }
        if let Some(learnings) = changes.key_learnings {
            app.key_learnings = Some(learnings);
        }
        if let Some(category_id) = changes.category_id {
            app.category_id = category_id;
        }
        if let Some(tool_ids) = changes.tool_ids {
            app.tool_ids = tool_ids;
        }
        if let Some(tag_ids) = changes.tag_ids {
            app.tag_ids = tag_ids;
        }
        app.updated_at = Utc::now();
        Ok(app.clone())
    }

    #[instrument(skip(self))]
    async fn record_launch(&self, id: Uuid) -> VitrineResult<()> {
        let mut state = self.state.write().await;
        let app = state
            .apps
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(CatalogError::not_found)?;
        app.view_count += 1;
        Ok(())
    }

    async fn list_categories(&self) -> VitrineResult<Vec<Category>> {
        let mut categories = self.state.read().await.categories.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn list_tools(&self) -> VitrineResult<Vec<Tool>> {
        let mut tools = self.state.read().await.tools.clone();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tools)
    }

    async fn list_tags(&self) -> VitrineResult<Vec<Tag>> {
        let mut tags = self.state.read().await.tags.clone();
        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }
}
