//! Router and handlers for the catalog API.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, info};
use uuid::Uuid;
use vitrine_core::{App, AppStatus, Category, DateRange, FilterSpec, FilterSpecBuilder, SortKey, Tag, Tool};
use vitrine_error::{
    CatalogError, CatalogErrorKind, ServerError, ServerErrorKind, VitrineError, VitrineErrorKind,
    VitrineResult,
};
use vitrine_interface::{AppCatalog, AppChanges, NewApp};

/// API state carrying the catalog backend.
#[derive(Clone)]
pub struct ApiState {
    catalog: Arc<dyn AppCatalog>,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(catalog: Arc<dyn AppCatalog>) -> Self {
        Self { catalog }
    }
}

/// Creates the catalog API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/apps", get(list_apps).post(create_app))
        .route("/api/moderation/apps", get(moderate_apps))
        .route("/api/apps/:id", get(get_app).patch(update_app))
        .route("/api/apps/:id/launch", post(record_launch))
        .route("/api/categories", get(list_categories))
        .route("/api/tools", get(list_tools))
        .route("/api/tags", get(list_tags))
        .with_state(state)
}

/// Bind the listen address and serve the router until shutdown.
pub async fn serve(bind_addr: &str, router: Router) -> VitrineResult<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(e.to_string())))?;
    info!(addr = %bind_addr, "Listening");
    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;
    Ok(())
}

/// Catalog error mapped onto an HTTP response.
struct ApiError(VitrineError);

impl From<VitrineError> for ApiError {
    fn from(err: VitrineError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.kind() {
            VitrineErrorKind::Catalog(err) => match &err.kind {
                CatalogErrorKind::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
                CatalogErrorKind::Unauthorized => {
                    (StatusCode::UNAUTHORIZED, "identity required".to_string())
                }
                CatalogErrorKind::Validation(message) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
                }
            },
            _ => {
                error!(error = %self.0, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Query parameters recognized by the listing endpoints.
///
/// Unknown sort and range values fall back to their defaults rather than
/// failing the request; unparseable tool ids are dropped. The `status`
/// parameter is honored only on the moderation route, since an exact status
/// match serves non-published listings verbatim.
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    search: Option<String>,
    /// Comma-separated tool ids.
    tools: Option<String>,
    category: Option<Uuid>,
    status: Option<String>,
    range: Option<String>,
    sort: Option<String>,
}

impl ListQuery {
    fn into_filter_spec(self, honor_status: bool) -> FilterSpec {
        let mut builder = FilterSpecBuilder::default();
        if let Some(search) = self.search {
            builder.search(search);
        }
        if let Some(tools) = self.tools {
            let tool_ids: Vec<Uuid> = tools
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| match Uuid::from_str(s) {
                    Ok(id) => Some(id),
                    Err(_) => {
                        debug!(value = s, "Dropping unparseable tool id");
                        None
                    }
                })
                .collect();
            builder.tool_ids(tool_ids);
        }
        if let Some(category) = self.category {
            builder.category_id(category);
        }
        if let Some(status) = self.status {
            if honor_status {
                match AppStatus::from_str(&status) {
                    Ok(status) => {
                        builder.status(status);
                    }
                    Err(_) => debug!(value = %status, "Ignoring unrecognized status filter"),
                }
            } else {
                debug!(value = %status, "Dropping status filter on the public listing route");
            }
        }
        if let Some(range) = self.range {
            builder.date_range(DateRange::parse_lenient(&range));
        }
        if let Some(sort) = self.sort {
            builder.sort_by(SortKey::parse_lenient(&sort));
        }
        // All fields default; the builder cannot fail.
        builder.build().unwrap_or_default()
    }
}

/// Requester identity from the X-User-Id header, if present and well-formed.
fn requester_from(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get("x-user-id")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::from_str(value).ok())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn list_apps(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<App>>, ApiError> {
    let requester = requester_from(&headers);
    let filter = params.into_filter_spec(false);
    let apps = state.catalog.list_apps(&filter, requester).await?;
    Ok(Json(apps))
}

/// Moderation listing: honors the explicit status filter, so non-published
/// listings come back verbatim. Requires a requester identity; the session
/// layer in front of this service restricts who reaches the route.
async fn moderate_apps(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<App>>, ApiError> {
    let requester = requester_from(&headers)
        .ok_or_else(|| VitrineError::from(CatalogError::new(CatalogErrorKind::Unauthorized)))?;
    let filter = params.into_filter_spec(true);
    let apps = state.catalog.list_apps(&filter, Some(requester)).await?;
    Ok(Json(apps))
}

async fn get_app(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<App>, ApiError> {
    let requester = requester_from(&headers);
    let app = state.catalog.get_app(id, requester).await?;
    Ok(Json(app))
}

async fn create_app(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(new): Json<NewApp>,
) -> Result<(StatusCode, Json<App>), ApiError> {
    let creator = requester_from(&headers)
        .ok_or_else(|| VitrineError::from(CatalogError::new(CatalogErrorKind::Unauthorized)))?;
    let app = state.catalog.create_app(new, creator).await?;
    Ok((StatusCode::CREATED, Json(app)))
}

async fn update_app(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Json(changes): Json<AppChanges>,
) -> Result<Json<App>, ApiError> {
    let requester = requester_from(&headers)
        .ok_or_else(|| VitrineError::from(CatalogError::new(CatalogErrorKind::Unauthorized)))?;
    let app = state.catalog.update_app(id, changes, requester).await?;
    Ok(Json(app))
}

async fn record_launch(
    State(state): State<ApiState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.catalog.record_launch(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_categories(State(state): State<ApiState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.catalog.list_categories().await?))
}

async fn list_tools(State(state): State<ApiState>) -> Result<Json<Vec<Tool>>, ApiError> {
    Ok(Json(state.catalog.list_tools().await?))
}

async fn list_tags(State(state): State<ApiState>) -> Result<Json<Vec<Tag>>, ApiError> {
    Ok(Json(state.catalog.list_tags().await?))
}
