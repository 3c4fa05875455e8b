//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::domain::{Distance, FavoriteId, LineId, StationId};
use crate::path::find_shortest_path;

use super::auth::AuthMember;
use super::dto::*;
use super::error::AppError;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/stations", post(create_station).get(list_stations))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", post(create_line).get(list_lines))
        .route(
            "/lines/:id",
            get(find_line).put(update_line).delete(delete_line),
        )
        .route(
            "/lines/:id/sections",
            post(add_section).delete(remove_section),
        )
        .route("/paths", get(find_path))
        .route("/members", post(create_member))
        .route(
            "/members/me",
            get(find_me).put(update_me).delete(delete_me),
        )
        .route("/login/token", post(login))
        .route("/favorites", post(create_favorite).get(list_favorites))
        .route("/favorites/:id", delete(delete_favorite))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the route search form.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let stations = state.store.list_stations().await;
    let lines = state.store.list_lines().await;

    let template = IndexTemplate {
        stations: stations.iter().map(StationOption::from_station).collect(),
        lines: lines.iter().map(LineView::from_line).collect(),
    };
    Ok(Html(template.render()?))
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// A 201 response pointing at the new resource.
fn created<T: serde::Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

// ============================================================================
// Stations
// ============================================================================

async fn create_station(
    State(state): State<AppState>,
    Json(req): Json<StationRequest>,
) -> Result<Response, AppError> {
    let station = state.store.create_station(&req.name).await?;
    Ok(created(
        format!("/stations/{}", station.id()),
        StationResponse::from_station(&station),
    ))
}

async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let stations = state.store.list_stations().await;
    Json(stations.iter().map(StationResponse::from_station).collect())
}

async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.store.delete_station(StationId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Lines and sections
// ============================================================================

async fn create_line(
    State(state): State<AppState>,
    Json(req): Json<LineRequest>,
) -> Result<Response, AppError> {
    let distance = Distance::new(req.distance)?;
    let line = state
        .store
        .create_line(
            &req.name,
            &req.color,
            StationId(req.up_station_id),
            StationId(req.down_station_id),
            distance,
        )
        .await?;
    Ok(created(
        format!("/lines/{}", line.id()),
        LineResponse::from_line(&line),
    ))
}

async fn list_lines(State(state): State<AppState>) -> Json<Vec<LineResponse>> {
    let lines = state.store.list_lines().await;
    Json(lines.iter().map(LineResponse::from_line).collect())
}

async fn find_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state.store.find_line(LineId(id)).await?;
    Ok(Json(LineResponse::from_line(&line)))
}

async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<LineUpdateRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let line = state
        .store
        .update_line(LineId(id), &req.name, &req.color)
        .await?;
    Ok(Json(LineResponse::from_line(&line)))
}

async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.store.delete_line(LineId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<SectionRequest>,
) -> Result<Json<LineResponse>, AppError> {
    let distance = Distance::new(req.distance)?;
    let line = state
        .store
        .add_section(
            LineId(id),
            StationId(req.up_station_id),
            StationId(req.down_station_id),
            distance,
        )
        .await?;
    Ok(Json(LineResponse::from_line(&line)))
}

async fn remove_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(req): Query<RemoveStationQuery>,
) -> Result<StatusCode, AppError> {
    state
        .store
        .remove_station_from_line(LineId(id), StationId(req.station_id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Paths
// ============================================================================

/// Shortest path between two stations, over a snapshot of the current lines.
async fn find_path(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<PathRequest>,
) -> Result<Response, AppError> {
    debug!(
        source = req.source,
        target = req.target,
        age = req.age,
        "Path requested"
    );
    let lines = state.store.list_lines().await;
    let path = find_shortest_path(&lines, StationId(req.source), StationId(req.target))?;

    // Return HTML or JSON based on Accept header
    if accepts_html(&headers) {
        let template = PathResultTemplate {
            path: PathView::from_path(&path, &lines),
        };
        Ok(Html(template.render()?).into_response())
    } else {
        Ok(Json(PathResponse::from_path(&path)).into_response())
    }
}

// ============================================================================
// Members and sessions
// ============================================================================

async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<MemberRequest>,
) -> Result<Response, AppError> {
    let member = state
        .store
        .create_member(&req.email, &req.password, req.age)
        .await?;
    Ok(created(
        "/members/me".to_string(),
        MemberResponse::from_member(&member),
    ))
}

async fn find_me(
    State(state): State<AppState>,
    AuthMember(id): AuthMember,
) -> Result<Json<MemberResponse>, AppError> {
    let member = state.store.find_member(id).await?;
    Ok(Json(MemberResponse::from_member(&member)))
}

async fn update_me(
    State(state): State<AppState>,
    AuthMember(id): AuthMember,
    Json(req): Json<MemberRequest>,
) -> Result<Json<MemberResponse>, AppError> {
    let member = state
        .store
        .update_member(id, &req.email, &req.password, req.age)
        .await?;
    Ok(Json(MemberResponse::from_member(&member)))
}

async fn delete_me(
    State(state): State<AppState>,
    AuthMember(id): AuthMember,
) -> Result<StatusCode, AppError> {
    state.store.delete_member(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn login(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let access_token = state.store.login(&req.email, &req.password).await?;
    Ok(Json(TokenResponse { access_token }))
}

// ============================================================================
// Favorites
// ============================================================================

async fn create_favorite(
    State(state): State<AppState>,
    AuthMember(member): AuthMember,
    Json(req): Json<FavoriteRequest>,
) -> Result<Response, AppError> {
    let favorite = state
        .store
        .create_favorite(member, StationId(req.source), StationId(req.target))
        .await?;
    Ok(created(
        format!("/favorites/{}", favorite.id),
        FavoriteResponse::from_favorite(&favorite),
    ))
}

async fn list_favorites(
    State(state): State<AppState>,
    AuthMember(member): AuthMember,
) -> Json<Vec<FavoriteResponse>> {
    let favorites = state.store.list_favorites(member).await;
    Json(favorites.iter().map(FavoriteResponse::from_favorite).collect())
}

async fn delete_favorite(
    State(state): State<AppState>,
    AuthMember(member): AuthMember,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.store.delete_favorite(member, FavoriteId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
