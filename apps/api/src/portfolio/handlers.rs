use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::portfolio::{Portfolio, PortfolioUpdate};
use crate::portfolio::validation::{ensure_known_theme, prepare_update};
use crate::render;
use crate::state::AppState;
use crate::themes::{Theme, ThemeInfo};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

async fn fetch_portfolio(state: &AppState, user_id: Uuid) -> Result<Portfolio, AppError> {
    state
        .storage
        .get_portfolio(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No portfolio exists for user {user_id}")))
}

/// GET /api/v1/portfolio
pub async fn handle_get_portfolio(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Portfolio>, AppError> {
    let portfolio = fetch_portfolio(&state, params.user_id).await?;
    Ok(Json(portfolio))
}

/// PATCH /api/v1/portfolio
///
/// Merge-updates the record: present fields overwrite (explicitly empty
/// values included), absent fields survive. The whole payload is screened
/// first, so a rejected update changes nothing.
pub async fn handle_update_portfolio(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
    Json(update): Json<PortfolioUpdate>,
) -> Result<Json<Portfolio>, AppError> {
    let update = prepare_update(update)?;
    let portfolio = state.storage.update_portfolio(params.user_id, update).await?;
    Ok(Json(portfolio))
}

/// PUT /api/v1/portfolio/theme/:theme_id
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Path(theme_id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Portfolio>, AppError> {
    ensure_known_theme(&theme_id)?;
    let update = PortfolioUpdate {
        theme: Some(theme_id),
        ..Default::default()
    };
    let portfolio = state.storage.update_portfolio(params.user_id, update).await?;
    Ok(Json(portfolio))
}

/// POST /api/v1/portfolio/publish
pub async fn handle_publish(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Portfolio>, AppError> {
    set_published(&state, params.user_id, true).await
}

/// POST /api/v1/portfolio/unpublish
pub async fn handle_unpublish(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Portfolio>, AppError> {
    set_published(&state, params.user_id, false).await
}

async fn set_published(
    state: &AppState,
    user_id: Uuid,
    is_published: bool,
) -> Result<Json<Portfolio>, AppError> {
    let update = PortfolioUpdate {
        is_published: Some(is_published),
        ..Default::default()
    };
    let portfolio = state.storage.update_portfolio(user_id, update).await?;
    Ok(Json(portfolio))
}

/// GET /api/v1/portfolio/preview
pub async fn handle_render_preview(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Html<String>, AppError> {
    let portfolio = fetch_portfolio(&state, params.user_id).await?;
    Ok(Html(render::render_preview(&portfolio)?))
}

/// GET /api/v1/portfolio/print
pub async fn handle_render_print(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Html<String>, AppError> {
    let portfolio = fetch_portfolio(&state, params.user_id).await?;
    Ok(Html(render::render_print(&portfolio)?))
}

/// GET /api/v1/themes
pub async fn handle_list_themes() -> Json<Vec<ThemeInfo>> {
    Json(Theme::ALL.iter().map(Theme::info).collect())
}
