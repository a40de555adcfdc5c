pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::portfolio::handlers as portfolio;
use crate::state::AppState;
use crate::users::handlers as users;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Users
        .route("/api/v1/users", post(users::handle_register))
        // Portfolio record
        .route(
            "/api/v1/portfolio",
            get(portfolio::handle_get_portfolio).patch(portfolio::handle_update_portfolio),
        )
        .route(
            "/api/v1/portfolio/theme/:theme_id",
            put(portfolio::handle_set_theme),
        )
        .route("/api/v1/portfolio/publish", post(portfolio::handle_publish))
        .route(
            "/api/v1/portfolio/unpublish",
            post(portfolio::handle_unpublish),
        )
        // Rendered documents
        .route(
            "/api/v1/portfolio/preview",
            get(portfolio::handle_render_preview),
        )
        .route(
            "/api/v1/portfolio/print",
            get(portfolio::handle_render_print),
        )
        // Theme catalog
        .route("/api/v1/themes", get(portfolio::handle_list_themes))
        // Wizard
        .route("/api/v1/wizard", get(wizard::handle_get_wizard))
        .route("/api/v1/wizard/next", post(wizard::handle_next))
        .route("/api/v1/wizard/back", post(wizard::handle_back))
        .route("/api/v1/wizard/goto", post(wizard::handle_goto))
        .route("/api/v1/wizard/restart", post(wizard::handle_restart))
        .with_state(state)
}
