//! Route definitions for the ForestInventory HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(plot_routes())
        .merge(tree_routes())
        .merge(species_routes())
        .merge(sync_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);
    let request_timeout =
        std::time::Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .nest("/api", api_routes)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, register, logout, verify, change password,
/// one-shot password migration.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/verify", get(handlers::auth::verify))
        .route("/auth/change-password", post(handlers::auth::change_password))
        .route(
            "/auth/migrate-passwords",
            post(handlers::auth::migrate_passwords),
        )
}

/// User management endpoints (admin-only, enforced in handlers).
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users", post(handlers::user::create_user))
        .route("/users/{id}", get(handlers::user::get_user))
        .route("/users/{id}", put(handlers::user::update_user))
        .route("/users/{id}/active", put(handlers::user::set_user_active))
        .route("/users/{id}", delete(handlers::user::delete_user))
}

/// Plot CRUD and per-plot tree listing.
fn plot_routes() -> Router<AppState> {
    Router::new()
        .route("/plots", get(handlers::plot::list_plots))
        .route("/plots", post(handlers::plot::create_plot))
        .route("/plots/{id}", get(handlers::plot::get_plot))
        .route("/plots/{id}", put(handlers::plot::update_plot))
        .route("/plots/{id}", delete(handlers::plot::deactivate_plot))
        .route("/plots/{id}/trees", get(handlers::plot::list_plot_trees))
}

/// Tree CRUD.
fn tree_routes() -> Router<AppState> {
    Router::new()
        .route("/trees", get(handlers::tree::list_trees))
        .route("/trees", post(handlers::tree::create_tree))
        .route("/trees/{id}", get(handlers::tree::get_tree))
        .route("/trees/{id}", put(handlers::tree::update_tree))
        .route("/trees/{id}", delete(handlers::tree::delete_tree))
}

/// Species catalog CRUD.
fn species_routes() -> Router<AppState> {
    Router::new()
        .route("/species", get(handlers::species::list_species))
        .route("/species", post(handlers::species::create_species))
        .route("/species/{id}", get(handlers::species::get_species))
        .route("/species/{id}", put(handlers::species::update_species))
        .route("/species/{id}", delete(handlers::species::deactivate_species))
}

/// Mobile sync log endpoints.
fn sync_routes() -> Router<AppState> {
    Router::new()
        .route("/sync-logs", get(handlers::sync::list_sync_logs))
        .route("/sync-logs", post(handlers::sync::create_sync_log))
        .route("/sync-logs/statistics", get(handlers::sync::sync_statistics))
        .route("/sync-logs/{id}", get(handlers::sync::get_sync_log))
        .route(
            "/sync-logs/user/{id}",
            get(handlers::sync::list_user_sync_logs),
        )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
///
/// Wildcard origins cannot be credentialed; cookie-based auth only works
/// with the explicit origin list, where credentials are enabled and
/// wildcard headers are mirrored from the request.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use axum::http::{HeaderName, HeaderValue, Method};
    use tower_http::cors::{AllowHeaders, Any};

    let cors_config = &state.config.server.cors;
    let wildcard_origin = cors_config.allowed_origins.contains(&"*".to_string());
    let wildcard_headers = cors_config.allowed_headers.contains(&"*".to_string());

    let mut cors = CorsLayer::new();

    if wildcard_origin {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins).allow_credentials(true);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    cors = match (wildcard_headers, wildcard_origin) {
        (true, true) => cors.allow_headers(Any),
        (true, false) => cors.allow_headers(AllowHeaders::mirror_request()),
        (false, _) => {
            let headers: Vec<HeaderName> = cors_config
                .allowed_headers
                .iter()
                .filter_map(|h| h.parse().ok())
                .collect();
            cors.allow_headers(headers)
        }
    };

    cors.max_age(std::time::Duration::from_secs(
        cors_config.max_age_seconds,
    ))
}
