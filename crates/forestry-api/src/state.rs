//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use forestry_auth::jwt::TokenValidator;
use forestry_auth::migration::PasswordMigration;
use forestry_core::config::AppConfig;
use forestry_service::auth::AuthService;
use forestry_service::plot::PlotService;
use forestry_service::species::SpeciesService;
use forestry_service::sync::SyncLogService;
use forestry_service::tree::TreeService;
use forestry_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db_pool: PgPool,
    /// Token validator used by the access-control gate.
    pub token_validator: Arc<TokenValidator>,
    /// Authentication service.
    pub auth_service: Arc<AuthService>,
    /// User administration service.
    pub user_service: Arc<UserService>,
    /// Plot service.
    pub plot_service: Arc<PlotService>,
    /// Tree service.
    pub tree_service: Arc<TreeService>,
    /// Species service.
    pub species_service: Arc<SpeciesService>,
    /// Sync log service.
    pub sync_service: Arc<SyncLogService>,
    /// One-shot legacy password migration.
    pub password_migration: Arc<PasswordMigration>,
}
