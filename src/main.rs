//! ForestInventory Server — forestry field-inventory backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use forestry_core::config::AppConfig;
use forestry_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load and validate configuration from files and environment.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("FORESTRY_ENV").unwrap_or_else(|_| "development".to_string());

    let config = AppConfig::load(&env)?;
    config.validate()?;

    Ok(config)
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ForestInventory v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = forestry_database::connection::DatabasePool::connect(&config.database).await?;
    let db_pool = db.into_pool();

    forestry_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(forestry_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let plot_repo = Arc::new(forestry_database::repositories::plot::PlotRepository::new(
        db_pool.clone(),
    ));
    let tree_repo = Arc::new(forestry_database::repositories::tree::TreeRepository::new(
        db_pool.clone(),
    ));
    let species_repo = Arc::new(
        forestry_database::repositories::species::SpeciesRepository::new(db_pool.clone()),
    );
    let sync_repo = Arc::new(
        forestry_database::repositories::sync_log::SyncLogRepository::new(db_pool.clone()),
    );

    // ── Step 3: Auth building blocks ─────────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = forestry_auth::password::PasswordHasher::new();
    let token_issuer = Arc::new(forestry_auth::jwt::TokenIssuer::new(&config.auth));
    let token_validator = Arc::new(forestry_auth::jwt::TokenValidator::new(&config.auth));
    let password_migration = Arc::new(forestry_auth::migration::PasswordMigration::new(
        Arc::clone(&user_repo),
        password_hasher.clone(),
    ));

    if config.auth.password_migration_enabled {
        tracing::warn!("Password migration endpoint is ENABLED; disable it after the one-shot run");
    }

    // ── Step 4: Services ─────────────────────────────────────────
    let auth_service = Arc::new(forestry_service::auth::AuthService::new(
        Arc::clone(&user_repo),
        password_hasher.clone(),
        Arc::clone(&token_issuer),
        &config.auth,
    ));
    let user_service = Arc::new(forestry_service::user::UserService::new(
        Arc::clone(&user_repo),
        password_hasher,
    ));
    let plot_service = Arc::new(forestry_service::plot::PlotService::new(Arc::clone(
        &plot_repo,
    )));
    let tree_service = Arc::new(forestry_service::tree::TreeService::new(
        Arc::clone(&tree_repo),
        Arc::clone(&plot_repo),
        Arc::clone(&species_repo),
    ));
    let species_service = Arc::new(forestry_service::species::SpeciesService::new(Arc::clone(
        &species_repo,
    )));
    let sync_service = Arc::new(forestry_service::sync::SyncLogService::new(Arc::clone(
        &sync_repo,
    )));

    // ── Step 5: HTTP server ──────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = forestry_api::state::AppState {
        config: Arc::new(config),
        db_pool,
        token_validator,
        auth_service,
        user_service,
        plot_service,
        tree_service,
        species_service,
        sync_service,
        password_migration,
    };

    let app = forestry_api::router::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("ForestInventory server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("ForestInventory server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
