//! # holonetd: holonet daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations and inject them into services
//! - Build the axum router and serve until SIGTERM/SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use axum::ServiceExt;
use axum::extract::Request;
use holonet_adapter_http_axum::state::AppState;
use holonet_adapter_storage_sqlite_sqlx::{
    Database, SqliteCharacterRepository, SqliteFavoriteRepository, SqlitePlanetRepository,
    SqliteUserRepository,
};
use holonet_app::services::character_service::CharacterService;
use holonet_app::services::favorite_service::FavoriteService;
use holonet_app::services::planet_service::PlanetService;
use holonet_app::services::user_service::UserService;
use holonet_domain::id::UserId;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = holonet_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("opening database")?;

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    tracing::info!(%bind_addr, current_user_id = %config.current_user_id(), "holonetd listening");

    serve(&db, config.current_user_id(), listener, shutdown_signal()).await?;

    tracing::info!("holonetd stopped");
    Ok(())
}

/// Wire repositories and services onto `db` and serve HTTP on `listener`
/// until `shutdown` resolves.
async fn serve(
    db: &Database,
    current_user_id: UserId,
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let pool = db.pool().clone();

    // Repositories, shared between the read services and the favorite checks
    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let planet_repo = Arc::new(SqlitePlanetRepository::new(pool.clone()));
    let character_repo = Arc::new(SqliteCharacterRepository::new(pool.clone()));
    let favorite_repo = SqliteFavoriteRepository::new(pool);

    // Services
    let favorite_service = FavoriteService::new(
        favorite_repo,
        Arc::clone(&user_repo),
        Arc::clone(&planet_repo),
        Arc::clone(&character_repo),
    );
    let state = AppState::new(
        UserService::new(user_repo),
        PlanetService::new(planet_repo),
        CharacterService::new(character_repo),
        favorite_service,
        current_user_id,
    );
    let app = holonet_adapter_http_axum::router::build(state);

    // trailing-slash trimming wraps the router, so it must be turned into a
    // make-service from the outside
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
