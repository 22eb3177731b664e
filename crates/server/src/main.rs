//! TanzConnect server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::middleware;
use tanzconnect_api::{middleware::AppState, router as api_router};
use tanzconnect_common::Config;
use tanzconnect_core::{
    AccountService, EntrepreneurProfileService, InvestorProfileService, RoutingService,
};
use tanzconnect_db::repositories::{
    AccountRepository, EntrepreneurProfileRepository, InvestorProfileRepository,
};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Waits for a shutdown signal (SIGINT or SIGTERM).
///
/// On Unix systems, this listens for both SIGINT (Ctrl+C) and SIGTERM.
/// On Windows, this only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received SIGINT, initiating graceful shutdown...");
        },
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tanzconnect=debug,tower_http=debug".into()),
        )
        .init();

    info!("Starting tanzconnect server...");

    // Load configuration
    let config = Config::load()?;

    // Connect to database
    let db = tanzconnect_db::init(&config).await?;
    info!("Connected to database");

    // Run migrations
    info!("Running database migrations...");
    tanzconnect_db::migrate(&db).await?;
    info!("Migrations completed");

    // Initialize repositories
    let db = Arc::new(db);
    let account_repo = AccountRepository::new(Arc::clone(&db));
    let entrepreneur_repo = EntrepreneurProfileRepository::new(Arc::clone(&db));
    let investor_repo = InvestorProfileRepository::new(Arc::clone(&db));

    // Initialize services
    let account_service = AccountService::new(account_repo);
    let entrepreneur_service = EntrepreneurProfileService::new(entrepreneur_repo.clone());
    let investor_service = InvestorProfileService::new(investor_repo.clone());
    let routing_service = RoutingService::new(entrepreneur_repo, investor_repo);

    // Create app state
    let state = AppState {
        account_service,
        entrepreneur_service,
        investor_service,
        routing_service,
    };

    // Build router
    let app = api_router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            tanzconnect_api::middleware::auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    // Start server with graceful shutdown
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
