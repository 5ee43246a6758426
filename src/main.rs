use agora_token_service::{app_state_from_env, build_router, domain::config::server::ServerConfig};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agora_token_service=info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env().expect("ERROR: invalid server configuration");
    let addr = config
        .bind_addr()
        .expect("ERROR: HOST and PORT must form a valid socket address");

    let app_state = app_state_from_env();
    if !app_state.token_service.is_configured() {
        tracing::warn!("AGORA_APP_ID / AGORA_APP_CERTIFICATE are not set; token requests will fail with 500");
    }

    let router = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to port");

    info!("Starting agora-token-service v{}", env!("CARGO_PKG_VERSION"));
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");

    info!("Server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
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

    info!("Shutdown signal received, stopping server");
}
