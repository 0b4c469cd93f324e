use dotenvy::dotenv;
use teamdir::app;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (silently ignore if missing)
    dotenv().ok();

    // Initialise structured logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,tower_http=debug", env!("CARGO_PKG_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from environment
    let config = app::config::Config::from_env()
        .expect("Failed to load config (check WORKOS_API_KEY and other env vars)");

    // Build the provider client, shared read-only by every handler
    let workos = app::workos::WorkOs::new(&config).unwrap_or_else(|e| {
        tracing::error!("Failed to initialize provider client: {}", e);
        std::process::exit(1);
    });

    // Cookie-signing key (ephemeral unless SESSION_SECRET is set)
    let key = app::session::signing_key(&config)
        .expect("Failed to build session signing key");

    // Build the application state
    let state = app::AppState {
        workos,
        config,
        key,
    };
    let router = teamdir::create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind("127.0.0.1:5000")
        .await
        .expect("Failed to bind to port 5000");

    tracing::info!("Listening on http://127.0.0.1:5000");

    axum::serve(listener, router).await.unwrap();
}
