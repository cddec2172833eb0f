use std::net::SocketAddr;
use std::sync::Arc;
use suvidha_unite::{api, config::Config, SurgeSession};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let port = config.port;

    let surge = match SurgeSession::from_config(&config) {
        Ok(session) => Arc::new(session),
        Err(e) => {
            eprintln!("Failed to set up surge simulation: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        demo_mode = config.demo_mode,
        tick_ms = config.surge_tick.as_millis() as u64,
        hold_probability = config.surge_hold_probability,
        seeded = config.surge_seed.is_some(),
        "Unite screen host configured"
    );

    let app = api::create_router(api::AppState::new(config, surge));

    // Bind to address
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
