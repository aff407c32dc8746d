use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use arrival_server::config::ServerConfig;
use arrival_server::timetable::Timetable;
use arrival_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,arrival_server=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // Build app state
    let state = AppState::new(Timetable::new());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!("Server running at http://{addr}/");
    info!("API Endpoints:");
    info!("  POST /line            - Register a line schedule");
    info!("  GET  /nextmulti?time= - Next time two or more trains are in");
    info!("  GET  /lines           - List registered lines");
    info!("  GET  /lines/:name     - Show a line's schedule");
    info!("  GET  /health          - Health check");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        std::process::exit(1);
    }
}
