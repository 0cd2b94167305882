use std::env;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trip_server::itinerary::ItineraryBuilder;
use trip_server::routes_api::{RouteProvider, RoutesClient, RoutesConfig, StaticRouteProvider};
use trip_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "trip_server=info,tower_http=info";

/// Address to listen on when `BIND_ADDR` is not set.
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    3000,
);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let addr = match env::var("BIND_ADDR") {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            warn!(%value, error = %e, "invalid BIND_ADDR, using default");
            DEFAULT_BIND_ADDR
        }),
        Err(_) => DEFAULT_BIND_ADDR,
    };

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");

    // Serve a canned response instead of calling the provider
    if let Ok(path) = env::var("ROUTES_MOCK_FILE") {
        let provider =
            StaticRouteProvider::from_file(&path).expect("Failed to load mock route file");
        info!(%path, "serving static route responses");
        serve(listener, provider).await;
        return;
    }

    let api_key = env::var("ROUTES_API_KEY").unwrap_or_else(|_| {
        warn!("ROUTES_API_KEY not set. API calls will fail.");
        String::new()
    });

    let mut config = RoutesConfig::new(api_key);
    if let Ok(url) = env::var("ROUTES_BASE_URL") {
        config = config.with_base_url(url);
    }
    if let Ok(value) = env::var("ROUTES_TIMEOUT_SECS") {
        match value.parse() {
            Ok(secs) => config = config.with_timeout(secs),
            Err(e) => warn!(%value, error = %e, "invalid ROUTES_TIMEOUT_SECS, using default"),
        }
    }

    let client = RoutesClient::new(config).expect("Failed to create Routes client");
    serve(listener, client).await;
}

async fn serve<P: RouteProvider + 'static>(listener: TcpListener, provider: P) {
    let state = AppState::new(ItineraryBuilder::new(provider));
    let app = create_router(state);

    if let Ok(addr) = listener.local_addr() {
        info!("Trip Estimator listening on http://{addr}");
    }
    info!("API Endpoints:");
    info!("  GET  /health   - Health check");
    info!("  POST /travel/  - Estimate a trip between two places");

    axum::serve(listener, app).await.expect("Server error");
}
