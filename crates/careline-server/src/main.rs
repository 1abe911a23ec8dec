use std::env;
use std::sync::Arc;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use careline_client::http::FhirClient;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let base_url = env::var("CARELINE_BASE_URL")
        .unwrap_or_else(|_| "https://api.careline.example".to_string());

    let mut client = FhirClient::new(&base_url);
    if let Ok(token) = env::var("CARELINE_ACCESS_TOKEN") {
        client = client.with_token(token);
    }

    let state = AppState {
        records: Arc::new(client),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/bots/{name}/execute", post(routes::execute::execute_bot))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
