//! # Warung Backend
//!
//! Delivery-area validation service for the storefront.
//!
//!
//!
//! # General Infrastructure
//! - Storefront frontend POSTs the customer's free-form address to `/validate-address`
//! - The verdict is advisory: the frontend shows the message and suggestions,
//!   checkout gates on `isValid`
//! - Classification itself never fails; only a missing or malformed `address`
//!   field is rejected before the classifier runs
//! - No persistence, every request is independent
//!
//!
//!
//! # Contract
//!
//! Request body:
//! ```json
//! { "address": "Jl. Raya Cimanggis No. 12, Kota Depok" }
//! ```
//!
//! Success response:
//! ```json
//! { "success": true, "data": { "isValid": true, "message": "...", "confidence": 95, "detectedArea": "Cimangis, Depok" } }
//! ```
//!
//! Failure response (bad request or internal):
//! ```json
//! { "success": false, "message": "Alamat tidak valid" }
//! ```
//!
//!
//!
//! ## Commands
//!
//! Probe a running server.
//! ```sh
//! curl -X POST http://localhost:3001/validate-address \
//!   -H 'Content-Type: application/json' \
//!   -d '{"address": "SMK Taruna Bhakti, Depok"}'
//! ```
use std::time::Duration;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::post,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use routes::validate_address_handler;
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let state = AppState::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/validate-address", post(validate_address_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
