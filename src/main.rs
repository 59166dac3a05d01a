//! delivery-fee-server
//!
//! HTTP server exposing the delivery fee calculator.
//!
//! # Endpoints
//!
//! - `POST /delivery-fee` - Computes the fee for a cart
//! - `GET /` - Empty health-check response
//!
//! # Usage
//!
//! ```bash
//! # Start the server
//! cargo run --bin delivery-fee-server
//!
//! # Send a request
//! curl -X POST http://localhost:8080/delivery-fee \
//!   -H "Content-Type: application/json" \
//!   -d '{"cart_value": 790, "delivery_distance": 2235, "number_of_items": 4, "time": "2024-01-15T13:00:00Z"}'
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use delivery_fee_service::api::router;
use delivery_fee_service::tariff::FeeTariff;

#[tokio::main]
async fn main() {
    // Tracing initialization
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "delivery_fee_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // The tariff is loaded once and shared read-only across handlers
    let tariff = Arc::new(FeeTariff::standard());
    let app = router(tariff).layer(TraceLayer::new_for_http());

    // Server startup
    let address = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Starting server on {}", address);

    let listener = tokio::net::TcpListener::bind(address).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
