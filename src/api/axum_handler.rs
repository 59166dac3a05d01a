//! axum handlers
//!
//! Provides the handler functions and router for the axum framework.

use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::dto::{CartDto, DeliveryFeeDto, DeliveryFeeErrorDto};
use crate::fee::compute_total_fee;
use crate::tariff::FeeTariff;

/// POST /delivery-fee handler
///
/// Deserializes the request body into a [`CartDto`], validates it into a
/// domain cart, and computes the fee against the shared tariff.
///
/// # Arguments
///
/// * `tariff` - Shared fee tariff
/// * `payload` - Deserialized body, or the rejection if deserialization failed
///
/// # Returns
///
/// * 200 with `{"delivery_fee": n}` for a valid cart
/// * 422 with a [`DeliveryFeeErrorDto`] body for any boundary failure
pub async fn delivery_fee_handler(
    State(tariff): State<Arc<FeeTariff>>,
    payload: Result<Json<CartDto>, JsonRejection>,
) -> Response {
    let Json(cart_dto) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "rejecting undeserializable cart");
            return unprocessable(&DeliveryFeeErrorDto::malformed(&rejection.body_text()));
        }
    };

    let cart = match cart_dto.to_cart() {
        Ok(cart) => cart,
        Err(error) => {
            tracing::debug!(%error, "rejecting invalid cart");
            return unprocessable(&DeliveryFeeErrorDto::from_domain(&error));
        }
    };

    match compute_total_fee(&tariff, &cart) {
        Ok(fee) => (StatusCode::OK, Json(DeliveryFeeDto::from_fee(fee))).into_response(),
        Err(error) => unprocessable(&DeliveryFeeErrorDto::from_domain(&error)),
    }
}

/// GET / handler
///
/// Empty health-check style endpoint.
pub async fn root_handler() -> StatusCode {
    StatusCode::OK
}

/// Builds the application router
///
/// # Arguments
///
/// * `tariff` - Fee tariff shared read-only across handlers
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use delivery_fee_service::api::router;
/// use delivery_fee_service::tariff::FeeTariff;
///
/// let app = router(Arc::new(FeeTariff::standard()));
/// # let _ = app;
/// ```
#[must_use]
pub fn router(tariff: Arc<FeeTariff>) -> Router {
    Router::new()
        .route("/delivery-fee", post(delivery_fee_handler))
        .route("/", get(root_handler))
        .with_state(tariff)
}

fn unprocessable(error: &DeliveryFeeErrorDto) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(error.clone())).into_response()
}
