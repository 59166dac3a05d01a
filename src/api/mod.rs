//! API module
//!
//! Defines the axum handlers and router exposing the fee calculator over
//! HTTP.
//!
//! # Endpoints
//!
//! - `POST /delivery-fee` - Computes the fee for a cart
//! - `GET /` - Empty health-check response
//!
//! # Design Principles
//!
//! - The tariff is injected as shared state, never read from globals
//! - Every boundary failure (undeserializable body or non-positive field)
//!   surfaces as 422 Unprocessable Entity with a structured error body
//! - Handlers stay thin; all fee logic lives in [`crate::fee`]

pub mod axum_handler;

// Re-exports
pub use axum_handler::{delivery_fee_handler, root_handler, router};
