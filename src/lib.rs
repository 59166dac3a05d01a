//! # Delivery Fee Service
//!
//! Computes the delivery fee for an order from its cart value, delivery
//! distance, item count, and order time, and exposes the computation over a
//! single HTTP endpoint.
//!
//! ## Module Structure
//!
//! - `simple_types`: Constrained primitive types (`CartValue`,
//!   `DeliveryDistance`, `ItemCount`)
//! - `cart`: The validated `Cart` compound type
//! - `tariff`: Immutable fee configuration (`FeeTariff`, `RushHour`)
//! - `fee`: The pure fee calculator
//! - `dto`: Serialization types for the HTTP boundary
//! - `api`: axum handlers and router

#![forbid(unsafe_code)]

pub mod api;
pub mod cart;
pub mod dto;
pub mod fee;
pub mod simple_types;
pub mod tariff;
