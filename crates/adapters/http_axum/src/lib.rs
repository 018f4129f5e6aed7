//! # smarthome-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API over users, houses, floors, rooms, hallways and
//!   devices (`/users`, `/house/{house_id}/floor/{floor_id}/…`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map [`SmartHomeError`](smarthome_domain::error::SmartHomeError) variants
//!   onto status codes with a `{"error": …}` body
//!
//! ## Dependency rule
//! Depends on `smarthome-app` (for the store port and services) and
//! `smarthome-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
