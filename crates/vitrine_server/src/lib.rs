//! HTTP API for the Vitrine marketplace catalog.
//!
//! A thin axum surface over the [`vitrine_interface::AppCatalog`] trait:
//! query parameters map onto the filter vocabulary from `vitrine_core`,
//! the requester identity arrives in the `X-User-Id` header (populated by
//! the session layer in front of this service), and catalog errors map
//! onto HTTP status codes without leaking internals.

#![forbid(unsafe_code)]

mod api;
mod config;

pub use api::{ApiState, create_router, serve};
pub use config::ServerConfig;
