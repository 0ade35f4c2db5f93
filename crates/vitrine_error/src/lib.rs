//! Error types for the Vitrine marketplace catalog.
//!
//! This crate provides the foundation error types used throughout the Vitrine workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vitrine_error::{VitrineResult, CatalogError, CatalogErrorKind};
//!
//! fn fetch_app() -> VitrineResult<String> {
//!     Err(CatalogError::new(CatalogErrorKind::NotFound))?
//! }
//!
//! match fetch_app() {
//!     Ok(app) => println!("Got: {}", app),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
#[cfg(feature = "database")]
mod database;
mod error;
mod server;

pub use catalog::{CatalogError, CatalogErrorKind};
pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
pub use error::{VitrineError, VitrineErrorKind, VitrineResult};
pub use server::{ServerError, ServerErrorKind};
