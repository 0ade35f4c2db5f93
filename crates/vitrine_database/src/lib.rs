//! PostgreSQL integration for the Vitrine marketplace catalog.
//!
//! This crate provides the diesel schema, row models, connection helpers,
//! and the database-backed [`PostgresCatalog`] implementation of the
//! `AppCatalog` trait.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_database::{PostgresCatalog, create_pool, run_migrations};
//! use vitrine_interface::AppCatalog;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("postgres://localhost/vitrine")?;
//! run_migrations(&mut pool.get()?)?;
//! let catalog = PostgresCatalog::new(pool);
//! // catalog.list_apps(...), catalog.get_app(...), etc.
//! # Ok(())
//! # }
//! ```

mod catalog;
mod connection;
mod conversions;
mod models;

// Public module for external access
pub mod schema;

// Re-export connection utilities
pub use connection::{MIGRATIONS, create_pool, establish_connection, run_migrations};

// Re-export the catalog backend
pub use catalog::PostgresCatalog;

// Re-export row model types
pub use models::{
    AppChangesRow, AppRow, AppTagRow, AppToolRow, CategoryRow, NewAppRow, TagRow, ToolRow,
};

use vitrine_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
