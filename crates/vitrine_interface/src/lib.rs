//! Trait definitions for the Vitrine marketplace catalog.
//!
//! The [`AppCatalog`] trait is the seam between the HTTP surface and a
//! storage backend. Two implementations exist: `PostgresCatalog` in
//! `vitrine_database`, and [`MemoryCatalog`] here, an in-memory backend
//! driven by the pure query engine in `vitrine_core` and used by the test
//! suites.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;
mod traits;
mod types;

pub use memory::MemoryCatalog;
pub use traits::AppCatalog;
pub use types::{AppChanges, NewApp};
