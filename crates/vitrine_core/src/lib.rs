//! Core data types for the Vitrine marketplace catalog.
//!
//! This crate provides the domain entities shared across the Vitrine
//! workspace, together with the query semantics every catalog backend must
//! agree on: the filter vocabulary, the visibility rule, the trending score,
//! and a pure in-memory implementation of the listing query engine.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod filter;
mod lookup;
mod query;
mod ranking;
mod status;
mod telemetry;
mod visibility;

pub use app::App;
pub use filter::{DateRange, FilterSpec, FilterSpecBuilder, SortKey};
pub use lookup::{Category, Tag, Tool};
pub use query::select_apps;
pub use ranking::trending_score;
pub use status::AppStatus;
pub use telemetry::init_telemetry;
pub use visibility::{VisibilityScope, can_view_detail};
