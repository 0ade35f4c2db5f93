//! Reference data entities: categories, tools, and tags.
//!
//! These are rarely-mutated lookup rows. The query engine treats them as
//! read-only; a filter referencing an id that does not exist simply matches
//! nothing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A listing category (exactly one per listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Category {
    /// Opaque unique id.
    pub id: Uuid,
    /// Unique display name.
    pub name: String,
}

/// A build tool a listing may be associated with (zero or more per listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Tool {
    /// Opaque unique id.
    pub id: Uuid,
    /// Unique display name.
    pub name: String,
    /// Optional homepage.
    pub website_url: Option<String>,
    /// Optional logo image URL.
    pub logo_url: Option<String>,
}

/// A free-form tag (zero or more per listing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Tag {
    /// Opaque unique id.
    pub id: Uuid,
    /// Unique display name.
    pub name: String,
}
