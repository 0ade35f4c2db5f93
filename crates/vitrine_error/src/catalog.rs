//! Catalog error types.

/// Catalog error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CatalogErrorKind {
    /// The requested app does not exist, or visibility rules hide it from
    /// this requester. The two cases are deliberately indistinguishable so
    /// that private drafts do not leak their existence.
    #[display("App not found")]
    NotFound,
    /// The request referenced an entity in an invalid way
    #[display("Validation error: {}", _0)]
    Validation(String),
    /// The operation requires an authenticated requester
    #[display("Requester identity required")]
    Unauthorized,
}

/// Catalog error with source location tracking.
///
/// # Examples
///
/// ```
/// use vitrine_error::{CatalogError, CatalogErrorKind};
///
/// let err = CatalogError::new(CatalogErrorKind::NotFound);
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Catalog Error: {} at line {} in {}", kind, line, file)]
pub struct CatalogError {
    /// The kind of error that occurred
    pub kind: CatalogErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CatalogError {
    /// Create a new CatalogError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CatalogErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for the not-found condition.
    #[track_caller]
    pub fn not_found() -> Self {
        Self::new(CatalogErrorKind::NotFound)
    }
}
