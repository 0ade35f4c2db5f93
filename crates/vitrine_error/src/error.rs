//! Top-level error wrapper types.

use crate::{CatalogError, ConfigError, ServerError};
#[cfg(feature = "database")]
use crate::DatabaseError;

/// This is the foundation error enum. Each vitrine crate contributes the
/// variant covering its own failure domain.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineError, CatalogError, CatalogErrorKind};
///
/// let catalog_err = CatalogError::new(CatalogErrorKind::NotFound);
/// let err: VitrineError = catalog_err.into();
/// assert!(format!("{}", err).contains("Catalog Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VitrineErrorKind {
    /// Catalog error
    #[from(CatalogError)]
    Catalog(CatalogError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// HTTP server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Vitrine error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineResult, ConfigError};
///
/// fn might_fail() -> VitrineResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vitrine Error: {}", _0)]
pub struct VitrineError(Box<VitrineErrorKind>);

impl VitrineError {
    /// Create a new error from a kind.
    pub fn new(kind: VitrineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VitrineErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VitrineErrorKind
impl<T> From<T> for VitrineError
where
    T: Into<VitrineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vitrine operations.
///
/// # Examples
///
/// ```
/// use vitrine_error::{VitrineResult, CatalogError};
///
/// fn fetch_app() -> VitrineResult<String> {
///     Err(CatalogError::not_found())?
/// }
/// ```
pub type VitrineResult<T> = std::result::Result<T, VitrineError>;
