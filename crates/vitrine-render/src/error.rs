//! Render errors.

use thiserror::Error;
use vitrine_query::DataSourceError;

/// Failure of a render call.
///
/// Configuration problems never fail a render; they degrade to defaults.
/// Only the product backend can fail one.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
	/// The product data source failed.
	#[error(transparent)]
	DataSource(#[from] DataSourceError),
}

/// Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
