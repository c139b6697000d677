//! The product data source seam.

use crate::descriptor::QueryDescriptor;
use async_trait::async_trait;
use thiserror::Error;
use vitrine_types::ProductRow;

/// Failure of a product backend.
///
/// "No matches" is never an error; it is an empty [`QueryResult`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataSourceError {
	/// The backend could not be reached or failed while answering.
	#[error("product backend failed: {0}")]
	Backend(String),
	/// The backend refused the query.
	#[error("product query rejected: {0}")]
	Rejected(String),
}

/// Result type for data source operations.
pub type Result<T> = std::result::Result<T, DataSourceError>;

/// One page of products plus the paging facts the backend actually served.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
	pub rows: Vec<ProductRow>,
	/// Number of pages; `0` or `1` when nothing matched.
	pub total_pages: u32,
	/// Page that was served, which may differ from the one requested.
	pub page: u32,
	/// Number of matching products across all pages.
	pub total: u64,
}

impl QueryResult {
	/// An empty first page.
	pub fn empty() -> Self {
		Self {
			rows: Vec::new(),
			total_pages: 0,
			page: 1,
			total: 0,
		}
	}
}

/// Executes query descriptors against a product catalog.
///
/// ```rust
/// use async_trait::async_trait;
/// use vitrine_query::{DataSourceResult, ProductDataSource, QueryDescriptor, QueryResult};
///
/// struct EmptyCatalog;
///
/// #[async_trait]
/// impl ProductDataSource for EmptyCatalog {
///     async fn query(&self, _query: &QueryDescriptor) -> DataSourceResult<QueryResult> {
///         Ok(QueryResult::empty())
///     }
///
///     async fn on_sale_ids(&self) -> DataSourceResult<Vec<u64>> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait ProductDataSource: Send + Sync {
	/// Returns the page of products matching `query`.
	///
	/// # Errors
	///
	/// Returns an error only when the backend itself fails.
	async fn query(&self, query: &QueryDescriptor) -> Result<QueryResult>;

	/// Returns the IDs of products currently on sale.
	///
	/// # Errors
	///
	/// Returns an error only when the backend itself fails.
	async fn on_sale_ids(&self) -> Result<Vec<u64>>;
}
