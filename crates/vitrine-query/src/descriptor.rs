//! Backend-neutral description of a product query.

use serde::{Deserialize, Serialize};
use vitrine_types::{Sort, StockFilter};

/// Which products a query may return before the always-applied filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Restriction {
	/// Every published product.
	#[default]
	Any,
	/// Exactly these products.
	Ids {
		ids: Vec<u64>,
		/// Return rows in the order of `ids` instead of the configured sort.
		keep_order: bool,
	},
	/// Products in at least one of these categories.
	Categories { ids: Vec<u64> },
	/// No products at all.
	Nothing,
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
	pub min: f64,
	pub max: f64,
}

impl PriceBounds {
	/// Returns whether `price` lies within the bounds.
	pub fn contains(&self, price: f64) -> bool {
		price >= self.min && price <= self.max
	}
}

/// A normalized product query.
///
/// Built by [`QueryBuilder`](crate::QueryBuilder) and executed by a
/// [`ProductDataSource`](crate::ProductDataSource). Every field is already
/// validated, so backends can translate it without further checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
	/// Only published products are ever returned.
	pub published_only: bool,
	pub restriction: Restriction,
	/// Products removed from the result regardless of restriction.
	pub excludes: Vec<u64>,
	pub stock: StockFilter,
	pub price: Option<PriceBounds>,
	/// Trimmed, non-empty search text narrowing the restriction.
	pub search: Option<String>,
	/// Requested page, 1-indexed.
	pub page: u32,
	pub per_page: u32,
	pub sort: Sort,
}

impl QueryDescriptor {
	/// Returns whether the query intentionally matches nothing.
	pub fn requests_nothing(&self) -> bool {
		self.restriction == Restriction::Nothing
	}

	/// Returns whether an ID list dictates the row order.
	pub fn keeps_id_order(&self) -> bool {
		matches!(
			self.restriction,
			Restriction::Ids {
				keep_order: true,
				..
			}
		)
	}
}
