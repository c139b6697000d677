//! Product source: which catalog items populate a table.

use crate::lenient::{id_list, lenient, optional_number};
use serde::{Deserialize, Serialize};

/// Upper bound used when a price range has no maximum.
///
/// Backends compare prices numerically, so an open-ended range is encoded as
/// this sentinel rather than as a missing bound.
pub const PRICE_RANGE_OPEN_MAX: f64 = 999_999_999.0;

/// Strategy selecting the products of a table. Exactly one is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
	/// Every published product.
	#[default]
	All,
	/// Products currently on sale.
	Sale,
	/// Products in at least one of the configured categories.
	Category,
	/// An explicit, ordered list of product IDs.
	Specific,
}

/// Stock status filter applied on top of the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockFilter {
	/// No stock filtering.
	#[default]
	#[serde(rename = "any")]
	Any,
	/// Only products in stock.
	#[serde(rename = "instock")]
	InStock,
	/// Only products out of stock.
	#[serde(rename = "outofstock")]
	OutOfStock,
	/// Only products on backorder.
	#[serde(rename = "onbackorder")]
	OnBackorder,
}

/// Inclusive price range. Either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRange {
	/// Lower bound.
	#[serde(deserialize_with = "optional_number")]
	pub min: Option<f64>,
	/// Upper bound; `None` means open-ended.
	#[serde(deserialize_with = "optional_number")]
	pub max: Option<f64>,
}

impl PriceRange {
	/// Resolves the range into concrete `(min, max)` bounds.
	///
	/// Returns `None` when neither bound is set. A missing minimum is `0`, a
	/// missing maximum is [`PRICE_RANGE_OPEN_MAX`], negative bounds clamp to
	/// zero and inverted bounds are swapped.
	pub fn bounds(&self) -> Option<(f64, f64)> {
		if self.min.is_none() && self.max.is_none() {
			return None;
		}
		let min = self.min.unwrap_or(0.0).max(0.0);
		let max = self.max.unwrap_or(PRICE_RANGE_OPEN_MAX).max(0.0);
		Some(if min <= max { (min, max) } else { (max, min) })
	}
}

/// Filters attached to a source. Only the fields relevant to the active
/// [`SourceType`] affect the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryArgs {
	/// Explicit product IDs (used by [`SourceType::Specific`]).
	#[serde(deserialize_with = "id_list")]
	pub post_ids: Vec<u64>,
	/// Category IDs (used by [`SourceType::Category`]).
	#[serde(deserialize_with = "id_list")]
	pub category_ids: Vec<u64>,
	/// Product IDs removed from any source.
	#[serde(deserialize_with = "id_list")]
	pub excludes: Vec<u64>,
	/// Stock status filter.
	#[serde(deserialize_with = "lenient")]
	pub stock_status: StockFilter,
	/// Price range filter.
	#[serde(deserialize_with = "lenient")]
	pub price_range: PriceRange,
}

/// Field a table is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
	/// Publish date.
	#[default]
	Date,
	/// Product title.
	Title,
	/// Active price.
	Price,
	/// Total sales.
	Popularity,
	/// Average rating.
	Rating,
	/// Manual menu order.
	MenuOrder,
	/// Product ID.
	Id,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending.
	Asc,
	/// Descending.
	#[default]
	Desc,
}

/// Table ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sort {
	/// Field to order by.
	#[serde(deserialize_with = "lenient")]
	pub order_by: OrderBy,
	/// Direction.
	#[serde(deserialize_with = "lenient")]
	pub order: SortDirection,
}

/// Declarative description of the products shown by a table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Source {
	/// Active strategy. Unknown strategies degrade to [`SourceType::All`].
	#[serde(rename = "type", deserialize_with = "lenient")]
	pub source_type: SourceType,
	/// Strategy arguments and always-applied filters.
	#[serde(deserialize_with = "lenient")]
	pub query_args: QueryArgs,
	/// Ordering.
	#[serde(deserialize_with = "lenient")]
	pub sort: Sort,
}

impl Source {
	/// Creates a source of the given type with default arguments.
	pub fn new(source_type: SourceType) -> Self {
		Self {
			source_type,
			..Self::default()
		}
	}

	/// Creates a [`SourceType::Specific`] source over the given IDs.
	pub fn specific(ids: impl IntoIterator<Item = u64>) -> Self {
		let mut source = Self::new(SourceType::Specific);
		source.query_args.post_ids = ids.into_iter().collect();
		source
	}

	/// Creates a [`SourceType::Category`] source over the given category IDs.
	pub fn category(ids: impl IntoIterator<Item = u64>) -> Self {
		let mut source = Self::new(SourceType::Category);
		source.query_args.category_ids = ids.into_iter().collect();
		source
	}
}
