//! In-memory product catalog.

use crate::descriptor::{QueryDescriptor, Restriction};
use crate::source::{ProductDataSource, QueryResult, Result};
use async_trait::async_trait;
use std::cmp::Ordering;
use vitrine_types::{OrderBy, ProductRow, SortDirection, StockFilter, StockStatus};

/// A [`ProductDataSource`] over a fixed list of products.
///
/// Applies every descriptor field the way a database backend would. Useful
/// for tests, demos and small static catalogs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
	products: Vec<ProductRow>,
}

impl InMemoryDataSource {
	/// Creates a catalog from the given products.
	pub fn new(products: impl IntoIterator<Item = ProductRow>) -> Self {
		Self {
			products: products.into_iter().collect(),
		}
	}

	/// Adds a product.
	pub fn insert(&mut self, product: ProductRow) {
		self.products.push(product);
	}

	/// Returns the number of products.
	pub fn len(&self) -> usize {
		self.products.len()
	}

	/// Returns whether the catalog is empty.
	pub fn is_empty(&self) -> bool {
		self.products.is_empty()
	}

	/// Runs `query` synchronously.
	pub fn execute(&self, query: &QueryDescriptor) -> QueryResult {
		if query.requests_nothing() {
			return QueryResult::empty();
		}

		let mut matched: Vec<&ProductRow> = self
			.products
			.iter()
			.filter(|product| matches_query(product, query))
			.collect();

		match &query.restriction {
			Restriction::Ids {
				ids,
				keep_order: true,
			} => matched.sort_by_key(|product| {
				ids.iter()
					.position(|id| *id == product.id)
					.unwrap_or(usize::MAX)
			}),
			_ => matched.sort_by(|a, b| compare(a, b, query)),
		}

		let total = matched.len() as u64;
		let per_page = query.per_page.max(1);
		let total_pages = u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX);
		let page = query.page.clamp(1, total_pages.max(1));
		let offset = (page as usize - 1) * per_page as usize;

		QueryResult {
			rows: matched
				.into_iter()
				.skip(offset)
				.take(per_page as usize)
				.cloned()
				.collect(),
			total_pages,
			page,
			total,
		}
	}
}

#[async_trait]
impl ProductDataSource for InMemoryDataSource {
	async fn query(&self, query: &QueryDescriptor) -> Result<QueryResult> {
		let result = self.execute(query);
		tracing::debug!(
			requested_page = query.page,
			served_page = result.page,
			total = result.total,
			"in-memory product query"
		);
		Ok(result)
	}

	async fn on_sale_ids(&self) -> Result<Vec<u64>> {
		Ok(self
			.products
			.iter()
			.filter(|product| product.on_sale)
			.map(|product| product.id)
			.collect())
	}
}

fn matches_query(product: &ProductRow, query: &QueryDescriptor) -> bool {
	let restricted = match &query.restriction {
		Restriction::Any => true,
		Restriction::Ids { ids, .. } => ids.contains(&product.id),
		Restriction::Categories { ids } => product.category_ids.iter().any(|c| ids.contains(c)),
		Restriction::Nothing => false,
	};
	if query.published_only && !product.published {
		return false;
	}
	if !restricted || query.excludes.contains(&product.id) {
		return false;
	}

	let stock_ok = match query.stock {
		StockFilter::Any => true,
		StockFilter::InStock => product.stock.status == StockStatus::InStock,
		StockFilter::OutOfStock => product.stock.status == StockStatus::OutOfStock,
		StockFilter::OnBackorder => product.stock.status == StockStatus::OnBackorder,
	};
	if !stock_ok {
		return false;
	}

	if let Some(bounds) = query.price
		&& !bounds.contains(product.price)
	{
		return false;
	}

	match &query.search {
		Some(term) => matches_search(product, &term.to_lowercase()),
		None => true,
	}
}

fn matches_search(product: &ProductRow, needle: &str) -> bool {
	product.name.to_lowercase().contains(needle)
		|| product
			.sku
			.as_deref()
			.is_some_and(|sku| sku.to_lowercase().contains(needle))
		|| product.summary.to_lowercase().contains(needle)
}

fn compare(a: &ProductRow, b: &ProductRow, query: &QueryDescriptor) -> Ordering {
	let primary = match query.sort.order_by {
		OrderBy::Date => a.published_at.cmp(&b.published_at),
		OrderBy::Title => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
		OrderBy::Price => a.price.total_cmp(&b.price),
		OrderBy::Popularity => a.total_sales.cmp(&b.total_sales),
		OrderBy::Rating => a.average_rating.total_cmp(&b.average_rating),
		OrderBy::MenuOrder => a.menu_order.cmp(&b.menu_order),
		OrderBy::Id => Ordering::Equal,
	};
	let ordering = primary.then(a.id.cmp(&b.id));
	match query.sort.order {
		SortDirection::Asc => ordering,
		SortDirection::Desc => ordering.reverse(),
	}
}
