//! Builds query descriptors from table configuration.

use crate::descriptor::{PriceBounds, QueryDescriptor, Restriction};
use vitrine_types::{RuntimeArgs, Settings, Source, SourceType, StockFilter};

/// Turns a table's source, settings and per-request arguments into a
/// [`QueryDescriptor`].
///
/// Exactly one source strategy shapes the [`Restriction`]. An empty ID list,
/// category set or sale set yields [`Restriction::Nothing`] and never falls
/// back to every product. Exclusions, stock and price filters and the search
/// term apply on top of whichever strategy is active.
///
/// # Examples
///
/// ```
/// use vitrine_query::{QueryBuilder, Restriction};
/// use vitrine_types::{RuntimeArgs, Settings, Source};
///
/// let source = Source::specific([102, 101]);
/// let settings = Settings::default();
/// let args = RuntimeArgs::new().with_search("  mug ").with_page(2);
///
/// let query = QueryBuilder::new(&source, &settings).runtime(&args).build();
/// assert_eq!(
///     query.restriction,
///     Restriction::Ids { ids: vec![102, 101], keep_order: true }
/// );
/// assert_eq!(query.search.as_deref(), Some("mug"));
/// assert_eq!(query.page, 2);
/// assert_eq!(query.per_page, 10);
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder<'a> {
	source: &'a Source,
	settings: &'a Settings,
	runtime: Option<&'a RuntimeArgs>,
	on_sale_ids: &'a [u64],
	ambient_page: u32,
}

impl<'a> QueryBuilder<'a> {
	/// Creates a builder for the given source and settings.
	pub fn new(source: &'a Source, settings: &'a Settings) -> Self {
		Self {
			source,
			settings,
			runtime: None,
			on_sale_ids: &[],
			ambient_page: 1,
		}
	}

	/// Sets the per-request arguments.
	pub fn runtime(mut self, runtime: &'a RuntimeArgs) -> Self {
		self.runtime = Some(runtime);
		self
	}

	/// Sets the IDs of products currently on sale, used by [`SourceType::Sale`].
	pub fn on_sale_ids(mut self, ids: &'a [u64]) -> Self {
		self.on_sale_ids = ids;
		self
	}

	/// Sets the page used when the runtime arguments carry none.
	pub fn ambient_page(mut self, page: u32) -> Self {
		self.ambient_page = page;
		self
	}

	/// Builds the descriptor.
	pub fn build(&self) -> QueryDescriptor {
		let args = &self.source.query_args;
		let restriction = match self.source.source_type {
			SourceType::All => Restriction::Any,
			SourceType::Specific => ids_or_nothing(&args.post_ids, true),
			SourceType::Sale => ids_or_nothing(self.on_sale_ids, false),
			SourceType::Category if args.category_ids.is_empty() => Restriction::Nothing,
			SourceType::Category => Restriction::Categories {
				ids: args.category_ids.clone(),
			},
		};

		let page = self
			.runtime
			.and_then(|runtime| runtime.page_number)
			.unwrap_or(self.ambient_page)
			.max(1);

		let descriptor = QueryDescriptor {
			published_only: true,
			restriction,
			excludes: args.excludes.clone(),
			stock: args.stock_status,
			price: args
				.price_range
				.bounds()
				.map(|(min, max)| PriceBounds { min, max }),
			search: self
				.runtime
				.and_then(RuntimeArgs::search)
				.map(str::to_string),
			page,
			per_page: self.settings.pagination.page_size(),
			sort: self.source.sort,
		};

		tracing::debug!(
			source_type = ?self.source.source_type,
			page = descriptor.page,
			per_page = descriptor.per_page,
			requests_nothing = descriptor.requests_nothing(),
			filtered_stock = descriptor.stock != StockFilter::Any,
			"built product query"
		);
		descriptor
	}
}

fn ids_or_nothing(ids: &[u64], keep_order: bool) -> Restriction {
	if ids.is_empty() {
		Restriction::Nothing
	} else {
		Restriction::Ids {
			ids: ids.to_vec(),
			keep_order,
		}
	}
}
