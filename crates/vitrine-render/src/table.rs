//! Full-table rendering.

use crate::bulk::BulkSelectLayout;
use crate::button::ButtonState;
use crate::cells::CellRegistry;
use crate::context::{CartBehavior, CellContext, RequestContext};
use crate::error::Result;
use crate::labels::Labels;
use crate::pagination::PaginationRenderer;
use std::sync::Arc;
use vitrine_markup::{Page, PageElement};
use vitrine_query::{ProductDataSource, QueryBuilder, QueryResult};
use vitrine_style::{StyleCompiler, TableScope, classes};
use vitrine_types::{Column, ProductRow, RuntimeArgs, SourceType, TableConfiguration, Visibility};

/// Name of the search input in the toolbar form.
pub const SEARCH_PARAM: &str = "vt_search";

/// Renders product tables.
///
/// Holds the data source, the cell registry and the labels. A renderer is
/// cheap to share behind an [`Arc`] and renders any number of tables.
pub struct TableRenderer {
	data_source: Arc<dyn ProductDataSource>,
	cells: CellRegistry,
	labels: Labels,
	scope_suffix: Option<String>,
}

impl std::fmt::Debug for TableRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TableRenderer")
			.field("cells", &self.cells)
			.field("scope_suffix", &self.scope_suffix)
			.finish_non_exhaustive()
	}
}

/// Rows and paging facts of one render call.
pub(crate) struct FetchedPage {
	pub(crate) result: QueryResult,
	pub(crate) layout: BulkSelectLayout,
	pub(crate) cart: CartBehavior,
}

impl TableRenderer {
	/// Creates a renderer with the built-in cell types and English labels.
	pub fn new(data_source: Arc<dyn ProductDataSource>) -> Self {
		Self {
			data_source,
			cells: CellRegistry::with_defaults(),
			labels: Labels::default(),
			scope_suffix: None,
		}
	}

	/// Replaces the cell registry.
	pub fn with_cells(mut self, cells: CellRegistry) -> Self {
		self.cells = cells;
		self
	}

	/// Replaces the labels.
	pub fn with_labels(mut self, labels: Labels) -> Self {
		self.labels = labels;
		self
	}

	/// Pins the random part of every style scope. Meant for snapshot tests.
	pub fn with_scope_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.scope_suffix = Some(suffix.into());
		self
	}

	/// Returns the labels.
	pub fn labels(&self) -> &Labels {
		&self.labels
	}

	/// Renders the complete table: style block, toolbar, header, body and
	/// pagination.
	///
	/// # Errors
	///
	/// Returns [`RenderError::DataSource`](crate::RenderError::DataSource) when
	/// the product backend fails.
	pub async fn render(
		&self,
		config: &TableConfiguration,
		args: &RuntimeArgs,
		request: &RequestContext,
	) -> Result<String> {
		let fetched = self.fetch(config, args, request).await?;
		let scope = match &self.scope_suffix {
			Some(suffix) => TableScope::with_suffix(&config.id, suffix),
			None => TableScope::new(&config.id),
		};
		let css = StyleCompiler::new(&scope).compile(config);
		let style = if css.is_empty() {
			Page::Empty
		} else {
			PageElement::new("style").child(Page::raw(css)).into()
		};

		let table = PageElement::new("table")
			.attr("class", classes::GRID)
			.child(self.header(config, fetched.layout))
			.child(
				PageElement::new("tbody")
					.attr("class", classes::BODY)
					.child(self.body_rows(config, &fetched)),
			);

		let root = PageElement::new("div")
			.attr("class", format!("{} {}", classes::ROOT, scope.class_name()))
			.attr("data-table-id", config.id.clone())
			.attr("data-page", fetched.result.page.to_string())
			.child(style)
			.child(self.toolbar(config, args, fetched.layout, fetched.cart))
			.child(table)
			.child(self.pagination(config, &fetched, request));

		tracing::debug!(
			table_id = %config.id,
			page = fetched.result.page,
			rows = fetched.result.rows.len(),
			"rendered product table"
		);
		Ok(Page::from(root).render_to_string())
	}

	/// Builds the query, fetches the page and resolves the per-render layout.
	pub(crate) async fn fetch(
		&self,
		config: &TableConfiguration,
		args: &RuntimeArgs,
		request: &RequestContext,
	) -> Result<FetchedPage> {
		let cart = CartBehavior::capture(&config.settings.cart);
		let layout = BulkSelectLayout::resolve(&config.settings.features.bulk_select);

		let on_sale = if config.source.source_type == SourceType::Sale {
			self.data_source.on_sale_ids().await?
		} else {
			Vec::new()
		};
		let mut builder = QueryBuilder::new(&config.source, &config.settings)
			.runtime(args)
			.on_sale_ids(&on_sale);
		if let Some(page) = request.ambient_page {
			builder = builder.ambient_page(page);
		}
		let query = builder.build();

		let result = if query.requests_nothing() {
			QueryResult::empty()
		} else {
			self.data_source.query(&query).await?
		};
		Ok(FetchedPage {
			result,
			layout,
			cart,
		})
	}

	/// Renders the `<tr>` elements of the body, or the empty-state row.
	pub(crate) fn body_rows(&self, config: &TableConfiguration, fetched: &FetchedPage) -> Page {
		let columns: Vec<&Column> = config.visible_columns().collect();
		if fetched.result.rows.is_empty() {
			return PageElement::new("tr")
				.attr("class", classes::EMPTY_ROW)
				.child(
					PageElement::new("td")
						.attr("colspan", fetched.layout.colspan(columns.len()).to_string())
						.child(self.labels.no_products.clone()),
				)
				.into();
		}

		Page::fragment(
			fetched
				.result
				.rows
				.iter()
				.map(|product| self.row(&columns, product, fetched.layout, fetched.cart)),
		)
	}

	/// Renders pagination links for the served page, if enabled.
	pub(crate) fn pagination(
		&self,
		config: &TableConfiguration,
		fetched: &FetchedPage,
		request: &RequestContext,
	) -> Page {
		if !config.settings.features.pagination {
			return Page::Empty;
		}
		PaginationRenderer::from_labels(&self.labels).render(
			fetched.result.page,
			fetched.result.total_pages,
			request.base_url(),
		)
	}

	fn row(
		&self,
		columns: &[&Column],
		product: &ProductRow,
		layout: BulkSelectLayout,
		cart: CartBehavior,
	) -> PageElement {
		let ctx = CellContext {
			cart,
			labels: &self.labels,
			button: ButtonState::resolve(product, cart),
		};
		let cells: Vec<Page> = columns
			.iter()
			.map(|column| {
				Page::from(
					PageElement::new("td")
						.attr("class", cell_class(column))
						.attr("data-column-type", column.column_type.clone())
						.child(self.cells.render(column, product, &ctx)),
				)
			})
			.collect();
		let cells = layout.place(cells, || {
			PageElement::new("td")
				.attr("class", classes::BULK_COLUMN)
				.child(
					PageElement::new("input")
						.attr("type", "checkbox")
						.attr("class", "vt-bulk-check")
						.attr("name", "vt_bulk[]")
						.attr("value", product.id.to_string())
						.attr(
							"aria-label",
							self.labels.select_row.replace("{name}", &product.name),
						)
						.bool_attr("disabled", !ctx.button.is_addable()),
				)
				.into()
		});

		PageElement::new("tr")
			.attr("class", classes::ROW)
			.attr("data-product-id", product.id.to_string())
			.children(cells)
	}

	fn header(&self, config: &TableConfiguration, layout: BulkSelectLayout) -> PageElement {
		let cells: Vec<Page> = config
			.visible_columns()
			.map(|column| {
				let heading = if column.advanced.show_heading {
					Page::text(column.heading.clone())
				} else {
					Page::Empty
				};
				Page::from(
					PageElement::new("th")
						.attr("class", cell_class(column))
						.attr("scope", "col")
						.child(heading),
				)
			})
			.collect();
		let cells = layout.place(cells, || {
			PageElement::new("th")
				.attr("class", classes::BULK_COLUMN)
				.attr("scope", "col")
				.child(
					PageElement::new("input")
						.attr("type", "checkbox")
						.attr("class", "vt-bulk-all")
						.attr("aria-label", self.labels.select_all.clone()),
				)
				.into()
		});
		PageElement::new("thead").child(PageElement::new("tr").children(cells))
	}

	fn toolbar(
		&self,
		config: &TableConfiguration,
		args: &RuntimeArgs,
		layout: BulkSelectLayout,
		cart: CartBehavior,
	) -> Page {
		let search = config.settings.features.search.then(|| {
			PageElement::new("form")
				.attr("class", "vt-search")
				.attr("role", "search")
				.attr("method", "get")
				.child(
					PageElement::new("input")
						.attr("type", "search")
						.attr("name", SEARCH_PARAM)
						.attr("value", args.search().unwrap_or_default().to_string())
						.attr("placeholder", self.labels.search_placeholder.clone())
						.attr("aria-label", self.labels.search_placeholder.clone()),
				)
				.child(
					PageElement::new("button")
						.attr("type", "submit")
						.attr("class", classes::BUTTON)
						.child(self.labels.search_button.clone()),
				)
		});
		let add_selected = (layout.is_enabled() && cart.enabled).then(|| {
			PageElement::new("button")
				.attr("type", "button")
				.attr("class", format!("{} vt-add-selected", classes::BUTTON))
				.attr("data-table-id", config.id.clone())
				.child(self.labels.add_selected.clone())
		});
		if search.is_none() && add_selected.is_none() {
			return Page::Empty;
		}
		PageElement::new("div")
			.attr("class", classes::TOOLBAR)
			.child(search)
			.child(add_selected)
			.into()
	}
}

fn cell_class(column: &Column) -> String {
	let mut class = classes::column_class(&column.id);
	match column.advanced.visibility {
		Visibility::Desktop => {
			class.push(' ');
			class.push_str(classes::DESKTOP_ONLY);
		}
		Visibility::Mobile => {
			class.push(' ');
			class.push_str(classes::MOBILE_ONLY);
		}
		Visibility::All | Visibility::Hidden => {}
	}
	class
}
