//! Column cell renderers.

use crate::button::render_button;
use crate::context::CellContext;
use std::collections::HashMap;
use std::fmt;
use vitrine_markup::{Page, PageElement, safe_href, strip_tags, trim_words};
use vitrine_style::classes;
use vitrine_types::{Column, ProductRow, StockStatus, column::kinds};

/// Words kept by the summary column.
pub const SUMMARY_WORDS: usize = 10;

/// Renders one column of one product row.
///
/// Implementations are pure: the same column, product and context always
/// produce the same markup.
pub trait CellRenderer: Send + Sync {
	/// Renders the content of the cell (without the surrounding `<td>`).
	fn render(&self, column: &Column, product: &ProductRow, ctx: &CellContext<'_>) -> Page;
}

impl<F> CellRenderer for F
where
	F: Fn(&Column, &ProductRow, &CellContext<'_>) -> Page + Send + Sync,
{
	fn render(&self, column: &Column, product: &ProductRow, ctx: &CellContext<'_>) -> Page {
		self(column, product, ctx)
	}
}

/// Product image, optionally linked to the product page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCell;

impl CellRenderer for ImageCell {
	fn render(&self, column: &Column, product: &ProductRow, _ctx: &CellContext<'_>) -> Page {
		let Some(image) = &product.image else {
			return Page::Empty;
		};
		let Some(src) = image.source(column.settings.image_size()) else {
			return Page::Empty;
		};
		let alt = if image.alt.is_empty() {
			product.name.clone()
		} else {
			image.alt.clone()
		};
		let img = PageElement::new("img")
			.attr("class", "vt-image")
			.attr("src", safe_href(src))
			.attr("alt", alt)
			.attr("loading", "lazy");

		if column.settings.link_to_product {
			PageElement::new("a")
				.attr("href", safe_href(&product.permalink))
				.child(img)
				.into()
		} else {
			img.into()
		}
	}
}

/// Product name linked to the product page.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameCell;

impl CellRenderer for NameCell {
	fn render(&self, _column: &Column, product: &ProductRow, _ctx: &CellContext<'_>) -> Page {
		PageElement::new("a")
			.attr("class", "vt-name")
			.attr("href", safe_href(&product.permalink))
			.child(product.name.clone())
			.into()
	}
}

/// Price markup as supplied by the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceCell;

impl CellRenderer for PriceCell {
	fn render(&self, _column: &Column, product: &ProductRow, _ctx: &CellContext<'_>) -> Page {
		PageElement::new("span")
			.attr("class", classes::PRICE)
			.child(Page::raw(product.price_html.clone()))
			.into()
	}
}

/// Stock keeping unit as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkuCell;

impl CellRenderer for SkuCell {
	fn render(&self, _column: &Column, product: &ProductRow, _ctx: &CellContext<'_>) -> Page {
		match product.sku.as_deref().filter(|sku| !sku.is_empty()) {
			Some(sku) => Page::text(sku.to_string()),
			None => Page::Empty,
		}
	}
}

/// Stock status badge.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockCell;

impl CellRenderer for StockCell {
	fn render(&self, _column: &Column, product: &ProductRow, ctx: &CellContext<'_>) -> Page {
		let stock = &product.stock;
		let (modifier, text) = match stock.status {
			_ if !stock.is_in_stock() => ("outofstock", ctx.labels.out_of_stock.clone()),
			StockStatus::OutOfStock => ("outofstock", ctx.labels.out_of_stock.clone()),
			StockStatus::OnBackorder => ("onbackorder", ctx.labels.on_backorder.clone()),
			StockStatus::InStock => match stock.quantity.filter(|_| stock.managed) {
				Some(count) if count > 0 => (
					"instock",
					ctx.labels
						.in_stock_count
						.replace("{count}", &count.to_string()),
				),
				_ => ("instock", ctx.labels.in_stock.clone()),
			},
		};
		PageElement::new("span")
			.attr("class", format!("vt-stock vt-stock--{modifier}"))
			.child(text)
			.into()
	}
}

/// Short description, stripped of markup and trimmed to [`SUMMARY_WORDS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryCell;

impl CellRenderer for SummaryCell {
	fn render(&self, _column: &Column, product: &ProductRow, _ctx: &CellContext<'_>) -> Page {
		let summary = trim_words(&strip_tags(&product.summary), SUMMARY_WORDS);
		if summary.is_empty() {
			Page::Empty
		} else {
			Page::text(summary)
		}
	}
}

/// Purchase controls, see [`crate::button`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonCell;

impl CellRenderer for ButtonCell {
	fn render(&self, _column: &Column, product: &ProductRow, ctx: &CellContext<'_>) -> Page {
		render_button(product, ctx)
	}
}

/// Column type to renderer map.
///
/// Unknown column types render as empty cells.
///
/// # Examples
///
/// ```
/// use vitrine_markup::Page;
/// use vitrine_render::{CellRegistry, CellContext};
/// use vitrine_types::{Column, ProductRow};
///
/// let mut registry = CellRegistry::with_defaults();
/// registry.register("rating", |_: &Column, product: &ProductRow, _: &CellContext<'_>| {
///     Page::text(format!("{:.1}", product.average_rating))
/// });
/// assert!(registry.contains("rating"));
/// assert!(registry.contains("price"));
/// assert!(!registry.contains("weight"));
/// ```
pub struct CellRegistry {
	renderers: HashMap<String, Box<dyn CellRenderer>>,
}

impl CellRegistry {
	/// Creates a registry without any renderer.
	pub fn empty() -> Self {
		Self {
			renderers: HashMap::new(),
		}
	}

	/// Creates a registry with the built-in column types.
	pub fn with_defaults() -> Self {
		let mut registry = Self::empty();
		registry.register(kinds::IMAGE, ImageCell);
		registry.register(kinds::NAME, NameCell);
		registry.register(kinds::PRICE, PriceCell);
		registry.register(kinds::SKU, SkuCell);
		registry.register(kinds::STOCK, StockCell);
		registry.register(kinds::SUMMARY, SummaryCell);
		registry.register(kinds::BUTTON, ButtonCell);
		registry
	}

	/// Registers (or replaces) the renderer for `column_type`.
	pub fn register(&mut self, column_type: impl Into<String>, renderer: impl CellRenderer + 'static) {
		self.renderers.insert(column_type.into(), Box::new(renderer));
	}

	/// Returns whether a renderer exists for `column_type`.
	pub fn contains(&self, column_type: &str) -> bool {
		self.renderers.contains_key(column_type)
	}

	/// Renders the content of one cell.
	pub fn render(&self, column: &Column, product: &ProductRow, ctx: &CellContext<'_>) -> Page {
		match self.renderers.get(&column.column_type) {
			Some(renderer) => renderer.render(column, product, ctx),
			None => {
				tracing::debug!(column_type = %column.column_type, "no renderer for column type");
				Page::Empty
			}
		}
	}
}

impl Default for CellRegistry {
	fn default() -> Self {
		Self::with_defaults()
	}
}

impl fmt::Debug for CellRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut types: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
		types.sort_unstable();
		f.debug_struct("CellRegistry").field("types", &types).finish()
	}
}
