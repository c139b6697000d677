//! Read-only product snapshots handed to the renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog classification of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
	/// A single purchasable item.
	#[default]
	Simple,
	/// A product with purchasable variations.
	Variable,
	/// A collection of other products.
	Grouped,
	/// An affiliate product sold elsewhere.
	External,
	/// Any other classification; rendered like a simple product.
	#[serde(other)]
	Other,
}

/// Stock status of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
	#[default]
	#[serde(rename = "instock")]
	InStock,
	#[serde(rename = "outofstock")]
	OutOfStock,
	#[serde(rename = "onbackorder")]
	OnBackorder,
}

/// Stock facts of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockInfo {
	pub status: StockStatus,
	/// Whether stock quantity is tracked.
	pub managed: bool,
	/// Remaining quantity, when tracked.
	pub quantity: Option<i64>,
	pub backorders_allowed: bool,
}

impl StockInfo {
	/// Returns whether the product can currently be bought. Tracked stock
	/// that is used up counts as out of stock whatever the status says.
	pub fn is_in_stock(&self) -> bool {
		self.status != StockStatus::OutOfStock && self.purchase_limit() != Some(0)
	}

	/// Maximum quantity a customer may add, when stock is tracked and
	/// backorders are not allowed.
	pub fn purchase_limit(&self) -> Option<u64> {
		if self.managed && !self.backorders_allowed {
			Some(self.quantity.unwrap_or(0).max(0) as u64)
		} else {
			None
		}
	}
}

/// Product image with one source per size key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductImage {
	pub sources: BTreeMap<String, String>,
	pub alt: String,
}

impl ProductImage {
	/// Returns the source for `size`, falling back to `full` and then to any source.
	pub fn source(&self, size: &str) -> Option<&str> {
		self.sources
			.get(size)
			.or_else(|| self.sources.get("full"))
			.or_else(|| self.sources.values().next())
			.map(String::as_str)
	}
}

/// Destination of an external/affiliate product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalLink {
	pub url: String,
	pub button_text: Option<String>,
}

/// One selectable value of a variation attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeOption {
	/// Value as stored on variations.
	pub slug: String,
	/// Display name of the taxonomy term, when the attribute is taxonomy-backed.
	pub term_name: Option<String>,
}

/// An attribute customers choose when buying a variable product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariationAttribute {
	/// Attribute key (for example `pa_color`).
	pub name: String,
	/// Display label (for example `Color`).
	pub label: String,
	/// Whether option labels come from taxonomy terms.
	pub taxonomy: bool,
	pub options: Vec<AttributeOption>,
}

impl VariationAttribute {
	/// Returns the display label of `option` for this attribute.
	pub fn option_label<'a>(&self, option: &'a AttributeOption) -> &'a str {
		if self.taxonomy {
			option.term_name.as_deref().unwrap_or(&option.slug)
		} else {
			&option.slug
		}
	}
}

/// A purchasable variation of a variable product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variation {
	pub id: u64,
	/// Attribute key to option slug. An empty slug matches any option.
	pub attributes: BTreeMap<String, String>,
	pub price_html: String,
	pub in_stock: bool,
	pub purchasable: bool,
}

/// Read-only snapshot of one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRow {
	pub id: u64,
	pub name: String,
	pub permalink: String,
	pub kind: ProductKind,
	pub sku: Option<String>,
	/// Price as rich markup (sale prices, suffixes). Inserted without escaping.
	pub price_html: String,
	/// Active price used for filtering and ordering.
	pub price: f64,
	pub summary: String,
	pub image: Option<ProductImage>,
	pub stock: StockInfo,
	pub purchasable: bool,
	/// Product-specific add-to-cart label.
	pub add_to_cart_text: Option<String>,
	pub external: Option<ExternalLink>,
	pub attributes: Vec<VariationAttribute>,
	pub variations: Vec<Variation>,
	pub category_ids: Vec<u64>,
	pub on_sale: bool,
	/// Drafts and private products are `false`; queries only return published rows.
	pub published: bool,
	pub published_at: Option<DateTime<Utc>>,
	pub total_sales: u64,
	pub average_rating: f32,
	pub menu_order: i64,
}

impl Default for ProductRow {
	fn default() -> Self {
		Self {
			id: 0,
			name: String::new(),
			permalink: String::new(),
			kind: ProductKind::Simple,
			sku: None,
			price_html: String::new(),
			price: 0.0,
			summary: String::new(),
			image: None,
			stock: StockInfo::default(),
			purchasable: true,
			add_to_cart_text: None,
			external: None,
			attributes: Vec::new(),
			variations: Vec::new(),
			category_ids: Vec::new(),
			on_sale: false,
			published: true,
			published_at: None,
			total_sales: 0,
			average_rating: 0.0,
			menu_order: 0,
		}
	}
}

impl ProductRow {
	/// Creates an in-stock, purchasable simple product.
	pub fn new(id: u64, name: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
			permalink: format!("/product/{id}/"),
			..Self::default()
		}
	}

	/// Sets the classification.
	pub fn with_kind(mut self, kind: ProductKind) -> Self {
		self.kind = kind;
		self
	}

	/// Sets the price and a plain price markup.
	pub fn with_price(mut self, price: f64) -> Self {
		self.price = price;
		self.price_html = format!("<span class=\"amount\">{price:.2}</span>");
		self
	}

	/// Marks the product out of stock.
	pub fn out_of_stock(mut self) -> Self {
		self.stock.status = StockStatus::OutOfStock;
		self
	}

	/// Tracks stock with the given quantity and no backorders.
	pub fn with_stock_quantity(mut self, quantity: i64) -> Self {
		self.stock.managed = true;
		self.stock.quantity = Some(quantity);
		self.stock.backorders_allowed = false;
		self
	}

	/// Makes the product external with the given destination.
	pub fn with_external(mut self, url: impl Into<String>, text: Option<&str>) -> Self {
		self.kind = ProductKind::External;
		self.external = Some(ExternalLink {
			url: url.into(),
			button_text: text.map(str::to_string),
		});
		self
	}

	/// Returns whether the product is classified as having variations.
	pub fn has_variants(&self) -> bool {
		self.kind == ProductKind::Variable
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(false, false, Some(3), None)]
	#[case(true, true, Some(3), None)]
	#[case(true, false, Some(3), Some(3))]
	#[case(true, false, Some(-2), Some(0))]
	#[case(true, false, None, Some(0))]
	fn test_purchase_limit(
		#[case] managed: bool,
		#[case] backorders_allowed: bool,
		#[case] quantity: Option<i64>,
		#[case] expected: Option<u64>,
	) {
		let stock = StockInfo {
			status: StockStatus::InStock,
			managed,
			quantity,
			backorders_allowed,
		};
		assert_eq!(stock.purchase_limit(), expected);
	}

	#[rstest]
	#[case(StockStatus::InStock, false, None, true)]
	#[case(StockStatus::OnBackorder, false, None, true)]
	#[case(StockStatus::OutOfStock, false, None, false)]
	#[case(StockStatus::InStock, true, Some(1), true)]
	#[case(StockStatus::InStock, true, Some(0), false)]
	#[case(StockStatus::InStock, true, Some(-4), false)]
	#[case(StockStatus::InStock, true, None, false)]
	fn test_is_in_stock(
		#[case] status: StockStatus,
		#[case] managed: bool,
		#[case] quantity: Option<i64>,
		#[case] expected: bool,
	) {
		let stock = StockInfo {
			status,
			managed,
			quantity,
			backorders_allowed: false,
		};
		assert_eq!(stock.is_in_stock(), expected);
	}

	#[rstest]
	fn test_image_source_fallbacks() {
		let mut image = ProductImage::default();
		assert_eq!(image.source("thumbnail"), None);

		image
			.sources
			.insert("large".to_string(), "/l.jpg".to_string());
		assert_eq!(image.source("thumbnail"), Some("/l.jpg"));

		image
			.sources
			.insert("full".to_string(), "/f.jpg".to_string());
		assert_eq!(image.source("thumbnail"), Some("/f.jpg"));
		assert_eq!(image.source("large"), Some("/l.jpg"));
	}

	#[rstest]
	fn test_option_label_prefers_term_name_for_taxonomies() {
		let option = AttributeOption {
			slug: "deep-blue".to_string(),
			term_name: Some("Deep Blue".to_string()),
		};
		let mut attribute = VariationAttribute {
			name: "pa_color".to_string(),
			label: "Color".to_string(),
			taxonomy: true,
			options: vec![option.clone()],
		};
		assert_eq!(attribute.option_label(&option), "Deep Blue");

		attribute.taxonomy = false;
		assert_eq!(attribute.option_label(&option), "deep-blue");
	}

	#[rstest]
	fn test_unknown_kind_deserializes_as_other() {
		let row: ProductRow =
			serde_json::from_str(r#"{"id": 3, "name": "Gift card", "kind": "subscription"}"#)
				.unwrap();
		assert_eq!(row.kind, ProductKind::Other);
		assert!(row.purchasable);
		assert!(row.published);
	}
}
