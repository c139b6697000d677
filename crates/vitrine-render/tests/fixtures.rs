//! Common test fixtures for vitrine-render tests

#![allow(dead_code)]

use rstest::*;
use std::collections::BTreeMap;
use std::sync::Arc;
use vitrine_query::InMemoryDataSource;
use vitrine_render::TableRenderer;
use vitrine_types::{
	AttributeOption, BulkPosition, Column, ProductKind, ProductRow, Source, TableConfiguration,
	Variation, VariationAttribute,
};

/// Scope suffix pinned by [`renderer`].
pub const SCOPE_SUFFIX: &str = "test0001";

/// Fixture providing a small catalog with one product of each kind.
#[fixture]
pub fn catalog() -> InMemoryDataSource {
	let mut shirt = ProductRow::new(105, "T-shirt")
		.with_kind(ProductKind::Variable)
		.with_price(20.0);
	shirt.attributes = vec![VariationAttribute {
		name: "pa_size".to_string(),
		label: "Size".to_string(),
		taxonomy: true,
		options: vec![
			AttributeOption {
				slug: "s".to_string(),
				term_name: Some("Small".to_string()),
			},
			AttributeOption {
				slug: "m".to_string(),
				term_name: Some("Medium".to_string()),
			},
		],
	}];
	shirt.variations = vec![Variation {
		id: 1051,
		attributes: BTreeMap::from([("pa_size".to_string(), "s".to_string())]),
		price_html: "<span class=\"amount\">20.00</span>".to_string(),
		in_stock: true,
		purchasable: true,
	}];

	InMemoryDataSource::new([
		ProductRow::new(101, "Blue Mug").with_price(12.0),
		ProductRow::new(102, "Teapot").with_price(40.0),
		ProductRow::new(103, "Gift Box").with_kind(ProductKind::Grouped),
		ProductRow::new(104, "Travel Guide")
			.with_external("https://partner.example/guide", Some("Buy at partner")),
		shirt,
	])
}

/// Fixture providing a catalog of 45 plain products (ids 1..=45).
#[fixture]
pub fn paged_catalog() -> InMemoryDataSource {
	InMemoryDataSource::new((1..=45).map(|id| ProductRow::new(id, format!("Product {id}"))))
}

/// Creates a renderer over `catalog` with a pinned scope suffix.
pub fn renderer(catalog: InMemoryDataSource) -> TableRenderer {
	TableRenderer::new(Arc::new(catalog)).with_scope_suffix(SCOPE_SUFFIX)
}

/// Creates the image/name/price/button table over the given ids.
pub fn table(ids: &[u64], bulk: Option<BulkPosition>) -> TableConfiguration {
	let mut config = TableConfiguration::new("scenario");
	config.source = Source::specific(ids.iter().copied());
	config.columns = vec![
		Column::new("img", "image", "Image"),
		Column::new("name", "name", "Product"),
		Column::new("price", "price", "Price"),
		Column::new("buy", "button", "Buy"),
	];
	if let Some(position) = bulk {
		config.settings.features.bulk_select.enabled = true;
		config.settings.features.bulk_select.position = position;
	}
	config
}

/// Returns the text between the first `open` and the following `close`.
pub fn section<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
	let start = html.find(open).map(|i| i + open.len()).unwrap_or(html.len());
	let rest = &html[start..];
	let end = rest.find(close).unwrap_or(rest.len());
	&rest[..end]
}

/// Returns the class attribute of every `<tag class="...">` in `html`.
pub fn cell_classes(html: &str, tag: &str) -> Vec<String> {
	let marker = format!("<{tag} class=\"");
	html.match_indices(&marker)
		.map(|(i, _)| {
			let rest = &html[i + marker.len()..];
			rest[..rest.find('"').unwrap_or(rest.len())].to_string()
		})
		.collect()
}

/// Splits body markup into its product rows.
pub fn body_rows(tbody: &str) -> Vec<&str> {
	tbody
		.split("<tr class=\"vt-row\"")
		.skip(1)
		.collect()
}

/// Index of the bulk-select cell among `classes`.
pub fn bulk_index(classes: &[String]) -> Option<usize> {
	classes.iter().position(|class| class == "vt-bulk-column")
}
