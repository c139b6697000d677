//! End-to-end table scenarios through the public facade.

use rstest::*;
use std::sync::Arc;
use vitrine::prelude::*;
use vitrine::query::Restriction;
use vitrine_integration_tests::{between, cell_classes, kitchen_products, kitchen_table};

#[fixture]
fn kitchen() -> TableConfiguration {
	kitchen_table().unwrap()
}

#[fixture]
fn renderer() -> TableRenderer {
	let catalog = InMemoryDataSource::new(kitchen_products());
	TableRenderer::new(Arc::new(catalog)).with_scope_suffix("scenario")
}

#[rstest]
#[tokio::test]
async fn test_specific_products_with_trailing_bulk_column(
	kitchen: TableConfiguration,
	renderer: TableRenderer,
) {
	let html = renderer
		.render(&kitchen, &RuntimeArgs::new(), &RequestContext::new())
		.await
		.unwrap();

	let header = cell_classes(between(&html, "<thead>", "</thead>"), "th");
	assert_eq!(header.len(), 5);
	assert_eq!(header.last().map(String::as_str), Some("vt-bulk-column"));
	assert!(!html.contains("vt-col-sku"));

	let body = between(&html, "<tbody class=\"vt-body\">", "</tbody>");
	let rows: Vec<&str> = body.split("<tr class=\"vt-row\"").skip(1).collect();
	assert_eq!(rows.len(), 2);
	assert!(rows[0].starts_with(r#" data-product-id="101""#));
	assert!(rows[1].starts_with(r#" data-product-id="102""#));
	for row in &rows {
		let row_cells = cell_classes(row, "td");
		assert_eq!(row_cells.len(), 5);
		assert_eq!(row_cells.last().map(String::as_str), Some("vt-bulk-column"));
	}

	assert!(rows[0].contains(
		r#"<button type="button" class="vt-button vt-out-of-stock" disabled="disabled">Out of stock</button>"#
	));
	assert!(between(rows[0], "vt-bulk-check", "/>").contains(r#"disabled="disabled""#));
	assert!(!between(rows[1], "vt-bulk-check", "/>").contains("disabled"));
	assert!(rows[1].contains(r#"name="add-to-cart" value="102""#));
}

#[rstest]
#[case(true, 5)]
#[case(false, 4)]
#[tokio::test]
async fn test_empty_specific_list_renders_the_empty_state(
	mut kitchen: TableConfiguration,
	renderer: TableRenderer,
	#[case] bulk: bool,
	#[case] colspan: usize,
) {
	kitchen.source = Source::specific([]);
	kitchen.settings.features.bulk_select.enabled = bulk;

	let html = renderer
		.render(&kitchen, &RuntimeArgs::new(), &RequestContext::new())
		.await
		.unwrap();
	let body = between(&html, "<tbody class=\"vt-body\">", "</tbody>");
	assert_eq!(
		body,
		format!(r#"<tr class="vt-empty"><td colspan="{colspan}">No products found.</td></tr>"#)
	);
}

#[rstest]
#[case(SourceType::Specific)]
#[case(SourceType::Category)]
fn test_empty_selection_never_widens_to_all(#[case] source_type: SourceType) {
	let source = Source::new(source_type);
	let query = vitrine::QueryBuilder::new(&source, &vitrine::Settings::default()).build();
	assert_eq!(query.restriction, Restriction::Nothing);
	assert!(query.requests_nothing());
}

#[rstest]
#[tokio::test]
async fn test_search_narrows_the_selection(kitchen: TableConfiguration, renderer: TableRenderer) {
	let ajax = AjaxResponseBuilder::new(&renderer)
		.build(
			&kitchen,
			&RuntimeArgs::new().with_search("kettle"),
			&RequestContext::new(),
		)
		.await
		.unwrap();
	assert!(ajax.rows_markup.contains("No products found."));
}
