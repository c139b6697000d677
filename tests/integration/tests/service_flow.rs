//! A table file, a catalog and the service wired together.

use bytes::Bytes;
use hyper::Method;
use rstest::*;
use serde_json::json;
use std::sync::Arc;
use vitrine::server::{CART_BATCH_PATH, ROWS_PATH};
use vitrine::{InMemoryCart, InMemoryDataSource, TableRenderer, TableStore, VitrineApp};
use vitrine_integration_tests::{kitchen_products, kitchen_registry, kitchen_table, response_json};

#[fixture]
fn app() -> VitrineApp {
	let renderer = TableRenderer::new(Arc::new(InMemoryDataSource::new(kitchen_products())));
	VitrineApp::new(
		Arc::new(renderer),
		Arc::new(kitchen_registry().unwrap()),
		Arc::new(InMemoryCart::with_products(kitchen_products())),
	)
}

#[rstest]
fn test_table_file_matches_the_authored_table() {
	let registry = kitchen_registry().unwrap();
	assert_eq!(registry.table_ids(), vec!["kitchen".to_string()]);
	assert_eq!(registry.table("kitchen"), Some(kitchen_table().unwrap()));
}

#[rstest]
#[tokio::test]
async fn test_rows_then_bulk_add(app: VitrineApp) {
	let request = json!({"tableId": "kitchen", "pageUrl": "/kitchen/"});
	let (status, rows) = response_json(
		app.handle(&Method::POST, ROWS_PATH, Bytes::from(request.to_string()))
			.await,
	)
	.await;
	assert_eq!(status, 200);
	let markup = rows["rowsMarkup"].as_str().unwrap();
	assert_eq!(markup.matches("<tr class=\"vt-row\"").count(), 2);
	assert_eq!(rows["paginationMarkup"], "");

	// Only the enabled checkboxes are submitted by the toolbar button.
	let selected: Vec<u64> = [101, 102]
		.into_iter()
		.filter(|id| {
			let marker = format!(r#"class="vt-bulk-check" name="vt_bulk[]" value="{id}""#);
			markup
				.split(&marker)
				.nth(1)
				.and_then(|rest| rest.split("/>").next())
				.is_some_and(|attrs| !attrs.contains("disabled"))
		})
		.collect();
	assert_eq!(selected, vec![102]);

	let batch: Vec<_> = [101, 102]
		.iter()
		.map(|id| json!({"productId": id, "quantity": 1}))
		.collect();
	let (status, result) = response_json(
		app.handle(
			&Method::POST,
			CART_BATCH_PATH,
			Bytes::from(json!(batch).to_string()),
		)
		.await,
	)
	.await;
	assert_eq!(status, 200);
	assert_eq!(result["added"], 1);
	assert_eq!(result["results"][0]["success"], false);
	assert_eq!(result["results"][0]["message"], "product 101 is out of stock");
	assert_eq!(result["results"][1]["success"], true);
}
