
use async_trait::async_trait;
use bytes::Bytes;
use fixtures::*;
use hyper::Method;
use hyper::header::ALLOW;
use rstest::*;
use serde_json::json;
use std::sync::Arc;
use vitrine_query::{
	DataSourceError, DataSourceResult, ProductDataSource, QueryDescriptor, QueryResult,
};
use vitrine_render::TableRenderer;
use vitrine_server::{BatchResponse, CART_BATCH_PATH, InMemoryCart, ROWS_PATH, VitrineApp};

fn body(value: serde_json::Value) -> Bytes {
	Bytes::from(value.to_string())
}

#[rstest]
#[tokio::test]
async fn test_rows_for_a_single_page_table(test_app: TestApp) {
	let response = test_app
		.app
		.handle(&Method::POST, ROWS_PATH, body(json!({"tableId": "mugs"})))
		.await;
	let (status, json) = json_body(response).await;

	assert_eq!(status, 200);
	let rows = json["rowsMarkup"].as_str().unwrap();
	assert_eq!(rows.matches("<tr class=\"vt-row\"").count(), 3);
	assert!(rows.contains("vt-out-of-stock"));
	assert!(rows.contains("vt-view-options"));
	assert_eq!(json["paginationMarkup"], "");
}

#[rstest]
#[tokio::test]
async fn test_rows_page_and_page_url(test_app: TestApp) {
	let response = test_app
		.app
		.handle(
			&Method::POST,
			ROWS_PATH,
			body(json!({"tableId": "all", "pageNumber": 2, "pageUrl": "/shop/?vt_page=1"})),
		)
		.await;
	let (status, json) = json_body(response).await;

	assert_eq!(status, 200);
	let pagination = json["paginationMarkup"].as_str().unwrap();
	assert!(pagination.contains(r#"data-url-template="/shop/?vt_page=%#%""#));
	assert!(pagination.contains(r#"aria-current="page">2</span>"#));
	assert!(pagination.contains(r#"data-total-pages="3""#));
	assert_eq!(
		json["rowsMarkup"]
			.as_str()
			.unwrap()
			.matches("<tr class=\"vt-row\"")
			.count(),
		1
	);
}

#[rstest]
#[tokio::test]
async fn test_configured_page_url_is_the_fallback(products: Vec<vitrine_types::ProductRow>) {
	let renderer = TableRenderer::new(Arc::new(vitrine_query::InMemoryDataSource::new(products)));
	let app = VitrineApp::new(
		Arc::new(renderer),
		Arc::new(tables()),
		Arc::new(InMemoryCart::new()),
	)
	.with_page_url(Some("/catalog/".to_string()));

	let (_, json) = json_body(
		app.handle(&Method::POST, ROWS_PATH, body(json!({"tableId": "all"})))
			.await,
	)
	.await;
	assert!(
		json["paginationMarkup"]
			.as_str()
			.unwrap()
			.contains(r#"data-url-template="/catalog/?vt_page=%#%""#)
	);
}

#[rstest]
#[case(Method::POST, ROWS_PATH, r#"{"tableId": "nope"}"#, 404, Some("unknown table: nope"))]
#[case(Method::POST, ROWS_PATH, r#"{"tableId": "#, 400, None)]
#[case(Method::POST, CART_BATCH_PATH, r#"{"items": 3}"#, 400, None)]
#[case(Method::POST, "/tables", "{}", 404, Some("no route for /tables"))]
#[tokio::test]
async fn test_error_responses(
	test_app: TestApp,
	#[case] method: Method,
	#[case] path: &str,
	#[case] request: &'static str,
	#[case] expected_status: u16,
	#[case] expected_error: Option<&str>,
) {
	let response = test_app
		.app
		.handle(&method, path, Bytes::from_static(request.as_bytes()))
		.await;
	let (status, json) = json_body(response).await;

	assert_eq!(status, expected_status);
	let error = json["error"].as_str().unwrap();
	if let Some(expected) = expected_error {
		assert_eq!(error, expected);
	}
}

#[rstest]
#[case(Method::GET, ROWS_PATH)]
#[case(Method::DELETE, CART_BATCH_PATH)]
#[tokio::test]
async fn test_wrong_method(test_app: TestApp, #[case] method: Method, #[case] path: &str) {
	let response = test_app.app.handle(&method, path, Bytes::new()).await;
	assert_eq!(response.headers()[ALLOW], "POST");
	let (status, json) = json_body(response).await;
	assert_eq!(status, 405);
	assert_eq!(json["error"], "method not allowed");
}

#[rstest]
#[tokio::test]
async fn test_cart_batch_attempts_items_independently(test_app: TestApp) {
	let request = json!({"items": [
		{"productId": 101, "quantity": 2},
		{"productId": 102, "quantity": 1},
		{"productId": 0, "quantity": 1},
		{"productId": 101, "quantity": 0},
		{"productId": 101, "quantity": -3},
		{"productId": 103},
		{"productId": 101}
	]});
	let response = test_app
		.app
		.handle(&Method::POST, CART_BATCH_PATH, body(request))
		.await;
	let (status, json) = json_body(response).await;
	assert_eq!(status, 200);

	let batch: BatchResponse = serde_json::from_value(json).unwrap();
	let outcomes: Vec<bool> = batch.results.iter().map(|result| result.success).collect();
	assert_eq!(outcomes, vec![true, false, false, false, false, false, true]);
	assert_eq!(batch.added, 2);
	assert_eq!(batch.failed, 5);
	assert_eq!(batch.results[1].message.as_deref(), Some("product 102 is out of stock"));
	assert_eq!(batch.results[2].message.as_deref(), Some("missing product id"));
	assert_eq!(batch.results[3].message.as_deref(), Some("invalid quantity: 0"));
	assert!(batch.results[0].message.is_none());

	// Locally rejected items never reach the cart service.
	assert_eq!(test_app.cart.calls(), 4);
	let lines = test_app.cart.inner.lines();
	assert_eq!(lines.len(), 2);
	assert_eq!(lines[0].quantity, 2);
	assert_eq!(lines[1].quantity, 1);
}

#[rstest]
#[case(json!([{"productId": 101, "quantity": 1}, {"productId": 102}]))]
#[case(json!({"items": [{"productId": 101, "quantity": 1}, {"productId": 102}]}))]
#[tokio::test]
async fn test_cart_batch_body_shapes(test_app: TestApp, #[case] request: serde_json::Value) {
	let response = test_app
		.app
		.handle(&Method::POST, CART_BATCH_PATH, body(request))
		.await;
	let (status, json) = json_body(response).await;

	assert_eq!(status, 200);
	assert_eq!(json["added"], 1);
	assert_eq!(json["failed"], 1);
	assert_eq!(json["results"][0]["productId"], 101);
	assert_eq!(json["results"][1]["success"], false);
}

#[rstest]
#[tokio::test]
async fn test_variation_and_attributes_reach_the_cart() {
	let cart = Arc::new(InMemoryCart::new());
	let renderer = TableRenderer::new(Arc::new(vitrine_query::InMemoryDataSource::default()));
	let app = VitrineApp::new(Arc::new(renderer), Arc::new(tables()), cart.clone());

	let request = json!({"items": [{"productId": 5, "quantity": 1, "variationId": 51, "attributes": {"attribute_pa_size": "s"}}]});
	let (_, json) = json_body(app.handle(&Method::POST, CART_BATCH_PATH, body(request)).await).await;
	assert_eq!(json["results"][0]["variationId"], 51);

	let lines = cart.lines();
	assert_eq!(lines[0].variation_id, Some(51));
	assert_eq!(lines[0].attributes["attribute_pa_size"], "s");
}

struct BrokenCatalog;

#[async_trait]
impl ProductDataSource for BrokenCatalog {
	async fn query(&self, _query: &QueryDescriptor) -> DataSourceResult<QueryResult> {
		Err(DataSourceError::Backend("timeout".to_string()))
	}

	async fn on_sale_ids(&self) -> DataSourceResult<Vec<u64>> {
		Ok(Vec::new())
	}
}

#[rstest]
#[tokio::test]
async fn test_data_source_failure_is_a_server_error() {
	let app = VitrineApp::new(
		Arc::new(TableRenderer::new(Arc::new(BrokenCatalog))),
		Arc::new(tables()),
		Arc::new(InMemoryCart::new()),
	);
	let (status, json) = json_body(
		app.handle(&Method::POST, ROWS_PATH, body(json!({"tableId": "mugs"})))
			.await,
	)
	.await;
	assert_eq!(status, 500);
	assert_eq!(json["error"], "failed to render table");
}
