//! Shared helpers for cross-crate Vitrine tests.
//!
//! The kitchen catalog and table are used by every scenario: three products,
//! one of them out of stock, and a table over two of them with a trailing
//! bulk-select column and one hidden column.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use serde_json::{Value, json};
use vitrine::{ProductRow, TableConfiguration, TableRegistry};

/// Products of the kitchen catalog. 101 is out of stock.
pub fn kitchen_products() -> Vec<ProductRow> {
	vec![
		ProductRow::new(101, "Blue Mug").with_price(12.0).out_of_stock(),
		ProductRow::new(102, "Teapot").with_price(40.0),
		ProductRow::new(103, "Kettle").with_price(55.0),
	]
}

/// The kitchen table as authored: IDs as a comma list, `sku` hidden.
pub fn kitchen_table_json() -> Value {
	json!({
		"id": "kitchen",
		"source": {"type": "specific", "queryArgs": {"postIds": "101, 102"}},
		"columns": [
			{"id": "image", "type": "image", "heading": "Image"},
			{"id": "name", "type": "name", "heading": "Product"},
			{"id": "price", "type": "price", "heading": "Price"},
			{"id": "button", "type": "button", "heading": ""},
			{"id": "sku", "type": "sku", "heading": "SKU", "advanced": {"visibility": "none"}}
		],
		"settings": {"features": {"bulkSelect": {"enabled": true, "position": "last"}}}
	})
}

/// Parses [`kitchen_table_json`].
pub fn kitchen_table() -> serde_json::Result<TableConfiguration> {
	serde_json::from_value(kitchen_table_json())
}

/// A registry holding the kitchen table, loaded from a table file body.
pub fn kitchen_registry() -> vitrine::conf::Result<TableRegistry> {
	TableRegistry::from_json_str(&json!({"tables": [kitchen_table_json()]}).to_string())
}

/// Returns the text between the first `open` and the following `close`.
pub fn between<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
	let start = html.find(open).map_or(html.len(), |i| i + open.len());
	let rest = &html[start..];
	&rest[..rest.find(close).unwrap_or(rest.len())]
}

/// Class attributes of every `<tag class="...">` in `html`, in order.
pub fn cell_classes(html: &str, tag: &str) -> Vec<String> {
	let marker = format!("<{tag} class=\"");
	html.match_indices(&marker)
		.map(|(i, _)| {
			let rest = &html[i + marker.len()..];
			rest[..rest.find('"').unwrap_or(rest.len())].to_string()
		})
		.collect()
}

/// Status and JSON body of a service response. A non-JSON body is `Null`.
pub async fn response_json(response: hyper::Response<Full<Bytes>>) -> (u16, Value) {
	let status = response.status().as_u16();
	let bytes = match response.into_body().collect().await {
		Ok(collected) => collected.to_bytes(),
		Err(never) => match never {},
	};
	(status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
