//! Request handling for the two service endpoints.

use crate::cart::{CartLine, CartService};
use crate::error::{ApiError, json_response};
use bytes::Bytes;
use http_body_util::Full;
use hyper::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use vitrine_conf::TableStore;
use vitrine_render::{AjaxResponse, AjaxResponseBuilder, RequestContext, TableRenderer};
use vitrine_types::RuntimeArgs;
use vitrine_types::lenient::string_id;

/// Path of the partial table render endpoint.
pub const ROWS_PATH: &str = "/tables/rows";

/// Path of the batch add-to-cart endpoint.
pub const CART_BATCH_PATH: &str = "/cart/batch";

/// Body of `POST /tables/rows`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RowsRequest {
	#[serde(deserialize_with = "string_id")]
	pub table_id: String,
	pub search_term: Option<String>,
	pub page_number: Option<u32>,
	/// URL of the page showing the table, used as the pagination base.
	pub page_url: Option<String>,
}

/// One entry of `POST /cart/batch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchItem {
	pub product_id: u64,
	pub quantity: i64,
	pub variation_id: Option<u64>,
	pub attributes: BTreeMap<String, String>,
}

impl Default for BatchItem {
	fn default() -> Self {
		Self {
			product_id: 0,
			quantity: 1,
			variation_id: None,
			attributes: BTreeMap::new(),
		}
	}
}

/// Body of `POST /cart/batch`.
///
/// On the wire the items come either as a bare array or wrapped in
/// `{"items": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchRequest {
	pub items: Vec<BatchItem>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BatchBody {
	Items(Vec<BatchItem>),
	Wrapped(BatchRequest),
}

impl BatchRequest {
	/// Parses either accepted body shape.
	pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
		Ok(match serde_json::from_slice(body)? {
			BatchBody::Items(items) => Self { items },
			BatchBody::Wrapped(request) => request,
		})
	}
}

/// Outcome of one batch entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItemResult {
	pub product_id: u64,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub variation_id: Option<u64>,
	pub success: bool,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub message: Option<String>,
}

/// Response of `POST /cart/batch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
	pub results: Vec<BatchItemResult>,
	pub added: usize,
	pub failed: usize,
}

/// The service: routes requests to the renderer and the cart.
pub struct VitrineApp {
	renderer: Arc<TableRenderer>,
	tables: Arc<dyn TableStore>,
	cart: Arc<dyn CartService>,
	page_url: Option<String>,
}

impl VitrineApp {
	/// Creates the service.
	pub fn new(
		renderer: Arc<TableRenderer>,
		tables: Arc<dyn TableStore>,
		cart: Arc<dyn CartService>,
	) -> Self {
		Self {
			renderer,
			tables,
			cart,
			page_url: None,
		}
	}

	/// Sets the pagination base used when a request carries no page URL.
	pub fn with_page_url(mut self, page_url: Option<String>) -> Self {
		self.page_url = page_url.filter(|url| !url.trim().is_empty());
		self
	}

	/// Answers one request.
	pub async fn handle(&self, method: &Method, path: &str, body: Bytes) -> hyper::Response<Full<Bytes>> {
		let is_post = *method == Method::POST;
		let result = match path {
			ROWS_PATH if is_post => self
				.rows(&body)
				.await
				.map(|rows| json_response(StatusCode::OK, &rows)),
			CART_BATCH_PATH if is_post => self
				.cart_batch(&body)
				.await
				.map(|batch| json_response(StatusCode::OK, &batch)),
			ROWS_PATH | CART_BATCH_PATH => Err(ApiError::MethodNotAllowed),
			_ => Err(ApiError::NotFound(format!("no route for {path}"))),
		};
		match result {
			Ok(response) => response,
			Err(error) => {
				tracing::debug!(%method, path, status = %error.status(), %error, "request failed");
				error.into_response()
			}
		}
	}

	/// Renders the rows and pagination of one table.
	pub async fn rows(&self, body: &[u8]) -> Result<AjaxResponse, ApiError> {
		let request: RowsRequest = serde_json::from_slice(body)?;
		let config = self
			.tables
			.table(&request.table_id)
			.ok_or_else(|| ApiError::NotFound(format!("unknown table: {}", request.table_id)))?;

		let args = RuntimeArgs {
			search_term: request.search_term,
			page_number: request.page_number,
		};
		let mut context = RequestContext::new();
		context.page_url = request.page_url;
		context.ambient_url = self.page_url.clone();

		Ok(AjaxResponseBuilder::new(&self.renderer)
			.build(&config, &args, &context)
			.await?)
	}

	/// Attempts every item of a batch independently.
	pub async fn cart_batch(&self, body: &[u8]) -> Result<BatchResponse, ApiError> {
		let request = BatchRequest::from_slice(body)?;
		let mut response = BatchResponse::default();

		for item in request.items {
			let outcome = match u64::try_from(item.quantity) {
				_ if item.product_id == 0 => Err("missing product id".to_string()),
				Ok(quantity) if quantity >= 1 => {
					let line = CartLine {
						product_id: item.product_id,
						quantity,
						variation_id: item.variation_id,
						attributes: item.attributes,
					};
					self.cart.add(&line).await.map_err(|error| error.to_string())
				}
				_ => Err(format!("invalid quantity: {}", item.quantity)),
			};

			let success = outcome.is_ok();
			if success {
				response.added += 1;
			} else {
				response.failed += 1;
			}
			response.results.push(BatchItemResult {
				product_id: item.product_id,
				variation_id: item.variation_id,
				success,
				message: outcome.err(),
			});
		}

		tracing::info!(added = response.added, failed = response.failed, "processed cart batch");
		Ok(response)
	}
}
