//! Product catalog file for the in-memory data source.

use crate::error::{Result, ServerError};
use serde::Deserialize;
use std::path::Path;
use vitrine_types::ProductRow;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
	Wrapped { products: Vec<ProductRow> },
	Bare(Vec<ProductRow>),
}

/// Parses a JSON catalog: `{"products": [...]}` or a bare array.
pub fn parse_catalog(input: &str) -> Result<Vec<ProductRow>> {
	let document: CatalogDocument =
		serde_json::from_str(input).map_err(|error| ServerError::Catalog(error.to_string()))?;
	Ok(match document {
		CatalogDocument::Wrapped { products } | CatalogDocument::Bare(products) => products,
	})
}

/// Reads and parses a JSON catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<ProductRow>> {
	let path = path.as_ref();
	let products = parse_catalog(&std::fs::read_to_string(path)?)?;
	tracing::info!(path = %path.display(), products = products.len(), "loaded product catalog");
	Ok(products)
}
