//! Cart collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use vitrine_types::{ProductKind, ProductRow};

/// Why a line could not be added.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
	#[error("product {0} does not exist")]
	UnknownProduct(u64),

	#[error("product {0} cannot be purchased")]
	NotPurchasable(u64),

	#[error("product {0} is out of stock")]
	OutOfStock(u64),

	#[error("product {0} needs a variation")]
	VariationRequired(u64),

	#[error("variation {variation_id} does not belong to product {product_id}")]
	UnknownVariation { product_id: u64, variation_id: u64 },

	#[error("only {available} of product {product_id} can be added")]
	InsufficientStock { product_id: u64, available: u64 },

	#[error("cart backend failure: {0}")]
	Backend(String),
}

/// One add-to-cart request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartLine {
	pub product_id: u64,
	pub quantity: u64,
	pub variation_id: Option<u64>,
	/// Chosen attribute values, keyed like `attribute_pa_size`.
	pub attributes: BTreeMap<String, String>,
}

/// Adds lines to a shopper's cart.
#[async_trait]
pub trait CartService: Send + Sync {
	/// Adds one line. Each call succeeds or fails on its own.
	async fn add(&self, line: &CartLine) -> Result<(), CartError>;
}

/// Cart kept in memory, validating lines against a known catalog.
///
/// Without a catalog every line is accepted.
#[derive(Debug, Default)]
pub struct InMemoryCart {
	products: HashMap<u64, ProductRow>,
	lines: Mutex<Vec<CartLine>>,
}

impl InMemoryCart {
	/// Creates a cart accepting any line.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a cart that only accepts purchasable products of `catalog`.
	pub fn with_products(catalog: impl IntoIterator<Item = ProductRow>) -> Self {
		Self {
			products: catalog.into_iter().map(|product| (product.id, product)).collect(),
			lines: Mutex::new(Vec::new()),
		}
	}

	/// Returns a copy of the accepted lines.
	pub fn lines(&self) -> Vec<CartLine> {
		match self.lines.lock() {
			Ok(lines) => lines.clone(),
			Err(poisoned) => poisoned.into_inner().clone(),
		}
	}

	fn validate(&self, line: &CartLine) -> Result<(), CartError> {
		if self.products.is_empty() {
			return Ok(());
		}
		let product_id = line.product_id;
		let product = self
			.products
			.get(&product_id)
			.ok_or(CartError::UnknownProduct(product_id))?;

		if matches!(product.kind, ProductKind::External | ProductKind::Grouped)
			|| !product.purchasable
			|| !product.published
		{
			return Err(CartError::NotPurchasable(product_id));
		}
		if !product.stock.is_in_stock() {
			return Err(CartError::OutOfStock(product_id));
		}
		if product.has_variants() {
			let variation_id = line.variation_id.ok_or(CartError::VariationRequired(product_id))?;
			let variation = product
				.variations
				.iter()
				.find(|variation| variation.id == variation_id)
				.ok_or(CartError::UnknownVariation {
					product_id,
					variation_id,
				})?;
			if !variation.in_stock {
				return Err(CartError::OutOfStock(product_id));
			}
			if !variation.purchasable {
				return Err(CartError::NotPurchasable(product_id));
			}
		}
		if let Some(available) = product.stock.purchase_limit()
			&& line.quantity > available
		{
			return Err(CartError::InsufficientStock {
				product_id,
				available,
			});
		}
		Ok(())
	}
}

#[async_trait]
impl CartService for InMemoryCart {
	async fn add(&self, line: &CartLine) -> Result<(), CartError> {
		self.validate(line)?;
		let mut lines = self
			.lines
			.lock()
			.map_err(|_| CartError::Backend("cart lock poisoned".to_string()))?;
		lines.push(line.clone());
		tracing::debug!(
			product_id = line.product_id,
			variation_id = ?line.variation_id,
			quantity = line.quantity,
			"added cart line"
		);
		Ok(())
	}
}
