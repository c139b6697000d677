//! User-facing strings.

/// Text shown by the rendered table.
///
/// Defaults are English. Callers that translate their storefront replace the
/// fields they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
	pub add_to_cart: String,
	pub select_options: String,
	pub view_options: String,
	pub buy_product: String,
	pub out_of_stock: String,
	pub in_stock: String,
	/// Stock badge with a tracked quantity; `{count}` is replaced.
	pub in_stock_count: String,
	pub on_backorder: String,
	pub no_products: String,
	pub choose_option: String,
	pub quantity: String,
	pub search_placeholder: String,
	pub search_button: String,
	pub add_selected: String,
	pub select_all: String,
	/// Row checkbox label; `{name}` is replaced with the product name.
	pub select_row: String,
	pub previous_page: String,
	pub next_page: String,
	pub pagination: String,
}

impl Default for Labels {
	fn default() -> Self {
		Self {
			add_to_cart: "Add to cart".to_string(),
			select_options: "Select options".to_string(),
			view_options: "View options".to_string(),
			buy_product: "Buy product".to_string(),
			out_of_stock: "Out of stock".to_string(),
			in_stock: "In stock".to_string(),
			in_stock_count: "{count} in stock".to_string(),
			on_backorder: "Available on backorder".to_string(),
			no_products: "No products found.".to_string(),
			choose_option: "Choose an option".to_string(),
			quantity: "Quantity".to_string(),
			search_placeholder: "Search products…".to_string(),
			search_button: "Search".to_string(),
			add_selected: "Add selected to cart".to_string(),
			select_all: "Select all products".to_string(),
			select_row: "Select {name}".to_string(),
			previous_page: "« Previous".to_string(),
			next_page: "Next »".to_string(),
			pagination: "Product pages".to_string(),
		}
	}
}
