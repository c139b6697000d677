//! Purchase controls.
//!
//! A row's purchase state is classified once into a [`ButtonState`] by strict
//! precedence, then rendered by [`render_button`]:
//!
//! 1. [`External`](ButtonState::External): outbound link, regardless of stock.
//! 2. [`Grouped`](ButtonState::Grouped): link to the product page.
//! 3. [`OutOfStock`](ButtonState::OutOfStock): disabled control, no link.
//! 4. [`LinkOnly`](ButtonState::LinkOnly): cart disabled, link to the product page.
//! 5. [`Variable`](ButtonState::Variable): attribute selectors and a deferred submit.
//! 6. [`Simple`](ButtonState::Simple): quantity stepper and submit.

use crate::context::{CartBehavior, CellContext};
use serde::Serialize;
use std::collections::BTreeMap;
use vitrine_markup::{Page, PageElement, safe_href};
use vitrine_style::classes;
use vitrine_types::{ProductKind, ProductRow};

/// Purchase state of one product row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
	/// Sold elsewhere.
	External,
	/// A collection of other products.
	Grouped,
	/// Not in stock.
	OutOfStock,
	/// Inline cart controls are disabled.
	LinkOnly { has_variants: bool, purchasable: bool },
	/// Needs a variation chosen before it can be added.
	Variable,
	/// Can be added directly when purchasable.
	Simple { purchasable: bool },
}

impl ButtonState {
	/// Classifies `product` under the given cart behavior.
	pub fn resolve(product: &ProductRow, cart: CartBehavior) -> Self {
		if product.kind == ProductKind::External {
			Self::External
		} else if product.kind == ProductKind::Grouped {
			Self::Grouped
		} else if !product.stock.is_in_stock() {
			Self::OutOfStock
		} else if !cart.enabled {
			Self::LinkOnly {
				has_variants: product.has_variants(),
				purchasable: product.purchasable,
			}
		} else if product.has_variants() {
			Self::Variable
		} else {
			Self::Simple {
				purchasable: product.purchasable,
			}
		}
	}

	/// Returns whether the row can be added to the cart without further
	/// input, which is what enables its bulk-select checkbox.
	pub fn is_addable(&self) -> bool {
		match self {
			Self::Simple { purchasable } => *purchasable,
			Self::LinkOnly {
				has_variants,
				purchasable,
			} => !has_variants && *purchasable,
			Self::External | Self::Grouped | Self::OutOfStock | Self::Variable => false,
		}
	}
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VariationData<'a> {
	variation_id: u64,
	attributes: BTreeMap<String, &'a str>,
	price_html: &'a str,
	is_in_stock: bool,
	is_purchasable: bool,
}

/// Renders the purchase controls for `product` in the state resolved into `ctx`.
pub fn render_button(product: &ProductRow, ctx: &CellContext<'_>) -> Page {
	let labels = ctx.labels;
	match ctx.button {
		ButtonState::External => {
			let (url, text) = match &product.external {
				Some(external) => (external.url.as_str(), external.button_text.as_deref()),
				None => ("", None),
			};
			let text = text
				.filter(|text| !text.trim().is_empty())
				.unwrap_or(&labels.buy_product);
			PageElement::new("a")
				.attr("class", format!("{} vt-external", classes::BUTTON))
				.attr("href", safe_href(url))
				.attr("target", "_blank")
				.attr("rel", "nofollow noopener noreferrer")
				.child(text.to_string())
				.into()
		}
		ButtonState::Grouped => link_button(product, "vt-view-options", &labels.view_options),
		ButtonState::OutOfStock => PageElement::new("button")
			.attr("type", "button")
			.attr("class", format!("{} vt-out-of-stock", classes::BUTTON))
			.bool_attr("disabled", true)
			.child(labels.out_of_stock.clone())
			.into(),
		ButtonState::LinkOnly { has_variants, .. } => {
			let label = if has_variants {
				labels.select_options.as_str()
			} else {
				add_to_cart_label(product, ctx)
			};
			link_button(product, "vt-product-link", label)
		}
		ButtonState::Variable => render_variable(product, ctx),
		ButtonState::Simple { purchasable } => render_simple(product, ctx, purchasable),
	}
}

fn add_to_cart_label<'a>(product: &'a ProductRow, ctx: &'a CellContext<'_>) -> &'a str {
	product
		.add_to_cart_text
		.as_deref()
		.filter(|text| !text.trim().is_empty())
		.unwrap_or(&ctx.labels.add_to_cart)
}

fn link_button(product: &ProductRow, modifier: &str, label: &str) -> Page {
	PageElement::new("a")
		.attr("class", format!("{} {modifier}", classes::BUTTON))
		.attr("href", safe_href(&product.permalink))
		.child(label.to_string())
		.into()
}

fn quantity_input(ctx: &CellContext<'_>, max: Option<u64>, disabled: bool) -> Page {
	if !ctx.cart.show_quantity {
		return Page::Empty;
	}
	PageElement::new("input")
		.attr("type", "number")
		.attr("class", "vt-quantity")
		.attr("name", "quantity")
		.attr("value", "1")
		.attr("min", "1")
		.opt_attr("max", max.map(|max| max.to_string()))
		.attr("step", "1")
		.attr("aria-label", ctx.labels.quantity.clone())
		.bool_attr("disabled", disabled)
		.into()
}

fn submit_button(product: &ProductRow, ctx: &CellContext<'_>, disabled: bool) -> PageElement {
	PageElement::new("button")
		.attr("type", "submit")
		.attr("class", format!("{} vt-add-to-cart", classes::BUTTON))
		.attr("name", "add-to-cart")
		.attr("value", product.id.to_string())
		.bool_attr("disabled", disabled)
}

fn render_simple(product: &ProductRow, ctx: &CellContext<'_>, purchasable: bool) -> Page {
	PageElement::new("form")
		.attr("class", "vt-cart-form")
		.attr("method", "post")
		.attr("data-product-id", product.id.to_string())
		.child(quantity_input(ctx, product.stock.purchase_limit(), false))
		.child(submit_button(product, ctx, !purchasable).child(add_to_cart_label(product, ctx).to_string()))
		.into()
}

fn render_variable(product: &ProductRow, ctx: &CellContext<'_>) -> Page {
	let variations: Vec<VariationData<'_>> = product
		.variations
		.iter()
		.map(|variation| VariationData {
			variation_id: variation.id,
			attributes: variation
				.attributes
				.iter()
				.map(|(name, value)| (format!("attribute_{name}"), value.as_str()))
				.collect(),
			price_html: &variation.price_html,
			is_in_stock: variation.in_stock,
			is_purchasable: variation.purchasable,
		})
		.collect();
	let variations_json = match serde_json::to_string(&variations) {
		Ok(json) => json,
		Err(error) => {
			tracing::warn!(product_id = product.id, %error, "failed to encode variations");
			"[]".to_string()
		}
	};

	let selectors = product.attributes.iter().map(|attribute| {
		let field = format!("attribute_{}", attribute.name);
		let placeholder = PageElement::new("option")
			.attr("value", "")
			.child(ctx.labels.choose_option.clone());
		let options = attribute.options.iter().map(|option| {
			PageElement::new("option")
				.attr("value", option.slug.clone())
				.child(attribute.option_label(option).to_string())
		});
		PageElement::new("label")
			.attr("class", "vt-variation-attribute")
			.child(
				PageElement::new("span")
					.attr("class", "vt-attribute-label")
					.child(attribute.label.clone()),
			)
			.child(
				PageElement::new("select")
					.attr("name", field.clone())
					.attr("data-attribute-name", field)
					.child(placeholder)
					.children(options),
			)
	});

	PageElement::new("form")
		.attr("class", "vt-cart-form vt-variations-form")
		.attr("method", "post")
		.attr("data-product-id", product.id.to_string())
		.attr("data-product-variations", variations_json)
		.children(selectors)
		.child(
			PageElement::new("input")
				.attr("type", "hidden")
				.attr("class", "vt-variation-id")
				.attr("name", "variation_id")
				.attr("value", ""),
		)
		.child(PageElement::new("span").attr("class", "vt-variation-price"))
		.child(quantity_input(ctx, product.stock.purchase_limit(), true))
		.child(submit_button(product, ctx, true).child(ctx.labels.add_to_cart.clone()))
		.into()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::labels::Labels;
	use rstest::rstest;
	use vitrine_types::StockStatus;

	const CART_ON: CartBehavior = CartBehavior {
		enabled: true,
		show_quantity: true,
	};
	const CART_OFF: CartBehavior = CartBehavior {
		enabled: false,
		show_quantity: true,
	};

	fn product(kind: ProductKind, in_stock: bool, purchasable: bool) -> ProductRow {
		let mut product = ProductRow::new(1, "Item").with_kind(kind);
		if !in_stock {
			product.stock.status = StockStatus::OutOfStock;
		}
		product.purchasable = purchasable;
		product
	}

	#[rstest]
	// External wins over stock and cart flags.
	#[case(ProductKind::External, false, true, CART_OFF, ButtonState::External, false)]
	#[case(ProductKind::External, true, true, CART_ON, ButtonState::External, false)]
	// Grouped wins over stock and cart flags.
	#[case(ProductKind::Grouped, false, true, CART_ON, ButtonState::Grouped, false)]
	#[case(ProductKind::Grouped, true, true, CART_OFF, ButtonState::Grouped, false)]
	#[case(ProductKind::Simple, false, true, CART_ON, ButtonState::OutOfStock, false)]
	#[case(ProductKind::Variable, false, true, CART_OFF, ButtonState::OutOfStock, false)]
	#[case(
		ProductKind::Simple,
		true,
		true,
		CART_OFF,
		ButtonState::LinkOnly { has_variants: false, purchasable: true },
		true
	)]
	#[case(
		ProductKind::Variable,
		true,
		true,
		CART_OFF,
		ButtonState::LinkOnly { has_variants: true, purchasable: true },
		false
	)]
	#[case(ProductKind::Variable, true, true, CART_ON, ButtonState::Variable, false)]
	#[case(
		ProductKind::Simple,
		true,
		true,
		CART_ON,
		ButtonState::Simple { purchasable: true },
		true
	)]
	#[case(
		ProductKind::Simple,
		true,
		false,
		CART_ON,
		ButtonState::Simple { purchasable: false },
		false
	)]
	#[case(
		ProductKind::Other,
		true,
		true,
		CART_ON,
		ButtonState::Simple { purchasable: true },
		true
	)]
	fn test_state_table(
		#[case] kind: ProductKind,
		#[case] in_stock: bool,
		#[case] purchasable: bool,
		#[case] cart: CartBehavior,
		#[case] expected: ButtonState,
		#[case] addable: bool,
	) {
		let state = ButtonState::resolve(&product(kind, in_stock, purchasable), cart);
		assert_eq!(state, expected);
		assert_eq!(state.is_addable(), addable);
	}

	#[rstest]
	#[case(ProductKind::Simple, Some(0))]
	#[case(ProductKind::Simple, Some(-1))]
	#[case(ProductKind::Simple, None)]
	#[case(ProductKind::Other, Some(0))]
	fn test_used_up_tracked_stock_is_out_of_stock(
		#[case] kind: ProductKind,
		#[case] quantity: Option<i64>,
	) {
		let mut product = ProductRow::new(5, "Mug").with_kind(kind).with_stock_quantity(0);
		product.stock.quantity = quantity;

		let state = ButtonState::resolve(&product, CART_ON);
		assert_eq!(state, ButtonState::OutOfStock);
		assert!(!state.is_addable());

		let html = render(&product, CART_ON);
		assert!(!html.contains("max=\"0\""));
		assert!(html.contains("disabled=\"disabled\">Out of stock</button>"));
	}

	fn render(product: &ProductRow, cart: CartBehavior) -> String {
		let labels = Labels::default();
		let ctx = CellContext {
			cart,
			labels: &labels,
			button: ButtonState::resolve(product, cart),
		};
		render_button(product, &ctx).render_to_string()
	}

	#[rstest]
	fn test_external_link() {
		let product = ProductRow::new(5, "Guide").with_external("https://partner.example/g", Some("Buy at partner"));
		let html = render(&product, CART_ON);
		assert!(html.starts_with(r#"<a class="vt-button vt-external" href="https://partner.example/g""#));
		assert!(html.contains(">Buy at partner</a>"));
	}

	#[rstest]
	fn test_external_link_with_unsafe_url_and_no_text() {
		let product = ProductRow::new(5, "Guide").with_external("javascript:alert(1)", None);
		let html = render(&product, CART_ON);
		assert!(html.contains(r##"href="#""##));
		assert!(html.contains(">Buy product</a>"));
	}

	#[rstest]
	fn test_out_of_stock_has_no_link() {
		let product = ProductRow::new(5, "Mug").out_of_stock();
		assert_eq!(
			render(&product, CART_ON),
			r#"<button type="button" class="vt-button vt-out-of-stock" disabled="disabled">Out of stock</button>"#
		);
	}

	#[rstest]
	fn test_link_only_uses_product_label() {
		let mut product = ProductRow::new(5, "Mug");
		product.add_to_cart_text = Some("Pre-order".to_string());
		assert_eq!(
			render(&product, CART_OFF),
			r#"<a class="vt-button vt-product-link" href="/product/5/">Pre-order</a>"#
		);
	}

	#[rstest]
	#[case(true, Some(3), r#"<input type="number" class="vt-quantity" name="quantity" value="1" min="1" max="3" step="1" aria-label="Quantity" />"#)]
	#[case(true, None, r#"<input type="number" class="vt-quantity" name="quantity" value="1" min="1" step="1" aria-label="Quantity" />"#)]
	fn test_simple_quantity_bounds(
		#[case] show_quantity: bool,
		#[case] tracked: Option<i64>,
		#[case] expected_input: &str,
	) {
		let mut product = ProductRow::new(5, "Mug");
		if let Some(quantity) = tracked {
			product = product.with_stock_quantity(quantity);
		}
		let html = render(
			&product,
			CartBehavior {
				enabled: true,
				show_quantity,
			},
		);
		assert!(html.contains(expected_input), "{html}");
	}

	#[rstest]
	fn test_simple_without_quantity_or_purchasability() {
		let mut product = ProductRow::new(5, "Mug");
		product.purchasable = false;
		let html = render(
			&product,
			CartBehavior {
				enabled: true,
				show_quantity: false,
			},
		);
		assert!(!html.contains("vt-quantity"));
		assert!(html.contains(
			r#"<button type="submit" class="vt-button vt-add-to-cart" name="add-to-cart" value="5" disabled="disabled">Add to cart</button>"#
		));
	}

	#[rstest]
	fn test_backorders_leave_quantity_unbounded() {
		let mut product = ProductRow::new(5, "Mug").with_stock_quantity(2);
		product.stock.backorders_allowed = true;
		let html = render(&product, CART_ON);
		assert!(!html.contains("max="));
	}
}
