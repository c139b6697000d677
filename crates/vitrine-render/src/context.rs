//! Per-render inputs that are not part of the table configuration.

use crate::button::ButtonState;
use crate::labels::Labels;
use vitrine_types::CartSettings;

/// Cart behavior captured once at the start of a render call.
///
/// Cell renderers read this copy instead of the configuration, so one
/// render sees one consistent cart behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBehavior {
	/// Inline add-to-cart controls are rendered.
	pub enabled: bool,
	/// A quantity input accompanies add-to-cart buttons.
	pub show_quantity: bool,
}

impl CartBehavior {
	/// Captures the cart settings.
	pub fn capture(settings: &CartSettings) -> Self {
		Self {
			enabled: settings.enable,
			show_quantity: settings.show_quantity,
		}
	}
}

impl Default for CartBehavior {
	fn default() -> Self {
		Self::capture(&CartSettings::default())
	}
}

/// Everything a cell renderer needs besides the column and the product.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
	pub cart: CartBehavior,
	pub labels: &'a Labels,
	/// Purchase state of the row, resolved once before any cell renders.
	pub button: ButtonState,
}

/// Where the table is being shown.
///
/// # Examples
///
/// ```
/// use vitrine_render::RequestContext;
///
/// let request = RequestContext::new()
///     .with_ambient_url("/shop/")
///     .with_page_url("/catalog/mugs/");
/// assert_eq!(request.base_url(), "/catalog/mugs/");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
	/// URL supplied by the caller, for example by an AJAX request.
	pub page_url: Option<String>,
	/// URL of the page the renderer is embedded in.
	pub ambient_url: Option<String>,
	/// Page number known from the surrounding page, used when the runtime
	/// arguments carry none.
	pub ambient_page: Option<u32>,
}

impl RequestContext {
	/// Creates an empty context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the caller-supplied page URL.
	pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
		self.page_url = Some(url.into());
		self
	}

	/// Sets the ambient page URL.
	pub fn with_ambient_url(mut self, url: impl Into<String>) -> Self {
		self.ambient_url = Some(url.into());
		self
	}

	/// Sets the ambient page number.
	pub fn with_ambient_page(mut self, page: u32) -> Self {
		self.ambient_page = Some(page);
		self
	}

	/// Returns the base URL for pagination links: the caller-supplied URL,
	/// else the ambient one, else `""` (links relative to the current page).
	pub fn base_url(&self) -> &str {
		self.page_url
			.as_deref()
			.filter(|url| !url.trim().is_empty())
			.or(self.ambient_url.as_deref())
			.unwrap_or("")
	}
}
