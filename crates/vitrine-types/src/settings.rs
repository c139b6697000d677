//! Behavior settings of a table.

use crate::column::Width;
use crate::lenient::{flag, lenient, number};
use serde::{Deserialize, Serialize};

/// Page size used when none (or an invalid one) is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Side of the row the bulk-select checkbox column sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkPosition {
	/// Before the first configured column.
	#[default]
	First,
	/// After the last configured column.
	Last,
}

/// Bulk-select checkbox column.
///
/// This is the single place bulk-select defaults are defined; every render
/// path reads them through this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BulkSelect {
	/// Whether the checkbox column is rendered.
	#[serde(deserialize_with = "flag")]
	pub enabled: bool,
	/// Column position.
	#[serde(deserialize_with = "lenient")]
	pub position: BulkPosition,
	/// Column width.
	#[serde(deserialize_with = "lenient")]
	pub width: Width,
}

impl Default for BulkSelect {
	fn default() -> Self {
		Self {
			enabled: false,
			position: BulkPosition::First,
			width: Width::new(50.0, "px"),
		}
	}
}

/// Optional table features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Features {
	/// Render the search form.
	#[serde(deserialize_with = "flag")]
	pub search: bool,
	/// Render pagination links.
	#[serde(deserialize_with = "flag")]
	pub pagination: bool,
	/// Bulk-select checkbox column.
	#[serde(deserialize_with = "lenient")]
	pub bulk_select: BulkSelect,
}

impl Default for Features {
	fn default() -> Self {
		Self {
			search: true,
			pagination: true,
			bulk_select: BulkSelect::default(),
		}
	}
}

/// Paging options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationSettings {
	/// Requested page size.
	#[serde(deserialize_with = "number")]
	pub limit: f64,
}

impl PaginationSettings {
	/// Returns the effective page size; values below one fall back to
	/// [`DEFAULT_PAGE_SIZE`].
	pub fn page_size(&self) -> u32 {
		if self.limit >= 1.0 && self.limit <= f64::from(u32::MAX) {
			self.limit as u32
		} else {
			DEFAULT_PAGE_SIZE
		}
	}
}

impl Default for PaginationSettings {
	fn default() -> Self {
		Self {
			limit: f64::from(DEFAULT_PAGE_SIZE),
		}
	}
}

/// Add-to-cart behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CartSettings {
	/// Render inline cart controls. When disabled, buttons link to the product page.
	#[serde(deserialize_with = "flag")]
	pub enable: bool,
	/// Render a quantity stepper next to the add-to-cart button.
	#[serde(deserialize_with = "flag")]
	pub show_quantity: bool,
}

impl Default for CartSettings {
	fn default() -> Self {
		Self {
			enable: true,
			show_quantity: true,
		}
	}
}

/// All behavior settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Optional features.
	#[serde(deserialize_with = "lenient")]
	pub features: Features,
	/// Paging.
	#[serde(deserialize_with = "lenient")]
	pub pagination: PaginationSettings,
	/// Cart behavior.
	#[serde(deserialize_with = "lenient")]
	pub cart: CartSettings,
}
