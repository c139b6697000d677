//! Column definitions.

use crate::lenient::{flag, lenient, number, string_id, token};
use serde::{Deserialize, Serialize};

/// Built-in column type names.
///
/// Column types are plain strings so configurations written for newer or
/// older engines still load; unknown types render as empty cells.
pub mod kinds {
	/// Product image, optionally linked.
	pub const IMAGE: &str = "image";
	/// Product name, always linked.
	pub const NAME: &str = "name";
	/// Price markup.
	pub const PRICE: &str = "price";
	/// Stock keeping unit.
	pub const SKU: &str = "sku";
	/// Stock status badge.
	pub const STOCK: &str = "stock";
	/// Purchase controls.
	pub const BUTTON: &str = "button";
	/// Short description, trimmed.
	pub const SUMMARY: &str = "summary";
}

/// A column width. Applied only when the unit is not `auto` and the value is positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Width {
	/// Numeric width.
	#[serde(deserialize_with = "number")]
	pub value: f64,
	/// CSS unit (`px`, `%`, `em`, `rem` or `auto`). Validated when styles compile.
	#[serde(deserialize_with = "string_id")]
	pub unit: String,
}

impl Width {
	/// Creates a width.
	pub fn new(value: f64, unit: impl Into<String>) -> Self {
		Self {
			value,
			unit: unit.into(),
		}
	}

	/// Returns whether this width produces a CSS rule.
	pub fn is_applied(&self) -> bool {
		self.unit != "auto" && self.value > 0.0
	}
}

impl Default for Width {
	fn default() -> Self {
		Self::new(0.0, "auto")
	}
}

/// Device visibility of a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
	/// Shown everywhere.
	#[default]
	All,
	/// Hidden below the mobile breakpoint.
	Desktop,
	/// Hidden above the mobile breakpoint.
	Mobile,
	/// Not rendered at all.
	#[serde(rename = "none")]
	Hidden,
}

/// Presentation options of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnAdvanced {
	/// Whether the header cell shows the heading text.
	#[serde(deserialize_with = "flag")]
	pub show_heading: bool,
	/// Column width.
	#[serde(deserialize_with = "lenient")]
	pub width: Width,
	/// Device visibility.
	#[serde(deserialize_with = "lenient")]
	pub visibility: Visibility,
	/// Position assigned by the configuration builder. The renderer keeps the
	/// order of [`TableConfiguration::columns`](crate::TableConfiguration) and
	/// never sorts by this value.
	#[serde(deserialize_with = "lenient")]
	pub order: i32,
}

impl Default for ColumnAdvanced {
	fn default() -> Self {
		Self {
			show_heading: true,
			width: Width::default(),
			visibility: Visibility::All,
			order: 0,
		}
	}
}

/// Type-specific column options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnSettings {
	/// Wrap the image in a link to the product page.
	#[serde(deserialize_with = "flag")]
	pub link_to_product: bool,
	/// Image size key requested from the product's image sources.
	#[serde(deserialize_with = "token")]
	pub image_size: Option<String>,
}

impl ColumnSettings {
	/// Default image size key.
	pub const DEFAULT_IMAGE_SIZE: &'static str = "thumbnail";

	/// Returns the configured image size, or [`Self::DEFAULT_IMAGE_SIZE`].
	pub fn image_size(&self) -> &str {
		self.image_size
			.as_deref()
			.unwrap_or(Self::DEFAULT_IMAGE_SIZE)
	}
}

impl Default for ColumnSettings {
	fn default() -> Self {
		Self {
			link_to_product: true,
			image_size: None,
		}
	}
}

/// One column of a product table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
	/// Column identifier, unique within a table.
	#[serde(deserialize_with = "string_id")]
	pub id: String,
	/// Column type, see [`kinds`].
	#[serde(rename = "type", deserialize_with = "string_id")]
	pub column_type: String,
	/// Header text.
	#[serde(deserialize_with = "string_id")]
	pub heading: String,
	/// Presentation options.
	#[serde(deserialize_with = "lenient")]
	pub advanced: ColumnAdvanced,
	/// Type-specific options.
	#[serde(deserialize_with = "lenient")]
	pub settings: ColumnSettings,
}

impl Column {
	/// Creates a column with default options.
	pub fn new(
		id: impl Into<String>,
		column_type: impl Into<String>,
		heading: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			column_type: column_type.into(),
			heading: heading.into(),
			..Self::default()
		}
	}

	/// Sets the visibility.
	pub fn with_visibility(mut self, visibility: Visibility) -> Self {
		self.advanced.visibility = visibility;
		self
	}

	/// Sets the width.
	pub fn with_width(mut self, width: Width) -> Self {
		self.advanced.width = width;
		self
	}

	/// Returns whether the column is rendered at all.
	pub fn is_visible(&self) -> bool {
		self.advanced.visibility != Visibility::Hidden
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Width::new(120.0, "px"), true)]
	#[case(Width::new(0.0, "px"), false)]
	#[case(Width::new(-4.0, "%"), false)]
	#[case(Width::new(30.0, "auto"), false)]
	fn test_width_is_applied(#[case] width: Width, #[case] expected: bool) {
		assert_eq!(width.is_applied(), expected);
	}

	#[rstest]
	fn test_column_deserializes_with_defaults() {
		let column: Column =
			serde_json::from_str(r#"{"id": "c1", "type": "image", "heading": "Photo"}"#).unwrap();
		assert_eq!(column.column_type, kinds::IMAGE);
		assert!(column.advanced.show_heading);
		assert!(column.settings.link_to_product);
		assert_eq!(column.settings.image_size(), "thumbnail");
		assert!(column.is_visible());
	}

	#[rstest]
	fn test_hidden_visibility() {
		let column: Column = serde_json::from_str(
			r#"{"id": "c2", "type": "sku", "advanced": {"visibility": "none", "width": {"value": "80", "unit": "px"}}}"#,
		)
		.unwrap();
		assert!(!column.is_visible());
		assert!(column.advanced.width.is_applied());
	}

	#[rstest]
	fn test_unknown_type_is_kept_verbatim() {
		let column: Column = serde_json::from_str(r#"{"id": 7, "type": "rating"}"#).unwrap();
		assert_eq!(column.id, "7");
		assert_eq!(column.column_type, "rating");
	}
}
