//! The table configuration aggregate.

use crate::column::Column;
use crate::lenient::{lenient, lenient_list, string_id};
use crate::settings::Settings;
use crate::source::Source;
use crate::style::StyleTokens;
use serde::{Deserialize, Serialize};

/// Finished configuration of one product table.
///
/// Supplied by the configuration store and treated as immutable input for the
/// duration of a render call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfiguration {
	/// Table identifier.
	#[serde(deserialize_with = "string_id")]
	pub id: String,
	/// Which products are shown.
	#[serde(deserialize_with = "lenient")]
	pub source: Source,
	/// Columns in display order. Malformed entries are dropped.
	#[serde(deserialize_with = "lenient_list")]
	pub columns: Vec<Column>,
	/// Behavior settings.
	#[serde(deserialize_with = "lenient")]
	pub settings: Settings,
	/// Style tokens.
	#[serde(deserialize_with = "lenient")]
	pub style: StyleTokens,
}

impl TableConfiguration {
	/// Creates a configuration with default source, settings and style.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			..Self::default()
		}
	}

	/// Parses a configuration from JSON.
	pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(input)
	}

	/// Returns the columns that are rendered, in configured order.
	pub fn visible_columns(&self) -> impl Iterator<Item = &Column> {
		self.columns.iter().filter(|column| column.is_visible())
	}
}
