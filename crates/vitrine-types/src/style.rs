//! Raw style tokens as authored in the configuration builder.
//!
//! Every token is an unvalidated string. Validation happens when the styles
//! are compiled into CSS; nothing in this module is safe to interpolate.

use crate::lenient::{lenient, token};
use serde::{Deserialize, Serialize};

/// Header row tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeaderStyle {
	#[serde(deserialize_with = "token")]
	pub text_color: Option<String>,
	#[serde(deserialize_with = "token")]
	pub background: Option<String>,
	#[serde(deserialize_with = "token")]
	pub font_size: Option<String>,
	#[serde(deserialize_with = "token")]
	pub font_weight: Option<String>,
	#[serde(deserialize_with = "token")]
	pub text_transform: Option<String>,
}

/// Body row tokens, including zebra striping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyStyle {
	#[serde(deserialize_with = "token")]
	pub text_color: Option<String>,
	#[serde(deserialize_with = "token")]
	pub background: Option<String>,
	#[serde(deserialize_with = "token")]
	pub alt_background: Option<String>,
	#[serde(deserialize_with = "token")]
	pub alt_text_color: Option<String>,
	#[serde(deserialize_with = "token")]
	pub font_size: Option<String>,
}

/// Purchase button tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonStyle {
	#[serde(deserialize_with = "token")]
	pub background: Option<String>,
	#[serde(deserialize_with = "token")]
	pub text_color: Option<String>,
	#[serde(deserialize_with = "token")]
	pub hover_background: Option<String>,
	#[serde(deserialize_with = "token")]
	pub hover_text_color: Option<String>,
	#[serde(deserialize_with = "token")]
	pub border_radius: Option<String>,
}

/// Borders and spacing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutStyle {
	#[serde(deserialize_with = "token")]
	pub border_color: Option<String>,
	#[serde(deserialize_with = "token")]
	pub border_width: Option<String>,
	#[serde(deserialize_with = "token")]
	pub border_style: Option<String>,
	#[serde(deserialize_with = "token")]
	pub cell_padding: Option<String>,
}

/// Row hover tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoverStyle {
	#[serde(deserialize_with = "token")]
	pub background: Option<String>,
	#[serde(deserialize_with = "token")]
	pub text_color: Option<String>,
}

/// Table-wide typography.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographyStyle {
	#[serde(deserialize_with = "token")]
	pub font_size: Option<String>,
	#[serde(deserialize_with = "token")]
	pub line_height: Option<String>,
}

/// All style tokens of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTokens {
	#[serde(deserialize_with = "lenient")]
	pub header: HeaderStyle,
	#[serde(deserialize_with = "lenient")]
	pub body: BodyStyle,
	#[serde(deserialize_with = "lenient")]
	pub button: ButtonStyle,
	#[serde(deserialize_with = "lenient")]
	pub layout: LayoutStyle,
	#[serde(deserialize_with = "lenient")]
	pub hover: HoverStyle,
	#[serde(deserialize_with = "lenient")]
	pub typography: TypographyStyle,
}
