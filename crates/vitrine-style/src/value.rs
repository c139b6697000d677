//! Validated CSS values.
//!
//! Style tokens arrive as free-form strings. Each type here accepts only an
//! allow-listed grammar, so a value that made it through a constructor can be
//! interpolated into a stylesheet as-is.

use crate::error::{Result, StyleValueError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use vitrine_types::Width;

static HEX_COLOR: OnceLock<Option<Regex>> = OnceLock::new();
static FUNCTIONAL_COLOR: OnceLock<Option<Regex>> = OnceLock::new();
static DIMENSION: OnceLock<Option<Regex>> = OnceLock::new();

// A pattern that fails to compile rejects every input.
fn matches(cell: &'static OnceLock<Option<Regex>>, pattern: &str, input: &str) -> bool {
	cell.get_or_init(|| Regex::new(pattern).ok())
		.as_ref()
		.is_some_and(|re| re.is_match(input))
}

/// A color in hex or functional notation.
///
/// # Examples
///
/// ```
/// use vitrine_style::SafeColor;
///
/// assert!(SafeColor::parse("#3366ff").is_ok());
/// assert!(SafeColor::parse("rgba(0, 0, 0, .5)").is_ok());
/// assert!(SafeColor::parse("red;} body{display:none").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeColor(String);

impl SafeColor {
	/// Accepts `#` followed by 3, 4, 6 or 8 hex digits, or `rgb()`, `rgba()`,
	/// `hsl()`, `hsla()` whose arguments contain only digits, commas, spaces,
	/// dots and percent signs.
	pub fn parse(input: &str) -> Result<Self> {
		let valid = matches(
			&HEX_COLOR,
			r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$",
			input,
		) || matches(
			&FUNCTIONAL_COLOR,
			r"^(?:rgba?|hsla?)\([0-9., %]+\)$",
			input,
		);
		if valid {
			Ok(Self(input.to_string()))
		} else {
			Err(StyleValueError::InvalidColor)
		}
	}

	/// Returns the color as written.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// A length: a non-negative number with an optional `px`, `%`, `em`, `rem`
/// or `pt` unit.
///
/// # Examples
///
/// ```
/// use vitrine_style::SafeDimension;
///
/// assert!(SafeDimension::parse("14px").is_ok());
/// assert!(SafeDimension::parse("1.5").is_ok());
/// assert!(SafeDimension::parse("calc(100% - 2px)").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeDimension(String);

impl SafeDimension {
	/// Parses a dimension.
	pub fn parse(input: &str) -> Result<Self> {
		if matches(
			&DIMENSION,
			r"^(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)(?:px|%|em|rem|pt)?$",
			input,
		) {
			Ok(Self(input.to_string()))
		} else {
			Err(StyleValueError::InvalidDimension)
		}
	}

	/// Returns the dimension as written.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderStyle {
	None,
	Solid,
	Dashed,
	Dotted,
	Double,
}

impl BorderStyle {
	/// Parses a border style keyword.
	pub fn parse(input: &str) -> Result<Self> {
		match input {
			"none" => Ok(Self::None),
			"solid" => Ok(Self::Solid),
			"dashed" => Ok(Self::Dashed),
			"dotted" => Ok(Self::Dotted),
			"double" => Ok(Self::Double),
			_ => Err(StyleValueError::InvalidBorderStyle),
		}
	}

	/// Returns the CSS keyword.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Solid => "solid",
			Self::Dashed => "dashed",
			Self::Dotted => "dotted",
			Self::Double => "double",
		}
	}
}

/// Unit of a column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthUnit {
	Px,
	Percent,
	Em,
	Rem,
	Auto,
}

impl WidthUnit {
	/// Parses a width unit.
	pub fn parse(input: &str) -> Result<Self> {
		match input {
			"px" => Ok(Self::Px),
			"%" => Ok(Self::Percent),
			"em" => Ok(Self::Em),
			"rem" => Ok(Self::Rem),
			"auto" => Ok(Self::Auto),
			_ => Err(StyleValueError::InvalidWidthUnit),
		}
	}

	/// Returns the CSS unit suffix (`auto` for [`WidthUnit::Auto`]).
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Px => "px",
			Self::Percent => "%",
			Self::Em => "em",
			Self::Rem => "rem",
			Self::Auto => "auto",
		}
	}
}

/// A column width that produces a CSS rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeWidth {
	value: f64,
	unit: WidthUnit,
}

impl SafeWidth {
	/// Validates a configured width.
	///
	/// Fails with [`StyleValueError::WidthNotApplied`] when the unit is `auto`
	/// or the value is not a positive finite number, and with
	/// [`StyleValueError::InvalidWidthUnit`] for units outside the allow-list.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_style::SafeWidth;
	/// use vitrine_types::Width;
	///
	/// let width = SafeWidth::from_width(&Width::new(120.0, "px")).unwrap();
	/// assert_eq!(width.to_string(), "120px");
	/// assert!(SafeWidth::from_width(&Width::new(40.0, "auto")).is_err());
	/// ```
	pub fn from_width(width: &Width) -> Result<Self> {
		let unit = WidthUnit::parse(&width.unit)?;
		if unit == WidthUnit::Auto || !width.value.is_finite() || width.value <= 0.0 {
			return Err(StyleValueError::WidthNotApplied);
		}
		Ok(Self {
			value: width.value,
			unit,
		})
	}

	/// Returns the unit.
	pub fn unit(&self) -> WidthUnit {
		self.unit
	}
}

/// Font weight keyword or numeric weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontWeight(String);

impl FontWeight {
	/// Accepts `normal`, `bold`, `lighter`, `bolder` and `100`, `200`, ... `900`.
	pub fn parse(input: &str) -> Result<Self> {
		let valid = match input {
			"normal" | "bold" | "lighter" | "bolder" => true,
			numeric => numeric
				.parse::<u16>()
				.is_ok_and(|weight| (100..=900).contains(&weight) && weight % 100 == 0),
		};
		if valid {
			Ok(Self(input.to_string()))
		} else {
			Err(StyleValueError::InvalidFontWeight)
		}
	}

	/// Returns the weight as written.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// Text transform keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTransform {
	None,
	Uppercase,
	Lowercase,
	Capitalize,
}

impl TextTransform {
	/// Parses a text transform keyword.
	pub fn parse(input: &str) -> Result<Self> {
		match input {
			"none" => Ok(Self::None),
			"uppercase" => Ok(Self::Uppercase),
			"lowercase" => Ok(Self::Lowercase),
			"capitalize" => Ok(Self::Capitalize),
			_ => Err(StyleValueError::InvalidTextTransform),
		}
	}

	/// Returns the CSS keyword.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Uppercase => "uppercase",
			Self::Lowercase => "lowercase",
			Self::Capitalize => "capitalize",
		}
	}
}

macro_rules! display_as_str {
	($($ty:ty),*) => {
		$(
			impl fmt::Display for $ty {
				fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
					f.write_str(self.as_str())
				}
			}
		)*
	};
}

display_as_str!(
	SafeColor,
	SafeDimension,
	BorderStyle,
	WidthUnit,
	FontWeight,
	TextTransform
);

impl fmt::Display for SafeWidth {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.value, self.unit.as_str())
	}
}

/// Returns `input` unchanged when it is a valid color, otherwise `""`.
///
/// ```
/// use vitrine_style::sanitize_color;
///
/// assert_eq!(sanitize_color("#3366ff"), "#3366ff");
/// assert_eq!(sanitize_color("javascript:alert(1)"), "");
/// ```
pub fn sanitize_color(input: &str) -> String {
	SafeColor::parse(input)
		.map(|color| color.0)
		.unwrap_or_default()
}

/// Returns `input` unchanged when it is a valid dimension, otherwise `""`.
pub fn sanitize_dimension(input: &str) -> String {
	SafeDimension::parse(input)
		.map(|dimension| dimension.0)
		.unwrap_or_default()
}
