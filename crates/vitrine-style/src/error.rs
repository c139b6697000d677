//! Style value errors.

use thiserror::Error;

/// A style token failed its allow-listed grammar.
///
/// Variants never carry the rejected input so they are safe to log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StyleValueError {
	/// Not a hex, `rgb()`/`rgba()` or `hsl()`/`hsla()` color.
	#[error("invalid color value")]
	InvalidColor,
	/// Not a number with an optional `px`, `%`, `em`, `rem` or `pt` unit.
	#[error("invalid dimension value")]
	InvalidDimension,
	/// Not one of `none`, `solid`, `dashed`, `dotted`, `double`.
	#[error("invalid border style")]
	InvalidBorderStyle,
	/// Not one of `px`, `%`, `em`, `rem`, `auto`.
	#[error("invalid width unit")]
	InvalidWidthUnit,
	/// Width value is not a positive finite number, or its unit is `auto`.
	#[error("width is not applied")]
	WidthNotApplied,
	/// Not a CSS font weight keyword or a multiple of 100 in `100..=900`.
	#[error("invalid font weight")]
	InvalidFontWeight,
	/// Not one of `none`, `uppercase`, `lowercase`, `capitalize`.
	#[error("invalid text transform")]
	InvalidTextTransform,
}

/// Result type for style value parsing.
pub type Result<T> = std::result::Result<T, StyleValueError>;
