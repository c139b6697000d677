//! # Vitrine Style
//!
//! Turns a table's free-form style tokens into a stylesheet that is safe to
//! embed in a page.
//!
//! - [`value`]: validated CSS values. A token reaches the stylesheet only
//!   through one of these constructors.
//! - [`TableScope`]: the per-render class every rule is nested under.
//! - [`StyleCompiler`]: builds the rules for header, body, striping, hover,
//!   buttons, column widths and device visibility.
//! - [`classes`]: class names shared with the markup renderer.

pub mod classes;
pub mod compiler;
pub mod error;
pub mod scope;
pub mod value;

pub use compiler::StyleCompiler;
pub use error::{Result, StyleValueError};
pub use scope::TableScope;
pub use value::{
	BorderStyle, FontWeight, SafeColor, SafeDimension, SafeWidth, TextTransform, WidthUnit,
	sanitize_color, sanitize_dimension,
};
