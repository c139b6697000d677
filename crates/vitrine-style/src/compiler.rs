//! Compiles style tokens into instance-scoped CSS.

use crate::classes::{self, MOBILE_BREAKPOINT_PX};
use crate::error::Result;
use crate::scope::TableScope;
use crate::value::{
	BorderStyle, FontWeight, SafeColor, SafeDimension, SafeWidth, TextTransform,
};
use std::fmt::{Display, Write};
use vitrine_types::{TableConfiguration, Visibility, Width};

const CHECK_GLYPH: &str = "url(\"data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'%3E%3Cpath d='M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z'/%3E%3C/svg%3E\")";
const ARROW_GLYPH: &str = "url(\"data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'%3E%3Cpath d='M12 4l-1.4 1.4 5.6 5.6H4v2h12.2l-5.6 5.6L12 20l8-8z'/%3E%3C/svg%3E\")";

/// One CSS rule. Declarations whose value was rejected are never added.
#[derive(Debug, Default)]
struct Rule {
	selectors: Vec<String>,
	declarations: Vec<(&'static str, String)>,
}

impl Rule {
	fn new(selectors: impl IntoIterator<Item = String>) -> Self {
		Self {
			selectors: selectors.into_iter().collect(),
			declarations: Vec::new(),
		}
	}

	fn decl(mut self, property: &'static str, value: Option<impl Display>) -> Self {
		if let Some(value) = value {
			self.declarations.push((property, value.to_string()));
		}
		self
	}

	fn is_empty(&self) -> bool {
		self.declarations.is_empty()
	}

	fn write_into(&self, out: &mut String) {
		out.push_str(&self.selectors.join(", "));
		out.push_str(" {");
		for (property, value) in &self.declarations {
			// Writing to a String cannot fail.
			let _ = write!(out, " {property}: {value};");
		}
		out.push_str(" }\n");
	}
}

/// Builds the stylesheet of one table render.
///
/// Every token passes through a validated constructor; a token that fails
/// is dropped, and a rule left without declarations is omitted entirely.
///
/// # Examples
///
/// ```
/// use vitrine_style::{StyleCompiler, TableScope};
/// use vitrine_types::TableConfiguration;
///
/// let mut config = TableConfiguration::new("t1");
/// config.style.header.background = Some("#222".to_string());
/// config.style.body.background = Some("url(evil)".to_string());
///
/// let scope = TableScope::with_suffix("t1", "00000000");
/// let css = StyleCompiler::new(&scope).compile(&config);
/// assert!(css.contains(".vt-t1-00000000 .vt-grid thead th { background-color: #222; }"));
/// assert!(!css.contains("evil"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StyleCompiler<'a> {
	scope: &'a TableScope,
}

impl<'a> StyleCompiler<'a> {
	/// Creates a compiler for the given scope.
	pub fn new(scope: &'a TableScope) -> Self {
		Self { scope }
	}

	/// Returns the scope rules are prefixed with.
	pub fn scope(&self) -> &TableScope {
		self.scope
	}

	/// Compiles the styles of `config` into one CSS string.
	pub fn compile(&self, config: &TableConfiguration) -> String {
		let style = &config.style;
		let mut rules = Vec::new();

		rules.push(
			Rule::new([self.sel(classes::GRID)])
				.decl(
					"font-size",
					dimension("typography.fontSize", &style.typography.font_size),
				)
				.decl(
					"line-height",
					dimension("typography.lineHeight", &style.typography.line_height),
				),
		);

		rules.push(
			Rule::new([
				self.sel(&format!("{} th", classes::GRID)),
				self.sel(&format!("{} td", classes::GRID)),
			])
			.decl(
				"border-width",
				dimension("layout.borderWidth", &style.layout.border_width),
			)
			.decl(
				"border-style",
				accept("layout.borderStyle", &style.layout.border_style, BorderStyle::parse),
			)
			.decl(
				"border-color",
				color("layout.borderColor", &style.layout.border_color),
			)
			.decl(
				"padding",
				dimension("layout.cellPadding", &style.layout.cell_padding),
			),
		);

		rules.push(
			Rule::new([self.sel(&format!("{} thead th", classes::GRID))])
				.decl("color", color("header.textColor", &style.header.text_color))
				.decl(
					"background-color",
					color("header.background", &style.header.background),
				)
				.decl(
					"font-size",
					dimension("header.fontSize", &style.header.font_size),
				)
				.decl(
					"font-weight",
					accept("header.fontWeight", &style.header.font_weight, FontWeight::parse),
				)
				.decl(
					"text-transform",
					accept(
						"header.textTransform",
						&style.header.text_transform,
						TextTransform::parse,
					),
				),
		);

		rules.push(
			Rule::new([self.sel(&format!("{} tbody td", classes::GRID))])
				.decl("color", color("body.textColor", &style.body.text_color))
				.decl(
					"background-color",
					color("body.background", &style.body.background),
				)
				.decl("font-size", dimension("body.fontSize", &style.body.font_size)),
		);

		// Striped rows override nested price and link colors so the alternate
		// text color stays readable on the alternate background.
		let alt_text = color("body.altTextColor", &style.body.alt_text_color);
		rules.push(
			Rule::new([self.sel(&format!("{} tbody tr:nth-child(even) td", classes::GRID))])
				.decl(
					"background-color",
					color("body.altBackground", &style.body.alt_background),
				)
				.decl("color", alt_text.clone()),
		);
		rules.push(
			Rule::new(self.nested_text("tbody tr:nth-child(even) td"))
				.decl("color", alt_text),
		);

		let hover_text = color("hover.textColor", &style.hover.text_color);
		rules.push(
			Rule::new([self.sel(&format!("{} tbody tr:hover td", classes::GRID))])
				.decl(
					"background-color",
					color("hover.background", &style.hover.background),
				)
				.decl("color", hover_text.clone()),
		);
		rules.push(Rule::new(self.nested_text("tbody tr:hover td")).decl("color", hover_text));

		rules.push(
			Rule::new([self.sel(&format!(".{}", classes::BUTTON))])
				.decl(
					"background-color",
					color("button.background", &style.button.background),
				)
				.decl("color", color("button.textColor", &style.button.text_color))
				.decl(
					"border-radius",
					dimension("button.borderRadius", &style.button.border_radius),
				),
		);
		rules.push(
			Rule::new([self.sel(&format!(".{}:hover", classes::BUTTON))])
				.decl(
					"background-color",
					color("button.hoverBackground", &style.button.hover_background),
				)
				.decl(
					"color",
					color("button.hoverTextColor", &style.button.hover_text_color),
				),
		);
		rules.push(self.glyph(&format!(".{}.{}::after", classes::BUTTON, classes::ADDED), CHECK_GLYPH));
		rules.push(self.glyph(&format!(".{}::after", classes::VIEW_CART), ARROW_GLYPH));

		for column in config.visible_columns() {
			let selector = self.sel(&format!(".{}", classes::column_class(&column.id)));
			rules.push(Rule::new([selector]).decl("width", width("column.width", &column.advanced.width)));
		}

		let bulk = &config.settings.features.bulk_select;
		if bulk.enabled {
			rules.push(
				Rule::new([self.sel(&format!(".{}", classes::BULK_COLUMN))])
					.decl("width", width("bulkSelect.width", &bulk.width)),
			);
		}

		let mut css = String::new();
		let mut emitted = 0usize;
		for rule in rules.iter().filter(|rule| !rule.is_empty()) {
			rule.write_into(&mut css);
			emitted += 1;
		}

		let visibilities: Vec<Visibility> = config
			.visible_columns()
			.map(|column| column.advanced.visibility)
			.collect();
		if visibilities.contains(&Visibility::Desktop) {
			self.hide_in_media(
				&mut css,
				&format!("(max-width: {}px)", MOBILE_BREAKPOINT_PX - 1),
				classes::DESKTOP_ONLY,
			);
			emitted += 1;
		}
		if visibilities.contains(&Visibility::Mobile) {
			self.hide_in_media(
				&mut css,
				&format!("(min-width: {MOBILE_BREAKPOINT_PX}px)"),
				classes::MOBILE_ONLY,
			);
			emitted += 1;
		}

		tracing::debug!(
			table_id = %config.id,
			scope = %self.scope,
			rules = emitted,
			"compiled table styles"
		);
		css
	}

	fn sel(&self, suffix: &str) -> String {
		format!("{} {}", self.scope.selector(), suffix)
	}

	fn nested_text(&self, row_cells: &str) -> Vec<String> {
		vec![
			self.sel(&format!("{} {row_cells} .{}", classes::GRID, classes::PRICE)),
			self.sel(&format!("{} {row_cells} a:not(.{})", classes::GRID, classes::BUTTON)),
		]
	}

	fn glyph(&self, selector: &str, mask: &str) -> Rule {
		Rule::new([self.sel(selector)])
			.decl("content", Some("\"\""))
			.decl("display", Some("inline-block"))
			.decl("width", Some("1em"))
			.decl("height", Some("1em"))
			.decl("margin-left", Some("0.4em"))
			.decl("vertical-align", Some("-0.125em"))
			.decl("background-color", Some("currentColor"))
			.decl("-webkit-mask", Some(format!("{mask} no-repeat center / contain")))
			.decl("mask", Some(format!("{mask} no-repeat center / contain")))
	}

	fn hide_in_media(&self, css: &mut String, query: &str, class: &str) {
		let _ = writeln!(css, "@media {query} {{");
		Rule::new([self.sel(&format!(".{class}"))])
			.decl("display", Some("none"))
			.write_into(css);
		css.push_str("}\n");
	}
}

fn accept<T>(
	property: &'static str,
	token: &Option<String>,
	parse: impl FnOnce(&str) -> Result<T>,
) -> Option<T> {
	let raw = token.as_deref()?;
	match parse(raw) {
		Ok(value) => Some(value),
		Err(error) => {
			tracing::debug!(property, %error, "style value rejected");
			None
		}
	}
}

fn color(property: &'static str, token: &Option<String>) -> Option<SafeColor> {
	accept(property, token, SafeColor::parse)
}

fn dimension(property: &'static str, token: &Option<String>) -> Option<SafeDimension> {
	accept(property, token, SafeDimension::parse)
}

fn width(property: &'static str, width: &Width) -> Option<SafeWidth> {
	if !width.is_applied() {
		return None;
	}
	match SafeWidth::from_width(width) {
		Ok(width) => Some(width),
		Err(error) => {
			tracing::debug!(property, %error, "style value rejected");
			None
		}
	}
}
