//! Rendering tests for composed markup trees.

use rstest::rstest;
use vitrine_markup::{IntoPage, Page, PageElement, safe_href, strip_tags, trim_words};

#[rstest]
fn test_nested_table_row_renders_in_order() {
	let row = PageElement::new("tr")
		.attr("class", "vt-row")
		.child(PageElement::new("td").child("Mug"))
		.child(
			PageElement::new("td")
				.child(PageElement::new("input").attr("type", "checkbox").bool_attr("disabled", true)),
		)
		.into_page();

	assert_eq!(
		row.render_to_string(),
		r#"<tr class="vt-row"><td>Mug</td><td><input type="checkbox" disabled="disabled" /></td></tr>"#
	);
}

#[rstest]
fn test_hostile_catalog_text_is_neutralized() {
	let name = r#"<img src=x onerror="alert(1)">"#.to_string();
	let link = PageElement::new("a")
		.attr("href", safe_href("javascript:alert(1)"))
		.child(name)
		.into_page();

	let html = link.render_to_string();
	assert!(html.starts_with(r##"<a href="#">"##));
	assert!(!html.contains("<img"));
	assert!(html.contains("&lt;img"));
}

#[rstest]
fn test_summary_pipeline() {
	let summary = "<p>A <strong>sturdy</strong> mug for tea, coffee, cocoa and every other warm drink you like.</p>";
	assert_eq!(
		trim_words(&strip_tags(summary), 10),
		"A sturdy mug for tea, coffee, cocoa and every other…"
	);
}

#[rstest]
fn test_optional_children_and_attrs() {
	let badge: Option<&'static str> = None;
	let cell = PageElement::new("td")
		.opt_attr("data-sku", Some("MUG-1"))
		.opt_attr("title", None::<String>)
		.child(badge)
		.child(Page::fragment(vec!["a", "b"]))
		.into_page();

	assert_eq!(cell.render_to_string(), r#"<td data-sku="MUG-1">ab</td>"#);
}
