//! Page links.

use crate::labels::Labels;
use url::{Position, Url};
use vitrine_markup::{Page, PageElement};
use vitrine_style::classes;

/// Token standing for a page number in URL templates.
pub const PAGE_PLACEHOLDER: &str = "%#%";

/// Query parameter carrying the page number.
pub const PAGE_PARAM: &str = "vt_page";

/// Pages shown on each side of the current page.
const WINDOW: u32 = 2;

const RELATIVE_BASE: &str = "http://vitrine.invalid/";

/// Returns the pagination URL template for `base_url`.
///
/// Any `vt_page` already present is replaced and the fragment is dropped.
/// Relative URLs stay relative.
///
/// # Examples
///
/// ```
/// use vitrine_render::pagination::url_template;
///
/// assert_eq!(url_template(""), "?vt_page=%#%");
/// assert_eq!(url_template("/shop/?vt_page=4&color=blue"), "/shop/?color=blue&vt_page=%#%");
/// assert_eq!(
///     url_template("https://example.com/mugs#top"),
///     "https://example.com/mugs?vt_page=%#%"
/// );
/// ```
pub fn url_template(base_url: &str) -> String {
	let base_url = base_url.trim();
	if base_url.is_empty() {
		return format!("?{PAGE_PARAM}={PAGE_PLACEHOLDER}");
	}

	let (mut url, relative) = match Url::parse(base_url) {
		Ok(url) => (url, false),
		Err(_) => match Url::parse(RELATIVE_BASE).and_then(|root| root.join(base_url)) {
			Ok(url) => (url, true),
			Err(error) => {
				tracing::debug!(%error, "unusable pagination base url");
				return format!("?{PAGE_PARAM}={PAGE_PLACEHOLDER}");
			}
		},
	};

	let kept: Vec<(String, String)> = url
		.query_pairs()
		.filter(|(key, _)| key != PAGE_PARAM)
		.map(|(key, value)| (key.into_owned(), value.into_owned()))
		.collect();
	url.set_fragment(None);
	if kept.is_empty() {
		url.set_query(None);
	} else {
		url.query_pairs_mut().clear().extend_pairs(kept);
	}

	let mut template = if relative {
		url[Position::BeforePath..].to_string()
	} else {
		url.to_string()
	};
	template.push(if url.query().is_some() { '&' } else { '?' });
	template.push_str(PAGE_PARAM);
	template.push('=');
	template.push_str(PAGE_PLACEHOLDER);
	template
}

/// Returns the page numbers to show, with `None` marking a gap.
///
/// Always includes the first and last page and the pages within two of
/// `current`.
pub fn page_window(current: u32, total: u32) -> Vec<Option<u32>> {
	let mut pages = Vec::new();
	let mut previous = 0;
	for page in 1..=total {
		let near = page.abs_diff(current) <= WINDOW;
		if page == 1 || page == total || near {
			if page > previous + 1 {
				pages.push(None);
			}
			pages.push(Some(page));
			previous = page;
		}
	}
	pages
}

/// Renders page links from the served page facts.
#[derive(Debug, Clone)]
pub struct PaginationRenderer {
	previous_label: String,
	next_label: String,
	nav_label: String,
}

impl PaginationRenderer {
	/// Creates a renderer with the given link labels.
	pub fn new(
		previous_label: impl Into<String>,
		next_label: impl Into<String>,
		nav_label: impl Into<String>,
	) -> Self {
		Self {
			previous_label: previous_label.into(),
			next_label: next_label.into(),
			nav_label: nav_label.into(),
		}
	}

	/// Creates a renderer using the pagination labels of `labels`.
	pub fn from_labels(labels: &Labels) -> Self {
		Self::new(
			labels.previous_page.clone(),
			labels.next_page.clone(),
			labels.pagination.clone(),
		)
	}

	/// Renders links for `current` of `total` pages under `base_url`.
	///
	/// Renders nothing when there is at most one page. `current` is clamped
	/// into `1..=total`.
	pub fn render(&self, current: u32, total: u32, base_url: &str) -> Page {
		if total <= 1 {
			return Page::Empty;
		}
		let current = current.clamp(1, total);
		let template = url_template(base_url);
		let link = |page: u32, class: &str, text: String| {
			PageElement::new("a")
				.attr("class", class.to_string())
				.attr("href", template.replace(PAGE_PLACEHOLDER, &page.to_string()))
				.attr("data-page", page.to_string())
				.child(text)
		};

		let mut items: Vec<Page> = Vec::new();
		if current > 1 {
			items.push(link(current - 1, "vt-page vt-page-prev", self.previous_label.clone()).into());
		}
		for entry in page_window(current, total) {
			items.push(match entry {
				Some(page) if page == current => PageElement::new("span")
					.attr("class", "vt-page vt-page-current")
					.attr("aria-current", "page")
					.child(page.to_string())
					.into(),
				Some(page) => link(page, "vt-page", page.to_string()).into(),
				None => PageElement::new("span")
					.attr("class", "vt-page-gap")
					.child("…")
					.into(),
			});
		}
		if current < total {
			items.push(link(current + 1, "vt-page vt-page-next", self.next_label.clone()).into());
		}

		PageElement::new("nav")
			.attr("class", classes::PAGINATION)
			.attr("aria-label", self.nav_label.clone())
			.attr("data-url-template", template.clone())
			.attr("data-current-page", current.to_string())
			.attr("data-total-pages", total.to_string())
			.children(items)
			.into()
	}
}
