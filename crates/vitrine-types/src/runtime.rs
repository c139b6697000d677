//! Per-request runtime arguments.

use serde::{Deserialize, Serialize};

/// Transient parameters of one render request. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuntimeArgs {
	/// Free-text search narrowing the table's source.
	pub search_term: Option<String>,
	/// Requested page (1-indexed).
	pub page_number: Option<u32>,
}

impl RuntimeArgs {
	/// Creates empty runtime arguments.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the search term.
	pub fn with_search(mut self, term: impl Into<String>) -> Self {
		self.search_term = Some(term.into());
		self
	}

	/// Sets the requested page.
	pub fn with_page(mut self, page: u32) -> Self {
		self.page_number = Some(page);
		self
	}

	/// Returns the trimmed search term, or `None` when it is blank.
	pub fn search(&self) -> Option<&str> {
		self.search_term
			.as_deref()
			.map(str::trim)
			.filter(|term| !term.is_empty())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(None, None)]
	#[case(Some("   "), None)]
	#[case(Some("  mug "), Some("mug"))]
	fn test_search_is_trimmed(#[case] raw: Option<&str>, #[case] expected: Option<&str>) {
		let args = RuntimeArgs {
			search_term: raw.map(str::to_string),
			page_number: None,
		};
		assert_eq!(args.search(), expected);
	}
}
