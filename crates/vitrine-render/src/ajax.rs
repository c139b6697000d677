//! Partial renders for in-place table updates.

use crate::context::RequestContext;
use crate::error::Result;
use crate::table::TableRenderer;
use serde::{Deserialize, Serialize};
use vitrine_types::{RuntimeArgs, TableConfiguration};

/// Replacement markup for an already rendered table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AjaxResponse {
	/// Inner markup of the table body.
	pub rows_markup: String,
	/// The pagination `<nav>`, or `""` when there is at most one page.
	pub pagination_markup: String,
}

/// Renders only the rows and the pagination of a table.
///
/// Shares the query, row and pagination code of [`TableRenderer`], so the
/// partial output matches what a full render would put in the same places.
#[derive(Debug, Clone, Copy)]
pub struct AjaxResponseBuilder<'a> {
	renderer: &'a TableRenderer,
}

impl<'a> AjaxResponseBuilder<'a> {
	/// Creates a builder backed by `renderer`.
	pub fn new(renderer: &'a TableRenderer) -> Self {
		Self { renderer }
	}

	/// Renders the partial response.
	///
	/// # Errors
	///
	/// Returns [`RenderError::DataSource`](crate::RenderError::DataSource) when
	/// the product backend fails.
	pub async fn build(
		&self,
		config: &TableConfiguration,
		args: &RuntimeArgs,
		request: &RequestContext,
	) -> Result<AjaxResponse> {
		let fetched = self.renderer.fetch(config, args, request).await?;
		let response = AjaxResponse {
			rows_markup: self
				.renderer
				.body_rows(config, &fetched)
				.render_to_string(),
			pagination_markup: self
				.renderer
				.pagination(config, &fetched, request)
				.render_to_string(),
		};
		tracing::debug!(
			table_id = %config.id,
			page = fetched.result.page,
			rows = fetched.result.rows.len(),
			"rendered table rows"
		);
		Ok(response)
	}
}
