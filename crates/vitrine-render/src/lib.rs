//! # Vitrine Render
//!
//! Renders product tables from a [`TableConfiguration`](vitrine_types::TableConfiguration):
//!
//! - [`TableRenderer`]: the complete table with its scoped style block,
//!   toolbar, header, body and pagination.
//! - [`AjaxResponseBuilder`]: only the body rows and the pagination, for
//!   in-place updates after a search or page change.
//! - [`CellRegistry`]: column type to [`CellRenderer`] dispatch.
//! - [`ButtonState`]: the purchase-control state machine.
//! - [`PaginationRenderer`]: page links around a `%#%` URL template.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use vitrine_query::InMemoryDataSource;
//! use vitrine_render::{RequestContext, TableRenderer};
//! use vitrine_types::{Column, ProductRow, RuntimeArgs, Source, TableConfiguration};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let catalog = InMemoryDataSource::new([ProductRow::new(1, "Mug").with_price(9.0)]);
//! let renderer = TableRenderer::new(Arc::new(catalog));
//!
//! let mut config = TableConfiguration::new("mugs");
//! config.source = Source::specific([1]);
//! config.columns = vec![Column::new("n", "name", "Name")];
//!
//! let html = renderer
//!     .render(&config, &RuntimeArgs::new(), &RequestContext::new())
//!     .await
//!     .unwrap();
//! assert!(html.contains(r#"data-table-id="mugs""#));
//! assert!(html.contains(">Mug</a>"));
//! # }
//! ```

pub mod ajax;
pub mod bulk;
pub mod button;
pub mod cells;
pub mod context;
pub mod error;
pub mod labels;
pub mod pagination;
pub mod table;

pub use ajax::{AjaxResponse, AjaxResponseBuilder};
pub use bulk::BulkSelectLayout;
pub use button::{ButtonState, render_button};
pub use cells::{CellRegistry, CellRenderer};
pub use context::{CartBehavior, CellContext, RequestContext};
pub use error::{RenderError, Result};
pub use labels::Labels;
pub use pagination::{PAGE_PARAM, PAGE_PLACEHOLDER, PaginationRenderer};
pub use table::{SEARCH_PARAM, TableRenderer};
