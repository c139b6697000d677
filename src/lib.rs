//! # Vitrine
//!
//! Declarative product tables for storefront catalogs.
//!
//! A site owner authors a [`TableConfiguration`]: which products to show
//! ([`Source`]), which columns, and how the table looks. At request time
//! Vitrine turns that configuration plus the per-request [`RuntimeArgs`]
//! into a product query, renders one row per product through pluggable
//! cell renderers, and wraps the result in a style block scoped to that
//! single table instance.
//!
//! ## Crates
//!
//! - [`types`]: configuration and product row data model
//! - [`markup`]: HTML tree and escaping helpers
//! - [`style`]: style-token validation and scoped CSS compilation
//! - [`query`]: query descriptors and the data-source seam
//! - [`render`]: table, row, button and pagination rendering
//! - [`conf`] (feature `conf`): table files and server settings
//! - [`server`] (feature `server`): the HTTP service
//!
//! ## Quick Example
//!
//! ```
//! use std::sync::Arc;
//! use vitrine::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> vitrine::render::Result<()> {
//! let catalog = InMemoryDataSource::new([
//!     ProductRow::new(101, "Blue Mug").with_price(12.0),
//!     ProductRow::new(102, "Teapot").with_price(40.0),
//! ]);
//!
//! let mut table = TableConfiguration::new("mugs");
//! table.source = Source::specific([101, 102]);
//! table.columns = vec![
//!     Column::new("name", "name", "Product"),
//!     Column::new("price", "price", "Price"),
//!     Column::new("buy", "button", "Buy"),
//! ];
//!
//! let renderer = TableRenderer::new(Arc::new(catalog));
//! let html = renderer
//!     .render(&table, &RuntimeArgs::new(), &RequestContext::new())
//!     .await?;
//! assert!(html.contains("Blue Mug"));
//! # Ok(())
//! # }
//! ```

pub use vitrine_markup as markup;
pub use vitrine_query as query;
pub use vitrine_render as render;
pub use vitrine_style as style;
pub use vitrine_types as types;

#[cfg(feature = "conf")]
pub use vitrine_conf as conf;
#[cfg(feature = "server")]
pub use vitrine_server as server;

// Re-export the data model
pub use vitrine_types::{
	BulkPosition, Column, ProductKind, ProductRow, RuntimeArgs, Settings, Source, SourceType,
	TableConfiguration, Visibility,
};

// Re-export the rendering entry points
pub use vitrine_query::{InMemoryDataSource, ProductDataSource, QueryBuilder, QueryDescriptor};
pub use vitrine_render::{
	AjaxResponse, AjaxResponseBuilder, CellRegistry, CellRenderer, Labels, RenderError,
	RequestContext, TableRenderer,
};
pub use vitrine_style::{StyleCompiler, TableScope};

#[cfg(feature = "conf")]
pub use vitrine_conf::{ServerSettings, TableRegistry, TableStore};

#[cfg(feature = "server")]
pub use vitrine_server::{CartService, HttpServer, InMemoryCart, VitrineApp};

pub mod prelude {
	pub use crate::{
		AjaxResponseBuilder, BulkPosition, CellRegistry, Column, InMemoryDataSource,
		ProductDataSource, ProductRow, RequestContext, RuntimeArgs, Source, SourceType,
		TableConfiguration, TableRenderer, Visibility,
	};

	#[cfg(feature = "conf")]
	pub use crate::{TableRegistry, TableStore};

	#[cfg(feature = "server")]
	pub use crate::{HttpServer, VitrineApp};
}
