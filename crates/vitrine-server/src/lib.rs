//! # Vitrine Server
//!
//! HTTP service in front of the Vitrine renderer:
//!
//! - `POST /tables/rows` re-renders the rows and pagination of a configured
//!   table for in-place updates;
//! - `POST /cart/batch` adds several products to the cart, reporting a
//!   result per item.
//!
//! Every error response carries a JSON `{"error": "..."}` body.
//!
//! ```no_run
//! use std::sync::Arc;
//! use vitrine_conf::TableRegistry;
//! use vitrine_query::InMemoryDataSource;
//! use vitrine_render::TableRenderer;
//! use vitrine_server::{HttpServer, InMemoryCart, VitrineApp};
//!
//! # async fn run() -> vitrine_server::Result<()> {
//! let renderer = TableRenderer::new(Arc::new(InMemoryDataSource::default()));
//! let app = VitrineApp::new(
//!     Arc::new(renderer),
//!     Arc::new(TableRegistry::load("tables.toml")?),
//!     Arc::new(InMemoryCart::new()),
//! );
//! HttpServer::new(Arc::new(app))
//!     .listen("127.0.0.1:8080".parse().expect("valid address"))
//!     .await
//! # }
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod server;

pub use api::{
	BatchItem, BatchItemResult, BatchRequest, BatchResponse, CART_BATCH_PATH, ROWS_PATH,
	RowsRequest, VitrineApp,
};
pub use cart::{CartError, CartLine, CartService, InMemoryCart};
pub use catalog::{load_catalog, parse_catalog};
pub use error::{ApiError, Result, ServerError};
pub use logging::init_tracing;
pub use server::{HttpServer, MAX_BODY_BYTES};
