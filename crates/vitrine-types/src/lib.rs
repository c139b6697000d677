//! # Vitrine Types
//!
//! Data model shared by the Vitrine crates: the declarative
//! [`TableConfiguration`] a site owner authors, the per-request
//! [`RuntimeArgs`], and the read-only [`ProductRow`] snapshots the renderer
//! consumes.
//!
//! Configurations are best-effort data. Every section deserializes leniently:
//! missing or malformed sections fall back to documented defaults rather than
//! failing the whole table.
//!
//! ```
//! use vitrine_types::{SourceType, TableConfiguration};
//!
//! let config = TableConfiguration::from_json(
//!     r#"{"id": "t1", "source": {"type": "sale"}, "settings": {"pagination": {"limit": "oops"}}}"#,
//! )
//! .unwrap();
//! assert_eq!(config.source.source_type, SourceType::Sale);
//! assert_eq!(config.settings.pagination.page_size(), 10);
//! ```

pub mod column;
pub mod lenient;
pub mod product;
pub mod runtime;
pub mod settings;
pub mod source;
pub mod style;
pub mod table;

pub use column::{Column, ColumnAdvanced, ColumnSettings, Visibility, Width};
pub use product::{
	AttributeOption, ExternalLink, ProductImage, ProductKind, ProductRow, StockInfo, StockStatus,
	Variation, VariationAttribute,
};
pub use runtime::RuntimeArgs;
pub use settings::{
	BulkPosition, BulkSelect, CartSettings, DEFAULT_PAGE_SIZE, Features, PaginationSettings,
	Settings,
};
pub use source::{
	OrderBy, PRICE_RANGE_OPEN_MAX, PriceRange, QueryArgs, SortDirection, Sort, Source, SourceType,
	StockFilter,
};
pub use style::{
	BodyStyle, ButtonStyle, HeaderStyle, HoverStyle, LayoutStyle, StyleTokens, TypographyStyle,
};
pub use table::TableConfiguration;
