//! # Vitrine Query
//!
//! Turns a table's declarative [`Source`](vitrine_types::Source) into a
//! [`QueryDescriptor`] and defines the [`ProductDataSource`] seam that
//! executes it.
//!
//! The descriptor is backend neutral and serializable. An
//! [`InMemoryDataSource`] executes it over a fixed product list.

pub mod builder;
pub mod descriptor;
pub mod memory;
pub mod source;

pub use builder::QueryBuilder;
pub use descriptor::{PriceBounds, QueryDescriptor, Restriction};
pub use memory::InMemoryDataSource;
pub use source::{DataSourceError, ProductDataSource, QueryResult, Result as DataSourceResult};
