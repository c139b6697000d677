//! # Vitrine Conf
//!
//! Loads the two kinds of configuration a Vitrine deployment needs:
//!
//! - table configurations, from a TOML or JSON file, into a
//!   [`TableRegistry`] that implements [`TableStore`];
//! - [`ServerSettings`], merged from a settings file and `VITRINE_*`
//!   environment variables by [`SettingsBuilder`].
//!
//! ```no_run
//! use vitrine_conf::{ServerSettings, TableRegistry};
//!
//! # fn main() -> vitrine_conf::Result<()> {
//! let settings = ServerSettings::load(Some("vitrine.toml".as_ref()))?;
//! if let Some(path) = &settings.tables {
//!     let registry = TableRegistry::load(path)?;
//!     println!("{} tables", registry.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod settings;
pub mod sources;
pub mod tables;

pub use error::{ConfError, Result};
pub use settings::{DEFAULT_BIND, DEFAULT_LOG_LEVEL, ServerSettings, SettingsBuilder};
pub use sources::{ConfigSource, EnvSource, auto_source};
pub use tables::{TableRegistry, TableStore};
