//! Server settings.

use crate::error::{ConfError, Result};
use crate::sources::{ConfigSource, EnvSource, auto_source};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings of the Vitrine HTTP service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerSettings {
	/// Listen address, `host:port`.
	pub bind: String,
	/// Page URL used as the pagination base when a request supplies none.
	#[serde(alias = "page_url")]
	pub page_url: Option<String>,
	/// `tracing` filter directive, e.g. `info` or `vitrine_render=debug`.
	#[serde(alias = "log_level")]
	pub log_level: String,
	/// File holding the table configurations.
	pub tables: Option<PathBuf>,
	/// JSON file of product rows served by the in-memory catalog.
	pub catalog: Option<PathBuf>,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			bind: DEFAULT_BIND.to_string(),
			page_url: None,
			log_level: DEFAULT_LOG_LEVEL.to_string(),
			tables: None,
			catalog: None,
		}
	}
}

impl ServerSettings {
	/// Loads settings from an optional file overlaid by `VITRINE_*`
	/// environment variables.
	///
	/// # Errors
	///
	/// Fails when the file cannot be read or parsed, or when an environment
	/// variable is not valid unicode.
	pub fn load(path: Option<&Path>) -> Result<Self> {
		let mut builder = SettingsBuilder::new();
		if let Some(path) = path {
			builder = builder.add_boxed_source(auto_source(path)?);
		}
		builder.add_source(EnvSource::new()).build()
	}

	/// Parses [`bind`](Self::bind) into a socket address.
	///
	/// # Errors
	///
	/// Returns [`ConfError::InvalidSetting`] when the address is malformed.
	pub fn bind_addr(&self) -> Result<SocketAddr> {
		self.bind
			.trim()
			.parse()
			.map_err(|error: std::net::AddrParseError| ConfError::InvalidSetting {
				key: "bind",
				message: error.to_string(),
			})
	}
}

/// Merges configuration sources by priority into [`ServerSettings`].
///
/// # Examples
///
/// ```
/// use serde_json::Value;
/// use vitrine_conf::SettingsBuilder;
/// use vitrine_conf::sources::{DefaultSource, EnvSource};
///
/// let settings = SettingsBuilder::new()
///     .add_source(EnvSource::from_vars([("VITRINE_LOG_LEVEL", "debug")]))
///     .add_source(
///         DefaultSource::new()
///             .with_value("logLevel", Value::String("warn".into()))
///             .with_value("bind", Value::String("0.0.0.0:80".into())),
///     )
///     .build()
///     .unwrap();
/// assert_eq!(settings.log_level, "debug");
/// assert_eq!(settings.bind, "0.0.0.0:80");
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	/// Creates a builder without sources.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a source.
	pub fn add_source(self, source: impl ConfigSource + 'static) -> Self {
		self.add_boxed_source(Box::new(source))
	}

	/// Adds an already boxed source.
	pub fn add_boxed_source(mut self, source: Box<dyn ConfigSource>) -> Self {
		self.sources.push(source);
		self
	}

	/// Loads every source and merges the keys, higher priority last.
	pub fn merged(&self) -> Result<IndexMap<String, Value>> {
		let mut ordered: Vec<&dyn ConfigSource> = self.sources.iter().map(|source| &**source).collect();
		ordered.sort_by_key(|source| source.priority());

		let mut merged = IndexMap::new();
		for source in ordered {
			let keys = source.load()?;
			tracing::debug!(source = %source.description(), keys = keys.len(), "loaded settings source");
			merged.extend(keys);
		}
		Ok(merged)
	}

	/// Builds the settings. Keys no source defines keep their defaults.
	pub fn build(self) -> Result<ServerSettings> {
		let merged = self.merged()?;
		Ok(serde_json::from_value(Value::Object(
			merged.into_iter().collect(),
		))?)
	}
}
