//! Table configuration registry.

use crate::error::{ConfError, Result};
use crate::sources::extension;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use vitrine_types::TableConfiguration;

/// Supplies table configurations by id.
///
/// Implementations return an owned copy so every render works on a
/// configuration read fresh for that call.
pub trait TableStore: Send + Sync {
	/// Returns the configuration of table `id`.
	fn table(&self, id: &str) -> Option<TableConfiguration>;

	/// Returns the ids of all known tables.
	fn table_ids(&self) -> Vec<String>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TablesDocument {
	Wrapped { tables: Vec<TableConfiguration> },
	Bare(Vec<TableConfiguration>),
}

impl TablesDocument {
	fn into_tables(self) -> Vec<TableConfiguration> {
		match self {
			Self::Wrapped { tables } | Self::Bare(tables) => tables,
		}
	}
}

/// In-memory [`TableStore`] keeping tables in insertion order.
///
/// Table files hold a `tables` list: `[[tables]]` entries in TOML, or
/// `{"tables": [...]}` (or a bare array) in JSON.
///
/// # Examples
///
/// ```
/// use vitrine_conf::{TableRegistry, TableStore};
///
/// let registry = TableRegistry::from_toml_str(r#"
/// [[tables]]
/// id = "mugs"
/// source = { type = "category", queryArgs = { categoryIds = [12] } }
///
/// [[tables.columns]]
/// id = "name"
/// type = "name"
/// heading = "Product"
/// "#).unwrap();
///
/// let mugs = registry.table("mugs").unwrap();
/// assert_eq!(mugs.columns.len(), 1);
/// assert_eq!(mugs.source.query_args.category_ids, vec![12]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
	tables: IndexMap<String, TableConfiguration>,
}

impl TableRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a table, returning the configuration it replaced.
	pub fn insert(&mut self, config: TableConfiguration) -> Option<TableConfiguration> {
		self.tables.insert(config.id.clone(), config)
	}

	/// Returns table `id` without copying it.
	pub fn get(&self, id: &str) -> Option<&TableConfiguration> {
		self.tables.get(id)
	}

	/// Number of tables.
	pub fn len(&self) -> usize {
		self.tables.len()
	}

	/// Returns whether the registry holds no table.
	pub fn is_empty(&self) -> bool {
		self.tables.is_empty()
	}

	/// Iterates over the tables in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = &TableConfiguration> {
		self.tables.values()
	}

	/// Parses a JSON table document.
	pub fn from_json_str(input: &str) -> Result<Self> {
		let document: TablesDocument = serde_json::from_str(input)?;
		Ok(Self::from_tables(document.into_tables()))
	}

	/// Parses a TOML table document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let document: TablesDocument = toml::from_str(input)?;
		Ok(Self::from_tables(document.into_tables()))
	}

	/// Loads a `.toml` or `.json` table file.
	///
	/// # Errors
	///
	/// Fails when the file is missing, unreadable, not parsable, or has
	/// another extension.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = fs::read_to_string(path)?;
		let registry = match extension(path)?.as_str() {
			"toml" => Self::from_toml_str(&content)?,
			"json" => Self::from_json_str(&content)?,
			other => {
				return Err(ConfError::InvalidSource(format!(
					"unsupported file extension: {other}"
				)));
			}
		};
		tracing::info!(path = %path.display(), tables = registry.len(), "loaded table configurations");
		Ok(registry)
	}

	/// Builds a registry from parsed tables. Tables without an id are
	/// skipped and a repeated id keeps the last definition.
	pub fn from_tables(tables: impl IntoIterator<Item = TableConfiguration>) -> Self {
		let mut registry = Self::new();
		for config in tables {
			if config.id.trim().is_empty() {
				tracing::warn!("skipping table configuration without an id");
				continue;
			}
			let id = config.id.clone();
			if registry.insert(config).is_some() {
				tracing::warn!(table_id = %id, "duplicate table id, keeping the last definition");
			}
		}
		registry
	}
}

impl TableStore for TableRegistry {
	fn table(&self, id: &str) -> Option<TableConfiguration> {
		self.get(id).cloned()
	}

	fn table_ids(&self) -> Vec<String> {
		self.tables.keys().cloned().collect()
	}
}
