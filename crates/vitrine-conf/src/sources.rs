//! Configuration sources for layered server settings.
//!
//! Sources are merged in priority order: environment variables override
//! settings files, which override built-in defaults.

use crate::error::{ConfError, Result};
use indexmap::IndexMap;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix of the environment variables read by [`EnvSource::new`].
pub const ENV_PREFIX: &str = "VITRINE_";

/// A provider of top-level settings keys.
pub trait ConfigSource: Send + Sync {
	/// Loads the keys this source defines.
	fn load(&self) -> Result<IndexMap<String, Value>>;

	/// Merge priority; higher wins.
	fn priority(&self) -> u8;

	/// Human-readable origin, used in logs.
	fn description(&self) -> String;
}

/// Settings from `VITRINE_*` environment variables.
///
/// `VITRINE_PAGE_URL` becomes the key `pageUrl`; values are kept as
/// strings and empty values are ignored.
pub struct EnvSource {
	prefix: String,
	vars: Option<Vec<(OsString, OsString)>>,
}

impl EnvSource {
	/// Reads the process environment with the default prefix.
	pub fn new() -> Self {
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: None,
		}
	}

	/// Reads a fixed set of variables instead of the process environment.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_conf::sources::{ConfigSource, EnvSource};
	///
	/// let source = EnvSource::from_vars([
	///     ("VITRINE_LOG_LEVEL", "debug"),
	///     ("HOME", "/root"),
	/// ]);
	/// let keys = source.load().unwrap();
	/// assert_eq!(keys.get("logLevel").and_then(|v| v.as_str()), Some("debug"));
	/// assert_eq!(keys.len(), 1);
	/// ```
	pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<OsString>,
		V: Into<OsString>,
	{
		Self {
			prefix: ENV_PREFIX.to_string(),
			vars: Some(
				vars.into_iter()
					.map(|(key, value)| (key.into(), value.into()))
					.collect(),
			),
		}
	}

	/// Replaces the variable prefix.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn load(&self) -> Result<IndexMap<String, Value>> {
		let vars: Vec<(OsString, OsString)> = match &self.vars {
			Some(vars) => vars.clone(),
			None => std::env::vars_os().collect(),
		};

		let mut config = IndexMap::new();
		for (key, value) in vars {
			let Some(name) = key.to_str().and_then(|key| key.strip_prefix(&self.prefix)) else {
				continue;
			};
			let value = value
				.into_string()
				.map_err(|_| ConfError::Env(format!("{}{name} is not valid unicode", self.prefix)))?;
			if value.trim().is_empty() {
				continue;
			}
			config.insert(camel_case(name), Value::String(value));
		}
		Ok(config)
	}

	fn priority(&self) -> u8 {
		100
	}

	fn description(&self) -> String {
		format!("Environment variables (prefix: {})", self.prefix)
	}
}

/// Converts `PAGE_URL` into `pageUrl`.
fn camel_case(name: &str) -> String {
	let mut out = String::with_capacity(name.len());
	for (index, word) in name.split('_').filter(|word| !word.is_empty()).enumerate() {
		let word = word.to_ascii_lowercase();
		if index == 0 {
			out.push_str(&word);
		} else {
			let mut chars = word.chars();
			if let Some(first) = chars.next() {
				out.push(first.to_ascii_uppercase());
				out.push_str(chars.as_str());
			}
		}
	}
	out
}

/// Settings from a TOML file. A missing file defines no keys.
pub struct TomlFileSource {
	path: PathBuf,
}

impl TomlFileSource {
	/// Creates a source reading `path`.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for TomlFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}
		let content = fs::read_to_string(&self.path)?;
		let document: toml::Value = toml::from_str(&content)?;
		object_keys(serde_json::to_value(document)?)
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("TOML file: {}", self.path.display())
	}
}

/// Settings from a JSON file. A missing file defines no keys.
pub struct JsonFileSource {
	path: PathBuf,
}

impl JsonFileSource {
	/// Creates a source reading `path`.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}
}

impl ConfigSource for JsonFileSource {
	fn load(&self) -> Result<IndexMap<String, Value>> {
		if !self.path.exists() {
			return Ok(IndexMap::new());
		}
		let content = fs::read_to_string(&self.path)?;
		object_keys(serde_json::from_str(&content)?)
	}

	fn priority(&self) -> u8 {
		50
	}

	fn description(&self) -> String {
		format!("JSON file: {}", self.path.display())
	}
}

/// Fixed values, lowest priority.
#[derive(Default)]
pub struct DefaultSource {
	values: IndexMap<String, Value>,
}

impl DefaultSource {
	/// Creates an empty source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a value.
	pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
		self.values.insert(key.into(), value);
		self
	}
}

impl ConfigSource for DefaultSource {
	fn load(&self) -> Result<IndexMap<String, Value>> {
		Ok(self.values.clone())
	}

	fn priority(&self) -> u8 {
		0
	}

	fn description(&self) -> String {
		"Default values".to_string()
	}
}

/// Picks a file source from the extension of `path` (`.toml` or `.json`).
///
/// # Examples
///
/// ```
/// use vitrine_conf::sources::auto_source;
///
/// assert!(auto_source("vitrine.toml").is_ok());
/// assert!(auto_source("vitrine.json").is_ok());
/// assert!(auto_source("vitrine.yaml").is_err());
/// ```
pub fn auto_source(path: impl AsRef<Path>) -> Result<Box<dyn ConfigSource>> {
	let path = path.as_ref();
	match extension(path)?.as_str() {
		"toml" => Ok(Box::new(TomlFileSource::new(path))),
		"json" => Ok(Box::new(JsonFileSource::new(path))),
		other => Err(ConfError::InvalidSource(format!(
			"unsupported file extension: {other}"
		))),
	}
}

pub(crate) fn extension(path: &Path) -> Result<String> {
	path.extension()
		.and_then(|ext| ext.to_str())
		.map(str::to_ascii_lowercase)
		.ok_or_else(|| {
			ConfError::InvalidSource(format!("no file extension: {}", path.display()))
		})
}

fn object_keys(value: Value) -> Result<IndexMap<String, Value>> {
	match value {
		Value::Object(map) => Ok(map.into_iter().collect()),
		_ => Err(ConfError::InvalidSource(
			"expected a table at the document root".to_string(),
		)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::io::Write;
	use tempfile::TempDir;

	#[rstest]
	#[case("BIND", "bind")]
	#[case("PAGE_URL", "pageUrl")]
	#[case("LOG__LEVEL", "logLevel")]
	fn test_camel_case(#[case] name: &str, #[case] expected: &str) {
		assert_eq!(camel_case(name), expected);
	}

	#[rstest]
	fn test_env_source_filters_prefix_and_blank_values() {
		let source = EnvSource::from_vars([
			("VITRINE_BIND", "0.0.0.0:9000"),
			("VITRINE_PAGE_URL", "  "),
			("PATH", "/usr/bin"),
		]);
		let config = source.load().unwrap();
		assert_eq!(config.len(), 1);
		assert_eq!(config["bind"], Value::String("0.0.0.0:9000".to_string()));
	}

	#[rstest]
	fn test_custom_prefix() {
		let source = EnvSource::from_vars([("SHOP_LOG_LEVEL", "warn")]).with_prefix("SHOP_");
		assert_eq!(
			source.load().unwrap()["logLevel"],
			Value::String("warn".to_string())
		);
	}

	#[rstest]
	fn test_toml_source() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("vitrine.toml");
		let mut file = fs::File::create(&path).unwrap();
		writeln!(file, "bind = \"127.0.0.1:3000\"\nlogLevel = \"debug\"").unwrap();

		let config = TomlFileSource::new(&path).load().unwrap();
		assert_eq!(config["bind"], Value::String("127.0.0.1:3000".to_string()));
		assert_eq!(config["logLevel"], Value::String("debug".to_string()));
	}

	#[rstest]
	fn test_missing_file_defines_nothing() {
		let dir = TempDir::new().unwrap();
		let config = JsonFileSource::new(dir.path().join("absent.json"))
			.load()
			.unwrap();
		assert!(config.is_empty());
	}

	#[rstest]
	fn test_json_root_must_be_object() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("vitrine.json");
		fs::write(&path, "[1, 2]").unwrap();
		assert!(matches!(
			JsonFileSource::new(&path).load(),
			Err(ConfError::InvalidSource(_))
		));
	}

	#[rstest]
	fn test_priorities() {
		assert_eq!(EnvSource::new().priority(), 100);
		assert_eq!(TomlFileSource::new("a.toml").priority(), 50);
		assert_eq!(JsonFileSource::new("a.json").priority(), 50);
		assert_eq!(DefaultSource::new().priority(), 0);
	}
}
