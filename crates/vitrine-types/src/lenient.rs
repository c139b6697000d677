//! Best-effort deserialization helpers.
//!
//! Table configurations are authored by a builder UI and stored as loosely
//! typed data, so numbers regularly arrive as strings and booleans as `"1"`.
//! These helpers accept the common spellings and degrade anything else to the
//! field's default instead of rejecting the whole configuration.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a section, falling back to `T::default()` when it is malformed.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	let value = Value::deserialize(deserializer)?;
	Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserializes a list, dropping individual entries that fail to parse.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let value = Value::deserialize(deserializer)?;
	Ok(match value {
		Value::Array(items) => items
			.into_iter()
			.filter_map(|item| serde_json::from_value(item).ok())
			.collect(),
		_ => Vec::new(),
	})
}

/// Deserializes an ordered list of positive IDs.
///
/// Accepts a JSON array of numbers or numeric strings, or a comma-separated
/// string (`"101, 102"`). Invalid and zero entries are skipped; the order of
/// the remaining entries is preserved.
pub fn id_list<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(match value {
		Value::Array(items) => items.iter().filter_map(as_id).collect(),
		Value::String(s) => s.split(',').filter_map(parse_id).collect(),
		other => as_id(&other).into_iter().collect(),
	})
}

/// Deserializes a boolean flag written as a bool, number or string.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	as_flag(&value).ok_or_else(|| serde::de::Error::custom(format!("invalid flag: {value}")))
}

/// Deserializes a number written as a number or numeric string.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	as_number(&value).ok_or_else(|| serde::de::Error::custom(format!("invalid number: {value}")))
}

/// Deserializes an optional number; empty strings and `null` become `None`.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(as_number(&value))
}

/// Deserializes a free-form token (string or number) into an optional string.
///
/// Blank strings become `None`. Validation of the token's content is the
/// caller's concern.
pub fn token<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let value = Value::deserialize(deserializer)?;
	Ok(match value {
		Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
		Value::Number(n) => Some(n.to_string()),
		_ => None,
	})
}

/// Deserializes an identifier that may be written as a string or a number.
pub fn string_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(token(deserializer)?.unwrap_or_default())
}

fn as_id(value: &Value) -> Option<u64> {
	match value {
		Value::Number(n) => n.as_u64().filter(|id| *id > 0),
		Value::String(s) => parse_id(s),
		_ => None,
	}
}

fn parse_id(raw: &str) -> Option<u64> {
	raw.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

fn as_flag(value: &Value) -> Option<bool> {
	match value {
		Value::Bool(b) => Some(*b),
		Value::Number(n) => n.as_f64().map(|n| n != 0.0),
		Value::String(s) => match s.trim().to_lowercase().as_str() {
			"true" | "1" | "yes" | "on" => Some(true),
			"false" | "0" | "no" | "off" | "" => Some(false),
			_ => None,
		},
		_ => None,
	}
}

fn as_number(value: &Value) -> Option<f64> {
	match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
		_ => None,
	}
}
