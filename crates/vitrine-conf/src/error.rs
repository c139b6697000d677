//! Configuration errors.

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfError>;

/// Errors raised while reading configuration sources.
///
/// Malformed table sections never produce an error: they degrade to their
/// defaults during deserialization. Only unreadable files, unparsable
/// documents and unusable settings are reported.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Environment error: {0}")]
	Env(String),

	#[error("Invalid source: {0}")]
	InvalidSource(String),

	#[error("Invalid setting `{key}`: {message}")]
	InvalidSetting { key: &'static str, message: String },
}
