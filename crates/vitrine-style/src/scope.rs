//! Per-render style scopes.

use std::fmt;
use uuid::Uuid;
use vitrine_markup::class_token;

/// Class name unique to one rendered table instance.
///
/// Every generated rule is prefixed with this class, so two tables on the
/// same page (even two renders of the same configuration) never share styles.
///
/// # Examples
///
/// ```
/// use vitrine_style::TableScope;
///
/// let scope = TableScope::with_suffix("Summer Sale", "0000abcd");
/// assert_eq!(scope.class_name(), "vt-summer-sale-0000abcd");
/// assert_eq!(scope.selector(), ".vt-summer-sale-0000abcd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableScope {
	class_name: String,
}

impl TableScope {
	/// Creates a scope for `table_id` with a random eight-character suffix.
	pub fn new(table_id: &str) -> Self {
		let suffix = Uuid::new_v4().simple().to_string();
		Self::with_suffix(table_id, &suffix[..8])
	}

	/// Creates a scope with a fixed suffix.
	pub fn with_suffix(table_id: &str, suffix: &str) -> Self {
		Self {
			class_name: format!("vt-{}-{}", class_token(table_id), class_token(suffix)),
		}
	}

	/// Returns the class name.
	pub fn class_name(&self) -> &str {
		&self.class_name
	}

	/// Returns the class selector (`.` + class name).
	pub fn selector(&self) -> String {
		format!(".{}", self.class_name)
	}
}

impl fmt::Display for TableScope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.class_name)
	}
}
