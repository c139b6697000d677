//! Placement of the bulk-select checkbox column.

use vitrine_markup::Page;
use vitrine_types::{BulkPosition, BulkSelect};

/// Bulk-select layout resolved once per render.
///
/// Header cells, body cells and the empty-state colspan all go through this
/// value, so the checkbox sits at the same index everywhere.
///
/// # Examples
///
/// ```
/// use vitrine_render::BulkSelectLayout;
/// use vitrine_types::{BulkPosition, BulkSelect};
///
/// let mut bulk = BulkSelect::default();
/// bulk.enabled = true;
/// bulk.position = BulkPosition::Last;
///
/// let layout = BulkSelectLayout::resolve(&bulk);
/// assert_eq!(layout.colspan(4), 5);
/// assert_eq!(layout.checkbox_index(4), Some(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkSelectLayout {
	enabled: bool,
	position: BulkPosition,
}

impl BulkSelectLayout {
	/// Resolves the layout from the (already defaulted) bulk-select settings.
	pub fn resolve(bulk: &BulkSelect) -> Self {
		Self {
			enabled: bulk.enabled,
			position: bulk.position,
		}
	}

	/// A layout without a checkbox column.
	pub fn disabled() -> Self {
		Self::resolve(&BulkSelect::default())
	}

	/// Returns whether the checkbox column is rendered.
	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Returns the configured position.
	pub fn position(&self) -> BulkPosition {
		self.position
	}

	/// Number of cells in a row with `visible_columns` configured columns.
	pub fn colspan(&self, visible_columns: usize) -> usize {
		visible_columns + usize::from(self.enabled)
	}

	/// Index of the checkbox cell in a row, or `None` when disabled.
	pub fn checkbox_index(&self, visible_columns: usize) -> Option<usize> {
		match (self.enabled, self.position) {
			(false, _) => None,
			(true, BulkPosition::First) => Some(0),
			(true, BulkPosition::Last) => Some(visible_columns),
		}
	}

	/// Inserts the checkbox cell (built lazily) into `cells`.
	pub fn place(&self, mut cells: Vec<Page>, checkbox: impl FnOnce() -> Page) -> Vec<Page> {
		if let Some(index) = self.checkbox_index(cells.len()) {
			cells.insert(index, checkbox());
		}
		cells
	}
}
