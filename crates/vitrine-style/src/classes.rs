//! Class names shared by the generated markup and the generated CSS.

use vitrine_markup::class_token;

/// Wrapper around the toolbar, table and pagination.
pub const ROOT: &str = "vt-table";
/// The `<table>` element.
pub const GRID: &str = "vt-grid";
/// The `<tbody>` element replaced by AJAX responses.
pub const BODY: &str = "vt-body";
/// A body row.
pub const ROW: &str = "vt-row";
/// The empty-state row.
pub const EMPTY_ROW: &str = "vt-empty";
/// Price markup container.
pub const PRICE: &str = "vt-price";
/// Purchase buttons and button-like links.
pub const BUTTON: &str = "vt-button";
/// Added to a button after a successful add-to-cart.
pub const ADDED: &str = "vt-added";
/// "View cart" link shown after adding.
pub const VIEW_CART: &str = "vt-view-cart";
/// The bulk-select checkbox column. Outside the `vt-col-` namespace so no column id can collide with it.
pub const BULK_COLUMN: &str = "vt-bulk-column";
/// Columns hidden below the mobile breakpoint.
pub const DESKTOP_ONLY: &str = "vt-desktop-only";
/// Columns hidden at and above the mobile breakpoint.
pub const MOBILE_ONLY: &str = "vt-mobile-only";
/// Search and bulk-action toolbar.
pub const TOOLBAR: &str = "vt-toolbar";
/// Pagination `<nav>`.
pub const PAGINATION: &str = "vt-pagination";

/// Width in pixels at which the desktop layout starts.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Class of the cells of the column with the given id.
pub fn column_class(column_id: &str) -> String {
	format!("vt-col-{}", class_token(column_id))
}
