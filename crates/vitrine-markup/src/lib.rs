//! # Vitrine Markup
//!
//! A small server-side markup tree ([`Page`], [`PageElement`]) that escapes
//! text and attribute values on output, plus helpers for placing catalog data
//! into markup: URL allow-listing, tag stripping, word trimming and CSS class
//! tokens.
//!
//! Everything the table renderer emits goes through this crate, so escaping
//! happens in exactly one place.

pub mod page;
pub mod sanitize;
mod util;

pub use page::{IntoPage, Page, PageElement};
pub use sanitize::{class_token, is_safe_url, safe_href, strip_tags, trim_words};
pub use util::{BOOLEAN_ATTRS, html_escape, is_boolean_attr_truthy};
