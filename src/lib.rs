//! stringkit - string manipulation helpers
//!
//! This library provides a flat surface of independent, stateless
//! string helpers, including:
//! - Null/empty classification predicates
//! - Marker-based substring extraction (before/after/between)
//! - Type coercion (integers, dates, integer lists, key-value maps)
//! - HTML tag stripping and line-break cleanup
//! - A memory-efficient split for very large inputs
//!
//! Every function is a pure transformation over its arguments; there
//! is no shared state, so all helpers are safe to call concurrently.

pub mod convert;
pub mod error;
pub mod extract;
pub mod predicate;
pub mod split;

// Re-export main types for convenience
pub use crate::convert::{
    remove_html, remove_new_line, to_date_time, to_dictionary, to_int, to_int_list,
};
pub use crate::error::{StringKitError, StringKitResult};
pub use crate::extract::{
    replace_between, string_after, string_before, string_between, string_delete, strings_between,
};
pub use crate::predicate::{
    as_null_if_empty, is_empty, is_not_null, is_not_null_or_empty, is_null, is_null_or_empty,
};
pub use crate::split::low_mem_split;
