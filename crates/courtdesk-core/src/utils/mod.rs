//! Utility functions for formatting, matching, and contact links.

pub mod format;
pub mod links;
pub mod teams;

// Re-export commonly used functions at module level
pub use format::{cmp_ignore_case, contains_ignore_case, time_sort_key, truncate};
