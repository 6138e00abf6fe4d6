//! Data structures and algorithms
//!
//! - `core`: shared utilities (pager wrapper)
//! - `diff`: line-level diff engines and change records

pub mod core;
pub mod diff;
