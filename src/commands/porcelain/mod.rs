//! Porcelain commands (user-facing operations)
//!
//! - `diff`: Show the line-level changes between two files

pub mod diff;
