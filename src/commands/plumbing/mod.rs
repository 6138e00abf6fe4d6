//! Plumbing commands (low-level building blocks)
//!
//! - `distance`: Print the minimal edit distance between two files, the
//!   number callers would use to impose a size cap before asking for a
//!   full diff.

pub mod distance;
