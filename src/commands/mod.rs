//! Command implementations
//!
//! This module contains all command implementations, organized into two
//! categories:
//!
//! - `plumbing`: Low-level building blocks (edit distance)
//! - `porcelain`: User-facing commands (diff)
//!
//! Commands are methods on the `Comparator` façade so they all share the
//! same workspace and output writer.

pub mod plumbing;
pub mod porcelain;
