//! Diff engines and change records
//!
//! This module implements the line-level diff pipeline:
//!
//! - `myers`: the from-scratch shortest-edit-script search and backtrace
//! - `classifier`: the merge pass pairing delete/insert runs into modifies
//! - `engine`: text normalization, line splitting and the engine seam
//! - `lines_engine`: the `similar`-backed alternate engine
//! - `change`: the raw edit operations and caller-facing change records
//!
//! The pipeline is pure: text in, ordered change records out, no state held
//! across invocations.

pub mod change;
pub mod classifier;
pub mod engine;
pub mod lines_engine;
pub mod myers;
