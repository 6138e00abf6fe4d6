//! rift - a line-level diff engine and viewer
//!
//! Computes a minimal, human-reviewable edit script between two versions of
//! text, as an ordered list of equal/insert/delete/modify records suitable
//! for rendering a side-by-side or unified view.

use clap::ValueEnum;

pub mod areas;
pub mod artifacts;
pub mod commands;

/// Which diff engine a command should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiffEngineKind {
    /// The from-scratch shortest-edit-script engine
    Myers,
    /// The `similar`-backed line diff
    Lines,
}
