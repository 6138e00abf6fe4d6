//! Core application components
//!
//! This module contains the fundamental building blocks of the tool:
//!
//! - `comparator`: High-level diff operations and coordination
//! - `workspace`: Working directory file system operations

pub mod comparator;
pub mod workspace;
