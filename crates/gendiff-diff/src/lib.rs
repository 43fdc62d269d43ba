//! Diff engine for gendiff.
//!
//! Walks two parsed configuration documents in lockstep and classifies every
//! key as added, removed, updated, unchanged, or nested.
//!
//! # Key Types
//!
//! - [`Document`] -- A parsed document: string keys mapped to JSON values
//! - [`DiffNode`] / [`NodeKind`] -- One classified comparison result per key
//! - [`DiffStats`] -- Recursive per-kind node counts

pub mod builder;
pub mod error;
pub mod node;
pub mod stats;

pub use builder::{build_diff, is_structured, Document};
pub use error::{DiffError, DiffResult};
pub use node::{DiffNode, NodeKind};
pub use stats::DiffStats;
