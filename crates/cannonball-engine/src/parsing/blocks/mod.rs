//! # Block Parsing
//!
//! Two-phase block parsing over [`LineRef`](crate::parsing::lines::LineRef)s.
//!
//! 1. **Line classification** (`classify`): each line is classified into a
//!    [`LineClass`] from local facts only (indentation, fence signature,
//!    heading, quote and list markers).
//! 2. **Block construction** (`builder`): a [`BlockBuilder`] walks the lines,
//!    opens blocks, and recurses into containers with their prefixes
//!    stripped.
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in blockquotes in lists, etc.)
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Container prefixes are stripped by narrowing `LineRef`s, so every node
//!   position refers to the original document

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
