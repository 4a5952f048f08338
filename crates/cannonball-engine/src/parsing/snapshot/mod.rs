//! # Snapshot Testing Support
//!
//! Utilities for looking at parser output and checking it.
//!
//! - **`normalize`**: renders a tree as a stable, indented text dump, used by
//!   `insta` snapshots and the CLI's `tree` command
//! - **`invariants`**: structural checks every parsed tree must pass (child
//!   spans inside parents, siblings ordered, root covering the document)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::dump_tree;
