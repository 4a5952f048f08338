//! Document tree, cursor context and prompt assembly for AI text generation
//! inside markdown notes.
//!
//! The pipeline, leaf first:
//!
//! 1. [`parsing::parse_document`] turns raw text into a positioned tree
//! 2. [`locate::find_node_at_cursor`] finds the node under the cursor
//! 3. [`context::extract_context`] cuts out the top-level block around it
//! 4. [`classifier::classify`] labels the cursor's surroundings
//! 5. [`prompts::render`] fills the label's template
//!
//! [`pipeline::build_prompt`] runs all of it. Nothing here does I/O.

pub mod buffer;
pub mod classifier;
pub mod context;
pub mod locate;
pub mod parsing;
pub mod pipeline;
pub mod prompts;
pub mod trigger;

// Re-export key types for easier usage
pub use buffer::{NoteBuffer, replace_range};
pub use classifier::{SemanticLabel, classify};
pub use context::{
    ContextWindow, ancestors, build_context, extract_context, find_top_level_ancestor,
};
pub use locate::find_node_at_cursor;
pub use parsing::{
    CursorPos, Node, NodeKind, Point, Position, parse_document, round_trip, serialize,
};
pub use pipeline::{PromptRequest, build_prompt};
pub use prompts::{CURSOR_MARKER, insert_cursor_marker, remove_cursor_marker, system_prompt};
pub use trigger::{TriggerInfo, detect_trigger};
