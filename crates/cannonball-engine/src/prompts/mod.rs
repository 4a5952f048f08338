//! # Prompt Rendering
//!
//! Turns a context window, a semantic label and the user's instruction into
//! the two chat turns sent to the model.
//!
//! - **`marker`**: `<CURSOR>` insertion and removal
//! - **`templates`**: the system prompt and one user-turn template per label

pub mod marker;
pub mod templates;

pub use marker::{CURSOR_MARKER, insert_cursor_marker, remove_cursor_marker};
pub use templates::{PromptTemplate, render, system_prompt, template_for};
