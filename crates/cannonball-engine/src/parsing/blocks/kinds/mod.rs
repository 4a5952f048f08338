//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier and
//! builder call into these; they never hardcode `#`, `>` or fence characters.

pub mod block_quote;
pub mod code_fence;
pub mod front_matter;
pub mod heading;
pub mod list_marker;
pub mod task;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use front_matter::FrontMatter;
pub use heading::{AtxHeading, Setext};
pub use list_marker::{ListMarker, MarkerKind};
pub use task::TaskMarker;
pub use thematic_break::ThematicBreak;
