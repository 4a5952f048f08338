//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones.
//!
//! Inline parsing is separate from block parsing and runs over the content
//! lines of inline-eligible blocks (paragraphs, headings). The lines are
//! joined into an [`InlineSource`](source::InlineSource) that remembers the
//! document point of every character.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter-owning types (`CodeSpan`, `Emphasis`)
//! - **`cursor`**: `Cursor` for character-by-character scanning
//! - **`source`**: joined characters plus their document points
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `*not emphasis*` `` parses as a single
//! inline code node.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod source;

pub use parser::parse_inline;
