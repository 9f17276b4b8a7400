//! # Inline Parsing
//!
//! Cursor-based inline parsing over the text of one leaf block (a paragraph,
//! a heading, a table cell).
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` tree
//! - **`kinds`**: one rule per construct, each owning its delimiters
//! - **`cursor`**: byte cursor with position tracking
//! - **`closers`**: per-span closer lookups, so unmatched openers stay cheap
//! - **`parser`**: `InlineParser`, which tries the grammar's rules in order
//!
//! ## Raw Zones
//!
//! Code spans and math win over everything registered after them:
//! `` `[[not a link]]` `` is a single code span, not text around a wiki link.

pub mod closers;
pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{InlineParser, MAX_DEPTH};
pub use types::{InlineNode, plain_text};
