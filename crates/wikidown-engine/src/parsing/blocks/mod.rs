//! # Block Parsing
//!
//! Line-oriented block parsing driven by the grammar's ordered rule list.
//!
//! ## Modules
//!
//! - **`types`**: `BlockNode` and its payload enums
//! - **`kinds`**: one module per construct, each exporting a `RULE`
//! - **`lines`**: indentation and tab helpers
//! - **`parser`**: `BlockParser`, which tries rules in order at each line
//!
//! ## Key Invariants
//!
//! - The first rule that matches at a line wins; `paragraph` always matches
//! - Container rules re-enter the parser with the full rule set, so tables
//!   work inside list items and fancy blocks nest
//! - Container nesting stops at `MAX_NESTING`
//! - Fenced and indented code are raw zones: no block or inline parsing inside

pub mod kinds;
pub mod lines;
pub mod parser;
pub mod types;

pub use parser::{BlockMatch, BlockParser, MAX_NESTING};
pub use types::{AlertKind, Align, BlockNode, HeadingOrigin};
