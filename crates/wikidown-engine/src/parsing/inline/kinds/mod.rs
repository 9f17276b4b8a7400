//! # Inline Kinds
//!
//! One module per inline construct. Each exports a `RULE` descriptor with
//! the bytes that can start it; the grammar decides the order they run in.
//!
//! ## Types
//!
//! - **`CodeSpan`**: backtick runs, a raw zone for every other rule
//! - **`Math`**: `$x$` and `$$x$$`
//! - **`Mark`** / **`Strikethrough`**: `==x==` and `~~x~~`
//! - **`WikiLink`**: `[[Title|Target]]`
//! - **`FootnoteRef`**: `[^label]`
//! - **`Link`**: `[text](url)` and `![alt](src)`
//! - **`Emphasis`**: `*` and `_` runs

pub mod autolink;
pub mod code_span;
pub mod delimited;
pub mod emphasis;
pub mod escape;
pub mod footnote;
pub mod inline_html;
pub mod line_break;
pub mod link;
pub mod math;
pub mod wikilink;

pub use code_span::CodeSpan;
pub use delimited::{Mark, Strikethrough};
pub use emphasis::Emphasis;
pub use footnote::FootnoteRef;
pub use link::Link;
pub use math::Math;
pub use wikilink::WikiLink;
