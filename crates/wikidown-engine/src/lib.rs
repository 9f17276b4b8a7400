//! # wikidown-engine
//!
//! Wiki-flavoured Markdown to HTML. One [`Renderer`] holds an ordered
//! [`Grammar`] of block and inline rules, a syntax [`Highlighter`] and an
//! optional [`PageIndex`]; each render returns HTML, a table of contents and
//! the client-side libraries the page needs.
//!
//! ```no_run
//! use wikidown_engine::{RenderEnv, Renderer};
//!
//! let renderer = Renderer::new();
//! let out = renderer.render("# Hello [[World]]", &RenderEnv::default(), None);
//! assert_eq!(out.toc[0].anchor, "hello-world");
//! ```

pub mod env;
pub mod grammar;
pub mod highlight;
pub mod html;
pub mod pages;
pub mod parsing;
pub mod preview;
pub mod renderer;
pub mod sanitize;
pub mod slug;
pub mod state;

pub use env::{RenderEnv, WikilinkStyle};
pub use grammar::{Grammar, Plugin, UnknownPlugin};
#[cfg(feature = "highlight")]
pub use highlight::SyntectHighlighter;
pub use highlight::{Highlighted, Highlighter, PlainHighlighter};
pub use pages::PageIndex;
pub use renderer::{Hook, Rendered, Renderer, RendererBuilder};
pub use sanitize::sanitize;
pub use slug::slugify;
pub use state::{LibraryRequirements, TocEntry};
