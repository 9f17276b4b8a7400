//! # Snapshot Testing Support
//!
//! Turns a parsed tree into a stable, indented text outline so tests can pin
//! block structure with `insta` inline snapshots instead of matching on
//! nested enums.

pub mod outline;

pub use outline::outline;
