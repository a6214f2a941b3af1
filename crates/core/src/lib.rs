#![deny(missing_docs)]
//! d2lmd core: markdown parsing, error types, and heading identifiers.

/// Core error types.
pub mod error;
/// Markdown parsing through markdown-rs.
pub mod parse;
/// Pandoc-style heading identifiers.
pub mod slug;

pub use error::{D2lError, SourceLocation};
pub use parse::{ParseOptions, parse_mdast, parse_mdast_with_options};
pub use slug::{Slugger, identifier};
