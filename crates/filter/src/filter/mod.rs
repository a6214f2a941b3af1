//! Visitor contract between a filter and the tree walker.
//!
//! The walker hands each interesting node to [`Filter::apply`] as an
//! [`Element`]. The filter answers with a [`FilterResult`] and the walker
//! applies it to the parent's child list.

mod walk;

pub use walk::walk;

use markdown::mdast::{Code, Node, Root, Text};

/// Format tag the walker gives to every raw node produced by markdown-rs.
pub const HTML_FORMAT: &str = "html";

/// A node as seen by a filter, one arm per node kind the filter can react to.
#[derive(Debug)]
pub enum Element<'a> {
    /// Plain text leaf.
    Text(&'a Text),
    /// Raw markup sitting in a flow container (root, blockquote, list item).
    RawBlock(Raw<'a>),
    /// Raw markup sitting in a phrasing container (paragraph, heading, emphasis, ...).
    RawInline(Raw<'a>),
    /// Fenced or indented code block.
    CodeBlock(CodeBlock<'a>),
    /// The whole document, visited after every descendant.
    Document(&'a Root),
}

/// Raw target-format payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw<'a> {
    /// Declared format, e.g. `"html"`.
    pub format: &'a str,
    /// Literal payload.
    pub text: &'a str,
}

impl<'a> Raw<'a> {
    /// Raw HTML payload.
    pub fn html(text: &'a str) -> Self {
        Self {
            format: HTML_FORMAT,
            text,
        }
    }
}

/// A code block together with its classification labels.
#[derive(Debug)]
pub struct CodeBlock<'a> {
    /// The underlying mdast node.
    pub code: &'a Code,
    /// Classification labels; the first one is the language.
    pub classes: Vec<String>,
}

impl<'a> CodeBlock<'a> {
    /// Wraps a code node, reading its labels from the info string.
    pub fn new(code: &'a Code) -> Self {
        Self {
            code,
            classes: code_labels(code),
        }
    }

    /// First classification label, if any.
    pub fn language(&self) -> Option<&str> {
        self.classes.first().map(String::as_str)
    }

    /// Literal code payload.
    pub fn text(&self) -> &str {
        &self.code.value
    }
}

/// What the walker should do with the visited node.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterResult {
    /// No opinion: keep the node and render it the default way.
    Unchanged,
    /// Substitute the node.
    Replace(Node),
    /// Drop the node from its parent.
    Delete,
}

/// A document filter.
pub trait Filter {
    /// Decide what happens to one element.
    fn apply(&mut self, element: Element<'_>) -> FilterResult;
}

impl<F> Filter for F
where
    F: FnMut(Element<'_>) -> FilterResult,
{
    fn apply(&mut self, element: Element<'_>) -> FilterResult {
        (self)(element)
    }
}

/// Reads classification labels from a code block's info string.
///
/// Supports a bare language (` ```java `), a Pandoc attribute block
/// (` ```{.java .numberLines} `), or both (` ```java {.numberLines} `).
/// Only `.class` tokens inside braces become labels; ids and key/value pairs
/// are ignored.
pub fn code_labels(code: &Code) -> Vec<String> {
    let mut info = code.lang.clone().unwrap_or_default();
    if let Some(meta) = &code.meta {
        info.push(' ');
        info.push_str(meta);
    }
    let info = info.trim();

    let mut labels = Vec::new();
    let attributes = if info.starts_with('{') {
        Some(info)
    } else {
        let mut parts = info.splitn(2, char::is_whitespace);
        if let Some(lang) = parts.next().filter(|lang| !lang.is_empty()) {
            labels.push(lang.to_string());
        }
        parts.next().map(str::trim_start).filter(|rest| rest.starts_with('{'))
    };

    if let Some(block) = attributes {
        let inner = block.trim_start_matches('{');
        let inner = inner.split('}').next().unwrap_or_default();
        labels.extend(
            inner
                .split_whitespace()
                .filter_map(|token| token.strip_prefix('.'))
                .filter(|class| !class.is_empty())
                .map(str::to_string),
        );
    }

    labels
}
