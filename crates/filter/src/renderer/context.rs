//! Rendering context for the HTML renderer.

use d2lmd_core::Slugger;
use markdown::mdast::{Definition, Node};
use std::collections::HashMap;

/// Container the renderer is currently inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Document root.
    Root,
    /// Inside a paragraph (`<p>`).
    Paragraph,
    /// Inside a list (`<ul>` or `<ol>`).
    List {
        /// Loose lists keep `<p>` around item paragraphs.
        spread: bool,
    },
    /// Inside a blockquote.
    Blockquote,
    /// Inside a table.
    Table,
}

/// Output buffer plus the state needed while walking the tree.
pub struct Context<'a> {
    html: String,
    stack: Vec<Scope>,
    slugger: Slugger,
    definitions: HashMap<&'a str, &'a Definition>,
}

impl<'a> Context<'a> {
    /// Creates a context for `tree`, indexing its link reference definitions.
    pub fn new(tree: &'a Node) -> Self {
        let mut definitions = HashMap::new();
        collect_definitions(tree, &mut definitions);
        Self {
            html: String::with_capacity(4096),
            stack: vec![Scope::Root],
            slugger: Slugger::new(),
            definitions,
        }
    }

    /// Writes a raw string without escaping.
    pub fn push_raw(&mut self, s: &str) {
        self.html.push_str(s);
    }

    /// Writes text content with HTML escaping.
    pub fn push_text(&mut self, s: &str) {
        self.html.push_str(&html_escape::encode_text(s));
    }

    /// Writes an attribute value escaped for a double-quoted attribute.
    pub fn push_attr_value(&mut self, s: &str) {
        self.html
            .push_str(&html_escape::encode_double_quoted_attribute(s));
    }

    /// Returns true if the nearest list or blockquote is a tight list.
    ///
    /// Paragraphs directly inside tight list items are rendered without `<p>`.
    pub fn is_in_tight_list(&self) -> bool {
        self.stack
            .iter()
            .rev()
            .find(|scope| matches!(scope, Scope::List { .. } | Scope::Blockquote))
            .is_some_and(|scope| matches!(scope, Scope::List { spread: false }))
    }

    /// Returns true if inside a table.
    pub fn is_in_table(&self) -> bool {
        self.stack.contains(&Scope::Table)
    }

    /// Enters a new scope by pushing it onto the stack.
    pub fn enter(&mut self, scope: Scope) {
        self.stack.push(scope);
    }

    /// Exits the current scope by popping from the stack.
    pub fn exit(&mut self) -> Option<Scope> {
        self.stack.pop()
    }

    /// Generates a unique heading identifier.
    pub fn generate_slug(&mut self, text: &str) -> String {
        self.slugger.slug(text)
    }

    /// Looks up a link reference definition by its normalized identifier.
    pub fn definition(&self, identifier: &str) -> Option<&'a Definition> {
        self.definitions.get(identifier).copied()
    }

    /// Consumes the context and returns the rendered HTML.
    pub fn finish(self) -> String {
        self.html
    }
}

fn collect_definitions<'a>(node: &'a Node, definitions: &mut HashMap<&'a str, &'a Definition>) {
    if let Node::Definition(definition) = node {
        // first definition wins, as in CommonMark
        definitions
            .entry(definition.identifier.as_str())
            .or_insert(definition);
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_definitions(child, definitions);
        }
    }
}
