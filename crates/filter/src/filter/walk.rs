//! Post-order tree walker that applies a [`Filter`] to an mdast tree.

use super::{CodeBlock, Element, Filter, FilterResult, Raw};
use markdown::mdast::Node;

/// Walks `root` depth-first, visiting children before their parent and the
/// document root last.
///
/// Replacement nodes are not walked again.
pub fn walk<F: Filter + ?Sized>(root: &mut Node, filter: &mut F) {
    let phrasing = is_phrasing_container(root);
    if let Some(children) = root.children_mut() {
        walk_children(children, phrasing, filter);
    }

    let result = match root {
        Node::Root(doc) => filter.apply(Element::Document(doc)),
        _ => return,
    };

    match result {
        FilterResult::Unchanged => {}
        FilterResult::Replace(node) => *root = node,
        FilterResult::Delete => {
            if let Some(children) = root.children_mut() {
                children.clear();
            }
        }
    }
}

fn walk_children<F: Filter + ?Sized>(children: &mut Vec<Node>, in_phrasing: bool, filter: &mut F) {
    let original = std::mem::take(children);
    children.reserve(original.len());

    for mut child in original {
        let child_phrasing = is_phrasing_container(&child);
        if let Some(grandchildren) = child.children_mut() {
            walk_children(grandchildren, child_phrasing, filter);
        }

        match visit(&child, in_phrasing, filter) {
            FilterResult::Unchanged => children.push(child),
            FilterResult::Replace(node) => children.push(node),
            FilterResult::Delete => log::trace!("Deleted node: {:?}", child),
        }
    }
}

fn visit<F: Filter + ?Sized>(node: &Node, in_phrasing: bool, filter: &mut F) -> FilterResult {
    let element = match node {
        Node::Text(text) => Element::Text(text),
        Node::Html(html) if in_phrasing => Element::RawInline(Raw::html(&html.value)),
        Node::Html(html) => Element::RawBlock(Raw::html(&html.value)),
        Node::Code(code) => Element::CodeBlock(CodeBlock::new(code)),
        _ => return FilterResult::Unchanged,
    };
    filter.apply(element)
}

/// Containers whose children are phrasing (inline) content.
fn is_phrasing_container(node: &Node) -> bool {
    matches!(
        node,
        Node::Paragraph(_)
            | Node::Heading(_)
            | Node::Emphasis(_)
            | Node::Strong(_)
            | Node::Delete(_)
            | Node::Link(_)
            | Node::LinkReference(_)
            | Node::TableCell(_)
    )
}
