//! Default HTML rendering for an mdast tree.
//!
//! This is the rendering half of the traversal engine: every node the filter
//! left unchanged gets its ordinary HTML form, raw HTML nodes (including the
//! ones the filter injected) are emitted verbatim.
//!
//! - `context` - output buffer, scope stack, identifiers, link definitions
//! - `render` - per-node rendering functions

mod context;
pub mod render;

pub use context::{Context, Scope};

use markdown::mdast::Node;
use render::render_node;

/// Renders `tree` to HTML, one block per line, ending with a newline.
///
/// # Examples
///
/// ```
/// use d2lmd_core::{ParseOptions, parse_mdast};
/// use d2lmd_filter::renderer::render_html;
///
/// let tree = parse_mdast("# Hi\n\nThere", &ParseOptions::default()).unwrap();
/// assert_eq!(render_html(&tree), "<h1 id=\"hi\">Hi</h1>\n<p>There</p>\n");
/// ```
pub fn render_html(tree: &Node) -> String {
    let mut ctx = Context::new(tree);
    render_node(tree, &mut ctx);
    let mut html = ctx.finish();
    if !html.is_empty() && !html.ends_with('\n') {
        html.push('\n');
    }
    html
}
