#![deny(missing_docs)]
//! d2lmd filter: Brightspace D2L transforms over mdast, tree walking, and HTML rendering.

/// The Brightspace D2L filter.
pub mod d2l;
/// Visitor contract and tree walker.
pub mod filter;
/// Filter and rendering options.
pub mod options;
/// HTML post-processing.
pub mod postprocess;
/// Default HTML rendering.
pub mod renderer;
/// Node transforms (normalization, comments, code samples, wrapper).
pub mod transform;

pub use d2l::D2lFilter;
pub use filter::{CodeBlock, Element, Filter, FilterResult, Raw, walk};
pub use options::{Options, WrapperTemplate};
pub use renderer::render_html;
pub use transform::wrapper::WrapState;

use d2lmd_core::{D2lError, parse_mdast};

/// Converts one Markdown document to Brightspace HTML.
///
/// Each call is its own run: the document is wrapped at most once, and a
/// fresh [`WrapState`] is used every time.
pub fn convert(input: &str, options: &Options) -> Result<String, D2lError> {
    let mut tree = parse_mdast(input, &options.parse)?;
    let mut filter = D2lFilter::new(options, WrapState::default());
    walk(&mut tree, &mut filter);

    let html = render_html(&tree);
    if options.links_in_new_tab {
        postprocess::open_links_in_new_tab(&html)
    } else {
        Ok(html)
    }
}
