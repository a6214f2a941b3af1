//! The Brightspace D2L filter.

use crate::filter::{Element, Filter, FilterResult};
use crate::options::Options;
use crate::transform::code_block::retemplate_code;
use crate::transform::comments::strip_blank_comment;
use crate::transform::normalize::normalize_text;
use crate::transform::wrapper::{WrapState, wrap_document};

/// Dispatches each element to the matching transform, honoring the option
/// toggles. Holds the wrap state of a single run.
#[derive(Debug)]
pub struct D2lFilter<'o> {
    options: &'o Options,
    state: WrapState,
}

impl<'o> D2lFilter<'o> {
    /// Creates a filter for one run with the given wrap state.
    pub fn new(options: &'o Options, state: WrapState) -> Self {
        Self { options, state }
    }

    /// Current wrap state.
    pub fn state(&self) -> WrapState {
        self.state
    }
}

impl Filter for D2lFilter<'_> {
    fn apply(&mut self, element: Element<'_>) -> FilterResult {
        let options = self.options;
        match element {
            Element::Text(text) if options.normalize_text => normalize_text(text),
            Element::RawBlock(raw) | Element::RawInline(raw) if options.strip_comments => {
                strip_blank_comment(raw)
            }
            Element::CodeBlock(block) if options.retemplate_code => {
                retemplate_code(&block, &options.languages)
            }
            Element::Document(root) if options.wrap_document => {
                wrap_document(&mut self.state, root, &options.template)
            }
            _ => FilterResult::Unchanged,
        }
    }
}
