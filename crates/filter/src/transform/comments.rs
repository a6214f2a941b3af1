//! Removal of empty HTML comments left behind by authoring tools.

use super::is_ascii_space;
use crate::filter::{FilterResult, HTML_FORMAT, Raw};

/// Returns true when `text`, once trimmed, is a single HTML comment with
/// nothing but ASCII whitespace inside (`<!-- -->`, `<!---->`).
///
/// Comments with content, partial comments, and several comments in one
/// payload do not match.
pub fn is_blank_comment(text: &str) -> bool {
    text.trim_matches(is_ascii_space)
        .strip_prefix("<!--")
        .and_then(|rest| rest.strip_suffix("-->"))
        .is_some_and(|inner| inner.chars().all(is_ascii_space))
}

/// Raw node callback: deletes HTML nodes holding only a blank comment.
pub fn strip_blank_comment(raw: Raw<'_>) -> FilterResult {
    if raw.format.eq_ignore_ascii_case(HTML_FORMAT) && is_blank_comment(raw.text) {
        log::debug!("Stripping empty comment: {:?}", raw.text);
        FilterResult::Delete
    } else {
        FilterResult::Unchanged
    }
}
