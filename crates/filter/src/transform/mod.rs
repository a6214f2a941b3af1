//! Node transforms applied by the D2L filter.
//!
//! - `normalize`: smart punctuation back to ASCII.
//! - `comments`: deletion of empty HTML comments.
//! - `code_block`: Brightspace code-sample templating.
//! - `wrapper`: one-shot page header and footer.

/// Brightspace code-sample templating.
pub mod code_block;
/// Deletion of empty HTML comments.
pub mod comments;
/// Smart punctuation back to ASCII.
pub mod normalize;
/// One-shot page header and footer.
pub mod wrapper;

/// ASCII whitespace: space, tab, newline, carriage return, vertical tab and
/// form feed. NBSP and other Unicode spaces are content.
pub(crate) fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
