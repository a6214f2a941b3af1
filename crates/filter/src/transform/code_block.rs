//! Re-templating of code blocks into Brightspace code-sample markup.

use super::is_ascii_space;
use super::normalize::normalize_punctuation;
use crate::filter::{CodeBlock, FilterResult};
use markdown::mdast::{Html, Node};

/// Language labels accepted by default.
pub const DEFAULT_LANGUAGES: [&str; 8] = [
    "java",
    "bash",
    "python",
    "javascript",
    "armasm",
    "cpp",
    "c",
    "json",
];

/// Trims ASCII whitespace (including newlines and form feeds) from both ends.
///
/// An all-whitespace payload trims to the empty string.
pub fn trim_code(code: &str) -> &str {
    code.trim_matches(is_ascii_space)
}

/// Renders the Brightspace code-sample template.
///
/// `lang` and `code` are inserted verbatim; exactly one newline precedes the
/// closing tags.
pub fn code_sample_html(lang: &str, code: &str) -> String {
    format!(
        "<pre class=\"line-numbers d2l-code\"><code class=\"language-{}\">{}\n</code></pre>",
        lang, code
    )
}

/// Code block callback: replaces blocks whose first label is in `languages`
/// with a raw HTML code sample.
pub fn retemplate_code<S: AsRef<str>>(block: &CodeBlock<'_>, languages: &[S]) -> FilterResult {
    let Some(lang) = block.language() else {
        return FilterResult::Unchanged;
    };
    if !languages.iter().any(|accepted| accepted.as_ref() == lang) {
        log::trace!("Leaving code block with unrecognized language {:?}", lang);
        return FilterResult::Unchanged;
    }

    let code = normalize_punctuation(trim_code(block.text()));
    log::debug!("Retemplating {} code block ({} bytes)", lang, code.len());
    FilterResult::Replace(Node::Html(Html {
        value: code_sample_html(lang, &code),
        position: block.code.position.clone(),
    }))
}
