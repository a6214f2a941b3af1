//! ASCII punctuation normalization (the inverse of smartypants).

use crate::filter::FilterResult;
use markdown::mdast::{Node, Text};
use std::borrow::Cow;

/// Characters rewritten by [`normalize_punctuation`].
pub const SMART_PUNCTUATION: [char; 8] = [
    '\u{00a0}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2013}', '\u{2014}', '\u{2026}',
];

/// Replaces typographic punctuation with plain ASCII.
///
/// No-break space becomes a space, curly single and double quotes become
/// straight ones, an en dash becomes `-`, an em dash `--`, and an ellipsis
/// `...`. Every other character is left alone. Input without any of these
/// characters is borrowed back unchanged.
pub fn normalize_punctuation(input: &str) -> Cow<'_, str> {
    if !input.contains(SMART_PUNCTUATION) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\u{00a0}' => out.push(' '),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            '\u{2013}' => out.push('-'),
            '\u{2014}' => out.push_str("--"),
            '\u{2026}' => out.push_str("..."),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Text leaf callback: replaces the leaf when normalization changed anything.
pub fn normalize_text(text: &Text) -> FilterResult {
    match normalize_punctuation(&text.value) {
        Cow::Borrowed(_) => FilterResult::Unchanged,
        Cow::Owned(value) => FilterResult::Replace(Node::Text(Text {
            value,
            position: text.position.clone(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_smart_class() {
        let input = "It's a \u{201c}test\u{201d} \u{2014} done\u{2026}";
        assert_eq!(normalize_punctuation(input), "It's a \"test\" -- done...");

        let input = "\u{2018}a\u{2019}\u{00a0}1\u{2013}2";
        assert_eq!(normalize_punctuation(input), "'a' 1-2");
    }

    #[test]
    fn output_never_contains_source_characters() {
        let input: String = SMART_PUNCTUATION.iter().cycle().take(40).collect();
        let out = normalize_punctuation(&input);
        assert!(!out.contains(SMART_PUNCTUATION));
        // six one-for-one classes, em dash doubles, ellipsis triples
        assert_eq!(out.chars().count(), 6 * 5 + 5 * 2 + 5 * 3);
    }

    #[test]
    fn untouched_input_is_borrowed() {
        let input = "plain \"ascii\" -- text... caf\u{e9}";
        assert!(matches!(normalize_punctuation(input), Cow::Borrowed(s) if s == input));
        assert!(matches!(normalize_punctuation(""), Cow::Borrowed("")));
    }

    #[test]
    fn text_leaf_is_replaced_only_when_changed() {
        let plain = Text {
            value: "nothing to do".into(),
            position: None,
        };
        assert_eq!(normalize_text(&plain), FilterResult::Unchanged);

        let smart = Text {
            value: "wait\u{2026}".into(),
            position: None,
        };
        assert_eq!(
            normalize_text(&smart),
            FilterResult::Replace(Node::Text(Text {
                value: "wait...".into(),
                position: None,
            }))
        );
    }
}
