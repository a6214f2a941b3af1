//! Markdown parsing through markdown-rs.

use crate::{D2lError, SourceLocation};
use markdown::mdast::Node;
use markdown::message::{Message, Place};
use serde::Deserialize;

/// Parser options for building markdown-rs parse options.
///
/// Raw HTML is always enabled: the filter needs embedded comments to arrive as
/// `Html` nodes rather than escaped text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Enable GitHub Flavored Markdown constructs (tables, strikethrough, task lists, autolinks).
    pub gfm: bool,
    /// Enable YAML frontmatter parsing.
    pub frontmatter: bool,
    /// Enable math constructs ($inline$ and $$block$$).
    pub math: bool,
}

impl ParseOptions {
    /// Course-chapter defaults.
    pub const fn chapter() -> Self {
        Self {
            gfm: true,
            frontmatter: true,
            math: false,
        }
    }

    /// Convert to markdown-rs `ParseOptions`.
    pub fn to_markdown(self) -> markdown::ParseOptions {
        let mut constructs = markdown::Constructs {
            frontmatter: self.frontmatter,
            code_indented: true,
            html_flow: true,
            html_text: true,
            ..Default::default()
        };

        if self.gfm {
            constructs.gfm_autolink_literal = true;
            constructs.gfm_strikethrough = true;
            constructs.gfm_table = true;
            constructs.gfm_task_list_item = true;
        }

        if self.math {
            constructs.math_flow = true;
            constructs.math_text = true;
        }

        markdown::ParseOptions {
            constructs,
            math_text_single_dollar: self.math,
            ..markdown::ParseOptions::default()
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::chapter()
    }
}

/// Parse markdown into an MDAST tree using core options.
pub fn parse_mdast(input: &str, options: &ParseOptions) -> Result<Node, D2lError> {
    parse_mdast_with_options(input, &options.to_markdown())
}

/// Parse markdown into an MDAST tree using markdown-rs `ParseOptions`.
pub fn parse_mdast_with_options(
    input: &str,
    options: &markdown::ParseOptions,
) -> Result<Node, D2lError> {
    markdown::to_mdast(input, options).map_err(|err| D2lError::MarkdownAdapter {
        message: err.to_string(),
        location: message_location(&err),
    })
}

fn message_location(message: &Message) -> SourceLocation {
    match &message.place {
        Some(place) => match place.as_ref() {
            Place::Point(point) => SourceLocation::new(point.line, point.column),
            Place::Position(position) => {
                SourceLocation::new(position.start.line, position.start.column)
            }
        },
        None => SourceLocation::new(1, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_arrive_as_html_nodes() {
        let root = parse_mdast("<!--  -->\n\nText <!-- x --> more\n", &ParseOptions::default())
            .unwrap();
        let children = root.children().unwrap();
        assert!(matches!(children[0], Node::Html(_)));
        let Node::Paragraph(para) = &children[1] else {
            panic!("expected paragraph");
        };
        assert!(para.children.iter().any(|n| matches!(n, Node::Html(_))));
    }

    #[test]
    fn fenced_code_keeps_language() {
        let root = parse_mdast("```java\nint x;\n```\n", &ParseOptions::default()).unwrap();
        let Some(Node::Code(code)) = root.children().and_then(|c| c.first()) else {
            panic!("expected code block");
        };
        assert_eq!(code.lang.as_deref(), Some("java"));
        assert_eq!(code.value, "int x;");
    }

    #[test]
    fn math_is_opt_in() {
        let input = "$$\nx^2\n$$\n";
        let plain = parse_mdast(input, &ParseOptions::default()).unwrap();
        assert!(!matches!(plain.children().unwrap()[0], Node::Math(_)));

        let options = ParseOptions {
            math: true,
            ..ParseOptions::default()
        };
        let with_math = parse_mdast(input, &options).unwrap();
        assert!(matches!(with_math.children().unwrap()[0], Node::Math(_)));
    }
}
