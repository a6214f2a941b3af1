//! Rendering functions for the HTML renderer.

use super::context::{Context, Scope};
use crate::filter::code_labels;
use markdown::mdast::{AlignKind, Node};

/// Extracts plain text from a list of AST nodes (for heading identifiers).
pub fn extract_text_from_nodes(nodes: &[Node]) -> String {
    let mut text = String::new();
    for node in nodes {
        extract_text_from_node(node, &mut text);
    }
    text.trim().to_string()
}

fn extract_text_from_node(node: &Node, buffer: &mut String) {
    match node {
        Node::Text(t) => buffer.push_str(&t.value),
        Node::InlineCode(code) => buffer.push_str(&code.value),
        Node::Strong(_)
        | Node::Emphasis(_)
        | Node::Link(_)
        | Node::LinkReference(_)
        | Node::Delete(_) => {
            for child in node.children().into_iter().flatten() {
                extract_text_from_node(child, buffer);
            }
        }
        Node::Break(_) => buffer.push(' '),
        _ => {}
    }
}

/// Renders flow content, one block per line.
fn render_flow(children: &[Node], ctx: &mut Context) {
    let mut first = true;
    for child in children {
        if is_invisible(child) {
            continue;
        }
        if !first {
            ctx.push_raw("\n");
        }
        render_node(child, ctx);
        first = false;
    }
}

/// Nodes that produce no output and should not take up a line.
fn is_invisible(node: &Node) -> bool {
    matches!(node, Node::Definition(_) | Node::Yaml(_) | Node::Toml(_))
}

fn render_phrasing(children: &[Node], ctx: &mut Context) {
    for child in children {
        render_node(child, ctx);
    }
}

/// Renders a paragraph node, suppressing `<p>` wrappers in tight lists.
fn render_paragraph(para: &markdown::mdast::Paragraph, ctx: &mut Context) {
    let in_tight_list = ctx.is_in_tight_list();
    if !in_tight_list {
        ctx.push_raw("<p>");
    }
    ctx.enter(Scope::Paragraph);
    render_phrasing(&para.children, ctx);
    ctx.exit();
    if !in_tight_list {
        ctx.push_raw("</p>");
    }
}

/// Renders a heading with a Pandoc-style identifier.
fn render_heading(heading: &markdown::mdast::Heading, ctx: &mut Context) {
    // Ids follow the text as filtered, so normalized dashes show up as `--`.
    let text = extract_text_from_nodes(&heading.children);
    let slug = ctx.generate_slug(&text);

    ctx.push_raw(&format!("<h{} id=\"", heading.depth));
    ctx.push_attr_value(&slug);
    ctx.push_raw("\">");
    render_phrasing(&heading.children, ctx);
    ctx.push_raw(&format!("</h{}>", heading.depth));
}

/// Renders a list node as `<ul>` or `<ol>`.
fn render_list(list: &markdown::mdast::List, ctx: &mut Context) {
    let spread = list.spread
        || list
            .children
            .iter()
            .any(|item| matches!(item, Node::ListItem(li) if li.spread));

    if list.ordered {
        match list.start {
            Some(start) if start != 1 => ctx.push_raw(&format!("<ol start=\"{}\">\n", start)),
            _ => ctx.push_raw("<ol>\n"),
        }
    } else {
        ctx.push_raw("<ul>\n");
    }

    ctx.enter(Scope::List { spread });
    render_flow(&list.children, ctx);
    ctx.exit();

    ctx.push_raw(if list.ordered { "\n</ol>" } else { "\n</ul>" });
}

/// Renders a list item; task items get a disabled checkbox.
fn render_list_item(item: &markdown::mdast::ListItem, ctx: &mut Context) {
    ctx.push_raw("<li>");
    if let Some(checked) = item.checked {
        ctx.push_raw(if checked {
            "<input type=\"checkbox\" disabled=\"\" checked=\"\" />"
        } else {
            "<input type=\"checkbox\" disabled=\"\" />"
        });
    }

    let tight = ctx.is_in_tight_list();
    if tight {
        render_flow(&item.children, ctx);
    } else if !item.children.is_empty() {
        ctx.push_raw("\n");
        render_flow(&item.children, ctx);
        ctx.push_raw("\n");
    }
    ctx.push_raw("</li>");
}

/// Renders a code block the filter left alone.
fn render_code(code: &markdown::mdast::Code, ctx: &mut Context) {
    let classes = code_labels(code);
    if classes.is_empty() {
        ctx.push_raw("<pre><code>");
    } else {
        ctx.push_raw("<pre class=\"");
        ctx.push_attr_value(&classes.join(" "));
        ctx.push_raw("\"><code>");
    }
    ctx.push_text(&code.value);
    ctx.push_raw("</code></pre>");
}

fn render_link_open(url: &str, title: Option<&str>, ctx: &mut Context) {
    ctx.push_raw("<a href=\"");
    ctx.push_attr_value(url);
    ctx.push_raw("\"");
    if let Some(title) = title {
        ctx.push_raw(" title=\"");
        ctx.push_attr_value(title);
        ctx.push_raw("\"");
    }
    ctx.push_raw(">");
}

fn render_image_tag(url: &str, alt: &str, title: Option<&str>, ctx: &mut Context) {
    ctx.push_raw("<img src=\"");
    ctx.push_attr_value(url);
    ctx.push_raw("\" alt=\"");
    ctx.push_attr_value(alt);
    ctx.push_raw("\"");
    if let Some(title) = title {
        ctx.push_raw(" title=\"");
        ctx.push_attr_value(title);
        ctx.push_raw("\"");
    }
    ctx.push_raw(" />");
}

/// Renders a reference-style link, or its source text when the definition is missing.
fn render_link_reference(link: &markdown::mdast::LinkReference, ctx: &mut Context) {
    match ctx.definition(&link.identifier) {
        Some(definition) => {
            render_link_open(&definition.url, definition.title.as_deref(), ctx);
            render_phrasing(&link.children, ctx);
            ctx.push_raw("</a>");
        }
        None => {
            ctx.push_raw("[");
            render_phrasing(&link.children, ctx);
            ctx.push_raw("]");
        }
    }
}

fn render_image_reference(image: &markdown::mdast::ImageReference, ctx: &mut Context) {
    match ctx.definition(&image.identifier) {
        Some(definition) => {
            render_image_tag(&definition.url, &image.alt, definition.title.as_deref(), ctx)
        }
        None => {
            ctx.push_raw("![");
            ctx.push_text(&image.alt);
            ctx.push_raw("]");
        }
    }
}

/// Renders a table node as `<table>` with `<thead>` and optional `<tbody>`.
fn render_table(table: &markdown::mdast::Table, ctx: &mut Context) {
    ctx.enter(Scope::Table);
    ctx.push_raw("<table>\n<thead>\n");
    if let Some(Node::TableRow(row)) = table.children.first() {
        render_table_row(row, ctx, true, &table.align);
    }
    ctx.push_raw("</thead>\n");

    if table.children.len() > 1 {
        ctx.push_raw("<tbody>\n");
        for row in table.children.iter().skip(1) {
            if let Node::TableRow(r) = row {
                render_table_row(r, ctx, false, &table.align);
            }
        }
        ctx.push_raw("</tbody>\n");
    }

    ctx.push_raw("</table>");
    ctx.exit();
}

fn render_table_row(
    row: &markdown::mdast::TableRow,
    ctx: &mut Context,
    is_header: bool,
    aligns: &[AlignKind],
) {
    let tag = if is_header { "th" } else { "td" };
    ctx.push_raw("<tr>");
    for (i, cell) in row.children.iter().enumerate() {
        let Node::TableCell(c) = cell else {
            continue;
        };
        let align = match aligns.get(i) {
            Some(AlignKind::Left) => " align=\"left\"",
            Some(AlignKind::Right) => " align=\"right\"",
            Some(AlignKind::Center) => " align=\"center\"",
            _ => "",
        };
        ctx.push_raw(&format!("<{}{}>", tag, align));
        render_phrasing(&c.children, ctx);
        ctx.push_raw(&format!("</{}>", tag));
    }
    ctx.push_raw("</tr>\n");
}

/// Recursively renders an AST node to HTML.
pub fn render_node(node: &Node, ctx: &mut Context) {
    match node {
        Node::Root(root) => render_flow(&root.children, ctx),
        Node::Text(text) => ctx.push_text(&text.value),
        Node::Paragraph(para) => render_paragraph(para, ctx),
        Node::Heading(heading) => render_heading(heading, ctx),
        Node::Strong(strong) => {
            ctx.push_raw("<strong>");
            render_phrasing(&strong.children, ctx);
            ctx.push_raw("</strong>");
        }
        Node::Emphasis(emphasis) => {
            ctx.push_raw("<em>");
            render_phrasing(&emphasis.children, ctx);
            ctx.push_raw("</em>");
        }
        Node::Delete(delete) => {
            ctx.push_raw("<del>");
            render_phrasing(&delete.children, ctx);
            ctx.push_raw("</del>");
        }
        Node::InlineCode(code) => {
            ctx.push_raw("<code>");
            ctx.push_text(&code.value);
            ctx.push_raw("</code>");
        }
        Node::Break(_) => ctx.push_raw("<br />\n"),
        Node::Link(link) => {
            render_link_open(&link.url, link.title.as_deref(), ctx);
            render_phrasing(&link.children, ctx);
            ctx.push_raw("</a>");
        }
        Node::LinkReference(link) => render_link_reference(link, ctx),
        Node::Image(img) => render_image_tag(&img.url, &img.alt, img.title.as_deref(), ctx),
        Node::ImageReference(img) => render_image_reference(img, ctx),
        Node::List(list) => render_list(list, ctx),
        Node::ListItem(item) => render_list_item(item, ctx),
        Node::Code(code) => render_code(code, ctx),
        Node::Blockquote(quote) => {
            ctx.push_raw("<blockquote>\n");
            ctx.enter(Scope::Blockquote);
            render_flow(&quote.children, ctx);
            ctx.exit();
            ctx.push_raw("\n</blockquote>");
        }
        Node::ThematicBreak(_) => ctx.push_raw("<hr />"),
        Node::Html(html) => ctx.push_raw(&html.value),
        Node::Table(table) => render_table(table, ctx),
        Node::InlineMath(math) => {
            ctx.push_raw("<span class=\"math inline\">\\(");
            ctx.push_text(&math.value);
            ctx.push_raw("\\)</span>");
        }
        Node::Math(math) => {
            ctx.push_raw("<p><span class=\"math display\">\\[");
            ctx.push_text(&math.value);
            ctx.push_raw("\\]</span></p>");
        }
        Node::Definition(_) | Node::Yaml(_) | Node::Toml(_) => {}
        Node::TableRow(_) | Node::TableCell(_) if ctx.is_in_table() => {}
        _ => {
            log::warn!("Unhandled markdown node type: {:?}", node);
        }
    }
}
