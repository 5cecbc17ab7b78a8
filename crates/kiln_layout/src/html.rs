//! Headless HTML serialization of render trees

use std::fmt::Write;

use kiln_icons::{lookup, to_svg};

use crate::attributes::AttrValue;
use crate::element::{Element, IconNode, RenderNode, TooltipNode};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["img", "input", "br", "hr"];

impl RenderNode {
    /// Serialize the tree to HTML
    ///
    /// Event handlers are not serializable and are skipped; tooltips become
    /// a wrapping `div` carrying `data-tooltip` and `data-placement`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(&mut out, self);
        out
    }
}

fn write_node(out: &mut String, node: &RenderNode) {
    match node {
        RenderNode::Element(element) => write_element(out, element),
        RenderNode::Text(text) => out.push_str(&escape(text)),
        RenderNode::Icon(icon) => write_icon(out, icon),
        RenderNode::Tooltip(tooltip) => write_tooltip(out, tooltip),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag);

    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&element.classes.to_class_string()));
    }

    for (name, value) in element.attributes.iter() {
        if !is_valid_attribute_name(name) {
            tracing::debug!(
                "dropping attribute with invalid name {name:?} on <{}>",
                element.tag
            );
            continue;
        }
        match value {
            AttrValue::Text(text) => {
                let _ = write!(out, " {name}=\"{}\"", escape(text));
            }
            AttrValue::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            AttrValue::Bool(false) | AttrValue::Handler(_) => {}
        }
    }

    if VOID_ELEMENTS.contains(&element.tag) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", element.tag);
}

fn write_icon(out: &mut String, icon: &IconNode) {
    let _ = write!(
        out,
        "<span class=\"kiln-icon\" data-icon=\"{}\" data-size=\"{}\">",
        escape(icon.name.as_str()),
        icon.size.id()
    );
    if let Some(path_data) = lookup(icon.name.as_str()) {
        out.push_str(&to_svg(path_data, icon.size.px()));
    }
    out.push_str("</span>");
}

fn write_tooltip(out: &mut String, tooltip: &TooltipNode) {
    let _ = write!(
        out,
        "<div data-tooltip=\"{}\" data-placement=\"{}\">",
        escape(&tooltip.text),
        tooltip.side.id()
    );
    write_node(out, &tooltip.child);
    out.push_str("</div>");
}

/// Names that cannot break out of the start tag
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use kiln_icons::IconSize;

    #[test]
    fn test_escapes_text_and_attributes() {
        let node = RenderNode::from(
            Element::new("span")
                .attributes(Attributes::new().with("title", "a \"b\""))
                .child("<b> & co"),
        );
        assert_eq!(
            node.to_html(),
            "<span title=\"a &quot;b&quot;\">&lt;b&gt; &amp; co</span>"
        );
    }

    #[test]
    fn test_void_and_boolean_attributes() {
        let node = RenderNode::from(
            Element::new("img").attributes(
                Attributes::new()
                    .with("src", "/a.png")
                    .with("hidden", false)
                    .with("draggable", true),
            ),
        );
        assert_eq!(node.to_html(), "<img src=\"/a.png\" draggable />");
    }

    #[test]
    fn test_invalid_attribute_names_are_dropped() {
        let node = RenderNode::from(
            Element::new("button").attributes(
                Attributes::new()
                    .with("type", "button")
                    .with("x onmouseover=\"alert(1)\" y", "z")
                    .with("a>b", "c")
                    .with("", "empty")
                    .with("data-id", "7"),
            ),
        );
        let html = node.to_html();
        assert!(!html.contains("onmouseover"));
        assert_eq!(html, "<button type=\"button\" data-id=\"7\"></button>");
    }

    #[test]
    fn test_unknown_icon_renders_empty_glyph() {
        let node = RenderNode::from(IconNode {
            name: "unicorn".into(),
            size: IconSize::Sm,
        });
        assert_eq!(
            node.to_html(),
            "<span class=\"kiln-icon\" data-icon=\"unicorn\" data-size=\"sm\"></span>"
        );
    }
}
