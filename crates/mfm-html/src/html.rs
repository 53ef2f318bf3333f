//! Minimal HTML document builder.
//!
//! The renderer assembles output as a tree of [`HtmlNode`]s and serializes
//! it in a single pass, so a render call never touches a real DOM. Text
//! nodes and attribute values are escaped at serialization time;
//! [`HtmlNode::Raw`] bypasses escaping and exists only for the block-code
//! passthrough (see the crate docs for the trust boundary).

use std::fmt::Write;

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &["br", "img"];

/// A constructed HTML node: element, escaped text, or raw markup.
#[derive(Clone, Debug)]
pub(crate) enum HtmlNode {
    Element(Element),
    /// Literal text, escaped when serialized.
    Text(String),
    /// Markup injected verbatim. Never built from attacker-controlled
    /// input outside the documented block-code exception.
    Raw(String),
}

impl HtmlNode {
    /// Serialize this node and its subtree into `out`.
    pub fn serialize(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(&escape_html(text)),
            Self::Raw(html) => out.push_str(html),
            Self::Element(el) => el.serialize(out),
        }
    }
}

/// An element under construction: tag, attributes in insertion order,
/// classes, children.
#[derive(Clone, Debug)]
pub(crate) struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    classes: Vec<String>,
    children: Vec<HtmlNode>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute. Attributes serialize in insertion order; the
    /// `class` attribute built via [`add_class`](Self::add_class) always
    /// comes last.
    pub fn set_attr(&mut self, name: &'static str, value: impl Into<String>) {
        self.attrs.push((name, value.into()));
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.push(class.into());
    }

    pub fn append(&mut self, child: HtmlNode) {
        self.children.push(child);
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(HtmlNode::Text(text.into()));
    }

    fn serialize(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            write!(out, r#" {name}="{}""#, escape_html(value)).unwrap();
        }
        if !self.classes.is_empty() {
            write!(out, r#" class="{}""#, escape_html(&self.classes.join(" "))).unwrap();
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.serialize(out);
        }
        write!(out, "</{}>", self.tag).unwrap();
    }
}

/// Escape HTML special characters in text content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialize(node: &HtmlNode) -> String {
        let mut out = String::new();
        node.serialize(&mut out);
        out
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#x27;s");
    }

    #[test]
    fn test_element_with_attrs_and_children() {
        let mut el = Element::new("a");
        el.set_attr("href", "https://example.com/?a=1&b=2");
        el.append_text("label");
        assert_eq!(
            serialize(&HtmlNode::Element(el)),
            r#"<a href="https://example.com/?a=1&amp;b=2">label</a>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let mut el = Element::new("span");
        el.append_text("<b>not bold</b>");
        assert_eq!(
            serialize(&HtmlNode::Element(el)),
            "<span>&lt;b&gt;not bold&lt;/b&gt;</span>"
        );
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let mut el = Element::new("code");
        el.append(HtmlNode::Raw("<span>x</span>".to_owned()));
        assert_eq!(
            serialize(&HtmlNode::Element(el)),
            "<code><span>x</span></code>"
        );
    }

    #[test]
    fn test_classes_serialize_last() {
        let mut el = Element::new("strong");
        el.set_attr("data-mfm", "big");
        el.add_class("animated");
        el.add_class("tada");
        assert_eq!(
            serialize(&HtmlNode::Element(el)),
            r#"<strong data-mfm="big" class="animated tada"></strong>"#
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        assert_eq!(serialize(&HtmlNode::Element(Element::new("br"))), "<br>");

        let mut img = Element::new("img");
        img.set_attr("src", "x.webp");
        assert_eq!(
            serialize(&HtmlNode::Element(img)),
            r#"<img src="x.webp">"#
        );
    }

    #[test]
    fn test_attribute_values_escaped() {
        let mut el = Element::new("a");
        el.set_attr("href", r#"java"><script>"#);
        assert_eq!(
            serialize(&HtmlNode::Element(el)),
            r#"<a href="java&quot;&gt;&lt;script&gt;"></a>"#
        );
    }
}
