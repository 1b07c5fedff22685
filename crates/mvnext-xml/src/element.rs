//! Element templates rendered as indented XML fragments
//!
//! Optional content is expressed with `Option` at build time: an absent
//! branch is dropped from the tree entirely, so rendering never has to emit
//! empty or null placeholders.

use crate::format::{LineEnding, escape_attribute, escape_text};

/// An element to be rendered into a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    content: Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Empty,
    Text(String),
    Children(Vec<Element>),
}

impl Element {
    /// An element with no content yet (`<name/>`)
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: Content::Empty,
        }
    }

    /// A leaf element holding character data (`<name>text</name>`)
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            content: Content::Text(text.into()),
        }
    }

    /// Add an attribute. Attributes render in insertion order.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element.
    ///
    /// Replaces text content if the element had any.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Append a child element when present; `None` leaves no trace.
    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct children, empty for leaf elements
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children.as_slice(),
            _ => &[],
        }
    }

    /// Character data of a leaf element
    pub fn text_value(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Find a direct child by name
    pub fn find_child(&self, name: &str) -> Option<&Element> {
        self.children().iter().find(|c| c.name == name)
    }

    /// Render the element with every line prefixed by `indent`.
    ///
    /// Nested elements are indented by one more `unit` per level. The result
    /// has no leading or trailing line break.
    pub fn render(&self, indent: &str, unit: &str, line_ending: LineEnding) -> String {
        let mut out = String::new();
        self.render_into(&mut out, indent, unit, line_ending.as_str());
        out
    }

    fn render_into(&self, out: &mut String, indent: &str, unit: &str, newline: &str) {
        out.push_str(indent);
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }

        match &self.content {
            Content::Empty => out.push_str("/>"),
            Content::Text(text) => {
                out.push('>');
                out.push_str(&escape_text(text));
                out.push_str("</");
                out.push_str(&self.name);
                out.push('>');
            }
            Content::Children(children) => {
                out.push('>');
                let nested = format!("{indent}{unit}");
                for child in children {
                    out.push_str(newline);
                    child.render_into(out, &nested, unit, newline);
                }
                out.push_str(newline);
                out.push_str(indent);
                out.push_str("</");
                out.push_str(&self.name);
                out.push('>');
            }
        }
    }
}
