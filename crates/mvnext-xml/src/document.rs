//! Format-preserving XML document

use std::ops::Range;

use roxmltree::{Node, ParsingOptions};

use crate::edit::Edit;
use crate::element::Element;
use crate::error::{Error, Result};
use crate::format::{DEFAULT_INDENT, LineEnding, line_indent};
use crate::path::XPath;

/// An element matched by a path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMatch {
    /// Local name of the element
    pub name: String,
    /// Text value when the element holds only character data, trimmed
    pub value: Option<String>,
    /// Byte span of the element in the document source
    pub span: Range<usize>,
    /// Nesting depth, the root element being 0
    pub depth: usize,
}

/// An XML document kept as source text.
///
/// The tree is parsed on demand for queries; edits splice the source so
/// everything outside the edited span keeps its exact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    /// Source as provided to `parse` (for is_modified tracking)
    original_source: String,
    /// Current source (may differ from original after edits)
    source: String,
}

impl XmlDocument {
    /// Parse and validate XML source.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the text is not well-formed XML.
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        parse_tree(&source)?;
        Ok(Self {
            original_source: source.clone(),
            source,
        })
    }

    /// Current source
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Serialize the document.
    ///
    /// The document is held as text, so this is the exact current source:
    /// parsing and serializing is byte-identical.
    pub fn render(&self) -> String {
        self.source.clone()
    }

    /// Consume the document, returning its source
    pub fn into_source(self) -> String {
        self.source
    }

    /// Newline convention of the current source
    pub fn line_ending(&self) -> LineEnding {
        LineEnding::detect(&self.source)
    }

    /// Check if the document has been modified since it was parsed.
    pub fn is_modified(&self) -> bool {
        self.source != self.original_source
    }

    /// Find every element matched by `path`, in document order.
    pub fn query(&self, path: &XPath) -> Result<Vec<NodeMatch>> {
        let tree = parse_tree(&self.source)?;
        Ok(tree
            .descendants()
            .filter(|node| node.is_element())
            .filter_map(|node| {
                let names = element_names(node);
                path.matches(names.as_slice())
                    .then(|| node_match(node, names.len()))
            })
            .collect())
    }

    /// Find the first element matched by `path` that satisfies `predicate`.
    ///
    /// Stops at the first hit.
    pub fn find(
        &self,
        path: &XPath,
        mut predicate: impl FnMut(&NodeMatch) -> bool,
    ) -> Result<Option<NodeMatch>> {
        let tree = parse_tree(&self.source)?;
        for node in tree.descendants().filter(|n| n.is_element()) {
            let names = element_names(node);
            if !path.matches(names.as_slice()) {
                continue;
            }
            let candidate = node_match(node, names.len());
            if predicate(&candidate) {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    /// Insert `element` as the last child of the single element matched by
    /// `anchor`.
    ///
    /// Indentation follows the anchor's existing children, or the anchor's
    /// own indentation plus two spaces when it has none. Line breaks follow
    /// the document. A self-closing anchor is expanded into a start and end
    /// tag. On error the document is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `MalformedContainer` if nothing matches `anchor` and
    /// `AmbiguousAnchor` if more than one element does.
    pub fn append_child(&mut self, anchor: &XPath, element: &Element) -> Result<Edit> {
        let edit = self.plan_append(anchor, element)?;
        tracing::trace!(anchor = %anchor, kind = ?edit.kind, span = ?edit.span, "splicing child");
        self.source = edit.apply(&self.source);
        Ok(edit)
    }

    fn plan_append(&self, anchor: &XPath, element: &Element) -> Result<Edit> {
        let tree = parse_tree(&self.source)?;
        let mut matches = tree
            .descendants()
            .filter(|n| n.is_element() && anchor.matches(element_names(*n).as_slice()));

        let Some(anchor_node) = matches.next() else {
            return Err(Error::MalformedContainer {
                anchor: anchor.to_string(),
            });
        };
        let extra = matches.count();
        if extra > 0 {
            return Err(Error::AmbiguousAnchor {
                anchor: anchor.to_string(),
                count: extra + 1,
            });
        }

        let source = self.source.as_str();
        let newline = self.line_ending();
        let range = anchor_node.range();
        let anchor_indent = line_indent(source, range.start).unwrap_or("");

        let (child_indent, unit) = child_indentation(source, anchor_node, anchor_indent);
        let body = element.render(&child_indent, &unit, newline);
        let raw = &source[range.clone()];

        if raw.ends_with("/>") {
            // `<name .../>` becomes `<name ...>` + child + `</name>`
            let slash = range.end - 2;
            let open_end = source[..slash].trim_end().len();
            let qualified = qualified_name(raw);
            let new_content = format!(
                ">{nl}{body}{nl}{anchor_indent}</{qualified}>",
                nl = newline.as_str()
            );
            return Ok(Edit::splice(
                open_end..range.end,
                &source[open_end..range.end],
                new_content,
            ));
        }

        let close = raw
            .rfind("</")
            .map(|offset| range.start + offset)
            .ok_or_else(|| Error::MalformedContainer {
                anchor: anchor.to_string(),
            })?;
        let ws_start = source[..close].trim_end().len();
        let trailing = &source[ws_start..close];

        // Keep the author's whitespace before the end tag when it breaks the line
        let tail = if trailing.contains('\n') {
            trailing.to_string()
        } else {
            format!("{}{anchor_indent}", newline.as_str())
        };
        let new_content = format!("{}{body}{tail}", newline.as_str());

        Ok(Edit::splice(ws_start..close, trailing, new_content))
    }
}

fn parse_tree(source: &str) -> Result<roxmltree::Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(roxmltree::Document::parse_with_options(source, options)?)
}

/// Local names from the root element down to `node`
fn element_names<'a>(node: Node<'a, '_>) -> Vec<&'a str> {
    let mut names: Vec<&str> = node
        .ancestors()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name())
        .collect();
    names.reverse();
    names
}

fn node_match(node: Node<'_, '_>, ancestry_len: usize) -> NodeMatch {
    NodeMatch {
        name: node.tag_name().name().to_string(),
        value: text_value(node),
        span: node.range(),
        depth: ancestry_len - 1,
    }
}

/// Text of an element whose children are all character data
fn text_value(node: Node<'_, '_>) -> Option<String> {
    if !node.children().all(|c| c.is_text()) {
        return None;
    }
    let text: String = node.children().filter_map(|c| c.text()).collect();
    Some(text.trim().to_string())
}

/// Indent for a new last child of `anchor`, plus the per-level unit.
fn child_indentation(source: &str, anchor: Node<'_, '_>, anchor_indent: &str) -> (String, String) {
    let existing = anchor
        .children()
        .filter(|c| c.is_element())
        .last()
        .and_then(|child| {
            let start = child.range().start;
            let on_own_line = source[anchor.range().start..start].contains('\n');
            on_own_line.then(|| line_indent(source, start)).flatten()
        });

    match existing {
        Some(indent) => {
            let unit = indent
                .strip_prefix(anchor_indent)
                .filter(|u| !u.is_empty())
                .unwrap_or(DEFAULT_INDENT);
            (indent.to_string(), unit.to_string())
        }
        None => (
            format!("{anchor_indent}{DEFAULT_INDENT}"),
            DEFAULT_INDENT.to_string(),
        ),
    }
}

/// Tag name as written in the start tag, including any prefix
fn qualified_name(raw: &str) -> &str {
    let rest = raw.trim_start_matches('<');
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(rest.len());
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn anchor() -> XPath {
        XPath::parse("/extensions").unwrap()
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(XmlDocument::parse("<extensions>").is_err());
        assert!(XmlDocument::parse("").is_err());
    }

    #[test]
    fn test_render_is_source() {
        let source = "<?xml version=\"1.0\"?>\r\n<a  b='1' >\r\n  <!-- c -->\r\n</a>";
        let doc = XmlDocument::parse(source).unwrap();
        assert_eq!(doc.render(), source);
        assert!(!doc.is_modified());
        assert_eq!(doc.line_ending(), LineEnding::CrLf);
    }

    #[test]
    fn test_query_values() {
        let doc = XmlDocument::parse(
            "<extensions><extension><artifactId> a </artifactId></extension><extension><artifactId>b</artifactId></extension></extensions>",
        )
        .unwrap();
        let path = XPath::parse("/extensions/extension/artifactId").unwrap();
        let values: Vec<_> = doc
            .query(&path)
            .unwrap()
            .into_iter()
            .map(|m| m.value)
            .collect();
        assert_eq!(values, vec![Some("a".to_string()), Some("b".to_string())]);
    }

    #[test]
    fn test_value_none_for_mixed_content() {
        let doc = XmlDocument::parse("<a><b>x<c/></b></a>").unwrap();
        let found = doc.query(&XPath::parse("/a/b").unwrap()).unwrap();
        assert_eq!(found[0].value, None);
        assert_eq!(found[0].depth, 1);
    }

    #[test]
    fn test_find_short_circuits() {
        let doc = XmlDocument::parse("<a><b>1</b><b>2</b><b>3</b></a>").unwrap();
        let mut seen = 0;
        let hit = doc
            .find(&XPath::parse("/a/b").unwrap(), |m| {
                seen += 1;
                m.value.as_deref() == Some("2")
            })
            .unwrap();
        assert!(hit.is_some());
        assert_eq!(seen, 2);
    }

    #[test]
    fn test_append_into_empty_pair() {
        let mut doc = XmlDocument::parse("<extensions></extensions>").unwrap();
        doc.append_child(&anchor(), &Element::text("extension", "x"))
            .unwrap();
        assert_eq!(
            doc.source(),
            "<extensions>\n  <extension>x</extension>\n</extensions>"
        );
        assert!(doc.is_modified());
    }

    #[test]
    fn test_append_follows_existing_indent() {
        let source = "<extensions>\n    <extension>a</extension>\n</extensions>\n";
        let mut doc = XmlDocument::parse(source).unwrap();
        let element = Element::new("extension").child(Element::text("groupId", "g"));
        doc.append_child(&anchor(), &element).unwrap();
        assert_eq!(
            doc.source(),
            "<extensions>\n    <extension>a</extension>\n    <extension>\n        <groupId>g</groupId>\n    </extension>\n</extensions>\n"
        );
    }

    #[test]
    fn test_append_expands_self_closing() {
        let mut doc = XmlDocument::parse("<?xml version=\"1.0\"?>\n<extensions />").unwrap();
        doc.append_child(&anchor(), &Element::text("extension", "x"))
            .unwrap();
        assert_eq!(
            doc.source(),
            "<?xml version=\"1.0\"?>\n<extensions>\n  <extension>x</extension>\n</extensions>"
        );
        XmlDocument::parse(doc.source()).unwrap();
    }

    #[test]
    fn test_append_nested_anchor_uses_anchor_indent() {
        let source = "<project>\n  <build>\n  </build>\n</project>";
        let mut doc = XmlDocument::parse(source).unwrap();
        doc.append_child(
            &XPath::parse("/project/build").unwrap(),
            &Element::text("plugin", "p"),
        )
        .unwrap();
        assert_eq!(
            doc.source(),
            "<project>\n  <build>\n    <plugin>p</plugin>\n  </build>\n</project>"
        );
    }

    #[test]
    fn test_append_missing_anchor_leaves_document() {
        let source = "<project></project>";
        let mut doc = XmlDocument::parse(source).unwrap();
        let err = doc
            .append_child(&anchor(), &Element::text("extension", "x"))
            .unwrap_err();
        assert!(matches!(err, Error::MalformedContainer { .. }));
        assert_eq!(doc.source(), source);
        assert!(!doc.is_modified());
    }

    #[test]
    fn test_append_ambiguous_anchor() {
        let mut doc = XmlDocument::parse("<a><b/><b/></a>").unwrap();
        let err = doc
            .append_child(&XPath::parse("/a/b").unwrap(), &Element::new("c"))
            .unwrap_err();
        assert!(matches!(err, Error::AmbiguousAnchor { count: 2, .. }));
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(qualified_name("<ext:extensions xmlns:ext=\"u\"/>"), "ext:extensions");
        assert_eq!(qualified_name("<extensions/>"), "extensions");
    }
}
