//! Tests for XmlDocument queries and format-preserving inserts

use mvnext_xml::{Element, LineEnding, XPath, XmlDocument};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn extension(artifact: &str) -> Element {
    Element::new("extension")
        .child(Element::text("groupId", "com.example"))
        .child(Element::text("artifactId", artifact))
}

#[test]
fn test_crlf_and_comment_are_preserved() {
    let source = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n<extensions>\r\n  <!-- keep me, exactly -->\r\n  <extension>\r\n    <artifactId>other</artifactId>\r\n  </extension>\r\n</extensions>\r\n";
    let mut doc = XmlDocument::parse(source).unwrap();

    doc.append_child(&XPath::parse("/extensions").unwrap(), &extension("new"))
        .unwrap();

    let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n<extensions>\r\n  <!-- keep me, exactly -->\r\n  <extension>\r\n    <artifactId>other</artifactId>\r\n  </extension>\r\n  <extension>\r\n    <groupId>com.example</groupId>\r\n    <artifactId>new</artifactId>\r\n  </extension>\r\n</extensions>\r\n";
    assert_eq!(doc.source(), expected);
    assert_eq!(doc.line_ending(), LineEnding::CrLf);
    assert!(!doc.source().replace("\r\n", "").contains('\n'));
}

#[test]
fn test_insert_keeps_prefix_bytes() {
    let source = "<?xml version='1.0'?>\n<!-- header -->\n<extensions   a=\"1\"\n    b='2'>\n\t<extension><artifactId>x</artifactId></extension>\n</extensions>";
    let mut doc = XmlDocument::parse(source).unwrap();
    let edit = doc
        .append_child(&XPath::parse("/extensions").unwrap(), &extension("y"))
        .unwrap();

    assert_eq!(&doc.source()[..edit.span.start], &source[..edit.span.start]);
    assert!(doc.source().ends_with("</extensions>"));
    assert!(doc.source().contains("\n\t<extension>\n\t\t<groupId>com.example</groupId>"));
}

#[test]
fn test_inserted_document_reparses_and_is_queryable() {
    let mut doc = XmlDocument::parse("<extensions>\n</extensions>").unwrap();
    doc.append_child(&XPath::parse("/extensions").unwrap(), &extension("z"))
        .unwrap();

    let reparsed = XmlDocument::parse(doc.render()).unwrap();
    let found = reparsed
        .query(&XPath::parse("/extensions/extension/artifactId").unwrap())
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].value.as_deref(), Some("z"));
}

#[test]
fn test_inverse_edit_restores_original() {
    let source = "<extensions>\n  <extension/>\n</extensions>\n";
    let mut doc = XmlDocument::parse(source).unwrap();
    let edit = doc
        .append_child(&XPath::parse("/extensions").unwrap(), &extension("z"))
        .unwrap();
    assert_eq!(edit.inverse().apply(doc.source()), source);
}

#[rstest]
#[case("<extensions/>")]
#[case("<extensions></extensions>")]
#[case("<extensions>\n</extensions>")]
#[case("<?xml version=\"1.0\"?>\n<extensions>\n  <!-- c -->\n</extensions>\n")]
#[case("<extensions xmlns=\"http://maven.apache.org/EXTENSIONS/1.0.0\">\n</extensions>")]
fn test_round_trip_after_insert(#[case] source: &str) {
    let mut doc = XmlDocument::parse(source).unwrap();
    doc.append_child(&XPath::parse("/extensions").unwrap(), &extension("r"))
        .unwrap();
    let rendered = doc.render();
    assert_eq!(XmlDocument::parse(rendered.clone()).unwrap().render(), rendered);
}

#[test]
fn test_namespaced_root_matches_local_name() {
    let doc = XmlDocument::parse(
        "<extensions xmlns=\"http://maven.apache.org/EXTENSIONS/1.0.0\"><extension><artifactId>a</artifactId></extension></extensions>",
    )
    .unwrap();
    let found = doc
        .query(&XPath::parse("/extensions/extension/artifactId").unwrap())
        .unwrap();
    assert_eq!(found.len(), 1);
}
