//! Rendering of `.mvn/gradle-enterprise.xml`

use mvnext_xml::{DEFAULT_INDENT, Element, LineEnding, XmlDocument};

use crate::error::{Error, Result};
use crate::options::ExtensionOptions;
use crate::paths::MavenPath;

const PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>"#;
const ROOT_OPEN: &str = "<gradleEnterprise";
const ROOT_NAMESPACES: &str = r#"    xmlns="https://www.gradle.com/gradle-enterprise-maven" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#;
const ROOT_SCHEMA: &str = r#"    xsi:schemaLocation="https://www.gradle.com/gradle-enterprise-maven https://www.gradle.com/schema/gradle-enterprise-maven.xsd">"#;
const ROOT_CLOSE: &str = "</gradleEnterprise>";

/// `<server>` block; `allowUntrusted` only when set
fn server(options: &ExtensionOptions) -> Element {
    Element::new("server")
        .child(Element::text("url", options.server_url.trim()))
        .child_opt(
            options
                .allow_untrusted_server
                .map(|allow| Element::text("allowUntrusted", allow.to_string())),
        )
}

/// `<buildScan>` block, absent when none of its settings is set
fn build_scan(options: &ExtensionOptions) -> Option<Element> {
    if options.upload_in_background.is_none()
        && options.publish_criteria.is_none()
        && options.capture_goal_input_files.is_none()
    {
        return None;
    }

    let scan = Element::new("buildScan")
        .child_opt(
            options
                .upload_in_background
                .map(|b| Element::text("backgroundBuildScanUpload", b.to_string())),
        )
        .child_opt(
            options
                .publish_criteria
                .map(|p| Element::text("publish", p.xml_name())),
        )
        .child_opt(options.capture_goal_input_files.map(|b| {
            Element::new("capture").child(Element::text("goalInputFiles", b.to_string()))
        }));
    Some(scan)
}

/// Render the settings document in the given line ending.
///
/// The output has no trailing line break and parses back unchanged.
///
/// # Errors
///
/// Returns `Serialization` if the rendered text is not well-formed XML.
pub fn render(options: &ExtensionOptions, line_ending: LineEnding) -> Result<String> {
    let nl = line_ending.as_str();
    let mut out = String::new();
    for line in [PROLOG, ROOT_OPEN, ROOT_NAMESPACES, ROOT_SCHEMA] {
        out.push_str(line);
        out.push_str(nl);
    }

    let blocks = std::iter::once(server(options)).chain(build_scan(options));
    for block in blocks {
        out.push_str(&block.render(DEFAULT_INDENT, DEFAULT_INDENT, line_ending));
        out.push_str(nl);
    }
    out.push_str(ROOT_CLOSE);

    XmlDocument::parse(out.as_str()).map_err(|e| Error::Serialization {
        path: MavenPath::GradleEnterprise.to_string(),
        message: e.to_string(),
    })?;
    Ok(out)
}
