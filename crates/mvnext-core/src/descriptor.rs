//! Description of the element the editor ensures is present

use mvnext_xml::{Element, NodeMatch, XPath};

use crate::error::Result;

/// Group id of the build-scan extension
pub const EXTENSION_GROUP_ID: &str = "com.gradle";

/// Artifact id of the build-scan extension
pub const EXTENSION_ARTIFACT_ID: &str = "gradle-enterprise-maven-extension";

/// What to look for in a document and what to insert when it is missing.
///
/// A document already holds the element when some match of `detection` has
/// a text value equal to `identity`. Otherwise `template` is appended as the
/// last child of the element matched by `anchor`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetElementDescriptor {
    anchor: XPath,
    detection: XPath,
    identity: String,
    template: Element,
}

impl TargetElementDescriptor {
    /// # Errors
    ///
    /// Returns an XML error if either path expression is invalid.
    pub fn new(
        anchor: &str,
        detection: &str,
        identity: impl Into<String>,
        template: Element,
    ) -> Result<Self> {
        Ok(Self {
            anchor: XPath::parse(anchor)?,
            detection: XPath::parse(detection)?,
            identity: identity.into(),
            template,
        })
    }

    /// Descriptor for one `<extension>` entry of `.mvn/extensions.xml`.
    ///
    /// Detection compares artifact ids only, so an entry with any version
    /// (or none) counts as present.
    pub fn maven_extension(
        group_id: &str,
        artifact_id: &str,
        version: Option<&str>,
    ) -> Result<Self> {
        let template = Element::new("extension")
            .child(Element::text("groupId", group_id))
            .child(Element::text("artifactId", artifact_id))
            .child_opt(version.map(|v| Element::text("version", v.trim())));
        Self::new(
            "/extensions",
            "/extensions/extension/artifactId",
            artifact_id,
            template,
        )
    }

    /// Descriptor for the build-scan extension
    pub fn gradle_enterprise(version: Option<&str>) -> Result<Self> {
        Self::maven_extension(EXTENSION_GROUP_ID, EXTENSION_ARTIFACT_ID, version)
    }

    pub fn anchor(&self) -> &XPath {
        &self.anchor
    }

    pub fn detection(&self) -> &XPath {
        &self.detection
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn template(&self) -> &Element {
        &self.template
    }

    /// Identity predicate over detection matches
    pub fn is_identity(&self, node: &NodeMatch) -> bool {
        node.value.as_deref() == Some(self.identity.as_str())
    }
}
