//! Logical paths the pipeline recognizes in a Maven project.

use std::fmt;

/// Well-known project files, relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MavenPath {
    /// `pom.xml`, marks the root of a Maven project
    Pom,
    /// `.mvn/extensions.xml`, the build extension list
    Extensions,
    /// `.mvn/gradle-enterprise.xml`, the build-scan settings
    GradleEnterprise,
}

impl MavenPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pom => "pom.xml",
            Self::Extensions => ".mvn/extensions.xml",
            Self::GradleEnterprise => ".mvn/gradle-enterprise.xml",
        }
    }
}

impl AsRef<str> for MavenPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MavenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
