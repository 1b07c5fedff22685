//! Facts gathered by the scan phase

use serde::Serialize;

/// Project facts collected while scanning.
///
/// Every flag only ever turns on during a scan, so partial accumulators from
/// disjoint file sets combine with [`Accumulator::merge`] regardless of order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Accumulator {
    /// A `pom.xml` was seen at the project root
    pub is_target_project_root: bool,
    /// The project marker uses CRLF line breaks
    pub uses_alternate_line_ending: bool,
    /// `.mvn/extensions.xml` exists
    pub primary_file_exists: bool,
    /// `.mvn/gradle-enterprise.xml` exists
    pub secondary_file_exists: bool,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combine two partial scans.
    pub fn merge(self, other: Self) -> Self {
        Self {
            is_target_project_root: self.is_target_project_root || other.is_target_project_root,
            uses_alternate_line_ending: self.uses_alternate_line_ending
                || other.uses_alternate_line_ending,
            primary_file_exists: self.primary_file_exists || other.primary_file_exists,
            secondary_file_exists: self.secondary_file_exists || other.secondary_file_exists,
        }
    }

    /// Line ending for generated files
    pub fn line_ending(&self) -> mvnext_xml::LineEnding {
        mvnext_xml::LineEnding::from_crlf(self.uses_alternate_line_ending)
    }
}
