//! Synthesis phase: decide which files must be created

use mvnext_fs::NormalizedPath;
use mvnext_xml::LineEnding;
use serde::Serialize;

use crate::accumulator::Accumulator;
use crate::error::Result;
use crate::options::ExtensionOptions;
use crate::paths::MavenPath;
use crate::settings;
use crate::source::SourceFile;

/// A file to be created by the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: NormalizedPath,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<NormalizedPath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

impl SourceFile for GeneratedFile {
    fn source_path(&self) -> &NormalizedPath {
        &self.path
    }

    fn content(&self) -> &str {
        &self.content
    }
}

/// Empty extension list in the given line ending
pub fn extensions_placeholder(line_ending: LineEnding) -> String {
    let nl = line_ending.as_str();
    format!(r#"<?xml version="1.0" encoding="UTF-8"?>{nl}<extensions>{nl}</extensions>"#)
}

/// Decides which files the project lacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSynthesizer;

impl FileSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Files to create, settings document first.
    ///
    /// Nothing is generated outside a project root or when the settings
    /// document already exists. The extension list placeholder is added only
    /// when `.mvn/extensions.xml` is missing too.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the settings document cannot be rendered.
    pub fn synthesize(
        &self,
        acc: &Accumulator,
        options: &ExtensionOptions,
    ) -> Result<Vec<GeneratedFile>> {
        if !acc.is_target_project_root || acc.secondary_file_exists {
            tracing::debug!(
                project_root = acc.is_target_project_root,
                settings_exists = acc.secondary_file_exists,
                "nothing to generate"
            );
            return Ok(Vec::new());
        }

        let line_ending = acc.line_ending();
        let mut files = Vec::with_capacity(2);
        files.push(GeneratedFile::new(
            MavenPath::GradleEnterprise.as_str(),
            settings::render(options, line_ending)?,
        ));
        if !acc.primary_file_exists {
            files.push(GeneratedFile::new(
                MavenPath::Extensions.as_str(),
                extensions_placeholder(line_ending),
            ));
        }

        tracing::debug!(count = files.len(), %line_ending, "synthesized files");
        Ok(files)
    }
}
