//! Scan phase: classify documents and gather project facts

use mvnext_fs::NormalizedPath;
use rayon::prelude::*;

use crate::accumulator::Accumulator;
use crate::paths::MavenPath;
use crate::source::SourceFile;

/// What a logical path means to the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    /// Marks the directory as a project root
    ProjectMarker,
    /// The document the editor patches
    PrimaryTarget,
    /// The settings document the synthesizer creates
    SecondaryTarget,
}

impl PathRole {
    /// Classify a logical path. Unrecognized paths have no role.
    pub fn classify(path: &NormalizedPath) -> Option<Self> {
        [
            (MavenPath::Pom, Self::ProjectMarker),
            (MavenPath::Extensions, Self::PrimaryTarget),
            (MavenPath::GradleEnterprise, Self::SecondaryTarget),
        ]
        .into_iter()
        .find(|(known, _)| path == known.as_str())
        .map(|(_, role)| role)
    }

    /// True for paths the pipeline reads. Use as the inventory filter.
    pub fn is_recognized(path: &NormalizedPath) -> bool {
        Self::classify(path).is_some()
    }
}

/// Folds documents into an [`Accumulator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StateScanner;

impl StateScanner {
    pub fn new() -> Self {
        Self
    }

    /// Record what one document says about the project.
    pub fn observe<F: SourceFile + ?Sized>(&self, acc: &mut Accumulator, file: &F) {
        let path = file.source_path();
        let Some(role) = PathRole::classify(path) else {
            return;
        };
        tracing::debug!(path = %path, ?role, "classified document");

        match role {
            PathRole::ProjectMarker => {
                acc.is_target_project_root = true;
                // Default LF when the marker has no line breaks
                acc.uses_alternate_line_ending |=
                    file.format_style().is_some_and(|style| style.uses_crlf());
            }
            PathRole::PrimaryTarget => acc.primary_file_exists = true,
            PathRole::SecondaryTarget => acc.secondary_file_exists = true,
        }
    }

    /// Scan every document in order.
    pub fn scan<F: SourceFile>(&self, files: &[F]) -> Accumulator {
        let mut acc = Accumulator::new();
        for file in files {
            self.observe(&mut acc, file);
        }
        acc
    }

    /// Scan documents in parallel and merge the partial results.
    pub fn scan_parallel<F: SourceFile + Sync>(&self, files: &[F]) -> Accumulator {
        files
            .par_iter()
            .fold(Accumulator::new, |mut acc, file| {
                self.observe(&mut acc, file);
                acc
            })
            .reduce(Accumulator::new, Accumulator::merge)
    }
}
