//! Pipeline: scan, synthesize, then edit
//!
//! The scan of every document completes before any file is generated or
//! edited. Edits touch distinct documents and each document is edited at
//! most once per run.

use std::collections::BTreeMap;
use std::fmt;

use mvnext_fs::{NormalizedPath, ProjectInventory, io};
use mvnext_xml::{Edit, XmlDocument, unified_diff};
use serde::Serialize;

use crate::accumulator::Accumulator;
use crate::descriptor::TargetElementDescriptor;
use crate::editor::{DocumentState, EditOutcome, TreeEditor};
use crate::error::Result;
use crate::options::ExtensionOptions;
use crate::scanner::{PathRole, StateScanner};
use crate::source::SourceFile;
use crate::synthesizer::{FileSynthesizer, GeneratedFile};

/// Kind of change a run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    NoChanges,
    FilesCreated,
    FileEdited,
    /// A target document could not be edited
    EditSkipped,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoChanges => "no changes",
            Self::FilesCreated => "files created",
            Self::FileEdited => "file edited",
            Self::EditSkipped => "edit skipped",
        };
        write!(f, "{text}")
    }
}

/// An existing document changed by the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditedFile {
    pub path: NormalizedPath,
    pub original: String,
    pub updated: String,
    pub edit: Edit,
}

/// A target document left alone, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: NormalizedPath,
    pub reason: String,
}

/// Everything a run decided
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineReport {
    /// Facts from the scan phase
    pub accumulator: Accumulator,
    /// New files, in creation order
    pub created: Vec<GeneratedFile>,
    /// Existing files with an inserted element
    pub edited: Vec<EditedFile>,
    /// Target files the editor could not change
    pub skipped: Vec<SkippedFile>,
    /// Final state of every recognized document
    pub states: BTreeMap<NormalizedPath, DocumentState>,
}

impl PipelineReport {
    /// Kinds of change in this report; `NoChanges` alone when nothing happened
    pub fn changes(&self) -> Vec<ChangeKind> {
        let mut changes = Vec::new();
        if !self.created.is_empty() {
            changes.push(ChangeKind::FilesCreated);
        }
        if !self.edited.is_empty() {
            changes.push(ChangeKind::FileEdited);
        }
        if !self.skipped.is_empty() {
            changes.push(ChangeKind::EditSkipped);
        }
        if changes.is_empty() {
            changes.push(ChangeKind::NoChanges);
        }
        changes
    }

    /// True if applying the report would write anything
    pub fn has_changes(&self) -> bool {
        !self.created.is_empty() || !self.edited.is_empty()
    }

    /// Unified diff of every pending write, created files first.
    pub fn diff(&self) -> String {
        let created = self
            .created
            .iter()
            .map(|file| unified_diff(file.path.as_str(), None, &file.content));
        let edited = self
            .edited
            .iter()
            .map(|file| unified_diff(file.path.as_str(), Some(&file.original), &file.updated));
        created.chain(edited).collect()
    }

    /// Paths that applying the report writes to
    pub fn written_paths(&self) -> Vec<&NormalizedPath> {
        self.created
            .iter()
            .map(|f| &f.path)
            .chain(self.edited.iter().map(|f| &f.path))
            .collect()
    }

    fn skip(&mut self, path: &NormalizedPath, error: crate::Error) {
        tracing::warn!(path = %path, error = %error, "skipping edit");
        self.skipped.push(SkippedFile {
            path: path.clone(),
            reason: error.to_string(),
        });
    }
}

/// Runs the three phases over a set of documents.
#[derive(Debug, Clone)]
pub struct Pipeline {
    options: ExtensionOptions,
    descriptor: TargetElementDescriptor,
    scanner: StateScanner,
    synthesizer: FileSynthesizer,
    editor: TreeEditor,
}

impl Pipeline {
    /// Create a pipeline for the build-scan extension.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOptions` if `options` do not validate.
    pub fn new(options: ExtensionOptions) -> Result<Self> {
        let descriptor = TargetElementDescriptor::gradle_enterprise(options.version.as_deref())?;
        Self::with_descriptor(options, descriptor)
    }

    /// Create a pipeline that ensures a custom element.
    pub fn with_descriptor(
        options: ExtensionOptions,
        descriptor: TargetElementDescriptor,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            descriptor,
            scanner: StateScanner::new(),
            synthesizer: FileSynthesizer::new(),
            editor: TreeEditor::new(),
        })
    }

    pub fn options(&self) -> &ExtensionOptions {
        &self.options
    }

    pub fn descriptor(&self) -> &TargetElementDescriptor {
        &self.descriptor
    }

    /// Run over in-memory documents.
    ///
    /// Nothing is written; see [`Pipeline::apply_to_disk`].
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if a generated file cannot be rendered.
    /// Documents that cannot be edited, generated ones included, are
    /// reported in `skipped` instead.
    pub fn run<F: SourceFile + Sync>(&self, files: &[F]) -> Result<PipelineReport> {
        let accumulator = self.scanner.scan_parallel(files);
        tracing::debug!(?accumulator, documents = files.len(), "scan complete");

        let mut report = PipelineReport {
            accumulator,
            ..PipelineReport::default()
        };
        for file in files {
            if PathRole::classify(file.source_path()).is_some() {
                report
                    .states
                    .entry(file.source_path().clone())
                    .or_insert(DocumentState::Scanned);
            }
        }

        let generated = self.synthesizer.synthesize(&report.accumulator, &self.options)?;

        for file in files {
            if PathRole::classify(file.source_path()) != Some(PathRole::PrimaryTarget) {
                continue;
            }
            self.edit_existing(file, &mut report);
        }

        for file in generated {
            self.finish_generated(file, &mut report);
        }

        for change in report.changes() {
            tracing::debug!(%change, "run result");
        }
        Ok(report)
    }

    /// Run over a loaded project
    pub fn run_inventory(&self, inventory: &ProjectInventory) -> Result<PipelineReport> {
        self.run(inventory.files())
    }

    /// Write the report's created and edited files below `root`.
    ///
    /// Each file is written atomically. Returns the absolute paths written.
    pub fn apply_to_disk(
        report: &PipelineReport,
        root: &NormalizedPath,
    ) -> Result<Vec<NormalizedPath>> {
        let mut written = Vec::new();
        for file in &report.created {
            let target = root.join(file.path.as_str());
            io::write_text(&target, &file.content)?;
            tracing::info!(path = %file.path, "created file");
            written.push(target);
        }
        for file in &report.edited {
            let target = root.join(file.path.as_str());
            io::write_text(&target, &file.updated)?;
            tracing::info!(path = %file.path, "edited file");
            written.push(target);
        }
        Ok(written)
    }

    /// Parse `content` and ensure the descriptor's element in it
    fn ensure_element(&self, content: &str) -> Result<(XmlDocument, EditOutcome)> {
        let mut doc = XmlDocument::parse(content)?;
        let outcome = self.editor.edit(&mut doc, &self.descriptor)?;
        Ok((doc, outcome))
    }

    fn edit_existing<F: SourceFile>(&self, file: &F, report: &mut PipelineReport) {
        let path = file.source_path();
        if report.states.get(path).is_some_and(DocumentState::is_final) {
            tracing::debug!(path = %path, "document already edited in this run");
            return;
        }

        match self.ensure_element(file.content()) {
            Ok((doc, outcome)) => {
                report.states.insert(path.clone(), DocumentState::from(&outcome));
                if let EditOutcome::Inserted(edit) = outcome {
                    report.edited.push(EditedFile {
                        path: path.clone(),
                        original: file.content().to_string(),
                        updated: doc.into_source(),
                        edit,
                    });
                }
            }
            Err(e) => report.skip(path, e),
        }
    }

    /// Record a generated file, inserting the target element first when it
    /// is the primary target. A placeholder the element cannot be inserted
    /// into is skipped; other generated files are still created.
    fn finish_generated(&self, mut file: GeneratedFile, report: &mut PipelineReport) {
        if PathRole::classify(&file.path) == Some(PathRole::PrimaryTarget) {
            match self.ensure_element(&file.content) {
                Ok((doc, outcome)) => {
                    report.states.insert(file.path.clone(), DocumentState::from(&outcome));
                    file.content = doc.into_source();
                }
                Err(e) => {
                    report.skip(&file.path, e);
                    return;
                }
            }
        } else {
            report.states.insert(file.path.clone(), DocumentState::Scanned);
        }
        report.created.push(file);
    }
}
