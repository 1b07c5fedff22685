//! Core pipeline for mvnext
//!
//! Enrolls a Maven project in a build-scan service with idempotent,
//! format-preserving edits, in three phases:
//!
//! - **Scan**: [`StateScanner`] classifies every project file by logical path
//!   and folds the facts into an [`Accumulator`]
//! - **Synthesize**: [`FileSynthesizer`] decides which files must be created
//!   and renders their content in the project's newline convention
//! - **Edit**: [`TreeEditor`] inserts the extension declaration into an
//!   existing `.mvn/extensions.xml` unless an equivalent entry is present
//!
//! # Architecture
//!
//! ```text
//!                 mvnext-cli
//!                     |
//!                mvnext-core
//!                 /        \
//!          mvnext-fs    mvnext-xml
//! ```
//!
//! The core never walks the file system; [`Pipeline::run`] takes any slice
//! of [`SourceFile`]s and returns a [`PipelineReport`] describing what to
//! write.

pub mod accumulator;
pub mod descriptor;
pub mod editor;
pub mod error;
pub mod options;
pub mod paths;
pub mod pipeline;
pub mod scanner;
pub mod settings;
pub mod source;
pub mod synthesizer;

pub use accumulator::Accumulator;
pub use descriptor::TargetElementDescriptor;
pub use editor::{DocumentState, EditOutcome, TreeEditor};
pub use error::{Error, Result};
pub use options::{ExtensionOptions, PublishCriteria};
pub use paths::MavenPath;
pub use pipeline::{ChangeKind, EditedFile, Pipeline, PipelineReport, SkippedFile};
pub use scanner::{PathRole, StateScanner};
pub use source::{FormatStyle, SourceFile};
pub use synthesizer::{FileSynthesizer, GeneratedFile};
