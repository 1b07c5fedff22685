//! Project inventory: the set of files a pipeline run looks at

use walkdir::{DirEntry, WalkDir};

use crate::{Error, NormalizedPath, Result, io};

/// Directories never descended into
const SKIPPED_DIRS: &[&str] = &[".git", ".hg", ".svn", ".idea", "target", "node_modules"];

/// Extensions collected by the walk
const COLLECTED_EXTENSIONS: &[&str] = &["xml"];

/// A file of the project, addressed by its root-relative logical path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    /// Path relative to the project root, forward slashes
    pub path: NormalizedPath,
    /// File content
    pub content: String,
}

impl ProjectFile {
    pub fn new(path: impl Into<NormalizedPath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Files collected from a project directory
#[derive(Debug, Clone)]
pub struct ProjectInventory {
    root: NormalizedPath,
    files: Vec<ProjectFile>,
}

impl ProjectInventory {
    /// Walk `root` and collect the XML files accepted by `wanted`.
    ///
    /// `wanted` sees each root-relative path before the file is read, so
    /// files it rejects are never opened and their encoding does not
    /// matter. Skips VCS metadata, IDE folders and build output. Files are
    /// returned sorted by logical path so runs are reproducible.
    ///
    /// # Errors
    ///
    /// Returns `NotADirectory` if `root` is not a directory, `Walk` if the
    /// directory tree cannot be read, and `Io` if a wanted file cannot be
    /// read as UTF-8.
    pub fn load<P>(root: impl Into<NormalizedPath>, wanted: P) -> Result<Self>
    where
        P: Fn(&NormalizedPath) -> bool,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::NotADirectory {
                path: root.to_native(),
            });
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(root.to_native())
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));

        for entry in walker {
            let entry = entry.map_err(|source| Error::Walk {
                root: root.to_native(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let absolute = NormalizedPath::new(entry.path());
            if !absolute
                .extension()
                .is_some_and(|ext| COLLECTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            {
                continue;
            }

            let Some(relative) = absolute.relative_to(&root) else {
                continue;
            };
            if !wanted(&relative) {
                tracing::trace!(path = %relative, "ignoring project file");
                continue;
            }
            let content = io::read_text(&absolute)?;
            tracing::trace!(path = %relative, "collected project file");
            files.push(ProjectFile {
                path: relative,
                content,
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!(root = %root, count = files.len(), "loaded project inventory");

        Ok(Self { root, files })
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn files(&self) -> &[ProjectFile] {
        &self.files
    }

    /// Find a file by logical path
    pub fn get(&self, path: &str) -> Option<&ProjectFile> {
        let wanted = NormalizedPath::new(path);
        self.files.iter().find(|f| f.path == wanted)
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}
