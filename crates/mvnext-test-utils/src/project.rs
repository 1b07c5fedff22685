//! [`TestProject`] builder for on-disk Maven project scenarios.

use std::fs;
use std::path::Path;

use mvnext_fs::NormalizedPath;
use tempfile::TempDir;

use crate::content;

/// Directory holding the checked-in fixture projects
pub fn fixtures_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/projects")
}

fn copy_dir(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}

/// A temporary project directory with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use mvnext_test_utils::project::TestProject;
///
/// let project = TestProject::new().with_pom();
/// project.assert_file_exists("pom.xml");
/// project.assert_file_not_exists(".mvn/extensions.xml");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Copy the fixture project `name` from `test-fixtures/projects`.
    ///
    /// Realism level: **REAL**, checked-in Maven project layouts.
    ///
    /// # Panics
    /// Panics if the fixture does not exist or cannot be copied.
    pub fn from_fixture(name: &str) -> Self {
        let project = Self::new();
        let source = fixtures_dir().join(name);
        copy_dir(&source, project.root()).unwrap_or_else(|e| {
            panic!("TestProject::from_fixture: {}: {e}", source.display())
        });
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root as a logical path
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Write `content` at `path` (relative to root), creating directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write(&self, path: &str, content: &str) -> &Self {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestProject::write: {}: {e}", parent.display()));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("TestProject::write: {}: {e}", full_path.display()));
        self
    }

    /// Add the standard `pom.xml`.
    pub fn with_pom(self) -> Self {
        self.write("pom.xml", content::POM);
        self
    }

    /// Add `.mvn/extensions.xml` with `content`.
    pub fn with_extensions(self, content: &str) -> Self {
        self.write(".mvn/extensions.xml", content);
        self
    }

    /// Add an existing `.mvn/gradle-enterprise.xml`.
    pub fn with_settings(self) -> Self {
        self.write(".mvn/gradle-enterprise.xml", content::SETTINGS);
        self
    }

    /// Add XML files under directories the inventory must skip.
    ///
    /// Realism level: **FAKE**, file names only, no real VCS or build state.
    pub fn with_ignored_dirs(self) -> Self {
        self.write(".git/config.xml", "<config/>");
        self.write("target/classes/pom.xml", "<project/>");
        self.write("node_modules/pkg/extensions.xml", "<extensions/>");
        self
    }

    /// Read the file at `path` (relative to root).
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}
