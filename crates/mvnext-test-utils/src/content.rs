//! Document texts used across test suites.
//!
//! Every text is well-formed XML. Builders return `String` so tests can
//! tweak line endings with [`crlf`].

use mvnext_fs::ProjectFile;

/// Minimal project marker
pub const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>demo</artifactId>
  <version>1.0.0</version>
</project>
"#;

/// Extension list declaring one unrelated extension, with a comment
pub const EXTENSIONS_WITH_OTHER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<extensions>
    <!-- build cache, do not remove -->
    <extension>
        <groupId>com.example</groupId>
        <artifactId>other-extension</artifactId>
        <version>2.1</version>
    </extension>
</extensions>
"#;

/// Extension list that already declares the build-scan extension
pub const EXTENSIONS_WITH_TARGET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<extensions>
  <extension>
    <groupId>com.gradle</groupId>
    <artifactId>gradle-enterprise-maven-extension</artifactId>
    <version>1.15.4</version>
  </extension>
</extensions>
"#;

/// Extension list without the `<extensions>` container
pub const EXTENSIONS_MALFORMED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plugins>
  <plugin/>
</plugins>
"#;

/// Pre-existing settings document
pub const SETTINGS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes" ?>
<gradleEnterprise xmlns="https://www.gradle.com/gradle-enterprise-maven">
  <server>
    <url>https://existing.example.com</url>
  </server>
</gradleEnterprise>
"#;

/// Rewrite every line break in `text` to CRLF.
pub fn crlf(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}

/// In-memory files of a project with only a `pom.xml`.
pub fn bare_project() -> Vec<ProjectFile> {
    vec![ProjectFile::new("pom.xml", POM)]
}

/// In-memory files of a project whose extension list exists.
pub fn project_with_extensions(extensions: &str) -> Vec<ProjectFile> {
    vec![
        ProjectFile::new("pom.xml", POM),
        ProjectFile::new(".mvn/extensions.xml", extensions),
    ]
}
