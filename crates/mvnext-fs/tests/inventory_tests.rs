use mvnext_fs::{Error, NormalizedPath, ProjectInventory};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn write(root: &std::path::Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_collects_xml_files_with_logical_paths() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "pom.xml", "<project/>");
    write(temp.path(), ".mvn/extensions.xml", "<extensions/>");
    write(temp.path(), "module/pom.xml", "<project/>");
    write(temp.path(), "README.md", "# readme");

    let inventory = ProjectInventory::load(temp.path(), |_| true).unwrap();
    let paths: Vec<_> = inventory
        .files()
        .iter()
        .map(|f| f.path.as_str().to_string())
        .collect();

    assert_eq!(paths, vec![".mvn/extensions.xml", "module/pom.xml", "pom.xml"]);
    assert_eq!(
        inventory.get("./.mvn/extensions.xml").unwrap().content,
        "<extensions/>"
    );
}

#[test]
fn test_skips_build_output_and_vcs() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "pom.xml", "<project/>");
    write(temp.path(), "target/classes/pom.xml", "<project/>");
    write(temp.path(), ".git/config.xml", "<x/>");
    write(temp.path(), "node_modules/pkg/a.xml", "<x/>");

    let inventory = ProjectInventory::load(temp.path(), |_| true).unwrap();
    assert_eq!(inventory.files().len(), 1);
    assert_eq!(inventory.files()[0].path, "pom.xml");
}

fn is_pom(path: &NormalizedPath) -> bool {
    path.file_name() == Some("pom.xml")
}

#[test]
fn test_unwanted_files_are_never_read() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "pom.xml", "<project/>");
    let latin1 = temp.path().join("src/test/resources/latin1.xml");
    fs::create_dir_all(latin1.parent().unwrap()).unwrap();
    fs::write(&latin1, b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><a>caf\xe9</a>").unwrap();

    let inventory = ProjectInventory::load(temp.path(), is_pom).unwrap();
    assert_eq!(inventory.files().len(), 1);
    assert_eq!(inventory.files()[0].path, "pom.xml");
    assert_eq!(inventory.root(), &NormalizedPath::new(temp.path()));
}

#[test]
fn test_wanted_file_that_is_not_utf8_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pom.xml"), b"<project>\xe9</project>").unwrap();

    let result = ProjectInventory::load(temp.path(), is_pom);
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_missing_root_is_an_error() {
    let result = ProjectInventory::load("/definitely/not/here", |_| true);
    assert!(matches!(result, Err(Error::NotADirectory { .. })));
}
