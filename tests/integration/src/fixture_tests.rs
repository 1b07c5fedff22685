//! Pipeline runs over the checked-in fixture projects
//!
//! Each fixture is copied to a temporary directory, enrolled, then enrolled
//! again; the second run must find nothing to do.

use mvnext_core::{
    ChangeKind, ExtensionOptions, PathRole, Pipeline, PipelineReport, PublishCriteria,
};
use mvnext_fs::ProjectInventory;
use mvnext_test_utils::project::TestProject;
use mvnext_xml::{XPath, XmlDocument};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn pipeline() -> Pipeline {
    Pipeline::new(ExtensionOptions {
        version: Some("1.16".to_string()),
        upload_in_background: Some(false),
        publish_criteria: Some(PublishCriteria::Always),
        ..ExtensionOptions::new("https://ge.example.com")
    })
    .unwrap()
}

fn enroll(project: &TestProject) -> PipelineReport {
    let root = project.normalized_root();
    let inventory = ProjectInventory::load(root.clone(), PathRole::is_recognized).unwrap();
    let report = pipeline().run_inventory(&inventory).unwrap();
    Pipeline::apply_to_disk(&report, &root).unwrap();
    report
}

#[rstest]
#[case("bare", vec![ChangeKind::FilesCreated])]
#[case("with-extensions", vec![ChangeKind::FilesCreated, ChangeKind::FileEdited])]
#[case("enrolled", vec![ChangeKind::NoChanges])]
#[case("crlf", vec![ChangeKind::FilesCreated, ChangeKind::FileEdited])]
#[case("malformed", vec![ChangeKind::FilesCreated, ChangeKind::EditSkipped])]
#[case("multi-module", vec![ChangeKind::FileEdited])]
fn test_enroll_twice(#[case] fixture: &str, #[case] first: Vec<ChangeKind>) {
    let project = TestProject::from_fixture(fixture);

    let report = enroll(&project);
    assert_eq!(report.changes(), first);

    let second = enroll(&project);
    assert!(!second.has_changes(), "second run of {fixture} changed files");
}

#[test]
fn test_namespaced_tab_indented_list() {
    let project = TestProject::from_fixture("with-extensions");
    enroll(&project);

    let updated = project.read(".mvn/extensions.xml");
    assert!(updated.contains("\t<!-- build cache -->\n"));
    assert!(updated.contains(
        "\t</extension>\n\t<extension>\n\t\t<groupId>com.gradle</groupId>\n\t\t<artifactId>gradle-enterprise-maven-extension</artifactId>\n\t\t<version>1.16</version>\n\t</extension>\n</extensions>\n"
    ));

    let doc = XmlDocument::parse(updated).unwrap();
    let ids = doc
        .query(&XPath::parse("/extensions/extension/artifactId").unwrap())
        .unwrap();
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_crlf_project_stays_crlf() {
    let project = TestProject::from_fixture("crlf");
    enroll(&project);

    for path in [".mvn/extensions.xml", ".mvn/gradle-enterprise.xml"] {
        let text = project.read(path);
        assert_eq!(
            text.matches('\n').count(),
            text.matches("\r\n").count(),
            "{path} has bare LF"
        );
    }
    project.assert_file_contains(".mvn/extensions.xml", "  <!-- keep this comment -->\r\n");
}

#[test]
fn test_enrolled_project_is_untouched() {
    let project = TestProject::from_fixture("enrolled");
    let before = project.read(".mvn/extensions.xml");
    enroll(&project);
    assert_eq!(project.read(".mvn/extensions.xml"), before);
    project.assert_file_contains(".mvn/gradle-enterprise.xml", "https://existing.example.com");
}

#[test]
fn test_self_closing_list_is_expanded() {
    let project = TestProject::from_fixture("multi-module");
    enroll(&project);
    let updated = project.read(".mvn/extensions.xml");
    assert!(updated.starts_with("<extensions>\n  <extension>\n"));
    assert!(updated.ends_with("</extension>\n</extensions>\n"));
}
