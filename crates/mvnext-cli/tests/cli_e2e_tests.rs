//! CLI end-to-end tests that invoke the compiled `mvnext` binary.

use assert_cmd::Command;
use mvnext_test_utils::content;
use mvnext_test_utils::project::TestProject;
use predicates::prelude::*;

const SERVER: &str = "https://ge.example.com";

/// Get a Command for the mvnext binary
fn mvnext_cmd() -> Command {
    Command::cargo_bin("mvnext").expect("Failed to find mvnext binary")
}

#[test]
fn test_help_lists_commands() {
    mvnext_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_apply_enrolls_project() {
    let project = TestProject::new().with_pom();

    mvnext_cmd()
        .args(["apply", "--server", SERVER, "--version", "1.16"])
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains(".mvn/gradle-enterprise.xml"))
        .stdout(predicate::str::contains("Project enrolled"));

    project.assert_file_contains(".mvn/extensions.xml", "<version>1.16</version>");
    project.assert_file_contains(".mvn/gradle-enterprise.xml", "<url>https://ge.example.com</url>");
}

#[test]
fn test_second_apply_reports_up_to_date() {
    let project = TestProject::new()
        .with_pom()
        .with_extensions(content::EXTENSIONS_WITH_OTHER);

    mvnext_cmd()
        .args(["apply", "--server", SERVER])
        .arg(project.root())
        .assert()
        .success();
    let first = project.read(".mvn/extensions.xml");

    mvnext_cmd()
        .args(["apply", "--server", SERVER])
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("Already up to date"));
    assert_eq!(project.read(".mvn/extensions.xml"), first);
}

#[test]
fn test_dry_run_prints_diff_and_writes_nothing() {
    let project = TestProject::new().with_pom();

    mvnext_cmd()
        .args(["apply", "--dry-run", "--server", SERVER, "--publish", "always"])
        .arg(project.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("+++ b/.mvn/extensions.xml"))
        .stdout(predicate::str::contains("<publish>ALWAYS</publish>"));

    project.assert_file_not_exists(".mvn/extensions.xml");
    project.assert_file_not_exists(".mvn/gradle-enterprise.xml");
}

#[test]
fn test_check_fails_when_changes_pending() {
    let project = TestProject::new().with_pom();

    mvnext_cmd()
        .args(["check", "--server", SERVER])
        .arg(project.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("pending change"));
    project.assert_file_not_exists(".mvn");
}

#[test]
fn test_check_passes_after_apply() {
    let project = TestProject::new().with_pom();

    mvnext_cmd()
        .args(["apply", "--server", SERVER])
        .arg(project.root())
        .assert()
        .success();
    mvnext_cmd()
        .args(["check", "--server", SERVER])
        .arg(project.root())
        .assert()
        .success();
}

#[test]
fn test_missing_server_is_rejected() {
    let project = TestProject::new().with_pom();

    mvnext_cmd()
        .arg("apply")
        .arg(project.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("server_url"));
    project.assert_file_not_exists(".mvn");
}

#[test]
fn test_options_file() {
    let project = TestProject::new().with_pom();
    project.write(
        "mvnext.yaml",
        "server_url: https://yaml.example.com\ncapture_goal_input_files: true\n",
    );

    mvnext_cmd()
        .args(["apply", "--config"])
        .arg(project.root().join("mvnext.yaml"))
        .arg(project.root())
        .assert()
        .success();

    project.assert_file_contains(".mvn/gradle-enterprise.xml", "<url>https://yaml.example.com</url>");
    project.assert_file_contains(".mvn/gradle-enterprise.xml", "<goalInputFiles>true</goalInputFiles>");
}

#[test]
fn test_json_report() {
    let project = TestProject::new()
        .with_pom()
        .with_extensions(content::EXTENSIONS_MALFORMED);

    let output = mvnext_cmd()
        .args(["check", "--json", "--server", SERVER])
        .arg(project.root())
        .output()
        .unwrap();
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["accumulator"]["is_target_project_root"], true);
    assert_eq!(report["skipped"][0]["path"], ".mvn/extensions.xml");
    assert_eq!(report["created"][0]["path"], ".mvn/gradle-enterprise.xml");
}

#[test]
fn test_not_a_directory() {
    let project = TestProject::new().with_pom();

    mvnext_cmd()
        .args(["apply", "--server", SERVER])
        .arg(project.root().join("pom.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
