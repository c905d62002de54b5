//! Manifest validation and error-path integration tests

mod common;

use common::TestProject;
use predicates::prelude::*;

#[test]
fn test_duplicate_dependency_rejected() {
    let project = TestProject::new();
    project.write_manifest(
        r#"
name: demo
version: "0.1"
requires:
  - imgui/1.92.4
  - imgui/1.92.4
"#,
    );

    project
        .cmd()
        .arg("deps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate dependency: imgui"));
}

#[test]
fn test_range_pin_rejected() {
    let project = TestProject::new();
    project.write_manifest(
        r#"
name: demo
version: "0.1"
requires:
  - glfw/^3.4
"#,
    );

    project
        .cmd()
        .arg("deps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version pin for 'glfw'"));
}

#[test]
fn test_wildcard_pin_rejected() {
    let project = TestProject::new();
    project.write_manifest(
        r#"
name: demo
version: "0.1"
requires:
  - glm/1.*
"#,
    );

    project
        .cmd()
        .arg("deps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid version pin"));
}

#[test]
fn test_stage_rule_with_undeclared_dependency_rejected() {
    let project = TestProject::new();
    project.write_manifest(
        r#"
name: demo
version: "0.1"
requires:
  - glfw/3.4
stage:
  - pattern: "*glfw*"
    from: imgui
    into: bindings
"#,
    );

    project
        .cmd()
        .arg("deps")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Copy rule references undeclared dependency: imgui",
        ));
}

#[test]
fn test_unknown_generator_rejected() {
    let project = TestProject::new();
    project.write_manifest(
        r#"
name: demo
version: "0.1"
generators:
  - MakeDeps
"#,
    );

    project
        .cmd()
        .arg("deps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"));
}

#[test]
fn test_malformed_yaml_rejected() {
    let project = TestProject::new();
    project.write_manifest("name: [unclosed\n");

    project
        .cmd()
        .arg("deps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse manifest"));
}

#[test]
fn test_empty_project_name_rejected() {
    let project = TestProject::new();
    project.write_manifest("name: \"\"\nversion: \"0.1\"\n");

    project
        .cmd()
        .arg("deps")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project name cannot be empty"));
}
