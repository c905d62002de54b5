//! CLI integration tests using the REAL depstage binary

mod common;

use common::TestProject;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    common::depstage_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("depstage.yaml"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("deps"))
        .stdout(predicate::str::contains("stage"))
        .stdout(predicate::str::contains("layout"));
}

#[test]
fn test_version_output() {
    common::depstage_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("depstage"))
        .stdout(predicate::str::contains("depstage.yaml"))
        .stdout(predicate::str::contains("Default registry"));
}

#[test]
fn test_completions_bash() {
    common::depstage_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("depstage"));
}

#[test]
fn test_completions_unknown_shell() {
    common::depstage_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_run_outside_project() {
    let project = TestProject::new();
    // No manifest written
    project
        .cmd()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn test_deps_lists_declared_pins() {
    let project = TestProject::new();
    project.write_manifest(common::REFERENCE_MANIFEST);

    project
        .cmd()
        .arg("deps")
        .assert()
        .success()
        .stdout(predicate::str::contains("Declared dependencies (7)"))
        .stdout(predicate::str::contains("1.92.4"))
        .stdout(predicate::str::contains("vulkan-memory-allocator"))
        .stdout(predicate::str::contains("entt"));
}

#[test]
fn test_deps_resolved_shows_install_paths() {
    let project = TestProject::new();
    project.write_manifest(common::REFERENCE_MANIFEST);
    project.install_reference_packages();

    project
        .cmd()
        .args(["deps", "--resolved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glslang"))
        .stdout(predicate::str::contains("1.4.313.0"));
}

#[test]
fn test_deps_resolved_fails_on_missing_package() {
    let project = TestProject::new();
    project.write_manifest(common::REFERENCE_MANIFEST);
    // Registry left empty

    project
        .cmd()
        .args(["deps", "--resolved"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"));
}

#[test]
fn test_layout_command() {
    let project = TestProject::new();
    project.write_manifest(common::REFERENCE_MANIFEST);

    project
        .cmd()
        .arg("layout")
        .assert()
        .success()
        .stdout(predicate::str::contains("source:     ."))
        .stdout(predicate::str::contains("build/Release"))
        .stdout(predicate::str::contains("build/generators"));
}

#[test]
fn test_layout_respects_build_type() {
    let project = TestProject::new();
    project.write_manifest(
        "name: demo\nversion: \"0.1\"\nbuild_type: Debug\n",
    );

    project
        .cmd()
        .arg("layout")
        .assert()
        .success()
        .stdout(predicate::str::contains("build/Debug"));
}

#[test]
fn test_project_flag_points_at_manifest_dir() {
    let project = TestProject::new();
    project.write_manifest("name: demo\nversion: \"0.1\"\n");

    common::depstage_cmd()
        .args(["--project"])
        .arg(&project.root)
        .arg("layout")
        .assert()
        .success()
        .stdout(predicate::str::contains("build/Release"));
}
