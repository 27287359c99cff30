//! CLI-level tests: invoke the binary against fixture directories.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{read_back, write_config_header, write_manifest, write_rc};

fn buildbump() -> Command {
    Command::cargo_bin("buildbump").expect("binary exists")
}

#[test]
fn test_prints_new_full_version_on_success() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "1.0.218.1");
    write_rc(dir.path(), 218);
    write_config_header(dir.path(), "1.0.218", "2007/10");

    buildbump()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Version bumped to 1.0.219"));
}

#[test]
fn test_missing_pattern_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path(), "1.0.218.1");
    std::fs::write(dir.path().join("ls.rc"), "// no version fields\n").unwrap();
    write_config_header(dir.path(), "1.0.218", "2007/10");

    buildbump()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to find pattern"));

    // Partial-write behavior: the manifest stays bumped
    assert!(read_back(dir.path(), "ls.manifest").contains("version=\"1.0.219.1\""));
}

#[test]
fn test_missing_manifest_reports_io_failure() {
    let dir = tempfile::tempdir().unwrap();

    buildbump()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
