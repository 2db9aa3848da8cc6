use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quill() -> Command {
    Command::cargo_bin("quill").expect("quill binary")
}

fn make_tree(template: &str) -> TempDir {
    let root = TempDir::new().expect("root");
    let docs = root.path().join("docs");
    fs::create_dir_all(&docs).expect("mkdir");
    fs::write(docs.join("README.md.j2"), template).expect("template");
    root
}

#[test]
fn diff_reports_up_to_date_after_build() {
    let root = make_tree("# Title\n");
    quill().current_dir(root.path()).assert().success();

    quill()
        .current_dir(root.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn diff_prints_unified_diff_for_stale_output() {
    let root = make_tree("# Title\n");
    quill().current_dir(root.path()).assert().success();

    let readme = root.path().join("README.md");
    let edited = format!("{}manual tweak\n", fs::read_to_string(&readme).unwrap());
    fs::write(&readme, edited).unwrap();

    quill()
        .current_dir(root.path())
        .arg("diff")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--- a/README.md")
                .and(predicate::str::contains("+++ b/README.md"))
                .and(predicate::str::contains("@@"))
                .and(predicate::str::contains("-manual tweak")),
        );
}

#[test]
fn check_exits_nonzero_only_when_stale() {
    let root = make_tree("# Title\n");

    // Never built: README.md is missing, so the output is stale.
    quill()
        .current_dir(root.path())
        .args(["diff", "--check"])
        .assert()
        .code(1);

    quill().current_dir(root.path()).assert().success();

    quill()
        .current_dir(root.path())
        .args(["diff", "--check"])
        .assert()
        .success();
}

#[test]
fn diff_never_writes_the_output() {
    let root = make_tree("# Title\n");

    quill()
        .current_dir(root.path())
        .arg("diff")
        .assert()
        .success();

    assert!(
        !root.path().join("README.md").exists(),
        "diff must not create the output"
    );
}
