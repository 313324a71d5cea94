use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn help_displays_usage() {
    Command::cargo_bin("projdoc")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ignore-dirs"));
}

#[test]
fn writes_document_with_cli_ignores() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    fs::create_dir_all(root.join("images")).unwrap();
    fs::create_dir_all(root.join("target")).unwrap();
    fs::write(root.join("images/logo.png"), [0x89, b'P', b'N', b'G']).unwrap();
    fs::write(root.join("target/out.txt"), "build").unwrap();
    fs::write(root.join("README.md"), "readme").unwrap();
    fs::write(root.join("notes.txt"), "skip me").unwrap();
    fs::write(root.join("app.js"), "console.log(1)").unwrap();
    let out = dir.path().join("doc.md");

    Command::cargo_bin("projdoc")
        .expect("binary exists")
        .arg(&root)
        .arg("-o")
        .arg(&out)
        .args(["-d", "target", "-f", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Documentation saved to"));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("# proj\n"));
    assert!(written.contains("**app.js:**\n```javascript\nconsole.log(1)\n```\n"));
    assert!(!written.contains("images"));
    assert!(!written.contains("target"));
    assert!(!written.contains("README.md"));
    assert!(!written.contains("notes.txt"));
}

#[test]
fn missing_root_exits_with_error() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("projdoc")
        .expect("binary exists")
        .arg(dir.path().join("nope"))
        .arg("-o")
        .arg(dir.path().join("doc.md"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn json_format_uses_json_default_name() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("proj");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("a.py"), "x=1").unwrap();

    Command::cargo_bin("projdoc")
        .expect("binary exists")
        .current_dir(dir.path())
        .arg("proj")
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project_documentation.json"));

    let written = fs::read_to_string(dir.path().join("project_documentation.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["title"], "proj");
    assert!(!dir.path().join("project_documentation.md").exists());
}
