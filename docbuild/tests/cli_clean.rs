//! CLI tests for `docbuild clean`.

use std::fs;
use std::process::Command;

use docbuild::exit_codes;
use docbuild::test_support::TestProject;

#[test]
fn clean_keeps_pdf_and_removes_artifacts() {
    let project = TestProject::new().expect("project");
    let out = project.output_dir();
    fs::create_dir_all(&out).expect("mkdir");
    for name in ["main.pdf", "main.log", "main.aux"] {
        fs::write(out.join(name), b"x").expect("write file");
    }

    let output = Command::new(env!("CARGO_BIN_EXE_docbuild"))
        .current_dir(project.root())
        .env_remove("RUST_LOG")
        .args(["--color", "never", "clean"])
        .output()
        .expect("run docbuild clean");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Build artifacts cleaned."));
    assert!(out.join("main.pdf").is_file());
    assert!(!out.join("main.log").exists());
    assert!(!out.join("main.aux").exists());
}

#[test]
fn clean_creates_missing_output_dir() {
    let project = TestProject::new().expect("project");

    let status = Command::new(env!("CARGO_BIN_EXE_docbuild"))
        .current_dir(project.root())
        .env_remove("RUST_LOG")
        .args(["--color", "never", "clean"])
        .status()
        .expect("run docbuild clean");

    assert_eq!(status.code(), Some(exit_codes::OK));
    assert!(project.output_dir().is_dir());
}

#[test]
fn clean_ignores_extra_words() {
    let project = TestProject::new().expect("project");
    let out = project.output_dir();
    fs::create_dir_all(&out).expect("mkdir");
    fs::write(out.join("main.pdf"), b"x").expect("write pdf");
    fs::write(out.join("main.log"), b"x").expect("write log");

    let output = Command::new(env!("CARGO_BIN_EXE_docbuild"))
        .current_dir(project.root())
        .env_remove("RUST_LOG")
        .args(["--color", "never", "clean", "extra", "--now"])
        .output()
        .expect("run docbuild clean");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Build artifacts cleaned."));
    assert!(out.join("main.pdf").is_file());
    assert!(!out.join("main.log").exists());
}
