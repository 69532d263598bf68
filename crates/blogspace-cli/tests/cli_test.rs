//! CLI surface tests: argument parsing, offline subcommands, and the
//! token file lifecycle. The TUI itself is exercised at the controller
//! layer in blogspace-app.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn blogspace() -> Command {
    Command::cargo_bin("blogspace").expect("binary")
}

#[test]
fn test_help_lists_subcommands() {
    blogspace()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("BlogSpace"))
        .stdout(predicate::str::contains("posts"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_logout_without_session() {
    let temp_dir = TempDir::new().unwrap();

    blogspace()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active session"));
}

#[test]
fn test_logout_removes_token_file() {
    let temp_dir = TempDir::new().unwrap();
    let token_path = temp_dir.path().join("token");
    std::fs::write(&token_path, "tok-abc").unwrap();

    blogspace()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    assert!(!token_path.exists());
}

#[test]
fn test_config_shows_default_api_url() {
    let temp_dir = TempDir::new().unwrap();

    blogspace()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("blog-website-back-end.onrender.com"))
        .stdout(predicate::str::contains("session token:     none"));
}

#[test]
fn test_config_respects_api_url_override() {
    let temp_dir = TempDir::new().unwrap();

    blogspace()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--api-url")
        .arg("http://localhost:8000")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:8000"));
}

#[test]
fn test_config_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "api_base_url = \"http://example.test\"\nclear_stale_token = true\n",
    )
    .unwrap();

    blogspace()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://example.test"))
        .stdout(predicate::str::contains("clear stale token: true"));
}

#[test]
fn test_posts_against_unreachable_server_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();

    blogspace()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .arg("--api-url")
        .arg("http://127.0.0.1:1")
        .arg("posts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
