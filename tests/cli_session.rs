// End-to-end tests that drive the compiled binary over stdin/stdout.
// The program is line-oriented (no raw mode), so a plain pipe works.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("typedash").unwrap();
    cmd.current_dir(dir.path())
        // keep the history log and user identity inside the sandbox
        .env("HOME", dir.path())
        .env_remove("XDG_DATA_HOME")
        .env("TYPEDASH_USER", "tester")
        .env_remove("TYPEDASH_SNIPPETS")
        .env_remove("TYPEDASH_LEADERBOARD");
    cmd
}

fn write_snippets(dir: &TempDir, snippets: &[&str]) {
    let json = serde_json::to_string(snippets).unwrap();
    std::fs::write(dir.path().join("snippets.json"), json).unwrap();
}

#[test]
fn completed_session_prints_report_and_persists_leaderboard() {
    let dir = TempDir::new().unwrap();
    write_snippets(&dir, &["hello world"]);

    bin(&dir)
        .write_stdin("\nhello world\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Results"))
        .stdout(predicate::str::contains("Accuracy: 100.00%"))
        .stdout(predicate::str::contains("Errors: 0"))
        .stdout(predicate::str::contains("Leaderboard"))
        .stdout(predicate::str::contains("tester"));

    let raw = std::fs::read_to_string(dir.path().join("leaderboard.json")).unwrap();
    let board: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board[0]["user"], "tester");
    assert_eq!(board[0]["accuracy"], 100.0);
}

#[test]
fn abort_before_ready_exits_cleanly_without_a_leaderboard() {
    let dir = TempDir::new().unwrap();
    write_snippets(&dir, &["hello world"]);

    bin(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter when ready"))
        .stdout(predicate::str::contains("Results").not());

    assert!(!dir.path().join("leaderboard.json").exists());
}

#[test]
fn missing_snippet_file_is_a_fatal_startup_error() {
    let dir = TempDir::new().unwrap();

    bin(&dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("snippets.json"));
}

#[test]
fn malformed_snippet_file_is_a_fatal_startup_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("snippets.json"), "{oops").unwrap();

    bin(&dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn empty_snippet_collection_is_a_fatal_startup_error() {
    let dir = TempDir::new().unwrap();
    write_snippets(&dir, &[]);

    bin(&dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no snippets available"));
}

#[test]
fn env_overrides_relocate_the_storage_files() {
    let dir = TempDir::new().unwrap();
    let snippets = dir.path().join("custom-snippets.json");
    let board = dir.path().join("scores").join("board.json");
    std::fs::write(&snippets, r#"["abc"]"#).unwrap();

    bin(&dir)
        .env("TYPEDASH_SNIPPETS", &snippets)
        .env("TYPEDASH_LEADERBOARD", &board)
        .write_stdin("\nabc\n")
        .assert()
        .success();

    assert!(board.exists());
    assert!(!dir.path().join("leaderboard.json").exists());
}

#[test]
fn mismatches_show_up_in_the_diff_view() {
    let dir = TempDir::new().unwrap();
    write_snippets(&dir, &["line one\nline two"]);

    bin(&dir)
        .write_stdin("\nline one\nline wrong\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✔ line one"))
        .stdout(predicate::str::contains("✘ line two"))
        .stdout(predicate::str::contains("↳ You typed: line wrong"));
}

#[test]
fn malformed_leaderboard_warns_but_does_not_abort() {
    let dir = TempDir::new().unwrap();
    write_snippets(&dir, &["abc"]);
    std::fs::write(dir.path().join("leaderboard.json"), "not json").unwrap();

    bin(&dir)
        .write_stdin("\nabc\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("malformed leaderboard"));

    let raw = std::fs::read_to_string(dir.path().join("leaderboard.json")).unwrap();
    let board: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(board.len(), 1);
}
