use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn tagger(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tagger").unwrap();
    cmd.env("TAGGER_DB", home.join("db.json"))
        .env("TAGGER_CONFIG_DIR", home.join("config"))
        .env_remove("TAGGER_LOG");
    cmd
}

fn run_ok(home: &Path, args: &[&str]) -> String {
    let output = tagger(home).args(args).assert().success();
    String::from_utf8(output.get_output().stdout.clone()).unwrap()
}

fn seed(home: &Path) {
    run_ok(home, &["add", "f1.txt"]);
    run_ok(home, &["add", "f2.txt"]);
    run_ok(home, &["set", "f1.txt", "role", "1"]);
    run_ok(home, &["set", "f1.txt", "status"]);
    run_ok(home, &["set", "f2.txt", "role", "2"]);
}

#[test]
fn match_role_or_status() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    tagger(temp.path())
        .args(["match", "role == 1 OR status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("f1.txt"))
        .stdout(predicate::str::contains("f2.txt").not());
}

#[test]
fn match_joins_separate_words() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    let out = run_ok(temp.path(), &["match", "role", ">=", "1"]);
    assert_eq!(out.lines().count(), 2);
    assert!(out.lines().next().unwrap().ends_with(" f1.txt"));
}

#[test]
fn get_prints_tags_sorted() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    tagger(temp.path())
        .env("NO_COLOR", "1")
        .args(["get", "f1.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_match("role=1\\s+status").unwrap());
}

#[test]
fn syntax_error_exits_nonzero_with_position() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    tagger(temp.path())
        .args(["match", "role AND"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("position 8"));
}

#[test]
fn strict_match_without_results_fails() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    tagger(temp.path())
        .args(["match", "--strict", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));

    tagger(temp.path())
        .args(["match", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn set_rejects_non_integer_value() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    tagger(temp.path())
        .args(["set", "f1.txt", "role", "high"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tag value"));
}

#[test]
fn unset_missing_tag_fails() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    tagger(temp.path())
        .args(["unset", "f2.txt", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such tag"));
}

#[test]
fn move_keeps_tags_and_remove_forgets() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    run_ok(temp.path(), &["move", "f1.txt", "renamed.txt"]);
    let out = run_ok(temp.path(), &["match", "status"]);
    assert!(out.contains("renamed.txt"));

    run_ok(temp.path(), &["remove", "renamed.txt"]);
    tagger(temp.path())
        .args(["get", "renamed.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file"));
}

#[test]
fn uuid_selector_works() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    let files = run_ok(temp.path(), &["files"]);
    let id = files
        .lines()
        .find(|line| line.ends_with("f2.txt"))
        .and_then(|line| line.split_whitespace().next())
        .unwrap()
        .to_string();

    run_ok(temp.path(), &["set", &format!("uuid:{}", id), "n", "-5"]);
    let out = run_ok(temp.path(), &["match", "n", "<", "0"]);
    assert!(out.contains("f2.txt"));
}

#[test]
fn files_are_listed_by_path() {
    let temp = TempDir::new().unwrap();
    run_ok(temp.path(), &["add", "b.txt"]);
    run_ok(temp.path(), &["add", "a.txt"]);

    let out = run_ok(temp.path(), &["files"]);
    let paths: Vec<&str> = out
        .lines()
        .filter_map(|l| l.split_whitespace().nth(1))
        .collect();
    assert_eq!(paths, vec!["a.txt", "b.txt"]);

    let long = run_ok(temp.path(), &["files", "--long"]);
    assert_eq!(long.lines().count(), 2);
}

#[test]
fn db_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();
    let other = temp.path().join("other.json");
    let other = other.to_str().unwrap();

    run_ok(temp.path(), &["--db", other, "add", "x.txt"]);
    assert!(Path::new(other).exists());
    assert!(run_ok(temp.path(), &["files"]).is_empty());
}

#[test]
fn config_set_and_show() {
    let temp = TempDir::new().unwrap();

    run_ok(temp.path(), &["config", "log-level", "info"]);
    let out = run_ok(temp.path(), &["config", "log-level"]);
    assert!(out.contains("info"));

    tagger(temp.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("database-path"));
}

#[test]
fn config_errors_exit_nonzero() {
    let temp = TempDir::new().unwrap();

    tagger(temp.path())
        .args(["config", "log-level", "loud"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid log level 'loud'"));

    tagger(temp.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));

    let out = run_ok(temp.path(), &["config", "log-level"]);
    assert!(out.contains("warn"));
}

#[test]
fn options_after_filter_are_filter_words() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    tagger(temp.path())
        .args(["match", "status", "-v"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn version_and_help() {
    let temp = TempDir::new().unwrap();

    tagger(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tagger "));

    tagger(temp.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tag Commands:"));

    tagger(temp.path())
        .args(["help", "match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    seed(temp.path());

    tagger(temp.path())
        .args(["-v", "match", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("f1.txt"))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
}
