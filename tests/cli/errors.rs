//! Tests for error reporting and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_config_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--check"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("secretfile"));
}

#[test]
fn test_missing_config_fails() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no configuration given");
    assert_stderr_contains(&output, "SECRETFILE_CONFIG");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_empty_config_flag_counts_as_missing() {
    let t = Test::new();

    let output = t.cmd().args(["--config", ""]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no configuration given");
}

#[test]
fn test_unknown_flag_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["--config", "W10=", "--bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_zero_timeout_rejected() {
    let t = Test::new();

    t.cmd()
        .args(["--timeout", "0", "--config", "W10="])
        .assert()
        .failure();
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();

    let output = t.check_json(&format!(
        r#"[{{"name":"a","target":"{}","template":"%s"}}]"#,
        t.target_str("a")
    ));
    assert_success(&output);

    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output: {}",
        err
    );
}

#[test]
fn test_verbose_flag_shows_debug_output() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "--verbose",
            "--check",
            "--config",
            &encode(&format!(
                r#"[{{"name":"a","target":"{}","template":"%s"}}]"#,
                t.target_str("a")
            )),
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "config loaded");
}

#[test]
fn test_log_env_var_overrides_verbosity() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SECRETFILE_LOG", "secretfile=debug")
        .args([
            "--check",
            "--config",
            &encode(&format!(
                r#"[{{"name":"a","target":"{}","template":"%s"}}]"#,
                t.target_str("a")
            )),
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_abort_logged_with_stage() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SECRETFILE_LOG", "secretfile=trace")
        .args(["--config", &encode(r#"[{"name":"a","template":"%s"}]"#)])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "run aborted");
    assert_stderr_contains(&output, "stage=\"config\"");
}
