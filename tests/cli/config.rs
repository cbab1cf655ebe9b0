//! Tests for config decoding and validation through the binary.
//!
//! Every case here must fail before a secret store is contacted, and must
//! leave the target directory empty.

use crate::support::*;

#[test]
fn test_invalid_base64_fails_without_writes() {
    let t = Test::new();

    let output = t.cmd().args(["--config", "%%% not base64 %%%"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "not valid base64");
    assert_eq!(t.file_count(), 0);
}

#[test]
fn test_invalid_json_fails() {
    let t = Test::new();

    let output = t.run_json("[{\"name\": \"a\",");
    assert_failure(&output);
    assert_stderr_contains(&output, "not valid JSON");
}

#[test]
fn test_scalar_json_fails() {
    let t = Test::new();

    let output = t.run_json("42");
    assert_failure(&output);
    assert_stderr_contains(&output, "must be a JSON array or object");
}

#[test]
fn test_missing_target_fails_without_writes() {
    let t = Test::new();
    let json = serde_json::json!([
        t.entry("first", "first.env", "A=%s"),
        { "name": "second", "template": "B=%s" },
    ])
    .to_string();

    let output = t.run_json(&json);
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed config entry #1");
    assert_stderr_contains(&output, "target");
    assert_eq!(t.file_count(), 0);
}

#[test]
fn test_missing_template_in_map_form_fails() {
    let t = Test::new();
    let json = serde_json::json!({ "db": { "target": t.target_str("db") } }).to_string();

    let output = t.run_json(&json);
    assert_failure(&output);
    assert_stderr_contains(&output, "`db`");
    assert_stderr_contains(&output, "template");
}

#[test]
fn test_two_placeholders_rejected() {
    let t = Test::new();
    let json = serde_json::json!([t.entry("a", "a.env", "%s=%s")]).to_string();

    let output = t.run_json(&json);
    assert_failure(&output);
    assert_stderr_contains(&output, "2 `%s` placeholders");
    assert_stderr_contains(&output, "exactly one %s");
}

#[test]
fn test_no_placeholder_rejected() {
    let t = Test::new();
    let json = serde_json::json!([t.entry("a", "a.env", "STATIC=1")]).to_string();

    let output = t.run_json(&json);
    assert_failure(&output);
    assert_stderr_contains(&output, "no `%s` placeholder");
}

#[test]
fn test_duplicate_target_rejected() {
    let t = Test::new();
    let json = serde_json::json!([
        t.entry("a", "same.env", "%s"),
        t.entry("b", "same.env", "%s"),
    ])
    .to_string();

    let output = t.run_json(&json);
    assert_failure(&output);
    assert_stderr_contains(&output, "is used by both `a` and `b`");
}

#[test]
fn test_invalid_mode_rejected() {
    let t = Test::new();
    let json = serde_json::json!([{
        "name": "a",
        "target": t.target_str("a"),
        "template": "%s",
        "mode": "rw-r--r--",
    }])
    .to_string();

    let output = t.run_json(&json);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid file mode");
}

#[test]
fn test_empty_list_rejected() {
    let t = Test::new();

    let output = t.run_json("[]");
    assert_failure(&output);
    assert_stderr_contains(&output, "no secrets");
}
