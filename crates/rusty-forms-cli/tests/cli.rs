use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const RULES: &str = r#"
[[field]]
name = "email"
required = true
preset = "email"
"#;

fn rusty_forms(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rusty-forms"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn workspace(rules: &str, data: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("form.rules.toml"), rules).unwrap();
    fs::write(dir.path().join("form.json"), data).unwrap();
    dir
}

fn check(dir: &Path) -> Output {
    rusty_forms(dir, &["check", "--rules", "form.rules.toml", "--data", "form.json"])
}

#[test]
fn test_valid_submission_exits_zero() {
    let dir = workspace(RULES, r#"{"email": "ada@example.com"}"#);
    let output = check(dir.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_submission_exits_one() {
    let dir = workspace(RULES, r#"{"email": "ada"}"#);
    let output = check(dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "email: Please enter a valid email address\n"
    );
}

#[test]
fn test_bad_rule_file_exits_two() {
    let dir = workspace("[[field]]\nname = \"code\"\npreset = \"zip\"\n", "{}");
    let output = check(dir.path());

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown preset `zip`"));
}

#[test]
fn test_missing_data_file_exits_two() {
    let dir = workspace(RULES, "{}");
    fs::remove_file(dir.path().join("form.json")).unwrap();

    assert_eq!(check(dir.path()).status.code(), Some(2));
}

#[test]
fn test_malformed_config_only_affects_check() {
    let dir = workspace(RULES, r#"{"email": "ada@example.com"}"#);
    fs::write(dir.path().join("rusty-forms.toml"), "[output\nformat = ").unwrap();

    let output = rusty_forms(dir.path(), &["patterns"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("email"));

    assert_eq!(check(dir.path()).status.code(), Some(2));
}
