//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a throwaway data directory and
//! verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command with `DAYPACE_HOME` pointed at `home`.
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_daypace"))
        .args(args)
        .env("DAYPACE_HOME", home)
        .env_remove("DAYPACE_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (code, stdout, stderr) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {:?}\n{}", args, stderr);
    stdout
}

fn added_id(stdout: &str) -> String {
    stdout
        .trim()
        .strip_prefix("Task added: ")
        .expect("unexpected add output")
        .to_string()
}

#[test]
fn test_task_add_and_list_json() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(
        home.path(),
        &["task", "add", "Write report", "--duration", "45", "--priority", "4", "--energy", "high"],
    );
    let id = added_id(&out);

    let list = run_cli_success(home.path(), &["task", "list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&list).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], id.as_str());
    assert_eq!(tasks[0]["energy"], "high");
    assert_eq!(tasks[0]["duration_minutes"], 45);
}

#[test]
fn test_task_add_rejects_bad_input() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["task", "add", "Nothing", "--duration", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("duration"));

    let (code, _, _) = run_cli(home.path(), &["task", "add", "Odd", "--energy", "extreme"]);
    assert_ne!(code, 0);
}

#[test]
fn test_task_duplicate_and_remove() {
    let home = tempfile::tempdir().unwrap();
    let added = run_cli_success(home.path(), &["task", "add", "Plan sprint"]);
    let id = added_id(&added);

    let out = run_cli_success(home.path(), &["task", "duplicate", &id]);
    assert!(out.starts_with("Task duplicated: "));

    run_cli_success(home.path(), &["task", "remove", &id]);
    let list = run_cli_success(home.path(), &["task", "list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&list).unwrap();
    assert_eq!(tasks.as_array().unwrap().len(), 1);
    assert_eq!(tasks[0]["title"], "Plan sprint (copy)");

    let (code, _, stderr) = run_cli(home.path(), &["task", "remove", &id]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Task not found"));
}

#[test]
fn test_plan_json_matches_expected_layout() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(
        home.path(),
        &["task", "add", "first task", "-d", "90", "-p", "5", "-e", "high"],
    );
    run_cli_success(
        home.path(),
        &["task", "add", "second", "-d", "25", "-p", "2", "-e", "low"],
    );

    let out = run_cli_success(
        home.path(),
        &[
            "plan", "--start", "08:00", "--no-end", "--warmup", "10", "--wrap", "10",
            "--break-every", "90", "--break-length", "10", "--no-lunch", "--json",
        ],
    );
    let plan: serde_json::Value = serde_json::from_str(&out).unwrap();
    let kinds: Vec<&str> = plan["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["kind"].as_str().unwrap())
        .collect();

    assert_eq!(kinds, vec!["warmup", "task", "break", "task", "wrap"]);
    assert_eq!(plan["finish"], 625);
}

#[test]
fn test_plan_text_with_summary() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(
        home.path(),
        &["task", "add", "Deep work", "-d", "90", "-p", "5"],
    );
    run_cli_success(
        home.path(),
        &["task", "add", "Inbox", "-d", "30", "-p", "1"],
    );

    let out = run_cli_success(
        home.path(),
        &["plan", "--start", "08:00", "--end", "09:30", "--summary"],
    );
    assert!(out.contains("Deep work (cut short)"));
    assert!(out.contains("finish 09:30"));
    assert!(out.contains("  - Inbox"));
}

#[test]
fn test_plan_rejects_bad_time() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["plan", "--start", "25:99"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Invalid time of day"));
}

#[test]
fn test_config_set_get_and_reset() {
    let home = tempfile::tempdir().unwrap();
    run_cli_success(home.path(), &["config", "set", "pacing.start", "07:45"]);
    let value = run_cli_success(home.path(), &["config", "get", "pacing.start"]);
    assert_eq!(value.trim(), "465");

    let (code, _, _) = run_cli(home.path(), &["config", "get", "pacing.nope"]);
    assert_ne!(code, 0);

    run_cli_success(home.path(), &["config", "reset"]);
    let value = run_cli_success(home.path(), &["config", "get", "pacing.start"]);
    assert_eq!(value.trim(), "540");
}

#[test]
fn test_preset_apply_updates_config() {
    let home = tempfile::tempdir().unwrap();
    let list = run_cli_success(home.path(), &["preset", "list"]);
    assert!(list.contains("deep-focus"));

    run_cli_success(home.path(), &["preset", "apply", "sprint"]);
    let value = run_cli_success(home.path(), &["config", "get", "pacing.break_every"]);
    assert_eq!(value.trim(), "25");

    let (code, _, _) = run_cli(home.path(), &["preset", "show", "nonexistent"]);
    assert_ne!(code, 0);
}
