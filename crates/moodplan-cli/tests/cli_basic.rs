//! Basic CLI E2E tests.
//!
//! Each test runs the compiled binary against its own temporary data
//! directory via MOODPLAN_DATA_DIR.

use std::process::Command;
use tempfile::TempDir;

fn run_cli(data_dir: &TempDir, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_moodplan-cli"))
        .env("MOODPLAN_DATA_DIR", data_dir.path())
        .args(args)
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_task_add_and_list() {
    let dir = TempDir::new().unwrap();

    let (stdout, stderr, code) = run_cli(
        &dir,
        &[
            "task", "add", "Write report", "--priority", "high", "--load", "heavy",
            "--duration", "50",
        ],
    );
    assert_eq!(code, 0, "task add failed: {stderr}");
    assert!(stdout.contains("Task added:"));

    let (stdout, _, code) = run_cli(&dir, &["task", "list", "--json"]);
    assert_eq!(code, 0);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Write report");
    assert_eq!(tasks[0]["priority"], "high");
    assert_eq!(tasks[0]["cognitive_load"], "heavy");
    assert_eq!(tasks[0]["duration_minutes"], 50);
}

#[test]
fn test_task_done_and_status_filter() {
    let dir = TempDir::new().unwrap();

    run_cli(&dir, &["task", "add", "Finish me"]);
    let (stdout, _, _) = run_cli(&dir, &["task", "list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let id = tasks[0]["id"].as_str().unwrap().to_string();

    let (_, stderr, code) = run_cli(&dir, &["task", "done", &id]);
    assert_eq!(code, 0, "task done failed: {stderr}");

    let (stdout, _, _) = run_cli(&dir, &["task", "list", "--status", "pending", "--json"]);
    let pending: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(pending.as_array().unwrap().is_empty());
}

#[test]
fn test_mood_checkin_and_latest() {
    let dir = TempDir::new().unwrap();

    let (stdout, stderr, code) = run_cli(
        &dir,
        &["mood", "checkin", "--mood", "8", "--energy", "high", "--emotions", "calm,focused"],
    );
    assert_eq!(code, 0, "mood checkin failed: {stderr}");
    assert!(stdout.contains("Mood check-in saved"));

    let (stdout, _, code) = run_cli(&dir, &["mood", "latest", "--json"]);
    assert_eq!(code, 0);
    let checkin: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(checkin["mood_scale"], 8);
    assert_eq!(checkin["energy_level"], "high");
}

#[test]
fn test_schedule_preview_low_mood_order_and_rounding() {
    let dir = TempDir::new().unwrap();

    run_cli(&dir, &["task", "add", "heavy", "--load", "heavy", "--priority", "urgent"]);
    run_cli(&dir, &["task", "add", "light", "--load", "light", "--priority", "low"]);
    run_cli(&dir, &["task", "add", "moderate", "--load", "moderate", "--priority", "high"]);
    run_cli(&dir, &["mood", "checkin", "--mood", "3", "--energy", "high"]);

    let (stdout, stderr, code) = run_cli(
        &dir,
        &["schedule", "preview", "--at", "2025-06-02T10:07:00Z", "--json"],
    );
    assert_eq!(code, 0, "schedule preview failed: {stderr}");

    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["count"], 3);
    let scheduled = report["scheduled"].as_array().unwrap();
    let titles: Vec<_> = scheduled.iter().map(|t| t["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["light", "moderate", "heavy"]);
    assert_eq!(scheduled[0]["scheduled_time"], "2025-06-02T10:15:00Z");
}

#[test]
fn test_schedule_run_persists() {
    let dir = TempDir::new().unwrap();

    run_cli(&dir, &["task", "add", "Solo task"]);
    let (stdout, stderr, code) = run_cli(&dir, &["schedule", "run"]);
    assert_eq!(code, 0, "schedule run failed: {stderr}");
    assert!(stdout.contains("Scheduled 1 tasks"));

    let (stdout, _, _) = run_cli(&dir, &["task", "list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(tasks[0]["scheduled_time"].is_string());
}

#[test]
fn test_schedule_run_with_no_tasks() {
    let dir = TempDir::new().unwrap();

    let (stdout, stderr, code) = run_cli(&dir, &["schedule", "run"]);
    assert_eq!(code, 0, "schedule run failed: {stderr}");
    assert!(stdout.contains("Scheduled 0 tasks"));
}

#[test]
fn test_config_get_set_list() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, code) = run_cli(&dir, &["config", "get", "defaults.duration_minutes"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "30");

    let (_, _, code) = run_cli(&dir, &["config", "set", "defaults.duration_minutes", "45"]);
    assert_eq!(code, 0);

    let (stdout, _, _) = run_cli(&dir, &["config", "list"]);
    assert!(stdout.contains("defaults.duration_minutes = 45"));

    let (_, stderr, code) = run_cli(&dir, &["config", "get", "no.such.key"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown configuration key"));
}
