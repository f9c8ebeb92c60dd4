use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn baira(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("baira").unwrap();
    cmd.env("BAIRA_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn empty_lists_show_placeholders() {
    let temp_dir = tempfile::tempdir().unwrap();

    baira(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TO DO (0)"))
        .stdout(predicate::str::contains("No tasks added yet"))
        .stdout(predicate::str::contains("TO BUY (0)"))
        .stdout(predicate::str::contains("No items to buy yet"));
}

#[test]
fn add_to_buy_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    baira(temp_dir.path())
        .args(["add", "--buy", "Buy", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to buy: Buy milk"));

    baira(temp_dir.path())
        .args(["list", "buy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TO BUY (1)"))
        .stdout(predicate::str::contains("1. Buy milk"))
        .stdout(predicate::str::contains("TO DO").not());

    assert!(temp_dir.path().join("baira_buy.json").exists());
}

#[test]
fn newest_item_is_listed_first() {
    let temp_dir = tempfile::tempdir().unwrap();

    for text in ["Call plumber", "Renew passport"] {
        baira(temp_dir.path()).args(["add", text]).assert().success();
    }

    baira(temp_dir.path())
        .args(["list", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Renew passport"))
        .stdout(predicate::str::contains("2. Call plumber"));
}

#[test]
fn list_as_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    baira(temp_dir.path()).args(["add", "Water plants"]).assert().success();

    let output = baira(temp_dir.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let views: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(views[0]["heading"], "TO DO");
    assert_eq!(views[0]["count"], 1);
    assert_eq!(views[1]["heading"], "TO BUY");
    assert_eq!(views[1]["count"], 0);
}

#[test]
fn remove_by_position_with_yes() {
    let temp_dir = tempfile::tempdir().unwrap();
    baira(temp_dir.path()).args(["add", "-b", "Eggs"]).assert().success();

    baira(temp_dir.path())
        .args(["rm", "buy", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted from buy: Eggs"));

    baira(temp_dir.path())
        .args(["list", "buy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TO BUY (0)"));
}

#[test]
fn declined_remove_keeps_item() {
    let temp_dir = tempfile::tempdir().unwrap();
    baira(temp_dir.path()).args(["add", "Dentist"]).assert().success();

    baira(temp_dir.path())
        .args(["rm", "todo", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Are you sure you want to delete this item?",
        ))
        .stdout(predicate::str::contains("Operation cancelled."));

    baira(temp_dir.path())
        .args(["list", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Dentist"));
}

#[test]
fn move_to_other_list() {
    let temp_dir = tempfile::tempdir().unwrap();
    baira(temp_dir.path()).args(["add", "Stamps"]).assert().success();

    baira(temp_dir.path())
        .args(["mv", "todo", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved to buy: Stamps"));

    baira(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TO DO (0)"))
        .stdout(predicate::str::contains("TO BUY (1)"));
}

#[test]
fn reset_with_yes_removes_both_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    baira(temp_dir.path()).args(["add", "A"]).assert().success();
    baira(temp_dir.path()).args(["add", "--buy", "B"]).assert().success();
    assert!(temp_dir.path().join("baira_todo.json").exists());

    baira(temp_dir.path())
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All lists cleared."));

    assert!(!temp_dir.path().join("baira_todo.json").exists());
    assert!(!temp_dir.path().join("baira_buy.json").exists());
}

#[test]
fn declined_reset_changes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    baira(temp_dir.path()).args(["add", "A"]).assert().success();

    baira(temp_dir.path())
        .arg("reset")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    assert!(temp_dir.path().join("baira_todo.json").exists());
}

#[test]
fn corrupted_file_lists_as_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("baira_todo.json"), "{not json").unwrap();

    baira(temp_dir.path())
        .args(["list", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TO DO (0)"));

    baira(temp_dir.path()).args(["add", "Fresh start"]).assert().success();
    baira(temp_dir.path())
        .args(["list", "todo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TO DO (1)"));
}

#[test]
fn config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    baira(temp_dir.path())
        .args(["config", "line-width", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line-width set to 60"));

    baira(temp_dir.path())
        .args(["config", "line-width"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line-width = 60"));
}

#[test]
fn key_prefix_changes_file_names() {
    let temp_dir = tempfile::tempdir().unwrap();

    baira(temp_dir.path())
        .args(["config", "key-prefix", "home"])
        .assert()
        .success();
    baira(temp_dir.path()).args(["add", "-b", "Soap"]).assert().success();

    assert!(temp_dir.path().join("home_buy.json").exists());
    assert!(!temp_dir.path().join("baira_buy.json").exists());
}

#[test]
fn unknown_list_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    baira(temp_dir.path())
        .args(["rm", "groceries", "1", "--yes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Api Error: Unknown list"));
}

#[test]
fn unknown_selector_is_a_no_op() {
    let temp_dir = tempfile::tempdir().unwrap();
    baira(temp_dir.path()).args(["add", "Keep"]).assert().success();

    baira(temp_dir.path())
        .args(["rm", "todo", "9", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No item '9' in the todo list."));
}

#[test]
fn invalid_config_value_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    baira(temp_dir.path())
        .args(["config", "show-age", "sometimes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
