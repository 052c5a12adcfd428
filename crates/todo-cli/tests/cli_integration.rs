use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::{tempdir, TempDir};

/// `todo` with its config directory pointed at an empty temp dir.
fn todo(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("TODO_SEED_TEXT")
        .env_remove("TODO_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_str(&String::from_utf8_lossy(output)).expect("Failed to parse JSON output")
}

mod run_tests {
    use super::*;

    #[test]
    fn test_run_scenario_script() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("script.json");
        fs::write(
            &script,
            r#"[
                {"type": "INSERT", "text": "buy milk"},
                {"type": "TOGGLE", "id": 2},
                {"type": "CATEGORIZE", "id": 2},
                {"type": "REMOVE", "id": 1}
            ]"#,
        )
        .unwrap();

        let output = todo(&dir)
            .args(["--seed-text", "seed", "run", script.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["data"]["count"], 1);
        assert_eq!(
            json["data"]["items"][0],
            serde_json::json!({"id": 2, "text": "buy milk", "checked": true, "category": 2})
        );
    }

    #[test]
    fn test_run_empty_script_prints_seed() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("script.json");
        fs::write(&script, "[]").unwrap();

        let output = todo(&dir)
            .args(["run", script.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["count"], 1);
        assert_eq!(json["data"]["items"][0]["id"], 1);
        assert_eq!(json["data"]["items"][0]["text"], "Make a to-do list");
    }

    #[test]
    fn test_run_ignores_unknown_and_empty_inserts() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("script.json");
        fs::write(
            &script,
            r#"[
                {"type": "INSERT", "text": ""},
                {"type": "ARCHIVE", "id": 1},
                {"type": "INSERT", "text": "walk dog"}
            ]"#,
        )
        .unwrap();

        let output = todo(&dir)
            .args(["run", script.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["count"], 2);
        assert_eq!(json["data"]["items"][1]["id"], 2);
        assert_eq!(json["data"]["items"][1]["text"], "walk dog");
    }

    #[test]
    fn test_run_edit_gestures() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("script.json");
        fs::write(
            &script,
            r#"[
                {"type": "EDIT_OPEN", "id": 1},
                {"type": "EDIT_CANCEL", "id": 1},
                {"type": "EDIT_SAVE", "id": 1, "text": "ignored while closed"},
                {"type": "EDIT", "id": 1, "text": "renamed"}
            ]"#,
        )
        .unwrap();

        let output = todo(&dir)
            .args(["run", script.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["items"][0]["text"], "renamed");
    }

    #[test]
    fn test_run_missing_script_fails() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("missing.json");

        todo(&dir)
            .args(["run", script.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("\"success\":false"));
    }

    #[test]
    fn test_run_malformed_script_fails() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("script.json");
        fs::write(&script, "[{\"type\": ").unwrap();

        todo(&dir)
            .args(["run", script.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Serialization error"));
    }

    #[test]
    fn test_seed_text_from_env() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("script.json");
        fs::write(&script, "[]").unwrap();

        let output = todo(&dir)
            .env("TODO_SEED_TEXT", "from env")
            .args(["run", script.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["items"][0]["text"], "from env");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_seed_text_from_config_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("todo")).unwrap();
        fs::write(
            dir.path().join("todo/config.toml"),
            "seed_text = \"from config\"\n",
        )
        .unwrap();
        let script = dir.path().join("script.json");
        fs::write(&script, "[]").unwrap();

        let output = todo(&dir)
            .args(["run", script.to_str().unwrap()])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["items"][0]["text"], "from config");
    }
}

mod repl_tests {
    use super::*;

    #[test]
    fn test_repl_renders_after_each_change() {
        let dir = tempdir().unwrap();

        todo(&dir)
            .args(["--seed-text", "seed"])
            .write_stdin("add buy milk\ntoggle 2\ncat 2\nrm 1\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("  1 [ ] seed (category 1)"))
            .stdout(predicate::str::contains("  2 [ ] buy milk (category 1)"))
            .stdout(predicate::str::contains("  2 [x] buy milk (category 1)"))
            .stdout(predicate::str::contains("  2 [x] buy milk (category 2)"));
    }

    #[test]
    fn test_repl_edit_modal() {
        let dir = tempdir().unwrap();

        todo(&dir)
            .args(["--seed-text", "seed", "repl"])
            .write_stdin("edit 1\ndraft 1 write tests\nsave 1\nlist\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Editing 1: seed"))
            .stdout(predicate::str::contains("Editing 1: write tests"))
            .stdout(predicate::str::contains("  1 [ ] write tests (category 1)"));
    }

    #[test]
    fn test_repl_reports_bad_input() {
        let dir = tempdir().unwrap();

        todo(&dir)
            .write_stdin("toggle nine\nrm 9\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("'nine' is not an item id"))
            .stdout(predicate::str::contains("No item 9"));
    }
}
