use predicates::prelude::*;
mod common;

use common::{empty_home, etiqueta_cmd as get_cmd, stdout_of};

#[test]
fn test_resolve_known_code_is_case_insensitive() {
    let temp_dir = empty_home();

    get_cmd(&temp_dir)
        .args(["resolve", "priority", "High"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code:      high"))
        .stdout(predicate::str::contains("Label:     Alta"))
        .stdout(predicate::str::contains("#ea580c"))
        .stdout(predicate::str::contains("Fallback").not());
}

#[test]
fn test_resolve_absent_priority_uses_default() {
    let temp_dir = empty_home();

    get_cmd(&temp_dir)
        .args(["resolve", "priority"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Input:     (none)"))
        .stdout(predicate::str::contains("Label:     Baja"));

    // An empty argument counts as absent too
    get_cmd(&temp_dir)
        .args(["resolve", "priority", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Label:     Baja"));
}

#[test]
fn test_resolve_absent_without_default_uses_fallback() {
    let temp_dir = empty_home();

    get_cmd(&temp_dir)
        .args(["resolve", "task-type"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Label:     Otro"))
        .stdout(predicate::str::contains("Fallback:  yes"));
}

#[test]
fn test_resolve_unrecognized_code() {
    let temp_dir = empty_home();

    get_cmd(&temp_dir)
        .args(["resolve", "sprint-status", "ON_HOLD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Label:     Desconocido"))
        .stdout(predicate::str::contains("#8b5cf6"));

    get_cmd(&temp_dir)
        .args(["resolve", "sprint-status", "ON_HOLD", "--raw-label"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Label:     ON_HOLD"))
        .stdout(predicate::str::contains("Code:      unknown"));
}

#[test]
fn test_resolve_json() {
    let temp_dir = empty_home();

    let stdout = stdout_of(get_cmd(&temp_dir).args(["resolve", "task-status", " IN_PROGRESS ", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["code"], "in_progress");
    assert_eq!(value["label"], "En progreso");
    assert_eq!(value["color"], "#2563eb");
    assert!(value.get("raw_label").is_none());

    let stdout = stdout_of(get_cmd(&temp_dir).args(["resolve", "task-type", "spike", "--raw-label", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["code"], "unknown");
    assert_eq!(value["label"], "Otro");
    assert_eq!(value["raw_label"], "spike");
}

#[test]
fn test_sort_orders_by_rank() {
    let temp_dir = empty_home();

    let stdout = stdout_of(get_cmd(&temp_dir).args(["sort", "task-type", "BUG", "EPIC", "STORY"]));
    let epic = stdout.find("Épica").unwrap();
    let story = stdout.find("Historia").unwrap();
    let bug = stdout.find("Error").unwrap();
    assert!(epic < story && story < bug, "unexpected order:\n{}", stdout);
}

#[test]
fn test_sort_puts_fallback_last() {
    let temp_dir = empty_home();

    let stdout = stdout_of(get_cmd(&temp_dir).args(["sort", "priority", "whatever", "highest", "lowest", "--json"]));
    let rows: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    let codes: Vec<&str> = rows.iter().map(|r| r["code"].as_str().unwrap()).collect();
    assert_eq!(codes, vec!["lowest", "highest", "unknown"]);
    assert_eq!(rows[2]["input"], "whatever");
}

#[test]
fn test_table_lists_every_entry() {
    let temp_dir = empty_home();

    let stdout = stdout_of(get_cmd(&temp_dir).args(["table", "sprint-status"]));
    for label in ["Planificación", "Activo", "Completado", "Cancelado", "Desconocido"] {
        assert!(stdout.contains(label), "missing {} in:\n{}", label, stdout);
    }
    assert!(stdout.lines().last().unwrap().ends_with("fallback"));
    assert!(!stdout.contains('\x1b'));
}

#[test]
fn test_table_json() {
    let temp_dir = empty_home();

    let stdout = stdout_of(get_cmd(&temp_dir).args(["table", "priority", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["dimension"], "priority");
    assert_eq!(value["default_code"], "low");
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0]["code"], "lowest");
    assert_eq!(entries[5]["code"], "unknown");
}

#[test]
fn test_tally_arguments() {
    let temp_dir = empty_home();

    get_cmd(&temp_dir)
        .args(["tally", "task-status", "todo", "DONE", "done", "done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("75%"))
        .stdout(predicate::str::contains("25%"))
        .stdout(predicate::str::contains("Bloqueado").not())
        .stdout(predicate::str::ends_with("Total: 4\n"));
}

#[test]
fn test_tally_stdin_and_all() {
    let temp_dir = empty_home();

    let stdout = stdout_of(
        get_cmd(&temp_dir)
            .args(["tally", "priority", "--all", "--json"])
            .write_stdin("high\n\nHIGH\nurgent\n"),
    );
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["total"], 4);
    let buckets = value["buckets"].as_array().unwrap();
    assert_eq!(buckets.len(), 6);
    let count = |code: &str| buckets.iter().find(|b| b["code"] == code).unwrap()["count"].as_u64().unwrap();
    assert_eq!(count("high"), 2);
    // The blank line is an absent value and lands on the default
    assert_eq!(count("low"), 1);
    assert_eq!(count("unknown"), 1);
    assert_eq!(count("medium"), 0);
}

#[test]
fn test_dimensions() {
    let temp_dir = empty_home();

    let stdout = stdout_of(get_cmd(&temp_dir).args(["dimensions", "--json"]));
    let value: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = value.iter().map(|d| d["dimension"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["priority", "sprint-status", "task-status", "task-type"]);
    assert_eq!(value[0]["default_code"], "low");
    assert!(value[1]["default_code"].is_null());

    get_cmd(&temp_dir)
        .args(["dimensions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sin Prioridad"));
}

#[test]
fn test_command_and_dimension_abbreviations() {
    let temp_dir = empty_home();

    get_cmd(&temp_dir)
        .args(["res", "pri", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Label:     Alta"));

    // Aliases pass through abbreviation untouched
    get_cmd(&temp_dir)
        .args(["resolve", "status", "blocked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Label:     Bloqueado"));
}
