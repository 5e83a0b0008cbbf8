//! Binary-level tests for the command line.

use std::process::Command;

fn typeslides_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_typeslides"))
}

#[test]
fn test_help_lists_deck_options() {
    let output = typeslides_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--deck"));
    assert!(stdout.contains("--list-decks"));
    assert!(stdout.contains("--no-progress"));
}

#[test]
fn test_list_decks_prints_builtin_ids() {
    let output = typeslides_cmd()
        .arg("--list-decks")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for id in ["statement", "cold-war", "negotiation", "fade-tour"] {
        assert!(stdout.contains(id), "missing {id} in {stdout}");
    }
}

#[test]
fn test_print_deck_emits_toml() {
    let output = typeslides_cmd()
        .args(["--print-deck", "cold-war"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("id = \"cold-war\""));
    assert!(stdout.contains("{point}"));
}

#[test]
fn test_unknown_deck_exits_with_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = typeslides_cmd()
        .args(["--deck", "nonexistent_deck_xyz"])
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Deck 'nonexistent_deck_xyz' not found"));
    assert!(stderr.contains("Available decks: statement, cold-war, negotiation, fade-tour"));
}

#[test]
fn test_unknown_print_deck_exits_with_error() {
    let output = typeslides_cmd()
        .args(["--print-deck", "nope"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Deck 'nope' not found"));
}

#[test]
fn test_deck_and_deck_file_conflict() {
    let output = typeslides_cmd()
        .args(["--deck", "statement", "--deck-file", "lesson.toml"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"));
}
