//! Loading level files from disk

use qpuzzle_game::{GameError, LevelRepository, PuzzleSession, GameConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_levels(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn loads_file_and_reports_skipped_entries() {
    let file = write_levels(
        r#"[
            {"name": "Flip", "description": "Flip it", "input_state": "|0⟩",
             "target_state": "|1⟩", "available_gates": ["X"], "qubits": 1,
             "hint": "X", "max_gates": 1, "solution": [{"gate": "X", "qubits": [0]}]},
            {"name": "Broken solution", "input_state": "|0⟩", "target_state": "|1⟩",
             "available_gates": ["X"], "qubits": 1,
             "solution": [{"gate": "H", "qubits": [0]}]},
            {"name": "Wrong size", "input_state": "|00⟩", "target_state": "|1⟩",
             "available_gates": ["X"], "qubits": 2}
        ]"#,
    );

    let repo = LevelRepository::load_file(file.path()).unwrap();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.levels()[0].name(), "Flip");

    let skipped = repo.skipped();
    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0].index, 1);
    assert!(skipped[0].reason.contains("not available"), "{}", skipped[0].reason);
    assert_eq!(skipped[1].name.as_deref(), Some("Wrong size"));
    assert!(skipped[1].reason.contains("expected 2"), "{}", skipped[1].reason);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = LevelRepository::load_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, GameError::Io { .. }));
}

#[test]
fn file_of_only_bad_levels_cannot_start_a_session() {
    let file = write_levels(r#"[{"name": "x"}]"#);
    let repo = LevelRepository::load_file(file.path()).unwrap();
    assert!(repo.is_empty());
    assert_eq!(repo.skipped().len(), 1);
    assert!(matches!(
        PuzzleSession::from_repository(repo, GameConfig::default()),
        Err(GameError::NoLevels)
    ));
}

#[test]
fn load_without_path_uses_builtin_levels() {
    let repo = LevelRepository::load(None).unwrap();
    assert_eq!(repo.len(), LevelRepository::builtin().unwrap().len());
}
