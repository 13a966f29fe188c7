//! Persistence tests: two engines sharing one JSON blob on disk

use brainiac::engine::Engine;
use brainiac::store::JsonFileStore;
use brainiac::LessonStatus;
use tempfile::tempdir;

fn engine_in(dir: &std::path::Path) -> Engine {
    Engine::new(Box::new(JsonFileStore::in_dir(dir)))
}

#[test]
fn state_survives_engine_restart() {
    let dir = tempdir().unwrap();

    let mut first = engine_in(dir.path());
    first.complete_lesson("amrita", "physics-1", 3, 3).unwrap();
    first.record_game("amrita", "ohms-law", 25).unwrap();
    drop(first);

    let mut second = engine_in(dir.path());
    let summary = second.user_summary("amrita");
    assert_eq!(summary.xp, 70 + 22);
    assert_eq!(summary.stats.high_score, 25);
    let chem = summary
        .learning_path
        .iter()
        .find(|p| p.lesson_id == "chemistry-1")
        .unwrap();
    assert_eq!(chem.status, LessonStatus::Unlocked);
}

#[test]
fn corrupted_blob_recovers_to_default() {
    let dir = tempdir().unwrap();

    let mut engine = engine_in(dir.path());
    engine.add_xp("amrita", 50, "test").unwrap();
    drop(engine);

    std::fs::write(dir.path().join("state.json"), "{{{ not json").unwrap();

    let mut recovered = engine_in(dir.path());
    assert_eq!(recovered.user_summary("amrita").xp, 0);
}

#[test]
fn legacy_blob_is_backfilled_and_usable() {
    let dir = tempdir().unwrap();
    let blob = r#"{
        "users": {
            "guest": {
                "xp": 70,
                "learning_path": [
                    {"lesson_id": "physics-1", "status": "completed", "score": 2}
                ]
            }
        }
    }"#;
    std::fs::write(dir.path().join("state.json"), blob).unwrap();

    let mut engine = engine_in(dir.path());
    let summary = engine.user_summary("guest");

    // Single legacy score became best/last
    let physics = summary
        .learning_path
        .iter()
        .find(|p| p.lesson_id == "physics-1")
        .unwrap();
    assert_eq!(physics.best_score, Some(2));
    assert_eq!(physics.last_score, Some(2));

    // Lessons the blob predates were appended, so completing works
    assert_eq!(summary.learning_path.len(), engine.catalog().len());
    engine.complete_lesson("guest", "physics-1", 3, 3).unwrap();
    let summary = engine.user_summary("guest");
    let physics = summary
        .learning_path
        .iter()
        .find(|p| p.lesson_id == "physics-1")
        .unwrap();
    assert_eq!(physics.best_score, Some(3));
}

#[test]
fn leaderboard_ties_stay_stable_across_restarts() {
    let dir = tempdir().unwrap();

    let mut first = engine_in(dir.path());
    first.add_xp("zoe", 50, "test").unwrap();
    first.add_xp("amy", 50, "test").unwrap();
    drop(first);

    let mut second = engine_in(dir.path());
    second.add_xp("kim", 10, "test").unwrap();
    let board = second.leaderboard();
    assert_eq!(board[0].user_id, "zoe");
    assert_eq!(board[1].user_id, "amy");
    assert_eq!(board[2].user_id, "kim");
}
