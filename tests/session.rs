//! End-to-end board sessions against the in-memory store

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::collections::BTreeSet;

use reading_bingo::consts::{FREE_INDEX, FREE_TASK, STORAGE_KEY};
use reading_bingo::persistence::{self, KeyValueStore};
use reading_bingo::{BingoApp, BingoTransition, MemoryStore};

#[test]
fn test_celebrate_only_on_increase() {
    let mut app = BingoApp::initialize(MemoryStore::new());

    for i in 0..4 {
        let outcome = app.toggle_mark(i).unwrap();
        assert!(!outcome.transition.celebrates());
    }

    // Row 0 complete: 0 -> 1
    let outcome = app.toggle_mark(4).unwrap();
    assert_eq!(outcome.report.count, 1);
    assert_eq!(outcome.report.patterns, vec![[0, 1, 2, 3, 4]]);
    assert_eq!(outcome.transition, BingoTransition::Gained { delta: 1 });
    assert_eq!(outcome.transition.message().as_deref(), Some("Bingo Completed!"));

    // Break it: 1 -> 0, silent, stored count follows
    let outcome = app.toggle_mark(2).unwrap();
    assert_eq!(outcome.transition, BingoTransition::Lost);
    assert!(!outcome.transition.celebrates());
    assert_eq!(app.board().bingo_count, 0);
    assert_eq!(persistence::load(app.store()).unwrap().bingo_count, 0);

    // Complete it again: celebrates again
    let outcome = app.toggle_mark(2).unwrap();
    assert_eq!(outcome.transition, BingoTransition::Gained { delta: 1 });
    assert_eq!(persistence::load(app.store()).unwrap().bingo_count, 1);
}

#[test]
fn test_one_click_completes_two_lines() {
    let mut app = BingoApp::initialize(MemoryStore::new());
    // Row 2 and column 2 both wait on the centre
    for i in [10, 11, 13, 14, 2, 7, 17, 22] {
        app.toggle_mark(i).unwrap();
    }
    let outcome = app.toggle_mark(FREE_INDEX).unwrap();
    assert_eq!(outcome.transition, BingoTransition::Gained { delta: 2 });
    assert_eq!(outcome.transition.message().as_deref(), Some("2 New Bingos!"));
}

#[test]
fn test_progress_survives_reload() {
    let mut app = BingoApp::initialize(MemoryStore::new());
    app.toggle_mark(6).unwrap();
    app.shuffle(&mut Pcg32::seed_from_u64(99));
    let board = app.board().clone();

    let reloaded = BingoApp::initialize(app.store().clone());
    assert_eq!(reloaded.board(), &board);
    assert_eq!(reloaded.board().tasks[FREE_INDEX], FREE_TASK);
}

#[test]
fn test_shuffle_keeps_marked_tasks() {
    let mut app = BingoApp::initialize(MemoryStore::new());
    for i in [0, 3, 9, 16, 24] {
        app.toggle_mark(i).unwrap();
    }
    let before: BTreeSet<String> = app.board().marked_tasks().map(String::from).collect();

    for seed in 0..5 {
        app.shuffle(&mut Pcg32::seed_from_u64(seed));
        let after: BTreeSet<String> = app.board().marked_tasks().map(String::from).collect();
        assert_eq!(before, after);
    }
}

#[test]
fn test_reset_forgets_everything() {
    let mut app = BingoApp::initialize(MemoryStore::new());
    for i in 0..5 {
        app.toggle_mark(i).unwrap();
    }
    app.shuffle(&mut Pcg32::seed_from_u64(5));

    let outcome = app.reset();
    assert_eq!(outcome.report.count, 0);
    assert_eq!(app.store().get(STORAGE_KEY).unwrap(), None);
    assert!(app.board().marked.iter().all(|m| !m));
    assert_eq!(app.board().bingo_count, 0);

    let reloaded = BingoApp::initialize(app.store().clone());
    assert_eq!(reloaded.board(), app.board());
}

#[test]
fn test_corrupt_save_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    let short = serde_json::json!({
        "version": 1,
        "tasks": vec!["x"; 24],
        "marked": vec![true; 25],
        "bingoCount": 12,
    });
    store.set(STORAGE_KEY, &short.to_string()).unwrap();

    let app = BingoApp::initialize(store);
    assert!(app.board().marked.iter().all(|m| !m));
    assert_eq!(app.board().bingo_count, 0);
}
