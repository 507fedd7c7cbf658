use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, TodoFilter, MAX_TODO_XP};
use std::collections::HashSet;

use crate::common;

#[test]
fn test_create_appends_active_todo() {
    let mut board = common::board_with_constant_xp(25);
    let id = board.create("Write report").unwrap();

    assert_eq!(board.len(), 1);
    let todo = board.get(id).unwrap();
    assert_eq!(todo.title(), "Write report");
    assert_eq!(todo.xp(), 25);
    assert!(!todo.completed());
    assert_eq!(todo.completed_at(), None);
    assert_eq!(todo.time_taken(), None);
    assert_eq!(todo.created_at(), common::fixed_now());
}

#[test]
fn test_create_preserves_insertion_order() {
    let mut board = common::board_with_constant_xp(5);
    common::create_all(&mut board, &["first", "second", "third"]);
    assert_eq!(common::titles(&board), vec!["first", "second", "third"]);
}

#[test]
fn test_create_grows_list_by_one_each_time() {
    let mut board = common::board_with_constant_xp(5);
    for expected in 1..=20 {
        board.create(&format!("task {expected}")).unwrap();
        assert_eq!(board.len(), expected);
    }
}

#[test]
fn test_create_assigns_unique_ids() {
    let mut board = common::board_with_constant_xp(5);
    let ids = common::create_all(&mut board, &["a", "a", "a", "b", "c"]);
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn test_create_trims_title() {
    let mut board = common::board_with_constant_xp(5);
    let id = board.create("   Stretch  ").unwrap();
    assert_eq!(board.get(id).unwrap().title(), "Stretch");
}

#[test]
fn test_create_rejects_blank_title() {
    let mut board = common::board_with_constant_xp(5);
    for blank in ["", "   ", "\t\n"] {
        let err = board.create(blank).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("title"));
    }
    assert!(board.is_empty());
}

#[test]
fn test_create_keeps_xp_below_maximum() {
    let mut board = common::board_with_xp(&[0, 99, 100, 250]);
    let ids = common::create_all(&mut board, &["a", "b", "c", "d"]);
    let xps: Vec<u32> = ids.iter().map(|id| board.get(*id).unwrap().xp()).collect();

    assert_eq!(xps, vec![0, 99, 0, 50]);
    assert!(xps.iter().all(|xp| *xp < MAX_TODO_XP));
}

#[test]
fn test_create_does_not_change_progress() {
    let mut board = common::board_with_constant_xp(90);
    let before = board.progress();
    board.create("Unfinished").unwrap();
    assert_eq!(board.progress(), before);
    assert_eq!(board.visible(TodoFilter::Active).len(), 1);
}
