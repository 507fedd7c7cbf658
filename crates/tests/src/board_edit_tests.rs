use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, TodoId};

use crate::common;

#[test]
fn test_edit_replaces_title_only() {
    let mut board = common::board_with_constant_xp(42);
    let id = board.create("Old title").unwrap();
    board.toggle_completed(id).unwrap();
    let before = board.get(id).unwrap().clone();

    board.edit(id, "New title").unwrap();

    let after = board.get(id).unwrap();
    assert_eq!(after.title(), "New title");
    assert_eq!(after.id(), before.id());
    assert_eq!(after.xp(), before.xp());
    assert_eq!(after.completed(), before.completed());
    assert_eq!(after.created_at(), before.created_at());
    assert_eq!(after.completed_at(), before.completed_at());
    assert_eq!(after.time_taken(), before.time_taken());
}

#[test]
fn test_edit_keeps_position_and_length() {
    let mut board = common::board_with_constant_xp(1);
    let ids = common::create_all(&mut board, &["a", "b", "c"]);
    board.edit(ids[1], "middle").unwrap();
    assert_eq!(common::titles(&board), vec!["a", "middle", "c"]);
}

#[test]
fn test_edit_trims_title() {
    let mut board = common::board_with_constant_xp(1);
    let id = board.create("x").unwrap();
    board.edit(id, "  padded  ").unwrap();
    assert_eq!(board.get(id).unwrap().title(), "padded");
}

#[test]
fn test_edit_blank_title_is_rejected() {
    let mut board = common::board_with_constant_xp(1);
    let id = board.create("Keep me").unwrap();

    let err = board.edit(id, "  ").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(board.get(id).unwrap().title(), "Keep me");
}

#[test]
fn test_edit_unknown_id_is_not_found() {
    let mut board = common::board_with_constant_xp(1);
    common::create_all(&mut board, &["a", "b"]);

    let err = board.edit(TodoId::new(), "c").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(common::titles(&board), vec!["a", "b"]);
}

#[test]
fn test_edit_does_not_change_progress() {
    let mut board = common::board_with_constant_xp(70);
    let id = board.create("a").unwrap();
    board.toggle_completed(id).unwrap();
    let before = board.progress();

    board.edit(id, "renamed").unwrap();
    assert_eq!(board.progress(), before);
}

#[test]
fn test_edit_unknown_id_with_blank_title_is_not_found() {
    let mut board = common::board_with_constant_xp(1);

    let err = board.edit(TodoId::new(), "   ").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.kind, AppErrorKind::NotFound);
}

#[test]
fn test_edit_removed_todo_is_not_found_even_with_blank_title() {
    let mut board = common::board_with_constant_xp(1);
    let id = board.create("Gone soon").unwrap();
    board.delete(id).unwrap();

    assert!(board.edit(id, "").unwrap_err().is_not_found());
    assert!(board.is_empty());
}
