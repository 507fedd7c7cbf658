use pretty_assertions::assert_eq;
use shared_types::{level_progress, TodoId};

use crate::common;

#[test]
fn test_delete_removes_only_target() {
    let mut board = common::board_with_constant_xp(3);
    let ids = common::create_all(&mut board, &["a", "b", "c"]);

    let removed = board.delete(ids[1]).unwrap();
    assert_eq!(removed.title(), "b");
    assert_eq!(common::titles(&board), vec!["a", "c"]);
    assert!(board.get(ids[1]).is_none());
}

#[test]
fn test_delete_unknown_id_leaves_list_unchanged() {
    let mut board = common::board_with_constant_xp(3);
    common::create_all(&mut board, &["a", "b"]);
    let before = board.todos().to_vec();

    let err = board.delete(TodoId::new()).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(board.todos(), before.as_slice());
}

#[test]
fn test_delete_twice_is_not_found() {
    let mut board = common::board_with_constant_xp(3);
    let id = board.create("once").unwrap();
    board.delete(id).unwrap();
    assert!(board.delete(id).unwrap_err().is_not_found());
    assert!(board.is_empty());
}

#[test]
fn test_delete_completed_todo_removes_its_xp() {
    let mut board = common::board_with_xp(&[60, 40]);
    let ids = common::create_all(&mut board, &["a", "b"]);
    board.toggle_completed(ids[0]).unwrap();
    board.toggle_completed(ids[1]).unwrap();
    assert_eq!(board.progress().total_xp, 100);

    board.delete(ids[0]).unwrap();
    assert_eq!(board.progress(), level_progress(40));
}

#[test]
fn test_delete_active_todo_keeps_progress() {
    let mut board = common::board_with_xp(&[60, 40]);
    let ids = common::create_all(&mut board, &["a", "b"]);
    board.toggle_completed(ids[0]).unwrap();
    let before = board.progress();

    board.delete(ids[1]).unwrap();
    assert_eq!(board.progress(), before);
}
