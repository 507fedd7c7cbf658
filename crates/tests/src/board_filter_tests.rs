use pretty_assertions::assert_eq;
use shared_types::{TodoFilter, ALL_FILTERS};

use crate::common;

fn mixed_board() -> common::TestBoard {
    let mut board = common::board_with_constant_xp(10);
    let ids = common::create_all(&mut board, &["a", "b", "c", "d", "e"]);
    board.toggle_completed(ids[1]).unwrap();
    board.toggle_completed(ids[3]).unwrap();
    board
}

fn visible_titles(board: &common::TestBoard, filter: TodoFilter) -> Vec<String> {
    board
        .visible(filter)
        .iter()
        .map(|t| t.title().to_string())
        .collect()
}

#[test]
fn test_all_filter_returns_full_list() {
    let board = mixed_board();
    assert_eq!(visible_titles(&board, TodoFilter::All), common::titles(&board));
}

#[test]
fn test_active_filter_returns_incomplete_in_order() {
    let board = mixed_board();
    assert_eq!(visible_titles(&board, TodoFilter::Active), vec!["a", "c", "e"]);
    assert_eq!(board.remaining(), 3);
}

#[test]
fn test_completed_filter_returns_done_in_order() {
    let board = mixed_board();
    assert_eq!(visible_titles(&board, TodoFilter::Completed), vec!["b", "d"]);
}

#[test]
fn test_active_and_completed_partition_the_list() {
    let board = mixed_board();
    let active = board.visible(TodoFilter::Active).len();
    let completed = board.visible(TodoFilter::Completed).len();
    assert_eq!(active + completed, board.len());
}

#[test]
fn test_every_filter_is_an_ordered_subsequence() {
    let board = mixed_board();
    let all = common::titles(&board);
    for filter in ALL_FILTERS.iter().copied() {
        let mut cursor = all.iter();
        for title in visible_titles(&board, filter) {
            assert!(
                cursor.any(|t| *t == title),
                "{filter} view is out of order at {title}"
            );
        }
    }
}

#[test]
fn test_filters_on_empty_board() {
    let board = common::board_with_constant_xp(1);
    for filter in ALL_FILTERS.iter().copied() {
        assert!(board.visible(filter).is_empty());
    }
}
