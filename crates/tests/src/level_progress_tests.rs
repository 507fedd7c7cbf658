use pretty_assertions::assert_eq;
use shared_types::{earned_xp, level_progress, xp_for_next_level, LevelProgress};

use crate::common;

#[test]
fn test_zero_xp_is_level_one() {
    let progress = level_progress(0);
    assert_eq!(progress.level, 1);
    assert_eq!(progress.xp_into_level, 0);
    assert_eq!(progress.xp_for_next_level, 150);
    assert_eq!(progress.percent, 0.0);
}

#[test]
fn test_partial_first_level() {
    let progress = level_progress(100);
    assert_eq!(progress.level, 1);
    assert_eq!(progress.xp_into_level, 100);
    assert_eq!(progress.displayed_xp(), 100);
}

#[test]
fn test_exact_level_cost_rolls_over() {
    let progress = level_progress(150);
    assert_eq!(progress.level, 2);
    assert_eq!(progress.xp_into_level, 0);
    assert_eq!(progress.xp_for_next_level, 200);
    assert_eq!(progress.percent, 0.0);
}

#[test]
fn test_percent_stays_in_bounds() {
    for total in (0..5_000u64).step_by(7) {
        let progress = level_progress(total);
        assert!(progress.level >= 1);
        assert!(progress.percent >= 0.0 && progress.percent < 100.0, "total {total}");
        assert!(progress.xp_into_level < xp_for_next_level(progress.level));
    }
}

#[test]
fn test_level_is_monotonic_in_total_xp() {
    let mut last = 1;
    for total in 0..3_000u64 {
        let level = level_progress(total).level;
        assert!(level >= last);
        last = level;
    }
}

#[test]
fn test_board_progress_matches_full_recompute() {
    let mut board = common::board_with_xp(&[13, 77, 99, 5, 42, 61]);
    let ids = common::create_all(&mut board, &["a", "b", "c", "d", "e", "f"]);

    let check = |board: &common::TestBoard| {
        assert_eq!(board.progress(), level_progress(earned_xp(board.todos())));
    };

    check(&board);
    for id in &ids {
        board.toggle_completed(*id).unwrap();
        check(&board);
    }
    board.toggle_completed(ids[2]).unwrap();
    check(&board);
    board.edit(ids[0], "renamed").unwrap();
    check(&board);
    board.delete(ids[4]).unwrap();
    check(&board);
    board.create("g").unwrap();
    check(&board);
}

#[test]
fn test_empty_board_progress_is_default() {
    let board = common::board_with_constant_xp(1);
    assert_eq!(board.progress(), LevelProgress::default());
}
