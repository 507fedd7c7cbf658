use serde::{Deserialize, Serialize};

use crate::todo::Todo;

/// Base XP cost shared by every level.
const BASE_LEVEL_COST: u64 = 100;

/// Extra XP cost added per level.
const COST_PER_LEVEL: u64 = 50;

/// XP required to advance past `level`.
pub fn xp_for_next_level(level: u32) -> u64 {
    BASE_LEVEL_COST + u64::from(level) * COST_PER_LEVEL
}

/// Level and progress derived from total earned XP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    pub total_xp: u64,
    pub level: u32,
    /// XP left over after paying for every completed level.
    pub xp_into_level: u64,
    /// Cost of the current level.
    pub xp_for_next_level: u64,
    /// Percentage toward the next level, in `[0, 100)`.
    pub percent: f64,
}

impl Default for LevelProgress {
    fn default() -> Self {
        level_progress(0)
    }
}

impl LevelProgress {
    /// XP shown on the progress label, rounded from the percentage.
    pub fn displayed_xp(&self) -> u64 {
        ((self.percent / 100.0) * self.xp_for_next_level as f64).round() as u64
    }
}

/// Derive level and progress from total earned XP.
pub fn level_progress(total_xp: u64) -> LevelProgress {
    let mut level: u32 = 1;
    let mut remaining = total_xp;

    while remaining >= xp_for_next_level(level) {
        remaining -= xp_for_next_level(level);
        level += 1;
    }

    let cost = xp_for_next_level(level);
    LevelProgress {
        total_xp,
        level,
        xp_into_level: remaining,
        xp_for_next_level: cost,
        percent: remaining as f64 / cost as f64 * 100.0,
    }
}

/// Sum of XP over completed to-dos.
pub fn earned_xp(todos: &[Todo]) -> u64 {
    todos
        .iter()
        .filter(|t| t.completed())
        .map(|t| u64::from(t.xp()))
        .sum()
}
