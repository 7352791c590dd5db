//! Scoring module - row completion rewards and fall speed
//!
//! Compatibility note:
//! Each completed row is worth `SCORE_INCREMENT_FACTOR * timer_id / 100` points,
//! where `timer_id` is the numeric id of the gravity timer that was running when
//! the piece locked. The reward therefore grows with the number of timers the
//! session has scheduled, not with the level or the number of rows cleared at
//! once. This coupling is kept exactly as the tournament scoring expects.

use crate::board::Board;
use crate::timer::TimerId;
use crate::types::{
    GAME_HIGHEST_SPEED_MS, GAME_LOWEST_SPEED_MS, LEVEL_SPEEDUP_MS, MAX_LEVEL,
    SCORE_INCREMENT_FACTOR,
};

/// Outcome of the line-clear pass at lock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearResult {
    pub rows_cleared: u32,
    pub score_gained: u64,
    pub levels_gained: u32,
}

/// Points for one completed row
pub fn row_score(timer_id: TimerId) -> u64 {
    SCORE_INCREMENT_FACTOR * u64::from(timer_id.get()) / 100
}

/// Gravity interval for a level
///
/// `max(GAME_HIGHEST_SPEED_MS, GAME_LOWEST_SPEED_MS - min(level, MAX_LEVEL) * 10)`
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level.min(MAX_LEVEL) * LEVEL_SPEEDUP_MS;
    GAME_LOWEST_SPEED_MS
        .saturating_sub(speedup)
        .max(GAME_HIGHEST_SPEED_MS)
}

/// Remove completed rows and compute the reward
///
/// Every removed row adds one level and one [`row_score`], independently of how
/// many rows the same lock completed.
pub fn clear_and_score(board: &mut Board, timer_id: TimerId) -> ClearResult {
    let rows = board.clear_completed_rows().len() as u32;
    ClearResult {
        rows_cleared: rows,
        score_gained: row_score(timer_id) * u64::from(rows),
        levels_gained: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shape;

    #[test]
    fn test_fall_interval_by_level() {
        assert_eq!(fall_interval_ms(0), 510);
        assert_eq!(fall_interval_ms(1), 500);
        assert_eq!(fall_interval_ms(10), 410);
        assert_eq!(fall_interval_ms(20), 310);
        assert_eq!(fall_interval_ms(21), 310);
        assert_eq!(fall_interval_ms(1_000), 310);
    }

    #[test]
    fn test_row_score_equals_timer_id() {
        assert_eq!(row_score(TimerId::new(1)), 1);
        assert_eq!(row_score(TimerId::new(37)), 37);
        assert_eq!(row_score(TimerId::NONE), 0);
    }

    #[test]
    fn test_clear_and_score_counts_each_row() {
        let mut board = Board::new();
        for y in 17..20 {
            for x in 0..12 {
                board.set(x, y, Some(Shape::Z));
            }
        }
        let result = clear_and_score(&mut board, TimerId::new(4));
        assert_eq!(result.rows_cleared, 3);
        assert_eq!(result.score_gained, 12);
        assert_eq!(result.levels_gained, 3);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_no_rows_no_reward() {
        let mut board = Board::new();
        board.set(0, 19, Some(Shape::Z));
        assert_eq!(clear_and_score(&mut board, TimerId::new(9)), ClearResult::default());
    }
}
