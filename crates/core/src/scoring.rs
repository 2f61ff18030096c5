//! Scoring module - 1984 line scores with combo and back-to-back bonuses
//!
//! All formulas use the 1-based level shown to the player:
//! - Line clear: `LINE_SCORES[n] * level`
//! - Back-to-back tetris: `+BACK_TO_BACK_BONUS * level`
//! - Combo: `+COMBO_BASE * combo * level` where `combo` counts the
//!   line-clearing locks directly before this one

use crate::types::{
    BACK_TO_BACK_BONUS, BASE_DROP_MS, COMBO_BASE, DROP_POINTS, DROP_STEP_MS, LINES_PER_LEVEL,
    LINE_SCORES, MIN_DROP_MS,
};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Table points times level
    pub line_clear_score: u32,
    /// Back-to-back tetris bonus (0 if not applied)
    pub back_to_back_bonus: u32,
    /// Combo bonus added on top
    pub combo_bonus: u32,
    pub total: u32,
    /// Whether this clear was a tetris (feeds the next back-to-back check)
    pub is_tetris: bool,
}

/// Calculate line clear score
/// lines: number of lines cleared; more than 4 scores as 4
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    LINE_SCORES[lines.min(4)].saturating_mul(level)
}

/// Calculate complete score for a line clear
///
/// `combo` is the number of consecutive line-clearing locks before this one.
/// `previous_tetris` is whether the last line-clearing lock was a tetris.
pub fn calculate_score(lines: usize, level: u32, combo: u32, previous_tetris: bool) -> ScoreResult {
    if lines == 0 {
        return ScoreResult::default();
    }

    let is_tetris = lines >= 4;
    let line_clear_score = calculate_line_score(lines, level);
    let back_to_back_bonus = if is_tetris && previous_tetris {
        BACK_TO_BACK_BONUS.saturating_mul(level)
    } else {
        0
    };
    let combo_bonus = COMBO_BASE.saturating_mul(combo).saturating_mul(level);

    ScoreResult {
        line_clear_score,
        back_to_back_bonus,
        combo_bonus,
        total: line_clear_score
            .saturating_add(back_to_back_bonus)
            .saturating_add(combo_bonus),
        is_tetris,
    }
}

/// Points for dropping a piece `cells` rows (soft or hard)
pub fn calculate_drop_score(cells: u32) -> u32 {
    cells.saturating_mul(DROP_POINTS)
}

/// Level management
/// Level starts at 1 and increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Get drop interval for a level (in milliseconds)
/// 1000ms at level 1, 50ms faster per level, never below 50ms
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(speedup).max(MIN_DROP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        assert_eq!(calculate_line_score(1, 1), 40);
        assert_eq!(calculate_line_score(2, 1), 100);
        assert_eq!(calculate_line_score(3, 1), 300);
        assert_eq!(calculate_line_score(4, 1), 1200);

        assert_eq!(calculate_line_score(1, 5), 200);
        assert_eq!(calculate_line_score(4, 3), 3600);
    }

    #[test]
    fn test_oversized_clear_scores_as_tetris() {
        assert_eq!(calculate_line_score(6, 1), 1200);
        assert!(calculate_score(5, 1, 0, false).is_tetris);
    }

    #[test]
    fn test_single_without_combo() {
        let result = calculate_score(1, 1, 0, false);
        assert_eq!(result.total, 40);
        assert_eq!(result.combo_bonus, 0);
        assert!(!result.is_tetris);
    }

    #[test]
    fn test_back_to_back_tetris() {
        let result = calculate_score(4, 1, 0, true);
        assert_eq!(result.line_clear_score, 1200);
        assert_eq!(result.back_to_back_bonus, 1200);
        assert_eq!(result.total, 2400);
    }

    #[test]
    fn test_back_to_back_needs_two_tetrises() {
        // A triple after a tetris gets no bonus.
        assert_eq!(calculate_score(3, 1, 0, true).back_to_back_bonus, 0);
        // A tetris after a non-tetris gets no bonus.
        assert_eq!(calculate_score(4, 1, 0, false).back_to_back_bonus, 0);
    }

    #[test]
    fn test_combo_scales_with_level() {
        let result = calculate_score(2, 3, 2, false);
        assert_eq!(result.line_clear_score, 300);
        assert_eq!(result.combo_bonus, 50 * 2 * 3);
        assert_eq!(result.total, 600);
    }

    #[test]
    fn test_drop_scores() {
        assert_eq!(calculate_drop_score(1), 2);
        assert_eq!(calculate_drop_score(18), 36);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(calculate_level(0), 1);
        assert_eq!(calculate_level(9), 1);
        assert_eq!(calculate_level(10), 2);
        assert_eq!(calculate_level(29), 3);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(get_drop_interval_ms(1), 1000);
        assert_eq!(get_drop_interval_ms(2), 950);
        assert_eq!(get_drop_interval_ms(19), 100);
        assert_eq!(get_drop_interval_ms(20), 50);
        assert_eq!(get_drop_interval_ms(40), 50);
    }

    #[test]
    fn test_drop_interval_strictly_decreases_until_floor() {
        let mut prev = get_drop_interval_ms(1);
        for level in 2..=20 {
            let next = get_drop_interval_ms(level);
            assert!(next < prev, "level {level}");
            prev = next;
        }
    }
}
