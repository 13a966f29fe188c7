//! XP and level derivation.
//!
//! The level is a pure function of XP: `1 + floor(xp / 100)`. It is never
//! stored, so the derivation invariant cannot drift.

/// XP span of a single level
pub const XP_PER_LEVEL: u64 = 100;

/// Level for a given XP total
pub fn level_for_xp(xp: u64) -> u32 {
    (1 + xp / XP_PER_LEVEL).min(u32::MAX as u64) as u32
}

/// XP accumulated inside the current level
pub fn xp_into_level(xp: u64) -> u64 {
    xp % XP_PER_LEVEL
}

/// XP still needed to reach the next level
pub fn xp_to_next_level(xp: u64) -> u64 {
    XP_PER_LEVEL - xp % XP_PER_LEVEL
}

/// Progress through the current level (0.0 - 1.0)
pub fn progress_to_next(xp: u64) -> f32 {
    (xp % XP_PER_LEVEL) as f32 / XP_PER_LEVEL as f32
}

/// Whether a quiz result qualifies for the A+ badge (ratio >= 0.9)
pub fn is_a_plus(score: u64, total_possible: u64) -> bool {
    score * 10 >= total_possible.max(1) * 9
}

/// XP rewards for the various activities
pub struct XpRewards;

impl XpRewards {
    /// Minimum score for the Math Ninja game badge
    pub const GAME_BADGE_THRESHOLD: u64 = 20;

    /// Streak badge interval in days
    pub const STREAK_BADGE_INTERVAL: u32 = 7;

    /// XP for completing a lesson quiz: a share of 50 proportional to the
    /// score ratio, plus a flat 20 for finishing
    pub fn lesson(score: u64, total_possible: u64) -> u64 {
        let ratio = score as f64 / total_possible.max(1) as f64;
        (ratio * 50.0).round() as u64 + 20
    }

    /// XP for a mini-game round, capped at 30
    pub fn game(score: u64) -> u64 {
        (10 + score / 2).min(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_derivation() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(250), 3);
        assert_eq!(level_for_xp(1000), 11);
    }

    #[test]
    fn lesson_xp_formula() {
        // Perfect score: round((3/3)*50)+20
        assert_eq!(XpRewards::lesson(3, 3), 70);
        // Partial: round((1/3)*50)+20 = round(16.67)+20
        assert_eq!(XpRewards::lesson(1, 3), 37);
        // Zero questions falls back to a denominator of 1
        assert_eq!(XpRewards::lesson(0, 0), 20);
    }

    #[test]
    fn game_xp_is_capped() {
        assert_eq!(XpRewards::game(0), 10);
        assert_eq!(XpRewards::game(25), 22);
        assert_eq!(XpRewards::game(1000), 30);
    }

    #[test]
    fn a_plus_boundary() {
        assert!(is_a_plus(9, 10));
        assert!(is_a_plus(3, 3));
        assert!(!is_a_plus(8, 10));
        assert!(!is_a_plus(2, 3));
    }

    #[test]
    fn progress_within_level() {
        assert_eq!(xp_into_level(250), 50);
        assert_eq!(xp_to_next_level(250), 50);
        assert!((progress_to_next(250) - 0.5).abs() < f32::EPSILON);
    }
}
