//! Perk experience and leveling
//!
//! Perks level from 0 to 25 off a cumulative experience counter. The
//! threshold table holds the total experience needed to reach each level,
//! so a counter value is placed by finding the bracket it falls in.

use serde::{Deserialize, Serialize};

/// Highest perk level; reaching it stops progress tracking
pub const MAX_PERK_LEVEL: u32 = 25;

const TABLE_LEN: usize = MAX_PERK_LEVEL as usize + 1;

/// Cumulative experience required for each level (index = level)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
    thresholds: [u64; TABLE_LEN],
}

/// Killing Floor 2 perk experience table
pub const PERK_XP_TABLE: LevelTable = LevelTable::new([
    0, 2640, 5557, 8781, 12343, 16279, 20628, 25434, 30745, 36613, 43097, 50262, 58180, 66929,
    76596, 87279, 99083, 112127, 126540, 142467, 160066, 179513, 201002, 224747, 250985, 279978,
]);

/// Where an experience value sits on the level curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelInfo {
    /// Current level (0..=25)
    pub level: u32,
    /// Progress through the current level (0.0 to 100.0)
    pub progress_percent: f64,
    /// Experience still needed for the next level (0 at max level)
    pub xp_to_next: u64,
}

impl LevelInfo {
    pub fn is_max(&self) -> bool {
        self.level >= MAX_PERK_LEVEL
    }
}

impl LevelTable {
    /// Build a table, panicking if it does not start at 0 or is not strictly increasing
    ///
    /// Evaluated at compile time for constant tables.
    pub const fn new(thresholds: [u64; TABLE_LEN]) -> Self {
        assert!(thresholds[0] == 0, "level table must start at 0");
        let mut i = 1;
        while i < TABLE_LEN {
            assert!(
                thresholds[i] > thresholds[i - 1],
                "level table must be strictly increasing"
            );
            i += 1;
        }
        Self { thresholds }
    }

    /// Experience required to reach `level` (clamped to the max level)
    pub fn threshold(&self, level: u32) -> u64 {
        self.thresholds[level.min(MAX_PERK_LEVEL) as usize]
    }

    pub fn thresholds(&self) -> &[u64] {
        &self.thresholds
    }

    /// Experience at which the max level is reached
    pub fn max_xp(&self) -> u64 {
        self.thresholds[TABLE_LEN - 1]
    }

    /// Place an experience value on this table
    pub fn level_info(&self, xp: u64) -> LevelInfo {
        if xp >= self.max_xp() {
            return LevelInfo {
                level: MAX_PERK_LEVEL,
                progress_percent: 100.0,
                xp_to_next: 0,
            };
        }

        // xp < max_xp, so some bracket always matches; index 0 is 0 so i >= 1
        let next = self
            .thresholds
            .iter()
            .position(|&required| xp < required)
            .unwrap_or(TABLE_LEN - 1);
        let level = next.saturating_sub(1);

        let floor = self.thresholds[level];
        let ceiling = self.thresholds[next];
        let progress_in_level = xp - floor;
        let needed_for_level_up = ceiling - floor;

        let progress_percent = if needed_for_level_up == 0 {
            100.0
        } else {
            progress_in_level as f64 / needed_for_level_up as f64 * 100.0
        };

        LevelInfo {
            level: level as u32,
            progress_percent,
            xp_to_next: ceiling - xp,
        }
    }
}

/// Place an experience value on the perk experience table
pub fn level_info(xp: u64) -> LevelInfo {
    PERK_XP_TABLE.level_info(xp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_xp() {
        let info = level_info(0);
        assert_eq!(info.level, 0);
        assert_eq!(info.progress_percent, 0.0);
        assert_eq!(info.xp_to_next, 2640);
        assert!(!info.is_max());
    }

    #[test]
    fn test_half_of_first_level() {
        let info = level_info(1320);
        assert_eq!(info.level, 0);
        assert_eq!(info.progress_percent, 50.0);
        assert_eq!(info.xp_to_next, 1320);
    }

    #[test]
    fn test_exact_threshold_starts_next_level() {
        let info = level_info(2640);
        assert_eq!(info.level, 1);
        assert_eq!(info.progress_percent, 0.0);
        assert_eq!(info.xp_to_next, 5557 - 2640);
    }

    #[test]
    fn test_one_below_threshold() {
        let info = level_info(5556);
        assert_eq!(info.level, 1);
        assert_eq!(info.xp_to_next, 1);
        assert!(info.progress_percent > 99.9 && info.progress_percent < 100.0);
    }

    #[test]
    fn test_last_bracket() {
        let info = level_info(250985);
        assert_eq!(info.level, 24);
        assert_eq!(info.xp_to_next, 279978 - 250985);
    }

    #[test]
    fn test_max_level_exact_and_beyond() {
        for xp in [279978, 279979, 1_000_000, u64::MAX] {
            let info = level_info(xp);
            assert_eq!(info.level, MAX_PERK_LEVEL);
            assert_eq!(info.progress_percent, 100.0);
            assert_eq!(info.xp_to_next, 0);
            assert!(info.is_max());
        }
    }

    #[test]
    fn test_threshold_lookup_clamps() {
        assert_eq!(PERK_XP_TABLE.threshold(0), 0);
        assert_eq!(PERK_XP_TABLE.threshold(1), 2640);
        assert_eq!(PERK_XP_TABLE.threshold(99), 279978);
        assert_eq!(PERK_XP_TABLE.thresholds().len(), 26);
    }

    #[test]
    fn test_custom_table() {
        let mut thresholds = [0u64; TABLE_LEN];
        for (i, t) in thresholds.iter_mut().enumerate() {
            *t = i as u64 * 100;
        }
        let table = LevelTable::new(thresholds);

        let info = table.level_info(250);
        assert_eq!(info.level, 2);
        assert_eq!(info.progress_percent, 50.0);
        assert_eq!(info.xp_to_next, 50);
        assert_eq!(table.level_info(2500).level, MAX_PERK_LEVEL);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_non_increasing_table_panics() {
        let mut thresholds = [0u64; TABLE_LEN];
        for (i, t) in thresholds.iter_mut().enumerate() {
            *t = i as u64 * 100;
        }
        thresholds[10] = thresholds[9];
        LevelTable::new(thresholds);
    }

    #[test]
    #[should_panic(expected = "start at 0")]
    fn test_table_must_start_at_zero() {
        let mut thresholds = [0u64; TABLE_LEN];
        for (i, t) in thresholds.iter_mut().enumerate() {
            *t = i as u64 * 100 + 1;
        }
        LevelTable::new(thresholds);
    }
}
