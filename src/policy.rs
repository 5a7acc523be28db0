/*
policy.rs

Copyright 2025 Hervé Quatremain

This file is part of Idle Word Search.

Idle Word Search is free software: you can redistribute it and/or modify it
under the terms of the GNU General Public License as published by the Free
Software Foundation, either version 3 of the License, or (at your option) any
later version.

Idle Word Search is distributed in the hope that it will be useful, but WITHOUT
ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Idle Word Search. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Derive Nancy's effective delays and error rates from the upgrade levels.
//!
//! Every function here is pure. The search engine calls them again at every step, because the
//! player can buy upgrades while Nancy is searching.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::config::{GAME_CONFIG, UpgradeConfig};

/// Kind of pause between two search steps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TimingKind {
    PositionCheck,
    LetterCheck,
    BetweenWords,
    BetweenPuzzles,
}

/// Kind of simulated mistake.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SkipWord,
    SkipDirection,
    SkipPosition,
    FalsePositive,
}

/// Upgrade tracks the player can buy.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeKind {
    Speed,
    Quality,
}

impl UpgradeKind {
    fn config(self) -> &'static UpgradeConfig {
        match self {
            UpgradeKind::Speed => &GAME_CONFIG.speed,
            UpgradeKind::Quality => &GAME_CONFIG.quality,
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UpgradeKind::Speed => write!(f, "speed"),
            UpgradeKind::Quality => write!(f, "quality"),
        }
    }
}

/// Upgrade levels bought by the player.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Upgrades {
    pub speed: u32,
    pub quality: u32,
}

impl Upgrades {
    pub fn level(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::Speed => self.speed,
            UpgradeKind::Quality => self.quality,
        }
    }

    pub fn set_level(&mut self, kind: UpgradeKind, level: u32) {
        match kind {
            UpgradeKind::Speed => self.speed = level,
            UpgradeKind::Quality => self.quality = level,
        }
    }

    /// Effective delay for the current speed level.
    pub fn timing(&self, kind: TimingKind) -> Duration {
        timing_for(kind, self.speed)
    }

    /// Effective error rate for the current quality level.
    pub fn error_rate(&self, kind: ErrorKind) -> f64 {
        error_rate_for(kind, self.quality)
    }
}

/// Return the delay for the given step kind at the given speed level.
///
/// Each speed level removes a fixed fraction of the base delay. The result never drops below
/// 100 ms.
pub fn timing_for(kind: TimingKind, speed_level: u32) -> Duration {
    let timings = &GAME_CONFIG.timings;
    let base: u64 = match kind {
        TimingKind::PositionCheck => timings.position_check,
        TimingKind::LetterCheck => timings.letter_check,
        TimingKind::BetweenWords => timings.between_words,
        TimingKind::BetweenPuzzles => timings.between_puzzles,
    };
    let reduction: f64 = f64::from(speed_level) * (GAME_CONFIG.speed.effect / 100.0);
    let millis: f64 = (base as f64 * (1.0 - reduction)).max(GAME_CONFIG.min_timing as f64);
    Duration::from_millis(millis.round() as u64)
}

/// Return the probability of the given mistake at the given quality level.
///
/// Each quality level removes a fixed fraction of the base rate. The result stays between 0.01
/// and 1.
pub fn error_rate_for(kind: ErrorKind, quality_level: u32) -> f64 {
    let rates = &GAME_CONFIG.error_rates;
    let base: f64 = match kind {
        ErrorKind::SkipWord => rates.skip_word,
        ErrorKind::SkipDirection => rates.skip_direction,
        ErrorKind::SkipPosition => rates.skip_position,
        ErrorKind::FalsePositive => rates.false_positive,
    };
    let reduction: f64 = f64::from(quality_level) * (GAME_CONFIG.quality.effect / 100.0);
    (base * (1.0 - reduction)).clamp(GAME_CONFIG.min_error_rate, 1.0)
}

/// XP cost of buying the next level when the track is at `level`.
pub fn upgrade_cost(kind: UpgradeKind, level: u32) -> u64 {
    let config: &UpgradeConfig = kind.config();
    let exponent: i32 = i32::try_from(level).unwrap_or(i32::MAX);
    (config.base_cost as f64 * config.cost_multiplier.powi(exponent)).floor() as u64
}

/// Highest level of the track. Each ascension raises the cap by one level.
pub fn max_level(kind: UpgradeKind, ascension_level: u32) -> u32 {
    kind.config().max_level.saturating_add(ascension_level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TIMING_KINDS: [TimingKind; 4] = [
        TimingKind::PositionCheck,
        TimingKind::LetterCheck,
        TimingKind::BetweenWords,
        TimingKind::BetweenPuzzles,
    ];

    const ERROR_KINDS: [ErrorKind; 4] = [
        ErrorKind::SkipWord,
        ErrorKind::SkipDirection,
        ErrorKind::SkipPosition,
        ErrorKind::FalsePositive,
    ];

    #[test]
    fn test_base_values_at_level_zero() {
        assert_eq!(timing_for(TimingKind::PositionCheck, 0), Duration::from_millis(1000));
        assert_eq!(timing_for(TimingKind::LetterCheck, 0), Duration::from_millis(500));
        assert_eq!(timing_for(TimingKind::BetweenWords, 0), Duration::from_millis(2000));
        assert_eq!(timing_for(TimingKind::BetweenPuzzles, 0), Duration::from_millis(5000));
        assert_eq!(error_rate_for(ErrorKind::SkipWord, 0), 0.1);
        assert_eq!(error_rate_for(ErrorKind::FalsePositive, 0), 0.15);
    }

    #[test]
    fn test_levels_reduce_values() {
        // 2 levels: 30% faster
        assert_eq!(timing_for(TimingKind::BetweenWords, 2), Duration::from_millis(1400));
        // 7 levels: 105% faster, floored
        assert_eq!(timing_for(TimingKind::BetweenWords, 7), Duration::from_millis(100));
        // 1 level: 20% fewer mistakes
        assert!((error_rate_for(ErrorKind::SkipWord, 1) - 0.08).abs() < 1e-12);
        // 5 levels: no mistakes left, floored
        assert_eq!(error_rate_for(ErrorKind::SkipDirection, 5), 0.01);
    }

    #[test]
    fn test_upgrades_use_their_levels() {
        let upgrades = Upgrades {
            speed: 1,
            quality: 2,
        };
        assert_eq!(upgrades.timing(TimingKind::LetterCheck), Duration::from_millis(425));
        assert!((upgrades.error_rate(ErrorKind::FalsePositive) - 0.09).abs() < 1e-12);
        assert_eq!(upgrades.level(UpgradeKind::Quality), 2);
    }

    #[test]
    fn test_upgrade_costs() {
        assert_eq!(upgrade_cost(UpgradeKind::Speed, 0), 10);
        assert_eq!(upgrade_cost(UpgradeKind::Speed, 1), 15);
        assert_eq!(upgrade_cost(UpgradeKind::Speed, 2), 22);
        assert_eq!(upgrade_cost(UpgradeKind::Quality, 0), 15);
        assert_eq!(upgrade_cost(UpgradeKind::Quality, 2), 29);
        assert_eq!(max_level(UpgradeKind::Speed, 0), 10);
        assert_eq!(max_level(UpgradeKind::Quality, 3), 13);
    }

    proptest! {
        #[test]
        fn property_timing_floor(level in 0_u32..1_000) {
            for kind in TIMING_KINDS {
                prop_assert!(timing_for(kind, level) >= Duration::from_millis(100));
            }
        }

        #[test]
        fn property_error_rate_bounds(level in 0_u32..1_000) {
            for kind in ERROR_KINDS {
                let rate = error_rate_for(kind, level);
                prop_assert!(rate >= 0.01);
                prop_assert!(rate <= 1.0);
            }
        }
    }
}
