/*
config.rs

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

//! Game configuration tables.
//!
//! All the tuning values of the game live here: grid size, upgrade tables, Nancy's base timings
//! and base error rates.
//! The [`crate::policy`] module derives the effective delays and probabilities from these tables
//! and from the upgrade levels bought by the player.

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n",
    "This is free software: you are free to change and redistribute it.\n",
    "There is NO WARRANTY, to the extent permitted by law."
);

/// Parameters of an upgrade track (speed or quality).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeConfig {
    /// Highest level the player can buy, before ascension bonuses.
    pub max_level: u32,

    /// XP cost of the first level.
    pub base_cost: u64,

    /// Each level costs `cost_multiplier` times the previous one.
    pub cost_multiplier: f64,

    /// Improvement per level, in percent.
    pub effect: f64,
}

/// Base delays of Nancy's search steps, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Pause before moving to the next candidate position.
    pub position_check: u64,

    /// Pause between two letter verifications.
    pub letter_check: u64,

    /// Pause before Nancy commits to the next word.
    pub between_words: u64,

    /// Pause between the end of a puzzle and the readiness for the next one.
    pub between_puzzles: u64,
}

/// Base probabilities of Nancy's mistakes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorRates {
    pub skip_word: f64,
    pub skip_direction: f64,
    pub skip_position: f64,
    pub false_positive: f64,
}

/// Complete game configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Grid size of a puzzle at ascension level 0. Each ascension level adds a row and a column.
    pub base_grid_size: usize,

    /// XP awarded for a found word, multiplied by `1 + ascension level`.
    pub base_xp_multiplier: u64,

    /// Number of words the generator tries to place in a puzzle.
    pub words_per_puzzle: usize,

    /// Number of random placements tried for a word before the word is dropped.
    pub max_placement_attempts: usize,

    /// Smallest grid the generator accepts.
    pub min_grid_size: usize,

    pub speed: UpgradeConfig,
    pub quality: UpgradeConfig,
    pub timings: Timings,
    pub error_rates: ErrorRates,

    /// Floor of every computed delay, in milliseconds.
    pub min_timing: u64,

    /// Floor of every computed error rate.
    pub min_error_rate: f64,
}

pub const GAME_CONFIG: GameConfig = GameConfig {
    base_grid_size: 10,
    base_xp_multiplier: 1,
    words_per_puzzle: 8,
    max_placement_attempts: 100,
    min_grid_size: 4,
    speed: UpgradeConfig {
        max_level: 10,
        base_cost: 10,
        cost_multiplier: 1.5,
        effect: 15.0,
    },
    quality: UpgradeConfig {
        max_level: 10,
        base_cost: 15,
        cost_multiplier: 1.4,
        effect: 20.0,
    },
    timings: Timings {
        position_check: 1000,
        letter_check: 500,
        between_words: 2000,
        between_puzzles: 5000,
    },
    error_rates: ErrorRates {
        skip_word: 0.1,
        skip_direction: 0.05,
        skip_position: 0.03,
        false_positive: 0.15,
    },
    min_timing: 100,
    min_error_rate: 0.01,
};
