/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object is the only owner of the puzzle in progress.
//! Words are marked as found here, whoever found them, and the XP is awarded here.
//! Nancy only reads a [`SearchSnapshot`] copy of the game.

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::GAME_CONFIG;
use crate::generator::position::Position;
use crate::generator::puzzle::{Puzzle, PuzzleGenerator};
use crate::policy::{self, UpgradeKind, Upgrades};
use crate::search::engine::SearchSnapshot;
use crate::search::state::{SearchPhase, SearchState, SearchUpdate};

/// Statistics, across all the puzzles.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStatistics {
    pub words_found: u64,
    pub total_xp_earned: u64,
    pub puzzles_completed: u64,

    /// Playing time, in milliseconds.
    pub time_spent_ms: u64,

    pub ascensions: u32,
}

/// What a search update changed in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    None,

    /// Nancy found a word that nobody had found yet.
    WordFound(String),

    /// Nancy noticed that all the words are found.
    PuzzleCompleted,

    /// Nancy is waiting for a new puzzle.
    ReadyForPuzzle,
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Game {
    pub player_name: String,

    /// XP earned since the beginning.
    pub total_xp: u64,

    /// XP available for upgrades.
    pub current_xp: u64,

    pub ascension_level: u32,
    pub upgrades: Upgrades,
    pub current_puzzle: Option<Puzzle>,

    /// Nancy's state, as reported by her updates.
    pub search_state: SearchState,

    pub stats: GameStatistics,

    /// Whether the game has started.
    pub started: bool,

    pub last_save_time: DateTime<Utc>,
}

impl Game {
    /// Create a [`Game`] object for a new player.
    pub fn new(player_name: &str) -> Self {
        Self {
            player_name: player_name.to_string(),
            total_xp: 0,
            current_xp: 0,
            ascension_level: 0,
            upgrades: Upgrades::default(),
            current_puzzle: None,
            search_state: SearchState::new(),
            stats: GameStatistics::default(),
            started: false,
            last_save_time: Utc::now(),
        }
    }

    pub fn start(&mut self) {
        self.started = true;
    }

    /// Grid size for the next puzzle. Each ascension level adds a row and a column.
    pub fn grid_size(&self) -> usize {
        GAME_CONFIG.base_grid_size + self.ascension_level as usize
    }

    /// XP awarded for each found word.
    pub fn xp_per_word(&self) -> u64 {
        GAME_CONFIG.base_xp_multiplier * (1 + u64::from(self.ascension_level))
    }

    /// Replace the puzzle in progress and reset Nancy's state.
    pub fn set_puzzle(&mut self, puzzle: Puzzle) {
        debug!("New {0}x{0} puzzle with {1} words", puzzle.size, puzzle.words.len());
        self.current_puzzle = Some(puzzle);
        self.search_state.reset();
    }

    /// Generate a puzzle at the grid size of the current ascension level.
    pub fn generate_puzzle<R: Rng + ?Sized>(&mut self, generator: &PuzzleGenerator, rng: &mut R) {
        let puzzle: Puzzle = generator.generate(self.grid_size(), rng);
        self.set_puzzle(puzzle);
    }

    /// Mark a word as found and award the XP.
    ///
    /// Return `false`, and award nothing, if the word is not a word of the puzzle or if it is
    /// already found.
    pub fn find_word(&mut self, word: &str) -> bool {
        let Some(puzzle) = self.current_puzzle.as_mut() else {
            return false;
        };
        if !puzzle.mark_found(word) {
            return false;
        }

        let xp: u64 = self.xp_per_word();
        self.current_xp += xp;
        self.total_xp += xp;
        self.stats.words_found += 1;
        self.stats.total_xp_earned += xp;
        debug!("{word} found, +{xp} XP (total {})", self.total_xp);
        true
    }

    /// Process a selection of the player.
    ///
    /// The word is found only if the selection covers it exactly, in either orientation.
    pub fn player_find_word(&mut self, word: &str, start: Position, end: Position) -> bool {
        let valid: bool = self
            .current_puzzle
            .as_ref()
            .is_some_and(|p| p.is_valid_selection(word, start, end));
        if !valid {
            debug!("Invalid selection for {word} from {start} to {end}");
            return false;
        }
        self.find_word(word)
    }

    /// Apply an update from Nancy.
    pub fn apply_search_update(&mut self, update: &SearchUpdate) -> GameEvent {
        let previous: SearchPhase = self.search_state.search_phase;
        self.search_state.apply(&update.patch);

        if let Some(word) = &update.found_word {
            return if self.find_word(word) {
                GameEvent::WordFound(word.clone())
            } else {
                GameEvent::None
            };
        }

        match (previous, update.patch.search_phase) {
            (SearchPhase::BetweenPuzzles, Some(SearchPhase::SelectingWord)) => {
                GameEvent::ReadyForPuzzle
            }
            (p, Some(SearchPhase::BetweenPuzzles)) if p != SearchPhase::BetweenPuzzles => {
                self.stats.puzzles_completed += 1;
                info!("Puzzle completed ({} so far)", self.stats.puzzles_completed);
                GameEvent::PuzzleCompleted
            }
            _ => GameEvent::None,
        }
    }

    pub fn is_puzzle_complete(&self) -> bool {
        self.current_puzzle.as_ref().is_some_and(|p| p.is_complete())
    }

    /// XP cost of the next level of the upgrade.
    pub fn upgrade_cost(&self, kind: UpgradeKind) -> u64 {
        policy::upgrade_cost(kind, self.upgrades.level(kind))
    }

    pub fn is_max_level(&self, kind: UpgradeKind) -> bool {
        self.upgrades.level(kind) >= policy::max_level(kind, self.ascension_level)
    }

    pub fn can_upgrade(&self, kind: UpgradeKind) -> bool {
        !self.is_max_level(kind) && self.current_xp >= self.upgrade_cost(kind)
    }

    /// Buy the next level of the upgrade.
    ///
    /// Return `false` if the upgrade is at its maximum level or if there is not enough XP.
    pub fn upgrade(&mut self, kind: UpgradeKind) -> bool {
        if !self.can_upgrade(kind) {
            return false;
        }
        let cost: u64 = self.upgrade_cost(kind);
        let level: u32 = self.upgrades.level(kind) + 1;
        self.current_xp -= cost;
        self.upgrades.set_level(kind, level);
        info!("{kind} upgraded to level {level} for {cost} XP");
        true
    }

    /// Add playing time to the statistics.
    pub fn add_time(&mut self, elapsed: Duration) {
        let millis: u64 = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.stats.time_spent_ms = self.stats.time_spent_ms.saturating_add(millis);
    }

    /// Record the time of the save.
    pub fn mark_saved(&mut self) {
        self.last_save_time = Utc::now();
    }

    /// Word that Nancy is looking for.
    pub fn engine_word(&self) -> Option<&str> {
        self.search_state.current_word.as_deref()
    }
}

/// Build the data that Nancy reads.
impl From<&Game> for SearchSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            puzzle: game.current_puzzle.clone(),
            upgrades: game.upgrades,
            started: game.started,
        }
    }
}
