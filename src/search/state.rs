/*
state.rs

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

//! Observable state of Nancy's search and the events that update it.

use serde::{Deserialize, Serialize};

use crate::generator::position::{Direction, Position};

/// What Nancy is doing.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    #[default]
    SelectingWord,
    Searching,
    CheckingLetters,
    Resting,
    BetweenPuzzles,
}

/// Nancy's state, as displayed to the player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub current_word: Option<String>,
    pub current_direction: Option<Direction>,
    pub current_position: Option<Position>,
    pub search_phase: SearchPhase,

    /// Whether Nancy is verifying the letters at a candidate position.
    pub is_thinking: bool,

    /// Index of the letter being verified.
    pub letter_index: usize,
}

impl SearchState {
    /// Return the neutral state, used at the beginning of every puzzle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Go back to the neutral state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Merge a partial update. Fields that the patch does not carry are left untouched.
    pub fn apply(&mut self, patch: &StatePatch) {
        if let Some(word) = &patch.current_word {
            self.current_word = word.clone();
        }
        if let Some(direction) = patch.current_direction {
            self.current_direction = direction;
        }
        if let Some(position) = patch.current_position {
            self.current_position = position;
        }
        if let Some(phase) = patch.search_phase {
            self.search_phase = phase;
        }
        if let Some(thinking) = patch.is_thinking {
            self.is_thinking = thinking;
        }
        if let Some(index) = patch.letter_index {
            self.letter_index = index;
        }
    }
}

/// Partial [`SearchState`].
///
/// For the optional fields of the state, `Some(None)` clears the field and `None` leaves it
/// unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct StatePatch {
    pub current_word: Option<Option<String>>,
    pub current_direction: Option<Option<Direction>>,
    pub current_position: Option<Option<Position>>,
    pub search_phase: Option<SearchPhase>,
    pub is_thinking: Option<bool>,
    pub letter_index: Option<usize>,
}

impl StatePatch {
    /// Patch that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that clears the word, the direction, and the position.
    pub fn cleared() -> Self {
        Self::new().word(None).direction(None).position(None)
    }

    pub fn word(mut self, word: Option<&str>) -> Self {
        self.current_word = Some(word.map(String::from));
        self
    }

    pub fn direction(mut self, direction: Option<Direction>) -> Self {
        self.current_direction = Some(direction);
        self
    }

    pub fn position(mut self, position: Option<Position>) -> Self {
        self.current_position = Some(position);
        self
    }

    pub fn phase(mut self, phase: SearchPhase) -> Self {
        self.search_phase = Some(phase);
        self
    }

    pub fn thinking(mut self, thinking: bool) -> Self {
        self.is_thinking = Some(thinking);
        self
    }

    pub fn letter(mut self, index: usize) -> Self {
        self.letter_index = Some(index);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Event emitted by the search engine.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchUpdate {
    pub patch: StatePatch,

    /// Word that Nancy just found, if any.
    pub found_word: Option<String>,

    /// What Nancy says.
    pub narration: String,
}

impl SearchUpdate {
    pub fn new(patch: StatePatch, narration: impl Into<String>) -> Self {
        Self {
            patch,
            found_word: None,
            narration: narration.into(),
        }
    }

    /// Update that only carries a narration.
    pub fn narration(narration: impl Into<String>) -> Self {
        Self::new(StatePatch::new(), narration)
    }

    pub fn with_found_word(mut self, word: &str) -> Self {
        self.found_word = Some(word.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_state() {
        let state = SearchState::new();
        assert_eq!(state.search_phase, SearchPhase::SelectingWord);
        assert!(state.current_word.is_none());
        assert!(state.current_direction.is_none());
        assert!(state.current_position.is_none());
        assert!(!state.is_thinking);
        assert_eq!(state.letter_index, 0);
    }

    #[test]
    fn test_patch_leaves_missing_fields_alone() {
        let mut state = SearchState::new();
        state.apply(
            &StatePatch::new()
                .word(Some("CAT"))
                .direction(Some(Direction::East))
                .phase(SearchPhase::Searching),
        );
        state.apply(&StatePatch::new().position(Some(Position::new(1, 2))).thinking(true));

        assert_eq!(state.current_word.as_deref(), Some("CAT"));
        assert_eq!(state.current_direction, Some(Direction::East));
        assert_eq!(state.current_position, Some(Position::new(1, 2)));
        assert_eq!(state.search_phase, SearchPhase::Searching);
        assert!(state.is_thinking);
    }

    #[test]
    fn test_patch_clears_fields() {
        let mut state = SearchState {
            current_word: Some("CAT".to_string()),
            current_direction: Some(Direction::West),
            current_position: Some(Position::new(0, 0)),
            search_phase: SearchPhase::CheckingLetters,
            is_thinking: true,
            letter_index: 2,
        };
        state.apply(&StatePatch::cleared().phase(SearchPhase::SelectingWord));
        assert!(state.current_word.is_none());
        assert!(state.current_direction.is_none());
        assert!(state.current_position.is_none());
        // Not part of the patch
        assert!(state.is_thinking);
        assert_eq!(state.letter_index, 2);

        state.reset();
        assert_eq!(state, SearchState::new());
    }

    #[test]
    fn test_empty_patch() {
        assert!(StatePatch::new().is_empty());
        assert!(!StatePatch::new().letter(0).is_empty());
        assert!(SearchUpdate::narration("Hello").patch.is_empty());
    }

    #[test]
    fn test_phase_serialization() {
        let json = serde_json::to_string(&SearchPhase::BetweenPuzzles).unwrap();
        assert_eq!(json, "\"between_puzzles\"");
    }
}
