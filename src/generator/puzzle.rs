/*
puzzle.rs

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

//! Puzzle representation and random puzzle generation.

use log::{Level, debug, log_enabled, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::position::{Direction, Position};
use super::selection;
use super::vocabulary::Vocabulary;
use crate::config::GAME_CONFIG;
use crate::saver::game::{solution_pairs, word_set};

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Where a word has been written in the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub word: String,

    /// Cell of the first letter.
    pub start: Position,

    /// Cell of the last letter.
    pub end: Position,

    pub direction: Direction,
}

impl Solution {
    /// Return the cells of the word, from the first letter to the last one.
    pub fn cells(&self) -> Vec<Position> {
        let (delta_row, delta_col) = self.direction.delta();
        (0..self.word.len() as isize)
            .map(|i| {
                Position::new(
                    (self.start.row as isize + delta_row * i) as usize,
                    (self.start.col as isize + delta_col * i) as usize,
                )
            })
            .collect()
    }
}

/// A word search puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Letters, indexed by row and then by column.
    pub grid: Vec<Vec<char>>,

    /// Words hidden in the grid, in the order they were placed.
    pub words: Vec<String>,

    /// Words found so far, by Nancy or by the player.
    #[serde(with = "word_set")]
    pub found_words: HashSet<String>,

    /// Location of each word of [`Puzzle::words`].
    #[serde(with = "solution_pairs")]
    pub solutions: HashMap<String, Solution>,

    /// Number of rows and columns.
    pub size: usize,
}

impl Puzzle {
    /// Return the letter at the given position, or `None` outside the grid.
    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.grid
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
    }

    /// Return the words that nobody found yet, in list order.
    pub fn remaining_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| !self.found_words.contains(*w))
            .map(String::as_str)
            .collect()
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found_words.contains(word)
    }

    /// Whether all the words have been found.
    ///
    /// Entries of `found_words` that are not words of the puzzle do not count.
    pub fn is_complete(&self) -> bool {
        self.words.iter().all(|w| self.found_words.contains(w))
    }

    pub fn solution(&self, word: &str) -> Option<&Solution> {
        self.solutions.get(word)
    }

    /// Record a found word.
    ///
    /// Return `true` if the word is a word of the puzzle that was not found yet. Found words are
    /// never removed.
    pub fn mark_found(&mut self, word: &str) -> bool {
        if !self.words.iter().any(|w| w == word) {
            return false;
        }
        self.found_words.insert(word.to_string())
    }

    /// Whether the selection from `start` to `end` covers `word`, in either orientation.
    pub fn is_valid_selection(&self, word: &str, start: Position, end: Position) -> bool {
        selection::is_valid_selection(self, word, start, end)
    }

    /// Word covered by the span from `start` to `end`, in either orientation.
    pub fn word_at(&self, start: Position, end: Position) -> Option<&str> {
        selection::word_at(self, start, end)
    }

    /// Return the grid as text, one row per line.
    pub fn grid_to_string(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// Grid under construction. Cells are `None` until a letter is written.
struct DraftGrid {
    size: usize,
    cells: Vec<Vec<Option<char>>>,
}

impl DraftGrid {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![None; size]; size],
        }
    }

    /// Whether the word can be written from `start` in the given direction.
    ///
    /// Every cell on the path must be inside the grid, and either empty or already holding the
    /// same letter (words can cross).
    fn can_place(&self, word: &str, start: Position, direction: Direction) -> bool {
        word.chars().enumerate().all(|(i, letter)| {
            match start.offset(direction, i, self.size) {
                Some(p) => match self.cells[p.row][p.col] {
                    None => true,
                    Some(c) => c == letter,
                },
                None => false,
            }
        })
    }

    /// Write the word and return its solution. The caller must check [`DraftGrid::can_place`]
    /// first.
    fn place(&mut self, word: &str, start: Position, direction: Direction) -> Solution {
        let mut end: Position = start;
        for (i, letter) in word.chars().enumerate() {
            if let Some(p) = start.offset(direction, i, self.size) {
                self.cells[p.row][p.col] = Some(letter);
                end = p;
            }
        }
        Solution {
            word: word.to_string(),
            start,
            end,
            direction,
        }
    }

    /// Fill the empty cells with random letters and return the final grid.
    fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Vec<char>> {
        self.cells
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| {
                        cell.unwrap_or_else(|| {
                            ALPHABET[rng.random_range(0..ALPHABET.len())] as char
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

/// Random puzzle generator.
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    /// Source of the candidate words.
    pub vocabulary: Vocabulary,

    /// Number of words to try to place.
    pub word_count: usize,

    /// Number of random placements tried for each word.
    pub max_attempts: usize,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleGenerator {
    /// Create a generator that uses the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: Vocabulary::BuiltIn,
            word_count: GAME_CONFIG.words_per_puzzle,
            max_attempts: GAME_CONFIG.max_placement_attempts,
        }
    }

    /// Create a generator that draws its words from the given vocabulary.
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            ..Self::new()
        }
    }

    /// Generate a puzzle of `grid_size` x `grid_size` cells.
    ///
    /// Placement is best-effort: a word that cannot be placed after
    /// [`PuzzleGenerator::max_attempts`] random tries is left out of the puzzle.
    /// Generation itself never fails.
    pub fn generate<R: Rng + ?Sized>(&self, grid_size: usize, rng: &mut R) -> Puzzle {
        let size: usize = if grid_size < GAME_CONFIG.min_grid_size {
            warn!(
                "Grid size {grid_size} is too small, using {}",
                GAME_CONFIG.min_grid_size
            );
            GAME_CONFIG.min_grid_size
        } else {
            grid_size
        };

        let mut draft: DraftGrid = DraftGrid::new(size);
        let candidates: Vec<String> = self.vocabulary.candidates(size, self.word_count, rng);
        let mut words: Vec<String> = Vec::with_capacity(candidates.len());
        let mut solutions: HashMap<String, Solution> = HashMap::with_capacity(candidates.len());

        for word in candidates {
            let mut placed: bool = false;

            for attempt in 0..self.max_attempts {
                let direction: Direction = Direction::random(rng);
                let start: Position =
                    Position::new(rng.random_range(0..size), rng.random_range(0..size));

                if draft.can_place(&word, start, direction) {
                    let solution: Solution = draft.place(&word, start, direction);
                    debug!(
                        "Placed {word} from {} to {} going {direction} (attempt {})",
                        solution.start,
                        solution.end,
                        attempt + 1
                    );
                    solutions.insert(word.clone(), solution);
                    placed = true;
                    break;
                }
            }

            if placed {
                words.push(word);
            } else {
                debug!(
                    "Cannot place {word} after {} attempts, dropping it",
                    self.max_attempts
                );
            }
        }

        let puzzle = Puzzle {
            grid: draft.fill(rng),
            words,
            found_words: HashSet::new(),
            solutions,
            size,
        };
        if log_enabled!(Level::Debug) {
            debug!("Generated puzzle:\n{}", puzzle.grid_to_string());
        }
        puzzle
    }
}

/// Generate a puzzle from the built-in vocabulary with the thread random generator.
pub fn generate_word_search(grid_size: usize) -> Puzzle {
    PuzzleGenerator::new().generate(grid_size, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn read_along(puzzle: &Puzzle, solution: &Solution) -> String {
        solution
            .cells()
            .into_iter()
            .map(|p| puzzle.letter_at(p).unwrap())
            .collect()
    }

    fn assert_sound(puzzle: &Puzzle) {
        assert_eq!(puzzle.grid.len(), puzzle.size);
        for row in &puzzle.grid {
            assert_eq!(row.len(), puzzle.size);
            assert!(row.iter().all(|c| c.is_ascii_uppercase()));
        }
        assert_eq!(puzzle.solutions.len(), puzzle.words.len());
        for word in &puzzle.words {
            let solution = puzzle.solution(word).expect("every placed word has a solution");
            assert_eq!(&solution.word, word);
            assert_eq!(read_along(puzzle, solution), *word);
            let expected_end = solution
                .start
                .offset(solution.direction, word.len() - 1, puzzle.size);
            assert_eq!(expected_end, Some(solution.end));
            assert!(solution.start.is_inside(puzzle.size));
            assert!(solution.end.is_inside(puzzle.size));
        }
        assert!(puzzle.found_words.is_empty());
    }

    #[test]
    fn test_generate_default_puzzle() {
        let mut rng = StdRng::seed_from_u64(42);
        let puzzle = PuzzleGenerator::new().generate(10, &mut rng);
        assert_eq!(puzzle.size, 10);
        assert!(!puzzle.words.is_empty());
        assert!(puzzle.words.len() <= 8);
        assert_sound(&puzzle);
    }

    #[test]
    fn test_generate_with_thread_rng() {
        assert_sound(&generate_word_search(12));
    }

    #[test]
    fn test_cat_is_placed_and_selectable() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator = PuzzleGenerator::with_vocabulary(Vocabulary::custom(["CAT"]));
        let puzzle = generator.generate(10, &mut rng);

        assert_eq!(puzzle.words, vec!["CAT".to_string()]);
        let solution = puzzle.solution("CAT").unwrap().clone();
        assert_eq!(read_along(&puzzle, &solution), "CAT");

        assert!(puzzle.is_valid_selection("CAT", solution.start, solution.end));
        assert!(puzzle.is_valid_selection("CAT", solution.end, solution.start));

        // The same line moved by one cell
        let (dr, dc) = Direction::South.delta();
        let shift = |p: Position| {
            Position::new(
                (p.row as isize + dr).rem_euclid(10) as usize,
                (p.col as isize + dc).rem_euclid(10) as usize,
            )
        };
        assert!(!puzzle.is_valid_selection("CAT", shift(solution.start), shift(solution.end)));
    }

    #[test]
    fn test_unplaceable_word_is_dropped() {
        let mut rng = StdRng::seed_from_u64(5);
        // Without any placement attempt, every candidate gets dropped
        let generator = PuzzleGenerator {
            vocabulary: Vocabulary::custom(["CAT", "DOG"]),
            word_count: 8,
            max_attempts: 0,
        };
        let puzzle = generator.generate(6, &mut rng);
        assert!(puzzle.words.is_empty());
        assert!(puzzle.solutions.is_empty());
        assert!(puzzle.is_complete());
        assert_sound(&puzzle);
    }

    #[test]
    fn test_too_small_grid_is_raised() {
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = PuzzleGenerator::new().generate(2, &mut rng);
        assert_eq!(puzzle.size, GAME_CONFIG.min_grid_size);
        assert_sound(&puzzle);
    }

    #[test]
    fn test_crossing_words_share_letters() {
        let mut draft = DraftGrid::new(5);
        draft.place("CAT", Position::new(0, 0), Direction::East);
        assert!(draft.can_place("ANT", Position::new(0, 1), Direction::South));
        assert!(!draft.can_place("OWL", Position::new(0, 1), Direction::South));
        assert!(!draft.can_place("OWL", Position::new(0, 4), Direction::East));
    }

    #[test]
    fn test_mark_found_is_monotonic() {
        let mut rng = StdRng::seed_from_u64(9);
        let generator = PuzzleGenerator::with_vocabulary(Vocabulary::custom(["DOG"]));
        let mut puzzle = generator.generate(8, &mut rng);
        assert_eq!(puzzle.words, vec!["DOG".to_string()]);

        assert!(!puzzle.mark_found("CAT"));
        assert!(!puzzle.is_complete());
        assert!(puzzle.mark_found("DOG"));
        assert!(!puzzle.mark_found("DOG"));
        assert!(puzzle.is_found("DOG"));
        assert_eq!(puzzle.found_words.len(), puzzle.words.len());
        assert!(puzzle.is_complete());
        assert!(puzzle.remaining_words().is_empty());
    }

    #[test]
    fn test_unknown_found_words_do_not_complete() {
        let mut rng = StdRng::seed_from_u64(9);
        let generator = PuzzleGenerator::with_vocabulary(Vocabulary::custom(["CAT", "DOG"]));
        let mut puzzle = generator.generate(8, &mut rng);
        assert_eq!(puzzle.words.len(), 2);

        // As loaded from a hand-edited save file
        puzzle.found_words.insert("CAT".to_string());
        puzzle.found_words.insert("OWL".to_string());
        assert_eq!(puzzle.found_words.len(), puzzle.words.len());
        assert!(!puzzle.is_complete());
        assert_eq!(puzzle.remaining_words(), vec!["DOG"]);
    }

    proptest! {
        #[test]
        fn property_placement_soundness(seed in any::<u64>(), size in 4_usize..18) {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = PuzzleGenerator::new().generate(size, &mut rng);
            prop_assert_eq!(puzzle.size, size);
            for word in &puzzle.words {
                let solution = puzzle.solution(word).unwrap();
                prop_assert_eq!(&read_along(&puzzle, solution), word);
                prop_assert!(solution.end.is_inside(size));
            }
        }
    }
}
