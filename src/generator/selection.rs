/*
selection.rs

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

//! Validate the spans that the player selects in the grid.

use super::position::{Direction, Position};
use super::puzzle::Puzzle;

/// Whether the span from `start` to `end` is the location of `word`.
///
/// The span can be selected from either end of the word. Unknown words and positions outside
/// the grid are simply invalid.
pub fn is_valid_selection(puzzle: &Puzzle, word: &str, start: Position, end: Position) -> bool {
    match puzzle.solution(word) {
        Some(solution) => {
            (solution.start == start && solution.end == end)
                || (solution.start == end && solution.end == start)
        }
        None => false,
    }
}

/// Return the direction and the length (number of steps) of a straight span.
///
/// Return `None` if the span is not horizontal, vertical, or diagonal. A single-cell span goes
/// east with a length of zero.
pub fn span_direction(start: Position, end: Position) -> Option<(Direction, usize)> {
    let delta_row: isize = end.row as isize - start.row as isize;
    let delta_col: isize = end.col as isize - start.col as isize;

    if delta_row != 0 && delta_col != 0 && delta_row.abs() != delta_col.abs() {
        return None;
    }
    let unit: (isize, isize) = (delta_row.signum(), delta_col.signum());
    if unit == (0, 0) {
        return Some((Direction::East, 0));
    }
    let direction: Direction = Direction::ALL.into_iter().find(|d| d.delta() == unit)?;
    Some((direction, delta_row.unsigned_abs().max(delta_col.unsigned_abs())))
}

/// Read the letters of the grid along a straight span, from `start` to `end`.
///
/// Return `None` if the span is not straight or leaves the grid.
pub fn letters_between(puzzle: &Puzzle, start: Position, end: Position) -> Option<String> {
    if !start.is_inside(puzzle.size) || !end.is_inside(puzzle.size) {
        return None;
    }
    let (direction, length) = span_direction(start, end)?;
    (0..=length)
        .map(|i| {
            start
                .offset(direction, i, puzzle.size)
                .and_then(|p| puzzle.letter_at(p))
        })
        .collect()
}

/// Return the word of the puzzle that the span from `start` to `end` covers.
///
/// The span can be selected from either end of the word. Letters that spell a word somewhere
/// else than where it was placed do not count.
pub fn word_at(puzzle: &Puzzle, start: Position, end: Position) -> Option<&str> {
    let letters: String = letters_between(puzzle, start, end)?;
    let reversed: String = letters.chars().rev().collect();
    puzzle
        .words
        .iter()
        .filter(|w| **w == letters || **w == reversed)
        .find(|w| is_valid_selection(puzzle, w, start, end))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::puzzle::Solution;
    use std::collections::{HashMap, HashSet};

    /// 4x4 grid with "DOG" written south-east from the top-left corner.
    fn dog_puzzle() -> Puzzle {
        let grid: Vec<Vec<char>> = ["DXYZ", "AOBC", "EFGH", "IJKL"]
            .iter()
            .map(|r| r.chars().collect())
            .collect();
        let mut solutions = HashMap::new();
        solutions.insert(
            "DOG".to_string(),
            Solution {
                word: "DOG".to_string(),
                start: Position::new(0, 0),
                end: Position::new(2, 2),
                direction: Direction::SouthEast,
            },
        );
        Puzzle {
            grid,
            words: vec!["DOG".to_string()],
            found_words: HashSet::new(),
            solutions,
            size: 4,
        }
    }

    #[test]
    fn test_both_orientations_are_valid() {
        let puzzle = dog_puzzle();
        let (s, e) = (Position::new(0, 0), Position::new(2, 2));
        assert!(is_valid_selection(&puzzle, "DOG", s, e));
        assert!(is_valid_selection(&puzzle, "DOG", e, s));
    }

    #[test]
    fn test_other_spans_are_invalid() {
        let puzzle = dog_puzzle();
        assert!(!is_valid_selection(&puzzle, "DOG", Position::new(0, 0), Position::new(1, 1)));
        assert!(!is_valid_selection(&puzzle, "DOG", Position::new(1, 1), Position::new(3, 3)));
        assert!(!is_valid_selection(&puzzle, "DOG", Position::new(0, 0), Position::new(0, 0)));
        assert!(!is_valid_selection(&puzzle, "CAT", Position::new(0, 0), Position::new(2, 2)));
        assert!(!is_valid_selection(&puzzle, "DOG", Position::new(99, 0), Position::new(2, 99)));
    }

    #[test]
    fn test_span_direction() {
        let o = Position::new(2, 2);
        assert_eq!(span_direction(o, Position::new(2, 5)), Some((Direction::East, 3)));
        assert_eq!(span_direction(o, Position::new(0, 2)), Some((Direction::North, 2)));
        assert_eq!(span_direction(o, Position::new(0, 0)), Some((Direction::NorthWest, 2)));
        assert_eq!(span_direction(o, Position::new(4, 0)), Some((Direction::SouthWest, 2)));
        assert_eq!(span_direction(o, Position::new(3, 5)), None);
        assert_eq!(span_direction(o, o), Some((Direction::East, 0)));
    }

    #[test]
    fn test_letters_between() {
        let puzzle = dog_puzzle();
        assert_eq!(
            letters_between(&puzzle, Position::new(0, 0), Position::new(2, 2)).as_deref(),
            Some("DOG")
        );
        assert_eq!(
            letters_between(&puzzle, Position::new(2, 2), Position::new(0, 0)).as_deref(),
            Some("GOD")
        );
        assert_eq!(
            letters_between(&puzzle, Position::new(1, 0), Position::new(1, 3)).as_deref(),
            Some("AOBC")
        );
        assert_eq!(letters_between(&puzzle, Position::new(0, 0), Position::new(1, 2)), None);
        assert_eq!(letters_between(&puzzle, Position::new(0, 0), Position::new(4, 4)), None);
    }

    #[test]
    fn test_word_at() {
        let mut puzzle = dog_puzzle();
        let (s, e) = (Position::new(0, 0), Position::new(2, 2));
        assert_eq!(word_at(&puzzle, s, e), Some("DOG"));
        assert_eq!(word_at(&puzzle, e, s), Some("DOG"));
        assert_eq!(word_at(&puzzle, s, Position::new(1, 1)), None);
        assert_eq!(word_at(&puzzle, s, Position::new(1, 2)), None);

        // "AOBC" spelled on the second row, but not placed there
        puzzle.words.push("AOBC".to_string());
        assert_eq!(word_at(&puzzle, Position::new(1, 0), Position::new(1, 3)), None);
    }
}
