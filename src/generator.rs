/*
generator.rs

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

//! Generate word search puzzles and validate selections.
//!
//! A [`puzzle::PuzzleGenerator`] object draws candidate words from a [`vocabulary::Vocabulary`]
//! object, places them in the grid in random [`position::Direction`] directions, and fills the
//! remaining cells with random letters.
//! Words can cross when they share a letter.
//! A word that cannot be placed is dropped from the puzzle, so a puzzle might hold fewer words
//! than requested.
//!
//! The resulting [`puzzle::Puzzle`] object keeps the location of each word (a
//! [`puzzle::Solution`] object).
//! The [`selection`] module uses these locations to decide whether a span that the player selects
//! covers a word.

pub mod position;
pub mod puzzle;
pub mod selection;
pub mod vocabulary;
