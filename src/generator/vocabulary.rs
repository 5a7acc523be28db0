/*
vocabulary.rs

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

//! Source words for the puzzles.
//!
//! The built-in vocabulary is split into three buckets.
//! Small grids only draw from the small bucket, larger grids add the medium and then the large
//! buckets.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Words for 8x8 to 10x10 grids.
pub const SMALL_WORDS: &[&str] = &[
    "CAT", "DOG", "SUN", "MOON", "STAR", "TREE", "BIRD", "FISH", "BOOK", "GAME", "PLAY", "JUMP",
    "SWIM", "SING", "DANCE", "SMILE", "HAPPY", "BRAVE", "QUICK", "LIGHT", "MAGIC", "DREAM",
    "OCEAN", "FOREST",
];

/// Additional words for 11x11 to 13x13 grids.
pub const MEDIUM_WORDS: &[&str] = &[
    "CASTLE",
    "DRAGON",
    "WIZARD",
    "KNIGHT",
    "PRINCESS",
    "RAINBOW",
    "UNICORN",
    "ADVENTURE",
    "TREASURE",
    "MYSTERY",
    "JOURNEY",
    "FRIENDSHIP",
    "COURAGE",
    "FREEDOM",
    "WISDOM",
    "HARMONY",
    "CRYSTAL",
    "PHOENIX",
    "GALAXY",
    "PLANET",
];

/// Additional words for 14x14 grids and larger.
pub const LARGE_WORDS: &[&str] = &[
    "BUTTERFLY",
    "ELEPHANT",
    "GIRAFFE",
    "PENGUIN",
    "KANGAROO",
    "DOLPHIN",
    "THUNDERSTORM",
    "WATERFALL",
    "MOUNTAIN",
    "TELESCOPE",
    "MICROSCOPE",
    "CONSTELLATION",
    "IMAGINATION",
    "EXTRAORDINARY",
    "MAGNIFICENT",
    "SPECTACULAR",
];

/// Largest grid that only uses [`SMALL_WORDS`].
const SMALL_GRID_MAX: usize = 10;

/// Largest grid that does not use [`LARGE_WORDS`].
const MEDIUM_GRID_MAX: usize = 13;

/// Where the generator gets its candidate words from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Vocabulary {
    /// The three built-in buckets, selected by grid size.
    #[default]
    BuiltIn,

    /// A caller-provided list, used whatever the grid size.
    Custom(Vec<String>),
}

impl Vocabulary {
    /// Create a custom vocabulary.
    ///
    /// Words are converted to uppercase. Empty words, words with non-alphabetic characters, and
    /// duplicates are discarded.
    pub fn custom<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut list: Vec<String> = Vec::new();

        for word in words {
            let word: String = word.as_ref().trim().to_ascii_uppercase();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
                debug!("Ignoring vocabulary entry {word:?}");
                continue;
            }
            if seen.insert(word.clone()) {
                list.push(word);
            }
        }
        Vocabulary::Custom(list)
    }

    /// Return the words eligible for a grid of the given size, before length filtering.
    pub fn bucket(&self, grid_size: usize) -> Vec<String> {
        match self {
            Vocabulary::Custom(words) => words.clone(),
            Vocabulary::BuiltIn => {
                let mut words: Vec<&str> = SMALL_WORDS.to_vec();
                if grid_size > SMALL_GRID_MAX {
                    words.extend_from_slice(MEDIUM_WORDS);
                }
                if grid_size > MEDIUM_GRID_MAX {
                    words.extend_from_slice(LARGE_WORDS);
                }
                words.into_iter().map(String::from).collect()
            }
        }
    }

    /// Pick up to `count` random words that fit in a grid of the given size.
    ///
    /// A word fits when it is at least one letter shorter than the grid side.
    pub fn candidates<R: Rng + ?Sized>(
        &self,
        grid_size: usize,
        count: usize,
        rng: &mut R,
    ) -> Vec<String> {
        let mut words: Vec<String> = self
            .bucket(grid_size)
            .into_iter()
            .filter(|w| w.len() < grid_size)
            .collect();
        words.shuffle(rng);
        words.truncate(count);
        words
    }
}
