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

//! Save and restore the game in progress.
//!
//! The game is saved in the `savegame.json` file after every word found and when the program
//! stops.
//! When the program starts again, the saved game is loaded and Nancy continues the puzzle.
//!
//! The saved object is a serialization of the [`Game`] object in JSON format by using [`serde`].
//! The set of found words is saved as a sorted list of words, and the solutions as a list of
//! `[word, solution]` pairs.

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::game::Game;

/// Serialize and deserialize a [`std::collections::HashSet`] of words as a sorted list.
pub mod word_set {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashSet;

    /// Serialize a set of words.
    pub fn serialize<S>(words: &HashSet<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut list: Vec<&String> = words.iter().collect();
        list.sort();
        list.serialize(serializer)
    }

    /// Deserialize a set of words.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashSet<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list: Vec<String> = Vec::deserialize(deserializer)?;
        Ok(list.into_iter().collect())
    }
}

/// Serialize and deserialize the solutions of a puzzle as a list of `[word, solution]` pairs.
pub mod solution_pairs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
    use std::collections::HashMap;

    use crate::generator::puzzle::Solution;

    /// Serialize the solutions, sorted by word.
    pub fn serialize<S>(
        solutions: &HashMap<String, Solution>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut pairs: Vec<(&String, &Solution)> = solutions.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs.serialize(serializer)
    }

    /// Deserialize the solutions.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<String, Solution>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pairs: Vec<(String, Solution)> = Vec::deserialize(deserializer)?;
        let mut solutions: HashMap<String, Solution> = HashMap::with_capacity(pairs.len());
        for (word, solution) in pairs {
            if word != solution.word {
                return Err(Error::custom(format!(
                    "Solution for {} stored under {word}",
                    solution.word
                )));
            }
            solutions.insert(word, solution);
        }
        Ok(solutions)
    }
}

/// Object to save and restore a game in progress.
pub struct SaverGame {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("savegame.json");
        debug!("Save game file: {data_dir:?}");
        SaverGame {
            save_file: data_dir,
        }
    }

    /// Retrieve the saved [`Game`] object.
    ///
    /// Return the [`Game`] object or None if there is no saved game.
    pub fn get_game(&self) -> Result<Option<Game>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let game: Game = serde_json::from_reader(reader)?;
        Ok(Some(game))
    }

    /// Save the provided [`Game`] object.
    pub fn save_game(&self, game: &Game) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, game)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved game.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
