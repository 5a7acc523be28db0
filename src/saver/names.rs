/*
names.rs

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

//! Save and restore the names of the players who saved a game.
//!
//! The saved object is a JSON list of strings, in the order the players first saved.

use log::debug;
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

/// Object to save and restore the list of player names.
pub struct SaverNames {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverNames {
    /// Create a [`SaverNames`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the list must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("save-names.json");
        debug!("Save names file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the list of names.
    ///
    /// Return an empty list if the file does not exist.
    pub fn get_names(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(Vec::new()),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let names: Vec<String> = serde_json::from_reader(reader)?;
        Ok(names)
    }

    /// Save the provided list of names.
    pub fn save_names(&self, names: &[String]) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, names)?;
        writer.flush()?;
        Ok(())
    }

    /// Add a name at the end of the list. Return `false` if the name was already there.
    pub fn add_name(&self, name: &str) -> Result<bool, Box<dyn Error>> {
        let mut names: Vec<String> = self.get_names()?;
        if names.iter().any(|n| n == name) {
            return Ok(false);
        }
        names.push(name.to_string());
        self.save_names(&names)?;
        Ok(true)
    }

    /// Remove a name from the list. Return `false` if the name was not there.
    pub fn remove_name(&self, name: &str) -> Result<bool, Box<dyn Error>> {
        let mut names: Vec<String> = self.get_names()?;
        let count: usize = names.len();
        names.retain(|n| n != name);
        if names.len() == count {
            return Ok(false);
        }
        self.save_names(&names)?;
        Ok(true)
    }

    /// Delete the list of names.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::saver::game::SaverGame;
    use crate::saver::{delete_player, save_player};
    use std::env;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir: PathBuf =
            env::temp_dir().join(format!("idle-wordsearch-names-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_add_and_remove_names() {
        let saver = SaverNames::new(scratch_dir("add-remove"));
        assert!(saver.get_names().unwrap().is_empty());

        assert!(saver.add_name("Ada").unwrap());
        assert!(saver.add_name("Grace").unwrap());
        assert!(!saver.add_name("Ada").unwrap());
        assert_eq!(saver.get_names().unwrap(), vec!["Ada", "Grace"]);

        assert!(saver.remove_name("Ada").unwrap());
        assert!(!saver.remove_name("Ada").unwrap());
        assert_eq!(saver.get_names().unwrap(), vec!["Grace"]);

        saver.delete_save();
        assert!(saver.get_names().unwrap().is_empty());
    }

    #[test]
    fn test_delete_player_only_removes_own_game() {
        let dir = scratch_dir("delete-player");
        let games = SaverGame::new(dir.clone());
        let names = SaverNames::new(dir);

        names.add_name("Grace").unwrap();
        save_player(&games, &names, &Game::new("Ada")).unwrap();
        assert_eq!(names.get_names().unwrap(), vec!["Grace", "Ada"]);

        // Grace's name goes, Ada's game stays
        assert!(delete_player(&games, &names, "Grace").unwrap());
        assert!(games.get_game().unwrap().is_some());

        assert!(delete_player(&games, &names, "Ada").unwrap());
        assert!(games.get_game().unwrap().is_none());
        assert!(names.get_names().unwrap().is_empty());
        assert!(!delete_player(&games, &names, "Ada").unwrap());
    }
}
