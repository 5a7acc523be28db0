/*
application.rs

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

//! Run Nancy against a sequence of puzzles.
//!
//! The [`Application`] object owns the [`Game`] object, Nancy's [`SearchEngine`] object, and the
//! [`Scheduler`] object that holds Nancy's next step.
//! It pops the due steps, prints Nancy's narration, records the words she finds, and gives her
//! a new puzzle when she is ready.
//!
//! By default the clock is virtual: the application jumps from one step to the next without
//! waiting.
//! In real-time mode it sleeps until each step is due.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::game::{Game, GameEvent};
use crate::generator::position::Position;
use crate::generator::puzzle::PuzzleGenerator;
use crate::policy::UpgradeKind;
use crate::saver::game::SaverGame;
use crate::saver::names::SaverNames;
use crate::saver::{delete_player, save_player};
use crate::search::engine::{SearchEngine, SearchSnapshot, Step};
use crate::search::scheduler::Scheduler;
use crate::search::state::SearchUpdate;

/// Run parameters.
#[derive(Debug, Clone)]
pub struct Options {
    pub player_name: String,

    /// Stop after this number of completed puzzles. `0` means never stop.
    pub puzzles: u32,

    /// Grid size that replaces the size derived from the ascension level.
    pub grid_size: Option<usize>,

    /// Upgrade levels that replace the saved levels.
    pub speed: Option<u32>,
    pub quality: Option<u32>,

    /// Seed of the random generator, for reproducible runs.
    pub seed: Option<u64>,

    /// Wait for real between the steps.
    pub realtime: bool,

    /// Spend the XP on upgrades as soon as possible.
    pub auto_upgrade: bool,

    /// Where the game is saved. `None` disables saving.
    pub data_dir: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            player_name: String::from("Player"),
            puzzles: 1,
            grid_size: None,
            speed: None,
            quality: None,
            seed: None,
            realtime: false,
            auto_upgrade: false,
            data_dir: None,
        }
    }
}

/// Word claimed by the player and accepted by the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub word: String,

    /// Nancy's reaction. `None` once Nancy has stopped: the word still counts.
    pub reaction: Option<String>,
}

/// Format a clock value as `mm:ss.mmm`.
pub fn format_clock(time: Duration) -> String {
    let millis: u128 = time.as_millis();
    format!(
        "{:02}:{:02}.{:03}",
        millis / 60_000,
        (millis / 1000) % 60,
        millis % 1000
    )
}

/// Headless driver.
pub struct Application {
    game: Game,
    engine: SearchEngine<StdRng>,
    timers: Scheduler<Step>,
    generator: PuzzleGenerator,

    /// Random generator for the puzzles. Nancy has her own.
    rng: StdRng,

    savers: Option<(SaverGame, SaverNames)>,
    options: Options,

    /// Puzzles completed during this run.
    completed: u32,
}

impl Application {
    /// Create an [`Application`] object.
    ///
    /// The saved game is restored when it belongs to the same player.
    pub fn new(options: Options) -> Result<Self, Box<dyn Error>> {
        let savers: Option<(SaverGame, SaverNames)> = match &options.data_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                Some((SaverGame::new(dir.clone()), SaverNames::new(dir.clone())))
            }
            None => None,
        };

        let mut game: Game = match &savers {
            Some((games, _)) => restore_game(games, &options.player_name),
            None => Game::new(&options.player_name),
        };
        if let Some(level) = options.speed {
            game.upgrades.speed = level;
        }
        if let Some(level) = options.quality {
            game.upgrades.quality = level;
        }
        game.start();
        // Nancy restarts from the word selection
        game.search_state.reset();

        let mut rng: StdRng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let engine_rng: StdRng = StdRng::seed_from_u64(rng.random());

        let mut app = Self {
            engine: SearchEngine::new(SearchSnapshot::default(), engine_rng),
            game,
            timers: Scheduler::new(),
            generator: PuzzleGenerator::new(),
            rng,
            savers,
            options,
            completed: 0,
        };
        if app.game.current_puzzle.is_none() || app.game.is_puzzle_complete() {
            app.new_puzzle();
        }
        app.refresh_engine();
        Ok(app)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current time of the virtual clock.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Puzzles completed during this run.
    pub fn completed(&self) -> u32 {
        self.completed
    }

    fn new_puzzle(&mut self) {
        match self.options.grid_size {
            Some(size) => {
                let puzzle = self.generator.generate(size, &mut self.rng);
                self.game.set_puzzle(puzzle);
            }
            None => self.game.generate_puzzle(&self.generator, &mut self.rng),
        }
        if let Some(puzzle) = &self.game.current_puzzle {
            info!("New puzzle: {}", puzzle.words.join(", "));
        }
    }

    fn refresh_engine(&mut self) {
        self.engine.update_state(SearchSnapshot::from(&self.game));
    }

    fn save(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some((games, names)) = &self.savers {
            self.game.mark_saved();
            save_player(games, names, &self.game)?;
            debug!("Game saved");
        }
        Ok(())
    }

    /// Buy every upgrade the XP can pay for.
    fn auto_upgrade(&mut self) {
        for kind in [UpgradeKind::Speed, UpgradeKind::Quality] {
            while self.game.upgrade(kind) {}
        }
    }

    /// Apply a batch of updates to the game.
    ///
    /// Return `true` when the requested number of puzzles is reached.
    fn process<F>(&mut self, batch: &mut Vec<SearchUpdate>, print: &mut F) -> bool
    where
        F: FnMut(Duration, &str),
    {
        let mut found: bool = false;
        let mut ready: bool = false;

        for update in batch.drain(..) {
            print(self.timers.now(), &update.narration);
            match self.game.apply_search_update(&update) {
                GameEvent::WordFound(word) => {
                    debug!("Nancy found {word}");
                    found = true;
                }
                GameEvent::PuzzleCompleted => self.completed += 1,
                GameEvent::ReadyForPuzzle => ready = true,
                GameEvent::None => (),
            }
        }

        if found {
            if self.options.auto_upgrade {
                self.auto_upgrade();
            }
            if let Err(error) = self.save() {
                warn!("Error saving the game: {error}");
            }
        }

        if ready {
            if self.options.puzzles > 0 && self.completed >= self.options.puzzles {
                return true;
            }
            self.new_puzzle();
            self.refresh_engine();
            self.engine.start_searching(&mut self.timers, |u| batch.push(u));
            return false;
        }

        self.refresh_engine();
        false
    }

    /// Run with the narration printed on the standard output.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let player: String = self.game.player_name.clone();
        self.run_with(|time, narration| {
            println!("[{}] Nancy: {narration}", format_clock(time));
            debug!("{player} has been watching for {}", format_clock(time));
        })
    }

    /// Run until the requested number of puzzles is completed. Each narration goes to `print`
    /// with the time of the clock.
    pub fn run_with<F>(&mut self, mut print: F) -> Result<(), Box<dyn Error>>
    where
        F: FnMut(Duration, &str),
    {
        let mut batch: Vec<SearchUpdate> = Vec::new();
        self.engine.start_searching(&mut self.timers, |u| batch.push(u));

        loop {
            if self.process(&mut batch, &mut print) {
                break;
            }
            let Some(due) = self.timers.next_due() else {
                warn!("Nancy has nothing left to do");
                break;
            };

            let before: Duration = self.timers.now();
            if self.options.realtime {
                thread::sleep(due.saturating_sub(before));
            }
            let Some((token, step)) = self.timers.pop_next() else {
                break;
            };
            self.game.add_time(self.timers.now().saturating_sub(before));
            self.engine.resume(token, step, &mut self.timers, |u| batch.push(u));
        }
        self.shutdown()
    }

    /// A word claimed by the player, from `start` to `end`.
    ///
    /// Return `None` if the selection does not match the word or if the word is already found.
    pub fn player_claim(&mut self, word: &str, start: Position, end: Position) -> Option<Claim> {
        let was_engine_word: bool = self.game.engine_word() == Some(word);
        if !self.game.player_find_word(word, start, end) {
            return None;
        }

        let mut reactions: Vec<SearchUpdate> = Vec::new();
        self.engine.player_found_word(word, was_engine_word, |u| reactions.push(u));
        for update in &reactions {
            self.game.apply_search_update(update);
        }
        self.refresh_engine();
        if let Err(error) = self.save() {
            warn!("Error saving the game: {error}");
        }
        Some(Claim {
            word: word.to_string(),
            reaction: reactions.into_iter().next().map(|u| u.narration),
        })
    }

    /// A span dragged by the player, from `start` to `end`, without naming the word.
    ///
    /// The word is read from the grid, in either orientation.
    pub fn player_select(&mut self, start: Position, end: Position) -> Option<Claim> {
        let word: String = self
            .game
            .current_puzzle
            .as_ref()
            .and_then(|p| p.word_at(start, end))
            .map(str::to_string)?;
        self.player_claim(&word, start, end)
    }

    /// Stop Nancy and save the game.
    pub fn shutdown(&mut self) -> Result<(), Box<dyn Error>> {
        self.engine.cleanup(&mut self.timers);
        self.save()
    }
}

/// Load the saved game if it belongs to the player, or create a new game.
fn restore_game(saver: &SaverGame, player_name: &str) -> Game {
    debug!("Getting the saved game");
    match saver.get_game() {
        Ok(Some(game)) if game.player_name == player_name => {
            info!("Continuing the game of {player_name}");
            return game;
        }
        Ok(Some(game)) => debug!("The saved game belongs to {}", game.player_name),
        Ok(None) => debug!("No saved game"),
        Err(error) => {
            warn!("Error getting the saved game: {error}");
            // Delete the file in error for trying to resolve the issue for the next start
            saver.delete_save();
        }
    }
    Game::new(player_name)
}

/// List the names of the players who saved a game.
pub fn list_saves(data_dir: PathBuf) -> Result<Vec<String>, Box<dyn Error>> {
    SaverNames::new(data_dir).get_names()
}

/// Delete a player and, if it is theirs, the saved game.
pub fn delete_save(data_dir: PathBuf, player_name: &str) -> Result<bool, Box<dyn Error>> {
    let games: SaverGame = SaverGame::new(data_dir.clone());
    let names: SaverNames = SaverNames::new(data_dir);
    delete_player(&games, &names, player_name)
}
