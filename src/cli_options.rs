/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Watch Nancy solve two puzzles, with the quality upgrade at level 3:
//!
//! ```text
//! $ idle-wordsearch --name Ada --puzzles 2 --quality 3
//! [00:02.000] Nancy: I'm looking for "MOON" in the grid.
//! [00:02.000] Nancy: I'm searching east for "MOON".
//! [00:02.000] Nancy: I'm checking position (1, 1)...
//! [00:02.000] Nancy: I'm checking letter 1 of "MOON": M...
//! [00:02.500] Nancy: Letter doesn't match. Nancy continues searching.
//! ...
//! ```
//!
//! List the players who saved a game:
//!
//! ```text
//! $ idle-wordsearch --ls
//! Ada
//! Grace
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::application::{self, Options};
use crate::config::{COPYRIGHT_NOTICE, PKG_NAME};
use crate::game::Game;

/// Watch Nancy play word search puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Name of the player
    #[arg(short, long, default_value = "Player")]
    name: String,

    /// Number of puzzles to complete before stopping (0 to never stop)
    #[arg(short, long, default_value_t = 1)]
    puzzles: u32,

    /// Grid size, instead of the size of the ascension level
    #[arg(short, long)]
    grid_size: Option<usize>,

    /// Level of the speed upgrade
    #[arg(long)]
    speed: Option<u32>,

    /// Level of the quality upgrade
    #[arg(long)]
    quality: Option<u32>,

    /// Seed for the random generator
    #[arg(long)]
    seed: Option<u64>,

    /// Wait for real between Nancy's steps
    #[arg(short, long, default_value_t = false)]
    realtime: bool,

    /// Spend the XP on upgrades as soon as possible
    #[arg(short, long, default_value_t = false)]
    auto_upgrade: bool,

    /// Directory where the game is saved
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Do not save the game
    #[arg(long, default_value_t = false)]
    no_save: bool,

    /// List the players who saved a game
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Delete the saved game of a player
    #[arg(long, value_name = "NAME")]
    delete: Option<String>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// What the program must do after parsing the options.
#[derive(Debug)]
pub enum Command {
    /// Exit with the given code.
    Exit(u8),

    /// Run the game.
    Run(Options),
}

/// Default directory for the saved games.
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(PKG_NAME)
}

/// Parse and process command-line options.
pub fn parse() -> Command {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let data_dir: PathBuf = args.data_dir.unwrap_or_else(default_data_dir);
    debug!("Data directory: {data_dir:?}");

    //
    // List the saved games
    //
    if args.ls {
        return match application::list_saves(data_dir) {
            Ok(names) => {
                for name in names {
                    println!("{name}");
                }
                Command::Exit(0)
            }
            Err(error) => {
                eprintln!("Cannot read the saved games: {error}");
                Command::Exit(1)
            }
        };
    }

    //
    // Delete a saved game
    //
    if let Some(name) = args.delete {
        return match application::delete_save(data_dir, &name) {
            Ok(true) => Command::Exit(0),
            Ok(false) => {
                eprintln!("No saved game for {name}. Use --ls to list the saved games.");
                Command::Exit(1)
            }
            Err(error) => {
                eprintln!("Cannot delete the saved game of {name}: {error}");
                Command::Exit(1)
            }
        };
    }

    Command::Run(Options {
        player_name: args.name,
        puzzles: args.puzzles,
        grid_size: args.grid_size,
        speed: args.speed,
        quality: args.quality,
        seed: args.seed,
        realtime: args.realtime,
        auto_upgrade: args.auto_upgrade,
        data_dir: if args.no_save { None } else { Some(data_dir) },
    })
}

/// Print some statistics at the end of a run.
pub fn print_summary(game: &Game) {
    println!(
        "
            player = {}
       words found = {}
 puzzles completed = {}
          total XP = {}
      available XP = {}
     speed upgrade = {}
   quality upgrade = {}",
        game.player_name,
        game.stats.words_found,
        game.stats.puzzles_completed,
        game.total_xp,
        game.current_xp,
        game.upgrades.speed,
        game.upgrades.quality
    );
}
