/*
saver.rs

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

//! Save and restore the game and the list of players.
//!
//! Both files are JSON documents in the data directory:
//!
//! * `savegame.json` holds the [`crate::game::Game`] object of the last player.
//!   See [`game::SaverGame`].
//! * `save-names.json` holds the names of the players who saved a game.
//!   See [`names::SaverNames`].

use log::debug;
use std::error::Error;

pub mod game;
pub mod names;

use self::game::SaverGame;
use self::names::SaverNames;
use crate::game::Game;

/// Save the game and add the player to the list of names.
pub fn save_player(
    games: &SaverGame,
    names: &SaverNames,
    game: &Game,
) -> Result<(), Box<dyn Error>> {
    games.save_game(game)?;
    names.add_name(&game.player_name)?;
    Ok(())
}

/// Remove the player from the list of names.
///
/// The saved game is also deleted when it belongs to that player.
/// Return `false` if the player was not in the list.
pub fn delete_player(
    games: &SaverGame,
    names: &SaverNames,
    player_name: &str,
) -> Result<bool, Box<dyn Error>> {
    let removed: bool = names.remove_name(player_name)?;

    // A corrupted save file cannot be attributed to anybody: leave it alone
    if let Ok(Some(game)) = games.get_game()
        && game.player_name == player_name
    {
        debug!("Deleting the saved game of {player_name}");
        games.delete_save();
    }
    Ok(removed)
}
