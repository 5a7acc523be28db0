/*
lib.rs

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

//! Idle word search: Nancy searches word search puzzles on her own while the player watches,
//! helps, and spends the earned XP on upgrades that make her faster and more careful.
//!
//! * [`generator`] builds the puzzles and validates the player selections.
//! * [`policy`] turns the upgrade levels into delays and error rates.
//! * [`search`] is Nancy: a step machine driven by a virtual-clock scheduler.
//! * [`game`] holds the player's progress and applies Nancy's updates.
//! * [`saver`] saves and restores the game.
//! * [`application`] drives everything from the command line.

pub mod application;
pub mod cli_options;
pub mod config;
pub mod game;
pub mod generator;
pub mod policy;
pub mod saver;
pub mod search;
