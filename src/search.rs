/*
search.rs

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

//! Nancy, the autonomous searcher.
//!
//! [`engine::SearchEngine`] is a step machine.
//! Each [`engine::Step`] produces a list of [`state::SearchUpdate`] events and at most one next
//! step, with the delay before it must run.
//! The engine does not own a clock: it hands its next step to a [`scheduler::Scheduler`] object
//! that the driver owns, and the driver gives the step back to the engine when it is due.
//!
//! The engine never modifies the puzzle.
//! When Nancy finds a word, the update carries the word and the driver marks it as found.
//! The driver then refreshes the engine with a new [`engine::SearchSnapshot`] object before
//! running the next step.
//!
//! Nancy makes mistakes on purpose.
//! The probabilities come from the [`crate::policy`] module and decrease with the quality
//! upgrade level.

pub mod engine;
pub mod phrases;
pub mod scheduler;
pub mod state;
