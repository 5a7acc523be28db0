/*
engine.rs

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

//! Nancy's search state machine.
//!
//! Nancy works on one word at a time, always the first word that nobody found yet.
//! She tries the eight directions in a fixed order, and for each direction she scans the grid
//! row by row.
//! When the word fits at a cell, she verifies its letters one by one.
//!
//! Every decision that could go wrong draws a random number against the error rates of the
//! [`crate::policy`] module:
//!
//! * She can skip the first remaining word and look for the second one.
//! * She can skip a whole direction.
//! * She can skip a cell.
//! * She can misread a matching letter and move on to the next cell.
//!
//! If she misses the word in all the directions, she gives up and selects the next word.

use log::{debug, info, warn};
use rand::Rng;
use std::time::Duration;

use super::phrases;
use super::scheduler::{Scheduler, TimerToken};
use super::state::{SearchPhase, SearchUpdate, StatePatch};
use crate::generator::position::{Direction, Position};
use crate::generator::puzzle::Puzzle;
use crate::policy::{ErrorKind, TimingKind, Upgrades};

/// Game data that Nancy reads. The driver replaces it after every change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnapshot {
    pub puzzle: Option<Puzzle>,
    pub upgrades: Upgrades,

    /// Whether the game has started.
    pub started: bool,
}

/// Unit of work of the engine. Each step runs when its delay expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Pick the next word, or finish the puzzle.
    SelectWord,

    /// Announce the picked word and scan the directions for it.
    CommitWord {
        word: String,

        /// Word that Nancy skipped to pick this one.
        skipped: Option<String>,
    },

    /// Continue scanning from a cell (row-major index) after a failed verification.
    ResumeScan {
        word: String,
        direction: Direction,
        cell: usize,
    },

    /// Compare a letter of the word with the grid.
    CheckLetter {
        word: String,
        direction: Direction,
        position: Position,
        letter_index: usize,
    },

    /// Announce that Nancy is ready for a new puzzle.
    PuzzleReady,
}

/// Result of a step: the updates to emit, in order, and the step to run next.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transition {
    pub updates: Vec<SearchUpdate>,
    pub next: Option<(Duration, Step)>,
}

/// Working data while a step runs.
struct StepContext<'a, R: Rng> {
    puzzle: &'a Puzzle,
    upgrades: Upgrades,
    rng: &'a mut R,
    updates: Vec<SearchUpdate>,
}

impl<R: Rng> StepContext<'_, R> {
    fn emit(&mut self, update: SearchUpdate) {
        self.updates.push(update);
    }

    fn delay(&self, kind: TimingKind) -> Duration {
        self.upgrades.timing(kind)
    }

    /// Whether Nancy makes the given mistake this time.
    fn blunder(&mut self, kind: ErrorKind) -> bool {
        self.rng.random::<f64>() < self.upgrades.error_rate(kind)
    }

    fn select_word(&mut self) -> Option<(Duration, Step)> {
        let puzzle: &Puzzle = self.puzzle;
        let remaining: Vec<&str> = puzzle.remaining_words();

        if remaining.is_empty() {
            self.emit(SearchUpdate::new(
                StatePatch::cleared()
                    .phase(SearchPhase::BetweenPuzzles)
                    .thinking(false)
                    .letter(0),
                "I completed the puzzle! Generating a new one... 🌟",
            ));
            return Some((self.delay(TimingKind::BetweenPuzzles), Step::PuzzleReady));
        }

        let step: Step = if remaining.len() > 1 && self.blunder(ErrorKind::SkipWord) {
            debug!("Nancy skips {} and picks {}", remaining[0], remaining[1]);
            Step::CommitWord {
                word: remaining[1].to_string(),
                skipped: Some(remaining[0].to_string()),
            }
        } else {
            Step::CommitWord {
                word: remaining[0].to_string(),
                skipped: None,
            }
        };
        Some((self.delay(TimingKind::BetweenWords), step))
    }

    fn commit_word(&mut self, word: &str, skipped: Option<&str>) -> Option<(Duration, Step)> {
        let narration: String = match skipped {
            Some(skipped) => format!(
                "{} I'll look for \"{word}\" instead.",
                phrases::skipped_word(skipped, self.rng)
            ),
            None => format!("I'm looking for \"{word}\" in the grid."),
        };
        self.emit(SearchUpdate::new(
            StatePatch::new()
                .word(Some(word))
                .phase(SearchPhase::SelectingWord),
            narration,
        ));
        self.search_directions(word, 0)
    }

    /// Try the directions, in scan order, starting at the given index.
    fn search_directions(&mut self, word: &str, from: usize) -> Option<(Duration, Step)> {
        for direction in Direction::ALL.into_iter().skip(from) {
            if self.blunder(ErrorKind::SkipDirection) {
                debug!("Nancy skips the {direction} direction for {word}");
                continue;
            }
            self.emit(SearchUpdate::new(
                StatePatch::new()
                    .direction(Some(direction))
                    .phase(SearchPhase::Searching),
                format!("I'm searching {direction} for \"{word}\"."),
            ));
            if let Some(next) = self.scan_positions(word, direction, 0) {
                return Some(next);
            }
        }

        info!("Nancy could not find {word}");
        self.emit(SearchUpdate::new(
            StatePatch::cleared().phase(SearchPhase::SelectingWord),
            format!("I couldn't find \"{word}\" and moved on. 🤔"),
        ));
        self.select_word()
    }

    /// Scan the cells, in row-major order, starting at the given cell index.
    ///
    /// Return `None` when no cell is left in that direction.
    fn scan_positions(
        &mut self,
        word: &str,
        direction: Direction,
        from_cell: usize,
    ) -> Option<(Duration, Step)> {
        let size: usize = self.puzzle.size;
        let last: usize = word.chars().count().saturating_sub(1);

        for cell in from_cell..size * size {
            if self.blunder(ErrorKind::SkipPosition) {
                continue;
            }
            let position = Position::new(cell / size, cell % size);
            if position.offset(direction, last, size).is_none() {
                continue;
            }
            self.emit(SearchUpdate::new(
                StatePatch::new().position(Some(position)).thinking(true),
                format!("I'm checking position {position}..."),
            ));
            return Some(self.begin_letter(word, direction, position, 0));
        }
        None
    }

    /// Announce the verification of a letter, or the word if all the letters are verified.
    fn begin_letter(
        &mut self,
        word: &str,
        direction: Direction,
        position: Position,
        letter_index: usize,
    ) -> (Duration, Step) {
        let Some(letter) = word.chars().nth(letter_index) else {
            self.emit(
                SearchUpdate::new(
                    StatePatch::new()
                        .thinking(false)
                        .letter(0)
                        .phase(SearchPhase::SelectingWord),
                    format!("I found \"{word}\"! 🎉"),
                )
                .with_found_word(word),
            );
            // Zero delay: the driver records the word before the next selection runs
            return (Duration::ZERO, Step::SelectWord);
        };

        self.emit(SearchUpdate::new(
            StatePatch::new()
                .letter(letter_index)
                .phase(SearchPhase::CheckingLetters),
            format!(
                "I'm checking letter {} of \"{word}\": {letter}...",
                letter_index + 1
            ),
        ));
        (
            self.delay(TimingKind::LetterCheck),
            Step::CheckLetter {
                word: word.to_string(),
                direction,
                position,
                letter_index,
            },
        )
    }

    fn check_letter(
        &mut self,
        word: &str,
        direction: Direction,
        position: Position,
        letter_index: usize,
    ) -> (Duration, Step) {
        let size: usize = self.puzzle.size;
        let expected: Option<char> = word.chars().nth(letter_index);
        let actual: Option<char> = position
            .offset(direction, letter_index, size)
            .and_then(|p| self.puzzle.letter_at(p));
        let matching: bool = expected.is_some() && expected == actual;

        let narration: String = if !matching {
            "Letter doesn't match. Nancy continues searching.".to_string()
        } else if self.blunder(ErrorKind::FalsePositive) {
            debug!("Nancy misreads letter {} of {word} at {position}", letter_index + 1);
            format!(
                "{} Nancy thought the letter didn't match and moved on.",
                phrases::pick(phrases::OOPS_WRONG_MATCH, self.rng)
            )
        } else {
            return self.begin_letter(word, direction, position, letter_index + 1);
        };

        self.emit(SearchUpdate::new(
            StatePatch::new().thinking(false).letter(0),
            narration,
        ));
        (
            self.delay(TimingKind::PositionCheck),
            Step::ResumeScan {
                word: word.to_string(),
                direction,
                cell: position.row * size + position.col + 1,
            },
        )
    }

    fn resume_scan(
        &mut self,
        word: &str,
        direction: Direction,
        cell: usize,
    ) -> Option<(Duration, Step)> {
        match self.scan_positions(word, direction, cell) {
            Some(next) => Some(next),
            None => self.search_directions(word, direction.index() + 1),
        }
    }

    fn puzzle_ready(&mut self) -> Option<(Duration, Step)> {
        self.emit(SearchUpdate::new(
            StatePatch::new().phase(SearchPhase::SelectingWord),
            "I'm ready for a new puzzle! 🎯",
        ));
        None
    }
}

/// Nancy.
///
/// The engine keeps at most one step in the driver's [`Scheduler`] object.
/// The driver pops due steps and gives them back with [`SearchEngine::resume`].
#[derive(Debug)]
pub struct SearchEngine<R: Rng> {
    snapshot: SearchSnapshot,
    rng: R,

    /// Token of the step waiting in the scheduler.
    pending: Option<TimerToken>,

    /// Set by [`SearchEngine::cleanup`]. A closed engine emits nothing.
    closed: bool,
}

impl<R: Rng> SearchEngine<R> {
    /// Create a [`SearchEngine`] object.
    pub fn new(snapshot: SearchSnapshot, rng: R) -> Self {
        Self {
            snapshot,
            rng,
            pending: None,
            closed: false,
        }
    }

    /// Replace the game data that the next steps read.
    pub fn update_state(&mut self, snapshot: SearchSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &SearchSnapshot {
        &self.snapshot
    }

    /// Token of the step waiting in the scheduler, if any.
    pub fn pending(&self) -> Option<TimerToken> {
        self.pending
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Run a step and return what it produced. The step is not scheduled.
    ///
    /// Without a puzzle, the step does nothing.
    pub fn step(&mut self, step: Step) -> Transition {
        let Self { snapshot, rng, .. } = self;
        let Some(puzzle) = snapshot.puzzle.as_ref() else {
            debug!("No puzzle, ignoring step {step:?}");
            return Transition::default();
        };
        let mut ctx = StepContext {
            puzzle,
            upgrades: snapshot.upgrades,
            rng,
            updates: Vec::new(),
        };

        let next: Option<(Duration, Step)> = match step {
            Step::SelectWord => ctx.select_word(),
            Step::CommitWord { word, skipped } => ctx.commit_word(&word, skipped.as_deref()),
            Step::ResumeScan {
                word,
                direction,
                cell,
            } => ctx.resume_scan(&word, direction, cell),
            Step::CheckLetter {
                word,
                direction,
                position,
                letter_index,
            } => Some(ctx.check_letter(&word, direction, position, letter_index)),
            Step::PuzzleReady => ctx.puzzle_ready(),
        };
        Transition {
            updates: ctx.updates,
            next,
        }
    }

    /// Emit the updates of the transition and schedule its next step.
    fn dispatch<F>(
        &mut self,
        transition: Transition,
        timers: &mut Scheduler<Step>,
        on_update: &mut F,
    ) where
        F: FnMut(SearchUpdate),
    {
        for update in transition.updates {
            on_update(update);
        }
        if let Some((delay, step)) = transition.next {
            let token: TimerToken = timers.schedule(delay, step);
            debug!("Next step {token} in {delay:?}");
            self.pending = Some(token);
        }
    }

    /// Start searching the current puzzle.
    ///
    /// Nothing happens when the game has not started, when there is no puzzle, or after
    /// [`SearchEngine::cleanup`].
    pub fn start_searching<F>(&mut self, timers: &mut Scheduler<Step>, mut on_update: F)
    where
        F: FnMut(SearchUpdate),
    {
        if self.closed {
            debug!("Search engine closed, not starting");
            return;
        }
        if let Some(token) = self.pending
            && timers.is_pending(token)
        {
            warn!("Nancy is already searching (step {token} pending)");
            return;
        }
        if !self.snapshot.started || self.snapshot.puzzle.is_none() {
            debug!("No game in progress, Nancy waits");
            return;
        }
        info!("Nancy starts searching");
        let transition: Transition = self.step(Step::SelectWord);
        self.dispatch(transition, timers, &mut on_update);
    }

    /// Run a step that the scheduler returned.
    ///
    /// Steps that this engine is not waiting for are ignored.
    pub fn resume<F>(
        &mut self,
        token: TimerToken,
        step: Step,
        timers: &mut Scheduler<Step>,
        mut on_update: F,
    ) where
        F: FnMut(SearchUpdate),
    {
        if self.closed || self.pending != Some(token) {
            debug!("Ignoring stale step {token}");
            return;
        }
        self.pending = None;
        let transition: Transition = self.step(step);
        self.dispatch(transition, timers, &mut on_update);
    }

    /// Thank the player for finding a word.
    ///
    /// `was_engine_word` tells whether the word is the one Nancy was looking for.
    pub fn player_found_word<F>(&mut self, word: &str, was_engine_word: bool, mut on_update: F)
    where
        F: FnMut(SearchUpdate),
    {
        if self.closed {
            return;
        }
        debug!("Player found {word}");
        let pool: &[&str] = if was_engine_word {
            phrases::FOUND_MY_WORD
        } else {
            phrases::FOUND_OTHER_WORD
        };
        on_update(SearchUpdate::narration(phrases::pick(pool, &mut self.rng)));
    }

    /// Stop searching. The engine emits nothing afterwards.
    pub fn cleanup(&mut self, timers: &mut Scheduler<Step>) {
        if let Some(token) = self.pending.take() {
            timers.cancel(token);
        }
        self.closed = true;
        debug!("Search engine closed");
    }
}
