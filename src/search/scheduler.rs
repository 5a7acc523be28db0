/*
scheduler.rs

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

//! Timer queue on a virtual clock.
//!
//! The [`Scheduler`] object stores tasks with the time they are due.
//! [`Scheduler::pop_next`] returns the earliest task and moves the clock forward to its due time.
//! Tasks that are due at the same time come out in the order they were scheduled.
//!
//! The clock only moves when a task is popped.
//! A driver that plays in real time sleeps until [`Scheduler::next_due`] before popping.

use log::debug;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeSet, BinaryHeap};
use std::fmt;
use std::time::Duration;

/// Handle returned when scheduling a task. Use it to cancel the task.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Queued task.
#[derive(Debug)]
struct Timer<T> {
    due: Duration,
    token: TimerToken,
    task: T,
}

/// Ordering: (due ASC, token ASC). Tokens increase, so ties keep the scheduling order.
impl<T> Ord for Timer<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due
            .cmp(&other.due)
            .then_with(|| self.token.cmp(&other.token))
    }
}

impl<T> PartialOrd for Timer<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for Timer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl<T> Eq for Timer<T> {}

/// Virtual-clock timer queue.
#[derive(Debug)]
pub struct Scheduler<T> {
    queue: BinaryHeap<Reverse<Timer<T>>>,

    /// Tokens of the tasks that are neither popped nor cancelled.
    /// Cancelled tasks stay in the queue until they reach the top, where they are discarded.
    outstanding: BTreeSet<TimerToken>,

    /// Current time, from the creation of the scheduler.
    now: Duration,

    next_token: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create a [`Scheduler`] object with its clock at zero.
    pub fn new() -> Self {
        Self {
            queue: BinaryHeap::new(),
            outstanding: BTreeSet::new(),
            now: Duration::ZERO,
            next_token: 0,
        }
    }

    /// Current time of the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue a task that is due `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.queue.push(Reverse(Timer {
            due: self.now + delay,
            token,
            task,
        }));
        self.outstanding.insert(token);
        token
    }

    /// Cancel a task.
    ///
    /// Return `false` if the task was already popped or cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let cancelled: bool = self.outstanding.remove(&token);
        if cancelled {
            debug!("Timer {token} cancelled");
        }
        cancelled
    }

    /// Tokens of the tasks still waiting, in scheduling order.
    pub fn outstanding(&self) -> impl Iterator<Item = TimerToken> + '_ {
        self.outstanding.iter().copied()
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.outstanding.contains(&token)
    }

    /// Number of tasks still waiting.
    pub fn len(&self) -> usize {
        self.outstanding.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outstanding.is_empty()
    }

    /// Drop the cancelled tasks from the top of the queue.
    fn purge(&mut self) {
        while let Some(Reverse(timer)) = self.queue.peek() {
            if self.outstanding.contains(&timer.token) {
                break;
            }
            self.queue.pop();
        }
    }

    /// Due time of the next task, without popping it.
    pub fn next_due(&mut self) -> Option<Duration> {
        self.purge();
        self.queue.peek().map(|Reverse(timer)| timer.due)
    }

    /// Pop the next task and advance the clock to its due time.
    ///
    /// Return `None` when no task is waiting.
    pub fn pop_next(&mut self) -> Option<(TimerToken, T)> {
        self.purge();
        let Reverse(timer) = self.queue.pop()?;
        self.outstanding.remove(&timer.token);
        if timer.due > self.now {
            self.now = timer.due;
        }
        Some((timer.token, timer.task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_pop_in_due_order() {
        let mut scheduler: Scheduler<&str> = Scheduler::new();
        scheduler.schedule(ms(300), "c");
        scheduler.schedule(ms(100), "a");
        scheduler.schedule(ms(200), "b");

        assert_eq!(scheduler.next_due(), Some(ms(100)));
        assert_eq!(scheduler.pop_next().map(|(_, t)| t), Some("a"));
        assert_eq!(scheduler.now(), ms(100));
        assert_eq!(scheduler.pop_next().map(|(_, t)| t), Some("b"));
        assert_eq!(scheduler.pop_next().map(|(_, t)| t), Some("c"));
        assert_eq!(scheduler.now(), ms(300));
        assert_eq!(scheduler.pop_next(), None);
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut scheduler: Scheduler<u32> = Scheduler::new();
        for i in 0..10 {
            scheduler.schedule(Duration::ZERO, i);
        }
        let order: Vec<u32> = std::iter::from_fn(|| scheduler.pop_next().map(|(_, t)| t)).collect();
        assert_eq!(order, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_delays_are_relative_to_now() {
        let mut scheduler: Scheduler<&str> = Scheduler::new();
        scheduler.schedule(ms(500), "first");
        scheduler.pop_next();
        scheduler.schedule(ms(500), "second");
        assert_eq!(scheduler.next_due(), Some(ms(1000)));
    }

    #[test]
    fn test_cancelled_tasks_never_run() {
        let mut scheduler: Scheduler<&str> = Scheduler::new();
        let a = scheduler.schedule(ms(100), "a");
        let b = scheduler.schedule(ms(200), "b");

        assert!(scheduler.cancel(a));
        assert!(!scheduler.cancel(a));
        assert!(!scheduler.is_pending(a));
        assert_eq!(scheduler.outstanding().collect::<Vec<_>>(), vec![b]);
        assert_eq!(scheduler.len(), 1);

        assert_eq!(scheduler.next_due(), Some(ms(200)));
        assert_eq!(scheduler.pop_next(), Some((b, "b")));
        assert!(!scheduler.cancel(b));
        assert!(scheduler.is_empty());
    }
}
