/*
position.rs

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

//! Grid coordinates and the eight search directions.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Number of directions in which a word can be written.
pub const DIRECTION_COUNT: usize = 8;

/// Cell coordinates in a square grid. Row 0 is the top row, column 0 the leftmost column.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the position is inside a grid of the given size.
    pub fn is_inside(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Return the position that is `distance` cells away in the given direction.
    ///
    /// Return `None` if that position is outside a `size` x `size` grid.
    pub fn offset(self, direction: Direction, distance: usize, size: usize) -> Option<Self> {
        let (delta_row, delta_col) = direction.delta();
        let distance: isize = isize::try_from(distance).ok()?;
        let row: isize = isize::try_from(self.row).ok()? + delta_row * distance;
        let col: isize = isize::try_from(self.col).ok()? + delta_col * distance;

        if row < 0 || col < 0 {
            return None;
        }
        let position = Self::new(row as usize, col as usize);
        if position.is_inside(size) {
            Some(position)
        } else {
            None
        }
    }
}

/// Display the position with 1-based coordinates, the way players count rows and columns.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

/// Compass direction in which a word is written.
///
/// The declaration order is the order in which Nancy scans the directions.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    FromRepr,
    Default,
)]
#[repr(usize)]
pub enum Direction {
    #[default]
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "N")]
    North,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "NW")]
    NorthWest,
}

impl Direction {
    /// All the directions, in scan order.
    pub const ALL: [Direction; DIRECTION_COUNT] = [
        Direction::East,
        Direction::South,
        Direction::North,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Unit vector of the direction, as `(row delta, column delta)`.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Lowercase name used in narration.
    pub fn name(self) -> &'static str {
        match self {
            Direction::East => "east",
            Direction::South => "south",
            Direction::North => "north",
            Direction::West => "west",
            Direction::NorthEast => "northeast",
            Direction::SouthEast => "southeast",
            Direction::SouthWest => "southwest",
            Direction::NorthWest => "northwest",
        }
    }

    /// Compass abbreviation ("E", "NE", ...).
    pub fn symbol(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::South => "S",
            Direction::North => "N",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::NorthWest => "NW",
        }
    }

    /// Index of the direction in the scan order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pick a direction uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Direction::from_repr(rng.random_range(0..DIRECTION_COUNT)).unwrap_or_default()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scan_order_matches_repr() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), i);
            assert_eq!(Direction::from_repr(i), Some(*direction));
        }
        assert_eq!(Direction::from_repr(DIRECTION_COUNT), None);
    }

    #[test]
    fn test_deltas_are_unit_vectors() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert!(dr != 0 || dc != 0);
        }
    }

    #[test]
    fn test_offset_inside_and_outside() {
        let p = Position::new(2, 2);
        assert_eq!(p.offset(Direction::East, 2, 5), Some(Position::new(2, 4)));
        assert_eq!(p.offset(Direction::East, 3, 5), None);
        assert_eq!(p.offset(Direction::NorthWest, 2, 5), Some(Position::new(0, 0)));
        assert_eq!(p.offset(Direction::NorthWest, 3, 5), None);
        assert_eq!(p.offset(Direction::SouthWest, 0, 5), Some(p));
        assert_eq!(Position::new(7, 0).offset(Direction::South, 0, 5), None);
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 3).to_string(), "(1, 4)");
        assert_eq!(Direction::SouthWest.to_string(), "southwest");
    }

    #[test]
    fn test_serialized_as_symbol() {
        let json = serde_json::to_string(&Direction::NorthEast).unwrap();
        assert_eq!(json, "\"NE\"");
        let direction: Direction = serde_json::from_str("\"W\"").unwrap();
        assert_eq!(direction, Direction::West);
        for direction in Direction::ALL {
            let json = serde_json::to_string(&direction).unwrap();
            assert_eq!(json, format!("\"{}\"", direction.symbol()));
        }
    }

    #[test]
    fn test_random_covers_all_directions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; DIRECTION_COUNT];
        for _ in 0..500 {
            seen[Direction::random(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
