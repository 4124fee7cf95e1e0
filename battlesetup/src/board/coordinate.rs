// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Cell coordinates and their textual identifiers (`a1` through `j10`).
use std::{fmt, str::FromStr};

use crate::board::{SetupError, BOARD_SIZE};

/// Letters naming the columns of the board, in column order.
pub const COLUMN_LETTERS: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// The coordinates of a cell on the board.
///
/// A coordinate is just a point. Whether it is actually on the board is checked with
/// [`Coordinate::in_bounds`]; everything produced by [`Coordinate::decode`] or by the
/// board enumeration is in bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Column of the cell. Column 0 is `a`.
    pub column: usize,
    /// Zero-based row of the cell. Row 0 is displayed as `1`.
    pub row: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `column` and `row`.
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Whether this coordinate lies on the 10x10 board.
    pub fn in_bounds(&self) -> bool {
        self.column < BOARD_SIZE && self.row < BOARD_SIZE
    }

    /// Parse a cell identifier such as `c6` into a coordinate.
    ///
    /// The identifier must be a lowercase column letter `a`..`j` followed by a row
    /// number `1`..`10` written without sign or leading zeros.
    pub fn decode(id: &str) -> Result<Self, SetupError> {
        let invalid = || SetupError::InvalidCellId(id.to_owned());

        let mut chars = id.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let column = COLUMN_LETTERS
            .iter()
            .position(|&c| c == letter)
            .ok_or_else(invalid)?;

        let number = chars.as_str();
        if number.is_empty()
            || number.starts_with('0')
            || !number.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        match number.parse::<usize>() {
            Ok(n) if (1..=BOARD_SIZE).contains(&n) => Ok(Self::new(column, n - 1)),
            _ => Err(invalid()),
        }
    }

    /// Produce the cell identifier for this coordinate. Fails if the coordinate is off
    /// the board.
    pub fn encode(&self) -> Result<String, SetupError> {
        if self.in_bounds() {
            Ok(format!("{}{}", COLUMN_LETTERS[self.column], self.row + 1))
        } else {
            Err(SetupError::OutOfBounds(*self))
        }
    }

    /// Linear index of this cell in board enumeration order, `row * 10 + column`.
    /// Returns `None` for coordinates off the board.
    pub fn index(&self) -> Option<usize> {
        if self.in_bounds() {
            Some(self.row * BOARD_SIZE + self.column)
        } else {
            None
        }
    }

    /// Inverse of [`Coordinate::index`]. Returns `None` if `idx` is not below 100.
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx < BOARD_SIZE * BOARD_SIZE {
            Some(Self::new(idx % BOARD_SIZE, idx / BOARD_SIZE))
        } else {
            None
        }
    }

    /// Iterate every cell on the board in enumeration order: the column varies
    /// fastest, so `a1, b1, ..., j1, a2, ...`.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|idx| Self::new(idx % BOARD_SIZE, idx / BOARD_SIZE))
    }

    /// Get an iterator over rows of the board. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_rows() -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        (0..BOARD_SIZE).map(|row| (0..BOARD_SIZE).map(move |column| Self::new(column, row)))
    }
}

impl FromStr for Coordinate {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.encode() {
            Ok(id) => f.pad(&id),
            Err(_) => write!(f, "({}, {})", self.column, self.row),
        }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(column, row)` pair.
    fn from((column, row): (usize, usize)) -> Self {
        Self::new(column, row)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(column, row)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.column, coord.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reads_letter_and_number() {
        assert_eq!(Coordinate::decode("a1").unwrap(), Coordinate::new(0, 0));
        assert_eq!(Coordinate::decode("c6").unwrap(), Coordinate::new(2, 5));
        assert_eq!(Coordinate::decode("j10").unwrap(), Coordinate::new(9, 9));
    }

    #[test]
    fn decode_rejects_malformed_ids() {
        for id in &["", "a", "k1", "A1", "a0", "a11", "a01", "a+1", "1a", "aa1", "b-3", "c 4"] {
            match Coordinate::decode(id) {
                Err(SetupError::InvalidCellId(bad)) => assert_eq!(&bad, id),
                other => panic!("{:?} decoded to {:?}", id, other),
            }
        }
    }

    #[test]
    fn every_cell_id_round_trips() {
        let mut count = 0;
        for letter in COLUMN_LETTERS.iter() {
            for number in 1..=BOARD_SIZE {
                let id = format!("{}{}", letter, number);
                let coord: Coordinate = id.parse().unwrap();
                assert_eq!(coord.encode().unwrap(), id);
                count += 1;
            }
        }
        assert_eq!(count, 100);
    }

    #[test]
    fn every_coordinate_round_trips() {
        for coord in Coordinate::all() {
            let id = coord.encode().unwrap();
            assert_eq!(Coordinate::decode(&id), Ok(coord));
        }
    }

    #[test]
    fn encode_rejects_off_board() {
        assert_eq!(
            Coordinate::new(10, 0).encode(),
            Err(SetupError::OutOfBounds(Coordinate::new(10, 0)))
        );
        assert_eq!(Coordinate::new(3, 12).to_string(), "(3, 12)");
        assert_eq!(Coordinate::new(3, 1).to_string(), "d2");
    }

    #[test]
    fn enumeration_matches_index() {
        let all: Vec<_> = Coordinate::all().collect();
        assert_eq!(all.len(), 100);
        assert_eq!(all[0].to_string(), "a1");
        assert_eq!(all[1].to_string(), "b1");
        assert_eq!(all[10].to_string(), "a2");
        assert_eq!(all[99].to_string(), "j10");
        for (i, coord) in all.iter().enumerate() {
            assert_eq!(coord.index(), Some(i));
            assert_eq!(Coordinate::from_index(i), Some(*coord));
        }
        assert_eq!(Coordinate::from_index(100), None);
        assert_eq!(Coordinate::new(0, 10).index(), None);
    }

    #[test]
    fn rows_follow_enumeration() {
        let flat: Vec<_> = Coordinate::iter_rows().flatten().collect();
        assert_eq!(flat, Coordinate::all().collect::<Vec<_>>());
    }
}
