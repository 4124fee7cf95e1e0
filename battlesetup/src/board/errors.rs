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
//! Errors used by the board, the placement calculator and the selection session.

use thiserror::Error;

use crate::board::Coordinate;

/// Error raised by a setup interaction. Every variant is recoverable: the caller should
/// treat the interaction that caused it as a no-op.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum SetupError {
    /// The text did not name a cell on the board.
    #[error("invalid cell id {0:?}, expected a letter a-j followed by a number 1-10")]
    InvalidCellId(String),
    /// A coordinate outside the 10x10 board was given to an operation that requires an
    /// on-board cell.
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Coordinate),
    /// The ship size was not positive.
    #[error("invalid ship selection: size must be at least 1, got {0}")]
    InvalidSelection(usize),
}

/// Reason why a serialized layout was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum LayoutError {
    /// The layout did not have exactly ten columns.
    #[error("layout must have 10 columns, got {0}")]
    ColumnCount(usize),
    /// One of the columns did not have exactly ten cells.
    #[error("column {column} must have 10 cells, got {len}")]
    ColumnLength {
        /// Index of the offending column.
        column: usize,
        /// Number of cells it had.
        len: usize,
    },
    /// A cell held something other than 0 or 1.
    #[error("cell {coord} must be 0 or 1, got {value}")]
    CellValue {
        /// Coordinate of the offending cell.
        coord: Coordinate,
        /// The value found there.
        value: u8,
    },
}
