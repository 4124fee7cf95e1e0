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
//! The occupancy grid: the authoritative record of which cells hold a placed ship.

use std::ops::Index;

use log::debug;

use crate::board::{Coordinate, Layout, SetupError, BOARD_SIZE};

/// 10x10 occupancy grid. Cells only ever go from free to occupied.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OccupancyGrid {
    /// Cells that make up this board, in board enumeration order.
    cells: Box<[bool]>,
}

impl OccupancyGrid {
    /// Create a grid with every cell free.
    pub fn new() -> Self {
        Self {
            cells: vec![false; BOARD_SIZE * BOARD_SIZE].into_boxed_slice(),
        }
    }

    /// Whether the given cell is occupied. Returns `None` if the coordinate is out of
    /// bounds.
    pub fn get(&self, coord: &Coordinate) -> Option<bool> {
        coord.index().and_then(|i| self.cells.get(i)).copied()
    }

    /// Whether the given cell is occupied. Off-board cells are never occupied.
    pub fn is_occupied(&self, coord: &Coordinate) -> bool {
        self.get(coord).unwrap_or(false)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Mark every given cell as occupied. Cells that are already occupied stay
    /// occupied.
    ///
    /// All coordinates are checked before anything is written, so if any of them is
    /// off the board this returns [`SetupError::OutOfBounds`] and the grid is left
    /// unchanged.
    pub fn commit(&mut self, cells: &[Coordinate]) -> Result<(), SetupError> {
        let indexes = cells
            .iter()
            .map(|coord| coord.index().ok_or(SetupError::OutOfBounds(*coord)))
            .collect::<Result<Vec<_>, _>>()?;
        for i in indexes {
            self.cells[i] = true;
        }
        debug!(
            "committed {} cells, {} occupied",
            cells.len(),
            self.occupied_count()
        );
        Ok(())
    }

    /// Snapshot the grid into the submission layout, outer index = column.
    pub fn serialize(&self) -> Layout {
        let mut columns = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for coord in Coordinate::all() {
            if self[coord] {
                columns[coord.column][coord.row] = 1;
            }
        }
        Layout::from_columns(columns)
    }

    /// Get an iterator over the grid. The iterator's item is another iterator that
    /// iterates over a single row, yielding each coordinate and whether it is occupied.
    pub fn iter_rows<'a>(
        &'a self,
    ) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = (Coordinate, bool)>> {
        Coordinate::iter_rows().map(move |row| row.map(move |coord| (coord, self[coord])))
    }
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coordinate> for OccupancyGrid {
    type Output = bool;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        match coord.index() {
            Some(i) => &self.cells[i],
            None => panic!("{:?} is out of bounds", coord),
        }
    }
}
