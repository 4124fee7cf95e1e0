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
//! The serialized occupancy grid sent to the prover.

use serde::{Deserialize, Serialize};

use crate::board::{Coordinate, LayoutError, BOARD_SIZE};

/// Snapshot of the occupancy grid in the backend's wire format: a 10x10 array of 0/1
/// where the outer index is the column and the inner index is the row.
///
/// Serializes to JSON as a bare nested array. Deserializing checks the shape and that
/// every cell is 0 or 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Layout([[u8; BOARD_SIZE]; BOARD_SIZE]);

impl Layout {
    /// Wrap an array of columns. Values other than 0 and 1 are not checked here; this
    /// is only used with arrays produced by the grid.
    pub(crate) fn from_columns(columns: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Layout(columns)
    }

    /// The raw column-major array.
    pub fn columns(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.0
    }

    /// Value of the given cell, or `None` if the coordinate is out of bounds.
    pub fn get(&self, coord: &Coordinate) -> Option<u8> {
        if coord.in_bounds() {
            Some(self.0[coord.column][coord.row])
        } else {
            None
        }
    }

    /// Iterate the occupied cells, column by column.
    pub fn occupied(&self) -> impl '_ + Iterator<Item = Coordinate> {
        self.0.iter().enumerate().flat_map(|(column, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &v)| v == 1)
                .map(move |(row, _)| Coordinate::new(column, row))
        })
    }

    /// The input string handed to the prover: `b` followed by the 100 cell digits,
    /// column by column.
    pub fn prover_input(&self) -> String {
        let mut out = String::with_capacity(1 + BOARD_SIZE * BOARD_SIZE);
        out.push('b');
        for &v in self.0.iter().flatten() {
            out.push(if v == 1 { '1' } else { '0' });
        }
        out
    }
}

impl TryFrom<Vec<Vec<u8>>> for Layout {
    type Error = LayoutError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::ColumnCount(rows.len()));
        }
        let mut columns = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (column, cells) in rows.iter().enumerate() {
            if cells.len() != BOARD_SIZE {
                return Err(LayoutError::ColumnLength {
                    column,
                    len: cells.len(),
                });
            }
            for (row, &value) in cells.iter().enumerate() {
                if value > 1 {
                    return Err(LayoutError::CellValue {
                        coord: Coordinate::new(column, row),
                        value,
                    });
                }
                columns[column][row] = value;
            }
        }
        Ok(Layout(columns))
    }
}

impl From<Layout> for Vec<Vec<u8>> {
    fn from(layout: Layout) -> Self {
        layout.0.iter().map(|column| column.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_with(ids: &[&str]) -> Layout {
        let mut columns = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for id in ids {
            let c: Coordinate = id.parse().unwrap();
            columns[c.column][c.row] = 1;
        }
        Layout::from_columns(columns)
    }

    #[test]
    fn json_is_a_bare_nested_array() {
        let layout = layout_with(&["a2"]);
        let json = serde_json::to_value(&layout).unwrap();
        let columns = json.as_array().unwrap();
        assert_eq!(columns.len(), 10);
        assert_eq!(columns[0][1], 1);
        assert_eq!(columns[0][0], 0);
        assert_eq!(columns[1][0], 0);
    }

    #[test]
    fn parses_backend_shaped_json() {
        let layout = layout_with(&["d5", "e5"]);
        let text = serde_json::to_string(&layout).unwrap();
        let parsed: Layout = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, layout);
        assert_eq!(
            parsed.occupied().collect::<Vec<_>>(),
            vec![Coordinate::new(3, 4), Coordinate::new(4, 4)]
        );
    }

    #[test]
    fn rejects_wrong_shapes() {
        assert_eq!(
            Layout::try_from(vec![vec![0; 10]; 9]),
            Err(LayoutError::ColumnCount(9))
        );
        let mut rows = vec![vec![0; 10]; 10];
        rows[3].pop();
        assert_eq!(
            Layout::try_from(rows),
            Err(LayoutError::ColumnLength { column: 3, len: 9 })
        );
        let mut rows = vec![vec![0; 10]; 10];
        rows[2][7] = 2;
        assert_eq!(
            Layout::try_from(rows),
            Err(LayoutError::CellValue {
                coord: Coordinate::new(2, 7),
                value: 2
            })
        );
        assert!(serde_json::from_str::<Layout>("[[1],[2],[3]]").is_err());
    }

    #[test]
    fn prover_input_is_column_major_digits() {
        let input = layout_with(&["a2", "b1"]).prover_input();
        assert_eq!(input.len(), 101);
        assert!(input.starts_with("b01000000001"));
        assert_eq!(input.matches('1').count(), 2);
    }
}
