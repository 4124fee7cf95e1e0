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
//! Projection of a selected ship onto the cells under the cursor.

use std::ops::Deref;

use crate::{
    board::{Coordinate, BOARD_SIZE},
    ships::{Orientation, ShipSelection},
};

/// Ordered cells covered by a ship, ascending along the ship's axis. Possibly shorter
/// than the ship if it was clipped at the board edge, and possibly empty.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Placement(Vec<Coordinate>);

impl Placement {
    /// A placement covering no cells.
    pub fn empty() -> Self {
        Placement(Vec::new())
    }

    /// Whether the placement covers every cell of the selected ship, i.e. it was not
    /// clipped by the board edge.
    pub fn is_complete(&self, selection: &ShipSelection) -> bool {
        selection.is_active() && self.len() == selection.size
    }

    /// Cell identifiers of the covered cells, in order.
    pub fn cell_ids(&self) -> Vec<String> {
        self.iter().map(|coord| coord.to_string()).collect()
    }

    /// Extract the covered coordinates.
    pub fn into_inner(self) -> Vec<Coordinate> {
        self.0
    }
}

impl Deref for Placement {
    type Target = [Coordinate];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Compute the cells a ship of the given selection covers when hovered at `hovered`.
///
/// The hovered cell is the ship's last cell: the ship extends from it toward lower
/// indexes along its axis. Cells that would fall before index 0 are dropped rather
/// than rejected, so near the top and left edges the result is shorter than the ship.
/// An unset orientation or a zero size gives an empty placement.
pub fn compute_placement(hovered: Coordinate, selection: &ShipSelection) -> Placement {
    let orientation = match selection.orientation {
        Some(orientation) if selection.size > 0 => orientation,
        _ => return Placement::empty(),
    };
    let (fixed, along) = match orientation {
        Orientation::Vertical => (hovered.column, hovered.row),
        Orientation::Horizontal => (hovered.row, hovered.column),
    };
    if fixed >= BOARD_SIZE {
        return Placement::empty();
    }
    // Cells `i` with `along - size < i <= along`, clipped to the board.
    let first = along.saturating_add(1).saturating_sub(selection.size);
    let last = along.min(BOARD_SIZE - 1);
    if first > last {
        return Placement::empty();
    }
    Placement(
        (first..=last)
            .map(|i| match orientation {
                Orientation::Vertical => Coordinate::new(fixed, i),
                Orientation::Horizontal => Coordinate::new(i, fixed),
            })
            .collect(),
    )
}
