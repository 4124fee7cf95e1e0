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
//! Types used for choosing a ship and projecting it onto the board.

use crate::board::{Coordinate, SetupError};

pub use self::placement::{compute_placement, Placement};

mod placement;

/// Axis along which a ship extends.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship covers consecutive columns of one row.
    Horizontal,
    /// The ship covers consecutive rows of one column.
    Vertical,
}

/// The standard fleet offered by the ship picker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShipClass {
    /// Carrier: length 5.
    Carrier,
    /// Battleship: length 4.
    Battleship,
    /// Cruiser: length 3.
    Cruiser,
    /// Submarine: length 3.
    Submarine,
    /// Destroyer: length 2.
    Destroyer,
}

impl ShipClass {
    /// Every class, largest first.
    pub const ALL: &'static [ShipClass] = &[
        ShipClass::Carrier,
        ShipClass::Battleship,
        ShipClass::Cruiser,
        ShipClass::Submarine,
        ShipClass::Destroyer,
    ];

    /// Get the length of this ship type.
    pub fn len(self) -> usize {
        match self {
            ShipClass::Carrier => 5,
            ShipClass::Battleship => 4,
            ShipClass::Cruiser => 3,
            ShipClass::Submarine => 3,
            ShipClass::Destroyer => 2,
        }
    }
}

/// The currently chosen ship: its orientation and size.
///
/// An unset orientation means nothing is selected; such a selection never covers any
/// cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ShipSelection {
    /// Axis of the ship, or `None` if no ship is selected.
    pub orientation: Option<Orientation>,
    /// Number of cells the ship covers.
    pub size: usize,
}

impl ShipSelection {
    /// The empty selection.
    pub const NONE: ShipSelection = ShipSelection {
        orientation: None,
        size: 0,
    };

    /// Select a ship of the given orientation and size. Fails with
    /// [`SetupError::InvalidSelection`] if `size` is 0.
    pub fn new(orientation: Orientation, size: usize) -> Result<Self, SetupError> {
        if size == 0 {
            Err(SetupError::InvalidSelection(size))
        } else {
            Ok(Self {
                orientation: Some(orientation),
                size,
            })
        }
    }

    /// Select one of the standard ships.
    pub fn of_class(class: ShipClass, orientation: Orientation) -> Self {
        Self {
            orientation: Some(orientation),
            size: class.len(),
        }
    }

    /// Whether this selection names a ship at all.
    pub fn is_active(&self) -> bool {
        self.orientation.is_some() && self.size > 0
    }

    /// Cells this ship would cover if its last cell sat on `hovered`. See
    /// [`compute_placement`].
    pub fn project(&self, hovered: Coordinate) -> Placement {
        compute_placement(hovered, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            ShipSelection::new(Orientation::Vertical, 0),
            Err(SetupError::InvalidSelection(0))
        );
        let sel = ShipSelection::new(Orientation::Vertical, 1).unwrap();
        assert!(sel.is_active());
        assert!(!ShipSelection::NONE.is_active());
        assert_eq!(ShipSelection::default(), ShipSelection::NONE);
    }

    #[test]
    fn classes_have_standard_lengths() {
        let lens: Vec<_> = ShipClass::ALL.iter().map(|c| c.len()).collect();
        assert_eq!(lens, vec![5, 4, 3, 3, 2]);
        assert_eq!(
            ShipSelection::of_class(ShipClass::Destroyer, Orientation::Horizontal).size,
            2
        );
    }
}
