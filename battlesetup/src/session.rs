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
//! The selection session: the chosen ship, the preview under the cursor, and the grid
//! that confirmed previews are committed into.

use log::{debug, trace};

use crate::{
    board::{Coordinate, Layout, OccupancyGrid, SetupError},
    ships::{Orientation, Placement, ShipClass, ShipSelection},
};

/// Where the session is in the select/hover/confirm cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SessionState {
    /// No ship is selected.
    Idle,
    /// A ship is selected and nothing is hovered.
    Selecting,
    /// A ship is selected and a preview is shown for the hovered cell.
    Previewing,
}

/// Drives ship placement for one setup screen.
///
/// The session is the only writer of its [`OccupancyGrid`]. The selection is kept after
/// each confirmed placement, so the same ship can be placed repeatedly.
#[derive(Debug, Clone, Default)]
pub struct SelectionSession {
    /// Grid of committed ships.
    grid: OccupancyGrid,

    /// Currently chosen ship.
    selection: ShipSelection,

    /// Hovered cell and the preview computed for it, while hovering.
    hover: Option<(Coordinate, Placement)>,
}

impl SelectionSession {
    /// Start a session with an empty grid and nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the session.
    pub fn state(&self) -> SessionState {
        if !self.selection.is_active() {
            SessionState::Idle
        } else if self.hover.is_some() {
            SessionState::Previewing
        } else {
            SessionState::Selecting
        }
    }

    /// The current selection.
    pub fn selection(&self) -> &ShipSelection {
        &self.selection
    }

    /// The hovered cell, if any.
    pub fn hovered(&self) -> Option<Coordinate> {
        self.hover.as_ref().map(|(coord, _)| *coord)
    }

    /// The current preview. Empty when nothing is hovered.
    pub fn preview(&self) -> &[Coordinate] {
        match &self.hover {
            Some((_, preview)) => &preview[..],
            None => &[],
        }
    }

    /// The grid of committed ships.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// Snapshot the grid for submission.
    pub fn snapshot(&self) -> Layout {
        self.grid.serialize()
    }

    /// Select a ship, replacing any previous selection and clearing any preview. Fails
    /// with [`SetupError::InvalidSelection`] if `size` is 0, leaving the session as it
    /// was.
    pub fn choose_ship(&mut self, orientation: Orientation, size: usize) -> Result<(), SetupError> {
        let selection = ShipSelection::new(orientation, size)?;
        self.select(selection);
        Ok(())
    }

    /// Select one of the standard ships. Same as [`choose_ship`][Self::choose_ship]
    /// with the class length.
    pub fn choose_class(&mut self, class: ShipClass, orientation: Orientation) {
        self.select(ShipSelection::of_class(class, orientation));
    }

    fn select(&mut self, selection: ShipSelection) {
        debug!("selected {:?}", selection);
        self.selection = selection;
        self.hover = None;
    }

    /// Hover over a cell, recomputing the preview for it.
    ///
    /// While nothing is selected the preview is empty and the session stays idle.
    pub fn hover_enter(&mut self, cell: Coordinate) -> &[Coordinate] {
        let preview = self.selection.project(cell);
        trace!("hover {} -> {:?}", cell, preview.cell_ids());
        if self.selection.is_active() {
            self.hover = Some((cell, preview));
        } else {
            self.hover = None;
        }
        self.preview()
    }

    /// Hover over the cell with the given identifier. Fails with
    /// [`SetupError::InvalidCellId`] without touching the session if the identifier is
    /// malformed.
    pub fn hover_cell(&mut self, id: &str) -> Result<&[Coordinate], SetupError> {
        let cell = Coordinate::decode(id)?;
        Ok(self.hover_enter(cell))
    }

    /// Stop hovering, clearing the preview.
    pub fn hover_exit(&mut self) {
        if let Some((cell, _)) = self.hover.take() {
            trace!("hover exit {}", cell);
        }
    }

    /// Commit the current preview to the grid and return to selecting. Returns the
    /// committed cells.
    ///
    /// Outside of previewing this commits nothing and returns an empty placement. An
    /// empty preview commits an empty set.
    pub fn confirm(&mut self) -> Result<Placement, SetupError> {
        let (cell, preview) = match self.hover.take() {
            Some(hover) => hover,
            None => return Ok(Placement::empty()),
        };
        if let Err(err) = self.grid.commit(&preview) {
            self.hover = Some((cell, preview));
            return Err(err);
        }
        debug!("placed ship at {:?}", preview.cell_ids());
        Ok(preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(id: &str) -> Coordinate {
        id.parse().unwrap()
    }

    #[test]
    fn starts_idle_and_empty() {
        let session = SelectionSession::new();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.preview().is_empty());
        assert_eq!(session.snapshot(), OccupancyGrid::new().serialize());
    }

    #[test]
    fn walks_through_states() {
        let mut session = SelectionSession::new();
        session.choose_ship(Orientation::Vertical, 3).unwrap();
        assert_eq!(session.state(), SessionState::Selecting);

        let preview: Vec<_> = session.hover_enter(at("c6")).to_vec();
        assert_eq!(preview, vec![at("c4"), at("c5"), at("c6")]);
        assert_eq!(session.state(), SessionState::Previewing);
        assert_eq!(session.hovered(), Some(at("c6")));

        // Moving to another cell recomputes.
        session.hover_enter(at("d2"));
        assert_eq!(session.preview(), &[at("d1"), at("d2")][..]);

        session.hover_exit();
        assert_eq!(session.state(), SessionState::Selecting);
        assert!(session.preview().is_empty());
        assert_eq!(session.grid().occupied_count(), 0);
    }

    #[test]
    fn confirm_commits_and_keeps_selection() {
        let mut session = SelectionSession::new();
        session.choose_class(ShipClass::Destroyer, Orientation::Horizontal);
        session.hover_enter(at("e5"));
        let placed = session.confirm().unwrap();
        assert_eq!(placed.cell_ids(), vec!["d5", "e5"]);
        assert_eq!(session.state(), SessionState::Selecting);
        assert_eq!(session.selection().size, 2);

        // Same ship again elsewhere.
        session.hover_enter(at("b9"));
        session.confirm().unwrap();
        assert_eq!(session.grid().occupied_count(), 4);
    }

    #[test]
    fn confirm_without_preview_commits_nothing() {
        let mut session = SelectionSession::new();
        assert!(session.confirm().unwrap().is_empty());
        session.choose_ship(Orientation::Horizontal, 2).unwrap();
        assert!(session.confirm().unwrap().is_empty());
        session.hover_enter(at("e5"));
        session.hover_exit();
        assert!(session.confirm().unwrap().is_empty());
        assert_eq!(session.grid().occupied_count(), 0);
    }

    #[test]
    fn hover_while_idle_stays_idle() {
        let mut session = SelectionSession::new();
        assert!(session.hover_enter(at("e5")).is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn choosing_replaces_selection_and_clears_preview() {
        let mut session = SelectionSession::new();
        session.choose_ship(Orientation::Horizontal, 2).unwrap();
        session.hover_enter(at("e5"));
        session.choose_ship(Orientation::Vertical, 4).unwrap();
        assert_eq!(session.state(), SessionState::Selecting);
        assert_eq!(
            *session.selection(),
            ShipSelection::new(Orientation::Vertical, 4).unwrap()
        );
    }

    #[test]
    fn invalid_input_leaves_session_alone() {
        let mut session = SelectionSession::new();
        session.choose_ship(Orientation::Horizontal, 2).unwrap();
        session.hover_enter(at("e5"));

        assert_eq!(
            session.choose_ship(Orientation::Vertical, 0),
            Err(SetupError::InvalidSelection(0))
        );
        assert_eq!(
            session.hover_cell("k4"),
            Err(SetupError::InvalidCellId("k4".to_owned()))
        );
        assert_eq!(session.state(), SessionState::Previewing);
        assert_eq!(session.preview(), &[at("d5"), at("e5")][..]);
    }

    #[test]
    fn clipped_preview_is_committed_as_shown() {
        let mut session = SelectionSession::new();
        session.choose_ship(Orientation::Horizontal, 4).unwrap();
        session.hover_cell("b1").unwrap();
        session.confirm().unwrap();
        let occupied: Vec<_> = session.snapshot().occupied().collect();
        assert_eq!(occupied, vec![at("a1"), at("b1")]);
    }
}
