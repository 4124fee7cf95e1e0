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
//! Ship placement for a Battleship setup screen whose layout is submitted to a backend
//! for proving.
//!
//! [`session::SelectionSession`] ties the pieces together: the player picks a ship
//! ([`ships::ShipSelection`]), hovers cells to preview where it would go
//! ([`ships::compute_placement`]) and confirms to commit the preview into the
//! [`board::OccupancyGrid`]. The grid's [`board::Layout`] snapshot is what gets sent
//! through a [`proof::ProofBackend`].

pub mod board;
pub mod proof;
pub mod session;
pub mod ships;
