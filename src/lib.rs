/*
lib.rs

Copyright 2025 Hervé Quatremain

This file is part of Arcgrid.

Arcgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Arcgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Arcgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Data model of ARC grid puzzles.
//!
//! The [`grid::Grid`] object is a board of color indexes with bounds-checked access, resize,
//! and flood fill. Its limits come from a [`palette::Profile`].
//! The [`task::Task`] object bundles the training and test grids of a puzzle, and converts them
//! from and to the ARC JSON format. The [`saver::task::SaverTask`] object loads and saves task
//! files.
//! The [`editor::Editor`] object composes these operations into an editing session with undo and
//! redo, for rendering layers and developer tools.

pub mod config;
pub mod editor;
pub mod grid;
pub mod history;
pub mod palette;
pub mod saver;
pub mod task;

pub use grid::{Grid, GridError};
pub use palette::Profile;
pub use task::{Task, TaskError};
