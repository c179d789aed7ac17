/*
history.rs

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

//! Undo and redo lists of the editor.
//!
//! Before each change, the editor stores a copy of the grid in the undo list. Undoing a change
//! swaps the current grid with the last copy, and keeps the current grid in the redo list.

use log::debug;

use crate::grid::Grid;

/// Maximum number of grids kept in the undo list. The oldest grid is dropped first.
const MAX_HISTORY: usize = 100;

/// Manage the undo and redo lists.
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Grids before each change, oldest first.
    undo_op: Vec<Grid>,

    /// Grids replaced by an undo operation.
    redo_op: Vec<Grid>,
}

impl History {
    /// Create a [`History`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the object.
    pub fn clear(&mut self) {
        self.undo_op.clear();
        self.redo_op.clear();
    }

    /// Store the grid as it was before a change. The redo list is cleared.
    pub fn push(&mut self, snapshot: Grid) {
        if self.undo_op.len() >= MAX_HISTORY {
            self.undo_op.remove(0);
            debug!("Undo list full: dropping the oldest grid");
        }
        self.undo_op.push(snapshot);
        self.redo_op.clear();
    }

    /// Return the grid to restore for undoing the last change, or None if the undo list is
    /// empty.
    pub fn undo(&mut self, current: &Grid) -> Option<Grid> {
        let previous: Grid = self.undo_op.pop()?;
        self.redo_op.push(current.clone());
        Some(previous)
    }

    /// Return the grid to restore for redoing the last undo operation, or None if the redo list
    /// is empty.
    pub fn redo(&mut self, current: &Grid) -> Option<Grid> {
        let next: Grid = self.redo_op.pop()?;
        self.undo_op.push(current.clone());
        Some(next)
    }

    /// Return the length of the undo list.
    pub fn undo_len(&self) -> usize {
        self.undo_op.len()
    }

    /// Return the length of the redo list.
    pub fn redo_len(&self) -> usize {
        self.redo_op.len()
    }
}
