/*
editor.rs

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

//! Headless grid editor.
//!
//! The [`Editor`] object holds the grid being edited, the task it belongs to, the selected tool
//! and color, and the undo and redo lists.
//! A rendering layer forwards the cell the player clicked to [`Editor::apply`], and repaints the
//! grid returned by [`Editor::grid`].
//!
//! The edited grid is the input grid of the first training example. [`Editor::commit`] writes it
//! back into the task before the task is saved.

use log::{debug, info};
use std::fmt;

use crate::grid::{self, Grid, GridError};
use crate::history::History;
use crate::task::Task;

/// Editing tools.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Tool {
    /// Set the color of one cell.
    #[default]
    Paint,

    /// Flood fill the area around the cell.
    Fill,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Tool::Paint => write!(f, "Paint"),
            Tool::Fill => write!(f, "Fill"),
        }
    }
}

/// Color used for clearing the grid and for the new cells when the grid grows.
const BACKGROUND_COLOR: u8 = 0;

/// Manage the editing session.
#[derive(Debug)]
pub struct Editor {
    /// Grid being edited.
    grid: Grid,

    /// Task that receives the grid on [`Editor::commit`].
    task: Task,

    /// Selected color.
    color: u8,

    /// Selected tool.
    tool: Tool,

    /// Undo and redo lists.
    history: History,

    /// Whether the grid changed since the last commit.
    modified: bool,
}

impl Editor {
    /// Create an [`Editor`] object for a grid that does not belong to a task yet.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            task: Task::new(),
            color: 0,
            tool: Tool::default(),
            history: History::new(),
            modified: false,
        }
    }

    /// Create an [`Editor`] object for a task.
    ///
    /// The first training input is edited. When the task has no training example, a blank
    /// grid is edited instead, using the profile of the other task grids if any.
    pub fn from_task(task: Task) -> Self {
        let grid: Grid = match task.train.first() {
            Some(pair) => pair.input.clone(),
            None => match task.test.first() {
                Some(pair) => Grid::blank(pair.input.profile()),
                None => Grid::default(),
            },
        };
        let mut editor: Editor = Self::new(grid);
        editor.task = task;
        editor
    }

    /// Return the grid being edited.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the task.
    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Return the selected color.
    pub fn color(&self) -> u8 {
        self.color
    }

    /// Return the selected tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Whether the grid changed since the last commit.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Select the color used by the tools.
    pub fn select_color(&mut self, color: u8) -> Result<(), GridError> {
        grid::check_color(color, self.grid.profile())?;
        self.color = color;
        Ok(())
    }

    /// Select the tool.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Use the selected tool with the selected color on the given cell.
    ///
    /// Return whether the grid changed.
    pub fn apply(&mut self, x: isize, y: isize) -> Result<bool, GridError> {
        let snapshot: Grid = self.grid.clone();
        let changed: bool = match self.tool {
            Tool::Paint => {
                let changed: bool = self.grid.get(x, y)? != self.color;
                self.grid.set(x, y, self.color)?;
                changed
            }
            Tool::Fill => self.grid.flood_fill(x, y, self.color)? > 0,
        };
        if changed {
            debug!("{} ({x}, {y}) with color {}", self.tool, self.color);
            self.record(snapshot);
        }
        Ok(changed)
    }

    /// Set all the cells to the background color.
    ///
    /// Return whether the grid changed.
    pub fn clear(&mut self) -> Result<bool, GridError> {
        if self.grid.rows().flatten().all(|c| *c == BACKGROUND_COLOR) {
            return Ok(false);
        }
        let snapshot: Grid = self.grid.clone();
        self.grid.clear(BACKGROUND_COLOR)?;
        info!("Grid cleared");
        self.record(snapshot);
        Ok(true)
    }

    /// Change the grid dimensions. New cells get the background color.
    ///
    /// Return whether the grid changed.
    pub fn resize(&mut self, height: usize, width: usize) -> Result<bool, GridError> {
        if height == self.grid.height() && width == self.grid.width() {
            return Ok(false);
        }
        let snapshot: Grid = self.grid.clone();
        self.grid.resize(height, width, BACKGROUND_COLOR)?;
        info!("Grid resized to {width}×{height}");
        self.record(snapshot);
        Ok(true)
    }

    /// Undo the last change. Return whether there was a change to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.grid) {
            Some(previous) => {
                self.grid = previous;
                self.modified = true;
                true
            }
            None => false,
        }
    }

    /// Redo the last undo operation. Return whether there was an operation to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.grid) {
            Some(next) => {
                self.grid = next;
                self.modified = true;
                true
            }
            None => false,
        }
    }

    /// Return the length of the undo list.
    pub fn undo_len(&self) -> usize {
        self.history.undo_len()
    }

    /// Return the length of the redo list.
    pub fn redo_len(&self) -> usize {
        self.history.redo_len()
    }

    /// Write the grid into the task and return the task.
    ///
    /// When the task has no training example, the grid becomes both the input and the output
    /// of a new example. Otherwise it replaces the input of the first training example.
    pub fn commit(&mut self) -> &Task {
        match self.task.train.first_mut() {
            Some(pair) => pair.input = self.grid.clone(),
            None => self
                .task
                .add_train_example(self.grid.clone(), self.grid.clone()),
        }
        self.modified = false;
        &self.task
    }

    /// Return the status line, such as `Paint | Color 3 | Grid 8×8`.
    pub fn status(&self) -> String {
        format!(
            "{} | Color {} | Grid {}×{}",
            self.tool,
            self.color,
            self.grid.width(),
            self.grid.height()
        )
    }

    /// Store the grid before a change.
    fn record(&mut self, snapshot: Grid) {
        self.history.push(snapshot);
        self.modified = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Profile;

    fn editor() -> Editor {
        Editor::new(Grid::new(3, 3, 0, Profile::Editor).unwrap())
    }

    #[test]
    fn paint_and_undo() {
        let mut e = editor();
        e.select_color(4).unwrap();
        assert_eq!(e.apply(1, 1), Ok(true));
        assert_eq!(e.grid().get(1, 1), Ok(4));
        assert!(e.is_modified());
        assert_eq!(e.undo_len(), 1);

        assert!(e.undo());
        assert_eq!(e.grid().get(1, 1), Ok(0));
        assert!(e.redo());
        assert_eq!(e.grid().get(1, 1), Ok(4));
        assert!(!e.redo());
    }

    #[test]
    fn paint_same_color_keeps_history() {
        let mut e = editor();
        assert_eq!(e.apply(0, 0), Ok(false));
        assert_eq!(e.undo_len(), 0);
        assert!(!e.is_modified());
    }

    #[test]
    fn fill_tool() {
        let mut e = editor();
        e.select_color(2).unwrap();
        e.apply(1, 1).unwrap();
        e.select_tool(Tool::Fill);
        e.select_color(9).unwrap();
        assert_eq!(e.apply(0, 0), Ok(true));
        assert_eq!(
            e.grid().to_task_grid(),
            vec![vec![9, 9, 9], vec![9, 2, 9], vec![9, 9, 9]]
        );
        // Filling with the same color again does not add a history entry.
        assert_eq!(e.apply(0, 0), Ok(false));
        assert_eq!(e.undo_len(), 2);
    }

    #[test]
    fn failed_operations_change_nothing() {
        let mut e = editor();
        assert!(e.select_color(10).is_err());
        assert_eq!(e.color(), 0);
        e.select_color(1).unwrap();
        assert!(matches!(e.apply(3, 0), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(e.resize(0, 3), Err(GridError::InvalidDimension { .. })));
        assert_eq!(e.undo_len(), 0);
        assert!(!e.is_modified());
    }

    #[test]
    fn clear_and_resize() {
        let mut e = editor();
        assert_eq!(e.clear(), Ok(false));
        e.select_color(5).unwrap();
        e.apply(2, 2).unwrap();
        assert_eq!(e.resize(2, 4), Ok(true));
        assert_eq!(e.grid().to_task_grid(), vec![vec![0; 4]; 2]);
        assert_eq!(e.resize(2, 4), Ok(false));
        assert!(e.undo());
        assert_eq!(e.grid().get(2, 2), Ok(5));
        assert_eq!(e.clear(), Ok(true));
        assert!(e.grid().rows().flatten().all(|c| *c == 0));
        assert_eq!(e.undo_len(), 2);
    }

    #[test]
    fn commit_to_empty_task() {
        let mut e = editor();
        e.select_color(3).unwrap();
        e.apply(0, 0).unwrap();
        let task = e.commit().clone();
        assert!(!e.is_modified());
        assert_eq!(task.train.len(), 1);
        assert_eq!(task.train[0].input, *e.grid());
        assert_eq!(task.train[0].output, *e.grid());
    }

    #[test]
    fn commit_replaces_first_input() {
        let input = Grid::new(2, 2, 1, Profile::Editor).unwrap();
        let output = Grid::new(2, 2, 2, Profile::Editor).unwrap();
        let mut task = Task::new();
        task.add_train_example(input.clone(), output.clone());
        task.add_train_example(output.clone(), input.clone());

        let mut e = Editor::from_task(task);
        assert_eq!(*e.grid(), input);
        e.select_color(7).unwrap();
        e.apply(1, 0).unwrap();
        let task = e.commit();
        assert_eq!(task.train.len(), 2);
        assert_eq!(task.train[0].input.get(1, 0), Ok(7));
        assert_eq!(task.train[0].output, output);
        assert_eq!(task.train[1].input, output);
    }

    #[test]
    fn from_task_without_training_examples() {
        let mut task = Task::new();
        task.add_test_example(Grid::new(2, 2, 1, Profile::Arc).unwrap(), None);
        let e = Editor::from_task(task);
        assert_eq!(e.grid().profile(), Profile::Arc);
        assert_eq!((e.grid().width(), e.grid().height()), (8, 8));

        let e = Editor::from_task(Task::new());
        assert_eq!(*e.grid(), Grid::default());
    }

    #[test]
    fn status_line() {
        let mut e = editor();
        assert_eq!(e.status(), "Paint | Color 0 | Grid 3×3");
        e.select_tool(Tool::Fill);
        e.select_color(6).unwrap();
        e.resize(4, 5).unwrap();
        assert_eq!(e.status(), "Fill | Color 6 | Grid 5×4");
    }
}
