/*
grid.rs

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

//! Rectangular grid of color indexes.
//!
//! A [`Grid`] is the board of an ARC puzzle: `height` rows of `width` cells, each cell holding
//! a color index of the palette selected by a [`Profile`].
//! Coordinates are given as `(x, y)`, where `x` is the column and `y` is the row, both starting
//! at zero in the top left corner.
//!
//! All the operations that modify the grid first validate their parameters, and then apply the
//! change. A failed operation never leaves the grid partially updated.

use log::debug;
use serde::ser::{Serialize, Serializer};
use std::error::Error;
use std::fmt;

use crate::palette::Profile;

/// Width and height of the grid returned by [`Grid::blank`].
const DEFAULT_SIZE: usize = 8;

/// Type of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The width or the height is zero or larger than the profile maximum.
    InvalidDimension {
        height: usize,
        width: usize,
        max: usize,
    },

    /// The color index is larger than the largest color of the profile.
    InvalidColor { color: u8, max: u8 },

    /// The coordinates are outside the grid.
    OutOfBounds {
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    /// The nested rows provided to [`Grid::from_task_grid`] do not form a valid grid.
    MalformedGrid(String),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidDimension { height, width, max } => write!(
                f,
                "Invalid grid dimensions {width}×{height} (must be between 1×1 and {max}×{max})"
            ),
            GridError::InvalidColor { color, max } => {
                write!(f, "Invalid color {color} (must be between 0 and {max})")
            }
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Coordinates ({x}, {y}) out of bounds for {width}×{height} grid"
            ),
            GridError::MalformedGrid(msg) => write!(f, "Malformed grid: {msg}"),
        }
    }
}

impl Error for GridError {}

/// Grid object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Profile that sets the maximum color and the maximum dimension.
    profile: Profile,

    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// Cell colors, row by row. Every row has exactly [`Grid::width`] cells.
    cells: Vec<Vec<u8>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::blank(Profile::default())
    }
}

/// Serialize a [`Grid`] object as nested rows, which is the grid format of the task files.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.cells.serialize(serializer)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.cells.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, color) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{color}")?;
            }
        }
        Ok(())
    }
}

impl Grid {
    /// Create a [`Grid`] object with all its cells set to the `fill` color.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidDimension`] when `height` or `width` is zero or larger than the
    /// profile maximum, and [`GridError::InvalidColor`] when `fill` is not in the palette.
    pub fn new(
        height: usize,
        width: usize,
        fill: u8,
        profile: Profile,
    ) -> Result<Self, GridError> {
        check_dimensions(height, width, profile)?;
        check_color(fill, profile)?;
        Ok(Self {
            profile,
            width,
            height,
            cells: vec![vec![fill; width]; height],
        })
    }

    /// Create an 8×8 [`Grid`] object with all its cells set to color 0.
    pub fn blank(profile: Profile) -> Self {
        Self {
            profile,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            cells: vec![vec![0; DEFAULT_SIZE]; DEFAULT_SIZE],
        }
    }

    /// Build a [`Grid`] object from nested rows, top row first.
    ///
    /// This is the entry point for grids read from task files. The values are signed so that
    /// negative numbers coming from untrusted data are reported instead of wrapped.
    ///
    /// # Errors
    ///
    /// [`GridError::MalformedGrid`] when there are no rows, when the rows are empty or do not
    /// have the same length, when the shape exceeds the profile maximum, or when a value is not
    /// a color of the palette.
    pub fn from_task_grid<T>(rows: &[Vec<T>], profile: Profile) -> Result<Self, GridError>
    where
        T: Copy + Into<i64>,
    {
        let height: usize = rows.len();
        if height == 0 {
            return Err(GridError::MalformedGrid("the grid has no rows".to_string()));
        }
        let width: usize = rows[0].len();
        if width == 0 {
            return Err(GridError::MalformedGrid("the first row is empty".to_string()));
        }
        let max: usize = profile.max_dim();
        if height > max || width > max {
            return Err(GridError::MalformedGrid(format!(
                "{width}×{height} grid exceeds the {max}×{max} maximum"
            )));
        }

        let mut cells: Vec<Vec<u8>> = Vec::with_capacity(height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::MalformedGrid(format!(
                    "row {y} has {} cells instead of {width}",
                    row.len()
                )));
            }
            let mut grid_row: Vec<u8> = Vec::with_capacity(width);
            for (x, value) in row.iter().enumerate() {
                let value: i64 = (*value).into();
                if !profile.is_valid_color(value) {
                    return Err(GridError::MalformedGrid(format!(
                        "invalid color {value} at ({x}, {y})"
                    )));
                }
                // In range, so the conversion is exact.
                grid_row.push(value as u8);
            }
            cells.push(grid_row);
        }

        Ok(Self {
            profile,
            width,
            height,
            cells,
        })
    }

    /// Return the grid as nested rows, top row first.
    pub fn to_task_grid(&self) -> Vec<Vec<u8>> {
        self.cells.clone()
    }

    /// Return the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Return the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Return the profile the grid is validated against.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Iterate over the rows, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Return the color of the cell at the given coordinates.
    pub fn get(&self, x: isize, y: isize) -> Result<u8, GridError> {
        let (col, row) = self.position(x, y)?;
        Ok(self.cells[row][col])
    }

    /// Set the color of the cell at the given coordinates.
    pub fn set(&mut self, x: isize, y: isize, color: u8) -> Result<(), GridError> {
        let (col, row) = self.position(x, y)?;
        check_color(color, self.profile)?;
        self.cells[row][col] = color;
        Ok(())
    }

    /// Set all the cells to the given color.
    pub fn clear(&mut self, color: u8) -> Result<(), GridError> {
        check_color(color, self.profile)?;
        for row in &mut self.cells {
            row.fill(color);
        }
        Ok(())
    }

    /// Change the grid dimensions.
    ///
    /// The cells that exist in both the old and the new grid keep their color. The new cells
    /// get the `fill` color. When the grid shrinks, the cells outside the new bounds are lost.
    pub fn resize(
        &mut self,
        new_height: usize,
        new_width: usize,
        fill: u8,
    ) -> Result<(), GridError> {
        check_dimensions(new_height, new_width, self.profile)?;
        check_color(fill, self.profile)?;

        let mut cells: Vec<Vec<u8>> = vec![vec![fill; new_width]; new_height];
        let keep_width: usize = new_width.min(self.width);
        for (new_row, old_row) in cells.iter_mut().zip(&self.cells) {
            new_row[..keep_width].copy_from_slice(&old_row[..keep_width]);
        }

        debug!(
            "Resize grid from {}×{} to {new_width}×{new_height}",
            self.width, self.height
        );
        self.cells = cells;
        self.width = new_width;
        self.height = new_height;
        Ok(())
    }

    /// Recolor the area of same-color cells that contains the given cell.
    ///
    /// Cells are connected through their four orthogonal neighbors only. When the cell already
    /// has the new color, nothing changes.
    /// Return the number of cells that changed color.
    pub fn flood_fill(&mut self, x: isize, y: isize, new_color: u8) -> Result<usize, GridError> {
        let (col, row) = self.position(x, y)?;
        check_color(new_color, self.profile)?;

        let target_color: u8 = self.cells[row][col];
        if target_color == new_color {
            return Ok(0);
        }

        // Cells are recolored when pushed, so a cell is never pushed twice: once recolored, it no
        // longer has the target color.
        let mut stack: Vec<(usize, usize)> = vec![(col, row)];
        self.cells[row][col] = new_color;
        let mut filled: usize = 1;

        while let Some((cx, cy)) = stack.pop() {
            let neighbors: [Option<(usize, usize)>; 4] = [
                (cx > 0).then(|| (cx - 1, cy)),
                (cx + 1 < self.width).then_some((cx + 1, cy)),
                (cy > 0).then(|| (cx, cy - 1)),
                (cy + 1 < self.height).then_some((cx, cy + 1)),
            ];
            for (nx, ny) in neighbors.into_iter().flatten() {
                if self.cells[ny][nx] == target_color {
                    self.cells[ny][nx] = new_color;
                    filled += 1;
                    stack.push((nx, ny));
                }
            }
        }

        debug!("Flood fill from ({x}, {y}): {filled} cells {target_color} -> {new_color}");
        Ok(filled)
    }

    /// Convert signed coordinates into column and row indexes.
    fn position(&self, x: isize, y: isize) -> Result<(usize, usize), GridError> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(col), Ok(row)) if col < self.width && row < self.height => Ok((col, row)),
            _ => Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }
}

/// Verify that the dimensions are allowed by the profile.
fn check_dimensions(height: usize, width: usize, profile: Profile) -> Result<(), GridError> {
    if profile.is_valid_dim(height) && profile.is_valid_dim(width) {
        Ok(())
    } else {
        Err(GridError::InvalidDimension {
            height,
            width,
            max: profile.max_dim(),
        })
    }
}

/// Verify that the color is in the palette of the profile.
pub(crate) fn check_color(color: u8, profile: Profile) -> Result<(), GridError> {
    if profile.is_valid_color(i64::from(color)) {
        Ok(())
    } else {
        Err(GridError::InvalidColor {
            color,
            max: profile.max_color(),
        })
    }
}
