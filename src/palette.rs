/*
palette.rs

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

//! Palette profiles and the ARC color table.
//!
//! A [`Profile`] fixes the two limits every [`crate::grid::Grid`] is checked against: the
//! largest color index and the largest grid dimension.
//! The ARC training data uses ten colors on grids of at most 30×30 cells.
//! The editor accepts grids up to 64×64 cells, and the extended profile adds six colors for
//! game levels.
//!
//! [`ArcColor`] gives the name and the display color of the ten ARC color indexes. Rendering
//! layers use it to paint the cells.

use clap::ValueEnum;
use std::fmt;
use strum_macros::FromRepr;

/// Validation limits for the grids.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum Profile {
    /// ARC training data: ten colors, grids up to 30×30.
    Arc,

    /// Grid editor: ten colors, grids up to 64×64.
    #[default]
    Editor,

    /// Level editor: sixteen colors, grids up to 64×64.
    Extended,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Profile::Arc => write!(f, "arc"),
            Profile::Editor => write!(f, "editor"),
            Profile::Extended => write!(f, "extended"),
        }
    }
}

impl Profile {
    /// Return the largest valid color index.
    pub fn max_color(self) -> u8 {
        match self {
            Profile::Arc | Profile::Editor => 9,
            Profile::Extended => 15,
        }
    }

    /// Return the largest valid width or height.
    pub fn max_dim(self) -> usize {
        match self {
            Profile::Arc => 30,
            Profile::Editor | Profile::Extended => 64,
        }
    }

    /// Whether the given value is a color index of the palette.
    ///
    /// The value is signed so that raw values read from a task file can be checked before
    /// they are converted.
    pub fn is_valid_color(self, value: i64) -> bool {
        (0..=i64::from(self.max_color())).contains(&value)
    }

    /// Whether the given width or height is allowed.
    pub fn is_valid_dim(self, dim: usize) -> bool {
        (1..=self.max_dim()).contains(&dim)
    }
}

/// The ten ARC colors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum ArcColor {
    Black = 0,
    Blue = 1,
    Red = 2,
    Green = 3,
    Yellow = 4,
    Gray = 5,
    Magenta = 6,
    Orange = 7,
    SkyBlue = 8,
    Maroon = 9,
}

impl fmt::Display for ArcColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ArcColor {
    /// Return the [`ArcColor`] for a color index, or None for indexes above 9.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::from_repr(index)
    }

    /// Return the color index.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Return the display name of the color.
    pub fn name(self) -> &'static str {
        match self {
            ArcColor::Black => "Black",
            ArcColor::Blue => "Blue",
            ArcColor::Red => "Red",
            ArcColor::Green => "Green",
            ArcColor::Yellow => "Yellow",
            ArcColor::Gray => "Gray",
            ArcColor::Magenta => "Magenta",
            ArcColor::Orange => "Orange",
            ArcColor::SkyBlue => "Sky Blue",
            ArcColor::Maroon => "Maroon",
        }
    }

    /// Return the red, green, and blue components.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ArcColor::Black => (0, 0, 0),
            ArcColor::Blue => (0, 116, 217),
            ArcColor::Red => (255, 65, 54),
            ArcColor::Green => (46, 204, 64),
            ArcColor::Yellow => (255, 220, 0),
            ArcColor::Gray => (170, 170, 170),
            ArcColor::Magenta => (240, 18, 190),
            ArcColor::Orange => (255, 133, 27),
            ArcColor::SkyBlue => (127, 219, 255),
            ArcColor::Maroon => (135, 12, 37),
        }
    }

    /// Return the HTML color code, such as `#FF4136`.
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}
