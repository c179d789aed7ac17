/*
task.rs

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

//! Save and restore a task file.
//!
//! The file is read and written as a whole. The task is serialized in JSON format by using
//! [`serde`], and its grids are validated against a [`Profile`] when the file is loaded.

use log::debug;
use std::error::Error;
use std::fs::{self, File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::palette::Profile;
use crate::task::Task;

/// Object to save and restore a task.
pub struct SaverTask {
    /// Path to the task file.
    save_file: PathBuf,
}

impl SaverTask {
    /// Create a [`SaverTask`] object for the given task file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let save_file: PathBuf = path.into();
        debug!("Task file: {save_file:?}");
        Self { save_file }
    }

    /// Return the path to the task file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the [`Task`] object from the task file.
    ///
    /// Return the [`Task`] object or None if the file does not exist.
    pub fn get_task(&self, profile: Profile) -> Result<Option<Task>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let task: Task = Task::from_reader(reader, profile)?;
        debug!(
            "Loaded {} training and {} test examples from {:?}",
            task.train.len(),
            task.test.len(),
            self.save_file
        );
        Ok(Some(task))
    }

    /// Save the provided [`Task`] object.
    ///
    /// The parent directories are created if they do not exist.
    pub fn save_task(&self, task: &Task) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, task)?;
        writer.flush()?;
        debug!("Saved task to {:?}", self.save_file);
        Ok(())
    }

    /// Delete the task file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
