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

//! ARC task envelope.
//!
//! A task bundles the example grids of a puzzle in JSON format:
//!
//! ```json
//! {
//!   "train": [
//!     {"input": [[0, 1], [2, 3]], "output": [[1, 1], [1, 1]]}
//!   ],
//!   "test": [
//!     {"input": [[0, 0], [0, 0]]}
//!   ]
//! }
//! ```
//!
//! The `train` list is required. The `test` list can be omitted, and the `output` grid of a test
//! example is usually withheld.
//!
//! Decoding is done in two steps: [`serde`] first reads the raw nested lists, and then each grid
//! is validated with [`Grid::from_task_grid`].
//! A task is either loaded completely or not at all.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::io::Read;

use crate::grid::{Grid, GridError};
use crate::palette::Profile;

/// Type of errors.
#[derive(Debug)]
pub enum TaskError {
    /// The data is not valid JSON, or does not have the structure of a task.
    Json(serde_json::Error),

    /// A grid in the task is not valid. The context gives the location of the grid, such as
    /// `train[1].output`.
    Grid { context: String, source: GridError },
}

impl fmt::Display for TaskError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskError::Json(e) => write!(f, "Invalid task file: {e}"),
            TaskError::Grid { context, source } => write!(f, "{context}: {source}"),
        }
    }
}

impl Error for TaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TaskError::Json(e) => Some(e),
            TaskError::Grid { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(e: serde_json::Error) -> Self {
        TaskError::Json(e)
    }
}

/// Training example: the input grid and the expected output grid.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TrainPair {
    pub input: Grid,
    pub output: Grid,
}

/// Test example. The output grid is the answer, and is usually not provided.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TestPair {
    pub input: Grid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Grid>,
}

/// Task object.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    /// Training examples.
    pub train: Vec<TrainPair>,

    /// Test examples.
    pub test: Vec<TestPair>,
}

/// Task as read from JSON, before the grids are validated.
#[derive(Deserialize)]
struct RawTask {
    train: Vec<RawTrainPair>,

    #[serde(default)]
    test: Vec<RawTestPair>,
}

#[derive(Deserialize)]
struct RawTrainPair {
    input: Vec<Vec<i64>>,
    output: Vec<Vec<i64>>,
}

#[derive(Deserialize)]
struct RawTestPair {
    input: Vec<Vec<i64>>,

    #[serde(default)]
    output: Option<Vec<Vec<i64>>>,
}

/// Validate a raw grid and record where it comes from in case of error.
fn parse_grid(rows: &[Vec<i64>], profile: Profile, context: String) -> Result<Grid, TaskError> {
    Grid::from_task_grid(rows, profile).map_err(|source| TaskError::Grid { context, source })
}

impl Task {
    /// Create an empty [`Task`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`Task`] object with a single training example that uses the grid as both the
    /// input and the output.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut task: Task = Self::new();
        task.add_train_example(grid.clone(), grid.clone());
        task
    }

    /// Append a training example.
    pub fn add_train_example(&mut self, input: Grid, output: Grid) {
        self.train.push(TrainPair { input, output });
    }

    /// Append a test example.
    pub fn add_test_example(&mut self, input: Grid, output: Option<Grid>) {
        self.test.push(TestPair { input, output });
    }

    /// Return the number of grids in the task.
    pub fn num_grids(&self) -> usize {
        self.train.len() * 2
            + self
                .test
                .iter()
                .map(|t| if t.output.is_some() { 2 } else { 1 })
                .sum::<usize>()
    }

    /// Decode a task from a JSON string and validate its grids against the profile.
    pub fn from_json(text: &str, profile: Profile) -> Result<Self, TaskError> {
        let raw: RawTask = serde_json::from_str(text)?;
        Self::from_raw(raw, profile)
    }

    /// Decode a task from a reader and validate its grids against the profile.
    pub fn from_reader<R: Read>(reader: R, profile: Profile) -> Result<Self, TaskError> {
        let raw: RawTask = serde_json::from_reader(reader)?;
        Self::from_raw(raw, profile)
    }

    /// Encode the task in JSON, indented with two spaces.
    pub fn to_json(&self) -> Result<String, TaskError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn from_raw(raw: RawTask, profile: Profile) -> Result<Self, TaskError> {
        let mut task: Task = Self::new();

        for (i, pair) in raw.train.iter().enumerate() {
            let input: Grid = parse_grid(&pair.input, profile, format!("train[{i}].input"))?;
            let output: Grid = parse_grid(&pair.output, profile, format!("train[{i}].output"))?;
            task.add_train_example(input, output);
        }

        for (i, pair) in raw.test.iter().enumerate() {
            let input: Grid = parse_grid(&pair.input, profile, format!("test[{i}].input"))?;
            let output: Option<Grid> = match &pair.output {
                Some(rows) => Some(parse_grid(rows, profile, format!("test[{i}].output"))?),
                None => None,
            };
            task.add_test_example(input, output);
        }

        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "train": [
            {"input": [[0, 1], [2, 3]], "output": [[1, 1], [1, 1]]}
        ],
        "test": [
            {"input": [[0, 0], [0, 0]]}
        ]
    }"#;

    #[test]
    fn load_sample() {
        let task = Task::from_json(SAMPLE, Profile::Editor).unwrap();
        assert_eq!(task.train.len(), 1);
        assert_eq!(task.test.len(), 1);
        assert_eq!(task.train[0].input.to_task_grid(), vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(task.train[0].output.get(1, 1), Ok(1));
        assert!(task.test[0].output.is_none());
        assert_eq!(task.num_grids(), 3);
    }

    #[test]
    fn json_round_trip() {
        let task = Task::from_json(SAMPLE, Profile::Editor).unwrap();
        let text = task.to_json().unwrap();
        assert!(!text.contains("\"output\": null"));
        assert_eq!(Task::from_json(&text, Profile::Editor).unwrap(), task);
    }

    #[test]
    fn test_output_is_kept_when_present() {
        let mut task = Task::from_grid(&Grid::default());
        let answer = Grid::new(2, 2, 3, Profile::Editor).unwrap();
        task.add_test_example(Grid::default(), Some(answer.clone()));
        let loaded = Task::from_json(&task.to_json().unwrap(), Profile::Editor).unwrap();
        assert_eq!(loaded.test[0].output, Some(answer));
        assert_eq!(loaded.num_grids(), 4);
    }

    #[test]
    fn from_grid_uses_grid_twice() {
        let g = Grid::new(3, 2, 5, Profile::Editor).unwrap();
        let task = Task::from_grid(&g);
        assert_eq!(task.train.len(), 1);
        assert_eq!(task.train[0].input, g);
        assert_eq!(task.train[0].output, g);
        assert!(task.test.is_empty());
    }

    #[test]
    fn test_list_is_optional() {
        let task = Task::from_json(r#"{"train": []}"#, Profile::Editor).unwrap();
        assert!(task.train.is_empty());
        assert!(task.test.is_empty());
    }

    #[test]
    fn train_list_is_required() {
        let err = Task::from_json(r#"{"test": []}"#, Profile::Editor).unwrap_err();
        assert!(matches!(err, TaskError::Json(_)));
    }

    #[test]
    fn train_output_is_required() {
        let err = Task::from_json(r#"{"train": [{"input": [[1]]}]}"#, Profile::Editor).unwrap_err();
        assert!(matches!(err, TaskError::Json(_)));
    }

    #[test]
    fn non_integer_values_are_rejected() {
        let text = r#"{"train": [{"input": [[1.5]], "output": [[1]]}]}"#;
        assert!(matches!(Task::from_json(text, Profile::Editor), Err(TaskError::Json(_))));
        let text = r#"{"train": [{"input": [["a"]], "output": [[1]]}]}"#;
        assert!(matches!(Task::from_json(text, Profile::Editor), Err(TaskError::Json(_))));
    }

    #[test]
    fn invalid_grid_reports_its_location() {
        let text = r#"{
            "train": [{"input": [[1]], "output": [[1]]}],
            "test": [{"input": [[1, 2], [3]]}]
        }"#;
        match Task::from_json(text, Profile::Editor) {
            Err(TaskError::Grid { context, source }) => {
                assert_eq!(context, "test[0].input");
                assert!(matches!(source, GridError::MalformedGrid(_)));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let text = r#"{"train": [{"input": [[1]], "output": [[-1]]}]}"#;
        let err = Task::from_json(text, Profile::Editor).unwrap_err();
        assert_eq!(err.to_string(), "train[0].output: Malformed grid: invalid color -1 at (0, 0)");
    }

    #[test]
    fn profile_applies_to_every_grid() {
        let text = r#"{"train": [{"input": [[12]], "output": [[1]]}]}"#;
        assert!(Task::from_json(text, Profile::Editor).is_err());
        assert!(Task::from_json(text, Profile::Extended).is_ok());
    }

    #[test]
    fn from_reader() {
        let task = Task::from_reader(SAMPLE.as_bytes(), Profile::Arc).unwrap();
        assert_eq!(task.train[0].input.profile(), Profile::Arc);
    }
}
