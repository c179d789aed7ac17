/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers creating puzzles. They create, edit, and display
//! task files without starting a graphical editor.
//! The edits apply to the input grid of the first training example, in this order: `--clear`,
//! `--resize`, `--paint`, and then `--fill`. The file is saved only when the grid changes.
//!
//! # Examples
//!
//! Create a task with a blank 5×5 grid:
//!
//! ```
//! $ arcgrid --new 5 5 puzzle.json
//! ```
//!
//! Fill the area around the top left cell with red, and display the task:
//!
//! ```
//! $ arcgrid --fill 0 0 --color 2 --show puzzle.json
//! train[0].input (5×5)
//! 2 2 2 2 2
//! 2 2 2 2 2
//! 2 2 2 2 2
//! 2 2 2 2 2
//! 2 2 2 2 2
//! train[0].output (5×5)
//! 0 0 0 0 0
//! 0 0 0 0 0
//! 0 0 0 0 0
//! 0 0 0 0 0
//! 0 0 0 0 0
//! Fill | Color 2 | Grid 5×5
//! ```

use clap::Parser;
use log::{LevelFilter, debug, info};
use std::error::Error;
use std::path::{Path, PathBuf};

use arcgrid::config::{COPYRIGHT_NOTICE, VERSION};
use arcgrid::editor::{Editor, Tool};
use arcgrid::grid::Grid;
use arcgrid::palette::Profile;
use arcgrid::saver::task::SaverTask;
use arcgrid::task::Task;

/// Create, edit, and display ARC task files.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Task file
    file: PathBuf,

    /// Palette profile used to validate the grids
    #[arg(value_enum, short, long, default_value_t = Profile::Editor)]
    profile: Profile,

    /// Create the task file with a blank grid of the given size
    #[arg(short, long, num_args = 2, value_names = ["HEIGHT", "WIDTH"])]
    new: Option<Vec<usize>>,

    /// Color for --new, --paint, and --fill
    #[arg(short, long, default_value_t = 0)]
    color: u8,

    /// Clear the grid
    #[arg(long, default_value_t = false)]
    clear: bool,

    /// Resize the grid
    #[arg(short, long, num_args = 2, value_names = ["HEIGHT", "WIDTH"])]
    resize: Option<Vec<usize>>,

    /// Paint the cell at the given column and row
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    paint: Option<Vec<isize>>,

    /// Flood fill the area around the cell at the given column and row
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    fill: Option<Vec<isize>>,

    /// Print the grids of the task
    #[arg(short, long, default_value_t = false)]
    show: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
    debug!("arcgrid {VERSION}");

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", error_message(&args.file, e.as_ref()));
            1
        }
    }
}

/// Apply the options to the task file.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let saver: SaverTask = SaverTask::new(&args.file);

    let mut editor: Editor = match &args.new {
        Some(size) => {
            if args.file.exists() {
                return Err("the file already exists".into());
            }
            let grid: Grid = Grid::new(size[0], size[1], args.color, args.profile)?;
            info!("New {}×{} grid", grid.width(), grid.height());
            Editor::new(grid)
        }
        None => match saver.get_task(args.profile)? {
            Some(task) => Editor::from_task(task),
            None => return Err("no such file (use --new to create it)".into()),
        },
    };
    editor.select_color(args.color)?;

    let mut changed: bool = args.new.is_some();
    if args.clear {
        changed |= editor.clear()?;
    }
    if let Some(size) = &args.resize {
        changed |= editor.resize(size[0], size[1])?;
    }
    if let Some(cell) = &args.paint {
        editor.select_tool(Tool::Paint);
        changed |= editor.apply(cell[0], cell[1])?;
    }
    if let Some(cell) = &args.fill {
        editor.select_tool(Tool::Fill);
        changed |= editor.apply(cell[0], cell[1])?;
    }

    if changed {
        saver.save_task(editor.commit())?;
        info!("Saved {}", saver.path().display());
    }

    if args.show {
        print!("{}", format_task(editor.task()));
        println!("{}", editor.status());
    }
    Ok(())
}

/// Return the message reported on the standard error for a failed run.
fn error_message(file: &Path, error: &dyn Error) -> String {
    format!("Error: {}: {error}", file.display())
}

/// Return the grids of the task, each grid preceded by its location and size.
fn format_task(task: &Task) -> String {
    let mut grids: Vec<(String, &Grid)> = Vec::with_capacity(task.num_grids());
    for (i, pair) in task.train.iter().enumerate() {
        grids.push((format!("train[{i}].input"), &pair.input));
        grids.push((format!("train[{i}].output"), &pair.output));
    }
    for (i, pair) in task.test.iter().enumerate() {
        grids.push((format!("test[{i}].input"), &pair.input));
        if let Some(output) = &pair.output {
            grids.push((format!("test[{i}].output"), output));
        }
    }

    let mut text: String = String::new();
    for (context, grid) in grids {
        text.push_str(&format!(
            "{context} ({}×{})\n{grid}\n",
            grid.width(),
            grid.height()
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        let mut path: PathBuf = env::temp_dir();
        path.push(format!("arcgrid-cli-{}-{name}", std::process::id()));
        path
    }

    fn args(cmd: &[&str]) -> Args {
        Args::try_parse_from(cmd).unwrap()
    }

    #[test]
    fn parse_options() {
        let a = args(&["arcgrid", "-p", "arc", "--fill", "-1", "2", "-c", "3", "t.json"]);
        assert_eq!(a.profile, Profile::Arc);
        assert_eq!(a.fill, Some(vec![-1, 2]));
        assert_eq!(a.color, 3);
        assert!(a.new.is_none());

        assert!(Args::try_parse_from(["arcgrid", "--new", "3", "t.json"]).is_err());
        assert!(Args::try_parse_from(["arcgrid", "-p", "wide", "t.json"]).is_err());
    }

    #[test]
    fn create_then_edit() {
        let path = temp_path("edit.json");
        let file = path.to_str().unwrap();

        run(&args(&["arcgrid", "--new", "3", "4", file])).unwrap();
        assert!(run(&args(&["arcgrid", "--new", "3", "4", file])).is_err());

        run(&args(&["arcgrid", "--paint", "1", "1", "-c", "2", file])).unwrap();
        run(&args(&["arcgrid", "--fill", "0", "0", "-c", "9", file])).unwrap();

        let task = SaverTask::new(&path).get_task(Profile::Editor).unwrap().unwrap();
        assert_eq!(
            task.train[0].input.to_task_grid(),
            vec![vec![9, 9, 9, 9], vec![9, 2, 9, 9], vec![9, 9, 9, 9]]
        );
        assert_eq!(task.train[0].output.to_task_grid(), vec![vec![0; 4]; 3]);

        let e = run(&args(&["arcgrid", "--paint", "4", "0", file])).unwrap_err();
        assert_eq!(e.to_string(), "Coordinates (4, 0) out of bounds for 4×3 grid");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file() {
        let path = temp_path("missing.json");
        assert!(run(&args(&["arcgrid", "--show", path.to_str().unwrap()])).is_err());
    }

    #[test]
    fn failure_message() {
        let path = temp_path("unknown.json");
        let e = run(&args(&["arcgrid", "--paint", "0", "0", path.to_str().unwrap()])).unwrap_err();
        assert_eq!(
            error_message(Path::new("unknown.json"), e.as_ref()),
            "Error: unknown.json: no such file (use --new to create it)"
        );
    }

    #[test]
    fn clear_saves_only_when_changed() {
        let path = temp_path("clear.json");
        let file = path.to_str().unwrap();
        run(&args(&["arcgrid", "--new", "2", "2", "-c", "3", file])).unwrap();
        run(&args(&["arcgrid", "--clear", file])).unwrap();
        let task = SaverTask::new(&path).get_task(Profile::Editor).unwrap().unwrap();
        assert_eq!(task.train[0].input.to_task_grid(), vec![vec![0; 2]; 2]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn show_grids() {
        let mut task = Task::from_grid(&Grid::new(1, 2, 1, Profile::Editor).unwrap());
        task.add_test_example(Grid::new(1, 1, 3, Profile::Editor).unwrap(), None);
        assert_eq!(
            format_task(&task),
            "train[0].input (2×1)\n1 1\ntrain[0].output (2×1)\n1 1\ntest[0].input (1×1)\n3\n"
        );
    }
}
