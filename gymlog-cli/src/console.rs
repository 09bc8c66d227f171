//! Line-oriented menu front-end.

use anyhow::Result;
use gymlog::errors::ValidationError;
use gymlog::input::{parse_name, parse_reps, parse_sets, parse_weight};
use gymlog::{WorkoutEntry, WorkoutStore};
use log::{debug, info};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddWorkout,
    ViewHistory,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i32>().ok()? {
            1 => Some(MenuChoice::AddWorkout),
            2 => Some(MenuChoice::ViewHistory),
            3 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Console<'a, S: WorkoutStore, R: BufRead, W: Write> {
    store: &'a mut S,
    input: R,
    output: W,
}

impl<'a, S: WorkoutStore, R: BufRead, W: Write> Console<'a, S, R, W> {
    pub fn new(store: &'a mut S, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Console started");
        loop {
            self.display_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::AddWorkout) => {
                    if !self.add_workout()? {
                        break;
                    }
                }
                Some(MenuChoice::ViewHistory) => self.view_history()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting Gym Tracking System. Goodbye!")?;
                    break;
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
        info!("Console exited");
        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Gym Tracking System Menu ---")?;
        writeln!(self.output, "1. Add New Workout")?;
        writeln!(self.output, "2. View Workout History")?;
        writeln!(self.output, "3. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns false when input ran out before the workout was complete.
    fn add_workout(&mut self) -> Result<bool> {
        writeln!(self.output, "\n--- Add New Workout ---")?;

        let Some(name) = self.prompt("Enter Exercise Name: ", parse_name)? else {
            return Ok(false);
        };
        let Some(sets) = self.prompt("Enter Number of Sets: ", parse_sets)? else {
            return Ok(false);
        };
        let Some(reps) = self.prompt("Enter Number of Reps: ", parse_reps)? else {
            return Ok(false);
        };
        let Some(weight) = self.prompt("Enter Weight (e.g., 75.5): ", parse_weight)? else {
            return Ok(false);
        };

        let entry = WorkoutEntry::new(&name, sets, reps, weight)?;
        self.store.add(entry);
        writeln!(self.output, "Workout added successfully!")?;
        Ok(true)
    }

    fn view_history(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- Workout History ---")?;
        for line in self.store.list() {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    /// Re-prompts until `parse` accepts the line. `None` means end of input.
    fn prompt<T>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<Option<T>> {
        loop {
            write!(self.output, "{}", label)?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    debug!("Rejected {} input {:?}: {}", e.field(), line, e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
