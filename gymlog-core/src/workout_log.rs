//! In-memory workout history.
//!
//! The log owns every record created during a session and only ever grows.
//! Front-ends talk to it through [`WorkoutStore`].

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::models::{WorkoutEntry, WorkoutRecord};

pub const EMPTY_LOG_MESSAGE: &str = "No workouts logged yet. Add your first workout!";

/// The add/list surface the front-ends depend on.
pub trait WorkoutStore {
    fn add(&mut self, entry: WorkoutEntry) -> &WorkoutRecord;

    /// Display lines, newest first, or the placeholder line when empty.
    fn list(&self) -> Vec<String>;
}

#[derive(Debug)]
pub struct WorkoutLog<C: Clock = SystemClock> {
    workouts: Vec<WorkoutRecord>,
    clock: C,
}

impl WorkoutLog {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for WorkoutLog {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> WorkoutLog<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            workouts: Vec::new(),
            clock,
        }
    }

    /// Stamp the entry with the current time and append it.
    pub fn add(&mut self, entry: WorkoutEntry) -> &WorkoutRecord {
        let record = WorkoutRecord::stamp(entry, self.clock.now());
        debug!(
            "Logged workout #{}: {}",
            self.workouts.len() + 1,
            record.name()
        );
        self.workouts.push(record);
        &self.workouts[self.workouts.len() - 1]
    }

    /// Records, most recent first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &WorkoutRecord> + ExactSizeIterator {
        self.workouts.iter().rev()
    }

    pub fn list(&self) -> Vec<String> {
        if self.workouts.is_empty() {
            return vec![EMPTY_LOG_MESSAGE.to_string()];
        }
        self.history().map(|w| w.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

impl<C: Clock> WorkoutStore for WorkoutLog<C> {
    fn add(&mut self, entry: WorkoutEntry) -> &WorkoutRecord {
        WorkoutLog::<C>::add(self, entry)
    }

    fn list(&self) -> Vec<String> {
        WorkoutLog::<C>::list(self)
    }
}
