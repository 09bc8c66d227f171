pub mod clock;
pub mod errors;
pub mod input;
pub mod logging;
pub mod models;
pub mod workout_log;

pub use errors::{Field, ValidationError};
pub use models::{WorkoutEntry, WorkoutRecord};
pub use workout_log::{EMPTY_LOG_MESSAGE, WorkoutLog, WorkoutStore};
