#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod format;

mod name;
mod quantity;
mod session;
mod sources;
mod workout;

pub use catalog::{Exercise, MuscleGroup};
pub use name::{Name, NameError};
pub use quantity::{Reps, RepsError, SetInputError, Weight, WeightError, validate_set_inputs};
pub use session::{SessionError, SessionManager, Step};
pub use sources::{Clock, IdSource, RandomIds, SystemClock};
pub use workout::{ExerciseLog, ExerciseLogID, SetRecord, WorkoutLog, WorkoutLogID};
