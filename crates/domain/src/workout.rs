use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{MuscleGroup, Name, Reps, Weight};

/// One instance of performing an exercise at a given weight and
/// repetition count. Appended to an exercise log and never removed or
/// reordered; only the completion stamp may be set afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SetRecord {
    pub weight: Weight,
    pub reps: Reps,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl SetRecord {
    #[must_use]
    pub fn volume(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let reps = u32::from(self.reps) as f32;
        f32::from(self.weight) * reps
    }
}

/// The record of a single exercise being performed within one workout.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub id: ExerciseLogID,
    pub workout_log_id: WorkoutLogID,
    /// Catalog id of the exercise. Matching of logs within a workout
    /// uses `exercise_name`, but the id is kept so a log remains
    /// linkable to the catalog if a display name changes.
    pub exercise_id: String,
    pub exercise_name: Name,
    pub sets: Vec<SetRecord>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ExerciseLog {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Total volume of the log (Σ weight × reps).
    #[must_use]
    pub fn volume(&self) -> f32 {
        self.sets.iter().map(SetRecord::volume).sum()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseLogID(Uuid);

impl ExerciseLogID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseLogID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseLogID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// One workout from start to completion. Holds the muscle groups the
/// user chose and the ids of the exercise logs appended to it, in
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutLog {
    pub id: WorkoutLogID,
    pub selected_muscle_groups: BTreeSet<MuscleGroup>,
    pub exercises: Vec<ExerciseLogID>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkoutLog {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutLogID(Uuid);

impl WorkoutLogID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutLogID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutLogID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}
