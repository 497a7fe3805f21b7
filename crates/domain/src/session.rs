use std::collections::BTreeSet;

use log::{debug, warn};
use thiserror::Error;

use crate::{
    Clock, ExerciseLog, ExerciseLogID, IdSource, MuscleGroup, Name, RandomIds, Reps, SetRecord,
    SystemClock, Weight, WorkoutLog, WorkoutLogID,
    catalog::{self, Exercise},
};

/// Stage of the linear workout flow.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, strum::Display)]
#[strum(serialize_all = "camelCase")]
pub enum Step {
    #[default]
    Ready,
    SelectTypes,
    SelectExercise,
    LogSets,
    Progress,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Select at least one muscle group")]
    NoMuscleGroupsSelected,
    #[error("Log at least one set before completing an exercise")]
    NoSetsLogged,
    #[error("No workout is in progress")]
    NoActiveWorkout,
}

/// Owns all workout state and the step state machine. Every mutation
/// goes through a command method; the presentation layer only reads
/// the returned state.
///
/// At most one workout is active at a time, and within the active
/// workout at most one incomplete exercise log exists per exercise
/// name. State lives in memory only and is lost on process exit.
pub struct SessionManager<I = RandomIds, C = SystemClock> {
    ids: I,
    clock: C,
    active_workout: Option<WorkoutLog>,
    exercise_logs: Vec<ExerciseLog>,
    history: Vec<WorkoutLog>,
    archived_exercise_logs: Vec<ExerciseLog>,
    step: Step,
    selected_muscle_groups: BTreeSet<MuscleGroup>,
    current_exercise_log_id: Option<ExerciseLogID>,
}

impl SessionManager {
    #[must_use]
    pub fn new() -> Self {
        Self::with_sources(RandomIds, SystemClock)
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource, C: Clock> SessionManager<I, C> {
    pub fn with_sources(ids: I, clock: C) -> Self {
        Self {
            ids,
            clock,
            active_workout: None,
            exercise_logs: Vec::new(),
            history: Vec::new(),
            archived_exercise_logs: Vec::new(),
            step: Step::Ready,
            selected_muscle_groups: BTreeSet::new(),
            current_exercise_log_id: None,
        }
    }

    /// The user requests a new workout: move to muscle group selection
    /// with a cleared selection.
    pub fn begin_selection(&mut self) {
        self.selected_muscle_groups.clear();
        self.step = Step::SelectTypes;
    }

    /// Adds the group to the selection, or removes it if already
    /// selected.
    pub fn toggle_muscle_group(&mut self, muscle_group: MuscleGroup) {
        if !self.selected_muscle_groups.remove(&muscle_group) {
            self.selected_muscle_groups.insert(muscle_group);
        }
    }

    /// Starts a workout from the muscle groups toggled so far.
    pub fn confirm_selection(&mut self) -> Result<(), SessionError> {
        self.start_workout(self.selected_muscle_groups.clone())
    }

    /// Starts a new workout for the given muscle groups. An already
    /// active workout is discarded without a history entry.
    pub fn start_workout(
        &mut self,
        muscle_groups: BTreeSet<MuscleGroup>,
    ) -> Result<(), SessionError> {
        if muscle_groups.is_empty() {
            return Err(SessionError::NoMuscleGroupsSelected);
        }

        let workout = WorkoutLog {
            id: self.ids.next_id().into(),
            selected_muscle_groups: muscle_groups.clone(),
            exercises: Vec::new(),
            created_at: self.clock.now(),
            completed_at: None,
        };

        debug!("starting workout {} for {muscle_groups:?}", *workout.id);

        self.active_workout = Some(workout);
        self.selected_muscle_groups = muscle_groups;
        self.exercise_logs.clear();
        self.step = Step::SelectExercise;

        Ok(())
    }

    /// Opens an exercise for set logging. If an incomplete log for the
    /// same exercise name already exists in the active workout it is
    /// reused, so sets are not fragmented across multiple logs when
    /// the user revisits the exercise list.
    pub fn add_exercise(&mut self, exercise_id: &str) {
        let Some(active_workout) = &mut self.active_workout else {
            debug!("ignoring exercise selection without an active workout");
            return;
        };

        let Some(exercise) = catalog::exercise_by_id(exercise_id) else {
            warn!("unknown exercise id {exercise_id}");
            return;
        };

        let Ok(exercise_name) = Name::new(exercise.name) else {
            warn!("exercise {} has an invalid display name", exercise.id);
            return;
        };

        if let Some(log) = self
            .exercise_logs
            .iter()
            .find(|log| log.exercise_name == exercise_name && !log.is_complete())
        {
            self.current_exercise_log_id = Some(log.id);
            self.step = Step::LogSets;
            return;
        }

        let log = ExerciseLog {
            id: self.ids.next_id().into(),
            workout_log_id: active_workout.id,
            exercise_id: exercise.id.to_string(),
            exercise_name,
            sets: Vec::new(),
            created_at: self.clock.now(),
            completed_at: None,
        };

        active_workout.exercises.push(log.id);
        self.current_exercise_log_id = Some(log.id);
        self.exercise_logs.push(log);
        self.step = Step::LogSets;
    }

    /// Appends a set to the named exercise log. The weight and reps
    /// have already been validated by construction.
    pub fn add_set(&mut self, exercise_log_id: ExerciseLogID, weight: Weight, reps: Reps) {
        let now = self.clock.now();
        let Some(log) = self.exercise_log_mut(exercise_log_id) else {
            warn!("set logged against unknown exercise log {}", *exercise_log_id);
            return;
        };

        log.sets.push(SetRecord {
            weight,
            reps,
            created_at: now,
            completed_at: None,
        });
    }

    /// Stamps a single set as completed.
    pub fn complete_set(&mut self, exercise_log_id: ExerciseLogID, set_index: usize) {
        let now = self.clock.now();
        let Some(set) = self
            .exercise_log_mut(exercise_log_id)
            .and_then(|log| log.sets.get_mut(set_index))
        else {
            warn!("completion of unknown set {set_index} in {}", *exercise_log_id);
            return;
        };

        set.completed_at = Some(now);
    }

    /// Finishes logging sets for an exercise. Rejected while the log
    /// has no sets; an unknown log id is ignored.
    pub fn complete_exercise(&mut self, exercise_log_id: ExerciseLogID) -> Result<(), SessionError> {
        let now = self.clock.now();
        let Some(log) = self.exercise_log_mut(exercise_log_id) else {
            warn!("completion of unknown exercise log {}", *exercise_log_id);
            return Ok(());
        };

        if log.sets.is_empty() {
            return Err(SessionError::NoSetsLogged);
        }

        log.completed_at = Some(now);
        self.current_exercise_log_id = None;
        self.step = Step::Progress;

        Ok(())
    }

    /// Returns from the progress overview to the exercise list.
    pub fn add_another_exercise(&mut self) {
        self.step = Step::SelectExercise;
    }

    /// Stamps the active workout as completed and moves it to the
    /// history. Completing a workout without completed exercises is
    /// allowed; it differs from cancelling only in that the record is
    /// kept.
    pub fn complete_workout(&mut self) -> Result<(), SessionError> {
        let Some(mut workout) = self.active_workout.take() else {
            return Err(SessionError::NoActiveWorkout);
        };

        workout.completed_at = Some(self.clock.now());
        debug!("completed workout {}", *workout.id);
        // The logs leave the active list but stay reachable through
        // the history queries.
        self.archived_exercise_logs.append(&mut self.exercise_logs);
        self.history.push(workout);
        self.reset_transient();

        Ok(())
    }

    /// Discards the active workout and all of its exercise logs.
    /// Nothing is recorded to the history.
    pub fn cancel_workout(&mut self) {
        if let Some(workout) = &self.active_workout {
            debug!("cancelled workout {}", *workout.id);
        }
        self.active_workout = None;
        self.reset_transient();
    }

    fn reset_transient(&mut self) {
        self.exercise_logs.clear();
        self.selected_muscle_groups.clear();
        self.current_exercise_log_id = None;
        self.step = Step::Ready;
    }

    fn exercise_log_mut(&mut self, id: ExerciseLogID) -> Option<&mut ExerciseLog> {
        self.exercise_logs.iter_mut().find(|log| log.id == id)
    }

    /// The exercise log currently being edited. A stale pointer
    /// degrades to `None`.
    #[must_use]
    pub fn current_exercise_log(&self) -> Option<&ExerciseLog> {
        self.current_exercise_log_id
            .and_then(|id| self.exercise_logs.iter().find(|log| log.id == id))
    }

    /// Catalog entries matching the current muscle group selection, in
    /// catalog order.
    #[must_use]
    pub fn exercises_for_selection(&self) -> Vec<&'static Exercise> {
        catalog::exercises_by_muscle_groups(&self.selected_muscle_groups)
    }

    #[must_use]
    pub fn active_workout(&self) -> Option<&WorkoutLog> {
        self.active_workout.as_ref()
    }

    #[must_use]
    pub fn exercise_logs(&self) -> &[ExerciseLog] {
        &self.exercise_logs
    }

    #[must_use]
    pub fn history(&self) -> &[WorkoutLog] {
        &self.history
    }

    /// Exercise logs belonging to the given workout, active or
    /// completed, in the order they were created.
    #[must_use]
    pub fn workout_exercise_logs(&self, workout_log_id: WorkoutLogID) -> Vec<&ExerciseLog> {
        self.archived_exercise_logs
            .iter()
            .chain(&self.exercise_logs)
            .filter(|log| log.workout_log_id == workout_log_id)
            .collect()
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn selected_muscle_groups(&self) -> &BTreeSet<MuscleGroup> {
        &self.selected_muscle_groups
    }

    #[must_use]
    pub fn current_exercise_log_id(&self) -> Option<ExerciseLogID> {
        self.current_exercise_log_id
    }
}
