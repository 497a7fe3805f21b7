use std::{
    collections::{BTreeMap, BTreeSet},
    sync::LazyLock,
};

/// One of the eight fixed training categories used to filter the
/// exercise catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum MuscleGroup {
    Back,
    Chest,
    Shoulder,
    Biceps,
    Triceps,
    Legs,
    Abs,
    Cardio,
}

impl MuscleGroup {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MuscleGroup::Back => "Back",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Shoulder => "Shoulder",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Cardio => "Cardio",
        }
    }
}

/// A catalog entry. The catalog is static shared data; workouts refer
/// to it but never mutate it.
#[derive(Debug, PartialEq, Eq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub icon: &'static str,
}

#[must_use]
pub fn exercise_by_id(id: &str) -> Option<&'static Exercise> {
    EXERCISES_BY_ID.get(id).copied()
}

/// Catalog entries for a single muscle group, in catalog order.
#[must_use]
pub fn exercises_by_muscle_group(muscle_group: MuscleGroup) -> Vec<&'static Exercise> {
    EXERCISE_DATABASE
        .iter()
        .filter(|exercise| exercise.muscle_group == muscle_group)
        .collect()
}

/// Catalog entries whose muscle group is in `muscle_groups`, in
/// catalog order and without duplicates.
#[must_use]
pub fn exercises_by_muscle_groups(muscle_groups: &BTreeSet<MuscleGroup>) -> Vec<&'static Exercise> {
    EXERCISE_DATABASE
        .iter()
        .filter(|exercise| muscle_groups.contains(&exercise.muscle_group))
        .collect()
}

static EXERCISES_BY_ID: LazyLock<BTreeMap<&'static str, &'static Exercise>> = LazyLock::new(|| {
    EXERCISE_DATABASE
        .iter()
        .map(|exercise| (exercise.id, exercise))
        .collect::<BTreeMap<_, _>>()
});

macro_rules! exercise {
    ($id:literal, $name:literal, $muscle_group:ident, $icon:literal) => {
        Exercise {
            id: $id,
            name: $name,
            muscle_group: MuscleGroup::$muscle_group,
            icon: $icon,
        }
    };
}

pub static EXERCISE_DATABASE: [Exercise; 65] = [
    exercise!("back-1", "Pull-ups", Back, "💪"),
    exercise!("back-2", "Lat Pulldowns", Back, "💪"),
    exercise!("back-3", "Seated Cable Rows", Back, "💪"),
    exercise!("back-4", "Barbell Rows", Back, "💪"),
    exercise!("back-5", "T-Bar Rows", Back, "💪"),
    exercise!("back-6", "Deadlifts", Back, "💪"),
    exercise!("back-7", "Shrugs", Back, "💪"),
    exercise!("back-8", "Face Pulls", Back, "💪"),
    exercise!("chest-1", "Bench Press", Chest, "🏋️"),
    exercise!("chest-2", "Incline Bench Press", Chest, "🏋️"),
    exercise!("chest-3", "Decline Bench Press", Chest, "🏋️"),
    exercise!("chest-4", "Dumbbell Press", Chest, "🏋️"),
    exercise!("chest-5", "Incline Dumbbell Press", Chest, "🏋️"),
    exercise!("chest-6", "Chest Flyes", Chest, "🏋️"),
    exercise!("chest-7", "Cable Flyes", Chest, "🏋️"),
    exercise!("chest-8", "Push-ups", Chest, "🏋️"),
    exercise!("chest-9", "Dips", Chest, "🏋️"),
    exercise!("shoulder-1", "Overhead Press", Shoulder, "🤸"),
    exercise!("shoulder-2", "Dumbbell Shoulder Press", Shoulder, "🤸"),
    exercise!("shoulder-3", "Lateral Raises", Shoulder, "🤸"),
    exercise!("shoulder-4", "Front Raises", Shoulder, "🤸"),
    exercise!("shoulder-5", "Rear Delt Flyes", Shoulder, "🤸"),
    exercise!("shoulder-6", "Arnold Press", Shoulder, "🤸"),
    exercise!("shoulder-7", "Upright Rows", Shoulder, "🤸"),
    exercise!("shoulder-8", "Pike Push-ups", Shoulder, "🤸"),
    exercise!("biceps-1", "Barbell Curls", Biceps, "💪"),
    exercise!("biceps-2", "Dumbbell Curls", Biceps, "💪"),
    exercise!("biceps-3", "Hammer Curls", Biceps, "💪"),
    exercise!("biceps-4", "Preacher Curls", Biceps, "💪"),
    exercise!("biceps-5", "Cable Curls", Biceps, "💪"),
    exercise!("biceps-6", "Concentration Curls", Biceps, "💪"),
    exercise!("biceps-7", "21s (Curl Variation)", Biceps, "💪"),
    exercise!("triceps-1", "Close-Grip Bench Press", Triceps, "🔨"),
    exercise!("triceps-2", "Tricep Dips", Triceps, "🔨"),
    exercise!("triceps-3", "Overhead Tricep Extension", Triceps, "🔨"),
    exercise!("triceps-4", "Tricep Pushdowns", Triceps, "🔨"),
    exercise!("triceps-5", "Diamond Push-ups", Triceps, "🔨"),
    exercise!("triceps-6", "Skull Crushers", Triceps, "🔨"),
    exercise!("triceps-7", "Kickbacks", Triceps, "🔨"),
    exercise!("legs-1", "Squats", Legs, "🦵"),
    exercise!("legs-2", "Leg Press", Legs, "🦵"),
    exercise!("legs-3", "Lunges", Legs, "🦵"),
    exercise!("legs-4", "Romanian Deadlifts", Legs, "🦵"),
    exercise!("legs-5", "Leg Curls", Legs, "🦵"),
    exercise!("legs-6", "Leg Extensions", Legs, "🦵"),
    exercise!("legs-7", "Calf Raises", Legs, "🦵"),
    exercise!("legs-8", "Bulgarian Split Squats", Legs, "🦵"),
    exercise!("legs-9", "Hip Thrusts", Legs, "🦵"),
    exercise!("legs-10", "Walking Lunges", Legs, "🦵"),
    exercise!("abs-1", "Crunches", Abs, "🏃"),
    exercise!("abs-2", "Planks", Abs, "🏃"),
    exercise!("abs-3", "Russian Twists", Abs, "🏃"),
    exercise!("abs-4", "Leg Raises", Abs, "🏃"),
    exercise!("abs-5", "Mountain Climbers", Abs, "🏃"),
    exercise!("abs-6", "Dead Bug", Abs, "🏃"),
    exercise!("abs-7", "Bicycle Crunches", Abs, "🏃"),
    exercise!("abs-8", "Hanging Knee Raises", Abs, "🏃"),
    exercise!("cardio-1", "Treadmill", Cardio, "🏃‍♂️"),
    exercise!("cardio-2", "Elliptical", Cardio, "🏃‍♂️"),
    exercise!("cardio-3", "Stationary Bike", Cardio, "🚴"),
    exercise!("cardio-4", "Rowing Machine", Cardio, "🚣"),
    exercise!("cardio-5", "Stair Climber", Cardio, "🏃‍♂️"),
    exercise!("cardio-6", "Jump Rope", Cardio, "🏃‍♂️"),
    exercise!("cardio-7", "Burpees", Cardio, "🏃‍♂️"),
    exercise!("cardio-8", "High Knees", Cardio, "🏃‍♂️"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids = EXERCISE_DATABASE
            .iter()
            .map(|exercise| exercise.id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), EXERCISE_DATABASE.len());
    }

    #[test]
    fn test_ids_match_muscle_group() {
        for exercise in &EXERCISE_DATABASE {
            let prefix = exercise.id.rsplit_once('-').map(|(prefix, _)| prefix);
            assert_eq!(
                prefix.map(str::to_string),
                Some(exercise.muscle_group.to_string()),
                "{}",
                exercise.id
            );
        }
    }

    #[test]
    fn test_every_muscle_group_is_covered() {
        for muscle_group in MuscleGroup::iter() {
            assert!(!exercises_by_muscle_group(muscle_group).is_empty());
        }
    }

    #[rstest]
    #[case("legs-1", Some("Squats"))]
    #[case("back-8", Some("Face Pulls"))]
    #[case("cardio-3", Some("Stationary Bike"))]
    #[case("legs-11", None)]
    #[case("", None)]
    fn test_exercise_by_id(#[case] id: &str, #[case] expected: Option<&str>) {
        assert_eq!(exercise_by_id(id).map(|exercise| exercise.name), expected);
    }

    #[test]
    fn test_exercises_by_muscle_groups_preserves_catalog_order() {
        let selection = BTreeSet::from([MuscleGroup::Chest, MuscleGroup::Legs]);
        let exercises = exercises_by_muscle_groups(&selection);
        let ids = exercises
            .iter()
            .map(|exercise| exercise.id)
            .collect::<Vec<_>>();
        let expected = EXERCISE_DATABASE
            .iter()
            .filter(|exercise| selection.contains(&exercise.muscle_group))
            .map(|exercise| exercise.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, expected);
        assert_eq!(ids.len(), 19);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
    }

    #[test]
    fn test_exercises_by_muscle_groups_empty_selection() {
        assert!(exercises_by_muscle_groups(&BTreeSet::new()).is_empty());
    }
}
