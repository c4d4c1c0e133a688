use chrono::Duration;

use crate::{Category, ExerciseID, GeneratedSet, MuscleGroup};

/// Generated workout plan, not yet assigned to a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutTemplate {
    pub name: String,
    /// In performance order.
    pub exercises: Vec<GeneratedExercise>,
    /// Minutes, rounded up.
    pub estimated_duration: u32,
    /// 1 (easy) to 5 (hard).
    pub difficulty: u8,
    pub focus_areas: Vec<MuscleGroup>,
}

impl WorkoutTemplate {
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::minutes(i64::from(self.estimated_duration))
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedExercise {
    pub id: ExerciseID,
    pub name: String,
    pub category: Category,
    pub bodyweight: bool,
    /// In performance order.
    pub sets: Vec<GeneratedSet>,
}
