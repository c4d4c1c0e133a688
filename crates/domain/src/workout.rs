use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DeleteError, GeneratedExercise, Name, ReadError, StorageError, UpdateError,
    WorkoutTemplate,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService: Send + Sync + 'static {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, name: Name, date: NaiveDate) -> Result<Workout, CreateError>;
    async fn add_exercise_to_workout(
        &self,
        id: WorkoutID,
        exercise: GeneratedExercise,
    ) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;

    /// Add the exercises of the template in order, stopping at the first failure.
    async fn add_template_to_workout(
        &self,
        id: WorkoutID,
        template: &WorkoutTemplate,
    ) -> Result<Workout, UpdateError> {
        let mut workout = self
            .get_workouts()
            .await?
            .into_iter()
            .find(|w| w.id == id)
            .ok_or(StorageError::NotFound)?;

        for exercise in &template.exercises {
            workout = self.add_exercise_to_workout(id, exercise.clone()).await?;
        }

        Ok(workout)
    }
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository: Send + Sync + 'static {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(&self, name: Name, date: NaiveDate) -> Result<Workout, CreateError>;
    async fn add_exercise_to_workout(
        &self,
        id: WorkoutID,
        exercise: GeneratedExercise,
    ) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub date: NaiveDate,
    pub exercises: Vec<GeneratedExercise>,
}

impl Workout {
    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    #[must_use]
    pub fn num_completed_sets(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|e| &e.sets)
            .filter(|s| s.completed)
            .count()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Category, GeneratedSet, Reps, Time, Weight};

    fn exercise(id: u128, completed: &[bool]) -> GeneratedExercise {
        GeneratedExercise {
            id: id.into(),
            name: format!("Exercise {id}"),
            category: Category::Strength,
            bodyweight: false,
            sets: completed
                .iter()
                .zip(0..)
                .map(|(completed, i)| GeneratedSet {
                    id: (id * 10 + i).into(),
                    weight: Weight(40.0),
                    reps: Reps(8),
                    rest_time: Time(90),
                    completed: *completed,
                    bodyweight: false,
                })
                .collect(),
        }
    }

    #[test]
    fn test_workout_num_sets() {
        let workout = Workout {
            id: 1.into(),
            name: Name::new("Workout: Back").unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            exercises: vec![exercise(1, &[true, true, false]), exercise(2, &[false])],
        };

        assert_eq!(workout.num_sets(), 4);
        assert_eq!(workout.num_completed_sets(), 2);
    }

    #[test]
    fn test_workout_id_nil() {
        assert!(WorkoutID::nil().is_nil());
        assert_eq!(WorkoutID::nil(), WorkoutID::default());
        assert!(!WorkoutID::from(1).is_nil());
    }
}
