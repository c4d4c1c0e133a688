use std::{collections::BTreeMap, sync::Mutex};

use chrono::NaiveDate;
use liftplan_domain as domain;
use uuid::Uuid;

use crate::{StoreError, lock};

/// Volatile storage, mainly for tests and one-off generation.
#[derive(Debug, Default)]
pub struct InMemory {
    workouts: Mutex<BTreeMap<domain::WorkoutID, domain::Workout>>,
    settings: Mutex<Option<domain::Settings>>,
}

impl InMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl domain::WorkoutRepository for InMemory {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        Ok(lock(&self.workouts)?.values().cloned().collect())
    }

    async fn create_workout(
        &self,
        name: domain::Name,
        date: NaiveDate,
    ) -> Result<domain::Workout, domain::CreateError> {
        let mut workouts = lock(&self.workouts)?;

        if workouts.values().any(|w| w.name == name && w.date == date) {
            return Err(domain::CreateError::Conflict);
        }

        let workout = domain::Workout {
            id: Uuid::new_v4().into(),
            name,
            date,
            exercises: vec![],
        };
        workouts.insert(workout.id, workout.clone());

        Ok(workout)
    }

    async fn add_exercise_to_workout(
        &self,
        id: domain::WorkoutID,
        exercise: domain::GeneratedExercise,
    ) -> Result<domain::Workout, domain::UpdateError> {
        let mut workouts = lock(&self.workouts)?;
        let workout = workouts.get_mut(&id).ok_or(StoreError::ObjectNotFound)?;
        workout.exercises.push(exercise);
        Ok(workout.clone())
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        lock(&self.workouts)?
            .remove(&id)
            .ok_or(StoreError::ObjectNotFound)?;
        Ok(id)
    }
}

impl domain::SettingsRepository for InMemory {
    async fn read_settings(&self) -> Result<domain::Settings, domain::ReadError> {
        Ok(lock(&self.settings)?.unwrap_or_default())
    }

    async fn write_settings(
        &self,
        settings: domain::Settings,
    ) -> Result<domain::Settings, domain::UpdateError> {
        *lock(&self.settings)? = Some(settings);
        Ok(settings)
    }
}
