use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    CreateError, DeleteError, GeneratedExercise, Name, ReadError, Settings, SettingsRepository,
    SettingsService, UpdateError, Workout, WorkoutID, WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn create_workout(&self, name: Name, date: NaiveDate) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(name, date),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn add_exercise_to_workout(
        &self,
        id: WorkoutID,
        exercise: GeneratedExercise,
    ) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.repository.add_exercise_to_workout(id, exercise),
            UpdateError,
            "add exercise to",
            "workout"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}

impl<R: SettingsRepository> SettingsService for Service<R> {
    async fn get_settings(&self) -> Result<Settings, ReadError> {
        log_on_error!(
            self.repository.read_settings(),
            ReadError,
            "get",
            "settings"
        )
    }

    async fn set_settings(&self, settings: Settings) -> Result<Settings, UpdateError> {
        log_on_error!(
            self.repository.write_settings(settings),
            UpdateError,
            "set",
            "settings"
        )
    }
}
