use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::NaiveDate;
use liftplan_domain::{self as domain, Property};
use log::debug;
use serde::{Serialize, de::DeserializeOwned};
use strum::AsRefStr;
use uuid::Uuid;

use crate::{StoreError, lock};

/// Storage in JSON documents, one file per store.
#[derive(Debug)]
pub struct JsonFile {
    directory: PathBuf,
    guard: Mutex<()>,
}

impl JsonFile {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            guard: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path(&self, store: &Store) -> PathBuf {
        self.directory.join(format!("{}.json", store.as_ref()))
    }

    fn read<T: DeserializeOwned>(&self, store: &Store) -> Result<Option<T>, StoreError> {
        match fs::read_to_string(self.path(store)) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("store {} does not exist yet", store.as_ref());
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn write<T: Serialize>(&self, store: &Store, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.directory)?;
        fs::write(self.path(store), serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    fn load_workouts(&self) -> Result<Vec<domain::Workout>, StoreError> {
        self.read::<Vec<Workout>>(&Store::Workouts)?
            .unwrap_or_default()
            .into_iter()
            .map(domain::Workout::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(StoreError::Other)
    }

    fn store_workouts(&self, workouts: &[domain::Workout]) -> Result<(), StoreError> {
        self.write(
            &Store::Workouts,
            &workouts.iter().map(Workout::from).collect::<Vec<_>>(),
        )
    }
}

impl domain::WorkoutRepository for JsonFile {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        let _guard = lock(&self.guard)?;
        Ok(self.load_workouts()?)
    }

    async fn create_workout(
        &self,
        name: domain::Name,
        date: NaiveDate,
    ) -> Result<domain::Workout, domain::CreateError> {
        let _guard = lock(&self.guard)?;
        let mut workouts = self.load_workouts()?;

        if workouts.iter().any(|w| w.name == name && w.date == date) {
            return Err(domain::CreateError::Conflict);
        }

        let workout = domain::Workout {
            id: Uuid::new_v4().into(),
            name,
            date,
            exercises: vec![],
        };
        workouts.push(workout.clone());
        self.store_workouts(&workouts)?;

        Ok(workout)
    }

    async fn add_exercise_to_workout(
        &self,
        id: domain::WorkoutID,
        exercise: domain::GeneratedExercise,
    ) -> Result<domain::Workout, domain::UpdateError> {
        let _guard = lock(&self.guard)?;
        let mut workouts = self.load_workouts()?;
        let workout = workouts
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(StoreError::ObjectNotFound)?;
        workout.exercises.push(exercise);
        let workout = workout.clone();
        self.store_workouts(&workouts)?;

        Ok(workout)
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        let _guard = lock(&self.guard)?;
        let mut workouts = self.load_workouts()?;
        let len = workouts.len();
        workouts.retain(|w| w.id != id);

        if workouts.len() == len {
            return Err(StoreError::ObjectNotFound.into());
        }

        self.store_workouts(&workouts)?;

        Ok(id)
    }
}

impl domain::SettingsRepository for JsonFile {
    async fn read_settings(&self) -> Result<domain::Settings, domain::ReadError> {
        let _guard = lock(&self.guard)?;
        Ok(self.read(&Store::Settings)?.unwrap_or_default())
    }

    async fn write_settings(
        &self,
        settings: domain::Settings,
    ) -> Result<domain::Settings, domain::UpdateError> {
        let _guard = lock(&self.guard)?;
        self.write(&Store::Settings, &settings)?;
        Ok(settings)
    }
}

#[derive(AsRefStr)]
pub enum Store {
    #[strum(serialize = "workouts")]
    Workouts,
    #[strum(serialize = "settings")]
    Settings,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    pub exercises: Vec<Exercise>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            date: value.date,
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = anyhow::Error;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            date: value.date,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::GeneratedExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub bodyweight: bool,
    pub sets: Vec<Set>,
}

impl From<&domain::GeneratedExercise> for Exercise {
    fn from(value: &domain::GeneratedExercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.clone(),
            category: value.category.name().to_string(),
            bodyweight: value.bodyweight,
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl TryFrom<Exercise> for domain::GeneratedExercise {
    type Error = anyhow::Error;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: value.name,
            category: domain::Category::try_from(value.category.as_str())?,
            bodyweight: value.bodyweight,
            sets: value
                .sets
                .into_iter()
                .map(domain::GeneratedSet::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Set {
    pub id: Uuid,
    pub weight: f32,
    pub reps: u32,
    pub rest_time: u32,
    pub completed: bool,
    pub bodyweight: bool,
}

impl From<&domain::GeneratedSet> for Set {
    fn from(value: &domain::GeneratedSet) -> Self {
        Self {
            id: *value.id,
            weight: value.weight.into(),
            reps: value.reps.into(),
            rest_time: value.rest_time.into(),
            completed: value.completed,
            bodyweight: value.bodyweight,
        }
    }
}

impl TryFrom<Set> for domain::GeneratedSet {
    type Error = anyhow::Error;

    fn try_from(value: Set) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            weight: domain::Weight::new(value.weight)?,
            reps: domain::Reps::new(value.reps)?,
            rest_time: domain::Time::new(value.rest_time)?,
            completed: value.completed,
            bodyweight: value.bodyweight,
        })
    }
}
