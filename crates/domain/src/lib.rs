#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod error;
mod exercise;
mod generator;
mod muscle;
mod name;
mod preferences;
mod service;
mod set;
mod settings;
mod template;
mod workout;

pub use catalog::Catalog;
pub use error::{CreateError, DeleteError, ReadError, StorageError, UpdateError};
pub use exercise::{
    CatalogExercise, Category, CategoryError, Equipment, EquipmentError, ExerciseCatalog,
    ExerciseID, Property,
};
pub use generator::{
    Generator, build_sets, distribute_exercises, estimate_difficulty, estimate_duration,
    generate_workout, initial_weight, order_exercises, rank_candidates, workout_name,
};
pub use muscle::{MuscleGroup, MuscleGroupError};
pub use name::{Name, NameError};
pub use preferences::{
    BuilderPreferences, ExperienceLevel, Gender, MuscleSelection, PreferencesError, SetRepConfig,
    WorkoutGoal,
};
pub use service::Service;
pub use set::{GeneratedSet, Reps, RepsError, SetID, Time, TimeError, Weight, WeightError};
pub use settings::{Settings, SettingsRepository, SettingsService};
pub use template::{GeneratedExercise, WorkoutTemplate};
pub use workout::{Workout, WorkoutID, WorkoutRepository, WorkoutService};
