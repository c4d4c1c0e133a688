use std::{collections::HashSet, fmt};

use derive_more::Deref;

use crate::{Equipment, ExerciseID, MuscleGroup};

#[derive(Debug, Clone, PartialEq)]
pub struct BuilderPreferences {
    pub gender: Gender,
    pub experience_level: ExperienceLevel,
    pub selected_muscles: MuscleSelection,
    pub goal: WorkoutGoal,
    /// Applied only if enough candidates remain.
    pub preferred_equipment: HashSet<Equipment>,
    pub avoided_equipment: HashSet<Equipment>,
    pub excluded_exercises: HashSet<ExerciseID>,
}

impl BuilderPreferences {
    #[must_use]
    pub fn new(
        gender: Gender,
        experience_level: ExperienceLevel,
        selected_muscles: MuscleSelection,
        goal: WorkoutGoal,
    ) -> Self {
        Self {
            gender,
            experience_level,
            selected_muscles,
            goal,
            preferred_equipment: HashSet::new(),
            avoided_equipment: HashSet::new(),
            excluded_exercises: HashSet::new(),
        }
    }
}

/// Non-empty list of distinct muscle groups in selection order.
#[derive(Deref, Debug, Clone, PartialEq, Eq)]
pub struct MuscleSelection(Vec<MuscleGroup>);

impl MuscleSelection {
    pub fn new(muscle_groups: &[MuscleGroup]) -> Result<Self, PreferencesError> {
        let mut selection: Vec<MuscleGroup> = Vec::with_capacity(muscle_groups.len());

        for muscle_group in muscle_groups {
            if !selection.contains(muscle_group) {
                selection.push(*muscle_group);
            }
        }

        if selection.is_empty() {
            return Err(PreferencesError::NoMuscleGroups);
        }

        Ok(Self(selection))
    }
}

impl TryFrom<&[&str]> for MuscleSelection {
    type Error = PreferencesError;

    fn try_from(value: &[&str]) -> Result<Self, Self::Error> {
        let muscle_groups = value
            .iter()
            .map(|m| MuscleGroup::try_from(*m))
            .collect::<Result<Vec<_>, _>>()?;
        MuscleSelection::new(&muscle_groups)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PreferencesError {
    #[error("At least one muscle group must be selected")]
    NoMuscleGroups,
    #[error(transparent)]
    MuscleGroup(#[from] crate::MuscleGroupError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "female" => Gender::Female,
            "male" => Gender::Male,
            _ => Gender::Other,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gender::Female => "female",
                Gender::Male => "male",
                Gender::Other => "other",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExperienceLevel {
    Sedentary,
    Beginner,
    Intermediate,
    Advanced,
    Athlete,
}

impl ExperienceLevel {
    #[must_use]
    pub fn exercise_count(self) -> u32 {
        match self {
            ExperienceLevel::Sedentary => 4,
            ExperienceLevel::Beginner => 6,
            ExperienceLevel::Intermediate => 8,
            ExperienceLevel::Advanced => 10,
            ExperienceLevel::Athlete => 12,
        }
    }

    #[must_use]
    pub fn load_multiplier(self) -> f32 {
        match self {
            ExperienceLevel::Sedentary => 0.5,
            ExperienceLevel::Beginner => 1.0,
            ExperienceLevel::Intermediate => 1.5,
            ExperienceLevel::Advanced => 2.0,
            ExperienceLevel::Athlete => 2.5,
        }
    }

    #[must_use]
    pub fn base_difficulty(self) -> u8 {
        match self {
            ExperienceLevel::Sedentary => 1,
            ExperienceLevel::Beginner => 2,
            ExperienceLevel::Intermediate => 3,
            ExperienceLevel::Advanced => 4,
            ExperienceLevel::Athlete => 5,
        }
    }

    /// Warm-up time in seconds.
    #[must_use]
    pub fn warmup(self) -> u32 {
        match self {
            ExperienceLevel::Sedentary | ExperienceLevel::Beginner => 300,
            ExperienceLevel::Intermediate | ExperienceLevel::Advanced | ExperienceLevel::Athlete => {
                180
            }
        }
    }
}

/// Unknown levels fall back to beginner.
impl From<&str> for ExperienceLevel {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "sedentary" => ExperienceLevel::Sedentary,
            "intermediate" => ExperienceLevel::Intermediate,
            "advanced" => ExperienceLevel::Advanced,
            "athlete" => ExperienceLevel::Athlete,
            _ => ExperienceLevel::Beginner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutGoal {
    Strength,
    Hypertrophy,
    Endurance,
    WeightLoss,
    General,
}

impl WorkoutGoal {
    #[must_use]
    pub fn set_rep_config(self) -> SetRepConfig {
        match self {
            WorkoutGoal::Strength => SetRepConfig {
                sets: 4,
                min_reps: 4,
                max_reps: 6,
                rest: 180,
            },
            WorkoutGoal::Hypertrophy => SetRepConfig {
                sets: 3,
                min_reps: 8,
                max_reps: 12,
                rest: 90,
            },
            WorkoutGoal::Endurance => SetRepConfig {
                sets: 3,
                min_reps: 15,
                max_reps: 20,
                rest: 60,
            },
            WorkoutGoal::WeightLoss => SetRepConfig {
                sets: 3,
                min_reps: 12,
                max_reps: 15,
                rest: 45,
            },
            WorkoutGoal::General => SetRepConfig {
                sets: 3,
                min_reps: 10,
                max_reps: 12,
                rest: 60,
            },
        }
    }

    /// Workout name used when the muscle selection does not suggest one.
    #[must_use]
    pub fn workout_name(self) -> &'static str {
        match self {
            WorkoutGoal::Strength => "Strength Workout",
            WorkoutGoal::Hypertrophy => "Muscle Building Workout",
            WorkoutGoal::Endurance => "Endurance Workout",
            WorkoutGoal::WeightLoss => "Fat Burning Workout",
            WorkoutGoal::General => "Complete Workout",
        }
    }
}

/// Unknown goals fall back to general.
impl From<&str> for WorkoutGoal {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "strength" => WorkoutGoal::Strength,
            "hypertrophy" => WorkoutGoal::Hypertrophy,
            "endurance" => WorkoutGoal::Endurance,
            "weightloss" => WorkoutGoal::WeightLoss,
            _ => WorkoutGoal::General,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRepConfig {
    pub sets: u32,
    pub min_reps: u32,
    pub max_reps: u32,
    /// Rest after each set in seconds.
    pub rest: u32,
}
