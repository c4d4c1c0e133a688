use std::{fmt, slice::Iter};

use crate::Property;

/// Muscle groups a workout can target.
///
/// The display names are the identifiers used by the exercise catalog and in generated workout
/// names.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    FullBody,
    Back,
    Legs,
    Chest,
    Shoulders,
    Biceps,
    Triceps,
    Abs,
    Glutes,
    Calves,
    LowerBack,
    Forearm,
    Trapezius,
    Cardio,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 14] = [
            MuscleGroup::FullBody,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Chest,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Abs,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::LowerBack,
            MuscleGroup::Forearm,
            MuscleGroup::Trapezius,
            MuscleGroup::Cardio,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::FullBody => "Full-body",
            MuscleGroup::Back => "Back",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Calves => "Calves",
            MuscleGroup::LowerBack => "Lower-back",
            MuscleGroup::Forearm => "Forearm",
            MuscleGroup::Trapezius => "Trapezius",
            MuscleGroup::Cardio => "Cardio",
        }
    }
}

impl MuscleGroup {
    /// Position in a workout, lower values are trained first.
    #[must_use]
    pub fn priority(self) -> u32 {
        match self {
            MuscleGroup::FullBody => 1,
            MuscleGroup::Back => 2,
            MuscleGroup::Legs => 3,
            MuscleGroup::Chest => 4,
            MuscleGroup::Shoulders => 5,
            MuscleGroup::Biceps => 6,
            MuscleGroup::Triceps => 7,
            MuscleGroup::Abs => 8,
            MuscleGroup::Glutes => 9,
            MuscleGroup::Calves => 10,
            MuscleGroup::LowerBack => 11,
            MuscleGroup::Forearm => 12,
            MuscleGroup::Trapezius => 13,
            MuscleGroup::Cardio => 14,
        }
    }

    /// Starting load in kg for an intermediate lifter using a dumbbell.
    #[must_use]
    pub fn base_weight(self) -> f32 {
        #[allow(clippy::match_same_arms)]
        match self {
            MuscleGroup::FullBody => 15.0,
            MuscleGroup::Back => 25.0,
            MuscleGroup::Legs => 40.0,
            MuscleGroup::Chest => 25.0,
            MuscleGroup::Shoulders => 12.0,
            MuscleGroup::Biceps => 8.0,
            MuscleGroup::Triceps => 8.0,
            MuscleGroup::Abs => 5.0,
            MuscleGroup::Glutes => 30.0,
            MuscleGroup::Calves => 20.0,
            MuscleGroup::LowerBack => 15.0,
            MuscleGroup::Forearm => 5.0,
            MuscleGroup::Trapezius => 20.0,
            MuscleGroup::Cardio => 5.0,
        }
    }

    /// Large groups receive left-over exercises first when a workout is split across groups.
    #[must_use]
    pub fn is_large(self) -> bool {
        matches!(
            self,
            MuscleGroup::Back | MuscleGroup::Legs | MuscleGroup::Chest | MuscleGroup::FullBody
        )
    }

    #[must_use]
    pub fn is_upper_body(self) -> bool {
        matches!(
            self,
            MuscleGroup::Chest
                | MuscleGroup::Back
                | MuscleGroup::Shoulders
                | MuscleGroup::Biceps
                | MuscleGroup::Triceps
                | MuscleGroup::Forearm
                | MuscleGroup::Trapezius
        )
    }

    #[must_use]
    pub fn is_lower_body(self) -> bool {
        matches!(
            self,
            MuscleGroup::Legs | MuscleGroup::Glutes | MuscleGroup::Calves
        )
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for MuscleGroup {
    type Error = MuscleGroupError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|m| m.name() == value.trim())
            .copied()
            .ok_or(MuscleGroupError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleGroupError {
    #[error("Invalid muscle group \"{0}\"")]
    Invalid(String),
}
