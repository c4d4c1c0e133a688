use std::{fmt, slice::Iter};

use derive_more::Deref;
use uuid::Uuid;

use crate::MuscleGroup;

/// Read-only source of exercises, queried per muscle group.
pub trait ExerciseCatalog {
    /// All exercises tagged with the muscle group, primary tags before secondary tags.
    fn exercises_by_muscle(&self, muscle_group: MuscleGroup) -> Vec<CatalogExercise>;
}

impl ExerciseCatalog for [CatalogExercise] {
    fn exercises_by_muscle(&self, muscle_group: MuscleGroup) -> Vec<CatalogExercise> {
        let (primary, secondary): (Vec<_>, Vec<_>) = self
            .iter()
            .filter(|e| e.is_tagged(muscle_group))
            .cloned()
            .partition(|e| e.muscle_group == muscle_group);
        primary.into_iter().chain(secondary).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogExercise {
    pub id: ExerciseID,
    pub name: String,
    pub muscle_group: MuscleGroup,
    pub secondary_muscle_groups: Vec<MuscleGroup>,
    pub equipment: Equipment,
    pub category: Category,
    pub bodyweight: bool,
    /// Smallest load step in kg, used to round estimated weights.
    pub weight_increment: f32,
}

impl CatalogExercise {
    #[must_use]
    pub fn is_tagged(&self, muscle_group: MuscleGroup) -> bool {
        self.muscle_group == muscle_group || self.secondary_muscle_groups.contains(&muscle_group)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    const NAMESPACE: Uuid = Uuid::from_u128(0x6c69_6674_706c_616e_2d65_7865_7263_6973);

    /// Stable identifier derived from the exercise name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&Self::NAMESPACE, name.as_bytes()))
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Equipment {
    Bodyweight,
    ResistanceBand,
    Machine,
    Cable,
    Dumbbell,
    Kettlebell,
    Barbell,
    PullUpBar,
    SuspensionTrainer,
    GymnasticRings,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 10] = [
            Equipment::Bodyweight,
            Equipment::ResistanceBand,
            Equipment::Machine,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Barbell,
            Equipment::PullUpBar,
            Equipment::SuspensionTrainer,
            Equipment::GymnasticRings,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::Machine => "Machine",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Barbell => "Barbell",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::SuspensionTrainer => "TRX",
            Equipment::GymnasticRings => "Gymnastic Rings",
        }
    }
}

impl Equipment {
    /// How demanding the equipment is to use, from 1 (simple) to 5 (complex).
    #[must_use]
    pub fn complexity(self) -> u8 {
        #[allow(clippy::match_same_arms)]
        match self {
            Equipment::Bodyweight => 1,
            Equipment::ResistanceBand => 2,
            Equipment::Machine => 2,
            Equipment::PullUpBar => 2,
            Equipment::Cable => 3,
            Equipment::Dumbbell => 3,
            Equipment::Kettlebell => 4,
            Equipment::Barbell => 4,
            Equipment::SuspensionTrainer => 5,
            Equipment::GymnasticRings => 5,
        }
    }

    /// Factor applied to the base weight of a muscle group.
    #[must_use]
    pub fn load_multiplier(self) -> f32 {
        #[allow(clippy::match_same_arms)]
        match self {
            Equipment::Bodyweight
            | Equipment::PullUpBar
            | Equipment::SuspensionTrainer
            | Equipment::GymnasticRings => 0.0,
            Equipment::ResistanceBand => 0.5,
            Equipment::Dumbbell => 1.0,
            Equipment::Kettlebell => 1.0,
            Equipment::Cable => 1.2,
            Equipment::Machine => 1.5,
            Equipment::Barbell => 2.0,
        }
    }

    #[must_use]
    pub fn is_bodyweight(self) -> bool {
        matches!(
            self,
            Equipment::Bodyweight
                | Equipment::PullUpBar
                | Equipment::SuspensionTrainer
                | Equipment::GymnasticRings
        )
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Equipment {
    type Error = EquipmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Equipment::iter()
            .find(|e| e.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or(EquipmentError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EquipmentError {
    #[error("Invalid equipment \"{0}\"")]
    Invalid(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Strength,
    Cardio,
    Plyometrics,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 3] =
            [Category::Strength, Category::Cardio, Category::Plyometrics];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
            Category::Plyometrics => "Plyometrics",
        }
    }
}

impl TryFrom<&str> for Category {
    type Error = CategoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Category::iter()
            .find(|c| c.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or(CategoryError::Invalid(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CategoryError {
    #[error("Invalid category \"{0}\"")]
    Invalid(String),
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
