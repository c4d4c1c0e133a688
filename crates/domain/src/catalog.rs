use std::collections::BTreeMap;

use crate::{CatalogExercise, Category, Equipment, ExerciseCatalog, ExerciseID, MuscleGroup};

/// Built-in exercise catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct Catalog;

impl ExerciseCatalog for Catalog {
    fn exercises_by_muscle(&self, muscle_group: MuscleGroup) -> Vec<CatalogExercise> {
        CATALOG_EXERCISES.exercises_by_muscle(muscle_group)
    }
}

static CATALOG_EXERCISES: std::sync::LazyLock<Vec<CatalogExercise>> =
    std::sync::LazyLock::new(|| EXERCISES.values().map(CatalogExercise::from).collect());

#[derive(Clone, Debug)]
pub struct Exercise {
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub secondary_muscle_groups: &'static [MuscleGroup],
    pub equipment: Equipment,
    pub category: Category,
    pub weight_increment: f32,
}

impl From<&BaseExercise> for Exercise {
    fn from(value: &BaseExercise) -> Self {
        Exercise {
            name: value.name,
            muscle_group: value.muscle_group,
            secondary_muscle_groups: value.secondary_muscle_groups,
            equipment: value.equipment,
            category: value.category,
            weight_increment: value.weight_increment,
        }
    }
}

impl From<&Exercise> for CatalogExercise {
    fn from(value: &Exercise) -> Self {
        CatalogExercise {
            id: ExerciseID::from_name(value.name),
            name: value.name.to_string(),
            muscle_group: value.muscle_group,
            secondary_muscle_groups: value.secondary_muscle_groups.to_vec(),
            equipment: value.equipment,
            category: value.category,
            bodyweight: value.equipment.is_bodyweight(),
            weight_increment: value.weight_increment,
        }
    }
}

#[derive(Clone)]
struct BaseExercise {
    pub name: &'static str,
    pub muscle_group: MuscleGroup,
    pub secondary_muscle_groups: &'static [MuscleGroup],
    pub equipment: Equipment,
    pub category: Category,
    pub weight_increment: f32,
    pub variants: &'static [ExerciseVariant],
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct ExerciseVariant {
    pub name: &'static str,
    pub muscle_group: Option<MuscleGroup>,
    pub secondary_muscle_groups: Option<&'static [MuscleGroup]>,
    pub equipment: Option<Equipment>,
    pub category: Option<Category>,
    pub weight_increment: Option<f32>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            name: "",
            muscle_group: None,
            secondary_muscle_groups: None,
            equipment: None,
            category: None,
            weight_increment: None,
        }
    }
}

pub(crate) static EXERCISES: std::sync::LazyLock<BTreeMap<&'static str, Exercise>> =
    std::sync::LazyLock::new(|| {
        EXERCISE_VARIANTS
            .iter()
            .map(Exercise::from)
            .chain(EXERCISE_VARIANTS.iter().flat_map(|e| {
                e.variants.iter().map(|v| Exercise {
                    name: v.name,
                    muscle_group: v.muscle_group.unwrap_or(e.muscle_group),
                    secondary_muscle_groups: v
                        .secondary_muscle_groups
                        .unwrap_or(e.secondary_muscle_groups),
                    equipment: v.equipment.unwrap_or(e.equipment),
                    category: v.category.unwrap_or(e.category),
                    weight_increment: v.weight_increment.unwrap_or(e.weight_increment),
                })
            }))
            .map(|e| (e.name, e))
            .collect::<BTreeMap<_, _>>()
    });

const EXERCISE_VARIANTS: &[BaseExercise] = &[
    BaseExercise {
        name: "Ab Wheel Rollout",
        muscle_group: MuscleGroup::Abs,
        secondary_muscle_groups: &[MuscleGroup::LowerBack],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Kneeling Ab Wheel Rollout",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Back Extension",
        muscle_group: MuscleGroup::LowerBack,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Back Extension",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Back Extension",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Bench Press",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Barbell Decline Bench Press",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Barbell Incline Bench Press",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Chest Press",
                equipment: Some(Equipment::Cable),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Bench Press",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Decline Bench Press",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Incline Bench Press",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Chest Press",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Smith Machine Bench Press",
                equipment: Some(Equipment::Machine),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Close Grip Bench Press",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[MuscleGroup::Chest],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[],
    },
    BaseExercise {
        name: "Barbell Curl",
        muscle_group: MuscleGroup::Biceps,
        secondary_muscle_groups: &[MuscleGroup::Forearm],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Cable Curl",
                equipment: Some(Equipment::Cable),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Concentration Curl",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Curl",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Hammer Curl",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "EZ Bar Curl",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Curl",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Deadlift",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Glutes, MuscleGroup::LowerBack],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Barbell Romanian Deadlift",
                muscle_group: Some(MuscleGroup::Legs),
                secondary_muscle_groups: Some(&[MuscleGroup::Glutes, MuscleGroup::LowerBack]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Deadlift",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Deadlift",
                equipment: Some(Equipment::Kettlebell),
                weight_increment: Some(4.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Good Morning",
        muscle_group: MuscleGroup::LowerBack,
        secondary_muscle_groups: &[MuscleGroup::Legs],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Resistance Band Good Morning",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Hip Thrust",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[MuscleGroup::Legs],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Hip Thrust",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Glute Bridge",
                equipment: Some(Equipment::Bodyweight),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Hip Thrust",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Single Leg Glute Bridge",
                equipment: Some(Equipment::Bodyweight),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Overhead Press",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Triceps],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Shoulder Press",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Overhead Press",
                equipment: Some(Equipment::Kettlebell),
                weight_increment: Some(4.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Shoulder Press",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Overhead Press",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Row",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Biceps, MuscleGroup::Trapezius],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Cable Row",
                equipment: Some(Equipment::Cable),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Row",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Row",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Row",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Ring Row",
                equipment: Some(Equipment::GymnasticRings),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "TRX Row",
                equipment: Some(Equipment::SuspensionTrainer),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Shrug",
        muscle_group: MuscleGroup::Trapezius,
        secondary_muscle_groups: &[MuscleGroup::Forearm],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Cable Shrug",
                equipment: Some(Equipment::Cable),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Shrug",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Shrug",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Skull Crusher",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Skull Crusher",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Squat",
        muscle_group: MuscleGroup::Legs,
        secondary_muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::LowerBack],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Bodyweight Squat",
                equipment: Some(Equipment::Bodyweight),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Squat",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Goblet Squat",
                equipment: Some(Equipment::Kettlebell),
                weight_increment: Some(4.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Smith Machine Squat",
                equipment: Some(Equipment::Machine),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Barbell Thruster",
        muscle_group: MuscleGroup::FullBody,
        secondary_muscle_groups: &[MuscleGroup::Legs, MuscleGroup::Shoulders],
        equipment: Equipment::Barbell,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Thruster",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Kettlebell Thruster",
                equipment: Some(Equipment::Kettlebell),
                weight_increment: Some(4.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Bear Crawl",
        muscle_group: MuscleGroup::FullBody,
        secondary_muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Abs],
        equipment: Equipment::Bodyweight,
        category: Category::Cardio,
        weight_increment: 1.0,
        variants: &[],
    },
    BaseExercise {
        name: "Box Jump",
        muscle_group: MuscleGroup::Legs,
        secondary_muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::Calves, MuscleGroup::Cardio],
        equipment: Equipment::Bodyweight,
        category: Category::Plyometrics,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Jump Squat",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Burpee",
        muscle_group: MuscleGroup::Cardio,
        secondary_muscle_groups: &[MuscleGroup::FullBody],
        equipment: Equipment::Bodyweight,
        category: Category::Cardio,
        weight_increment: 1.0,
        variants: &[],
    },
    BaseExercise {
        name: "Cable Crossover",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        equipment: Equipment::Cable,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Fly",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Fly",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Fly",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Cable Face Pull",
        muscle_group: MuscleGroup::Trapezius,
        secondary_muscle_groups: &[MuscleGroup::Shoulders],
        equipment: Equipment::Cable,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Resistance Band Face Pull",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Cable Glute Kickback",
        muscle_group: MuscleGroup::Glutes,
        secondary_muscle_groups: &[],
        equipment: Equipment::Cable,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Donkey Kick",
                equipment: Some(Equipment::Bodyweight),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Kickback",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Cable Lat Pulldown",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Biceps],
        equipment: Equipment::Cable,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Machine Lat Pulldown",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Lat Pulldown",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Cable Triceps Pushdown",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[],
        equipment: Equipment::Cable,
        category: Category::Strength,
        weight_increment: 2.5,
        variants: &[
            ExerciseVariant {
                name: "Machine Triceps Pushdown",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Triceps Pushdown",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Calf Raise",
        muscle_group: MuscleGroup::Calves,
        secondary_muscle_groups: &[],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Barbell Calf Raise",
                equipment: Some(Equipment::Barbell),
                weight_increment: Some(2.5),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Calf Raise",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Calf Raise",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Seated Machine Calf Raise",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Single Leg Calf Raise",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Crunch",
        muscle_group: MuscleGroup::Abs,
        secondary_muscle_groups: &[],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Bicycle Crunch",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Crunch",
                equipment: Some(Equipment::Cable),
                weight_increment: Some(2.5),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Crunch",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dip",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Shoulders],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Bench Dip",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Dip",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Ring Dip",
                equipment: Some(Equipment::GymnasticRings),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Farmer's Carry",
        muscle_group: MuscleGroup::Forearm,
        secondary_muscle_groups: &[MuscleGroup::Trapezius, MuscleGroup::FullBody],
        equipment: Equipment::Dumbbell,
        category: Category::Strength,
        weight_increment: 2.0,
        variants: &[
            ExerciseVariant {
                name: "Kettlebell Farmer's Carry",
                equipment: Some(Equipment::Kettlebell),
                weight_increment: Some(4.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Front Raise",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[],
        equipment: Equipment::Dumbbell,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Cable Front Raise",
                equipment: Some(Equipment::Cable),
                weight_increment: Some(2.5),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Front Raise",
                equipment: Some(Equipment::ResistanceBand),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Lateral Raise",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[],
        equipment: Equipment::Dumbbell,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Cable Lateral Raise",
                equipment: Some(Equipment::Cable),
                weight_increment: Some(1.25),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Machine Lateral Raise",
                equipment: Some(Equipment::Machine),
                weight_increment: Some(5.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Resistance Band Lateral Raise",
                equipment: Some(Equipment::ResistanceBand),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Overhead Triceps Extension",
        muscle_group: MuscleGroup::Triceps,
        secondary_muscle_groups: &[],
        equipment: Equipment::Dumbbell,
        category: Category::Strength,
        weight_increment: 2.0,
        variants: &[
            ExerciseVariant {
                name: "Cable Overhead Triceps Extension",
                equipment: Some(Equipment::Cable),
                weight_increment: Some(2.5),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Dumbbell Wrist Curl",
        muscle_group: MuscleGroup::Forearm,
        secondary_muscle_groups: &[],
        equipment: Equipment::Dumbbell,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Barbell Wrist Curl",
                equipment: Some(Equipment::Barbell),
                weight_increment: Some(2.5),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Cable Wrist Curl",
                equipment: Some(Equipment::Cable),
                weight_increment: Some(2.5),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Reverse Wrist Curl",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "High Knees",
        muscle_group: MuscleGroup::Cardio,
        secondary_muscle_groups: &[MuscleGroup::Legs],
        equipment: Equipment::Bodyweight,
        category: Category::Cardio,
        weight_increment: 1.0,
        variants: &[],
    },
    BaseExercise {
        name: "Jump Rope",
        muscle_group: MuscleGroup::Cardio,
        secondary_muscle_groups: &[MuscleGroup::Calves],
        equipment: Equipment::Bodyweight,
        category: Category::Cardio,
        weight_increment: 1.0,
        variants: &[],
    },
    BaseExercise {
        name: "Jumping Jack",
        muscle_group: MuscleGroup::Cardio,
        secondary_muscle_groups: &[],
        equipment: Equipment::Bodyweight,
        category: Category::Cardio,
        weight_increment: 1.0,
        variants: &[],
    },
    BaseExercise {
        name: "Kettlebell Swing",
        muscle_group: MuscleGroup::FullBody,
        secondary_muscle_groups: &[MuscleGroup::Glutes, MuscleGroup::LowerBack, MuscleGroup::Cardio],
        equipment: Equipment::Kettlebell,
        category: Category::Strength,
        weight_increment: 4.0,
        variants: &[
            ExerciseVariant {
                name: "Dumbbell Swing",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Kettlebell Turkish Get Up",
        muscle_group: MuscleGroup::FullBody,
        secondary_muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::Abs],
        equipment: Equipment::Kettlebell,
        category: Category::Strength,
        weight_increment: 4.0,
        variants: &[],
    },
    BaseExercise {
        name: "Lunge",
        muscle_group: MuscleGroup::Legs,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Barbell Lunge",
                equipment: Some(Equipment::Barbell),
                weight_increment: Some(2.5),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Lunge",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Dumbbell Walking Lunge",
                equipment: Some(Equipment::Dumbbell),
                weight_increment: Some(2.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Machine Leg Curl",
        muscle_group: MuscleGroup::Legs,
        secondary_muscle_groups: &[],
        equipment: Equipment::Machine,
        category: Category::Strength,
        weight_increment: 5.0,
        variants: &[
            ExerciseVariant {
                name: "Resistance Band Leg Curl",
                equipment: Some(Equipment::ResistanceBand),
                weight_increment: Some(1.0),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Machine Leg Press",
        muscle_group: MuscleGroup::Legs,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        equipment: Equipment::Machine,
        category: Category::Strength,
        weight_increment: 5.0,
        variants: &[],
    },
    BaseExercise {
        name: "Mountain Climber",
        muscle_group: MuscleGroup::Cardio,
        secondary_muscle_groups: &[MuscleGroup::Abs],
        equipment: Equipment::Bodyweight,
        category: Category::Cardio,
        weight_increment: 1.0,
        variants: &[],
    },
    BaseExercise {
        name: "Pike Push Up",
        muscle_group: MuscleGroup::Shoulders,
        secondary_muscle_groups: &[MuscleGroup::Triceps],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Handstand Push Up",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Plank",
        muscle_group: MuscleGroup::Abs,
        secondary_muscle_groups: &[MuscleGroup::LowerBack],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Side Plank",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "TRX Plank",
                equipment: Some(Equipment::SuspensionTrainer),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Pull Up",
        muscle_group: MuscleGroup::Back,
        secondary_muscle_groups: &[MuscleGroup::Biceps],
        equipment: Equipment::PullUpBar,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Chin Up",
                secondary_muscle_groups: Some(&[MuscleGroup::Biceps, MuscleGroup::Forearm]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Ring Pull Up",
                equipment: Some(Equipment::GymnasticRings),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Push Up",
        muscle_group: MuscleGroup::Chest,
        secondary_muscle_groups: &[MuscleGroup::Triceps, MuscleGroup::Shoulders],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[
            ExerciseVariant {
                name: "Decline Push Up",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Incline Push Up",
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "Ring Push Up",
                equipment: Some(Equipment::GymnasticRings),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                name: "TRX Push Up",
                equipment: Some(Equipment::SuspensionTrainer),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        name: "Superman",
        muscle_group: MuscleGroup::LowerBack,
        secondary_muscle_groups: &[MuscleGroup::Glutes],
        equipment: Equipment::Bodyweight,
        category: Category::Strength,
        weight_increment: 1.0,
        variants: &[],
    },
];
