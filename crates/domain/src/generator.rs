//! Workout generation
//!
//! A workout is generated from the builder preferences in a single pass: the exercise count of
//! the experience level is split across the selected muscle groups, candidates are fetched from
//! the catalog and ranked per muscle group, a random sample is taken, and the combined list is
//! ordered so that large muscle groups are trained first. Each exercise receives a pyramid set
//! scheme (reps step down, weight steps up).

use std::{cmp::Reverse, collections::HashSet};

use log::{debug, warn};
use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::{
    BuilderPreferences, Catalog, CatalogExercise, ExerciseCatalog, ExperienceLevel, GeneratedExercise,
    GeneratedSet, Gender, MuscleGroup, Reps, SetRepConfig, Settings, Time, Weight,
    WorkoutGoal, WorkoutTemplate,
};

const SET_DURATION: u32 = 45;
const EXERCISE_SETUP: u32 = 60;
const STRETCHING: u32 = 180;

pub struct Generator<R> {
    rng: R,
    shuffle_candidates: bool,
}

impl Generator<ChaCha8Rng> {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let rng = settings
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        Self {
            rng,
            shuffle_candidates: settings.shuffle_candidates,
        }
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            shuffle_candidates: true,
        }
    }

    /// Take the highest ranked candidates instead of a random sample.
    #[must_use]
    pub fn without_shuffle(mut self) -> Self {
        self.shuffle_candidates = false;
        self
    }

    /// Muscle groups without sufficient catalog coverage contribute fewer exercises, so the
    /// template may contain less exercises than the experience level suggests.
    pub fn generate<C: ExerciseCatalog + ?Sized>(
        &mut self,
        preferences: &BuilderPreferences,
        catalog: &C,
    ) -> WorkoutTemplate {
        let experience_level = preferences.experience_level;
        let config = preferences.goal.set_rep_config();
        let distribution = distribute_exercises(
            &preferences.selected_muscles,
            experience_level.exercise_count(),
        );

        debug!("distribution of exercises: {distribution:?}");

        let mut selection: Vec<(MuscleGroup, CatalogExercise)> = vec![];
        let mut selected: HashSet<_> = HashSet::new();

        for (muscle_group, count) in distribution {
            let count = usize::try_from(count).unwrap_or(usize::MAX);
            if count == 0 {
                continue;
            }

            let mut candidates = catalog.exercises_by_muscle(muscle_group);
            candidates.retain(|e| !selected.contains(&e.id));
            let mut candidates = rank_candidates(candidates, muscle_group, count, preferences);

            if self.shuffle_candidates {
                candidates.shuffle(&mut self.rng);
            }
            candidates.truncate(count);

            if candidates.len() < count {
                warn!(
                    "insufficient exercises for {muscle_group}: {} of {count}",
                    candidates.len()
                );
            }

            for exercise in candidates {
                selected.insert(exercise.id);
                selection.push((muscle_group, exercise));
            }
        }

        order_exercises(&mut selection);

        let exercises = selection
            .into_iter()
            .map(|(_, exercise)| GeneratedExercise {
                sets: build_sets(&exercise, config, experience_level, &mut self.rng),
                id: exercise.id,
                name: exercise.name,
                category: exercise.category,
                bodyweight: exercise.bodyweight,
            })
            .collect::<Vec<_>>();
        let num_sets = exercises.iter().map(|e| e.sets.len()).sum();

        WorkoutTemplate {
            name: workout_name(&preferences.selected_muscles, preferences.goal),
            estimated_duration: estimate_duration(&exercises, experience_level),
            difficulty: estimate_difficulty(experience_level, num_sets),
            focus_areas: preferences.selected_muscles.to_vec(),
            exercises,
        }
    }
}

/// Generate a workout from the built-in catalog using the default settings.
#[must_use]
pub fn generate_workout(preferences: &BuilderPreferences) -> WorkoutTemplate {
    Generator::from_settings(&Settings::default()).generate(preferences, &Catalog)
}

/// Split the exercise count across the muscle groups.
///
/// Exercises left over by the even split are assigned one by one, first to the large muscle
/// groups and then to the remaining ones, each in selection order.
#[must_use]
pub fn distribute_exercises(muscle_groups: &[MuscleGroup], total: u32) -> Vec<(MuscleGroup, u32)> {
    let Ok(n) = u32::try_from(muscle_groups.len()) else {
        return vec![];
    };

    match muscle_groups {
        [] => vec![],
        [muscle_group] => vec![(*muscle_group, total)],
        _ => {
            let base = total / n;
            let remainder = total - base * n;
            let mut distribution = muscle_groups
                .iter()
                .map(|m| (*m, base))
                .collect::<Vec<_>>();
            let large = (0..muscle_groups.len()).filter(|i| muscle_groups[*i].is_large());
            let other = (0..muscle_groups.len()).filter(|i| !muscle_groups[*i].is_large());

            for i in large.chain(other).take(remainder as usize) {
                distribution[i].1 += 1;
            }

            distribution
        }
    }
}

/// Filter and order the catalog candidates of a muscle group.
///
/// The preferred equipment is only taken into account if at least `count` candidates use it.
/// Avoided equipment and excluded exercises are always removed.
#[must_use]
pub fn rank_candidates(
    candidates: Vec<CatalogExercise>,
    muscle_group: MuscleGroup,
    count: usize,
    preferences: &BuilderPreferences,
) -> Vec<CatalogExercise> {
    let mut candidates = if preferences.preferred_equipment.is_empty() {
        candidates
    } else {
        let preferred = candidates
            .iter()
            .filter(|e| preferences.preferred_equipment.contains(&e.equipment))
            .cloned()
            .collect::<Vec<_>>();
        if preferred.len() >= count {
            preferred
        } else {
            candidates
        }
    };

    candidates.retain(|e| {
        !preferences.avoided_equipment.contains(&e.equipment)
            && !preferences.excluded_exercises.contains(&e.id)
    });

    if preferences.gender == Gender::Female && muscle_group == MuscleGroup::Glutes {
        let (glutes, other): (Vec<_>, Vec<_>) = candidates
            .into_iter()
            .partition(|e| e.muscle_group == MuscleGroup::Glutes);
        candidates = glutes.into_iter().chain(other).collect();
    }

    match preferences.experience_level {
        ExperienceLevel::Sedentary | ExperienceLevel::Beginner => {
            candidates.sort_by_key(|e| e.equipment.complexity());
        }
        ExperienceLevel::Advanced | ExperienceLevel::Athlete => {
            candidates.sort_by_key(|e| Reverse(e.equipment.complexity()));
        }
        ExperienceLevel::Intermediate => {}
    }

    candidates
}

/// Stable sort by muscle group priority.
pub fn order_exercises<T>(selection: &mut [(MuscleGroup, T)]) {
    selection.sort_by_key(|(muscle_group, _)| muscle_group.priority());
}

#[must_use]
pub fn build_sets<R: Rng + ?Sized>(
    exercise: &CatalogExercise,
    config: SetRepConfig,
    experience_level: ExperienceLevel,
    rng: &mut R,
) -> Vec<GeneratedSet> {
    let initial_weight = initial_weight(exercise, experience_level);

    (0..config.sets)
        .map(|i| {
            let (weight, reps) = if exercise.bodyweight {
                (0.0, bodyweight_reps(config.min_reps))
            } else {
                #[allow(clippy::cast_precision_loss)]
                let weight = initial_weight + i as f32 * exercise.weight_increment * 0.5;
                (
                    weight,
                    config.max_reps.saturating_sub(i).max(config.min_reps),
                )
            };
            GeneratedSet {
                id: random_uuid(rng).into(),
                weight: Weight(weight),
                reps: Reps(reps),
                rest_time: Time(config.rest),
                completed: false,
                bodyweight: exercise.bodyweight,
            }
        })
        .collect()
}

/// Starting load in kg, rounded to the weight increment of the exercise.
#[must_use]
pub fn initial_weight(exercise: &CatalogExercise, experience_level: ExperienceLevel) -> f32 {
    if exercise.bodyweight {
        return 0.0;
    }

    let weight = exercise.muscle_group.base_weight()
        * experience_level.load_multiplier()
        * exercise.equipment.load_multiplier();

    if exercise.weight_increment > 0.0 {
        (weight / exercise.weight_increment).round() * exercise.weight_increment
    } else {
        weight
    }
}

/// Estimated duration in minutes, including warm-up and stretching.
#[must_use]
pub fn estimate_duration(
    exercises: &[GeneratedExercise],
    experience_level: ExperienceLevel,
) -> u32 {
    let training: u32 = exercises
        .iter()
        .map(|e| {
            EXERCISE_SETUP
                + e.sets
                    .iter()
                    .map(|s| SET_DURATION + u32::from(s.rest_time))
                    .sum::<u32>()
        })
        .sum();

    (training + experience_level.warmup() + STRETCHING).div_ceil(60)
}

#[must_use]
pub fn estimate_difficulty(experience_level: ExperienceLevel, num_sets: usize) -> u8 {
    let base = experience_level.base_difficulty();
    let difficulty = if num_sets < 10 {
        base.saturating_sub(1)
    } else if num_sets > 20 {
        base + 1
    } else {
        base
    };

    difficulty.clamp(1, 5)
}

#[must_use]
pub fn workout_name(muscle_groups: &[MuscleGroup], goal: WorkoutGoal) -> String {
    match muscle_groups {
        [muscle_group] => format!("Workout: {muscle_group}"),
        [first, second] => format!("Workout: {first} and {second}"),
        _ => {
            let upper_body = muscle_groups.iter().any(|m| m.is_upper_body());
            let lower_body = muscle_groups.iter().any(|m| m.is_lower_body());

            match (upper_body, lower_body) {
                (true, true) => "Full Workout".to_string(),
                (true, false) => "Upper Body Workout".to_string(),
                (false, true) => "Lower Body Workout".to_string(),
                (false, false) => goal.workout_name().to_string(),
            }
        }
    }
}

fn bodyweight_reps(min_reps: u32) -> u32 {
    (min_reps * 3).div_ceil(2)
}

fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Catalog, Category, Equipment, ExerciseID, MuscleSelection, Property};

    fn exercise(name: &str, muscle_group: MuscleGroup, equipment: Equipment) -> CatalogExercise {
        CatalogExercise {
            id: ExerciseID::from_name(name),
            name: name.to_string(),
            muscle_group,
            secondary_muscle_groups: vec![],
            equipment,
            category: Category::Strength,
            bodyweight: equipment.is_bodyweight(),
            weight_increment: 2.5,
        }
    }

    fn preferences(
        experience_level: ExperienceLevel,
        muscle_groups: &[MuscleGroup],
        goal: WorkoutGoal,
    ) -> BuilderPreferences {
        BuilderPreferences::new(
            Gender::Male,
            experience_level,
            MuscleSelection::new(muscle_groups).unwrap(),
            goal,
        )
    }

    fn names(exercises: &[CatalogExercise]) -> Vec<&str> {
        exercises.iter().map(|e| e.name.as_str()).collect()
    }

    fn generated_exercise(num_sets: u32, rest: u32) -> GeneratedExercise {
        GeneratedExercise {
            id: ExerciseID::nil(),
            name: "Push Up".to_string(),
            category: Category::Strength,
            bodyweight: true,
            sets: (0..num_sets)
                .map(|i| GeneratedSet {
                    id: u128::from(i).into(),
                    weight: Weight::ZERO,
                    reps: Reps(12),
                    rest_time: Time(rest),
                    completed: false,
                    bodyweight: true,
                })
                .collect(),
        }
    }

    #[rstest]
    #[case(&[MuscleGroup::Chest], 6, &[(MuscleGroup::Chest, 6)])]
    #[case(
        &[MuscleGroup::Legs, MuscleGroup::Chest],
        4,
        &[(MuscleGroup::Legs, 2), (MuscleGroup::Chest, 2)]
    )]
    #[case(
        &[MuscleGroup::Biceps, MuscleGroup::Back, MuscleGroup::Triceps],
        8,
        &[(MuscleGroup::Biceps, 3), (MuscleGroup::Back, 3), (MuscleGroup::Triceps, 2)]
    )]
    #[case(
        &[MuscleGroup::Chest, MuscleGroup::Legs, MuscleGroup::Shoulders],
        10,
        &[(MuscleGroup::Chest, 4), (MuscleGroup::Legs, 3), (MuscleGroup::Shoulders, 3)]
    )]
    #[case(
        &[
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Abs,
            MuscleGroup::Calves
        ],
        12,
        &[
            (MuscleGroup::Shoulders, 3),
            (MuscleGroup::Biceps, 3),
            (MuscleGroup::Triceps, 2),
            (MuscleGroup::Abs, 2),
            (MuscleGroup::Calves, 2)
        ]
    )]
    #[case(
        &[
            MuscleGroup::Abs,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearm,
            MuscleGroup::Calves,
            MuscleGroup::Glutes
        ],
        4,
        &[
            (MuscleGroup::Abs, 1),
            (MuscleGroup::Biceps, 1),
            (MuscleGroup::Triceps, 1),
            (MuscleGroup::Forearm, 1),
            (MuscleGroup::Calves, 0),
            (MuscleGroup::Glutes, 0)
        ]
    )]
    #[case(&[], 6, &[])]
    fn test_distribute_exercises(
        #[case] muscle_groups: &[MuscleGroup],
        #[case] total: u32,
        #[case] expected: &[(MuscleGroup, u32)],
    ) {
        assert_eq!(distribute_exercises(muscle_groups, total), expected);
    }

    #[rstest]
    fn test_distribute_exercises_sum(
        #[values(
            ExperienceLevel::Sedentary,
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
            ExperienceLevel::Athlete
        )]
        experience_level: ExperienceLevel,
        #[values(1, 2, 3, 5, 14)] num_muscle_groups: usize,
    ) {
        let muscle_groups = MuscleGroup::iter()
            .copied()
            .take(num_muscle_groups)
            .collect::<Vec<_>>();
        let total = experience_level.exercise_count();
        let distribution = distribute_exercises(&muscle_groups, total);

        assert_eq!(distribution.len(), num_muscle_groups);
        assert_eq!(distribution.iter().map(|(_, n)| n).sum::<u32>(), total);
        assert_eq!(
            distribution.iter().map(|(m, _)| *m).collect::<Vec<_>>(),
            muscle_groups
        );
    }

    #[rstest]
    #[case(2, vec!["Dumbbell Bench Press", "Dumbbell Fly"])]
    #[case(
        3,
        vec!["Barbell Bench Press", "Dumbbell Bench Press", "Barbell Incline Bench Press", "Dumbbell Fly"]
    )]
    fn test_rank_candidates_preferred_equipment(
        #[case] count: usize,
        #[case] expected: Vec<&str>,
    ) {
        let candidates = vec![
            exercise("Barbell Bench Press", MuscleGroup::Chest, Equipment::Barbell),
            exercise("Dumbbell Bench Press", MuscleGroup::Chest, Equipment::Dumbbell),
            exercise("Barbell Incline Bench Press", MuscleGroup::Chest, Equipment::Barbell),
            exercise("Dumbbell Fly", MuscleGroup::Chest, Equipment::Dumbbell),
        ];
        let mut preferences = preferences(
            ExperienceLevel::Intermediate,
            &[MuscleGroup::Chest],
            WorkoutGoal::General,
        );
        preferences.preferred_equipment = HashSet::from([Equipment::Dumbbell]);

        assert_eq!(
            names(&rank_candidates(
                candidates,
                MuscleGroup::Chest,
                count,
                &preferences
            )),
            expected
        );
    }

    #[test]
    fn test_rank_candidates_avoided_equipment_and_excluded_exercises() {
        let candidates = vec![
            exercise("Barbell Bench Press", MuscleGroup::Chest, Equipment::Barbell),
            exercise("Dumbbell Bench Press", MuscleGroup::Chest, Equipment::Dumbbell),
            exercise("Push Up", MuscleGroup::Chest, Equipment::Bodyweight),
            exercise("Dumbbell Fly", MuscleGroup::Chest, Equipment::Dumbbell),
        ];
        let mut preferences = preferences(
            ExperienceLevel::Intermediate,
            &[MuscleGroup::Chest],
            WorkoutGoal::General,
        );
        preferences.avoided_equipment = HashSet::from([Equipment::Barbell]);
        preferences.excluded_exercises = HashSet::from([ExerciseID::from_name("Push Up")]);

        assert_eq!(
            names(&rank_candidates(
                candidates,
                MuscleGroup::Chest,
                4,
                &preferences
            )),
            vec!["Dumbbell Bench Press", "Dumbbell Fly"]
        );
    }

    #[test]
    fn test_rank_candidates_avoided_equipment_overrides_preferred_equipment() {
        let candidates = vec![
            exercise("Barbell Bench Press", MuscleGroup::Chest, Equipment::Barbell),
            exercise("Dumbbell Bench Press", MuscleGroup::Chest, Equipment::Dumbbell),
        ];
        let mut preferences = preferences(
            ExperienceLevel::Intermediate,
            &[MuscleGroup::Chest],
            WorkoutGoal::General,
        );
        preferences.preferred_equipment = HashSet::from([Equipment::Barbell]);
        preferences.avoided_equipment = HashSet::from([Equipment::Barbell]);

        assert!(rank_candidates(candidates, MuscleGroup::Chest, 1, &preferences).is_empty());
    }

    #[rstest]
    #[case(Gender::Female, MuscleGroup::Glutes, vec!["Hip Thrust", "Glute Bridge", "Squat"])]
    #[case(Gender::Male, MuscleGroup::Glutes, vec!["Squat", "Hip Thrust", "Glute Bridge"])]
    #[case(Gender::Female, MuscleGroup::Legs, vec!["Squat", "Hip Thrust", "Glute Bridge"])]
    fn test_rank_candidates_gender_hint(
        #[case] gender: Gender,
        #[case] muscle_group: MuscleGroup,
        #[case] expected: Vec<&str>,
    ) {
        let candidates = vec![
            exercise("Squat", MuscleGroup::Legs, Equipment::Barbell),
            exercise("Hip Thrust", MuscleGroup::Glutes, Equipment::Barbell),
            exercise("Glute Bridge", MuscleGroup::Glutes, Equipment::Bodyweight),
        ];
        let mut preferences = preferences(
            ExperienceLevel::Intermediate,
            &[muscle_group],
            WorkoutGoal::General,
        );
        preferences.gender = gender;

        assert_eq!(
            names(&rank_candidates(candidates, muscle_group, 3, &preferences)),
            expected
        );
    }

    #[rstest]
    #[case(
        ExperienceLevel::Sedentary,
        vec!["Push Up", "Machine Fly", "Cable Crossover", "Barbell Bench Press", "Ring Push Up"]
    )]
    #[case(
        ExperienceLevel::Beginner,
        vec!["Push Up", "Machine Fly", "Cable Crossover", "Barbell Bench Press", "Ring Push Up"]
    )]
    #[case(
        ExperienceLevel::Intermediate,
        vec!["Barbell Bench Press", "Push Up", "Cable Crossover", "Ring Push Up", "Machine Fly"]
    )]
    #[case(
        ExperienceLevel::Advanced,
        vec!["Ring Push Up", "Barbell Bench Press", "Cable Crossover", "Machine Fly", "Push Up"]
    )]
    #[case(
        ExperienceLevel::Athlete,
        vec!["Ring Push Up", "Barbell Bench Press", "Cable Crossover", "Machine Fly", "Push Up"]
    )]
    fn test_rank_candidates_equipment_complexity(
        #[case] experience_level: ExperienceLevel,
        #[case] expected: Vec<&str>,
    ) {
        let candidates = vec![
            exercise("Barbell Bench Press", MuscleGroup::Chest, Equipment::Barbell),
            exercise("Push Up", MuscleGroup::Chest, Equipment::Bodyweight),
            exercise("Cable Crossover", MuscleGroup::Chest, Equipment::Cable),
            exercise("Ring Push Up", MuscleGroup::Chest, Equipment::GymnasticRings),
            exercise("Machine Fly", MuscleGroup::Chest, Equipment::Machine),
        ];
        let preferences = preferences(experience_level, &[MuscleGroup::Chest], WorkoutGoal::General);

        assert_eq!(
            names(&rank_candidates(
                candidates,
                MuscleGroup::Chest,
                5,
                &preferences
            )),
            expected
        );
    }

    #[test]
    fn test_order_exercises() {
        let mut selection = vec![
            (MuscleGroup::Chest, "a"),
            (MuscleGroup::Legs, "b"),
            (MuscleGroup::Abs, "c"),
            (MuscleGroup::Chest, "d"),
            (MuscleGroup::FullBody, "e"),
        ];

        order_exercises(&mut selection);

        assert_eq!(
            selection,
            vec![
                (MuscleGroup::FullBody, "e"),
                (MuscleGroup::Legs, "b"),
                (MuscleGroup::Chest, "a"),
                (MuscleGroup::Chest, "d"),
                (MuscleGroup::Abs, "c"),
            ]
        );
    }

    #[rstest]
    #[case(
        exercise("Dumbbell Bench Press", MuscleGroup::Chest, Equipment::Dumbbell),
        ExperienceLevel::Beginner,
        WorkoutGoal::Hypertrophy,
        &[(25.0, 12), (26.25, 11), (27.5, 10)]
    )]
    #[case(
        exercise("Barbell Squat", MuscleGroup::Legs, Equipment::Barbell),
        ExperienceLevel::Intermediate,
        WorkoutGoal::Strength,
        &[(120.0, 6), (121.25, 5), (122.5, 4), (123.75, 4)]
    )]
    #[case(
        exercise("Push Up", MuscleGroup::Chest, Equipment::Bodyweight),
        ExperienceLevel::Advanced,
        WorkoutGoal::Hypertrophy,
        &[(0.0, 12), (0.0, 12), (0.0, 12)]
    )]
    #[case(
        exercise("Pull Up", MuscleGroup::Back, Equipment::PullUpBar),
        ExperienceLevel::Beginner,
        WorkoutGoal::Endurance,
        &[(0.0, 23), (0.0, 23), (0.0, 23)]
    )]
    fn test_build_sets(
        #[case] exercise: CatalogExercise,
        #[case] experience_level: ExperienceLevel,
        #[case] goal: WorkoutGoal,
        #[case] expected: &[(f32, u32)],
    ) {
        let config = goal.set_rep_config();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let sets = build_sets(&exercise, config, experience_level, &mut rng);

        assert_eq!(sets.len(), expected.len());
        for (set, (weight, reps)) in sets.iter().zip(expected) {
            assert_approx_eq!(f32::from(set.weight), *weight);
            assert_eq!(u32::from(set.reps), *reps);
            assert_eq!(u32::from(set.rest_time), config.rest);
            assert_eq!(set.bodyweight, exercise.bodyweight);
            assert!(!set.completed);
            assert!(!set.id.is_nil());
        }
        assert_eq!(
            sets.iter().map(|s| s.id).collect::<HashSet<_>>().len(),
            sets.len()
        );
    }

    #[rstest]
    #[case(MuscleGroup::Chest, Equipment::Barbell, 2.5, ExperienceLevel::Sedentary, 25.0)]
    #[case(MuscleGroup::Biceps, Equipment::Dumbbell, 1.0, ExperienceLevel::Athlete, 20.0)]
    #[case(MuscleGroup::Shoulders, Equipment::Cable, 2.5, ExperienceLevel::Advanced, 30.0)]
    #[case(MuscleGroup::Back, Equipment::Machine, 5.0, ExperienceLevel::Beginner, 40.0)]
    #[case(MuscleGroup::Abs, Equipment::Dumbbell, 0.0, ExperienceLevel::Intermediate, 7.5)]
    #[case(MuscleGroup::Legs, Equipment::Bodyweight, 2.5, ExperienceLevel::Athlete, 0.0)]
    #[case(MuscleGroup::Back, Equipment::GymnasticRings, 2.5, ExperienceLevel::Athlete, 0.0)]
    fn test_initial_weight(
        #[case] muscle_group: MuscleGroup,
        #[case] equipment: Equipment,
        #[case] weight_increment: f32,
        #[case] experience_level: ExperienceLevel,
        #[case] expected: f32,
    ) {
        let exercise = CatalogExercise {
            weight_increment,
            ..exercise("Exercise", muscle_group, equipment)
        };

        assert_approx_eq!(initial_weight(&exercise, experience_level), expected);
    }

    #[rstest]
    #[case(0, 0, 0, ExperienceLevel::Beginner, 8)]
    #[case(0, 0, 0, ExperienceLevel::Intermediate, 6)]
    #[case(6, 3, 90, ExperienceLevel::Beginner, 55)]
    #[case(4, 4, 180, ExperienceLevel::Sedentary, 72)]
    #[case(1, 3, 60, ExperienceLevel::Athlete, 13)]
    fn test_estimate_duration(
        #[case] num_exercises: usize,
        #[case] num_sets: u32,
        #[case] rest: u32,
        #[case] experience_level: ExperienceLevel,
        #[case] expected: u32,
    ) {
        let exercises = vec![generated_exercise(num_sets, rest); num_exercises];

        assert_eq!(estimate_duration(&exercises, experience_level), expected);
    }

    #[test]
    fn test_estimate_duration_monotonic() {
        let mut previous = 0;

        for num_sets in 0..10 {
            let duration =
                estimate_duration(&[generated_exercise(num_sets, 60)], ExperienceLevel::Advanced);
            assert!(duration >= previous);
            previous = duration;
        }
    }

    #[rstest]
    #[case(ExperienceLevel::Sedentary, 6, 1)]
    #[case(ExperienceLevel::Sedentary, 30, 2)]
    #[case(ExperienceLevel::Beginner, 0, 1)]
    #[case(ExperienceLevel::Beginner, 18, 2)]
    #[case(ExperienceLevel::Intermediate, 9, 2)]
    #[case(ExperienceLevel::Intermediate, 10, 3)]
    #[case(ExperienceLevel::Intermediate, 20, 3)]
    #[case(ExperienceLevel::Advanced, 21, 5)]
    #[case(ExperienceLevel::Athlete, 10, 5)]
    #[case(ExperienceLevel::Athlete, 48, 5)]
    fn test_estimate_difficulty(
        #[case] experience_level: ExperienceLevel,
        #[case] num_sets: usize,
        #[case] expected: u8,
    ) {
        assert_eq!(estimate_difficulty(experience_level, num_sets), expected);
    }

    #[rstest]
    #[case(&[MuscleGroup::Chest], WorkoutGoal::General, "Workout: Chest")]
    #[case(&[MuscleGroup::FullBody], WorkoutGoal::Endurance, "Workout: Full-body")]
    #[case(&[MuscleGroup::Legs, MuscleGroup::Chest], WorkoutGoal::Strength, "Workout: Legs and Chest")]
    #[case(
        &[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Shoulders],
        WorkoutGoal::General,
        "Upper Body Workout"
    )]
    #[case(
        &[MuscleGroup::Legs, MuscleGroup::Glutes, MuscleGroup::Calves],
        WorkoutGoal::General,
        "Lower Body Workout"
    )]
    #[case(
        &[MuscleGroup::Chest, MuscleGroup::Legs, MuscleGroup::Abs],
        WorkoutGoal::General,
        "Full Workout"
    )]
    #[case(
        &[MuscleGroup::Abs, MuscleGroup::Cardio, MuscleGroup::LowerBack],
        WorkoutGoal::Strength,
        "Strength Workout"
    )]
    #[case(
        &[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Abs],
        WorkoutGoal::Hypertrophy,
        "Upper Body Workout"
    )]
    #[case(
        &[MuscleGroup::Legs, MuscleGroup::Cardio, MuscleGroup::Calves],
        WorkoutGoal::Endurance,
        "Lower Body Workout"
    )]
    #[case(
        &[MuscleGroup::FullBody, MuscleGroup::Abs, MuscleGroup::Cardio],
        WorkoutGoal::WeightLoss,
        "Fat Burning Workout"
    )]
    fn test_workout_name(
        #[case] muscle_groups: &[MuscleGroup],
        #[case] goal: WorkoutGoal,
        #[case] expected: &str,
    ) {
        assert_eq!(workout_name(muscle_groups, goal), expected);
    }

    #[test]
    fn test_generate_single_muscle_group() {
        let preferences = preferences(
            ExperienceLevel::Beginner,
            &[MuscleGroup::Chest],
            WorkoutGoal::Hypertrophy,
        );
        let tagged = Catalog
            .exercises_by_muscle(MuscleGroup::Chest)
            .into_iter()
            .map(|e| e.id)
            .collect::<HashSet<_>>();
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));

        let template = generator.generate(&preferences, &Catalog);

        assert_eq!(template.name, "Workout: Chest");
        assert_eq!(template.focus_areas, vec![MuscleGroup::Chest]);
        assert_eq!(template.exercises.len(), 6);
        assert_eq!(template.num_sets(), 18);
        assert_eq!(template.difficulty, 2);
        assert_eq!(template.estimated_duration, 55);
        for exercise in &template.exercises {
            assert!(tagged.contains(&exercise.id), "{}", exercise.name);
            let reps = exercise
                .sets
                .iter()
                .map(|s| u32::from(s.reps))
                .collect::<Vec<_>>();
            if exercise.bodyweight {
                assert_eq!(reps, vec![12, 12, 12]);
            } else {
                assert_eq!(reps, vec![12, 11, 10]);
            }
        }
    }

    #[test]
    fn test_generate_two_muscle_groups() {
        let preferences = preferences(
            ExperienceLevel::Sedentary,
            &[MuscleGroup::Legs, MuscleGroup::Chest],
            WorkoutGoal::Strength,
        );
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(7));

        let template = generator.generate(&preferences, &Catalog);

        assert_eq!(template.name, "Workout: Legs and Chest");
        assert_eq!(template.exercises.len(), 4);
        assert_eq!(template.num_sets(), 16);
        assert_eq!(template.difficulty, 1);
        assert_eq!(template.estimated_duration, 72);
        let legs = Catalog
            .exercises_by_muscle(MuscleGroup::Legs)
            .into_iter()
            .map(|e| e.id)
            .collect::<HashSet<_>>();
        assert!(legs.contains(&template.exercises[0].id));
        assert!(legs.contains(&template.exercises[1].id));
        for exercise in &template.exercises {
            assert_eq!(exercise.sets.len(), 4);
            for set in &exercise.sets {
                assert_eq!(u32::from(set.rest_time), 180);
            }
        }
    }

    #[rstest]
    fn test_generate_workout_full_body(
        #[values(
            WorkoutGoal::Strength,
            WorkoutGoal::Hypertrophy,
            WorkoutGoal::Endurance,
            WorkoutGoal::WeightLoss,
            WorkoutGoal::General
        )]
        goal: WorkoutGoal,
    ) {
        let template = generate_workout(&preferences(
            ExperienceLevel::Intermediate,
            &[MuscleGroup::FullBody],
            goal,
        ));

        assert_eq!(template.name, "Workout: Full-body");
        assert_eq!(template.focus_areas, vec![MuscleGroup::FullBody]);
        assert_eq!(template.exercises.len(), 8);
    }

    #[test]
    fn test_generate_insufficient_catalog_coverage() {
        let catalog = [
            exercise("Push Up", MuscleGroup::Chest, Equipment::Bodyweight),
            exercise("Barbell Bench Press", MuscleGroup::Chest, Equipment::Barbell),
            exercise("Dumbbell Fly", MuscleGroup::Chest, Equipment::Dumbbell),
            exercise("Cable Crossover", MuscleGroup::Chest, Equipment::Cable),
            exercise("Machine Fly", MuscleGroup::Chest, Equipment::Machine),
        ];
        let preferences = preferences(
            ExperienceLevel::Beginner,
            &[MuscleGroup::Cardio, MuscleGroup::Chest],
            WorkoutGoal::General,
        );
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(1));

        let template = generator.generate(&preferences, &catalog[..]);

        assert_eq!(template.exercises.len(), 3);
        assert_eq!(template.name, "Workout: Cardio and Chest");
        assert!(template.estimated_duration >= 4);
    }

    #[test]
    fn test_generate_empty_catalog() {
        let preferences = preferences(
            ExperienceLevel::Athlete,
            &[MuscleGroup::FullBody],
            WorkoutGoal::Endurance,
        );
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(1));

        let template = generator.generate(&preferences, &[] as &[CatalogExercise]);

        assert!(template.exercises.is_empty());
        assert_eq!(template.name, "Workout: Full-body");
        assert_eq!(template.difficulty, 4);
        assert_eq!(template.estimated_duration, 6);
    }

    #[test]
    fn test_generate_without_shuffle() {
        let preferences = preferences(
            ExperienceLevel::Beginner,
            &[MuscleGroup::Chest],
            WorkoutGoal::General,
        );
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(0)).without_shuffle();

        let template = generator.generate(&preferences, &Catalog);

        assert_eq!(
            template
                .exercises
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            vec![
                "Decline Push Up",
                "Incline Push Up",
                "Push Up",
                "Bench Dip",
                "Dip",
                "Machine Chest Press",
            ]
        );
    }

    #[test]
    fn test_generate_no_duplicate_exercises() {
        for seed in 0..20 {
            let preferences = preferences(
                ExperienceLevel::Athlete,
                &[MuscleGroup::Back, MuscleGroup::Legs, MuscleGroup::LowerBack],
                WorkoutGoal::General,
            );
            let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(seed));

            let template = generator.generate(&preferences, &Catalog);

            assert_eq!(
                template
                    .exercises
                    .iter()
                    .map(|e| e.id)
                    .collect::<HashSet<_>>()
                    .len(),
                template.exercises.len()
            );
        }
    }

    fn generate_with_preferred_dumbbells(catalog: &[CatalogExercise], seed: u64) -> HashSet<String> {
        let mut preferences = preferences(
            ExperienceLevel::Sedentary,
            &[MuscleGroup::Back, MuscleGroup::Chest],
            WorkoutGoal::General,
        );
        preferences.preferred_equipment = HashSet::from([Equipment::Dumbbell]);
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(seed));

        generator
            .generate(&preferences, catalog)
            .exercises
            .into_iter()
            .map(|e| e.name)
            .collect()
    }

    #[rstest]
    fn test_generate_preferred_equipment_with_secondary_tags(#[values(0, 1, 2, 3)] seed: u64) {
        let catalog = [
            CatalogExercise {
                secondary_muscle_groups: vec![MuscleGroup::Chest],
                ..exercise("Dumbbell Row", MuscleGroup::Back, Equipment::Dumbbell)
            },
            exercise("Dumbbell Pullover", MuscleGroup::Back, Equipment::Dumbbell),
            exercise("Barbell Row", MuscleGroup::Back, Equipment::Barbell),
            exercise("Dumbbell Fly", MuscleGroup::Chest, Equipment::Dumbbell),
            exercise("Incline Dumbbell Fly", MuscleGroup::Chest, Equipment::Dumbbell),
            exercise("Barbell Bench Press", MuscleGroup::Chest, Equipment::Barbell),
        ];

        assert_eq!(
            generate_with_preferred_dumbbells(&catalog, seed),
            HashSet::from(
                [
                    "Dumbbell Row",
                    "Dumbbell Pullover",
                    "Dumbbell Fly",
                    "Incline Dumbbell Fly"
                ]
                .map(String::from)
            )
        );
    }

    #[rstest]
    fn test_generate_preferred_equipment_after_removing_selected_exercises(
        #[values(0, 1, 2, 3)] seed: u64,
    ) {
        let catalog = [
            CatalogExercise {
                secondary_muscle_groups: vec![MuscleGroup::Chest],
                ..exercise("Dumbbell Row", MuscleGroup::Back, Equipment::Dumbbell)
            },
            exercise("Barbell Row", MuscleGroup::Back, Equipment::Barbell),
            exercise("Dumbbell Fly", MuscleGroup::Chest, Equipment::Dumbbell),
            exercise("Barbell Bench Press", MuscleGroup::Chest, Equipment::Barbell),
        ];

        assert_eq!(
            generate_with_preferred_dumbbells(&catalog, seed),
            HashSet::from(
                [
                    "Dumbbell Row",
                    "Barbell Row",
                    "Dumbbell Fly",
                    "Barbell Bench Press"
                ]
                .map(String::from)
            )
        );
    }

    #[rstest]
    fn test_generate_properties(
        #[values(
            ExperienceLevel::Sedentary,
            ExperienceLevel::Beginner,
            ExperienceLevel::Intermediate,
            ExperienceLevel::Advanced,
            ExperienceLevel::Athlete
        )]
        experience_level: ExperienceLevel,
        #[values(
            WorkoutGoal::Strength,
            WorkoutGoal::Hypertrophy,
            WorkoutGoal::Endurance,
            WorkoutGoal::WeightLoss,
            WorkoutGoal::General
        )]
        goal: WorkoutGoal,
        #[values(0, 1, 2)] seed: u64,
    ) {
        let preferences = preferences(
            experience_level,
            &[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Legs],
            goal,
        );
        let config = goal.set_rep_config();
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(seed));

        let template = generator.generate(&preferences, &Catalog);

        assert_eq!(
            template.exercises.len(),
            experience_level.exercise_count() as usize
        );
        assert!((1..=5).contains(&template.difficulty));
        assert!(template.estimated_duration >= 4);
        for exercise in &template.exercises {
            assert_eq!(exercise.sets.len(), config.sets as usize);
            for (i, set) in exercise.sets.iter().enumerate() {
                let reps = u32::from(set.reps);
                let weight = f32::from(set.weight);
                if exercise.bodyweight {
                    assert_approx_eq!(weight, 0.0);
                    assert_eq!(reps, (config.min_reps * 3).div_ceil(2));
                } else {
                    assert!((config.min_reps..=config.max_reps).contains(&reps));
                    if i > 0 {
                        assert!(weight >= f32::from(exercise.sets[i - 1].weight));
                        assert!(reps <= u32::from(exercise.sets[i - 1].reps));
                    }
                }
            }
        }
    }

    #[test]
    fn test_generate_reproducible() {
        let preferences = preferences(
            ExperienceLevel::Intermediate,
            &[MuscleGroup::Shoulders, MuscleGroup::Biceps, MuscleGroup::Triceps],
            WorkoutGoal::Hypertrophy,
        );
        let settings = Settings {
            seed: Some(1234),
            ..Settings::default()
        };

        let first = Generator::from_settings(&settings).generate(&preferences, &Catalog);
        let second = Generator::from_settings(&settings).generate(&preferences, &Catalog);

        assert_eq!(first, second);
        assert_eq!(first.name, "Upper Body Workout");
    }

    #[test]
    fn test_generate_from_settings_without_shuffle() {
        let preferences = preferences(
            ExperienceLevel::Advanced,
            &[MuscleGroup::Back],
            WorkoutGoal::Strength,
        );
        let settings = Settings {
            shuffle_candidates: false,
            seed: None,
        };

        let first = Generator::from_settings(&settings).generate(&preferences, &Catalog);
        let second = Generator::from_settings(&settings).generate(&preferences, &Catalog);

        assert_eq!(
            first.exercises.iter().map(|e| e.id).collect::<Vec<_>>(),
            second.exercises.iter().map(|e| e.id).collect::<Vec<_>>()
        );
    }
}
