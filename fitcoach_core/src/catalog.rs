//! Static session catalog and level scaling factors.
//!
//! This module provides the built-in exercise tables keyed by workout type
//! and duration bucket (5 / 15 / 30 minutes). The tables are read-only after
//! process start; resolvers take them by reference.

use crate::types::{ExercisePlanEntry, FitnessLevel, WorkoutType};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<WorkoutCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static WorkoutCatalog {
    &DEFAULT_CATALOG
}

/// Intensity multipliers for a fitness level
///
/// Reps scale up with experience; rest scales down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalingFactors {
    pub reps: f64,
    pub rest: f64,
}

impl ScalingFactors {
    pub fn for_level(level: FitnessLevel) -> Self {
        match level {
            FitnessLevel::Beginner => ScalingFactors { reps: 0.75, rest: 1.4 },
            FitnessLevel::Intermediate => ScalingFactors { reps: 1.0, rest: 1.0 },
            FitnessLevel::Advanced => ScalingFactors { reps: 1.3, rest: 0.7 },
        }
    }
}

/// The complete catalog of session exercise tables
///
/// Buckets use a `BTreeMap` so duration keys iterate in ascending order,
/// which the nearest-bucket tie-break relies on (lower key wins a tie).
#[derive(Clone, Debug)]
pub struct WorkoutCatalog {
    pub sessions: HashMap<WorkoutType, BTreeMap<u32, Vec<ExercisePlanEntry>>>,
}

impl WorkoutCatalog {
    /// Duration buckets for a workout type
    ///
    /// Unknown or missing types degrade to the `full-body` tables; returns
    /// `None` only if the catalog has no `full-body` entry either.
    pub fn buckets(&self, workout_type: WorkoutType) -> Option<&BTreeMap<u32, Vec<ExercisePlanEntry>>> {
        self.sessions
            .get(&workout_type)
            .or_else(|| self.sessions.get(&WorkoutType::FullBody))
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        // full-body is the fallback target for unknown types
        if !self.sessions.contains_key(&WorkoutType::FullBody) {
            errors.push("Catalog has no full-body tables (fallback target)".to_string());
        }

        for (workout_type, buckets) in &self.sessions {
            if buckets.is_empty() {
                errors.push(format!("{:?} has no duration buckets", workout_type));
            }

            for (minutes, exercises) in buckets {
                if exercises.is_empty() {
                    errors.push(format!(
                        "{:?} {}-minute bucket has no exercises",
                        workout_type, minutes
                    ));
                }

                for exercise in exercises {
                    if exercise.name.is_empty() {
                        errors.push(format!(
                            "{:?} {}-minute bucket has an exercise with empty name",
                            workout_type, minutes
                        ));
                    }
                    if exercise.sets == 0 {
                        errors.push(format!(
                            "{:?} {}min: '{}' has zero sets",
                            workout_type, minutes, exercise.name
                        ));
                    }
                    if exercise.reps.is_empty() {
                        errors.push(format!(
                            "{:?} {}min: '{}' has empty reps",
                            workout_type, minutes, exercise.name
                        ));
                    }
                }
            }
        }

        errors
    }
}

fn entry(name: &str, sets: u32, reps: &str, rest_seconds: u32, cue: &str) -> ExercisePlanEntry {
    ExercisePlanEntry {
        name: name.into(),
        sets,
        reps: reps.into(),
        rest_seconds,
        cue: cue.into(),
    }
}

/// Builds the default catalog with built-in session tables
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> WorkoutCatalog {
    let mut sessions = HashMap::new();

    // ========================================================================
    // Full Body
    // ========================================================================

    let mut full_body = BTreeMap::new();
    full_body.insert(
        5,
        vec![
            entry("Jumping Jacks", 2, "20", 15, "Land softly, keep a steady rhythm"),
            entry("Squats", 2, "12", 20, "Chest up, weight in your heels"),
            entry("Push-ups", 2, "8", 20, "Keep your core tight, full range of motion"),
        ],
    );
    full_body.insert(
        15,
        vec![
            entry("Jumping Jacks", 3, "25", 30, "Land softly, keep a steady rhythm"),
            entry("Squats", 3, "15", 45, "Chest up, knees tracking over toes"),
            entry("Push-ups", 3, "10", 45, "Elbows at 45 degrees, controlled descent"),
            entry("Plank", 3, "30 seconds", 30, "Straight line from head to heels"),
        ],
    );
    full_body.insert(
        30,
        vec![
            entry("Squats", 4, "15", 60, "Chest up, drive through your heels"),
            entry("Push-ups", 4, "12", 60, "Controlled tempo, full lockout at the top"),
            entry("Lunges", 3, "10 each leg", 45, "Front knee over ankle, torso upright"),
            entry("Pull-ups", 3, "max", 90, "Full hang at the bottom, chin over the bar"),
            entry("Plank", 3, "45 seconds", 30, "Squeeze glutes, don't let hips sag"),
            entry("Burpees", 3, "10", 60, "Full extension at the top of each rep"),
        ],
    );
    sessions.insert(WorkoutType::FullBody, full_body);

    // ========================================================================
    // Upper Body
    // ========================================================================

    let mut upper_body = BTreeMap::new();
    upper_body.insert(
        5,
        vec![
            entry("Push-ups", 2, "10", 20, "Keep your core tight, full range of motion"),
            entry("Tricep Dips", 2, "8", 20, "Shoulders down, elbows pointing back"),
        ],
    );
    upper_body.insert(
        15,
        vec![
            entry("Push-ups", 3, "12", 45, "Elbows at 45 degrees, controlled descent"),
            entry("Pike Push-ups", 3, "8", 60, "Hips high, head toward the floor"),
            entry("Tricep Dips", 3, "10", 45, "Shoulders down, elbows pointing back"),
            entry("Pull-ups", 3, "5", 60, "Full hang at the bottom, chin over the bar"),
        ],
    );
    upper_body.insert(
        30,
        vec![
            entry("Push-ups", 4, "15", 60, "Controlled tempo, full lockout at the top"),
            entry("Pike Push-ups", 3, "10", 60, "Hips high, drive through your shoulders"),
            entry("Pull-ups", 4, "max", 90, "Full hang at the bottom, no kipping"),
            entry("Tricep Dips", 3, "12", 60, "Lower until elbows reach 90 degrees"),
            entry("Inverted Rows", 3, "8", 60, "Squeeze shoulder blades at the top"),
            entry("Plank Up-Downs", 3, "10", 45, "Hips steady, alternate leading arm"),
        ],
    );
    sessions.insert(WorkoutType::UpperBody, upper_body);

    // ========================================================================
    // Lower Body
    // ========================================================================

    let mut lower_body = BTreeMap::new();
    lower_body.insert(
        5,
        vec![
            entry("Squats", 2, "15", 20, "Chest up, weight in your heels"),
            entry("Glute Bridges", 2, "12", 15, "Squeeze glutes hard at the top"),
        ],
    );
    lower_body.insert(
        15,
        vec![
            entry("Squats", 3, "15", 45, "Chest up, knees tracking over toes"),
            entry("Lunges", 3, "10 each leg", 45, "Front knee over ankle, torso upright"),
            entry("Glute Bridges", 3, "15", 30, "Pause one second at the top"),
            entry("Calf Raises", 3, "20", 30, "Full stretch at the bottom, squeeze at the top"),
        ],
    );
    lower_body.insert(
        30,
        vec![
            entry("Squats", 4, "20", 60, "Chest up, drive through your heels"),
            entry("Lunges", 4, "12 each leg", 60, "Long stride, back knee just off the floor"),
            entry("Glute Bridges", 3, "20", 45, "Squeeze glutes hard at the top"),
            entry("Wall Sit", 3, "45 seconds", 60, "Thighs parallel, back flat on the wall"),
            entry("Calf Raises", 3, "25", 30, "Slow on the way down"),
            entry("Jump Squats", 3, "12", 60, "Land softly, sink straight into the next rep"),
        ],
    );
    sessions.insert(WorkoutType::LowerBody, lower_body);

    // ========================================================================
    // Core
    // ========================================================================

    let mut core = BTreeMap::new();
    core.insert(
        5,
        vec![
            entry("Sit-ups", 3, "15", 30, "Control the way down, don't pull your neck"),
            entry("Plank", 2, "30 seconds", 20, "Straight line from head to heels"),
        ],
    );
    core.insert(
        15,
        vec![
            entry("Sit-ups", 3, "20", 30, "Control the way down, don't pull your neck"),
            entry("Plank", 3, "45 seconds", 30, "Squeeze glutes, don't let hips sag"),
            entry("Russian Twists", 3, "20", 30, "Rotate from the torso, not the arms"),
            entry("Leg Raises", 3, "12", 45, "Press your lower back into the floor"),
        ],
    );
    core.insert(
        30,
        vec![
            entry("Sit-ups", 4, "20", 45, "Control the way down, don't pull your neck"),
            entry("Plank", 3, "60 seconds", 45, "Breathe steadily, hold the line"),
            entry("Russian Twists", 4, "24", 30, "Heels off the floor for extra challenge"),
            entry("Leg Raises", 3, "15", 45, "Slow negatives, no swinging"),
            entry("Mountain Climbers", 3, "30", 30, "Hips level, drive knees to chest"),
            entry("Dead Bug", 3, "10 each side", 30, "Opposite arm and leg, lower back pinned"),
        ],
    );
    sessions.insert(WorkoutType::Core, core);

    // ========================================================================
    // Stretch & Mobility
    // ========================================================================

    let mut stretch = BTreeMap::new();
    stretch.insert(
        5,
        vec![
            entry("Neck Rolls", 1, "5 each direction", 0, "Slow circles, no forcing"),
            entry("Standing Forward Fold", 1, "30 seconds", 0, "Soft knees, let your head hang"),
            entry("Quad Stretch", 1, "20 seconds each leg", 0, "Knees together, push hips forward"),
        ],
    );
    stretch.insert(
        15,
        vec![
            entry("Cat-Cow", 2, "10", 15, "Move with your breath"),
            entry("Downward Dog", 2, "30 seconds", 15, "Press heels toward the floor"),
            entry("Hip Flexor Stretch", 2, "30 seconds each side", 10, "Tuck your pelvis, lean in gently"),
            entry("Hamstring Stretch", 2, "30 seconds each leg", 10, "Hinge from the hips, flat back"),
        ],
    );
    stretch.insert(
        30,
        vec![
            entry("Cat-Cow", 3, "12", 15, "Move with your breath"),
            entry("Downward Dog", 3, "45 seconds", 15, "Pedal your feet, long spine"),
            entry("Pigeon Pose", 2, "60 seconds each side", 20, "Square your hips, breathe into the stretch"),
            entry("Butterfly Stretch", 2, "45 seconds", 15, "Gentle pressure on the knees"),
            entry("Child's Pose", 2, "60 seconds", 0, "Reach forward, relax your shoulders"),
            entry("Cobra Stretch", 2, "30 seconds", 15, "Elbows soft, open your chest"),
        ],
    );
    sessions.insert(WorkoutType::Stretch, stretch);

    WorkoutCatalog { sessions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.sessions.len(), 5);
    }

    #[test]
    fn test_every_type_has_all_buckets() {
        let catalog = build_default_catalog();
        for (workout_type, buckets) in &catalog.sessions {
            let keys: Vec<u32> = buckets.keys().copied().collect();
            assert_eq!(
                keys,
                vec![5, 15, 30],
                "{:?} is missing a duration bucket",
                workout_type
            );
        }
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_catalog();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_unknown_type_falls_back_to_full_body() {
        let mut catalog = build_default_catalog();
        catalog.sessions.remove(&WorkoutType::Stretch);

        let fallback = catalog.buckets(WorkoutType::Stretch).unwrap();
        let full_body = catalog.buckets(WorkoutType::FullBody).unwrap();
        assert_eq!(fallback.len(), full_body.len());
    }

    #[test]
    fn test_scaling_factors() {
        let beginner = ScalingFactors::for_level(FitnessLevel::Beginner);
        let intermediate = ScalingFactors::for_level(FitnessLevel::Intermediate);
        let advanced = ScalingFactors::for_level(FitnessLevel::Advanced);

        assert_eq!(beginner, ScalingFactors { reps: 0.75, rest: 1.4 });
        assert_eq!(intermediate, ScalingFactors { reps: 1.0, rest: 1.0 });
        assert_eq!(advanced, ScalingFactors { reps: 1.3, rest: 0.7 });

        // Reps scale up with experience, rest scales down
        assert!(beginner.reps < intermediate.reps && intermediate.reps < advanced.reps);
        assert!(beginner.rest > intermediate.rest && intermediate.rest > advanced.rest);
    }

    #[test]
    fn test_cached_catalog_matches_built() {
        let cached = get_default_catalog();
        let built = build_default_catalog();
        assert_eq!(cached.sessions.len(), built.sessions.len());
    }
}
