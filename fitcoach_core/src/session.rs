//! Session plan resolver.
//!
//! Turns a workout request (type, duration, fitness level, equipment) into
//! an ordered, scaled exercise list:
//! 1. Catalog lookup (unknown types degrade to full-body)
//! 2. Nearest duration bucket (ties go to the lower key)
//! 3. Pull-up substitution when no bar is available
//! 4. Rep and rest scaling for the fitness level
//!
//! The resolver is a pure function over the static catalog; no I/O, no
//! shared mutable state.

use crate::catalog::{ScalingFactors, WorkoutCatalog};
use crate::types::{ExercisePlanEntry, FitnessLevel, ScaledExercise, WorkoutType};

/// Cue used when pull-ups are swapped out for push-ups
const PUSH_UP_SUB_CUE: &str = "Keep a straight line from head to heels";

/// Pick the bucket key numerically nearest to the requested duration
///
/// `keys` must be in ascending order. On a distance tie the first
/// (i.e. lower) key wins.
pub fn nearest_bucket(keys: impl IntoIterator<Item = u32>, requested: u32) -> Option<u32> {
    let mut best: Option<(u32, u32)> = None;
    for key in keys {
        let distance = key.abs_diff(requested);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((key, distance)),
        }
    }
    best.map(|(key, _)| key)
}

/// Extract the leading integer from a reps string
///
/// "15" → 15, "30 seconds" → 30, "10 each leg" → 10, "max" → None.
pub fn leading_int(s: &str) -> Option<u32> {
    let digits: String = s.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Resolve a session request into an ordered, scaled exercise list
///
/// Never panics: an unknown workout type uses the full-body tables, an empty
/// catalog yields an empty list.
pub fn resolve_session(
    catalog: &WorkoutCatalog,
    workout_type: WorkoutType,
    duration_minutes: u32,
    fitness_level: FitnessLevel,
    has_pull_up_bar: bool,
) -> Vec<ScaledExercise> {
    let Some(buckets) = catalog.buckets(workout_type) else {
        tracing::warn!("Catalog has no tables for {:?} or full-body", workout_type);
        return Vec::new();
    };

    let Some(bucket_key) = nearest_bucket(buckets.keys().copied(), duration_minutes) else {
        tracing::warn!("Catalog has no duration buckets for {:?}", workout_type);
        return Vec::new();
    };

    tracing::debug!(
        "Resolved {:?} at {} min to the {}-minute bucket",
        workout_type,
        duration_minutes,
        bucket_key
    );

    let factors = ScalingFactors::for_level(fitness_level);

    buckets
        .get(&bucket_key)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .map(|entry| scale_exercise(substitute(entry, has_pull_up_bar), factors))
        .collect()
}

/// Swap pull-ups for push-ups when no bar is available
///
/// Token substitution on the literal name "Pull-ups": sets and rest carry
/// over, reps stay unchanged, only the name and cue are replaced.
fn substitute(entry: &ExercisePlanEntry, has_pull_up_bar: bool) -> ExercisePlanEntry {
    if !has_pull_up_bar && entry.name == "Pull-ups" {
        ExercisePlanEntry {
            name: "Push-ups".into(),
            sets: entry.sets,
            reps: entry.reps.clone(),
            rest_seconds: entry.rest_seconds,
            cue: PUSH_UP_SUB_CUE.into(),
        }
    } else {
        entry.clone()
    }
}

/// Apply level scaling to one exercise
///
/// The leading integer of `reps` is scaled and written back as a bare count;
/// any unit suffix ("seconds", "each leg") is dropped. Non-numeric reps
/// ("max") pass through untouched. Rest is always scaled.
fn scale_exercise(entry: ExercisePlanEntry, factors: ScalingFactors) -> ScaledExercise {
    let reps = match leading_int(&entry.reps) {
        Some(count) => scale_round(count, factors.reps).to_string(),
        None => entry.reps,
    };

    ScaledExercise {
        name: entry.name,
        sets: entry.sets,
        reps,
        rest_seconds: scale_round(entry.rest_seconds, factors.rest),
        cue: entry.cue,
    }
}

/// Multiply and round to the nearest integer (ties to even, so a 22.5
/// midpoint lands on 22)
fn scale_round(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round_ties_even() as u32
}

/// Render a resolved session as a numbered plain-text block for the
/// coaching prompt
pub fn format_session_plan(exercises: &[ScaledExercise]) -> String {
    exercises
        .iter()
        .enumerate()
        .map(|(i, ex)| {
            format!(
                "{}. {}: {} sets × {}, {}s rest. Form: {}",
                i + 1,
                ex.name,
                ex.sets,
                ex.reps,
                ex.rest_seconds,
                ex.cue
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
