//! Core domain types for the FitCoach system.
//!
//! This module defines the fundamental types used throughout the system:
//! - User profiles (fitness level, goals, equipment)
//! - Exercise catalog entries and scaled session exercises
//! - Weekly workout plans and their days
//! - Coaching session requests and records

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Profile Types
// ============================================================================

/// Self-reported fitness level, used to scale session intensity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// Kebab-case identifier, as stored in profiles and prompts
    pub fn id(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

impl FromStr for FitnessLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(FitnessLevel::Beginner),
            "intermediate" => Ok(FitnessLevel::Intermediate),
            "advanced" => Ok(FitnessLevel::Advanced),
            other => Err(Error::Profile(format!("unknown fitness level '{}'", other))),
        }
    }
}

/// Training goal selected during onboarding
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    WeightLoss,
    BuildMuscle,
    ImproveEndurance,
    IncreaseFlexibility,
    StressRelief,
    GeneralFitness,
}

impl Goal {
    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::BuildMuscle => "Build Muscle",
            Goal::ImproveEndurance => "Endurance",
            Goal::IncreaseFlexibility => "Flexibility",
            Goal::StressRelief => "Stress Relief",
            Goal::GeneralFitness => "General Fitness",
        }
    }

    /// Longer description used when prompting the text-generation provider
    pub fn description(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "burn fat and improve cardiovascular fitness",
            Goal::BuildMuscle => "increase muscle mass and strength",
            Goal::ImproveEndurance => "enhance cardiovascular endurance and stamina",
            Goal::IncreaseFlexibility => "improve mobility, flexibility and movement quality",
            Goal::StressRelief => "reduce stress through mindful movement",
            Goal::GeneralFitness => "build overall health and fitness",
        }
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "weight-loss" => Ok(Goal::WeightLoss),
            "build-muscle" => Ok(Goal::BuildMuscle),
            "improve-endurance" => Ok(Goal::ImproveEndurance),
            "increase-flexibility" => Ok(Goal::IncreaseFlexibility),
            "stress-relief" => Ok(Goal::StressRelief),
            "general-fitness" => Ok(Goal::GeneralFitness),
            other => Err(Error::Profile(format!("unknown goal '{}'", other))),
        }
    }
}

/// Equipment the user has access to
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    None,
    Dumbbells,
    ResistanceBands,
    PullUpBar,
    Kettlebell,
    YogaMat,
    FullGym,
}

impl Equipment {
    pub fn label(&self) -> &'static str {
        match self {
            Equipment::None => "No Equipment",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::ResistanceBands => "Resistance Bands",
            Equipment::PullUpBar => "Pull-Up Bar",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::YogaMat => "Yoga Mat",
            Equipment::FullGym => "Full Gym Access",
        }
    }

    /// Kebab-case identifier, as stored in profiles
    pub fn id(&self) -> &'static str {
        match self {
            Equipment::None => "none",
            Equipment::Dumbbells => "dumbbells",
            Equipment::ResistanceBands => "resistance-bands",
            Equipment::PullUpBar => "pull-up-bar",
            Equipment::Kettlebell => "kettlebell",
            Equipment::YogaMat => "yoga-mat",
            Equipment::FullGym => "full-gym",
        }
    }
}

impl FromStr for Equipment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Equipment::None),
            "dumbbells" => Ok(Equipment::Dumbbells),
            "resistance-bands" => Ok(Equipment::ResistanceBands),
            "pull-up-bar" => Ok(Equipment::PullUpBar),
            "kettlebell" => Ok(Equipment::Kettlebell),
            "yoga-mat" => Ok(Equipment::YogaMat),
            "full-gym" => Ok(Equipment::FullGym),
            other => Err(Error::Profile(format!("unknown equipment '{}'", other))),
        }
    }
}

/// Preferred session length in minutes (fixed buckets)
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub enum SessionDuration {
    Five,
    Fifteen,
    Thirty,
}

impl SessionDuration {
    pub fn minutes(self) -> u32 {
        match self {
            SessionDuration::Five => 5,
            SessionDuration::Fifteen => 15,
            SessionDuration::Thirty => 30,
        }
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = Error;

    fn try_from(minutes: u32) -> Result<Self> {
        match minutes {
            5 => Ok(SessionDuration::Five),
            15 => Ok(SessionDuration::Fifteen),
            30 => Ok(SessionDuration::Thirty),
            other => Err(Error::Profile(format!(
                "session duration must be 5, 15 or 30 minutes (got {})",
                other
            ))),
        }
    }
}

impl From<SessionDuration> for u32 {
    fn from(duration: SessionDuration) -> u32 {
        duration.minutes()
    }
}

/// User profile collected during onboarding
///
/// Immutable once created; regenerating a plan replaces the plan,
/// never the profile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub fitness_level: FitnessLevel,
    pub goals: Vec<Goal>,
    pub equipment: Vec<Equipment>,
    pub preferred_duration: SessionDuration,
}

impl UserProfile {
    /// Validate profile invariants
    ///
    /// - age is positive
    /// - at least one goal and one equipment selection
    /// - `none` equipment is mutually exclusive with all others
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Profile("name must not be empty".into()));
        }
        if self.age == 0 {
            return Err(Error::Profile("age must be positive".into()));
        }
        if self.goals.is_empty() {
            return Err(Error::Profile("at least one goal is required".into()));
        }
        if self.equipment.is_empty() {
            return Err(Error::Profile(
                "at least one equipment selection is required".into(),
            ));
        }
        if self.equipment.contains(&Equipment::None) && self.equipment.len() > 1 {
            return Err(Error::Profile(
                "'none' cannot be combined with other equipment".into(),
            ));
        }
        Ok(())
    }

    /// True when the profile lists no equipment at all
    pub fn bodyweight_only(&self) -> bool {
        self.equipment == [Equipment::None]
    }

    /// True when a pull-up bar (or a full gym) is available
    pub fn has_pull_up_bar(&self) -> bool {
        self.equipment.contains(&Equipment::PullUpBar)
            || self.equipment.contains(&Equipment::FullGym)
    }
}

// ============================================================================
// Workout and Catalog Types
// ============================================================================

/// Kind of workout a coaching session targets
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutType {
    UpperBody,
    LowerBody,
    Core,
    FullBody,
    Stretch,
}

impl WorkoutType {
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::UpperBody => "Upper Body",
            WorkoutType::LowerBody => "Lower Body",
            WorkoutType::Core => "Core",
            WorkoutType::FullBody => "Full Body",
            WorkoutType::Stretch => "Stretch & Mobility",
        }
    }

    /// Parse a workout type, falling back to `FullBody` for anything
    /// unrecognized (unknown types degrade rather than fail)
    pub fn parse_or_full_body(s: &str) -> WorkoutType {
        match s.to_lowercase().as_str() {
            "upper-body" => WorkoutType::UpperBody,
            "lower-body" => WorkoutType::LowerBody,
            "core" => WorkoutType::Core,
            "full-body" => WorkoutType::FullBody,
            "stretch" => WorkoutType::Stretch,
            other => {
                tracing::warn!("Unknown workout type '{}', using full-body", other);
                WorkoutType::FullBody
            }
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single exercise in the static session catalog
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExercisePlanEntry {
    pub name: String,
    pub sets: u32,
    /// Either a bare count ("15"), a duration ("30 seconds"), or "max"
    pub reps: String,
    pub rest_seconds: u32,
    /// Form cue read out by the coach
    pub cue: String,
}

/// An exercise after level scaling and equipment substitution
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScaledExercise {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    pub cue: String,
}

// ============================================================================
// Weekly Plan Types
// ============================================================================

/// Intensity of a scheduled day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Light,
    Moderate,
    High,
}

/// An exercise inside a weekly plan
///
/// This is the looser shape the generative provider returns; all fields
/// beyond the name are optional.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One day of a weekly plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutDay {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<Exercise>,
    /// Minutes; zero on rest days
    pub duration: u32,
    pub intensity: Intensity,
}

impl WorkoutDay {
    /// Rest days have no exercises and zero duration
    pub fn is_rest_day(&self) -> bool {
        self.exercises.is_empty() && self.duration == 0
    }
}

/// Recommended first live session for a fresh plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FirstSessionRecommendation {
    pub workout_type: WorkoutType,
    pub personality: CoachPersonality,
    pub duration: SessionDuration,
    pub reason: String,
}

/// A complete weekly workout plan
///
/// Produced once per onboarding (generative or template path) and replaced
/// wholesale on regeneration, never mutated in place.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    pub title: String,
    pub summary: String,
    pub weekly_schedule: Vec<WorkoutDay>,
    pub focus_areas: Vec<String>,
    pub tips: Vec<String>,
    pub first_session_recommendation: FirstSessionRecommendation,
}

// ============================================================================
// Coaching Session Types
// ============================================================================

/// Coach persona selected for a live session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CoachPersonality {
    DrillSergeant,
    HypeBeast,
    ZenMaster,
}

impl CoachPersonality {
    pub fn id(&self) -> &'static str {
        match self {
            CoachPersonality::DrillSergeant => "drill-sergeant",
            CoachPersonality::HypeBeast => "hype-beast",
            CoachPersonality::ZenMaster => "zen-master",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoachPersonality::DrillSergeant => "Drill Sergeant",
            CoachPersonality::HypeBeast => "Hype Beast",
            CoachPersonality::ZenMaster => "Zen Master",
        }
    }

    /// Parse a personality, falling back to `HypeBeast` for anything
    /// unrecognized
    pub fn parse_or_hype_beast(s: &str) -> CoachPersonality {
        match s.to_lowercase().as_str() {
            "drill-sergeant" => CoachPersonality::DrillSergeant,
            "hype-beast" => CoachPersonality::HypeBeast,
            "zen-master" => CoachPersonality::ZenMaster,
            other => {
                tracing::warn!("Unknown coach personality '{}', using hype-beast", other);
                CoachPersonality::HypeBeast
            }
        }
    }
}

/// Everything needed to start one live coaching session
///
/// Ephemeral: created when a session starts, discarded when it ends.
#[derive(Clone, Debug)]
pub struct SessionRequest {
    pub workout_type: WorkoutType,
    pub coach_personality: CoachPersonality,
    /// Requested minutes; matched to the nearest catalog bucket
    pub duration_minutes: u32,
    pub user_name: Option<String>,
}

/// A completed coaching session, as recorded in the journal
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    pub workout_type: WorkoutType,
    pub personality: CoachPersonality,
    pub duration_minutes: u32,
    pub elapsed_seconds: Option<u32>,
    pub started_at: DateTime<Utc>,
}
