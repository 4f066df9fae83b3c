//! Hand-authored weekly plan templates.
//!
//! These are the deterministic fallback used whenever the generative path is
//! unavailable. Selection is keyed by the user's first listed goal; fitness
//! level and equipment do not change exercise selection here (they only
//! affect the summary text and one appended tip), which is intentional -
//! only the live-session resolver adapts to them.

use crate::types::{
    CoachPersonality, Exercise, FirstSessionRecommendation, FitnessLevel, Goal, Intensity,
    UserProfile, WorkoutDay, WorkoutPlan, WorkoutType,
};

fn ex(name: &str, sets: u32, reps: &str, rest: &str) -> Exercise {
    Exercise {
        name: name.into(),
        sets: Some(sets),
        reps: Some(reps.into()),
        rest: Some(rest.into()),
        notes: None,
    }
}

fn ex_note(name: &str, sets: u32, reps: &str, rest: &str, notes: &str) -> Exercise {
    Exercise {
        notes: Some(notes.into()),
        ..ex(name, sets, reps, rest)
    }
}

fn freeform(name: &str, notes: Option<&str>) -> Exercise {
    Exercise {
        name: name.into(),
        sets: None,
        reps: None,
        rest: None,
        notes: notes.map(Into::into),
    }
}

fn active_day(
    day: &str,
    focus: &str,
    duration: u32,
    intensity: Intensity,
    exercises: Vec<Exercise>,
) -> WorkoutDay {
    WorkoutDay {
        day: day.into(),
        focus: focus.into(),
        exercises,
        duration,
        intensity,
    }
}

fn rest_day(day: &str) -> WorkoutDay {
    WorkoutDay {
        day: day.into(),
        focus: "Rest".into(),
        exercises: vec![],
        duration: 0,
        intensity: Intensity::Light,
    }
}

/// Build the fallback weekly plan for a profile
///
/// Template keyed by the first listed goal: build-muscle and weight-loss get
/// dedicated templates, everything else gets the balanced general-fitness
/// plan. Always 7 days: 5 active, 2 rest.
pub fn build_template_plan(profile: &UserProfile) -> WorkoutPlan {
    let primary_goal = profile.goals.first().copied().unwrap_or(Goal::GeneralFitness);

    tracing::info!(
        "Building template plan for goal {:?} ({:?} level)",
        primary_goal,
        profile.fitness_level
    );

    let mut plan = match primary_goal {
        Goal::BuildMuscle => build_muscle_template(profile),
        Goal::WeightLoss => weight_loss_template(profile),
        _ => general_fitness_template(profile),
    };

    if profile.bodyweight_only() {
        plan.tips.push(
            "All your exercises are bodyweight. Your AI coach will help maximize bodyweight progressions"
                .into(),
        );
    }

    plan
}

fn build_muscle_template(profile: &UserProfile) -> WorkoutPlan {
    let minutes = profile.preferred_duration.minutes();
    let push_up_reps = if profile.fitness_level == FitnessLevel::Beginner {
        "8-10"
    } else {
        "12-15"
    };

    WorkoutPlan {
        title: format!("{}'s Muscle Building Plan", profile.name),
        summary: format!(
            "Your plan is designed to progressively build strength and muscle mass over 8 weeks. \
             Each session is structured for maximum hypertrophy with controlled intensity \
             tailored to your {} level.",
            profile.fitness_level.id()
        ),
        weekly_schedule: vec![
            active_day(
                "Monday",
                "Upper Body Push",
                minutes,
                Intensity::High,
                vec![
                    ex("Push-Ups", 4, push_up_reps, "90s"),
                    ex_note("Pike Push-Ups", 3, "8-12", "60s", "Targets shoulders"),
                    ex("Tricep Dips", 3, "10-12", "60s"),
                ],
            ),
            active_day(
                "Tuesday",
                "Lower Body",
                minutes,
                Intensity::High,
                vec![
                    ex("Squats", 4, "12-15", "90s"),
                    ex("Lunges", 3, "10 each leg", "60s"),
                    ex("Glute Bridges", 3, "15-20", "45s"),
                ],
            ),
            active_day(
                "Wednesday",
                "Active Recovery",
                20,
                Intensity::Light,
                vec![freeform("Light walking or yoga", Some("Keep moving, stay loose"))],
            ),
            active_day(
                "Thursday",
                "Upper Body Pull & Core",
                minutes,
                Intensity::High,
                vec![
                    ex("Inverted Rows (table)", 3, "8-12", "90s"),
                    ex("Plank", 3, "30-45s", "45s"),
                    ex("Mountain Climbers", 3, "20 reps", "45s"),
                ],
            ),
            active_day(
                "Friday",
                "Full Body Circuit",
                minutes,
                Intensity::Moderate,
                vec![
                    ex("Burpees", 3, "10", "60s"),
                    ex("Jump Squats", 3, "15", "60s"),
                    ex("Push-Up to T-Rotation", 3, "8 each side", "60s"),
                ],
            ),
            rest_day("Saturday"),
            rest_day("Sunday"),
        ],
        focus_areas: vec![
            "Upper Body Strength".into(),
            "Lower Body Power".into(),
            "Core Stability".into(),
        ],
        tips: vec![
            "Progressive overload is key: add 1 rep or hold 1 second longer each week".into(),
            "Protein intake matters: aim for 0.8-1g per lb of bodyweight".into(),
            "Sleep 7-9 hours, that's when muscle is built".into(),
        ],
        first_session_recommendation: FirstSessionRecommendation {
            workout_type: WorkoutType::FullBody,
            personality: CoachPersonality::DrillSergeant,
            duration: profile.preferred_duration,
            reason: "A full-body session gives your AI coach the best view of your overall strength baseline.".into(),
        },
    }
}

fn weight_loss_template(profile: &UserProfile) -> WorkoutPlan {
    let minutes = profile.preferred_duration.minutes();

    WorkoutPlan {
        title: format!("{}'s Fat Loss Plan", profile.name),
        summary: format!(
            "A high-intensity metabolic plan designed to maximize calorie burn and preserve \
             muscle. Your {} level is the perfect starting point for rapid transformation.",
            profile.fitness_level.id()
        ),
        weekly_schedule: vec![
            active_day(
                "Monday",
                "HIIT Cardio + Core",
                minutes,
                Intensity::High,
                vec![
                    ex("Jumping Jacks", 3, "30s on, 15s off", "15s"),
                    ex("High Knees", 3, "30s on, 15s off", "15s"),
                    ex("Plank", 3, "30s", "30s"),
                ],
            ),
            active_day(
                "Tuesday",
                "Lower Body Burn",
                minutes,
                Intensity::High,
                vec![
                    ex("Squat Jumps", 4, "15", "60s"),
                    ex("Reverse Lunges", 3, "12 each leg", "45s"),
                    ex("Wall Sit", 3, "45s", "45s"),
                ],
            ),
            active_day(
                "Wednesday",
                "Active Recovery Walk",
                30,
                Intensity::Light,
                vec![freeform("30-minute brisk walk", None)],
            ),
            active_day(
                "Thursday",
                "Upper Body + Cardio Intervals",
                minutes,
                Intensity::High,
                vec![
                    ex("Push-Up Circuit", 4, "10-15", "45s"),
                    ex("Burpees", 3, "10", "60s"),
                ],
            ),
            active_day(
                "Friday",
                "Full Body AMRAP",
                minutes,
                Intensity::High,
                vec![freeform(
                    "Complete as many rounds as possible in time",
                    Some("5 push-ups, then 10 squats, then 15 jumping jacks"),
                )],
            ),
            rest_day("Saturday"),
            rest_day("Sunday"),
        ],
        focus_areas: vec![
            "Metabolic Conditioning".into(),
            "Cardiovascular Fitness".into(),
            "Core Strength".into(),
        ],
        tips: vec![
            "Consistency beats perfection: showing up 80% is better than 100% once a month".into(),
            "Focus on nutrition: what you eat matters as much as workouts".into(),
            "The AI coach will monitor your heart rate and fatigue in real-time".into(),
        ],
        first_session_recommendation: FirstSessionRecommendation {
            workout_type: WorkoutType::FullBody,
            personality: CoachPersonality::HypeBeast,
            duration: profile.preferred_duration,
            reason: "High energy equals high calorie burn. The Hype Beast will keep your heart rate up.".into(),
        },
    }
}

fn general_fitness_template(profile: &UserProfile) -> WorkoutPlan {
    let minutes = profile.preferred_duration.minutes();

    WorkoutPlan {
        title: format!("{}'s Balanced Fitness Plan", profile.name),
        summary: format!(
            "A well-rounded plan that builds strength, endurance, and flexibility \
             simultaneously. Perfect for your {} level as a sustainable, long-term fitness \
             foundation.",
            profile.fitness_level.id()
        ),
        weekly_schedule: vec![
            active_day(
                "Monday",
                "Full Body Strength",
                minutes,
                Intensity::Moderate,
                vec![
                    ex("Push-Ups", 3, "10-15", "60s"),
                    ex("Squats", 3, "15", "60s"),
                    ex("Plank", 3, "30s", "30s"),
                ],
            ),
            active_day(
                "Tuesday",
                "Cardio & Endurance",
                minutes,
                Intensity::Moderate,
                vec![ex("Jumping Jacks + High Knees alternating", 4, "45s each", "30s")],
            ),
            active_day(
                "Wednesday",
                "Stretch & Mobility",
                20,
                Intensity::Light,
                vec![freeform(
                    "Full body stretch routine",
                    Some("Hold each stretch 30s"),
                )],
            ),
            active_day(
                "Thursday",
                "Upper Body Focus",
                minutes,
                Intensity::Moderate,
                vec![
                    ex("Push-Up Variations", 3, "12", "60s"),
                    ex("Superman Hold", 3, "10s hold", "45s"),
                ],
            ),
            active_day(
                "Friday",
                "Lower Body & Core",
                minutes,
                Intensity::Moderate,
                vec![
                    ex("Squats", 3, "15", "60s"),
                    ex("Glute Bridges", 3, "20", "45s"),
                    ex("Dead Bug", 3, "10 each side", "45s"),
                ],
            ),
            rest_day("Saturday"),
            rest_day("Sunday"),
        ],
        focus_areas: vec![
            "Overall Strength".into(),
            "Cardiovascular Health".into(),
            "Flexibility".into(),
        ],
        tips: vec![
            "Consistency is everything: 3-4 sessions per week beats sporadic intense workouts".into(),
            "Your AI coach monitors your form in real-time, trust its visual corrections".into(),
            "Hydrate well before and after sessions".into(),
        ],
        first_session_recommendation: FirstSessionRecommendation {
            workout_type: WorkoutType::FullBody,
            personality: CoachPersonality::ZenMaster,
            duration: profile.preferred_duration,
            reason: "A mindful approach to your first session helps establish correct movement patterns.".into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Equipment, SessionDuration};

    fn profile_with_goal(goal: Goal) -> UserProfile {
        UserProfile {
            name: "Sam".into(),
            age: 28,
            fitness_level: FitnessLevel::Intermediate,
            goals: vec![goal],
            equipment: vec![Equipment::None],
            preferred_duration: SessionDuration::Thirty,
        }
    }

    #[test]
    fn test_seven_days_two_rest() {
        let plan = build_template_plan(&profile_with_goal(Goal::GeneralFitness));

        assert_eq!(plan.weekly_schedule.len(), 7);
        let rest_days: Vec<_> = plan
            .weekly_schedule
            .iter()
            .filter(|d| d.is_rest_day())
            .collect();
        assert_eq!(rest_days.len(), 2);
        for day in rest_days {
            assert!(day.exercises.is_empty());
            assert_eq!(day.duration, 0);
        }
    }

    #[test]
    fn test_template_selection_by_first_goal() {
        let plan = build_template_plan(&profile_with_goal(Goal::BuildMuscle));
        assert!(plan.title.contains("Muscle Building"));

        let plan = build_template_plan(&profile_with_goal(Goal::WeightLoss));
        assert!(plan.title.contains("Fat Loss"));

        // Anything else defaults to the balanced plan
        let plan = build_template_plan(&profile_with_goal(Goal::StressRelief));
        assert!(plan.title.contains("Balanced Fitness"));
    }

    #[test]
    fn test_first_goal_wins() {
        let mut profile = profile_with_goal(Goal::WeightLoss);
        profile.goals.push(Goal::BuildMuscle);

        let plan = build_template_plan(&profile);
        assert!(plan.title.contains("Fat Loss"));
    }

    #[test]
    fn test_active_days_use_preferred_duration() {
        let profile = profile_with_goal(Goal::BuildMuscle);
        let plan = build_template_plan(&profile);

        // Mon/Tue/Thu/Fri track the preferred duration; Wednesday recovery
        // keeps its fixed length
        for idx in [0, 1, 3, 4] {
            let day = &plan.weekly_schedule[idx];
            if day.day != "Wednesday" {
                assert_eq!(day.duration, 30, "{} should use preferred duration", day.day);
            }
        }
    }

    #[test]
    fn test_bodyweight_tip_appended() {
        let plan = build_template_plan(&profile_with_goal(Goal::GeneralFitness));
        assert!(plan.tips.iter().any(|t| t.contains("bodyweight")));

        let mut with_gear = profile_with_goal(Goal::GeneralFitness);
        with_gear.equipment = vec![Equipment::Dumbbells];
        let plan = build_template_plan(&with_gear);
        assert!(!plan
            .tips
            .iter()
            .any(|t| t.contains("bodyweight progressions")));
    }

    #[test]
    fn test_beginner_rep_range_swap() {
        let mut beginner = profile_with_goal(Goal::BuildMuscle);
        beginner.fitness_level = FitnessLevel::Beginner;

        let plan = build_template_plan(&beginner);
        let monday = &plan.weekly_schedule[0];
        assert_eq!(monday.exercises[0].reps.as_deref(), Some("8-10"));

        let plan = build_template_plan(&profile_with_goal(Goal::BuildMuscle));
        let monday = &plan.weekly_schedule[0];
        assert_eq!(monday.exercises[0].reps.as_deref(), Some("12-15"));
    }

    #[test]
    fn test_plan_json_round_trip() {
        let plan = build_template_plan(&profile_with_goal(Goal::BuildMuscle));
        let json = serde_json::to_string(&plan).unwrap();
        let parsed: WorkoutPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, parsed);
    }
}
