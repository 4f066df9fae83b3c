//! Plan synthesizer.
//!
//! `synthesize` never fails visibly: when the generative path is missing or
//! anything in it goes wrong (network, non-2xx, unparseable output) the
//! deterministic template builder takes over. Errors from the generative
//! path are fully absorbed here.

use crate::templates::build_template_plan;
use crate::types::{Equipment, UserProfile, WorkoutPlan};
use crate::Result;

/// Seam between the synthesizer and the text-generation provider
///
/// Implemented by the HTTP client and by test stubs.
pub trait PlanGenerator {
    fn generate_plan(&self, profile: &UserProfile) -> Result<WorkoutPlan>;
}

/// Produce a weekly plan for a profile, always
///
/// One attempt against the generator when available; any failure routes to
/// the template builder with no retry and no backoff. A successfully parsed
/// generative plan is used verbatim.
pub fn synthesize(profile: &UserProfile, generator: Option<&dyn PlanGenerator>) -> WorkoutPlan {
    let Some(generator) = generator else {
        tracing::info!("No text-generation credential configured, using template plan");
        return build_template_plan(profile);
    };

    match generator.generate_plan(profile) {
        Ok(plan) => {
            tracing::info!("Generated plan '{}' via provider", plan.title);
            plan
        }
        Err(e) => {
            tracing::warn!("Plan generation failed ({}), falling back to template", e);
            build_template_plan(profile)
        }
    }
}

/// Slice out the JSON object spanning the first `{` to the last `}`
///
/// Provider responses wrap the object in prose or markdown fences; anything
/// outside the outermost braces is discarded.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Build the trainer prompt sent to the text-generation provider
pub fn build_plan_prompt(profile: &UserProfile) -> String {
    let goal_descriptions = profile
        .goals
        .iter()
        .map(|g| g.description())
        .collect::<Vec<_>>()
        .join(", ");

    let equipment_list = if profile.equipment.contains(&Equipment::FullGym) {
        "full gym access (all equipment)".to_string()
    } else if profile.equipment.contains(&Equipment::None) {
        "no equipment (bodyweight only)".to_string()
    } else {
        let items = profile
            .equipment
            .iter()
            .map(|e| e.id())
            .collect::<Vec<_>>()
            .join(", ");
        format!("limited equipment: {}", items)
    };

    format!(
        r#"You are an expert personal trainer. Create a personalized weekly workout plan for this person.

USER PROFILE:
- Name: {name}
- Age: {age}
- Fitness Level: {level}
- Goals: {goals}
- Equipment: {equipment}
- Preferred session duration: {duration} minutes

Return a JSON object with exactly this structure (no markdown, just valid JSON):
{{
  "title": "Personalized plan title for {name}",
  "summary": "2-3 sentence personalized summary of the plan and why it suits them",
  "weekly_schedule": [
    {{
      "day": "Monday",
      "focus": "Upper Body Strength",
      "exercises": [
        {{ "name": "Push-Ups", "sets": 3, "reps": "10-15", "rest": "60s", "notes": "Keep core tight" }}
      ],
      "duration": 30,
      "intensity": "moderate"
    }}
  ],
  "focus_areas": ["Core Strength", "Cardiovascular Endurance"],
  "tips": ["Tip 1 specific to their situation", "Tip 2"],
  "first_session_recommendation": {{
    "workout_type": "full-body",
    "personality": "hype-beast",
    "duration": 15,
    "reason": "Why this first session makes sense for them"
  }}
}}

REQUIREMENTS:
- Create a 5-day plan (Mon-Fri) with 2 rest days (Sat-Sun shown as rest)
- Match intensity and exercises to their fitness level
- Respect their equipment constraints
- Choose workout_type from: upper-body, lower-body, core, full-body, stretch
- Choose personality from: drill-sergeant, hype-beast, zen-master
- Make exercises realistic and achievable
- The first_session_recommendation should be the best intro session"#,
        name = profile.name,
        age = profile.age,
        level = profile.fitness_level.id(),
        goals = goal_descriptions,
        equipment = equipment_list,
        duration = profile.preferred_duration.minutes(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FitnessLevel, Goal, SessionDuration};
    use crate::Error;

    fn test_profile() -> UserProfile {
        UserProfile {
            name: "Jordan".into(),
            age: 35,
            fitness_level: FitnessLevel::Beginner,
            goals: vec![Goal::BuildMuscle, Goal::StressRelief],
            equipment: vec![Equipment::None],
            preferred_duration: SessionDuration::Fifteen,
        }
    }

    struct FailingGenerator;

    impl PlanGenerator for FailingGenerator {
        fn generate_plan(&self, _profile: &UserProfile) -> Result<WorkoutPlan> {
            Err(Error::Provider("simulated outage".into()))
        }
    }

    struct FixedGenerator(WorkoutPlan);

    impl PlanGenerator for FixedGenerator {
        fn generate_plan(&self, _profile: &UserProfile) -> Result<WorkoutPlan> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_no_generator_uses_template() {
        let plan = synthesize(&test_profile(), None);

        assert_eq!(plan.weekly_schedule.len(), 7);
        assert_eq!(
            plan.weekly_schedule
                .iter()
                .filter(|d| d.is_rest_day())
                .count(),
            2
        );
    }

    #[test]
    fn test_generator_failure_falls_back() {
        let plan = synthesize(&test_profile(), Some(&FailingGenerator));

        // build-muscle is the first goal, so the fallback template applies
        assert!(plan.title.contains("Muscle Building"));
    }

    #[test]
    fn test_generated_plan_used_verbatim() {
        let mut canned = crate::templates::build_template_plan(&test_profile());
        canned.title = "Custom Provider Plan".into();

        let plan = synthesize(&test_profile(), Some(&FixedGenerator(canned.clone())));
        assert_eq!(plan, canned);
    }

    #[test]
    fn test_extract_json_object() {
        assert_eq!(
            extract_json_object("Here you go:\n```json\n{\"a\": 1}\n```"),
            Some("{\"a\": 1}")
        );
        assert_eq!(extract_json_object("{\"a\": {\"b\": 2}}"), Some("{\"a\": {\"b\": 2}}"));
        assert_eq!(extract_json_object("no braces here"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
    }

    #[test]
    fn test_prompt_mentions_profile_details() {
        let prompt = build_plan_prompt(&test_profile());

        assert!(prompt.contains("Jordan"));
        assert!(prompt.contains("beginner"));
        assert!(prompt.contains("no equipment (bodyweight only)"));
        assert!(prompt.contains("increase muscle mass and strength"));
        assert!(prompt.contains("15 minutes"));
    }

    #[test]
    fn test_prompt_equipment_phrasing() {
        let mut profile = test_profile();
        profile.equipment = vec![Equipment::Dumbbells, Equipment::PullUpBar];
        let prompt = build_plan_prompt(&profile);
        assert!(prompt.contains("limited equipment: dumbbells, pull-up-bar"));

        profile.equipment = vec![Equipment::FullGym];
        let prompt = build_plan_prompt(&profile);
        assert!(prompt.contains("full gym access"));
    }
}
