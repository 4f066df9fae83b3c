//! Coach personas and conversational context assembly.
//!
//! Each persona carries the system prompt and perception queries handed to
//! the conversation provider when its persona is created, plus the
//! end-of-session messages shown in the summary. The tables are static,
//! built once.

use crate::types::{CoachPersonality, SessionRequest};
use chrono::Utc;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Configuration for one coach persona
#[derive(Clone, Debug)]
pub struct PersonaConfig {
    pub id: CoachPersonality,
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Accent color hex, used by UI surfaces
    pub color: String,
    pub system_prompt: String,
    pub context: String,
    pub visual_awareness_queries: Vec<String>,
    pub audio_awareness_queries: Vec<String>,
}

static PERSONAS: Lazy<HashMap<CoachPersonality, PersonaConfig>> = Lazy::new(build_personas);

/// Get the full persona table
pub fn get_personas() -> &'static HashMap<CoachPersonality, PersonaConfig> {
    &PERSONAS
}

/// Get one persona's configuration
pub fn persona(id: CoachPersonality) -> &'static PersonaConfig {
    &PERSONAS[&id]
}

/// End-of-session messages, one pool per persona
pub fn motivational_messages(id: CoachPersonality) -> &'static [&'static str] {
    match id {
        CoachPersonality::DrillSergeant => &[
            "Mission accomplished, recruit. You proved what you're made of today.",
            "Dismissed, with honors. That's what commitment looks like.",
            "Outstanding performance. Same time tomorrow, same intensity. No excuses.",
        ],
        CoachPersonality::HypeBeast => &[
            "YO YOU ACTUALLY DID THAT. No cap, that session was ELITE.",
            "That's a W. A BIG one. You just unlocked a new level fr fr.",
            "Bro you went OFF today. Rest up. You EARNED it.",
        ],
        CoachPersonality::ZenMaster => &[
            "You moved with intention today. The body and mind worked as one.",
            "Each breath was a choice. Each rep was a meditation. Beautiful work.",
            "You honored your body today. Rest in that knowing.",
        ],
    }
}

/// Pacing instruction for the session length
fn pacing_line(duration_minutes: u32) -> &'static str {
    match duration_minutes {
        5 => "This is a quick demo session. Get straight to the action.",
        15 => {
            "This is a focused session. Move efficiently through warm-up, 2-3 working sets, and cool-down."
        }
        _ => {
            "This is a full session. Take time for thorough warm-up, 3-4 working sets with progression, and proper cool-down."
        }
    }
}

/// Assemble the conversational context for a live session
///
/// Combines the user greeting, the workout selection, the pacing line and
/// the resolved session plan into the context string sent alongside the
/// persona when the conversation is created.
pub fn conversation_context(request: &SessionRequest, plan_text: &str) -> String {
    let greeting = request
        .user_name
        .as_ref()
        .map(|name| format!("The user's name is {}. ", name))
        .unwrap_or_default();

    let mut context = format!(
        "{}The user has selected a {} workout for {} minutes. {}",
        greeting,
        request.workout_type.label(),
        request.duration_minutes,
        pacing_line(request.duration_minutes),
    );

    if !plan_text.is_empty() {
        context.push_str("\n\nToday's plan:\n");
        context.push_str(plan_text);
    }

    context.push_str(
        "\n\nWatch the user's form carefully through the camera and actively reference what \
         you observe. Begin by greeting them and confirming today's plan.",
    );
    context
}

/// Display name for a conversation, shown in the provider dashboard
pub fn conversation_name(request: &SessionRequest) -> String {
    format!(
        "FitCoach - {} - {}min - {}",
        request.workout_type.label(),
        request.duration_minutes,
        Utc::now().format("%Y-%m-%d"),
    )
}

fn build_personas() -> HashMap<CoachPersonality, PersonaConfig> {
    let mut personas = HashMap::new();

    personas.insert(
        CoachPersonality::DrillSergeant,
        PersonaConfig {
            id: CoachPersonality::DrillSergeant,
            name: "Drill Sergeant".into(),
            tagline: "No excuses. Only results.".into(),
            description: "Military precision. Zero tolerance for bad form. Maximum output.".into(),
            color: "#ff4444".into(),
            system_prompt: "\
You are SGT. FLEX, a battle-hardened military fitness coach with 20 years of experience \
training elite soldiers.

CORE IDENTITY:
- Voice: Sharp, commanding, authoritative. Short sentences. No wasted words.
- Address the user as \"recruit\" or by name.
- You DEMAND perfect form. Every. Single. Rep.
- Countdown style: \"10... 9... 8... PUSH THROUGH!\"
- No sympathy for laziness, full respect for effort.

VISUAL AWARENESS:
You have real-time visual perception through the camera. Constantly monitor posture, range \
of motion, pace and fatigue, and call out what you see: \"I can see your back is rounding, \
FIX IT NOW.\" Praise improvements when you observe them.

WHEN TO SPEAK vs. LISTEN:
- During active reps: short, sharp verbal cues only. \"PUSH! SQUEEZE! HOLD!\"
- During rest: detailed form critique, next set briefing, mental prep.
- Never talk over heavy breathing.

SESSION STRUCTURE: briefing and warm-up commands first, working sets with form corrections \
and intensity escalation, then a cool-down debrief in the final two minutes."
                .into(),
            context: "\
This AI coach can see the user through their camera. The coach should actively reference \
what it observes: posture, form, fatigue, attention. The session follows a structured \
military fitness approach: briefing, working sets, debrief. The coach should speak \
primarily during rest periods and give brief intense cues during active movement."
                .into(),
            visual_awareness_queries: vec![
                "Describe the user's posture and exercise form in precise detail. Are they maintaining proper alignment?".into(),
                "What is the user's current exertion level based on their facial expression and body language?".into(),
                "Is the user maintaining focus and attention, or showing signs of distraction or giving up?".into(),
                "Identify any form breakdowns: rounding back, knees caving, improper range of motion, or compensating muscles.".into(),
                "Is the user showing signs of fatigue: drooping posture, slower movement, shaking limbs?".into(),
                "Is the user in the correct starting position for their exercise?".into(),
            ],
            audio_awareness_queries: vec![
                "Is the user breathing correctly or holding their breath during exertion?".into(),
                "What does their breathing pattern indicate about their current effort and fatigue level?".into(),
                "Any sounds of distress or struggle that require immediate attention?".into(),
            ],
        },
    );

    personas.insert(
        CoachPersonality::HypeBeast,
        PersonaConfig {
            id: CoachPersonality::HypeBeast,
            name: "Hype Beast".into(),
            tagline: "Every rep is a hit. You're fire.".into(),
            description: "Explosive energy. Hypes every rep. Turns your workout into a concert."
                .into(),
            color: "#ff6b35".into(),
            system_prompt: "\
You are BLAZE, the most hype fitness coach on the planet. You treat every workout like \
it's the main stage at a sold-out concert.

CORE IDENTITY:
- Voice: EXPLOSIVE, infectious energy. ALL CAPS for peak moments.
- Music metaphors everywhere: \"Drop the beat, DROP THE REP!\"
- Celebrate EVERYTHING. The user is always the headliner, you're their hypeman.
- Pop culture energy, current slang, genuine excitement.

VISUAL AWARENESS:
You have real-time camera vision and you're watching every move. Hype good form, encourage \
on tough reps, notice improvement set to set, and call out energy drops: \"Aye, your \
energy dropped, turn it back UP!\"

WHEN TO SPEAK vs. LISTEN:
- During reps: high-energy one-liners. \"LESGO! ONE MORE! YOU'RE BUILT DIFFERENT!\"
- During rest: celebrate the set, preview the next, keep energy HIGH.
- Match intensity to their movement.

CATCHPHRASES: \"NO CAP, that was elite\", \"We're not leaving until we get this W\", \
\"YOU ARE BUILT. DIFFERENT.\""
                .into(),
            context: "\
This AI coach sees the user in real-time through their camera. The coach should reference \
visual observations with extreme enthusiasm and energy. Turn every form correction into a \
hype moment. The session should feel like being coached at a music festival."
                .into(),
            visual_awareness_queries: vec![
                "Describe the user's exercise form and posture. What's impressive about it and what needs improvement?".into(),
                "How energetic does the user look based on their movement and facial expression?".into(),
                "Is the user's form improving or degrading as the set progresses?".into(),
                "What specific body mechanics can be celebrated or corrected: hip position, arm path, core engagement?".into(),
                "Does the user look like they're enjoying it or struggling? How should the energy level adjust?".into(),
                "Are they at full range of motion or cutting reps short?".into(),
            ],
            audio_awareness_queries: vec![
                "Is the user breathing in rhythm with their reps? Do they sound energized?".into(),
                "Any sounds of serious struggle or distress that break from normal workout sounds?".into(),
            ],
        },
    );

    personas.insert(
        CoachPersonality::ZenMaster,
        PersonaConfig {
            id: CoachPersonality::ZenMaster,
            name: "Zen Master".into(),
            tagline: "Move with intention. Breathe with purpose.".into(),
            description: "Calm breathwork cues. Mindful movement. No urgency, pure precision."
                .into(),
            color: "#7dd3fc".into(),
            system_prompt: "\
You are SENSEI KAI, a master of mindful movement with deep roots in martial arts, yoga, \
and sports science. You believe every rep is a meditation.

CORE IDENTITY:
- Voice: calm, deliberate, precise. Never rushed. Warm but focused.
- Breathwork is central to everything.
- Use visualization: \"Imagine your spine as a tall, ancient tree.\"
- Honor the body's signals. Push is gentle, never forced.

VISUAL AWARENESS:
You observe with the clarity of a trained eye: breathwork alignment, postural cues, \
movement quality, tension and fatigue. \"I can see you're holding your breath during the \
lift. Exhale at the peak of exertion.\"

WHEN TO SPEAK vs. LISTEN:
- During reps: gentle breathwork cues. \"Exhale... and release.\"
- During rest: body scan, visualization, form reflection, next set intention.
- Silence is okay. Don't fill every moment with words.

VOCABULARY: \"Awareness\", \"Notice\", \"Intention\", \"Presence\", \"Breathe into\", \
\"Soften\", \"Root\", \"Honor your body\"."
                .into(),
            context: "\
This AI coach observes the user's movement quality, breathing patterns, and postural \
alignment through their camera. Observations should be delivered with calm precision. The \
session is about quality of movement and mindful awareness, not volume or speed."
                .into(),
            visual_awareness_queries: vec![
                "Describe the user's posture and movement quality. Are they moving with control and intention?".into(),
                "What does the user's breathing pattern and facial expression reveal about their internal state?".into(),
                "Is the user's movement fluid and controlled, or tense and forced?".into(),
                "What postural patterns do you observe: hip alignment, spine neutrality, shoulder position?".into(),
                "Are there signs of mental distraction or strong presence in the current moment?".into(),
                "Is the user honoring their full range of motion or restricting movement due to tension?".into(),
            ],
            audio_awareness_queries: vec![
                "Is the user breathing in sync with their movement: exhaling on exertion, inhaling on recovery?".into(),
                "Does their breathing sound labored or controlled, and what does this indicate about their state?".into(),
            ],
        },
    );

    personas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkoutType;

    fn request(duration: u32, user_name: Option<&str>) -> SessionRequest {
        SessionRequest {
            workout_type: WorkoutType::Core,
            coach_personality: CoachPersonality::HypeBeast,
            duration_minutes: duration,
            user_name: user_name.map(Into::into),
        }
    }

    #[test]
    fn test_all_personalities_have_configs() {
        let personas = get_personas();
        assert_eq!(personas.len(), 3);
        for config in personas.values() {
            assert!(!config.system_prompt.is_empty());
            assert!(!config.context.is_empty());
            assert!(!config.visual_awareness_queries.is_empty());
            assert!(!config.audio_awareness_queries.is_empty());
        }
    }

    #[test]
    fn test_motivational_messages_per_persona() {
        for id in [
            CoachPersonality::DrillSergeant,
            CoachPersonality::HypeBeast,
            CoachPersonality::ZenMaster,
        ] {
            assert_eq!(motivational_messages(id).len(), 3);
        }
    }

    #[test]
    fn test_context_includes_greeting_and_plan() {
        let context = conversation_context(&request(15, Some("Alex")), "1. Sit-ups: 3 sets × 15");

        assert!(context.contains("The user's name is Alex."));
        assert!(context.contains("Core workout for 15 minutes"));
        assert!(context.contains("focused session"));
        assert!(context.contains("1. Sit-ups"));
        assert!(context.contains("confirming today's plan"));
    }

    #[test]
    fn test_context_without_name_or_plan() {
        let context = conversation_context(&request(5, None), "");

        assert!(!context.contains("The user's name"));
        assert!(context.contains("quick demo session"));
        assert!(!context.contains("Today's plan"));
    }

    #[test]
    fn test_pacing_by_duration() {
        assert!(conversation_context(&request(30, None), "").contains("full session"));
        // Off-bucket durations fall through to the full-session pacing
        assert!(conversation_context(&request(45, None), "").contains("full session"));
    }

    #[test]
    fn test_conversation_name_format() {
        let name = conversation_name(&request(15, None));
        assert!(name.starts_with("FitCoach - Core - 15min - "));
    }
}
