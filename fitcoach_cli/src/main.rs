use clap::{Parser, Subcommand};
use fitcoach_core::*;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "fitcoach")]
#[command(about = "Personal workout planning and coaching sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a profile and synthesize a weekly workout plan
    Onboard {
        /// Your first name
        #[arg(long)]
        name: String,

        /// Your age in years
        #[arg(long)]
        age: u32,

        /// Fitness level: beginner, intermediate, advanced
        #[arg(long, default_value = "beginner")]
        level: String,

        /// Training goal (repeatable): weight-loss, build-muscle,
        /// improve-endurance, increase-flexibility, stress-relief,
        /// general-fitness
        #[arg(long, required = true)]
        goal: Vec<String>,

        /// Available equipment (repeatable): none, dumbbells,
        /// resistance-bands, pull-up-bar, kettlebell, yoga-mat, full-gym
        #[arg(long, required = true)]
        equipment: Vec<String>,

        /// Preferred session length in minutes: 5, 15 or 30
        #[arg(long, default_value_t = 15)]
        duration: u32,
    },

    /// Show the current weekly plan
    Plan {
        /// Build a fresh plan from the stored profile
        #[arg(long)]
        regenerate: bool,
    },

    /// Resolve a coaching session plan and optionally start a video coach
    Session {
        /// Workout type: upper-body, lower-body, core, full-body, stretch
        #[arg(long, default_value = "full-body")]
        workout_type: String,

        /// Session length in minutes
        #[arg(long, default_value_t = 15)]
        duration: u32,

        /// Coach personality: drill-sergeant, hype-beast, zen-master
        #[arg(long, default_value = "hype-beast")]
        personality: String,

        /// Show the session plan without contacting the video provider
        #[arg(long)]
        dry_run: bool,

        /// Record the session in the journal
        #[arg(long)]
        log: bool,
    },

    /// End an active video conversation
    End {
        /// Conversation id returned when the session started
        conversation_id: String,
    },

    /// Show the coach persona definitions
    Personas {
        /// Include system prompts and perception queries
        #[arg(long)]
        full: bool,
    },

    /// Create the coach personas with the video provider and store their ids
    SetupPersonas,

    /// Show recent coaching sessions
    History {
        /// How many days back to look
        #[arg(long, default_value_t = 7)]
        days: i64,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    fitcoach_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let store = Store::new(&data_dir);

    match cli.command {
        Commands::Onboard {
            name,
            age,
            level,
            goal,
            equipment,
            duration,
        } => cmd_onboard(&store, &config, name, age, level, goal, equipment, duration),
        Commands::Plan { regenerate } => cmd_plan(&store, &config, regenerate),
        Commands::Session {
            workout_type,
            duration,
            personality,
            dry_run,
            log,
        } => cmd_session(
            &store,
            &config,
            &workout_type,
            duration,
            &personality,
            dry_run,
            log,
        ),
        Commands::End { conversation_id } => cmd_end(&config, &conversation_id),
        Commands::Personas { full } => cmd_personas(full),
        Commands::SetupPersonas => cmd_setup_personas(&config),
        Commands::History { days } => cmd_history(&store, days),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_onboard(
    store: &Store,
    config: &Config,
    name: String,
    age: u32,
    level: String,
    goals: Vec<String>,
    equipment: Vec<String>,
    duration: u32,
) -> Result<()> {
    let fitness_level = FitnessLevel::from_str(&level)?;
    let goals = goals
        .iter()
        .map(|g| Goal::from_str(g))
        .collect::<Result<Vec<_>>>()?;
    let equipment = equipment
        .iter()
        .map(|e| Equipment::from_str(e))
        .collect::<Result<Vec<_>>>()?;
    let preferred_duration = SessionDuration::try_from(duration)?;

    let profile = UserProfile {
        name,
        age,
        fitness_level,
        goals,
        equipment,
        preferred_duration,
    };
    profile.validate()?;

    let generator = GenerativeClient::from_config(&config.generative);
    let plan = synthesize(
        &profile,
        generator.as_ref().map(|g| g as &dyn PlanGenerator),
    );

    store.save_profile(&profile)?;
    store.save_plan(&plan)?;

    println!("✓ Profile saved for {}", profile.name);
    println!();
    display_plan(&plan);

    Ok(())
}

fn cmd_plan(store: &Store, config: &Config, regenerate: bool) -> Result<()> {
    let Some(profile) = store.load_profile()? else {
        println!("No profile found. Run 'fitcoach onboard' first.");
        return Ok(());
    };

    let plan = if regenerate {
        let generator = GenerativeClient::from_config(&config.generative);
        let plan = synthesize(
            &profile,
            generator.as_ref().map(|g| g as &dyn PlanGenerator),
        );
        store.save_plan(&plan)?;
        println!("✓ Plan regenerated");
        println!();
        plan
    } else {
        match store.load_plan()? {
            Some(plan) => plan,
            None => {
                // Stored plan missing; rebuild from the profile
                let generator = GenerativeClient::from_config(&config.generative);
                let plan = synthesize(
                    &profile,
                    generator.as_ref().map(|g| g as &dyn PlanGenerator),
                );
                store.save_plan(&plan)?;
                plan
            }
        }
    };

    display_plan(&plan);
    Ok(())
}

fn cmd_session(
    store: &Store,
    config: &Config,
    workout_type: &str,
    duration: u32,
    personality: &str,
    dry_run: bool,
    log: bool,
) -> Result<()> {
    let workout_type = WorkoutType::parse_or_full_body(workout_type);
    let personality = CoachPersonality::parse_or_hype_beast(personality);

    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    // Session scaling follows the stored profile; without one, assume a
    // beginner with no equipment
    let profile = store.load_profile()?;
    let (fitness_level, has_pull_up_bar, user_name) = match &profile {
        Some(p) => (p.fitness_level, p.has_pull_up_bar(), Some(p.name.clone())),
        None => (FitnessLevel::Beginner, false, None),
    };

    let exercises = resolve_session(catalog, workout_type, duration, fitness_level, has_pull_up_bar);
    if exercises.is_empty() {
        println!("No exercises available for this workout type.");
        return Ok(());
    }

    let request = SessionRequest {
        workout_type,
        coach_personality: personality,
        duration_minutes: duration,
        user_name,
    };

    let plan_text = format_session_plan(&exercises);

    display_session(&request, &plan_text);

    if dry_run {
        println!("\n[Dry run - not starting a conversation]");
        return Ok(());
    }

    match ConversationClient::from_config(&config.video) {
        Some(client) => {
            let conversation = client.create(
                personality,
                &personas::conversation_name(&request),
                &personas::conversation_context(&request, &plan_text),
            )?;
            println!("✓ Coach is ready!");
            println!("  Join: {}", conversation.conversation_url);
            println!("  End later with: fitcoach end {}", conversation.conversation_id);
        }
        None => {
            println!("No video API key configured; session plan shown above.");
        }
    }

    if log {
        let record = SessionRecord {
            id: uuid::Uuid::new_v4(),
            workout_type,
            personality,
            duration_minutes: duration,
            elapsed_seconds: None,
            started_at: chrono::Utc::now(),
        };
        let mut journal = Journal::new(store.journal_path());
        journal.append(&record)?;
        println!("\n✓ Session logged!");

        let messages = personas::motivational_messages(personality);
        let pick = record.started_at.timestamp() as usize % messages.len();
        println!("  {}", messages[pick]);
    }

    Ok(())
}

fn cmd_personas(full: bool) -> Result<()> {
    for id in [
        CoachPersonality::DrillSergeant,
        CoachPersonality::HypeBeast,
        CoachPersonality::ZenMaster,
    ] {
        let config = personas::persona(id);
        println!("{} ({})", config.name, id.id());
        println!("  {}", config.tagline);
        println!("  {}", config.description);

        if full {
            println!();
            println!("  System prompt:");
            for line in config.system_prompt.lines() {
                println!("    {}", line);
            }
            println!();
            println!("  Context: {}", config.context);
            println!();
            println!("  Visual awareness queries:");
            for query in &config.visual_awareness_queries {
                println!("    - {}", query);
            }
            println!("  Audio awareness queries:");
            for query in &config.audio_awareness_queries {
                println!("    - {}", query);
            }
        }
        println!();
    }

    Ok(())
}

fn cmd_setup_personas(config: &Config) -> Result<()> {
    let Some(client) = ConversationClient::from_config(&config.video) else {
        return Err(Error::Config(
            "No video API key configured; set FITCOACH_VIDEO_API_KEY or [video] api_key".into(),
        ));
    };

    let mut updated = config.clone();
    for id in [
        CoachPersonality::DrillSergeant,
        CoachPersonality::HypeBeast,
        CoachPersonality::ZenMaster,
    ] {
        let persona = personas::persona(id);
        let persona_id = client.create_persona(persona)?;
        println!("✓ Created {}: {}", persona.name, persona_id);
        updated.video.personas.set(id, persona_id);
    }

    updated.save()?;
    println!();
    println!(
        "✓ Persona ids saved to {}",
        Config::default_config_path().display()
    );

    Ok(())
}

fn cmd_end(config: &Config, conversation_id: &str) -> Result<()> {
    let Some(client) = ConversationClient::from_config(&config.video) else {
        return Err(Error::Config(
            "No video API key configured; set FITCOACH_VIDEO_API_KEY or [video] api_key".into(),
        ));
    };

    client.end(conversation_id)?;
    println!("✓ Conversation ended");
    Ok(())
}

fn cmd_history(store: &Store, days: i64) -> Result<()> {
    let records = load_recent_records(&store.journal_path(), days)?;

    if records.is_empty() {
        println!("No sessions in the last {} days.", days);
        return Ok(());
    }

    println!("Sessions in the last {} days:", days);
    println!();
    for record in &records {
        println!(
            "  {}  {:<18} {:<15} {} min",
            record.started_at.format("%Y-%m-%d %H:%M"),
            record.workout_type.label(),
            record.personality.label(),
            record.duration_minutes,
        );
    }
    println!();
    println!("  {} session(s) total", records.len());

    Ok(())
}

fn display_plan(plan: &WorkoutPlan) {
    println!("╭─────────────────────────────────────────╮");
    println!("│  WEEKLY PLAN");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}", plan.title);
    println!("  {}", plan.summary);
    println!();

    for day in &plan.weekly_schedule {
        if day.is_rest_day() {
            println!("  {:<10} {}", day.day, day.focus);
            continue;
        }

        println!(
            "  {:<10} {} ({} min, {:?} intensity)",
            day.day,
            day.focus,
            day.duration,
            day.intensity
        );
        for exercise in &day.exercises {
            let mut line = format!("    → {}", exercise.name);
            if let (Some(sets), Some(reps)) = (exercise.sets, &exercise.reps) {
                line.push_str(&format!(": {} × {}", sets, reps));
            }
            println!("{}", line);
        }
    }

    println!();
    println!("  Focus areas: {}", plan.focus_areas.join(", "));
    for tip in &plan.tips {
        println!("  ℹ {}", tip);
    }

    let first = &plan.first_session_recommendation;
    println!();
    println!(
        "  First session: {} with the {} for {} minutes",
        first.workout_type.label(),
        first.personality.label(),
        first.duration.minutes()
    );
    println!("  {}", first.reason);
}

fn display_session(request: &SessionRequest, plan_text: &str) {
    println!("╭─────────────────────────────────────────╮");
    println!("│  {} SESSION", request.workout_type.label().to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!(
        "  Coach: {} · {} minutes",
        request.coach_personality.label(),
        request.duration_minutes
    );
    println!();
    for line in plan_text.lines() {
        println!("  {}", line);
    }
}
