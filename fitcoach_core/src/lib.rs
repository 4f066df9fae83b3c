#![forbid(unsafe_code)]

//! Core domain model and business logic for the FitCoach system.
//!
//! This crate provides:
//! - Domain types (profiles, plans, sessions, personas)
//! - Weekly plan synthesis (generative with template fallback)
//! - Session plan resolution (catalog lookup, scaling, substitution)
//! - Provider clients (text generation, video conversations)
//! - Persistence (profile/plan store, session journal)

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod session;
pub mod templates;
pub mod planner;
pub mod personas;
pub mod generative;
pub mod conversation;
pub mod store;
pub mod journal;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, WorkoutCatalog};
pub use config::Config;
pub use session::{format_session_plan, resolve_session};
pub use templates::build_template_plan;
pub use planner::{synthesize, PlanGenerator};
pub use personas::{conversation_context, conversation_name, persona};
pub use generative::GenerativeClient;
pub use conversation::{ConversationClient, ConversationResponse};
pub use store::Store;
pub use journal::{load_recent_records, Journal, RecordSink};
