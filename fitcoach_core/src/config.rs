//! Configuration file support for FitCoach.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitcoach/config.toml`.
//! Provider credentials can also come from the environment
//! (`FITCOACH_API_KEY`, `FITCOACH_VIDEO_API_KEY`), which takes precedence
//! over the file.

use crate::types::CoachPersonality;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub generative: GenerativeConfig,

    #[serde(default)]
    pub video: VideoConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Text-generation provider configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerativeConfig {
    /// Absent key means the template path is used; not an error
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_generative_api_base")]
    pub api_base: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_generative_api_base(),
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

/// Video conversation provider configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VideoConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_video_api_base")]
    pub api_base: String,

    #[serde(default = "default_replica_id")]
    pub replica_id: String,

    #[serde(default)]
    pub personas: PersonaIds,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_video_api_base(),
            replica_id: default_replica_id(),
            personas: PersonaIds::default(),
        }
    }
}

/// Provider-side persona ids, one per coach personality
///
/// Populated after the personas have been created with the provider.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct PersonaIds {
    #[serde(default)]
    pub drill_sergeant: Option<String>,

    #[serde(default)]
    pub hype_beast: Option<String>,

    #[serde(default)]
    pub zen_master: Option<String>,
}

impl PersonaIds {
    pub fn get(&self, personality: CoachPersonality) -> Option<&str> {
        match personality {
            CoachPersonality::DrillSergeant => self.drill_sergeant.as_deref(),
            CoachPersonality::HypeBeast => self.hype_beast.as_deref(),
            CoachPersonality::ZenMaster => self.zen_master.as_deref(),
        }
    }

    pub fn set(&mut self, personality: CoachPersonality, id: String) {
        match personality {
            CoachPersonality::DrillSergeant => self.drill_sergeant = Some(id),
            CoachPersonality::HypeBeast => self.hype_beast = Some(id),
            CoachPersonality::ZenMaster => self.zen_master = Some(id),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("fitcoach")
}

fn default_generative_api_base() -> String {
    "https://api.anthropic.com".into()
}

fn default_model() -> String {
    "claude-sonnet-4-5".into()
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_video_api_base() -> String {
    "https://tavusapi.com/v2".into()
}

fn default_replica_id() -> String {
    "r79e1c033f".into()
}

impl Config {
    /// Load configuration from the standard config path
    ///
    /// Missing file is not an error: defaults apply. Environment credentials
    /// override whatever the file had.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("FITCOACH_API_KEY") {
            if !key.is_empty() {
                self.generative.api_key = Some(key);
            }
        }
        if let Ok(key) = std::env::var("FITCOACH_VIDEO_API_KEY") {
            if !key.is_empty() {
                self.video.api_key = Some(key);
            }
        }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("fitcoach").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.generative.api_key.is_none());
        assert!(config.video.api_key.is_none());
        assert_eq!(config.generative.max_tokens, 2000);
        assert_eq!(config.video.api_base, "https://tavusapi.com/v2");
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.generative.api_key = Some("test-key".into());
        config.video.personas.zen_master = Some("p12345".into());

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.generative.api_key.as_deref(), Some("test-key"));
        assert_eq!(
            parsed.video.personas.get(CoachPersonality::ZenMaster),
            Some("p12345")
        );
        assert_eq!(parsed.video.personas.get(CoachPersonality::HypeBeast), None);
    }

    #[test]
    fn test_persona_ids_set_then_get() {
        let mut ids = PersonaIds::default();
        ids.set(CoachPersonality::DrillSergeant, "p1".into());
        ids.set(CoachPersonality::HypeBeast, "p2".into());

        assert_eq!(ids.get(CoachPersonality::DrillSergeant), Some("p1"));
        assert_eq!(ids.get(CoachPersonality::HypeBeast), Some("p2"));
        assert_eq!(ids.get(CoachPersonality::ZenMaster), None);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[generative]
model = "other-model"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generative.model, "other-model");
        assert_eq!(config.generative.max_tokens, 2000); // default
    }
}
