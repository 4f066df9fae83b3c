//! Profile and plan persistence with file locking.
//!
//! The store keeps two JSON documents in the data directory: the user
//! profile (`profile.json`) and the current weekly plan (`plan.json`).
//! Writes are atomic (temp file plus rename); missing or corrupt files
//! load as `None` with a warning rather than failing.

use crate::types::{UserProfile, WorkoutPlan};
use crate::{Error, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const PROFILE_FILE: &str = "profile.json";
const PLAN_FILE: &str = "plan.json";

/// JSON document store rooted at the data directory
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join(PROFILE_FILE)
    }

    pub fn plan_path(&self) -> PathBuf {
        self.data_dir.join(PLAN_FILE)
    }

    /// Path of the session journal, kept alongside the documents
    pub fn journal_path(&self) -> PathBuf {
        self.data_dir.join("sessions.jsonl")
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        save_json(&self.profile_path(), profile)
    }

    /// Load the stored profile; `None` when absent or unreadable
    pub fn load_profile(&self) -> Result<Option<UserProfile>> {
        load_json(&self.profile_path())
    }

    pub fn save_plan(&self, plan: &WorkoutPlan) -> Result<()> {
        save_json(&self.plan_path(), plan)
    }

    /// Load the stored plan; `None` when absent or unreadable
    pub fn load_plan(&self) -> Result<Option<WorkoutPlan>> {
        load_json(&self.plan_path())
    }
}

/// Save a document atomically with an exclusive lock
///
/// 1. Write to a temp file in the same directory
/// 2. Sync to disk
/// 3. Rename over the original
fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::Other, "store path missing parent")
    })?)?;

    // Exclusive lock serializes concurrent writers
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string_pretty(value)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!("Saved {:?}", path);
    Ok(())
}

/// Load a document with a shared lock
///
/// Missing files, lock failures, and parse failures all come back as
/// `Ok(None)` with a warning; only hard I/O errors mid-read propagate.
fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!("Unable to open {:?}: {}", path, e);
            return Ok(None);
        }
    };

    if let Err(e) = file.lock_shared() {
        tracing::warn!("Unable to lock {:?}: {}", path, e);
        return Ok(None);
    }

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    if let Err(e) = reader.read_to_string(&mut contents) {
        let _ = file.unlock();
        tracing::warn!("Failed to read {:?}: {}", path, e);
        return Ok(None);
    }

    file.unlock()?;

    match serde_json::from_str::<T>(&contents) {
        Ok(value) => {
            tracing::debug!("Loaded {:?}", path);
            Ok(Some(value))
        }
        Err(e) => {
            tracing::warn!("Failed to parse {:?}: {}", path, e);
            Ok(None)
        }
    }
}
