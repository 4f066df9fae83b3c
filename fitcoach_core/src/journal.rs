//! Session journal.
//!
//! Completed coaching sessions are appended to a JSONL file with file
//! locking so concurrent invocations cannot interleave lines. Reads
//! tolerate bad lines and skip them.

use crate::types::SessionRecord;
use crate::Result;
use chrono::{Duration, Utc};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Record sink trait for persisting finished sessions
pub trait RecordSink {
    fn append(&mut self, record: &SessionRecord) -> Result<()>;
}

/// JSONL-based journal with file locking
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl RecordSink for Journal {
    fn append(&mut self, record: &SessionRecord) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut writer = std::io::BufWriter::new(&file);
        let line = serde_json::to_string(record)?;
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        file.unlock()?;

        tracing::debug!("Appended session {} to journal", record.id);
        Ok(())
    }
}

/// Read all records from a journal file
pub fn read_records(path: &Path) -> Result<Vec<SessionRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let reader = BufReader::new(&file);
    let mut records = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<SessionRecord>(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Failed to parse journal line {}: {}", line_num + 1, e);
            }
        }
    }

    file.unlock()?;
    tracing::debug!("Read {} records from journal", records.len());
    Ok(records)
}

/// Load records from the last N days, newest first
pub fn load_recent_records(path: &Path, days: i64) -> Result<Vec<SessionRecord>> {
    let cutoff = Utc::now() - Duration::days(days);

    let mut records: Vec<_> = read_records(path)?
        .into_iter()
        .filter(|r| r.started_at >= cutoff)
        .collect();

    records.sort_by(|a, b| b.started_at.cmp(&a.started_at));

    tracing::info!(
        "Loaded {} sessions from last {} days",
        records.len(),
        days
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CoachPersonality, WorkoutType};
    use uuid::Uuid;

    fn test_record(workout_type: WorkoutType, days_ago: i64) -> SessionRecord {
        SessionRecord {
            id: Uuid::new_v4(),
            workout_type,
            personality: CoachPersonality::HypeBeast,
            duration_minutes: 15,
            elapsed_seconds: Some(900),
            started_at: Utc::now() - Duration::days(days_ago),
        }
    }

    #[test]
    fn test_append_and_read() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sessions.jsonl");

        let record = test_record(WorkoutType::Core, 0);
        let id = record.id;

        let mut journal = Journal::new(&path);
        journal.append(&record).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
    }

    #[test]
    fn test_recent_window_filters_old_records() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sessions.jsonl");

        let mut journal = Journal::new(&path);
        journal.append(&test_record(WorkoutType::Core, 1)).unwrap();
        journal
            .append(&test_record(WorkoutType::FullBody, 3))
            .unwrap();
        journal
            .append(&test_record(WorkoutType::Stretch, 10))
            .unwrap();

        let records = load_recent_records(&path, 7).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_records_sorted_newest_first() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sessions.jsonl");

        let mut journal = Journal::new(&path);
        journal
            .append(&test_record(WorkoutType::Stretch, 5))
            .unwrap();
        journal.append(&test_record(WorkoutType::Core, 1)).unwrap();

        let records = load_recent_records(&path, 7).unwrap();
        assert_eq!(records[0].workout_type, WorkoutType::Core);
        assert_eq!(records[1].workout_type, WorkoutType::Stretch);
    }

    #[test]
    fn test_bad_lines_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("sessions.jsonl");

        let mut journal = Journal::new(&path);
        journal.append(&test_record(WorkoutType::Core, 0)).unwrap();

        // Corrupt the file with a garbage line and append another record
        {
            let mut file = OpenOptions::new().append(true).open(&path).unwrap();
            writeln!(file, "not json").unwrap();
        }
        journal
            .append(&test_record(WorkoutType::FullBody, 0))
            .unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_read_missing_journal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.jsonl");

        assert!(read_records(&path).unwrap().is_empty());
    }
}
