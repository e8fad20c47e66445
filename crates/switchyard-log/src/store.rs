// SPDX-FileCopyrightText: 2026 Switchyard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-day JSONL interaction store.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::warn;

use switchyard_core::{InteractionRecord, SwitchyardError};

/// Append-only store of interaction records, one JSONL file per calendar day.
///
/// Each record is serialized and written as a single `write_all` call so that
/// concurrent appenders never interleave partial lines.
#[derive(Debug, Clone)]
pub struct InteractionLog {
    dir: PathBuf,
}

impl InteractionLog {
    /// Create a log rooted at the given directory. The directory is created
    /// lazily on first append.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the daily log files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Append one record to today's log file.
    pub fn append(&self, record: &InteractionRecord) -> Result<(), SwitchyardError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            SwitchyardError::Internal(format!(
                "failed to create log directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let file_name = format!("interactions_{}.jsonl", Local::now().format("%Y%m%d"));
        let path = self.dir.join(file_name);

        let mut line = serde_json::to_string(record)
            .map_err(|e| SwitchyardError::Internal(format!("failed to serialize record: {e}")))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                SwitchyardError::Internal(format!("failed to open {}: {e}", path.display()))
            })?;

        // One write call per record keeps concurrent appends line-atomic.
        file.write_all(line.as_bytes()).map_err(|e| {
            SwitchyardError::Internal(format!("failed to append to {}: {e}", path.display()))
        })
    }

    /// Count routing decisions across all stored days.
    ///
    /// Unparseable lines are skipped with a warning rather than aborting the
    /// aggregation. A missing log directory yields an empty map.
    pub fn routing_stats(&self) -> BTreeMap<String, usize> {
        let mut stats = BTreeMap::new();

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return stats,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name,
                None => continue,
            };
            if !name.starts_with("interactions_") || !name.ends_with(".jsonl") {
                continue;
            }
            let file = match fs::File::open(&path) {
                Ok(file) => file,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable log file");
                    continue;
                }
            };
            for line in BufReader::new(file).lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(_) => break,
                };
                match serde_json::from_str::<InteractionRecord>(&line) {
                    Ok(record) => {
                        *stats.entry(record.routing_decision).or_insert(0) += 1;
                    }
                    Err(_) => {
                        warn!(path = %path.display(), "skipping malformed log line");
                    }
                }
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(decision: &str) -> InteractionRecord {
        InteractionRecord {
            timestamp: "2026-08-29T12:00:00+00:00".into(),
            query: "test query".into(),
            routing_decision: decision.into(),
            tool_used: "Calculator".into(),
            response_length: 10,
            error: String::new(),
        }
    }

    #[test]
    fn append_creates_daily_file_with_one_line_per_record() {
        let tmp = TempDir::new().unwrap();
        let log = InteractionLog::new(tmp.path());

        log.append(&record("calculator")).unwrap();
        log.append(&record("web_search")).unwrap();

        let files: Vec<_> = fs::read_dir(tmp.path()).unwrap().flatten().collect();
        assert_eq!(files.len(), 1);
        let name = files[0].file_name().into_string().unwrap();
        assert!(name.starts_with("interactions_"), "got {name}");
        assert!(name.ends_with(".jsonl"));

        let content = fs::read_to_string(files[0].path()).unwrap();
        assert_eq!(content.lines().count(), 2);

        // Every line is a well-formed record with all fields present.
        for line in content.lines() {
            let parsed: InteractionRecord = serde_json::from_str(line).unwrap();
            assert!(!parsed.timestamp.is_empty());
            assert!(!parsed.routing_decision.is_empty());
        }
    }

    #[test]
    fn routing_stats_counts_across_files() {
        let tmp = TempDir::new().unwrap();
        let log = InteractionLog::new(tmp.path());

        // Simulate a previous day's file alongside today's appends.
        let old = tmp.path().join("interactions_20260101.jsonl");
        let old_line = serde_json::to_string(&record("general_chat")).unwrap();
        fs::write(&old, format!("{old_line}\n{old_line}\n")).unwrap();

        log.append(&record("calculator")).unwrap();
        log.append(&record("calculator")).unwrap();
        log.append(&record("web_search")).unwrap();

        let stats = log.routing_stats();
        assert_eq!(stats.get("calculator"), Some(&2));
        assert_eq!(stats.get("web_search"), Some(&1));
        assert_eq!(stats.get("general_chat"), Some(&2));
    }

    #[test]
    fn routing_stats_skips_malformed_lines() {
        let tmp = TempDir::new().unwrap();
        let log = InteractionLog::new(tmp.path());

        let path = tmp.path().join("interactions_20260102.jsonl");
        let good = serde_json::to_string(&record("math_solver")).unwrap();
        fs::write(&path, format!("{good}\nnot json at all\n{good}\n")).unwrap();

        let stats = log.routing_stats();
        assert_eq!(stats.get("math_solver"), Some(&2));
    }

    #[test]
    fn routing_stats_missing_dir_is_empty() {
        let log = InteractionLog::new("/nonexistent/switchyard-test-logs");
        assert!(log.routing_stats().is_empty());
    }

    #[test]
    fn routing_stats_ignores_unrelated_files() {
        let tmp = TempDir::new().unwrap();
        let log = InteractionLog::new(tmp.path());

        fs::write(tmp.path().join("notes.txt"), "hello").unwrap();
        log.append(&record("document_qa")).unwrap();

        let stats = log.routing_stats();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats.get("document_qa"), Some(&1));
    }
}
